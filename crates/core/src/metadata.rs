//! schema.org site metadata and the guard that keeps it attached to a
//! document while the page is running.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::MetadataError;

pub const JSON_LD_MIME: &str = "application/ld+json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_url")]
    pub url: String,
    /// Search URL with a `{search_term_string}` placeholder. `None` drops the
    /// search action from the payload.
    #[serde(default)]
    pub search_url_template: Option<String>,
}

fn default_name() -> String {
    "Spot the Difference Games".to_string()
}

fn default_description() -> String {
    "Play exciting spot the difference games online! Find hidden differences in pictures."
        .to_string()
}

fn default_url() -> String {
    "https://yourdomain.com/".to_string()
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            url: default_url(),
            search_url_template: None,
        }
    }
}

impl SiteMetadata {
    pub fn to_json_ld(&self) -> Value {
        let mut doc = json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": self.name,
            "description": self.description,
            "url": self.url,
        });
        if let Some(target) = &self.search_url_template {
            doc["potentialAction"] = json!({
                "@type": "SearchAction",
                "target": target,
                "query-input": "required name=search_term_string",
            });
        }
        doc
    }

    /// Attaches the JSON-LD payload to `sink` for as long as the returned
    /// guard lives.
    pub fn attach<S: MetadataSink>(&self, sink: S) -> Result<AttachedMetadata<S>, MetadataError> {
        let payload = self.to_json_ld().to_string();
        let handle = sink.attach(&payload)?;
        debug!(target: "spotportal", bytes = payload.len(), "site metadata attached");
        Ok(AttachedMetadata {
            sink,
            handle: Some(handle),
        })
    }
}

/// Somewhere metadata can be attached to and later removed from, e.g. a
/// document head.
pub trait MetadataSink {
    type Handle;

    fn attach(&self, payload: &str) -> Result<Self::Handle, MetadataError>;

    fn detach(&self, handle: Self::Handle);
}

impl<S: MetadataSink + ?Sized> MetadataSink for &S {
    type Handle = S::Handle;

    fn attach(&self, payload: &str) -> Result<Self::Handle, MetadataError> {
        (**self).attach(payload)
    }

    fn detach(&self, handle: Self::Handle) {
        (**self).detach(handle)
    }
}

/// Holds an attached payload and detaches it exactly once, on drop or on
/// [`detach_now`](Self::detach_now).
pub struct AttachedMetadata<S: MetadataSink> {
    sink: S,
    handle: Option<S::Handle>,
}

impl<S: MetadataSink> AttachedMetadata<S> {
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    pub fn detach_now(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.sink.detach(handle);
            debug!(target: "spotportal", "site metadata detached");
        }
    }
}

impl<S: MetadataSink> Drop for AttachedMetadata<S> {
    fn drop(&mut self) {
        self.release();
    }
}
