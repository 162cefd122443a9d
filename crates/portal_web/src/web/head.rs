use spotportal::error::MetadataError;
use spotportal::metadata::{MetadataSink, JSON_LD_MIME};

/// Attaches payloads as `<script type="application/ld+json">` children of
/// `document.head`.
pub(super) struct HeadScriptSink;

impl MetadataSink for HeadScriptSink {
    type Handle = web_sys::Element;

    fn attach(&self, payload: &str) -> Result<web_sys::Element, MetadataError> {
        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| MetadataError::Attach("no document".to_string()))?;
        let head = doc
            .head()
            .ok_or_else(|| MetadataError::Attach("document has no <head>".to_string()))?;

        let script = doc
            .create_element("script")
            .map_err(|_| MetadataError::Attach("create_element() threw".to_string()))?;
        script
            .set_attribute("type", JSON_LD_MIME)
            .map_err(|_| MetadataError::Attach("set_attribute() threw".to_string()))?;
        script.set_text_content(Some(payload));
        head.append_child(&script)
            .map_err(|_| MetadataError::Attach("append_child() threw".to_string()))?;
        Ok(script)
    }

    fn detach(&self, handle: web_sys::Element) {
        handle.remove();
    }
}
