//! # spotportal
//!
//! View state for a small game portal: one main game embedded in a frame and a
//! fixed list of other games that can be swapped in.
//!
//! Gameplay itself lives in externally hosted content. This crate only decides
//! *which* content source is shown, tracks loads of the embedded frame, and
//! produces the site's structured metadata. Nothing here touches a DOM, so the
//! whole model is unit-tested on the host.
//!
//! ## Quick Start
//!
//! ```
//! use spotportal::prelude::*;
//!
//! let catalog = PortalConfig::builtin().into_catalog().unwrap();
//! let mut view = ViewController::new(catalog);
//! assert!(view.is_showing_main());
//!
//! let memory = view.other_games()[0].clone();
//! view.select_game(&memory).unwrap();
//! assert_eq!(view.rendered_source(), memory.content_source);
//!
//! view.reload_current();
//! view.return_to_default();
//! assert_eq!(view.selection(), Selection::Default);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): filesystem loading of config files
//!
//! ## Modules
//!
//! - [`game`]: the `Game` record and its id
//! - [`catalog`]: validated, immutable set of games
//! - [`controller`]: selection state machine and frame load tracking
//! - [`metadata`]: JSON-LD site metadata and its scoped attachment guard
//! - [`config`]: JSON config loading and the bundled catalog
//! - [`error`]: error types

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod metadata;

/// Prelude module for convenient imports.
///
/// ```
/// use spotportal::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::config::{FrameConfig, PortalConfig};
    pub use crate::controller::{FrameState, FrameStatus, Selection, ViewController};
    pub use crate::error::{CatalogError, ConfigError, MetadataError, SelectError};
    pub use crate::game::{Game, GameId};
    pub use crate::metadata::{AttachedMetadata, MetadataSink, SiteMetadata};
}
