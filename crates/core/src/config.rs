use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::game::Game;
use crate::metadata::SiteMetadata;

const BUILTIN_CONFIG: &str = include_str!("../assets/portal.json");

/// Everything the portal needs at startup: site metadata, the game catalog
/// and how the embedded frame behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub site: SiteMetadata,
    pub main_game: Game,
    #[serde(default)]
    pub other_games: Vec<Game>,
    #[serde(default)]
    pub frame: FrameConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// How long a frame may take to fire its load event before it is reported
    /// as failed.
    #[serde(default = "default_load_timeout_ms")]
    pub load_timeout_ms: u32,
    #[serde(default = "default_true")]
    pub allow_fullscreen: bool,
}

fn default_load_timeout_ms() -> u32 {
    15_000
}

fn default_true() -> bool {
    true
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            load_timeout_ms: default_load_timeout_ms(),
            allow_fullscreen: true,
        }
    }
}

impl FrameConfig {
    pub fn load_timeout_ms(&self) -> u32 {
        self.load_timeout_ms.clamp(1_000, 120_000)
    }
}

impl PortalConfig {
    /// The catalog bundled with the crate.
    pub fn builtin() -> Self {
        // The bundled file is covered by tests; a parse failure here is a build defect.
        Self::from_json_str(BUILTIN_CONFIG).expect("bundled portal.json is valid")
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[cfg(feature = "std")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Validates the games into a [`Catalog`].
    pub fn into_catalog(self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::new(self.main_game, self.other_games)?)
    }

    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        self.clone().into_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::game::GameId;

    #[test]
    fn builtin_config_is_a_valid_catalog() {
        let cfg = PortalConfig::builtin();
        assert_eq!(cfg.frame, FrameConfig::default());
        assert!(cfg.site.search_url_template.is_some());

        let catalog = cfg.into_catalog().unwrap();
        assert_eq!(catalog.main().title, "Spot the Difference Adventure");
        let titles: Vec<&str> = catalog.others().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Memory Match Game", "Jigsaw Puzzle Fun", "Color Matching Game"]
        );
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let raw = r#"{"main_game": {"id": 1, "title": "Only", "content_source": "https://a.test/"}}"#;
        let cfg = PortalConfig::from_json_str(raw).unwrap();
        assert_eq!(cfg.site, SiteMetadata::default());
        assert!(cfg.other_games.is_empty());
        assert_eq!(cfg.frame.load_timeout_ms(), 15_000);
        assert!(cfg.frame.allow_fullscreen);
    }

    #[test]
    fn timeout_is_clamped() {
        let frame = FrameConfig {
            load_timeout_ms: 5,
            allow_fullscreen: false,
        };
        assert_eq!(frame.load_timeout_ms(), 1_000);
        let frame = FrameConfig {
            load_timeout_ms: u32::MAX,
            allow_fullscreen: false,
        };
        assert_eq!(frame.load_timeout_ms(), 120_000);
    }

    #[test]
    fn invalid_catalog_surfaces_as_config_error() {
        let raw = r#"{
            "main_game": {"id": 1, "title": "A", "content_source": "https://a.test/"},
            "other_games": [{"id": 1, "title": "B", "content_source": "https://b.test/"}]
        }"#;
        let err = PortalConfig::from_json_str(raw)
            .unwrap()
            .into_catalog()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Catalog(CatalogError::DuplicateId(GameId(1)))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PortalConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
