use thiserror::Error;

use crate::game::GameId;

/// Catalog construction failures. The catalog is never built in a state that
/// violates one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("game {0} has an empty title")]
    EmptyTitle(GameId),
    #[error("game {0} has an empty content source")]
    EmptySource(GameId),
    #[error("game {id} has a content source that is not an http(s) URL: {source_url}")]
    InvalidSource { id: GameId, source_url: String },
    #[error("game id {0} is used more than once")]
    DuplicateId(GameId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("game {0} is not in the catalog")]
    UnknownGame(GameId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("failed to attach site metadata: {0}")]
    Attach(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}
