use std::collections::HashSet;

use crate::error::CatalogError;
use crate::game::{Game, GameId};

/// The static set of games: one main game plus an ordered list of others.
///
/// Built once through [`Catalog::new`], which enforces the invariants below.
/// There is no mutating API.
/// - every title and content source is non-empty
/// - every content source is an absolute http(s) URL
/// - ids are unique across the main game and the others
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    main: Game,
    others: Vec<Game>,
}

impl Catalog {
    pub fn new(main: Game, others: Vec<Game>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(others.len() + 1);
        for game in std::iter::once(&main).chain(others.iter()) {
            validate_game(game)?;
            if !seen.insert(game.id) {
                return Err(CatalogError::DuplicateId(game.id));
            }
        }
        Ok(Self { main, others })
    }

    pub fn main(&self) -> &Game {
        &self.main
    }

    /// Non-main games in their configured order.
    pub fn others(&self) -> &[Game] {
        &self.others
    }

    pub fn len(&self) -> usize {
        self.others.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, id: GameId) -> Option<&Game> {
        if self.main.id == id {
            return Some(&self.main);
        }
        self.others.iter().find(|g| g.id == id)
    }

    /// True when `game` is exactly one of the catalog's records, not just a
    /// record that happens to share an id.
    pub fn contains(&self, game: &Game) -> bool {
        self.get(game.id).is_some_and(|g| g == game)
    }

    pub fn is_main(&self, id: GameId) -> bool {
        self.main.id == id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        std::iter::once(&self.main).chain(self.others.iter())
    }
}

fn validate_game(game: &Game) -> Result<(), CatalogError> {
    if game.title.trim().is_empty() {
        return Err(CatalogError::EmptyTitle(game.id));
    }
    let source = game.content_source.trim();
    if source.is_empty() {
        return Err(CatalogError::EmptySource(game.id));
    }
    if !(source.starts_with("https://") || source.starts_with("http://")) {
        return Err(CatalogError::InvalidSource {
            id: game.id,
            source_url: game.content_source.clone(),
        });
    }
    Ok(())
}
