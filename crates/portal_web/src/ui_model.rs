//! UI models that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test what
//! the page shows for each controller state on the host.

use spotportal::controller::{FrameStatus, Selection, ViewController};
use spotportal::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortalView {
    /// Main game, card grid and About copy.
    #[default]
    Main,
    /// A non-main game with the Restart/Back actions.
    Playing,
}

impl PortalView {
    pub fn for_selection(selection: Selection) -> Self {
        match selection {
            Selection::Default => PortalView::Main,
            Selection::Selected(_) => PortalView::Playing,
        }
    }

    /// Restart and Back only make sense while away from the main game.
    pub fn shows_topbar_actions(self) -> bool {
        matches!(self, PortalView::Playing)
    }

    pub fn shows_catalog(self) -> bool {
        matches!(self, PortalView::Main)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Puzzle,
    Memory,
    Educational,
    Other,
}

impl CategoryIcon {
    pub fn for_category(category: &str) -> Self {
        match category.trim().to_ascii_lowercase().as_str() {
            "puzzle" => CategoryIcon::Puzzle,
            "memory" => CategoryIcon::Memory,
            "educational" => CategoryIcon::Educational,
            _ => CategoryIcon::Other,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CategoryIcon::Puzzle => "🧩",
            CategoryIcon::Memory => "🧠",
            CategoryIcon::Educational => "📚",
            CategoryIcon::Other => "🎲",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTone {
    Easy,
    Medium,
    Hard,
    Unrated,
}

impl DifficultyTone {
    pub fn for_difficulty(difficulty: &str) -> Self {
        match difficulty.trim().to_ascii_lowercase().as_str() {
            "easy" => DifficultyTone::Easy,
            "medium" => DifficultyTone::Medium,
            "hard" => DifficultyTone::Hard,
            _ => DifficultyTone::Unrated,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            DifficultyTone::Easy => "badge difficulty easy",
            DifficultyTone::Medium => "badge difficulty medium",
            DifficultyTone::Hard => "badge difficulty hard",
            DifficultyTone::Unrated => "badge difficulty",
        }
    }
}

/// One "Play Now!" card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    pub game: Game,
    pub icon: &'static str,
    pub difficulty_class: &'static str,
}

impl GameCard {
    pub fn new(game: &Game) -> Self {
        Self {
            game: game.clone(),
            icon: CategoryIcon::for_category(&game.category).icon(),
            difficulty_class: DifficultyTone::for_difficulty(&game.difficulty).badge_class(),
        }
    }
}

pub fn game_cards(view: &ViewController) -> Vec<GameCard> {
    view.other_games().iter().map(GameCard::new).collect()
}

/// What the frame area renders, snapshotted from the controller after every
/// action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub view: PortalView,
    pub game: Game,
    pub generation: u64,
    pub status: FrameStatus,
}

impl FrameView {
    pub fn from_controller(view: &ViewController) -> Self {
        Self {
            view: PortalView::for_selection(view.selection()),
            game: view.current_game().clone(),
            generation: view.frame().generation,
            status: view.frame().status.clone(),
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.status {
            FrameStatus::Failed { reason } => Some(reason.as_str()),
            _ => None,
        }
    }
}

/// Identity of one embedded frame. A change means a fresh `<iframe>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedKey {
    pub source: String,
    pub title: String,
    pub generation: u64,
}

impl From<&FrameView> for EmbedKey {
    fn from(f: &FrameView) -> Self {
        Self {
            source: f.game.content_source.clone(),
            title: f.game.title.clone(),
            generation: f.generation,
        }
    }
}
