//! Which game is on screen, and the bookkeeping for the frame showing it.
//!
//! Selection is a two-state machine (`Default` / `Selected(id)`). The frame
//! state is orthogonal: every change of displayed content and every reload
//! starts a new *generation*. A renderer keys its embedded frame on
//! `(rendered_source, generation)`, so a new generation means a fresh frame
//! that refetches its source from scratch.

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::SelectError;
use crate::game::{Game, GameId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// The main game is shown.
    #[default]
    Default,
    /// A non-main catalog entry is shown.
    Selected(GameId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FrameStatus {
    #[default]
    Loading,
    Loaded,
    Failed {
        reason: String,
    },
}

impl FrameStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, FrameStatus::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameState {
    pub generation: u64,
    pub status: FrameStatus,
}

#[derive(Debug, Clone)]
pub struct ViewController {
    catalog: Catalog,
    selection: Selection,
    frame: FrameState,
}

impl ViewController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::Default,
            frame: FrameState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn frame(&self) -> &FrameState {
        &self.frame
    }

    pub fn is_showing_main(&self) -> bool {
        self.selection == Selection::Default
    }

    /// The game whose content is currently embedded.
    pub fn current_game(&self) -> &Game {
        match self.selection {
            Selection::Default => self.catalog.main(),
            // Selected ids are only ever set from catalog entries.
            Selection::Selected(id) => self.catalog.get(id).unwrap_or(self.catalog.main()),
        }
    }

    pub fn rendered_source(&self) -> &str {
        &self.current_game().content_source
    }

    /// Games offered as cards. Always the full non-main list in catalog order.
    pub fn other_games(&self) -> &[Game] {
        self.catalog.others()
    }

    /// Shows `game` in place of the main game.
    ///
    /// `game` must be one of the catalog's records; anything else is rejected
    /// and the state is left as it was. Selecting the main game is the same as
    /// [`return_to_default`](Self::return_to_default).
    pub fn select_game(&mut self, game: &Game) -> Result<(), SelectError> {
        if !self.catalog.contains(game) {
            warn!(target: "spotportal", id = %game.id, title = %game.title, "rejected selection of unknown game");
            return Err(SelectError::UnknownGame(game.id));
        }
        self.select_known(game.id);
        Ok(())
    }

    pub fn select_by_id(&mut self, id: GameId) -> Result<(), SelectError> {
        if self.catalog.get(id).is_none() {
            warn!(target: "spotportal", id = %id, "rejected selection of unknown game id");
            return Err(SelectError::UnknownGame(id));
        }
        self.select_known(id);
        Ok(())
    }

    fn select_known(&mut self, id: GameId) {
        if self.catalog.is_main(id) {
            self.return_to_default();
            return;
        }
        let next = Selection::Selected(id);
        if self.selection == next {
            return;
        }
        debug!(target: "spotportal", from = ?self.selection, to = ?next, "selection changed");
        self.selection = next;
        self.start_new_frame();
    }

    pub fn return_to_default(&mut self) {
        if self.selection == Selection::Default {
            return;
        }
        debug!(target: "spotportal", from = ?self.selection, "returning to main game");
        self.selection = Selection::Default;
        self.start_new_frame();
    }

    /// Forces the embedded content to be fetched again. Selection and the
    /// rendered source are unchanged; only the frame generation moves.
    pub fn reload_current(&mut self) {
        self.start_new_frame();
        debug!(
            target: "spotportal",
            selection = ?self.selection,
            generation = self.frame.generation,
            "reloading frame"
        );
    }

    /// Records that the frame of `generation` finished loading. Returns false
    /// for a stale generation.
    pub fn mark_loaded(&mut self, generation: u64) -> bool {
        if generation != self.frame.generation {
            return false;
        }
        self.frame.status = FrameStatus::Loaded;
        true
    }

    /// Records that the frame of `generation` failed to load. Ignored for a
    /// stale generation or a frame that already loaded.
    pub fn mark_failed(&mut self, generation: u64, reason: impl Into<String>) -> bool {
        if generation != self.frame.generation || self.frame.status == FrameStatus::Loaded {
            return false;
        }
        let reason = reason.into();
        warn!(
            target: "spotportal",
            source = %self.rendered_source(),
            generation,
            %reason,
            "embedded content failed to load"
        );
        self.frame.status = FrameStatus::Failed { reason };
        true
    }

    fn start_new_frame(&mut self) {
        self.frame.generation = self.frame.generation.wrapping_add(1);
        self.frame.status = FrameStatus::Loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const U0: &str = "https://games.test/adventure";
    const U1: &str = "https://games.test/g1";
    const U2: &str = "https://games.test/g2";

    fn scenario() -> ViewController {
        let main = Game::new(0, "Adventure", U0);
        let others = vec![Game::new(1, "G1", U1), Game::new(2, "G2", U2)];
        ViewController::new(Catalog::new(main, others).unwrap())
    }

    fn g(view: &ViewController, idx: usize) -> Game {
        view.other_games()[idx].clone()
    }

    #[test]
    fn starts_on_main_game() {
        let view = scenario();
        assert_eq!(view.selection(), Selection::Default);
        assert_eq!(view.rendered_source(), U0);
        assert_eq!(view.frame().status, FrameStatus::Loading);
    }

    #[test]
    fn select_then_return_swaps_source() {
        let mut view = scenario();
        let g2 = g(&view, 1);
        view.select_game(&g2).unwrap();
        assert_eq!(view.selection(), Selection::Selected(GameId(2)));
        assert_eq!(view.rendered_source(), U2);

        view.return_to_default();
        assert_eq!(view.selection(), Selection::Default);
        assert_eq!(view.rendered_source(), U0);
    }

    #[test]
    fn reload_keeps_selection_and_source() {
        let mut view = scenario();
        let g1 = g(&view, 0);
        view.select_game(&g1).unwrap();
        let before = view.frame().generation;

        view.reload_current();
        assert_eq!(view.selection(), Selection::Selected(GameId(1)));
        assert_eq!(view.rendered_source(), U1);
        assert_eq!(view.frame().generation, before + 1);
    }

    #[test]
    fn reload_on_main_game_reloads_main() {
        let mut view = scenario();
        view.reload_current();
        assert_eq!(view.selection(), Selection::Default);
        assert_eq!(view.rendered_source(), U0);
        assert_eq!(view.frame().generation, 1);
    }

    #[test]
    fn unknown_game_is_rejected_without_state_change() {
        let mut view = scenario();
        let g1 = g(&view, 0);
        view.select_game(&g1).unwrap();
        let frame = view.frame().clone();

        let stranger = Game::new(99, "Stranger", "https://elsewhere.test/");
        assert_eq!(
            view.select_game(&stranger),
            Err(SelectError::UnknownGame(GameId(99)))
        );
        // Same id as a catalog entry but a different record.
        let impostor = Game::new(2, "G2", "https://elsewhere.test/");
        assert!(view.select_game(&impostor).is_err());
        assert!(view.select_by_id(GameId(42)).is_err());

        assert_eq!(view.selection(), Selection::Selected(GameId(1)));
        assert_eq!(view.frame(), &frame);
    }

    #[test]
    fn repeated_transitions_are_idempotent() {
        let mut view = scenario();
        view.return_to_default();
        assert_eq!(view.frame().generation, 0);

        let g2 = g(&view, 1);
        view.select_game(&g2).unwrap();
        let generation = view.frame().generation;
        view.select_game(&g2).unwrap();
        assert_eq!(view.selection(), Selection::Selected(GameId(2)));
        assert_eq!(view.frame().generation, generation);

        view.return_to_default();
        let generation = view.frame().generation;
        view.return_to_default();
        assert_eq!(view.selection(), Selection::Default);
        assert_eq!(view.frame().generation, generation);
    }

    #[test]
    fn selecting_main_game_returns_to_default() {
        let mut view = scenario();
        view.select_by_id(GameId(1)).unwrap();
        let main = view.catalog().main().clone();
        view.select_game(&main).unwrap();
        assert_eq!(view.selection(), Selection::Default);
        assert_eq!(view.rendered_source(), U0);
    }

    #[test]
    fn offered_games_do_not_depend_on_selection() {
        let mut view = scenario();
        let before = view.other_games().to_vec();
        view.select_by_id(GameId(2)).unwrap();
        assert_eq!(view.other_games(), before.as_slice());
        view.reload_current();
        view.return_to_default();
        assert_eq!(view.other_games(), before.as_slice());
    }

    #[test]
    fn stale_load_reports_are_ignored() {
        let mut view = scenario();
        let first = view.frame().generation;
        view.select_by_id(GameId(1)).unwrap();

        assert!(!view.mark_loaded(first));
        assert!(!view.mark_failed(first, "timeout"));
        assert_eq!(view.frame().status, FrameStatus::Loading);

        let current = view.frame().generation;
        assert!(view.mark_loaded(current));
        assert_eq!(view.frame().status, FrameStatus::Loaded);
    }

    #[test]
    fn failure_after_load_is_ignored_but_late_load_recovers() {
        let mut view = scenario();
        let generation = view.frame().generation;

        assert!(view.mark_loaded(generation));
        assert!(!view.mark_failed(generation, "timeout"));
        assert_eq!(view.frame().status, FrameStatus::Loaded);

        view.reload_current();
        let generation = view.frame().generation;
        assert!(view.mark_failed(generation, "timeout"));
        assert!(view.frame().status.is_failed());
        assert_eq!(view.selection(), Selection::Default);

        assert!(view.mark_loaded(generation));
        assert_eq!(view.frame().status, FrameStatus::Loaded);
    }

    #[test]
    fn reload_clears_failure() {
        let mut view = scenario();
        view.select_by_id(GameId(2)).unwrap();
        let generation = view.frame().generation;
        view.mark_failed(generation, "blocked");

        view.reload_current();
        assert_eq!(view.frame().status, FrameStatus::Loading);
        assert_eq!(view.selection(), Selection::Selected(GameId(2)));
    }
}
