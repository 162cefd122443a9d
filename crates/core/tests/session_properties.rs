//! Property tests over arbitrary sequences of user actions.

use proptest::prelude::*;
use spotportal::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Select(usize),
    SelectStranger,
    Back,
    Reload,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..3).prop_map(Action::Select),
        Just(Action::SelectStranger),
        Just(Action::Back),
        Just(Action::Reload),
    ]
}

fn controller() -> ViewController {
    ViewController::new(PortalConfig::builtin().into_catalog().unwrap())
}

fn apply(view: &mut ViewController, action: &Action) {
    match action {
        Action::Select(idx) => {
            let game = view.other_games()[*idx].clone();
            view.select_game(&game).unwrap();
        }
        Action::SelectStranger => {
            let stranger = Game::new(999, "Stranger", "https://elsewhere.test/");
            let _ = view.select_game(&stranger);
        }
        Action::Back => view.return_to_default(),
        Action::Reload => view.reload_current(),
    }
}

proptest! {
    #[test]
    fn offered_games_never_change(actions in prop::collection::vec(action(), 0..40)) {
        let mut view = controller();
        let offered = view.other_games().to_vec();
        for a in &actions {
            apply(&mut view, a);
            prop_assert_eq!(view.other_games(), offered.as_slice());
        }
    }

    #[test]
    fn rendered_source_always_matches_selection(actions in prop::collection::vec(action(), 0..40)) {
        let mut view = controller();
        for a in &actions {
            apply(&mut view, a);
            let expected = match view.selection() {
                Selection::Default => view.catalog().main().content_source.clone(),
                Selection::Selected(id) => {
                    let game = view.catalog().get(id);
                    prop_assert!(game.is_some(), "selected id must be in the catalog");
                    prop_assert!(!view.catalog().is_main(id));
                    game.unwrap().content_source.clone()
                }
            };
            prop_assert_eq!(view.rendered_source(), expected.as_str());
        }
    }

    #[test]
    fn reload_preserves_selection(actions in prop::collection::vec(action(), 0..40)) {
        let mut view = controller();
        for a in &actions {
            apply(&mut view, a);
        }
        let selection = view.selection();
        let source = view.rendered_source().to_string();
        let generation = view.frame().generation;

        view.reload_current();
        prop_assert_eq!(view.selection(), selection);
        prop_assert_eq!(view.rendered_source(), source.as_str());
        prop_assert!(view.frame().generation > generation);
    }

    #[test]
    fn back_always_lands_on_default(actions in prop::collection::vec(action(), 0..40)) {
        let mut view = controller();
        for a in &actions {
            apply(&mut view, a);
        }
        view.return_to_default();
        let once = (view.selection(), view.frame().clone());
        view.return_to_default();
        prop_assert_eq!(view.selection(), Selection::Default);
        prop_assert_eq!((view.selection(), view.frame().clone()), once);
    }
}

#[test]
fn scenario_select_then_back() {
    let mut view = controller();
    let main_src = view.catalog().main().content_source.clone();
    assert_eq!(view.rendered_source(), main_src);

    let jigsaw = view.other_games()[1].clone();
    view.select_game(&jigsaw).unwrap();
    assert_eq!(view.rendered_source(), jigsaw.content_source);
    assert_eq!(view.selection(), Selection::Selected(jigsaw.id));

    view.return_to_default();
    assert_eq!(view.rendered_source(), main_src);
}
