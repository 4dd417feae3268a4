use blackjack_rs::cards::parse_cards;
use blackjack_rs::deck::Deck;
use blackjack_rs::game::{Command, Game, Phase, TableConfig};
use blackjack_rs::strategy::Move;
use blackjack_rs::tui::app::{AppState, InputAction, Scene};

fn stacked_table_app(cards: &str) -> AppState {
    let config = TableConfig::default().with_seed(8).with_reshuffle_below(0);
    let mut app = AppState::new(config.clone());
    app.game = Game::with_deck(config, Deck::stacked(parse_cards(cards).unwrap()));
    app.apply_menu();
    app
}

fn setup_table_app() -> AppState {
    let mut app = AppState::new(TableConfig::default().with_seed(8));
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn help_history_and_log_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleLog);
    assert!(!app.history_open());
    assert!(app.log_open());
    let _ = app.handle_input(InputAction::ToggleLog);
    assert!(!app.log_open());
}

#[test]
fn deal_then_stand_until_round_over() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::Deal));
    assert_eq!(app.game.rounds_played() + usize::from(app.game.phase() == Phase::PlayerTurn), 1);
    while app.game.active_hand().is_some() {
        assert!(app.handle_input(InputAction::Play(Command::Stand)));
    }
    assert!(matches!(app.game.phase(), Phase::RoundOver | Phase::SessionOver(_)));
    assert_eq!(app.game.rounds_played(), 1);
}

#[test]
fn hint_is_shown_until_the_next_action() {
    // 9 + 7 against a 10; the dealer's 16 draws a 5.
    let mut app = stacked_table_app("9h 10c 7d 6s 5c");
    assert!(app.handle_input(InputAction::Deal));
    assert_eq!(app.game.active_hand(), Some(0));
    assert!(app.hint().is_none());

    assert!(app.handle_input(InputAction::Play(Command::ShowHint)));
    assert_eq!(app.hint().map(|a| a.action), Some(Move::Hit));
    assert_eq!(app.hint(), app.game.advice());

    assert!(app.handle_input(InputAction::Play(Command::Stand)));
    assert_eq!(app.game.phase(), Phase::RoundOver);
    assert!(app.hint().is_none());
    assert_eq!(app.game.balance(), 90);
}

#[test]
fn auto_hint_tracks_the_active_hand() {
    let mut app = stacked_table_app("8h 10c 8d 6s 3c 9d");
    let _ = app.handle_input(InputAction::ToggleAutoHint);
    let _ = app.handle_input(InputAction::Deal);
    assert_eq!(app.hint().map(|a| a.action), Some(Move::Split));
    assert!(app.handle_input(InputAction::Play(Command::Split)));
    // 8 + 3 against a 10 doubles.
    assert_eq!(app.hint().map(|a| a.action), Some(Move::Double));
}

#[test]
fn history_scrolls_within_bounds() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::Deal);
    let _ = app.handle_input(InputAction::ToggleHistory);
    let _ = app.handle_input(InputAction::HistoryDown);
    assert_eq!(app.history_offset(), 0);
    for _ in 0..5 {
        let _ = app.handle_input(InputAction::HistoryUp);
    }
    let max = app.game.history_len().saturating_sub(AppState::HISTORY_PAGE_SIZE);
    assert!(app.history_offset() <= max);
}
