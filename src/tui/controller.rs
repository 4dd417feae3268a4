use crate::game::Command;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map one key press onto the app. Returns true when the session should close.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return quit(app);
    }
    if app.help_open() || app.history_open() || app.log_open() {
        match code {
            KeyCode::Up if app.history_open() => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down if app.history_open() => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc => app.close_overlays(),
            KeyCode::Char('?') => {
                let _ = app.handle_input(InputAction::ToggleHelp);
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                let _ = app.handle_input(InputAction::ToggleLog);
            }
            _ => {}
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_') => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            _ => {}
        },
        Scene::Table => {
            let action = match code {
                KeyCode::Esc => return quit(app),
                KeyCode::Char(' ') | KeyCode::Enter => InputAction::Deal,
                KeyCode::Char('h') | KeyCode::Char('H') => InputAction::Play(Command::Hit),
                KeyCode::Char('s') | KeyCode::Char('S') => InputAction::Play(Command::Stand),
                KeyCode::Char('d') | KeyCode::Char('D') => InputAction::Play(Command::Double),
                KeyCode::Char('p') | KeyCode::Char('P') => InputAction::Play(Command::Split),
                KeyCode::Char('t') | KeyCode::Char('T') => InputAction::Play(Command::ShowHint),
                KeyCode::Char('a') | KeyCode::Char('A') => InputAction::ToggleAutoHint,
                KeyCode::Char('m') | KeyCode::Char('M') => InputAction::ToggleMenu,
                KeyCode::Char('?') => InputAction::ToggleHelp,
                KeyCode::Char('l') | KeyCode::Char('L') => InputAction::ToggleHistory,
                KeyCode::Char('g') | KeyCode::Char('G') => InputAction::ToggleLog,
                KeyCode::Char(_) => InputAction::Play(Command::Invalid),
                _ => return false,
            };
            let _ = app.handle_input(action);
        }
    }
    false
}

/// Cancel refunds whatever is still in play; a finished session just closes.
fn quit(app: &mut AppState) -> bool {
    if !app.game.is_over() {
        if let Err(e) = app.game.cancel() {
            log::warn!("cancel failed: {e}");
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::Deck;
    use crate::game::{Game, Phase, SessionEnd, TableConfig};

    fn table_app(cards: &str) -> AppState {
        let config = TableConfig::default().with_seed(21).with_reshuffle_below(0);
        let mut app = AppState::new(config.clone());
        app.game = Game::with_deck(config, Deck::stacked(parse_cards(cards).unwrap()));
        app.apply_menu();
        app
    }

    #[test]
    fn space_deals_and_escape_refunds() {
        // 9 + 7 against a 10: the hand waits for a decision.
        let mut app = table_app("9h 10c 7d 6s");
        assert!(!handle_key(&mut app, KeyCode::Char(' ')));
        assert_eq!(app.game.phase(), Phase::PlayerTurn);
        assert_eq!(app.game.balance(), 90);
        assert!(handle_key(&mut app, KeyCode::Esc));
        assert_eq!(app.game.phase(), Phase::SessionOver(SessionEnd::Cancelled));
        assert_eq!(app.game.balance(), 100);
    }

    #[test]
    fn unknown_letter_is_reported() {
        let mut app = table_app("9h 10c 7d 6s");
        let _ = handle_key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game.active_hand(), Some(0));
        let _ = handle_key(&mut app, KeyCode::Char('z'));
        assert!(app.action_error().is_some());
        assert_eq!(app.game.active_hand(), Some(0));
        assert_eq!(app.game.hands()[0].hand().len(), 2);
    }

    #[test]
    fn hit_and_stand_keys_play_the_hand() {
        let mut app = table_app("9h 10c 2d 6s 3c 5h");
        let _ = handle_key(&mut app, KeyCode::Char(' '));
        let _ = handle_key(&mut app, KeyCode::Char('h'));
        assert_eq!(app.game.hands()[0].hand().value(), 14);
        let _ = handle_key(&mut app, KeyCode::Char('S'));
        assert_eq!(app.game.phase(), Phase::RoundOver);
        assert_eq!(app.game.dealer_hand().value(), 21);
        assert_eq!(app.game.balance(), 90);
    }

    #[test]
    fn escape_closes_overlay_before_quitting() {
        let mut app = table_app("9h 10c 7d 6s");
        let _ = handle_key(&mut app, KeyCode::Char('?'));
        assert!(app.help_open());
        assert!(!handle_key(&mut app, KeyCode::Esc));
        assert!(!app.help_open());
        assert!(!app.game.is_over());
    }
}
