use crate::game::{ActionError, Command, Game, Phase, TableConfig};
use crate::strategy::Advice;
use crate::tui::logger::LogBuffer;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    ToggleLog,
    ToggleAutoHint,
    HistoryUp,
    HistoryDown,
    Deal,
    Play(Command),
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_bankroll: u64,
    pub cfg_bet: u64,
    pub cfg_auto_hint: bool,
    pub auto_hint: bool,
    logs: Option<LogBuffer>,
    last_hint: Option<Advice>,
    help_open: bool,
    history_open: bool,
    log_open: bool,
    history_offset: usize,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(config: TableConfig) -> Self {
        Self {
            scene: Scene::Menu,
            menu_index: 0,
            cfg_bankroll: config.starting_bankroll,
            cfg_bet: config.bet,
            cfg_auto_hint: false,
            auto_hint: false,
            game: Game::new(config),
            logs: None,
            last_hint: None,
            help_open: false,
            history_open: false,
            log_open: false,
            history_offset: 0,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn with_logs(mut self, logs: LogBuffer) -> Self {
        self.logs = Some(logs);
        self
    }

    pub fn logs(&self) -> Option<&LogBuffer> {
        self.logs.as_ref()
    }

    pub(crate) fn replace_game(&mut self, config: TableConfig) {
        self.game = Game::new(config);
        self.last_hint = None;
        self.history_offset = 0;
        self.clear_action_error();
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn log_open(&self) -> bool {
        self.log_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_overlays(&mut self) {
        self.help_open = false;
        self.history_open = false;
        self.log_open = false;
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn set_action_error(&mut self, err: &ActionError) {
        self.flash(err.to_string());
    }

    /// Show a short-lived message on the status line.
    pub(crate) fn flash(&mut self, message: impl Into<String>) {
        self.action_error = Some(message.into());
        self.action_error_at = Some(Instant::now());
    }

    /// Advice on screen: the last requested hint, or a live one with auto-hint on.
    pub fn hint(&self) -> Option<Advice> {
        if self.auto_hint {
            return self.game.advice();
        }
        self.last_hint.filter(|_| self.game.active_hand().is_some())
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    let open = !self.help_open;
                    self.close_overlays();
                    self.help_open = open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    let open = !self.history_open;
                    self.close_overlays();
                    if open {
                        self.history_offset = 0;
                    }
                    self.history_open = open;
                }
                false
            }
            InputAction::ToggleLog => {
                if self.scene == Scene::Table {
                    let open = !self.log_open;
                    self.close_overlays();
                    self.log_open = open;
                }
                false
            }
            InputAction::ToggleAutoHint => {
                self.auto_hint = !self.auto_hint;
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Deal => self.scene == Scene::Table && self.deal(),
            InputAction::Play(command) => self.scene == Scene::Table && self.play(command),
        }
    }

    pub fn deal(&mut self) -> bool {
        if !matches!(self.game.phase(), Phase::Betting | Phase::RoundOver) {
            return false;
        }
        self.last_hint = None;
        self.history_offset = 0;
        match self.game.deal_round() {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(&err);
                false
            }
        }
    }

    /// Forward one command to the table. Refused commands only set the error line.
    pub fn play(&mut self, command: Command) -> bool {
        let result = match command {
            Command::ShowHint => self.game.hint().map(|advice| {
                self.last_hint = Some(advice);
            }),
            other => self.game.apply(other),
        };
        match result {
            Ok(()) => {
                if command != Command::ShowHint {
                    self.last_hint = None;
                }
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(&err);
                false
            }
        }
    }

    /// Expire stale error messages.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
