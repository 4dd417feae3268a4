use crate::game::Phase;

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Bankroll,
    Bet,
    AutoHint,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Bankroll, MenuItem::Bet, MenuItem::AutoHint];

const BANKROLL_STEP: u64 = 50;
const BET_STEP: u64 = 5;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Bankroll => format!("Starting Bankroll: ${}", app.cfg_bankroll),
            MenuItem::Bet => format!("Bet per Round: ${}", app.cfg_bet),
            MenuItem::AutoHint => {
                format!("Auto Hint: {}", if app.cfg_auto_hint { "On" } else { "Off" })
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Bankroll => {
                app.cfg_bankroll = app.cfg_bankroll.saturating_add(BANKROLL_STEP);
            }
            MenuItem::Bet => {
                app.cfg_bet = app.cfg_bet.saturating_add(BET_STEP);
                if app.cfg_bankroll < app.cfg_bet {
                    app.cfg_bankroll = app.cfg_bet;
                }
            }
            MenuItem::AutoHint => app.cfg_auto_hint = !app.cfg_auto_hint,
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Bankroll => {
                app.cfg_bankroll = app.cfg_bankroll.saturating_sub(BANKROLL_STEP).max(app.cfg_bet);
            }
            MenuItem::Bet => {
                app.cfg_bet = app.cfg_bet.saturating_sub(BET_STEP).max(1);
            }
            MenuItem::AutoHint => app.cfg_auto_hint = !app.cfg_auto_hint,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_overlays();
        match self.scene {
            Scene::Menu => self.scene = Scene::Table,
            _ => self.open_menu(),
        }
    }

    pub fn open_menu(&mut self) {
        self.close_overlays();
        self.menu_index = 0;
        self.cfg_bankroll = self.game.config().starting_bankroll;
        self.cfg_bet = self.game.config().bet;
        self.cfg_auto_hint = self.auto_hint;
        self.scene = Scene::Menu;
    }

    /// Apply the edited settings. Table changes start a fresh session, which is
    /// only allowed between rounds.
    pub fn apply_menu(&mut self) {
        if self.cfg_bet == 0 {
            self.cfg_bet = 1;
        }
        if self.cfg_bankroll < self.cfg_bet {
            self.cfg_bankroll = self.cfg_bet;
        }
        self.auto_hint = self.cfg_auto_hint;
        self.scene = Scene::Table;

        let config =
            self.game.config().clone().with_bankroll(self.cfg_bankroll).with_bet(self.cfg_bet);
        if &config == self.game.config() {
            return;
        }
        if self.game.phase() == Phase::PlayerTurn {
            self.flash("finish the current round before changing the table");
            return;
        }
        self.replace_game(config);
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
