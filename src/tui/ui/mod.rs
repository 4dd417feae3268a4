mod layout;
mod menu;
mod overlay;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => {
            table::draw_table(f, app);
            // At most one overlay is open at a time.
            if app.help_open() {
                overlay::draw_help(f);
            } else if app.history_open() {
                overlay::draw_history(f, app);
            } else if app.log_open() {
                overlay::draw_log(f, app);
            }
        }
    }
}
