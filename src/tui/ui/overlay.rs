use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

fn popup(f: &mut Frame, title: &str, lines: Vec<Line>) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn dim(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().add_modifier(Modifier::DIM)))
}

pub(super) fn draw_help(f: &mut Frame) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / Enter: deal the next hand"),
        Line::from("- H: hit"),
        Line::from("- S: stand"),
        Line::from("- D: double down (first two cards only)"),
        Line::from("- P: split a pair (once per round)"),
        Line::from("- T: show a basic-strategy hint"),
        Line::from("- A: toggle automatic hints"),
        Line::from("- L: round history"),
        Line::from("- G: log"),
        Line::from("- Q / Esc: cancel and quit (open wagers are refunded)"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- Left / Right or + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: back"),
        Line::from(""),
        Line::from(Span::styled("Rules:", bold)),
        Line::from("- Dealer stands on all 17s"),
        Line::from("- Wins pay 1:1, blackjack included; ties push"),
        Line::from(""),
        dim("Close help: ? or Esc"),
    ];
    popup(f, "Help", lines);
}

pub(super) fn draw_history(f: &mut Frame, app: &AppState) {
    let entries =
        app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    let mut lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from("No history yet.")]
    } else {
        entries.iter().map(|e| Line::from(e.to_string())).collect()
    };
    lines.push(Line::from(""));
    lines.push(dim("Up/Down scroll • Close: L or Esc"));
    popup(f, "History", lines);
}

pub(super) fn draw_log(f: &mut Frame, app: &AppState) {
    let mut lines: Vec<Line> = match app.logs() {
        Some(logs) if !logs.is_empty() => {
            logs.recent(AppState::HISTORY_PAGE_SIZE).into_iter().map(Line::from).collect()
        }
        Some(_) => vec![Line::from("Nothing logged yet.")],
        None => vec![Line::from("Logging is not captured in this session.")],
    };
    lines.push(Line::from(""));
    lines.push(dim("Close: G or Esc"));
    popup(f, "Log", lines);
}
