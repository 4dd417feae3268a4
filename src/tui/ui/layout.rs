use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Fixed-width slots for a row of cards, left aligned.
pub(super) fn card_slots(area: Rect, count: usize, width: u16) -> Vec<Rect> {
    let fit = (area.width / width.max(1)) as usize;
    let count = count.min(fit);
    let mut constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Length(width)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default().direction(Direction::Horizontal).constraints(constraints).split(area);
    chunks.iter().take(count).copied().collect()
}
