use crate::cards::Card;
use crate::game::{Game, HandStatus, Outcome, Phase, SeatHand};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_slots, inner};

const CARD_WIDTH: u16 = 7;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let game = &app.game;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(6), // dealer
            Constraint::Min(6),    // player hands
            Constraint::Length(5), // status bar
        ])
        .split(f.area());

    let header_lines = vec![
        Line::from(format!(
            "Balance: ${}   Bet: ${}   Round: {}",
            game.balance(),
            game.bet(),
            game.rounds_played() + usize::from(game.phase() == Phase::PlayerTurn),
        )),
        Line::from(format!(
            "Cards left: {}   Auto hint: {}",
            game.deck_len(),
            if app.auto_hint { "on" } else { "off" }
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("blackjack-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_dealer(f, chunks[1], game);
    draw_hands(f, chunks[2], game);
    draw_status(f, chunks[3], app);
}

fn draw_dealer(f: &mut Frame, area: Rect, game: &Game) {
    let dealer = game.dealer_hand();
    let hidden = game.hole_card_hidden();
    let title = if dealer.is_empty() {
        "Dealer".to_string()
    } else if hidden {
        format!("Dealer: showing {}", dealer.first().map(|c| c.points()).unwrap_or(0))
    } else {
        format!("Dealer: {}", dealer.value())
    };
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if !hidden && dealer.is_bust() {
        block = block.border_style(Style::default().fg(Color::DarkGray));
    }
    f.render_widget(block, area);
    let slots = card_slots(inner(area), dealer.len(), CARD_WIDTH);
    for (i, slot) in slots.into_iter().enumerate() {
        // The second card stays face down while the player acts.
        let card = if hidden && i == 1 { None } else { dealer.cards().get(i).copied() };
        render_card_widget(f, slot, card, None);
    }
}

fn draw_hands(f: &mut Frame, area: Rect, game: &Game) {
    let hands = game.hands();
    if hands.is_empty() {
        let para = Paragraph::new("No cards on the table.")
            .block(Block::default().title("Player").borders(Borders::ALL));
        f.render_widget(para, area);
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            (0..hands.len())
                .map(|_| Constraint::Ratio(1, hands.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(area);
    for (idx, seat) in hands.iter().enumerate() {
        let outcome = game.outcomes().get(idx).copied();
        render_seat(f, columns[idx], idx, seat, game.active_hand() == Some(idx), outcome);
    }
}

fn render_seat(
    f: &mut Frame,
    area: Rect,
    idx: usize,
    seat: &SeatHand,
    active: bool,
    outcome: Option<Outcome>,
) {
    let hand = seat.hand();
    let mut title = format!("Hand {}", idx + 1);
    if active {
        title.push_str(" [Act]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    block = match (outcome, seat.status()) {
        (Some(Outcome::PlayerWins), _) => block.border_style(Style::default().fg(Color::Green)),
        (Some(Outcome::DealerWins), _) | (None, HandStatus::Busted) => {
            block.border_style(Style::default().fg(Color::DarkGray))
        }
        (Some(Outcome::Push), _) => block.border_style(Style::default().fg(Color::Blue)),
        _ if active => block.border_style(Style::default().fg(Color::Yellow)),
        _ => block,
    };
    f.render_widget(block, area);

    let body = inner(area);
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(body);
    for (i, slot) in card_slots(split[0], hand.len(), CARD_WIDTH).into_iter().enumerate() {
        let border = if active { Some(Color::Yellow) } else { None };
        render_card_widget(f, slot, hand.cards().get(i).copied(), border);
    }

    let value = if hand.is_soft() {
        format!("{} (soft)", hand.value())
    } else {
        hand.value().to_string()
    };
    let mut lines = vec![
        Line::from(format!("Value: {value}")),
        Line::from(format!("Wager: ${}", seat.wager())),
        Line::from(format!("Status: {}", seat.status().label())),
    ];
    if let Some(outcome) = outcome {
        lines.push(Line::from(Span::styled(
            format!("Result: {}", outcome.label()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), split[1]);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    let game = &app.game;
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(area));

    let mut left: Vec<Line> = match game.phase() {
        Phase::Betting => vec![Line::from("Press Space to deal the first hand.")],
        Phase::RoundOver => vec![Line::from(round_summary(game))],
        Phase::SessionOver(end) => vec![Line::from(format!(
            "Session over ({}). Final balance ${}. Press Q to leave.",
            end.label(),
            game.balance()
        ))],
        Phase::PlayerTurn => {
            let style = |enabled: bool| {
                if enabled {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                }
            };
            vec![Line::from(vec![
                Span::raw("Actions: "),
                Span::styled("H hit", style(true)),
                Span::raw(" • "),
                Span::styled("S stand", style(true)),
                Span::raw(" • "),
                Span::styled("D double", style(game.can_double())),
                Span::raw(" • "),
                Span::styled("P split", style(game.can_split())),
                Span::raw(" • "),
                Span::styled("T hint", style(true)),
            ])]
        }
    };
    if let Some(advice) = app.hint() {
        left.push(Line::from(Span::styled(
            format!("Hint: {advice}"),
            Style::default().fg(Color::Cyan),
        )));
    }
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right = vec![Line::from("? help • L history"), Line::from("G log • M menu • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn round_summary(game: &Game) -> String {
    let results: Vec<&str> = game.outcomes().iter().map(|o| o.label()).collect();
    if results.is_empty() {
        return "Press Space to deal.".to_string();
    }
    format!("Round over: {}. Press Space for the next hand.", results.join(", "))
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            let color = if c.suit().is_red() { Color::Red } else { Color::White };
            Line::from(Span::styled(c.short(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled("??", Style::default().add_modifier(Modifier::DIM))),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner(area));
}
