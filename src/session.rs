//! Blocking session loop.
//!
//! [`Session::run`] repeatedly deals rounds and asks a [`CommandSource`] for one
//! command whenever a hand needs a decision. Everything the table records is
//! forwarded to an [`EventSink`] in order. Frontends only supply those two
//! collaborators.

use crate::game::{ActionError, Command, Game, Phase, SessionEnd, TableEvent, TurnView};
use log::{debug, error};

/// Supplies one discrete command per request. May block indefinitely.
pub trait CommandSource {
    fn next_command(&mut self, view: &TurnView<'_>) -> Command;
}

/// Receives plain table events for display.
pub trait EventSink {
    fn event(&mut self, event: &TableEvent);

    /// A command was refused without touching the table; the source will be asked again.
    fn rejected(&mut self, _error: &ActionError) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub final_balance: u64,
    pub rounds: usize,
}

#[derive(Debug)]
pub struct Session {
    game: Game,
    round_limit: Option<usize>,
    cursor: usize,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self { game, round_limit: None, cursor: 0 }
    }

    /// Stop after `rounds` settled rounds even if the bankroll could continue.
    pub fn with_round_limit(mut self, rounds: usize) -> Self {
        self.round_limit = Some(rounds);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the bankroll runs dry, the source cancels, or the round limit hits.
    /// Fatal table errors are returned after the events leading up to them are flushed.
    pub fn run<S, O>(&mut self, source: &mut S, sink: &mut O) -> Result<SessionSummary, ActionError>
    where
        S: CommandSource + ?Sized,
        O: EventSink + ?Sized,
    {
        loop {
            match self.game.phase() {
                Phase::SessionOver(end) => {
                    self.flush(sink);
                    return Ok(self.summary(end));
                }
                Phase::Betting | Phase::RoundOver => {
                    if self.round_limit.is_some_and(|n| self.game.rounds_played() >= n) {
                        self.flush(sink);
                        return Ok(self.summary(SessionEnd::RoundLimit));
                    }
                    let dealt = self.game.deal_round();
                    self.flush(sink);
                    if let Err(e) = dealt {
                        error!("deal failed: {e}");
                        return Err(e);
                    }
                }
                Phase::PlayerTurn => {
                    let command = match self.game.turn_view() {
                        Some(view) => source.next_command(&view),
                        None => Command::Invalid,
                    };
                    debug!("command {command:?}");
                    let applied = self.game.apply(command);
                    self.flush(sink);
                    match applied {
                        Ok(()) => {}
                        Err(e) if e.is_recoverable() => sink.rejected(&e),
                        Err(e) => {
                            error!("round aborted: {e}");
                            return Err(e);
                        }
                    }
                }
            }
        }
    }

    fn flush<O: EventSink + ?Sized>(&mut self, sink: &mut O) {
        for event in self.game.history_since(self.cursor) {
            sink.event(event);
        }
        self.cursor = self.game.history_end();
    }

    fn summary(&self, end: SessionEnd) -> SessionSummary {
        SessionSummary {
            end,
            final_balance: self.game.balance(),
            rounds: self.game.rounds_played(),
        }
    }
}

/// Collects events in memory. Handy for tests and headless runs.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<TableEvent>,
    pub rejections: Vec<ActionError>,
}

impl EventSink for EventLog {
    fn event(&mut self, event: &TableEvent) {
        self.events.push(event.clone());
    }

    fn rejected(&mut self, error: &ActionError) {
        self.rejections.push(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::ScriptedAgent;
    use crate::cards::parse_cards;
    use crate::deck::Deck;
    use crate::game::TableConfig;

    fn game(cards: &str) -> Game {
        let config = TableConfig::default().with_seed(5).with_reshuffle_below(0);
        Game::with_deck(config, Deck::stacked(parse_cards(cards).unwrap()))
    }

    #[test]
    fn invalid_input_is_reprompted() {
        let mut session = Session::new(game("Kh 10c Qd 6s 9h")).with_round_limit(1);
        let mut agent =
            ScriptedAgent::new([Command::Invalid, Command::Split, Command::ShowHint, Command::Stand]);
        let mut log = EventLog::default();
        let summary = session.run(&mut agent, &mut log).unwrap();

        assert_eq!(log.rejections, vec![ActionError::InvalidCommand, ActionError::SplitNotAllowed]);
        assert!(log.events.iter().any(|e| matches!(e, TableEvent::Hint { .. })));
        assert_eq!(summary.end, SessionEnd::RoundLimit);
        assert_eq!(summary.final_balance, 110);
        assert_eq!(summary.rounds, 1);
    }

    #[test]
    fn cancel_ends_with_refund() {
        let mut session = Session::new(game("9h 10c 7d 6s"));
        let mut agent = ScriptedAgent::new([Command::Cancel]);
        let mut log = EventLog::default();
        let summary = session.run(&mut agent, &mut log).unwrap();

        assert_eq!(summary.end, SessionEnd::Cancelled);
        assert_eq!(summary.final_balance, 100);
        assert!(matches!(log.events.last(), Some(TableEvent::SessionEnded { .. })));
    }

    #[test]
    fn fatal_errors_stop_the_loop() {
        let mut session = Session::new(game("2h 10c 3d 7s"));
        let mut agent = ScriptedAgent::new([Command::Hit]);
        let mut log = EventLog::default();
        let err = session.run(&mut agent, &mut log).unwrap_err();
        assert!(!err.is_recoverable());
        assert!(matches!(log.events.first(), Some(TableEvent::RoundStarted { .. })));
    }
}
