//! Agents: command sources that play hands without a keyboard.
//!
//! Interactive frontends implement [`CommandSource`] themselves; the agents
//! here cover scripted replays and basic-strategy autoplay.

use crate::game::{Command, TurnView};
use crate::session::CommandSource;
use crate::strategy::Move;
use std::collections::VecDeque;

/// Plays a fixed sequence of commands, then cancels.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgent {
    queue: VecDeque<Command>,
}

impl ScriptedAgent {
    pub fn new<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        Self { queue: commands.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl CommandSource for ScriptedAgent {
    fn next_command(&mut self, _view: &TurnView<'_>) -> Command {
        self.queue.pop_front().unwrap_or(Command::Cancel)
    }
}

/// Always follows the strategy advisor.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyAgent {
    decisions: u64,
}

impl StrategyAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decisions(&self) -> u64 {
        self.decisions
    }
}

impl CommandSource for StrategyAgent {
    fn next_command(&mut self, view: &TurnView<'_>) -> Command {
        self.decisions += 1;
        match view.advice().action {
            Move::Hit => Command::Hit,
            Move::Stand => Command::Stand,
            Move::Double => Command::Double,
            Move::Split => Command::Split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::Deck;
    use crate::game::{Game, TableConfig};

    #[test]
    fn scripted_agent_cancels_when_empty() {
        let config = TableConfig::default().with_seed(3);
        let mut g = Game::with_deck(config, Deck::stacked(parse_cards("9h 10c 7d 6s").unwrap()));
        g.deal_round().unwrap();
        let view = g.turn_view().unwrap();
        let mut agent = ScriptedAgent::new([Command::Hit]);
        assert_eq!(agent.next_command(&view), Command::Hit);
        assert_eq!(agent.next_command(&view), Command::Cancel);
        assert_eq!(agent.remaining(), 0);
    }

    #[test]
    fn strategy_agent_follows_advice() {
        let config = TableConfig::default().with_seed(3);
        let mut g = Game::with_deck(config, Deck::stacked(parse_cards("8h 5c 8d 6s").unwrap()));
        g.deal_round().unwrap();
        let view = g.turn_view().unwrap();
        let mut agent = StrategyAgent::new();
        assert_eq!(agent.next_command(&view), Command::Split);
        assert_eq!(agent.decisions(), 1);
    }
}
