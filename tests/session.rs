use blackjack_rs::agents::{ScriptedAgent, StrategyAgent};
use blackjack_rs::cards::parse_cards;
use blackjack_rs::deck::Deck;
use blackjack_rs::game::{
    ActionError, Command, Game, SessionEnd, TableConfig, TableEvent, HISTORY_CAPACITY,
};
use blackjack_rs::session::{EventLog, Session};

fn stacked_game(config: TableConfig, cards: &str) -> Game {
    Game::with_deck(config, Deck::stacked(parse_cards(cards).unwrap()))
}

#[test]
fn scripted_round_then_cancel() {
    let config = TableConfig::default().with_seed(12).with_reshuffle_below(0);
    // Round 1: 5+6 doubles into a King (21) against 10+7. Round 2 is cancelled mid-hand.
    let game = stacked_game(config, "5h 10c 6d 7s Kd 9h 8c 7d 6s");
    let mut session = Session::new(game);
    let mut agent = ScriptedAgent::new([Command::Double, Command::Cancel]);
    let mut log = EventLog::default();
    let summary = session.run(&mut agent, &mut log).unwrap();

    assert_eq!(summary.end, SessionEnd::Cancelled);
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.final_balance, 120);
    assert!(log.events.iter().any(|e| matches!(e, TableEvent::Refunded { wager: 10, .. })));
    assert_eq!(agent.remaining(), 0);
}

#[test]
fn rejected_double_is_reprompted() {
    let config = TableConfig::default().with_seed(12).with_reshuffle_below(0);
    let game = stacked_game(config, "2h 10c 3d 7s 4c");
    let mut session = Session::new(game).with_round_limit(1);
    let mut agent = ScriptedAgent::new([Command::Hit, Command::Double, Command::Stand]);
    let mut log = EventLog::default();
    let summary = session.run(&mut agent, &mut log).unwrap();

    assert_eq!(log.rejections, vec![ActionError::DoubleNotAllowed]);
    assert_eq!(summary.end, SessionEnd::RoundLimit);
    assert_eq!(summary.final_balance, 90);
}

#[test]
fn strategy_agent_plays_until_limit_or_broke() {
    let config = TableConfig::default().with_seed(2024);
    let mut session = Session::new(Game::new(config)).with_round_limit(25);
    let mut agent = StrategyAgent::new();
    let mut log = EventLog::default();
    let summary = session.run(&mut agent, &mut log).unwrap();

    assert!(matches!(summary.end, SessionEnd::RoundLimit | SessionEnd::Broke));
    assert!(summary.rounds > 0);
    let started = log.events.iter().filter(|e| matches!(e, TableEvent::RoundStarted { .. })).count();
    assert_eq!(started, summary.rounds);
    assert_eq!(session.game().balance(), summary.final_balance);
}

#[test]
fn seeded_simulations_repeat() {
    let run = || {
        let config = TableConfig::default().with_seed(99);
        let mut session = Session::new(Game::new(config)).with_round_limit(10);
        let mut log = EventLog::default();
        let summary = session.run(&mut StrategyAgent::new(), &mut log).unwrap();
        (summary, log.events)
    };
    assert_eq!(run(), run());
}

#[test]
fn long_sessions_keep_history_bounded_and_flush_everything() {
    let config = TableConfig::default().with_bankroll(1_000_000_000).with_bet(1).with_seed(31);
    let mut session = Session::new(Game::new(config)).with_round_limit(400);
    let mut log = EventLog::default();
    let summary = session.run(&mut StrategyAgent::new(), &mut log).unwrap();

    assert_eq!(summary.end, SessionEnd::RoundLimit);
    assert!(session.game().history_len() <= HISTORY_CAPACITY);
    assert_eq!(log.events.len(), session.game().history_end());
    assert!(log.events.len() > HISTORY_CAPACITY);
    let settled = log.events.iter().filter(|e| matches!(e, TableEvent::Settled { .. })).count();
    assert!(settled >= 400);
}
