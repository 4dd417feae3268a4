use crate::bankroll::{Bankroll, WagerError};
use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::hand::{Hand, BLACKJACK};
use crate::strategy::{recommend, Advice};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::fmt;

/// The dealer draws below this total and stands on it or anything higher.
pub const DEALER_STANDS_ON: u8 = 17;

/// Most recent table events kept in memory. Older ones are dropped.
pub const HISTORY_CAPACITY: usize = 512;

/// Fixed table parameters for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub starting_bankroll: u64,
    pub bet: u64,
    /// Rebuild and reshuffle after a round when fewer cards than this remain.
    pub reshuffle_below: usize,
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { starting_bankroll: 100, bet: 10, reshuffle_below: 15, seed: None }
    }
}

impl TableConfig {
    pub fn with_bankroll(mut self, amount: u64) -> Self {
        self.starting_bankroll = amount;
        self
    }

    pub fn with_bet(mut self, amount: u64) -> Self {
        self.bet = amount;
        self
    }

    pub fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = cards;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bet == 0 {
            return Err(ConfigError::ZeroBet);
        }
        if self.starting_bankroll < self.bet {
            return Err(ConfigError::BankrollTooSmall {
                bankroll: self.starting_bankroll,
                bet: self.bet,
            });
        }
        if self.reshuffle_below > crate::deck::DECK_SIZE {
            return Err(ConfigError::ReshuffleThreshold(self.reshuffle_below));
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("bet must be positive")]
    ZeroBet,
    #[error("bankroll of {bankroll} cannot cover a bet of {bet}")]
    BankrollTooSmall { bankroll: u64, bet: u64 },
    #[error("reshuffle threshold {0} exceeds the deck size")]
    ReshuffleThreshold(usize),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no hand is waiting for a decision")]
    NotPlayerTurn,
    #[error("a round is already in progress")]
    RoundInProgress,
    #[error("the session is over")]
    SessionOver,
    #[error("double is only allowed on two cards with enough balance to match the wager")]
    DoubleNotAllowed,
    #[error("split needs an unsplit pair and enough balance to match the wager")]
    SplitNotAllowed,
    #[error("unrecognized command")]
    InvalidCommand,
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Wager(#[from] WagerError),
}

impl ActionError {
    /// Recoverable errors leave the table untouched and the caller should re-prompt.
    /// The rest are broken invariants that end the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ActionError::Deck(_) | ActionError::Wager(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionEnd {
    /// The bankroll can no longer cover the fixed bet.
    Broke,
    Cancelled,
    RoundLimit,
}

impl SessionEnd {
    pub fn label(self) -> &'static str {
        match self {
            SessionEnd::Broke => "out of chips",
            SessionEnd::Cancelled => "cancelled",
            SessionEnd::RoundLimit => "round limit reached",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// Waiting for the first deal.
    Betting,
    PlayerTurn,
    /// A round has been settled; waiting for the next deal.
    RoundOver,
    SessionOver(SessionEnd),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandStatus {
    Active,
    Stood,
    Doubled,
    Busted,
    Blackjack,
}

impl HandStatus {
    pub fn label(self) -> &'static str {
        match self {
            HandStatus::Active => "Playing",
            HandStatus::Stood => "Stood",
            HandStatus::Doubled => "Doubled",
            HandStatus::Busted => "Busted",
            HandStatus::Blackjack => "Blackjack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::PlayerWins => "Win",
            Outcome::DealerWins => "Lose",
            Outcome::Push => "Push",
        }
    }
}

/// Compare one player hand to the final dealer hand. A player bust loses even
/// when the dealer also busts.
///
/// ```
/// use blackjack_rs::game::{determine_winner, Outcome};
/// use blackjack_rs::hand::Hand;
///
/// let player: Hand = "Kh Qd 2c".parse().unwrap();
/// let dealer: Hand = "10s 8h".parse().unwrap();
/// assert_eq!(determine_winner(&player, &dealer), Outcome::DealerWins);
/// ```
pub fn determine_winner(player: &Hand, dealer: &Hand) -> Outcome {
    let (p, d) = (player.value(), dealer.value());
    if p > BLACKJACK {
        Outcome::DealerWins
    } else if d > BLACKJACK {
        Outcome::PlayerWins
    } else if p > d {
        Outcome::PlayerWins
    } else if d > p {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}

/// Discrete commands an input collaborator can hand to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hit,
    Stand,
    Double,
    Split,
    ShowHint,
    Cancel,
    Invalid,
}

/// One player hand and the chips riding on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatHand {
    pub(crate) hand: Hand,
    pub(crate) wager: u64,
    pub(crate) status: HandStatus,
}

impl SeatHand {
    fn new(hand: Hand, wager: u64) -> Self {
        Self { hand, wager, status: HandStatus::Active }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn wager(&self) -> u64 {
        self.wager
    }

    pub fn status(&self) -> HandStatus {
        self.status
    }
}

/// What a decision maker sees when a hand needs a command.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub index: usize,
    pub hand_count: usize,
    pub hand: &'a Hand,
    pub wager: u64,
    pub upcard: Card,
    pub balance: u64,
    pub can_double: bool,
    pub can_split: bool,
}

impl TurnView<'_> {
    pub fn advice(&self) -> Advice {
        recommend(self.hand, self.upcard.rank(), self.can_split, self.can_double)
    }
}

/// Everything observable that happens at the table, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableEvent {
    RoundStarted { round: usize, wager: u64, balance: u64 },
    InitialDeal { hand: Hand, upcard: Card },
    Hit { hand: usize, card: Card, value: u8 },
    Stood { hand: usize, value: u8 },
    Doubled { hand: usize, card: Card, value: u8, wager: u64 },
    Split { first: Hand, second: Hand, wager: u64 },
    Busted { hand: usize, value: u8 },
    Blackjack { hand: usize },
    TwentyOne { hand: usize },
    Hint { hand: usize, advice: Advice },
    DealerRevealed { hand: Hand },
    DealerHit { card: Card, value: u8 },
    DealerStood { value: u8 },
    DealerBusted { value: u8 },
    Settled { hand: usize, outcome: Outcome, wager: u64, player: u8, dealer: u8, balance: u64 },
    Refunded { hand: usize, wager: u64 },
    Reshuffled { remaining: usize },
    SessionEnded { end: SessionEnd, balance: u64 },
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::RoundStarted { round, wager, balance } => {
                write!(f, "Round {round}: wagered {wager}, balance {balance}")
            }
            TableEvent::InitialDeal { hand, upcard } => {
                write!(f, "Your hand: {hand} (value {}); dealer shows {upcard}", hand.value())
            }
            TableEvent::Hit { hand, card, value } => {
                write!(f, "Hand {} hits: {card} (value {value})", hand + 1)
            }
            TableEvent::Stood { hand, value } => write!(f, "Hand {} stands on {value}", hand + 1),
            TableEvent::Doubled { hand, card, value, wager } => {
                write!(f, "Hand {} doubles to {wager}: {card} (value {value})", hand + 1)
            }
            TableEvent::Split { first, second, wager } => write!(
                f,
                "Split into two hands of {wager}: [{first}] ({}) and [{second}] ({})",
                first.value(),
                second.value()
            ),
            TableEvent::Busted { hand, value } => write!(f, "Hand {} busts with {value}", hand + 1),
            TableEvent::Blackjack { hand } => write!(f, "Hand {}: Blackjack!", hand + 1),
            TableEvent::TwentyOne { hand } => write!(f, "Hand {} makes 21", hand + 1),
            TableEvent::Hint { hand, advice } => write!(f, "Hint for hand {}: {advice}", hand + 1),
            TableEvent::DealerRevealed { hand } => {
                write!(f, "Dealer reveals {hand} (value {})", hand.value())
            }
            TableEvent::DealerHit { card, value } => {
                write!(f, "Dealer hits: {card} (value {value})")
            }
            TableEvent::DealerStood { value } => write!(f, "Dealer stands on {value}"),
            TableEvent::DealerBusted { value } => write!(f, "Dealer busts with {value}"),
            TableEvent::Settled { hand, outcome, wager, player, dealer, balance } => write!(
                f,
                "Hand {} ({player} vs {dealer}): {} on {wager}, balance {balance}",
                hand + 1,
                outcome.label()
            ),
            TableEvent::Refunded { hand, wager } => {
                write!(f, "Hand {} wager of {wager} refunded", hand + 1)
            }
            TableEvent::Reshuffled { remaining } => {
                write!(f, "Deck rebuilt and reshuffled ({remaining} cards were left)")
            }
            TableEvent::SessionEnded { end, balance } => {
                write!(f, "Session over ({}): final balance {balance}", end.label())
            }
        }
    }
}

/// Round controller: owns the deck, bankroll and hands for a whole session.
#[derive(Debug)]
pub struct Game {
    pub(crate) config: TableConfig,
    pub(crate) deck: Deck,
    rng: ChaCha8Rng,
    pub(crate) bankroll: Bankroll,
    pub(crate) dealer: Hand,
    pub(crate) hands: Vec<SeatHand>,
    pub(crate) active: usize,
    pub(crate) phase: Phase,
    outcomes: Vec<Outcome>,
    rounds_played: usize,
    history: VecDeque<TableEvent>,
    // Absolute position of history[0]; grows as old events are dropped.
    history_start: usize,
}

impl Game {
    /// Start a session with a freshly built and shuffled deck.
    pub fn new(config: TableConfig) -> Self {
        let mut rng = Self::session_rng(config.seed);
        let mut deck = Deck::new();
        deck.shuffle_with(&mut rng);
        Self::assemble(config, deck, rng)
    }

    /// Start a session with a prepared deck, dealt as-is.
    pub fn with_deck(config: TableConfig, deck: Deck) -> Self {
        let rng = Self::session_rng(config.seed);
        Self::assemble(config, deck, rng)
    }

    fn session_rng(seed: Option<u64>) -> ChaCha8Rng {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        info!("session rng seed {seed}");
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn assemble(config: TableConfig, deck: Deck, rng: ChaCha8Rng) -> Self {
        let bankroll = Bankroll::new(config.starting_bankroll);
        Self {
            config,
            deck,
            rng,
            bankroll,
            dealer: Hand::new(),
            hands: Vec::new(),
            active: 0,
            phase: Phase::Betting,
            outcomes: Vec::new(),
            rounds_played: 0,
            history: VecDeque::with_capacity(HISTORY_CAPACITY),
            history_start: 0,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn balance(&self) -> u64 {
        self.bankroll.balance()
    }

    /// The fixed wager placed at the start of every round.
    pub fn bet(&self) -> u64 {
        self.config.bet
    }

    pub fn hands(&self) -> &[SeatHand] {
        &self.hands
    }

    /// Index of the hand waiting for a decision, if any.
    pub fn active_hand(&self) -> Option<usize> {
        if self.phase == Phase::PlayerTurn && self.active < self.hands.len() {
            Some(self.active)
        } else {
            None
        }
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn upcard(&self) -> Option<Card> {
        self.dealer.first()
    }

    /// The dealer's second card stays face down until the player is done.
    pub fn hole_card_hidden(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Outcomes of the most recently settled round, one per hand.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::SessionOver(_))
    }

    /// Events currently retained, at most [`HISTORY_CAPACITY`].
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Position just past the newest event, counted from the start of the session.
    /// Stays valid as a cursor for [`Game::history_since`] after old events are dropped.
    pub fn history_end(&self) -> usize {
        self.history_start + self.history.len()
    }

    /// Retained events at or after absolute position `from`.
    pub fn history_since(&self, from: usize) -> impl Iterator<Item = &TableEvent> + '_ {
        self.history.iter().skip(from.saturating_sub(self.history_start))
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<TableEvent> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history.range(start..end).cloned().collect()
    }

    pub fn can_double(&self) -> bool {
        match self.active_seat() {
            Some(seat) => seat.hand.len() == 2 && self.bankroll.can_cover(seat.wager),
            None => false,
        }
    }

    /// Only the original two-card pair may split; split hands never re-split.
    pub fn can_split(&self) -> bool {
        match self.active_seat() {
            Some(seat) => {
                self.hands.len() == 1
                    && seat.hand.len() == 2
                    && seat.hand.is_pair()
                    && self.bankroll.can_cover(seat.wager)
            }
            None => false,
        }
    }

    pub fn turn_view(&self) -> Option<TurnView<'_>> {
        let index = self.active_hand()?;
        let seat = &self.hands[index];
        Some(TurnView {
            index,
            hand_count: self.hands.len(),
            hand: &seat.hand,
            wager: seat.wager,
            upcard: self.upcard()?,
            balance: self.balance(),
            can_double: self.can_double(),
            can_split: self.can_split(),
        })
    }

    /// Basic-strategy advice for the active hand against the original upcard.
    pub fn advice(&self) -> Option<Advice> {
        self.turn_view().map(|v| v.advice())
    }

    fn active_seat(&self) -> Option<&SeatHand> {
        self.active_hand().map(|i| &self.hands[i])
    }

    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        match self.phase {
            Phase::SessionOver(_) => Err(ActionError::SessionOver),
            _ => self.active_hand().ok_or(ActionError::NotPlayerTurn),
        }
    }

    /// Take the fixed bet and deal two cards each to the player and the dealer.
    pub fn deal_round(&mut self) -> Result<(), ActionError> {
        match self.phase {
            Phase::Betting | Phase::RoundOver => {}
            Phase::PlayerTurn => return Err(ActionError::RoundInProgress),
            Phase::SessionOver(_) => return Err(ActionError::SessionOver),
        }
        if !self.bankroll.can_cover(self.config.bet) {
            self.end_session(SessionEnd::Broke);
            return Ok(());
        }
        // Every card must be available before the bet leaves the bankroll.
        if self.deck.len() < 4 {
            return Err(DeckError::Exhausted.into());
        }
        self.dealer = Hand::new();
        self.hands.clear();
        self.outcomes.clear();
        self.active = 0;

        let wager = self.bankroll.bet(self.config.bet)?;
        let round = self.rounds_played + 1;
        debug!("round {round}: wager {wager}, deck {}", self.deck.len());
        self.record(TableEvent::RoundStarted { round, wager, balance: self.balance() });

        let mut player = Hand::new();
        for _ in 0..2 {
            player.add_card(self.deck.deal()?);
            self.dealer.add_card(self.deck.deal()?);
        }
        let upcard = self.dealer.first().ok_or(DeckError::Exhausted)?;
        self.record(TableEvent::InitialDeal { hand: player.clone(), upcard });
        self.hands.push(SeatHand::new(player, wager));
        self.phase = Phase::PlayerTurn;
        self.advance()
    }

    pub fn hit(&mut self) -> Result<(), ActionError> {
        let idx = self.ensure_player_turn()?;
        let card = self.deck.deal()?;
        let seat = &mut self.hands[idx];
        seat.hand.add_card(card);
        let value = seat.hand.value();
        self.record(TableEvent::Hit { hand: idx, card, value });
        self.advance()
    }

    pub fn stand(&mut self) -> Result<(), ActionError> {
        let idx = self.ensure_player_turn()?;
        let seat = &mut self.hands[idx];
        seat.status = HandStatus::Stood;
        let value = seat.hand.value();
        self.record(TableEvent::Stood { hand: idx, value });
        self.active += 1;
        self.advance()
    }

    /// Match the hand's wager, take exactly one card, and end the hand.
    pub fn double_down(&mut self) -> Result<(), ActionError> {
        let idx = self.ensure_player_turn()?;
        if !self.can_double() {
            return Err(ActionError::DoubleNotAllowed);
        }
        let card = self.deck.deal()?;
        let extra = self.bankroll.bet(self.hands[idx].wager)?;
        let seat = &mut self.hands[idx];
        seat.wager += extra;
        seat.hand.add_card(card);
        let value = seat.hand.value();
        let wager = seat.wager;
        seat.status = if seat.hand.is_bust() { HandStatus::Busted } else { HandStatus::Doubled };
        self.record(TableEvent::Doubled { hand: idx, card, value, wager });
        if value > BLACKJACK {
            self.record(TableEvent::Busted { hand: idx, value });
        }
        self.active += 1;
        self.advance()
    }

    /// Turn the pair into two one-card hands, each with its own wager, and deal
    /// one card to each.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let idx = self.ensure_player_turn()?;
        if !self.can_split() {
            return Err(ActionError::SplitNotAllowed);
        }
        if self.deck.len() < 2 {
            return Err(DeckError::Exhausted.into());
        }
        let wager = self.hands[idx].wager;
        let extra = self.bankroll.bet(wager)?;
        let (a, b) = self.hands[idx].hand.take_pair().ok_or(ActionError::SplitNotAllowed)?;
        let mut first = Hand::from_cards([a]);
        let mut second = Hand::from_cards([b]);
        first.add_card(self.deck.deal()?);
        second.add_card(self.deck.deal()?);
        self.record(TableEvent::Split { first: first.clone(), second: second.clone(), wager });
        self.hands = vec![SeatHand::new(first, wager), SeatHand::new(second, extra)];
        self.active = 0;
        self.advance()
    }

    /// Record and return advice for the active hand.
    pub fn hint(&mut self) -> Result<Advice, ActionError> {
        let idx = self.ensure_player_turn()?;
        let advice = self.advice().ok_or(ActionError::NotPlayerTurn)?;
        self.record(TableEvent::Hint { hand: idx, advice });
        Ok(advice)
    }

    /// Abort the session. Wagers still in play are refunded; busted hands stay lost.
    pub fn cancel(&mut self) -> Result<(), ActionError> {
        match self.phase {
            Phase::SessionOver(_) => return Err(ActionError::SessionOver),
            Phase::PlayerTurn => {
                for i in 0..self.hands.len() {
                    let seat = &self.hands[i];
                    if seat.hand.is_bust() {
                        continue;
                    }
                    let wager = seat.wager;
                    self.bankroll.push(wager);
                    self.record(TableEvent::Refunded { hand: i, wager });
                }
            }
            Phase::Betting | Phase::RoundOver => {}
        }
        self.end_session(SessionEnd::Cancelled);
        Ok(())
    }

    pub fn apply(&mut self, command: Command) -> Result<(), ActionError> {
        match command {
            Command::Hit => self.hit(),
            Command::Stand => self.stand(),
            Command::Double => self.double_down(),
            Command::Split => self.split(),
            Command::ShowHint => self.hint().map(|_| ()),
            Command::Cancel => self.cancel(),
            Command::Invalid => Err(ActionError::InvalidCommand),
        }
    }

    /// Move past every hand that no longer needs a decision. Once none is left,
    /// play the dealer and settle.
    fn advance(&mut self) -> Result<(), ActionError> {
        while self.active < self.hands.len() {
            let idx = self.active;
            let seat = &mut self.hands[idx];
            if seat.status != HandStatus::Active {
                self.active += 1;
                continue;
            }
            let value = seat.hand.value();
            if value > BLACKJACK {
                seat.status = HandStatus::Busted;
                self.record(TableEvent::Busted { hand: idx, value });
            } else if value == BLACKJACK {
                if seat.hand.len() == 2 {
                    seat.status = HandStatus::Blackjack;
                    self.record(TableEvent::Blackjack { hand: idx });
                } else {
                    seat.status = HandStatus::Stood;
                    self.record(TableEvent::TwentyOne { hand: idx });
                }
            } else {
                return Ok(());
            }
            self.active += 1;
        }
        self.finish_round()
    }

    fn finish_round(&mut self) -> Result<(), ActionError> {
        self.record(TableEvent::DealerRevealed { hand: self.dealer.clone() });
        if self.hands.iter().any(|s| !s.hand.is_bust()) {
            self.play_dealer()?;
        }
        self.settle();
        self.rounds_played += 1;

        if !self.bankroll.can_cover(self.config.bet) {
            self.end_session(SessionEnd::Broke);
            return Ok(());
        }
        self.phase = Phase::RoundOver;
        if self.deck.len() < self.config.reshuffle_below {
            let remaining = self.deck.len();
            self.deck.build();
            self.deck.shuffle_with(&mut self.rng);
            info!("reshuffled with {remaining} cards left");
            self.record(TableEvent::Reshuffled { remaining });
        }
        Ok(())
    }

    fn play_dealer(&mut self) -> Result<(), ActionError> {
        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.deck.deal()?;
            self.dealer.add_card(card);
            debug!("dealer draws {card}, now {}", self.dealer.value());
            self.record(TableEvent::DealerHit { card, value: self.dealer.value() });
        }
        let value = self.dealer.value();
        if value > BLACKJACK {
            self.record(TableEvent::DealerBusted { value });
        } else {
            self.record(TableEvent::DealerStood { value });
        }
        Ok(())
    }

    fn settle(&mut self) {
        let dealer = self.dealer.value();
        for i in 0..self.hands.len() {
            let outcome = determine_winner(&self.hands[i].hand, &self.dealer);
            let wager = self.hands[i].wager;
            match outcome {
                Outcome::PlayerWins => self.bankroll.win(wager),
                Outcome::Push => self.bankroll.push(wager),
                Outcome::DealerWins => {}
            }
            self.outcomes.push(outcome);
            let player = self.hands[i].hand.value();
            self.record(TableEvent::Settled {
                hand: i,
                outcome,
                wager,
                player,
                dealer,
                balance: self.bankroll.balance(),
            });
        }
        info!("round {} settled: {:?}, balance {}", self.rounds_played + 1, self.outcomes, self.balance());
    }

    fn end_session(&mut self, end: SessionEnd) {
        if end == SessionEnd::Broke {
            warn!("bankroll {} cannot cover bet {}", self.balance(), self.config.bet);
        }
        self.phase = Phase::SessionOver(end);
        self.record(TableEvent::SessionEnded { end, balance: self.balance() });
    }

    fn record(&mut self, event: TableEvent) {
        if self.history.len() == HISTORY_CAPACITY {
            self.history.pop_front();
            self.history_start += 1;
        }
        self.history.push_back(event);
    }
}
