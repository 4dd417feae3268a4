//! blackjack-rs: single-player blackjack engine and terminal front end
//!
//! Goals:
//! - Rules live in a round controller that knows nothing about terminals
//! - Input and output are swappable collaborators (keyboard, scripts, autoplay)
//! - No panics on bad input; refused commands come back as `Result` errors
//!
//! ## Quick start: play a stacked round
//! ```
//! use blackjack_rs::cards::parse_cards;
//! use blackjack_rs::deck::Deck;
//! use blackjack_rs::game::{Game, Outcome, TableConfig};
//!
//! // Player gets K, Q; dealer shows 10 with a 6 underneath and draws a 9.
//! let deck = Deck::stacked(parse_cards("Kh 10c Qd 6s 9h").unwrap());
//! let mut game = Game::with_deck(TableConfig::default(), deck);
//!
//! game.deal_round().unwrap();
//! game.stand().unwrap();
//! assert_eq!(game.outcomes(), &[Outcome::PlayerWins]);
//! assert_eq!(game.balance(), 110);
//! ```
//!
//! ## Strategy hints
//! ```
//! use blackjack_rs::cards::Rank;
//! use blackjack_rs::hand::Hand;
//! use blackjack_rs::strategy::{recommend, Move};
//!
//! let hand: Hand = "8h 8d".parse().unwrap();
//! assert_eq!(recommend(&hand, Rank::Ten, true, true).action, Move::Split);
//! ```
//!
//! ## TUI
//! Run the interactive table with:
//! ```sh
//! cargo run --bin blackjack-rs
//! ```

pub mod agents;
pub mod bankroll;
pub mod cards;
pub mod deck;
pub mod game;
pub mod hand;
pub mod session;
pub mod strategy;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
