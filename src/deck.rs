use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("all cards have been dealt")]
    Exhausted,
}

/// A single 52-card deck. The top of the deck is the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A freshly built, unshuffled deck.
    ///
    /// ```
    /// use blackjack_rs::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn new() -> Self {
        let mut deck = Self { cards: Vec::with_capacity(DECK_SIZE) };
        deck.build();
        deck
    }

    /// A deck that deals `order` front to back. Useful for replays and tests.
    ///
    /// ```
    /// use blackjack_rs::cards::{Card, Rank, Suit};
    /// use blackjack_rs::deck::Deck;
    ///
    /// let first = Card::new(Rank::Ace, Suit::Spades);
    /// let mut deck = Deck::stacked(vec![first, Card::new(Rank::Two, Suit::Clubs)]);
    /// assert_eq!(deck.deal().unwrap(), first);
    /// ```
    pub fn stacked(order: Vec<Card>) -> Self {
        let mut cards = order;
        cards.reverse();
        Self { cards }
    }

    /// Replace the contents with all 52 cards in canonical order (suit-major, rank-minor).
    pub fn build(&mut self) {
        self.cards.clear();
        for s in Suit::ALL {
            for r in Rank::ALL {
                self.cards.push(Card::new(r, s));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal one card from the top of the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }
}
