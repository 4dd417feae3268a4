use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

pub const BLACKJACK: u8 = 21;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Cards held by the player or the dealer, with the blackjack value kept current.
///
/// ```
/// use blackjack_rs::hand::Hand;
///
/// let mut hand: Hand = "Ac 9d".parse().unwrap();
/// assert_eq!(hand.value(), 20);
/// assert!(hand.is_soft());
///
/// hand.add_card("5h".parse().unwrap());
/// assert_eq!(hand.value(), 15);
/// assert!(!hand.is_soft());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    value: u8,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut hand = Self::new();
        for c in cards {
            hand.add_card(c);
        }
        hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value = Self::calculate_value(&self.cards);
    }

    /// Count every ace as 11, then demote aces one at a time while the total busts.
    fn calculate_value(cards: &[Card]) -> u8 {
        let mut value: u32 = 0;
        let mut aces = 0;
        for c in cards {
            if c.rank().is_ace() {
                aces += 1;
            }
            value += u32::from(c.points());
        }
        while value > u32::from(BLACKJACK) && aces > 0 {
            value -= 10;
            aces -= 1;
        }
        value.min(u32::from(u8::MAX)) as u8
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Total with every ace counted as 1.
    pub fn hard_total(&self) -> u8 {
        self.cards
            .iter()
            .map(|c| if c.rank().is_ace() { 1 } else { c.points() })
            .fold(0u8, u8::saturating_add)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Exactly two cards of the same literal rank. A Jack and a King are not a pair.
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank() == b.rank())
    }

    /// At least one ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.cards.iter().any(|c| c.rank().is_ace())
            && self.hard_total().saturating_add(10) <= BLACKJACK
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.value > BLACKJACK
    }

    /// Break a two-card hand into its cards, leaving this hand empty.
    pub(crate) fn take_pair(&mut self) -> Option<(Card, Card)> {
        if self.cards.len() != 2 {
            return None;
        }
        let second = self.cards.pop()?;
        let first = self.cards.pop()?;
        self.value = 0;
        Some((first, second))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Ok(Hand::from_cards(cards))
    }
}
