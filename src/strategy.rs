//! Basic-strategy advisor.
//!
//! [`recommend`] is a pure lookup over three tiers checked in order: pairs
//! (only when a split is actually available), soft totals, then hard totals.
//! Face cards are normalized to 10 for the dealer upcard and for the pair
//! table; the ace counts as 11.

use crate::cards::Rank;
use crate::hand::Hand;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Hit,
    Stand,
    Double,
    Split,
}

impl Move {
    pub fn label(self) -> &'static str {
        match self {
            Move::Hit => "Hit",
            Move::Stand => "Stand",
            Move::Double => "Double",
            Move::Split => "Split",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recommended move plus a one-line rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub action: Move,
    pub reason: &'static str,
}

impl Advice {
    const fn new(action: Move, reason: &'static str) -> Self {
        Self { action, reason }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.action, self.reason)
    }
}

fn between(v: u8, lo: u8, hi: u8) -> bool {
    (lo..=hi).contains(&v)
}

/// Recommend a move for `hand` against the dealer's upcard.
///
/// ```
/// use blackjack_rs::cards::Rank;
/// use blackjack_rs::hand::Hand;
/// use blackjack_rs::strategy::{recommend, Move};
///
/// let eights: Hand = "8h 8d".parse().unwrap();
/// assert_eq!(recommend(&eights, Rank::Five, true, true).action, Move::Split);
/// ```
pub fn recommend(hand: &Hand, upcard: Rank, can_split: bool, can_double: bool) -> Advice {
    let dealer = upcard.tier();
    if can_split && hand.is_pair() {
        if let Some(card) = hand.first() {
            return pair_advice(card.rank().tier(), dealer, can_double);
        }
    }
    if hand.is_soft() {
        return soft_advice(hand.value(), dealer, can_double);
    }
    hard_advice(hand.value(), dealer, can_double)
}

fn pair_advice(pair: u8, dealer: u8, can_double: bool) -> Advice {
    match pair {
        11 => Advice::new(Move::Split, "always split aces"),
        10 => Advice::new(Move::Stand, "never split tens; 20 is strong"),
        9 => {
            if matches!(dealer, 2..=6 | 8 | 9) {
                Advice::new(Move::Split, "split nines against a weak or middling upcard")
            } else {
                Advice::new(Move::Stand, "18 holds against 7, 10 or ace")
            }
        }
        8 => Advice::new(Move::Split, "always split eights; 16 is the worst total"),
        7 => {
            if between(dealer, 2, 7) {
                Advice::new(Move::Split, "split sevens against 2 through 7")
            } else {
                Advice::new(Move::Hit, "hard 14 against a strong upcard")
            }
        }
        6 => {
            if between(dealer, 2, 6) {
                Advice::new(Move::Split, "split sixes against a dealer bust card")
            } else {
                Advice::new(Move::Hit, "hard 12 against a strong upcard")
            }
        }
        5 => {
            if can_double && between(dealer, 2, 9) {
                Advice::new(Move::Double, "treat fives as a hard 10 and double")
            } else {
                Advice::new(Move::Hit, "treat fives as a hard 10")
            }
        }
        4 => {
            if matches!(dealer, 5 | 6) {
                Advice::new(Move::Split, "split fours only against 5 or 6")
            } else {
                Advice::new(Move::Hit, "hard 8 always hits")
            }
        }
        _ => {
            if between(dealer, 2, 7) {
                Advice::new(Move::Split, "split small pairs against 2 through 7")
            } else {
                Advice::new(Move::Hit, "small pair against a strong upcard")
            }
        }
    }
}

fn soft_advice(total: u8, dealer: u8, can_double: bool) -> Advice {
    match total {
        19.. => {
            if total == 19 && dealer == 6 && can_double {
                Advice::new(Move::Double, "soft 19 doubles against a 6")
            } else {
                Advice::new(Move::Stand, "soft 19 or better stands")
            }
        }
        18 => {
            if can_double && between(dealer, 3, 6) {
                Advice::new(Move::Double, "soft 18 doubles against 3 through 6")
            } else if matches!(dealer, 2 | 7 | 8) {
                Advice::new(Move::Stand, "soft 18 stands against 2, 7 or 8")
            } else {
                Advice::new(Move::Hit, "soft 18 improves against a strong upcard")
            }
        }
        17 => {
            if can_double && between(dealer, 3, 6) {
                Advice::new(Move::Double, "soft 17 doubles against 3 through 6")
            } else {
                Advice::new(Move::Hit, "soft 17 cannot bust on one card")
            }
        }
        15 | 16 => {
            if can_double && between(dealer, 4, 6) {
                Advice::new(Move::Double, "soft 15-16 doubles against 4 through 6")
            } else {
                Advice::new(Move::Hit, "soft 15-16 cannot bust on one card")
            }
        }
        13 | 14 => {
            if can_double && matches!(dealer, 5 | 6) {
                Advice::new(Move::Double, "soft 13-14 doubles against 5 or 6")
            } else {
                Advice::new(Move::Hit, "soft 13-14 cannot bust on one card")
            }
        }
        _ => Advice::new(Move::Hit, "soft 12 cannot bust on one card"),
    }
}

fn hard_advice(total: u8, dealer: u8, can_double: bool) -> Advice {
    match total {
        17.. => Advice::new(Move::Stand, "hard 17 or more stands"),
        13..=16 => {
            if between(dealer, 2, 6) {
                Advice::new(Move::Stand, "let the dealer bust on a weak upcard")
            } else {
                Advice::new(Move::Hit, "hard 13-16 must improve against 7 or higher")
            }
        }
        12 => {
            if between(dealer, 4, 6) {
                Advice::new(Move::Stand, "hard 12 stands against 4 through 6")
            } else {
                Advice::new(Move::Hit, "hard 12 hits against 2, 3 or 7 and up")
            }
        }
        11 => {
            if can_double && between(dealer, 2, 10) {
                Advice::new(Move::Double, "double 11 against anything but an ace")
            } else {
                Advice::new(Move::Hit, "11 cannot bust")
            }
        }
        10 => {
            if can_double && between(dealer, 2, 9) {
                Advice::new(Move::Double, "double 10 against 2 through 9")
            } else {
                Advice::new(Move::Hit, "10 cannot bust")
            }
        }
        9 => {
            if can_double && between(dealer, 3, 6) {
                Advice::new(Move::Double, "double 9 against 3 through 6")
            } else {
                Advice::new(Move::Hit, "9 cannot bust")
            }
        }
        _ => Advice::new(Move::Hit, "8 or less always hits"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn pair_of_eights_splits_against_five() {
        assert_eq!(recommend(&hand("8h 8d"), Rank::Five, true, true).action, Move::Split);
    }

    #[test]
    fn soft_18_hits_against_nine() {
        assert_eq!(recommend(&hand("Ah 7d"), Rank::Nine, true, true).action, Move::Hit);
    }

    #[test]
    fn hard_11_doubles_against_six() {
        assert_eq!(recommend(&hand("5h 6d"), Rank::Six, false, true).action, Move::Double);
    }

    #[test]
    fn face_pairs_normalize_to_tens() {
        assert_eq!(recommend(&hand("Kh Kd"), Rank::Six, true, true).action, Move::Stand);
        assert_eq!(recommend(&hand("Jh Jd"), Rank::Ace, true, true).action, Move::Stand);
    }

    #[test]
    fn pair_tier_needs_split_eligibility() {
        // Without a split the eights are a hard 16.
        assert_eq!(recommend(&hand("8h 8d"), Rank::Ten, false, true).action, Move::Hit);
        assert_eq!(recommend(&hand("8h 8d"), Rank::Five, false, true).action, Move::Stand);
    }

    #[test]
    fn face_upcards_count_as_ten() {
        assert_eq!(recommend(&hand("9h 2d"), Rank::King, false, true).action, Move::Double);
        assert_eq!(recommend(&hand("9h 2d"), Rank::Ace, false, true).action, Move::Hit);
    }

    #[test]
    fn nines_stand_against_seven() {
        assert_eq!(recommend(&hand("9h 9d"), Rank::Seven, true, true).action, Move::Stand);
        assert_eq!(recommend(&hand("9h 9d"), Rank::Eight, true, true).action, Move::Split);
    }

    #[test]
    fn fives_double_or_hit() {
        assert_eq!(recommend(&hand("5h 5d"), Rank::Nine, true, true).action, Move::Double);
        assert_eq!(recommend(&hand("5h 5d"), Rank::Nine, true, false).action, Move::Hit);
        assert_eq!(recommend(&hand("5h 5d"), Rank::Ten, true, true).action, Move::Hit);
    }

    #[test]
    fn soft_19_doubles_only_against_six() {
        assert_eq!(recommend(&hand("Ah 8d"), Rank::Six, true, true).action, Move::Double);
        assert_eq!(recommend(&hand("Ah 8d"), Rank::Six, true, false).action, Move::Stand);
        assert_eq!(recommend(&hand("Ah 8d"), Rank::Five, true, true).action, Move::Stand);
    }

    #[test]
    fn unsplittable_aces_hit_as_soft_12() {
        assert_eq!(recommend(&hand("Ah Ad"), Rank::Five, false, true).action, Move::Hit);
    }

    #[test]
    fn hard_totals() {
        assert_eq!(recommend(&hand("10h 7d"), Rank::Ace, false, true).action, Move::Stand);
        assert_eq!(recommend(&hand("10h 3d"), Rank::Six, false, true).action, Move::Stand);
        assert_eq!(recommend(&hand("10h 3d"), Rank::Seven, false, true).action, Move::Hit);
        assert_eq!(recommend(&hand("10h 2d"), Rank::Three, false, true).action, Move::Hit);
        assert_eq!(recommend(&hand("5h 4d"), Rank::Two, false, true).action, Move::Hit);
        assert_eq!(recommend(&hand("5h 3d"), Rank::Six, false, true).action, Move::Hit);
    }

    #[test]
    fn advice_never_mutates_the_hand() {
        let h = hand("Ah 6d");
        let before = h.clone();
        let _ = recommend(&h, Rank::Four, true, true);
        assert_eq!(h, before);
    }
}
