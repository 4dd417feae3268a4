use blackjack_rs::cards::Rank;
use blackjack_rs::hand::Hand;
use blackjack_rs::strategy::{recommend, Move};

fn advise(cards: &str, upcard: Rank, can_split: bool, can_double: bool) -> Move {
    let hand: Hand = cards.parse().unwrap();
    recommend(&hand, upcard, can_split, can_double).action
}

const UPCARDS: [Rank; 10] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Ace,
];

#[test]
fn hard_seventeen_and_up_always_stands() {
    for up in UPCARDS {
        assert_eq!(advise("10h 7c", up, true, true), Move::Stand);
        assert_eq!(advise("10h 5c 4d", up, true, true), Move::Stand);
    }
}

#[test]
fn hard_sixteen_row() {
    for up in UPCARDS {
        let expected = if (2..=6).contains(&up.tier()) { Move::Stand } else { Move::Hit };
        assert_eq!(advise("10h 6c", up, true, true), expected, "16 vs {up}");
    }
}

#[test]
fn hard_twelve_row() {
    let row = [
        Move::Hit,
        Move::Hit,
        Move::Stand,
        Move::Stand,
        Move::Stand,
        Move::Hit,
        Move::Hit,
        Move::Hit,
        Move::Hit,
        Move::Hit,
    ];
    for (up, expected) in UPCARDS.into_iter().zip(row) {
        assert_eq!(advise("10h 2c", up, true, true), expected, "12 vs {up}");
    }
}

#[test]
fn eleven_doubles_except_against_ace() {
    assert_eq!(advise("6h 5c", Rank::Ten, true, true), Move::Double);
    assert_eq!(advise("6h 5c", Rank::King, true, true), Move::Double);
    assert_eq!(advise("6h 5c", Rank::Ace, true, true), Move::Hit);
    assert_eq!(advise("6h 5c", Rank::Six, true, false), Move::Hit);
}

#[test]
fn soft_rows() {
    assert_eq!(advise("Ah 7c", Rank::Two, true, true), Move::Stand);
    assert_eq!(advise("Ah 7c", Rank::Four, true, true), Move::Double);
    assert_eq!(advise("Ah 7c", Rank::Four, true, false), Move::Hit);
    assert_eq!(advise("Ah 7c", Rank::Nine, true, true), Move::Hit);
    assert_eq!(advise("Ah 8c", Rank::Six, true, true), Move::Double);
    assert_eq!(advise("Ah 8c", Rank::Six, true, false), Move::Stand);
    assert_eq!(advise("Ah 2c", Rank::Five, true, true), Move::Double);
    assert_eq!(advise("Ah 2c", Rank::Four, true, true), Move::Hit);
}

#[test]
fn pair_rows() {
    assert_eq!(advise("Ah Ac", Rank::Ace, true, true), Move::Split);
    assert_eq!(advise("Kh Kc", Rank::Six, true, true), Move::Stand);
    assert_eq!(advise("9h 9c", Rank::Seven, true, true), Move::Stand);
    assert_eq!(advise("9h 9c", Rank::Eight, true, true), Move::Split);
    assert_eq!(advise("5h 5c", Rank::Nine, true, true), Move::Double);
    assert_eq!(advise("4h 4c", Rank::Five, true, true), Move::Split);
    assert_eq!(advise("4h 4c", Rank::Four, true, true), Move::Hit);
    assert_eq!(advise("2h 2c", Rank::Eight, true, true), Move::Hit);
}

#[test]
fn pairs_fall_through_when_split_is_unavailable() {
    // 8,8 without a split is hard 16.
    assert_eq!(advise("8h 8c", Rank::Ten, false, true), Move::Hit);
    assert_eq!(advise("8h 8c", Rank::Five, false, true), Move::Stand);
    // A,A without a split is soft 12.
    assert_eq!(advise("Ah Ac", Rank::Six, false, true), Move::Hit);
}

#[test]
fn mixed_face_cards_are_not_a_pair() {
    assert_eq!(advise("Jh Qc", Rank::Six, true, true), Move::Stand);
}
