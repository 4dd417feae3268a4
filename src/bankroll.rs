#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WagerError {
    #[error("wager must be positive")]
    NonPositive,
    #[error("wager of {amount} exceeds balance of {balance}")]
    Insufficient { amount: u64, balance: u64 },
}

/// The player's chips. Only `bet`, `win` and `push` move the balance.
///
/// ```
/// use blackjack_rs::bankroll::Bankroll;
///
/// let mut roll = Bankroll::new(100);
/// let stake = roll.bet(10).unwrap();
/// assert_eq!(roll.balance(), 90);
/// roll.win(stake);
/// assert_eq!(roll.balance(), 110);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    balance: u64,
}

impl Bankroll {
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn can_cover(&self, amount: u64) -> bool {
        amount > 0 && amount <= self.balance
    }

    /// Deduct a wager and return it.
    pub fn bet(&mut self, amount: u64) -> Result<u64, WagerError> {
        if amount == 0 {
            return Err(WagerError::NonPositive);
        }
        if amount > self.balance {
            return Err(WagerError::Insufficient { amount, balance: self.balance });
        }
        self.balance -= amount;
        Ok(amount)
    }

    /// Return the stake plus equal winnings.
    pub fn win(&mut self, bet: u64) {
        self.balance = self.balance.saturating_add(bet.saturating_mul(2));
    }

    /// Return the stake.
    pub fn push(&mut self, bet: u64) {
        self.balance = self.balance.saturating_add(bet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_then_win_pays_even_money() {
        let mut b = Bankroll::new(100);
        assert_eq!(b.bet(10), Ok(10));
        assert_eq!(b.balance(), 90);
        b.win(10);
        assert_eq!(b.balance(), 110);
    }

    #[test]
    fn push_returns_the_stake() {
        let mut b = Bankroll::new(50);
        let stake = b.bet(20).unwrap();
        b.push(stake);
        assert_eq!(b.balance(), 50);
    }

    #[test]
    fn oversized_bet_leaves_balance_alone() {
        let mut b = Bankroll::new(15);
        assert_eq!(b.bet(20), Err(WagerError::Insufficient { amount: 20, balance: 15 }));
        assert_eq!(b.balance(), 15);
    }

    #[test]
    fn zero_bet_is_rejected() {
        let mut b = Bankroll::new(15);
        assert_eq!(b.bet(0), Err(WagerError::NonPositive));
        assert!(!b.can_cover(0));
    }

    #[test]
    fn whole_balance_can_be_wagered() {
        let mut b = Bankroll::new(10);
        assert!(b.can_cover(10));
        b.bet(10).unwrap();
        assert_eq!(b.balance(), 0);
        assert!(!b.can_cover(1));
    }
}
