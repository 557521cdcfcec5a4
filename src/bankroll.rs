//! The player's persistent balance.

use crate::error::{CashOutError, PotError};

/// Money the player holds outside the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    balance: usize,
}

impl Bankroll {
    /// Creates a bankroll holding `balance`.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self { balance }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Removes `amount` from the balance.
    ///
    /// # Errors
    ///
    /// Returns [`PotError::InsufficientBalance`] and leaves the balance
    /// untouched if `amount` exceeds it.
    pub const fn debit(&mut self, amount: usize) -> Result<(), PotError> {
        if self.balance < amount {
            return Err(PotError::InsufficientBalance);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Adds `amount` to the balance.
    ///
    /// # Errors
    ///
    /// Returns [`CashOutError::BalanceOverflow`] and leaves the balance
    /// untouched if the sum does not fit in a `usize`.
    pub const fn credit(&mut self, amount: usize) -> Result<(), CashOutError> {
        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                Ok(())
            }
            None => Err(CashOutError::BalanceOverflow),
        }
    }
}
