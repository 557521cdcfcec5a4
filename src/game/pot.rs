use crate::error::PotError;

use super::GameSession;

impl GameSession {
    /// Moves `amount` from the balance into the pot.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is zero, the round is bust, the balance
    /// does not cover `amount`, or the pot would overflow.
    pub fn add_to_pot(&mut self, amount: usize) -> Result<usize, PotError> {
        if amount == 0 {
            return Err(PotError::ZeroAmount);
        }
        if self.round.is_bust() {
            return Err(PotError::RoundAlreadyBust);
        }

        let pot = self
            .round
            .pot()
            .checked_add(amount)
            .ok_or(PotError::PotOverflow)?;
        self.bankroll.debit(amount)?;
        self.round.set_pot(pot);

        log::debug!(
            "added {amount} to pot, pot {pot}, balance {}",
            self.bankroll.balance()
        );

        Ok(pot)
    }
}
