use crate::bankroll::Bankroll;
use crate::error::{CashOutError, ConfigError};
use crate::options::MIN_INITIAL_BALANCE;
use crate::result::CashOut;

use super::GameSession;

impl GameSession {
    /// Banks the pot into the balance and starts a new round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is bust, the pot is empty, or the
    /// balance would overflow. The pot is kept on overflow.
    pub fn cash_out(&mut self) -> Result<CashOut, CashOutError> {
        if self.round.is_bust() {
            return Err(CashOutError::RoundAlreadyBust);
        }
        let amount = self.round.pot();
        if amount == 0 {
            return Err(CashOutError::NothingToCashOut);
        }

        self.bankroll.credit(amount)?;
        self.reset_round();

        let balance = self.bankroll.balance();
        log::debug!("cashed out {amount}, balance {balance}");

        Ok(CashOut { amount, balance })
    }

    /// Starts a new round: fresh shoe and current card, empty pot and
    /// history, bust flag cleared. The balance is not touched.
    ///
    /// Any chips left in the pot are discarded; cash out first to keep them.
    pub fn reset_round(&mut self) {
        self.round.restart();
        log::debug!(
            "round reset, current card {}, {} cards in shoe",
            self.round.current(),
            self.round.shoe().remaining()
        );
    }

    /// Replaces the bankroll with `initial_balance` and starts a new round.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_balance` is below [`MIN_INITIAL_BALANCE`].
    pub fn configure_bankroll(&mut self, initial_balance: usize) -> Result<(), ConfigError> {
        if initial_balance < MIN_INITIAL_BALANCE {
            return Err(ConfigError::BalanceTooLow {
                minimum: MIN_INITIAL_BALANCE,
            });
        }

        self.bankroll = Bankroll::new(initial_balance);
        self.reset_round();

        Ok(())
    }
}
