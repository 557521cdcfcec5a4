//! Error types for game operations.
//!
//! Every rejection leaves the session exactly as it was.

use thiserror::Error;

/// Errors that can occur when adding chips to the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PotError {
    /// Chip amount is zero.
    #[error("chip amount is zero")]
    ZeroAmount,
    /// The balance does not cover the chip amount.
    #[error("insufficient balance")]
    InsufficientBalance,
    /// The round is bust and waiting for a reset.
    #[error("round is already bust")]
    RoundAlreadyBust,
    /// The pot would exceed `usize::MAX`.
    #[error("pot would overflow")]
    PotOverflow,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The pot is empty.
    #[error("no active bet, add chips to the pot first")]
    NoActiveBet,
    /// The round is bust and waiting for a reset.
    #[error("round is already bust")]
    RoundAlreadyBust,
    /// A win would push the pot past `usize::MAX`. No card is drawn.
    #[error("payout would overflow")]
    PayoutOverflow,
}

/// Errors that can occur when cashing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CashOutError {
    /// The pot is empty.
    #[error("nothing to cash out")]
    NothingToCashOut,
    /// The round is bust and waiting for a reset.
    #[error("round is already bust")]
    RoundAlreadyBust,
    /// The balance would exceed `usize::MAX`.
    #[error("balance would overflow")]
    BalanceOverflow,
}

/// Errors that can occur when configuring the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested balance is below the table minimum.
    #[error("initial balance must be at least {minimum}")]
    BalanceTooLow {
        /// The smallest accepted balance.
        minimum: usize,
    },
}
