//! Outcomes reported back to the caller.

use core::fmt;

use crate::bet::BetCategory;
use crate::card::Card;
use crate::odds::Multiplier;

/// How a bet was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The prediction was right and the pot grew.
    Won,
    /// The prediction was wrong and the pot is forfeit.
    Lost,
    /// A rank bet lost because the next card matched the current rank.
    Snap,
}

/// Result of a single bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetOutcome {
    /// The bet that was placed.
    pub category: BetCategory,
    /// The card the bet was judged against.
    pub previous: Card,
    /// The card drawn to settle the bet.
    pub drawn: Card,
    /// The multiplier the bet was offered at.
    pub multiplier: Multiplier,
    /// Pot before the bet.
    pub pot_before: usize,
    /// Pot after the bet (zero when the round was reset by the loss).
    pub pot_after: usize,
    /// How the bet was settled.
    pub resolution: Resolution,
    /// Whether the shoe ran out and was reshuffled for this draw.
    pub reshuffled: bool,
    /// Whether the loss already started a new round.
    pub round_reset: bool,
}

impl BetOutcome {
    /// Returns whether the bet won.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.resolution, Resolution::Won)
    }
}

impl fmt::Display for BetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reshuffled {
            f.write_str("Shoe reshuffled. ")?;
        }
        match self.resolution {
            Resolution::Won => write!(
                f,
                "{} wins, pot {} ({})",
                self.drawn, self.pot_after, self.multiplier
            ),
            Resolution::Lost => write!(f, "Bust! {}", self.drawn),
            Resolution::Snap => write!(f, "Snap! {} matches, bet lost", self.drawn),
        }
    }
}

/// Result of cashing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashOut {
    /// Amount moved from the pot to the balance.
    pub amount: usize,
    /// Balance after the cash-out.
    pub balance: usize,
}

impl fmt::Display for CashOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cashed out {} (balance {})", self.amount, self.balance)
    }
}
