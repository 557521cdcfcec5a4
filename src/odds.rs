//! Payout multipliers derived from the shoe's remaining composition.

use core::fmt;

use crate::card::ACE;
use crate::options::{GameOptions, TiePolicy};
use crate::shoe::Composition;

/// A payout multiplier with two decimal places, stored in hundredths.
///
/// `Multiplier::from_hundredths(195)` is `x1.95`. Applying a multiplier to an
/// amount floors the result, so all pot arithmetic stays in whole units.
///
/// ```
/// use hilors::Multiplier;
///
/// let m = Multiplier::from_hundredths(195);
/// assert_eq!(m.apply(10_000), Some(19_500));
/// assert_eq!(m.apply(usize::MAX), None);
/// assert_eq!(m.to_string(), "x1.95");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier(u32);

impl Multiplier {
    /// The neutral multiplier, `x1.00`.
    pub const ONE: Self = Self(100);

    /// Creates a multiplier from hundredths.
    #[must_use]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Returns the multiplier in hundredths.
    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// Returns the multiplier as a float, for display.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns `floor(amount * self)`, or `None` if it does not fit in a
    /// `usize`.
    #[must_use]
    pub const fn apply(self, amount: usize) -> Option<usize> {
        let scaled = amount as u128 * self.0 as u128 / 100;
        if scaled > usize::MAX as u128 {
            return None;
        }
        Some(scaled as usize)
    }

    /// Fair odds for `count` winning cards out of `total`, rounded to two
    /// decimal places with ties to even. Returns `None` when no card wins.
    ///
    /// Rounding works on the exact ratio. `72` winning cards out of `81` is
    /// exactly `1.125` and pays `x1.12`; `8` out of `11` is `1.375` and pays
    /// `x1.38`.
    #[must_use]
    pub const fn fair(count: usize, total: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let count = count as u64;
        let scaled = 100 * total as u64;
        let (quotient, remainder) = (scaled / count, scaled % count);
        let twice = 2 * remainder;
        let round_up = twice > count || (twice == count && quotient % 2 == 1);
        let hundredths = if round_up { quotient + 1 } else { quotient };
        Some(Self(hundredths as u32))
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Multipliers offered for the rank bets against the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Odds {
    /// Multiplier for the "higher or same" bet ("same" against an Ace).
    pub primary: Multiplier,
    /// Multiplier for the "lower or under" bet.
    pub secondary: Multiplier,
}

impl Odds {
    /// Odds offered when the shoe is empty.
    pub const DEGENERATE: Self = Self {
        primary: Multiplier::ONE,
        secondary: Multiplier::ONE,
    };
}

/// Computes the rank-bet odds for `current_rank` against the remaining cards.
///
/// Against an Ace the primary bet needs another Ace and the secondary bet
/// wins on any other rank, whatever the tie policy. Otherwise equal ranks
/// count for both bets under [`TiePolicy::WinsBoth`] and for neither under
/// [`TiePolicy::LosesBoth`].
///
/// Each value is clamped to `options.odds_ceiling`; a bet with no winning
/// card left pays `options.odds_floor`.
#[must_use]
pub fn calculate(current_rank: u8, composition: Composition, options: &GameOptions) -> Odds {
    let total = composition.total();
    if total == 0 {
        return Odds::DEGENERATE;
    }

    let Composition { high, low, same } = composition;
    let (primary, secondary) = if current_rank == ACE {
        (same, low)
    } else {
        match options.tie_policy {
            TiePolicy::WinsBoth => (high + same, low + same),
            TiePolicy::LosesBoth => (high, low),
        }
    };

    let price = |count: usize| {
        Multiplier::fair(count, total)
            .unwrap_or(options.odds_floor)
            .min(options.odds_ceiling)
    };

    Odds {
        primary: price(primary),
        secondary: price(secondary),
    }
}
