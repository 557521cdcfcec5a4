//! Bet categories and their win conditions.

use crate::card::{Card, Color};
use crate::options::TiePolicy;

/// What the player predicts about the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetCategory {
    /// Next card ranks at or above the current card ("same" against an Ace).
    HiOrSame,
    /// Next card ranks at or below the current card (any non-Ace against an Ace).
    LoOrUnder,
    /// Next card is a heart or a diamond.
    Red,
    /// Next card is a spade or a club.
    Black,
}

impl BetCategory {
    /// All bet categories.
    pub const ALL: [Self; 4] = [Self::HiOrSame, Self::LoOrUnder, Self::Red, Self::Black];

    /// Returns whether the bet pays a fixed multiplier rather than odds
    /// derived from the shoe.
    #[must_use]
    pub const fn is_color(self) -> bool {
        matches!(self, Self::Red | Self::Black)
    }

    /// Button label for this bet against a card of `current_rank`.
    ///
    /// ```
    /// use hilors::BetCategory;
    ///
    /// assert_eq!(BetCategory::HiOrSame.label(14), "Same");
    /// assert_eq!(BetCategory::HiOrSame.label(9), "Over");
    /// ```
    #[must_use]
    pub const fn label(self, current_rank: u8) -> &'static str {
        match self {
            Self::HiOrSame if current_rank == crate::card::ACE => "Same",
            Self::HiOrSame => "Over",
            Self::LoOrUnder => "Under",
            Self::Red => "Red",
            Self::Black => "Black",
        }
    }

    /// Returns whether `next` wins this bet against `current`.
    #[must_use]
    pub const fn wins(self, current: &Card, next: &Card, ties: TiePolicy) -> bool {
        let ties_win = matches!(ties, TiePolicy::WinsBoth);
        match self {
            Self::HiOrSame if current.is_ace() => next.is_ace(),
            Self::LoOrUnder if current.is_ace() => !next.is_ace(),
            Self::HiOrSame => {
                next.rank > current.rank || (ties_win && next.rank == current.rank)
            }
            Self::LoOrUnder => {
                next.rank < current.rank || (ties_win && next.rank == current.rank)
            }
            Self::Red => matches!(next.color(), Color::Red),
            Self::Black => matches!(next.color(), Color::Black),
        }
    }
}
