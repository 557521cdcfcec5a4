//! Game session and round flow.

use alloc::vec::Vec;

use crate::bankroll::Bankroll;
use crate::bet::BetCategory;
use crate::card::Card;
use crate::odds::{self, Multiplier, Odds};
use crate::options::GameOptions;
use crate::round::RoundState;
use crate::shoe::Shoe;

mod bet;
mod cashout;
mod pot;
pub mod state;

pub use state::RoundPhase;

/// A single-player Hi-Lo session.
///
/// The session owns the bankroll and the current round (which owns the
/// shoe). Every command runs to completion and either applies in full or
/// returns an error without touching any state. Use [`GameOptions`] to pick
/// the tie policy, how a loss ends the round, and the payout limits.
#[derive(Debug, Clone)]
pub struct GameSession {
    options: GameOptions,
    bankroll: Bankroll,
    round: RoundState,
}

impl GameSession {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::{GameOptions, GameSession, RoundPhase};
    ///
    /// let session = GameSession::new(GameOptions::default(), 42);
    /// assert_eq!(session.balance(), 1_000_000);
    /// assert_eq!(session.phase(), RoundPhase::Idle);
    /// assert_eq!(session.remaining(), 103);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed);
        let round = RoundState::new(shoe, options.history_len);
        let bankroll = Bankroll::new(options.initial_balance);

        Self {
            options,
            bankroll,
            round,
        }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the card the next bet is judged against.
    #[must_use]
    pub const fn current_card(&self) -> Card {
        self.round.current()
    }

    /// Returns the amount riding on the round.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.round.pot()
    }

    /// Returns the player's balance outside the round.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.bankroll.balance()
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.round.shoe().remaining()
    }

    /// Returns the previous cards of this round, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<Card> {
        self.round.history().copied().collect()
    }

    /// Returns whether the round was lost and awaits [`reset_round`](Self::reset_round).
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.round.is_bust()
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        if self.round.is_bust() {
            RoundPhase::Bust
        } else if self.round.pot() > 0 {
            RoundPhase::Accumulating
        } else {
            RoundPhase::Idle
        }
    }

    /// Returns the rank-bet odds against the current card.
    #[must_use]
    pub fn odds(&self) -> Odds {
        let rank = self.round.current().rank;
        odds::calculate(rank, self.round.shoe().composition(rank), &self.options)
    }

    /// Returns the multiplier offered for `category` right now.
    #[must_use]
    pub fn odds_for(&self, category: BetCategory) -> Multiplier {
        match category {
            BetCategory::HiOrSame => self.odds().primary,
            BetCategory::LoOrUnder => self.odds().secondary,
            BetCategory::Red | BetCategory::Black => self.options.color_multiplier,
        }
    }

    /// Returns the pot a winning `category` bet would leave, saturating at
    /// `usize::MAX`.
    #[must_use]
    pub fn potential_payout(&self, category: BetCategory) -> usize {
        self.odds_for(category)
            .apply(self.round.pot())
            .unwrap_or(usize::MAX)
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        self.round.shoe()
    }

    /// Returns mutable access to the shoe, for stacking cards.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        self.round.shoe_mut()
    }
}
