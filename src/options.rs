//! Game configuration options.

use crate::odds::Multiplier;

/// Default number of decks in the shoe.
pub const DEFAULT_DECKS: u8 = 2;

/// Smallest balance a bankroll can be configured with.
pub const MIN_INITIAL_BALANCE: usize = 10_000;

/// Chip values offered to the player, smallest first.
pub const CHIP_DENOMINATIONS: [usize; 6] = [1_000, 5_000, 10_000, 50_000, 100_000, 500_000];

/// How a drawn card of the same rank as the current card is settled.
///
/// Has no effect against an Ace, where the primary bet needs another Ace and
/// the secondary bet needs anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TiePolicy {
    /// An equal rank wins both the "higher or same" and "lower or under" bets.
    #[default]
    WinsBoth,
    /// An equal rank loses both rank bets ("snap").
    LosesBoth,
}

impl TiePolicy {
    /// Odds ceiling conventionally paired with this policy.
    ///
    /// Counting ties for both sides shrinks the fair odds, so the table can
    /// afford a higher cap.
    #[must_use]
    pub const fn default_ceiling(self) -> Multiplier {
        match self {
            Self::WinsBoth => Multiplier::from_hundredths(5_000),
            Self::LosesBoth => Multiplier::from_hundredths(2_000),
        }
    }
}

/// What happens to the round after a losing bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BustMode {
    /// The round resets as part of the losing bet.
    Immediate,
    /// The round is marked bust and the losing card stays on the table until
    /// the caller invokes [`GameSession::reset_round`](crate::GameSession::reset_round).
    #[default]
    Deferred,
}

/// Configuration options for a Hi-Lo game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilors::{BustMode, GameOptions, TiePolicy};
///
/// let options = GameOptions::default()
///     .with_decks(4)
///     .with_tie_policy(TiePolicy::LosesBoth)
///     .with_bust_mode(BustMode::Immediate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// How equal ranks are settled.
    pub tie_policy: TiePolicy,
    /// What a losing bet does to the round.
    pub bust_mode: BustMode,
    /// Multiplier offered when no winning card is left in the shoe.
    pub odds_floor: Multiplier,
    /// Upper bound for rank-bet multipliers.
    pub odds_ceiling: Multiplier,
    /// Fixed multiplier for the color bets.
    pub color_multiplier: Multiplier,
    /// Number of previous cards kept in the history.
    pub history_len: usize,
    /// Balance a new session starts with.
    pub initial_balance: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            tie_policy: TiePolicy::WinsBoth,
            bust_mode: BustMode::Deferred,
            odds_floor: Multiplier::from_hundredths(101),
            odds_ceiling: TiePolicy::WinsBoth.default_ceiling(),
            color_multiplier: Multiplier::from_hundredths(195),
            history_len: 6,
            initial_balance: 1_000_000,
        }
    }
}

impl GameOptions {
    /// The simpler table: ties lose, a loss resets the round at once, and
    /// rank odds are capped at `x20.00`.
    ///
    /// ```
    /// use hilors::{BustMode, GameOptions, TiePolicy};
    ///
    /// let options = GameOptions::classic();
    /// assert_eq!(options.tie_policy, TiePolicy::LosesBoth);
    /// assert_eq!(options.bust_mode, BustMode::Immediate);
    /// ```
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            tie_policy: TiePolicy::LosesBoth,
            bust_mode: BustMode::Immediate,
            odds_floor: Multiplier::from_hundredths(101),
            odds_ceiling: TiePolicy::LosesBoth.default_ceiling(),
            color_multiplier: Multiplier::from_hundredths(195),
            history_len: 6,
            initial_balance: 1_000_000,
        }
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the tie policy together with its conventional odds ceiling.
    ///
    /// Call [`with_odds_ceiling`](Self::with_odds_ceiling) afterwards to pick
    /// a different cap.
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::{GameOptions, Multiplier, TiePolicy};
    ///
    /// let options = GameOptions::default().with_tie_policy(TiePolicy::LosesBoth);
    /// assert_eq!(options.odds_ceiling, Multiplier::from_hundredths(2_000));
    /// ```
    #[must_use]
    pub const fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self.odds_ceiling = policy.default_ceiling();
        self
    }

    /// Sets how a losing bet ends the round.
    #[must_use]
    pub const fn with_bust_mode(mut self, mode: BustMode) -> Self {
        self.bust_mode = mode;
        self
    }

    /// Sets the multiplier offered when no winning card remains.
    #[must_use]
    pub const fn with_odds_floor(mut self, floor: Multiplier) -> Self {
        self.odds_floor = floor;
        self
    }

    /// Sets the upper bound for rank-bet multipliers.
    #[must_use]
    pub const fn with_odds_ceiling(mut self, ceiling: Multiplier) -> Self {
        self.odds_ceiling = ceiling;
        self
    }

    /// Sets the fixed multiplier for the color bets.
    #[must_use]
    pub const fn with_color_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.color_multiplier = multiplier;
        self
    }

    /// Sets how many previous cards are kept.
    #[must_use]
    pub const fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    /// Sets the starting balance of a new session.
    ///
    /// Unlike [`GameSession::configure_bankroll`](crate::GameSession::configure_bankroll)
    /// this does not enforce [`MIN_INITIAL_BALANCE`].
    #[must_use]
    pub const fn with_initial_balance(mut self, balance: usize) -> Self {
        self.initial_balance = balance;
        self
    }
}
