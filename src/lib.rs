//! A Hi-Lo card prediction game engine with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] type that runs the round flow:
//! chips go into a pot, each correct prediction about the next card
//! multiplies the pot by odds derived from the cards left in the shoe, a
//! wrong prediction forfeits it, and cashing out banks it into the balance.
//!
//! # Example
//!
//! ```
//! use hilors::{BetCategory, GameOptions, GameSession};
//!
//! let mut session = GameSession::new(GameOptions::default(), 42);
//! session.add_to_pot(10_000).unwrap();
//! let outcome = session.place_bet(BetCategory::Red).unwrap();
//! if outcome.is_win() {
//!     session.cash_out().unwrap();
//! } else if session.is_bust() {
//!     session.reset_round();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod bet;
pub mod card;
pub mod error;
pub mod game;
pub mod odds;
pub mod options;
pub mod result;
pub mod round;
pub mod shoe;

// Re-export main types
pub use bankroll::Bankroll;
pub use bet::BetCategory;
pub use card::{ACE, Card, Color, DECK_SIZE, Suit};
pub use error::{BetError, CashOutError, ConfigError, PotError};
pub use game::{GameSession, RoundPhase};
pub use odds::{Multiplier, Odds};
pub use options::{BustMode, CHIP_DENOMINATIONS, GameOptions, MIN_INITIAL_BALANCE, TiePolicy};
pub use result::{BetOutcome, CashOut, Resolution};
pub use round::RoundState;
pub use shoe::{Composition, Drawn, Shoe};
