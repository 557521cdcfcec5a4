//! The shoe: a shuffled multiset of cards drawn from one or more decks.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{ACE, Card, DECK_SIZE, MIN_RANK, Suit};

/// A card drawn from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawn {
    /// The card that was drawn.
    pub card: Card,
    /// Whether the shoe ran dry and was rebuilt before this draw.
    pub reshuffled: bool,
}

/// A shuffled shoe built from `decks` standard 52-card decks.
///
/// Cards are drawn from the end of the sequence. An empty shoe rebuilds
/// itself from the same number of decks on the next draw, so drawing never
/// fails.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds and shuffles a shoe of `decks` decks with the given seed.
    ///
    /// A deck count of zero is treated as one deck.
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::Shoe;
    ///
    /// let shoe = Shoe::new(2, 7);
    /// assert_eq!(shoe.remaining(), 104);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = build(decks, &mut rng);
        Self { cards, decks, rng }
    }

    /// Discards the remaining cards and rebuilds a freshly shuffled shoe.
    pub fn rebuild(&mut self) {
        self.cards = build(self.decks, &mut self.rng);
    }

    /// Draws the next card, rebuilding the shoe first if it is empty.
    #[expect(
        clippy::missing_panics_doc,
        reason = "deck count is clamped to at least one on construction"
    )]
    pub fn draw(&mut self) -> Drawn {
        let reshuffled = self.cards.is_empty();
        if reshuffled {
            self.rebuild();
            log::info!(
                "shoe exhausted, reshuffled {} deck(s) ({} cards)",
                self.decks,
                self.cards.len()
            );
        }

        let card = self
            .cards
            .pop()
            .expect("a rebuilt shoe holds at least one deck");
        Drawn { card, reshuffled }
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the size of a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the remaining cards; the last card is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the remaining cards with `cards`; the last card is drawn next.
    ///
    /// Useful to stack the shoe for a replay or a test. A later rebuild still
    /// uses the configured deck count.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Counts the remaining cards relative to `rank`.
    #[must_use]
    pub fn composition(&self, rank: u8) -> Composition {
        Composition::of(&self.cards, rank)
    }
}

/// Remaining cards split by comparison with a reference rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Composition {
    /// Cards ranked strictly above the reference.
    pub high: usize,
    /// Cards ranked strictly below the reference.
    pub low: usize,
    /// Cards of the same rank as the reference.
    pub same: usize,
}

impl Composition {
    /// Counts `cards` relative to `rank`.
    #[must_use]
    pub fn of(cards: &[Card], rank: u8) -> Self {
        cards.iter().fold(Self::default(), |mut acc, card| {
            match card.rank.cmp(&rank) {
                core::cmp::Ordering::Greater => acc.high += 1,
                core::cmp::Ordering::Less => acc.low += 1,
                core::cmp::Ordering::Equal => acc.same += 1,
            }
            acc
        })
    }

    /// Total number of cards counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.high + self.low + self.same
    }
}

fn build(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

    for _ in 0..decks {
        for rank in MIN_RANK..=ACE {
            for suit in Suit::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards.shuffle(rng);
    cards
}
