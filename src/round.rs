//! Per-round state: the current card, the pot, and recent history.

use alloc::collections::VecDeque;

use crate::card::Card;
use crate::shoe::{Drawn, Shoe};

/// State of one round, from the first card to cash-out or bust.
///
/// The round owns the shoe. Starting a new round rebuilds the shoe and turns
/// over a fresh current card.
#[derive(Debug, Clone)]
pub struct RoundState {
    shoe: Shoe,
    current: Card,
    pot: usize,
    bust: bool,
    history: VecDeque<Card>,
    history_len: usize,
}

impl RoundState {
    /// Starts a round with `shoe`, turning over its top card.
    #[must_use]
    pub(crate) fn new(mut shoe: Shoe, history_len: usize) -> Self {
        let Drawn { card, .. } = shoe.draw();
        Self {
            shoe,
            current: card,
            pot: 0,
            bust: false,
            history: VecDeque::with_capacity(history_len),
            history_len,
        }
    }

    /// Rebuilds the shoe and starts over with an empty pot and history.
    pub(crate) fn restart(&mut self) {
        self.shoe.rebuild();
        self.current = self.shoe.draw().card;
        self.pot = 0;
        self.bust = false;
        self.history.clear();
    }

    /// Moves `next` into the current position, pushing the old card onto the
    /// front of the history.
    pub(crate) fn advance(&mut self, next: Card) {
        self.history.push_front(self.current);
        self.history.truncate(self.history_len);
        self.current = next;
    }

    /// The card the next bet is judged against.
    #[must_use]
    pub const fn current(&self) -> Card {
        self.current
    }

    /// Amount currently riding on the round.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.pot
    }

    pub(crate) const fn set_pot(&mut self, pot: usize) {
        self.pot = pot;
    }

    /// Whether the round has been lost and awaits a reset.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.bust
    }

    pub(crate) const fn mark_bust(&mut self) {
        self.bust = true;
    }

    /// Previous current cards, newest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.history.iter()
    }

    /// The shoe the round draws from.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Mutable access to the shoe.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }
}
