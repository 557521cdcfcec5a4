use crate::bet::BetCategory;
use crate::error::BetError;
use crate::options::BustMode;
use crate::result::{BetOutcome, Resolution};
use crate::shoe::Drawn;

use super::GameSession;

impl GameSession {
    /// Bets the whole pot on `category` and draws the next card.
    ///
    /// The multiplier is fixed from the shoe as it stands before the draw.
    /// On a win the pot becomes `floor(pot * multiplier)` and the drawn card
    /// becomes the current card. On a loss the pot is forfeit; depending on
    /// [`BustMode`] the round either resets at once or is marked bust with
    /// the losing card left showing until [`reset_round`](Self::reset_round).
    ///
    /// An empty shoe is rebuilt before the draw; see
    /// [`BetOutcome::reshuffled`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is bust, the pot is empty, or a win
    /// would overflow the pot. Nothing is drawn in any of these cases.
    pub fn place_bet(&mut self, category: BetCategory) -> Result<BetOutcome, BetError> {
        if self.round.is_bust() {
            return Err(BetError::RoundAlreadyBust);
        }
        let pot_before = self.round.pot();
        if pot_before == 0 {
            return Err(BetError::NoActiveBet);
        }

        let previous = self.round.current();
        let multiplier = self.odds_for(category);
        let payout = multiplier
            .apply(pot_before)
            .ok_or(BetError::PayoutOverflow)?;
        let Drawn {
            card: drawn,
            reshuffled,
        } = self.round.shoe_mut().draw();

        let mut outcome = BetOutcome {
            category,
            previous,
            drawn,
            multiplier,
            pot_before,
            pot_after: 0,
            resolution: Resolution::Lost,
            reshuffled,
            round_reset: false,
        };

        if category.wins(&previous, &drawn, self.options.tie_policy) {
            outcome.pot_after = payout;
            outcome.resolution = Resolution::Won;
            self.round.set_pot(outcome.pot_after);
            self.round.advance(drawn);
            log::debug!(
                "{category:?} won on {drawn}, pot {pot_before} -> {}",
                outcome.pot_after
            );
            return Ok(outcome);
        }

        if !category.is_color() && !previous.is_ace() && drawn.rank == previous.rank {
            outcome.resolution = Resolution::Snap;
        }

        match self.options.bust_mode {
            BustMode::Immediate => {
                self.round.restart();
                outcome.round_reset = true;
            }
            BustMode::Deferred => {
                self.round.set_pot(0);
                self.round.advance(drawn);
                self.round.mark_bust();
            }
        }
        log::debug!("{category:?} lost on {drawn}, forfeited pot {pot_before}");

        Ok(outcome)
    }
}
