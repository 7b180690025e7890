use rand::Rng;
use tracing::trace;

use crate::error::DrawError;
use crate::result::{EpisodeResult, Outcome};

use super::BlackjackEnv;

impl<R: Rng> BlackjackEnv<R> {
    /// Dealer plays their hand.
    ///
    /// The dealer draws while the total is below the stand value (17 unless
    /// configured otherwise). Soft totals count the ace as 11, so the dealer
    /// stands on soft 17. The hole card is not revealed here; only a stand
    /// reveals it to the observer.
    pub(super) fn dealer_play(&mut self) -> Result<(), DrawError> {
        while self.dealer.value() < self.options.dealer_stands_on {
            let card = self.draw()?;
            self.dealer.add_card(card);
            trace!(card, total = self.dealer.value(), "dealer drew");
        }

        Ok(())
    }

    /// Compares the player's hand against the dealer's final hand.
    pub(super) fn settle(&self, doubled: bool) -> EpisodeResult {
        EpisodeResult {
            outcome: Outcome::settle(&self.player, &self.dealer, self.options.natural),
            doubled,
            player_score: self.player.score(),
            dealer_score: Some(self.dealer.score()),
        }
    }
}
