use rand::Rng;
use tracing::trace;

use crate::error::DrawError;
use crate::result::{EpisodeResult, Outcome};

use super::BlackjackEnv;

impl<R: Rng> BlackjackEnv<R> {
    fn bust(&self, doubled: bool) -> EpisodeResult {
        EpisodeResult {
            outcome: Outcome::Bust,
            doubled,
            player_score: self.player.score(),
            dealer_score: None,
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the episode result if the card busts the hand.
    pub(super) fn hit(&mut self) -> Result<Option<EpisodeResult>, DrawError> {
        let card = self.draw()?;
        self.player.add_card(card);
        trace!(card, total = self.player.value(), "player hit");

        if self.player.is_bust() {
            return Ok(Some(self.bust(false)));
        }

        Ok(None)
    }

    /// Player action: Stand (keep current hand, dealer reveals and plays).
    pub(super) fn stand(&mut self) -> Result<Option<EpisodeResult>, DrawError> {
        self.dealer.reveal_hole();
        self.dealer_play()?;
        Ok(Some(self.settle(false)))
    }

    /// Player action: Double down (receive exactly one card, then stand).
    ///
    /// The episode always ends. A bust ends it before the dealer plays. The
    /// dealer's hole card stays hidden from the count channel either way.
    pub(super) fn double_down(&mut self) -> Result<Option<EpisodeResult>, DrawError> {
        let card = self.draw()?;
        self.player.add_card(card);
        trace!(card, total = self.player.value(), "player doubled");

        if self.player.is_bust() {
            return Ok(Some(self.bust(true)));
        }

        self.dealer_play()?;
        Ok(Some(self.settle(true)))
    }
}
