use crate::card::{Card, HAND_SIZE};
use crate::error::DealError;

use super::{Game, HandPhase};

impl Game {
    /// Deals five cards to every player and reveals the trump card.
    ///
    /// Cards go out one at a time in turn order. The dealer, who is last in
    /// turn order, receives the final card; it becomes the trump card and
    /// stays in the dealer's hand.
    ///
    /// Returns the trump card.
    ///
    /// # Errors
    ///
    /// Returns an error if antes have not been collected or the deck cannot
    /// supply five cards per player.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        if self.phase != HandPhase::Dealing {
            return Err(DealError::InvalidState);
        }

        let seats = self.ordered_seats();
        let Some(&dealer) = seats.last() else {
            return Err(DealError::InvalidState);
        };
        if self.deck.remaining() < seats.len() * HAND_SIZE {
            return Err(DealError::NotEnoughCards);
        }

        if self.options.shuffle {
            self.deck.shuffle(&mut self.rng);
        }

        for _ in 0..HAND_SIZE {
            for &idx in &seats {
                self.deck
                    .deal_to(&mut self.seats[idx].player)
                    .ok_or(DealError::NotEnoughCards)?;
            }
        }

        let dealer = &self.seats[dealer].player;
        let trump = dealer
            .hand()
            .get(HAND_SIZE - 1)
            .copied()
            .ok_or(DealError::NotEnoughCards)?;

        tracing::info!(dealer = dealer.id(), trump = %trump, "trump card revealed");
        self.hand.trump_card = Some(trump);
        self.phase = HandPhase::PassOrPlay;

        Ok(trump)
    }
}
