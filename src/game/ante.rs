use crate::error::AnteError;

use super::{Game, HandPhase, HandState, MAX_PLAYERS, MIN_PLAYERS};

impl Game {
    /// Starts a hand: fixes the turn order and collects the ante from every
    /// player.
    ///
    /// A player who cannot cover the ante puts in what they have, is flagged
    /// out of chips, and still takes part in the hand. If no dealer has been
    /// assigned, one is picked at random.
    ///
    /// Returns the pot size after the antes.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not between hands, fewer than two
    /// players are seated, or more are seated than the deck can deal to.
    /// Nothing is collected in those cases.
    pub fn ante(&mut self) -> Result<usize, AnteError> {
        if self.phase != HandPhase::WaitingForPlayers {
            return Err(AnteError::InvalidState);
        }
        if self.seats.len() < MIN_PLAYERS {
            return Err(AnteError::NotEnoughPlayers);
        }
        if self.seats.len() > MAX_PLAYERS {
            return Err(AnteError::TooManyPlayers);
        }
        if self.dealer().is_none() {
            self.assign_random_dealer();
        }

        self.hand = HandState::new();
        self.hand.order = self.turn_order();

        for seat in &mut self.seats {
            seat.player.reset_for_hand();
        }

        let ante = self.options.ante;
        for idx in self.ordered_seats() {
            let player = &mut self.seats[idx].player;
            let paid = player.take_chips(ante);
            if paid < ante {
                player.set_out_of_chips(true);
                tracing::warn!(player = player.id(), paid, ante, "player ran out of chips");
            }
            self.pot.collect(player.id(), paid);
        }

        tracing::info!(pot = self.pot.size(), players = self.hand.order.len(), "antes collected");
        self.phase = HandPhase::Dealing;

        Ok(self.pot.size())
    }
}
