extern crate alloc;

use alloc::vec::Vec;

use crate::error::ScoreError;
use crate::result::{HandResult, PlayerResult};

use super::{Game, HandPhase};

impl Game {
    /// Scores the hand and pays the pot.
    ///
    /// The player with the most tricks wins the whole pot; a tie goes to
    /// whoever is earlier in turn order. Every player who played and took no
    /// trick goes bourré. If nobody played, the pot carries over.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not ready for scoring.
    pub fn score(&mut self) -> Result<HandResult, ScoreError> {
        if self.phase != HandPhase::Scoring {
            return Err(ScoreError::InvalidState);
        }
        let trump_card = self.hand.trump_card.ok_or(ScoreError::InvalidState)?;
        let seats = self.ordered_seats();

        let mut best: Option<(usize, u8)> = None;
        for &idx in &seats {
            let tricks = self.seats[idx].player.tricks_won();
            if tricks > 0 && best.is_none_or(|(_, most)| tricks > most) {
                best = Some((idx, tricks));
            }
        }

        let mut gone_bourre = Vec::new();
        for &idx in &seats {
            let player = &mut self.seats[idx].player;
            let bourre = player.is_playing() && player.tricks_won() == 0;
            player.set_gone_bourre(bourre);
            if bourre {
                tracing::info!(player = player.id(), "player went bourré");
                gone_bourre.push(player.id());
            }
        }

        let (winner, payout) = match best {
            Some((idx, tricks)) => {
                let player = &mut self.seats[idx].player;
                let amount = self.pot.payout(player.id());
                player.add_chips(amount);
                tracing::info!(player = player.id(), tricks, amount, "hand won");
                (Some(player.id()), amount)
            }
            None => {
                tracing::info!(pot = self.pot.size(), "no winner, pot carries over");
                (None, 0)
            }
        };

        let players = seats
            .iter()
            .map(|&idx| {
                let player = &self.seats[idx].player;
                PlayerResult {
                    player_id: player.id(),
                    playing: player.is_playing(),
                    tricks_won: player.tricks_won(),
                    gone_bourre: player.has_gone_bourre(),
                    out_of_chips: player.is_out_of_chips(),
                    chips: player.chips(),
                }
            })
            .collect();

        self.phase = HandPhase::HandOver;

        Ok(HandResult {
            trump_card,
            winner,
            payout,
            carried_over: self.pot.size(),
            gone_bourre,
            players,
        })
    }
}
