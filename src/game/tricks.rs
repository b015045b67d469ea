use crate::card::{Card, HAND_SIZE, Suit};
use crate::error::TrickError;
use crate::options::{FollowStrategy, GameOptions};
use crate::policy;
use crate::provider::Recovery;
use crate::result::TrickResult;
use crate::trick::{Trick, check_play, resolve_winner};

use super::{Game, HandPhase, Seat};

/// Asks for a card until the play is legal or the provider gives up, then
/// falls back to the conserving heuristic, which is always legal.
fn request_card(
    seat: &Seat,
    trick: &Trick,
    trump: Suit,
    options: &GameOptions,
) -> Result<Card, TrickError> {
    let hand = seat.player.hand();
    if hand.is_empty() {
        return Err(TrickError::EmptyHand);
    }
    let lead = trick.lead_card();

    for _ in 0..options.max_selection_attempts.max(1) {
        let card = seat.provider.choose_card(&seat.player, trick, trump);
        match check_play(hand, card, lead, trump, options.follow_rule) {
            Ok(()) => return Ok(card),
            Err(error) => {
                tracing::warn!(player = seat.player.id(), card = %card, %error, "illegal play");
                if seat.provider.on_illegal_selection(&seat.player, error) == Recovery::Fallback {
                    break;
                }
            }
        }
    }

    let card = policy::select_trick_card(hand, lead, trump, FollowStrategy::Conserve)
        .ok_or(TrickError::EmptyHand)?;
    tracing::warn!(player = seat.player.id(), card = %card, "playing default card");
    Ok(card)
}

impl Game {
    /// Plays one trick: every playing player, in turn order, plays a card.
    ///
    /// The first card played leads. The winner's trick count goes up, the
    /// played cards go to the discard pile, and after the fifth trick the
    /// hand moves to scoring.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not in the trick phase, or if a
    /// playing player has run out of cards or nobody played a card. The last
    /// two mean the engine's own bookkeeping is broken.
    pub fn play_trick(&mut self) -> Result<TrickResult, TrickError> {
        if self.phase != HandPhase::Tricks {
            return Err(TrickError::InvalidState);
        }
        let trump = self
            .hand
            .trump_card
            .ok_or(TrickError::InvalidState)?
            .suit;

        let mut trick = Trick::new(self.hand.trick_number);
        for idx in self.ordered_seats() {
            let seat = &mut self.seats[idx];
            if !seat.player.is_playing() {
                continue;
            }

            let card = request_card(seat, &trick, trump, &self.options)?;
            seat.player.remove_card(card);
            if trick.is_empty() {
                self.hand.lead_card = Some(card);
            }

            tracing::debug!(trick = trick.number(), player = seat.player.id(), card = %card, "card played");
            trick.push(seat.player.id(), card);
        }

        let lead = self.hand.lead_card.map(|c| c.suit);
        let winner = resolve_winner(&trick, trump, lead)?;
        if let Some(idx) = self.seat_index(winner.player) {
            self.seats[idx].player.win_trick();
        }
        tracing::info!(trick = trick.number(), player = winner.player, card = %winner.card, "trick won");

        let result = TrickResult {
            number: trick.number(),
            plays: trick.plays().to_vec(),
            winner,
        };

        for card in trick.into_cards() {
            self.deck.discard(card);
        }
        self.hand.lead_card = None;
        self.hand.trick_number += 1;
        if usize::from(self.hand.trick_number) > HAND_SIZE {
            self.phase = HandPhase::Scoring;
        }

        Ok(result)
    }
}
