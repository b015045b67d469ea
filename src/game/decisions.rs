extern crate alloc;

use alloc::vec::Vec;

use rand_chacha::ChaCha8Rng;

use crate::card::{ACE, Card};
use crate::deck::Deck;
use crate::error::{DeckError, ExchangeError, SelectionError};
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::provider::Recovery;

use super::{Game, HandPhase, Seat};

/// Checks that every discard is held, and listed only once.
fn check_discards(hand: &[Card], discards: &[Card]) -> Result<(), SelectionError> {
    if discards.len() > hand.len() {
        return Err(SelectionError::TooManyDiscards);
    }
    for (i, card) in discards.iter().enumerate() {
        if !hand.contains(card) {
            return Err(SelectionError::CardNotInHand);
        }
        if discards[..i].contains(card) {
            return Err(SelectionError::DuplicateCard);
        }
    }
    Ok(())
}

/// Asks for discards until they are legal or the provider gives up; an
/// illegal choice falls back to keeping the hand.
fn request_discards(seat: &Seat, trump: Card, options: &GameOptions) -> Vec<Card> {
    for _ in 0..options.max_selection_attempts.max(1) {
        let discards = seat.provider.choose_discards(&seat.player, trump);
        match check_discards(seat.player.hand(), &discards) {
            Ok(()) => return discards,
            Err(error) => {
                tracing::warn!(player = seat.player.id(), %error, "illegal discard selection");
                if seat.provider.on_illegal_selection(&seat.player, error) == Recovery::Fallback {
                    break;
                }
            }
        }
    }

    tracing::warn!(player = seat.player.id(), "keeping hand after illegal discards");
    Vec::new()
}

/// Swaps `discards` for fresh cards from the deck.
///
/// Replacements come from the deck while it lasts. Only the shortfall is
/// drawn after the discard pile, this player's discards included, is
/// reshuffled into the deck.
fn exchange(
    player: &mut Player,
    discards: &[Card],
    deck: &mut Deck,
    rng: &mut ChaCha8Rng,
) -> Result<(), DeckError> {
    if discards.is_empty() {
        return Ok(());
    }

    for &card in discards {
        if let Some(card) = player.remove_card(card) {
            deck.discard(card);
        }
    }

    let mut needed = discards.len();
    while needed > 0 && deck.deal_to(player).is_some() {
        needed -= 1;
    }

    if needed > 0 {
        deck.ensure_available(needed, rng)?;
        tracing::warn!(player = player.id(), needed, "deck ran low, discard pile reshuffled into deck");
        for _ in 0..needed {
            deck.deal_to(player).ok_or(DeckError::Exhausted)?;
        }
    }

    tracing::debug!(player = player.id(), exchanged = discards.len(), "cards exchanged");
    Ok(())
}

impl Game {
    /// Asks every player, in turn order, whether they play the hand.
    ///
    /// A dealer whose trump card is an ace must play and is not asked. Each
    /// player who plays exchanges cards right away, before the next player
    /// decides.
    ///
    /// Returns the players who chose to play, in turn order. If nobody
    /// plays, the hand goes straight to scoring.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not in the pass/play phase or the
    /// deck cannot supply replacement cards.
    pub fn pass_or_play(&mut self) -> Result<Vec<PlayerId>, ExchangeError> {
        if self.phase != HandPhase::PassOrPlay {
            return Err(ExchangeError::InvalidState);
        }
        let trump = self.hand.trump_card.ok_or(ExchangeError::InvalidState)?;

        let mut playing = Vec::new();
        for idx in self.ordered_seats() {
            let seat = &mut self.seats[idx];
            let id = seat.player.id();

            let plays = if seat.player.is_dealer() && trump.rank == ACE {
                tracing::info!(player = id, "dealer holds the ace trump and must play");
                true
            } else {
                seat.provider.choose_pass_or_play(&seat.player, trump)
            };
            seat.player.set_playing(plays);

            if !plays {
                tracing::info!(player = id, "player passes");
                continue;
            }

            tracing::info!(player = id, "player plays");
            playing.push(id);

            let discards = request_discards(seat, trump, &self.options);
            exchange(&mut seat.player, &discards, &mut self.deck, &mut self.rng)?;
        }

        self.phase = if playing.is_empty() {
            tracing::info!("every player passed");
            HandPhase::Scoring
        } else {
            HandPhase::Tricks
        };

        Ok(playing)
    }
}
