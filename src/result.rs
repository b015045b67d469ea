//! Trick and hand result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::player::PlayerId;
use crate::trick::Play;

/// Outcome of one resolved trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResult {
    /// Trick number within the hand, starting at 1.
    pub number: u8,
    /// Cards played, in play order.
    pub plays: Vec<Play>,
    /// The winning play.
    pub winner: Play,
}

impl TrickResult {
    /// Returns the card that led the trick.
    #[must_use]
    pub fn lead_card(&self) -> Option<Card> {
        self.plays.first().map(|p| p.card)
    }
}

/// One player's standing after a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: PlayerId,
    /// Whether the player played the hand.
    pub playing: bool,
    /// Tricks won.
    pub tricks_won: u8,
    /// Whether the player played and took no trick.
    pub gone_bourre: bool,
    /// Whether the player could not cover the ante.
    pub out_of_chips: bool,
    /// Chip balance after the payout.
    pub chips: usize,
}

/// Result of a scored hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// The trump card of the hand.
    pub trump_card: Card,
    /// The hand winner, if anyone played.
    pub winner: Option<PlayerId>,
    /// Chips paid to the winner (0 when the pot carries over).
    pub payout: usize,
    /// Chips left in the pot for the next hand.
    pub carried_over: usize,
    /// Players who went bourré, in turn order.
    pub gone_bourre: Vec<PlayerId>,
    /// Per-player results, in turn order.
    pub players: Vec<PlayerResult>,
}
