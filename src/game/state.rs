//! Hand phase and per-hand state.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::player::PlayerId;

/// Phase of the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPhase {
    /// Between hands; seats and dealer may change.
    WaitingForPlayers,
    /// Antes are in; cards are about to be dealt.
    Dealing,
    /// Trump is revealed; players decide to pass or play and exchange.
    PassOrPlay,
    /// Tricks are being played.
    Tricks,
    /// All tricks are played; the hand can be scored.
    Scoring,
    /// The hand is scored; clear it before the next one.
    HandOver,
}

/// State that lives for one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandState {
    /// The dealer's fifth card, revealed after the deal.
    pub trump_card: Option<Card>,
    /// The card leading the current trick.
    pub lead_card: Option<Card>,
    /// The current trick number, starting at 1.
    pub trick_number: u8,
    /// Turn order: the player after the dealer first, the dealer last.
    pub order: Vec<PlayerId>,
}

impl HandState {
    /// Creates an empty hand state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trump_card: None,
            lead_card: None,
            trick_number: 1,
            order: Vec::new(),
        }
    }
}

impl Default for HandState {
    fn default() -> Self {
        Self::new()
    }
}
