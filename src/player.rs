//! Player state: held cards, chips, and per-hand flags.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Identifier assigned to a player when they join a game.
pub type PlayerId = u8;

/// A seated player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Player ID.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Cards currently held.
    hand: Vec<Card>,
    /// Chip balance.
    chips: usize,
    /// Whether this player deals the current hand.
    dealer: bool,
    /// Whether this player chose to play the current hand.
    playing: bool,
    /// Tricks won in the current hand.
    tricks_won: u8,
    /// Whether the player could not cover the last ante.
    out_of_chips: bool,
    /// Whether the player played the last hand and took no trick.
    gone_bourre: bool,
}

impl Player {
    /// Creates a new player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, chips: usize) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            chips,
            dealer: false,
            playing: false,
            tricks_won: 0,
            out_of_chips: false,
            gone_bourre: false,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand, in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns whether this player is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        self.dealer
    }

    /// Returns whether this player is playing the current hand.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns the number of tricks won in the current hand.
    #[must_use]
    pub const fn tricks_won(&self) -> u8 {
        self.tricks_won
    }

    /// Returns whether the player could not cover the last ante in full.
    #[must_use]
    pub const fn is_out_of_chips(&self) -> bool {
        self.out_of_chips
    }

    /// Returns whether the player went bourré in the last scored hand.
    #[must_use]
    pub const fn has_gone_bourre(&self) -> bool {
        self.gone_bourre
    }

    /// Returns whether the player holds the given card.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Returns whether the player holds any card of the given suit.
    #[must_use]
    pub fn holds_suit(&self, suit: Suit) -> bool {
        self.hand.iter().any(|c| c.suit == suit)
    }

    /// Counts held cards of the given suit.
    #[must_use]
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.hand.iter().filter(|c| c.suit == suit).count()
    }

    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn remove_card(&mut self, card: Card) -> Option<Card> {
        let pos = self.hand.iter().position(|&c| c == card)?;
        Some(self.hand.remove(pos))
    }

    pub(crate) fn take_hand(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.hand)
    }

    /// Removes up to `amount` chips and returns how many were taken.
    pub(crate) fn take_chips(&mut self, amount: usize) -> usize {
        let taken = amount.min(self.chips);
        self.chips -= taken;
        taken
    }

    pub(crate) const fn add_chips(&mut self, amount: usize) {
        self.chips += amount;
    }

    pub(crate) const fn set_dealer(&mut self, dealer: bool) {
        self.dealer = dealer;
    }

    pub(crate) const fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub(crate) const fn set_out_of_chips(&mut self, out: bool) {
        self.out_of_chips = out;
    }

    pub(crate) const fn set_gone_bourre(&mut self, bourre: bool) {
        self.gone_bourre = bourre;
    }

    pub(crate) const fn win_trick(&mut self) {
        self.tricks_won += 1;
    }

    /// Resets the per-hand flags before a new hand.
    pub(crate) const fn reset_for_hand(&mut self) {
        self.playing = false;
        self.tricks_won = 0;
        self.out_of_chips = false;
        self.gone_bourre = false;
    }
}
