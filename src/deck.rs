//! The draw deck and its discard pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;
use crate::player::Player;

/// A single 52-card deck with a discard pile.
///
/// Cards are drawn from the top of the deck. Every card of the deck is always
/// either here, in the discard pile, in a player's hand, or on the table in the
/// trick being played.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Draw pile; the last element is the top card.
    cards: Vec<Card>,
    /// Discarded and played cards.
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled standard deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in 2..=14 {
            for suit in Suit::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self {
            cards,
            discard_pile: Vec::new(),
        }
    }

    /// Builds a deck that yields `draw_order` front to back.
    ///
    /// Used to stack the deck for a known deal.
    #[must_use]
    pub fn stacked(draw_order: &[Card]) -> Self {
        let mut cards = draw_order.to_vec();
        cards.reverse();
        Self {
            cards,
            discard_pile: Vec::new(),
        }
    }

    /// Shuffles the draw pile.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals the top card to a player and returns it.
    pub fn deal_to(&mut self, player: &mut Player) -> Option<Card> {
        let card = self.draw()?;
        player.receive(card);
        Some(card)
    }

    /// Puts a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Moves the whole discard pile back into the deck and reshuffles.
    ///
    /// Returns the number of cards recycled.
    pub fn recycle_discards_into_deck<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let recycled = self.discard_pile.len();
        self.cards.append(&mut self.discard_pile);
        self.cards.shuffle(rng);
        recycled
    }

    /// Makes sure `needed` cards can be drawn, recycling discards if the deck
    /// alone falls short.
    ///
    /// Returns whether a recycle happened.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if deck and discard pile together hold
    /// fewer than `needed` cards. Nothing is moved in that case.
    pub fn ensure_available<R: Rng + ?Sized>(
        &mut self,
        needed: usize,
        rng: &mut R,
    ) -> Result<bool, DeckError> {
        if self.cards.len() >= needed {
            return Ok(false);
        }
        if self.cards.len() + self.discard_pile.len() < needed {
            return Err(DeckError::Exhausted);
        }
        self.recycle_discards_into_deck(rng);
        Ok(true)
    }

    /// Returns cards (hands, tricks) to the bottom of the deck.
    pub fn reclaim<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        let returned: Vec<Card> = cards.into_iter().collect();
        self.cards.splice(0..0, returned);
    }

    /// Moves the discard pile back under the deck without shuffling.
    pub fn reclaim_discards(&mut self) {
        let discards = core::mem::take(&mut self.discard_pile);
        self.reclaim(discards);
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard_pile.len()
    }

    /// Returns the draw pile; the last element is the top card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
