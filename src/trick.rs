//! Tricks, follow rules, and trick resolution.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::{SelectionError, TrickError};
use crate::options::FollowRule;
use crate::player::PlayerId;

/// One card played into a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// Who played the card.
    pub player: PlayerId,
    /// The card played.
    pub card: Card,
}

/// The cards played in one trick, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    number: u8,
    plays: Vec<Play>,
}

impl Trick {
    /// Creates an empty trick.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self {
            number,
            plays: Vec::new(),
        }
    }

    /// Returns the trick number within the hand, starting at 1.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Adds a play. The first play leads the trick.
    pub fn push(&mut self, player: PlayerId, card: Card) {
        self.plays.push(Play { player, card });
    }

    /// Returns the plays in play order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Returns the card that led the trick.
    #[must_use]
    pub fn lead_card(&self) -> Option<Card> {
        self.plays.first().map(|p| p.card)
    }

    /// Returns the number of cards played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns whether no card has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub(crate) fn into_cards(self) -> impl Iterator<Item = Card> {
        self.plays.into_iter().map(|p| p.card)
    }
}

/// Determines the winning play of a trick.
///
/// Trump beats everything else, then the lead suit, then rank alone. Rank
/// ties go to whoever played first.
///
/// # Errors
///
/// Returns [`TrickError::EmptyTrick`] if nothing was played.
pub fn resolve_winner(
    trick: &Trick,
    trump: Suit,
    lead: Option<Suit>,
) -> Result<Play, TrickError> {
    let mut ranked: Vec<Play> = trick.plays().to_vec();
    // Stable sort keeps play order within equal ranks.
    ranked.sort_by(|a, b| b.card.rank.cmp(&a.card.rank));

    let top_of = |suit: Suit| ranked.iter().find(|p| p.card.suit == suit).copied();

    top_of(trump)
        .or_else(|| lead.and_then(top_of))
        .or_else(|| ranked.first().copied())
        .ok_or(TrickError::EmptyTrick)
}

/// Lists the cards `hand` may legally play.
#[must_use]
pub fn legal_cards(hand: &[Card], lead: Option<Card>, trump: Suit, rule: FollowRule) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|&card| check_play(hand, card, lead, trump, rule).is_ok())
        .collect()
}

/// Checks whether `card` is a legal play from `hand`.
///
/// # Errors
///
/// Returns the [`SelectionError`] describing why the play is illegal.
pub fn check_play(
    hand: &[Card],
    card: Card,
    lead: Option<Card>,
    trump: Suit,
    rule: FollowRule,
) -> Result<(), SelectionError> {
    if !hand.contains(&card) {
        return Err(SelectionError::CardNotInHand);
    }

    let (FollowRule::Strict, Some(lead)) = (rule, lead) else {
        return Ok(());
    };

    let holds = |suit: Suit| hand.iter().any(|c| c.suit == suit);

    if holds(lead.suit) {
        if card.suit != lead.suit {
            return Err(SelectionError::MustFollowSuit);
        }
    } else if holds(trump) && card.suit != trump {
        return Err(SelectionError::MustPlayTrump);
    }

    Ok(())
}
