//! Card-selection heuristics.
//!
//! These are pure functions over a hand so they can be reused by any
//! provider. The engine also falls back on [`select_trick_card`] when a
//! provider keeps making illegal plays.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::options::{FollowStrategy, HeuristicOptions};

/// Highest-ranked card; the earliest held wins a tie.
fn highest(cards: impl Iterator<Item = Card>) -> Option<Card> {
    cards.fold(None, |best, card| match best {
        Some(best) if best.rank >= card.rank => Some(best),
        _ => Some(card),
    })
}

fn lowest(cards: impl Iterator<Item = Card>) -> Option<Card> {
    cards.min_by_key(|c| c.rank)
}

/// Cards the heuristic exchanges: every non-trump card ranked below
/// `below`.
#[must_use]
pub fn exchange_candidates(hand: &[Card], trump: Suit, below: u8) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|c| c.suit != trump && c.rank < below)
        .collect()
}

/// Decides whether a hand is worth playing.
///
/// `roll` is a uniform draw from `0..100`; it only matters when neither the
/// trump count nor the high-card count already says to play.
#[must_use]
pub fn wants_to_play(hand: &[Card], trump: Suit, roll: u8, options: &HeuristicOptions) -> bool {
    let trumps = hand.iter().filter(|c| c.suit == trump).count();
    let high = hand
        .iter()
        .filter(|c| c.rank > options.high_card_above)
        .count();

    trumps > options.trumps_to_play
        || high > options.high_cards_to_play
        || roll <= options.play_chance
}

/// Picks the card to play into a trick.
///
/// Returns `None` only for an empty hand.
#[must_use]
pub fn select_trick_card(
    hand: &[Card],
    lead: Option<Card>,
    trump: Suit,
    follow: FollowStrategy,
) -> Option<Card> {
    let of_suit = |suit: Suit| hand.iter().copied().filter(move |c| c.suit == suit);
    let highest_trump_or_any = || highest(of_suit(trump)).or_else(|| highest(hand.iter().copied()));

    let Some(lead) = lead else {
        return highest_trump_or_any();
    };

    let Some(top) = highest(of_suit(lead.suit)) else {
        return highest_trump_or_any();
    };

    match follow {
        FollowStrategy::Highest => Some(top),
        FollowStrategy::Conserve if top.rank > lead.rank => Some(top),
        FollowStrategy::Conserve => lowest(of_suit(lead.suit)),
    }
}
