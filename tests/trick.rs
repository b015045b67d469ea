//! Trick resolution and follow-rule tests.

mod common;

use bourre::trick::{check_play, legal_cards, resolve_winner};
use bourre::{Card, FollowRule, SelectionError, Suit, Trick, TrickError};
use common::card;
use proptest::prelude::*;

fn trick_of(cards: &[Card]) -> Trick {
    let mut trick = Trick::new(1);
    for (player, &card) in cards.iter().enumerate() {
        trick.push(player as u8, card);
    }
    trick
}

#[test]
fn lone_trump_beats_lead_suit_ace() {
    let mut trick = Trick::new(1);
    trick.push(1, card(Suit::Hearts, 10));
    trick.push(2, card(Suit::Hearts, 14));
    trick.push(3, card(Suit::Clubs, 5));

    let winner = resolve_winner(&trick, Suit::Clubs, Some(Suit::Hearts)).unwrap();
    assert_eq!(winner.player, 3);
    assert_eq!(winner.card, card(Suit::Clubs, 5));
}

#[test]
fn trump_beats_higher_lead_card() {
    let mut trick = Trick::new(2);
    trick.push(1, card(Suit::Spades, 9));
    trick.push(2, card(Suit::Hearts, 13));

    let winner = resolve_winner(&trick, Suit::Spades, Some(Suit::Hearts)).unwrap();
    assert_eq!(winner.player, 1);
}

#[test]
fn highest_trump_wins_among_trumps() {
    let trick = trick_of(&[
        card(Suit::Diamonds, 12),
        card(Suit::Spades, 3),
        card(Suit::Spades, 11),
        card(Suit::Diamonds, 14),
    ]);

    let winner = resolve_winner(&trick, Suit::Spades, Some(Suit::Diamonds)).unwrap();
    assert_eq!(winner.player, 2);
}

#[test]
fn highest_lead_card_wins_without_trump() {
    let trick = trick_of(&[
        card(Suit::Diamonds, 7),
        card(Suit::Clubs, 14),
        card(Suit::Diamonds, 12),
    ]);

    let winner = resolve_winner(&trick, Suit::Hearts, Some(Suit::Diamonds)).unwrap();
    assert_eq!(winner.player, 2);
    assert_eq!(winner.card, card(Suit::Diamonds, 12));
}

#[test]
fn highest_card_wins_when_neither_trump_nor_lead_played() {
    let trick = trick_of(&[card(Suit::Clubs, 9), card(Suit::Diamonds, 13)]);

    let winner = resolve_winner(&trick, Suit::Hearts, Some(Suit::Spades)).unwrap();
    assert_eq!(winner.player, 1);

    let winner = resolve_winner(&trick, Suit::Hearts, None).unwrap();
    assert_eq!(winner.player, 1);
}

#[test]
fn rank_tie_goes_to_first_player() {
    let trick = trick_of(&[
        card(Suit::Clubs, 4),
        card(Suit::Diamonds, 10),
        card(Suit::Clubs, 10),
    ]);

    let winner = resolve_winner(&trick, Suit::Hearts, None).unwrap();
    assert_eq!(winner.player, 1);
}

#[test]
fn empty_trick_is_an_error() {
    let trick = Trick::new(1);
    assert_eq!(
        resolve_winner(&trick, Suit::Hearts, None).unwrap_err(),
        TrickError::EmptyTrick
    );
}

#[test]
fn trick_tracks_lead_and_order() {
    let mut trick = Trick::new(4);
    assert!(trick.is_empty());
    assert_eq!(trick.lead_card(), None);

    trick.push(7, card(Suit::Hearts, 2));
    trick.push(3, card(Suit::Spades, 8));

    assert_eq!(trick.number(), 4);
    assert_eq!(trick.len(), 2);
    assert_eq!(trick.lead_card(), Some(card(Suit::Hearts, 2)));
    assert_eq!(trick.plays()[1].player, 3);
}

#[test]
fn strict_rule_requires_lead_suit_then_trump() {
    let hand = [
        card(Suit::Hearts, 4),
        card(Suit::Spades, 9),
        card(Suit::Clubs, 13),
    ];
    let lead = Some(card(Suit::Hearts, 10));

    assert!(check_play(&hand, card(Suit::Hearts, 4), lead, Suit::Spades, FollowRule::Strict).is_ok());
    assert_eq!(
        check_play(&hand, card(Suit::Spades, 9), lead, Suit::Spades, FollowRule::Strict),
        Err(SelectionError::MustFollowSuit)
    );

    let diamond_lead = Some(card(Suit::Diamonds, 3));
    assert_eq!(
        check_play(&hand, card(Suit::Clubs, 13), diamond_lead, Suit::Spades, FollowRule::Strict),
        Err(SelectionError::MustPlayTrump)
    );
    assert_eq!(
        legal_cards(&hand, diamond_lead, Suit::Spades, FollowRule::Strict),
        vec![card(Suit::Spades, 9)]
    );
}

#[test]
fn strict_rule_allows_anything_when_void_in_lead_and_trump() {
    let hand = [card(Suit::Hearts, 4), card(Suit::Clubs, 13)];
    let lead = Some(card(Suit::Diamonds, 3));

    assert_eq!(
        legal_cards(&hand, lead, Suit::Spades, FollowRule::Strict),
        hand.to_vec()
    );
    assert_eq!(legal_cards(&hand, None, Suit::Spades, FollowRule::Strict), hand.to_vec());
}

#[test]
fn free_rule_only_checks_possession() {
    let hand = [card(Suit::Hearts, 4), card(Suit::Spades, 9)];
    let lead = Some(card(Suit::Hearts, 10));

    assert!(check_play(&hand, card(Suit::Spades, 9), lead, Suit::Spades, FollowRule::Free).is_ok());
    assert_eq!(
        check_play(&hand, card(Suit::Clubs, 2), lead, Suit::Spades, FollowRule::Free),
        Err(SelectionError::CardNotInHand)
    );
}

fn played_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(common::all_cards(), 1..=7).prop_shuffle()
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

proptest! {
    /// The same plays always produce the same winner.
    #[test]
    fn prop_resolution_is_deterministic(cards in played_cards(), trump in any_suit()) {
        let lead = cards.first().map(|c| c.suit);
        let first = resolve_winner(&trick_of(&cards), trump, lead).unwrap();
        let second = resolve_winner(&trick_of(&cards), trump, lead).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Trump wins when played; otherwise the highest lead-suit card does.
    #[test]
    fn prop_trump_then_lead_precedence(cards in played_cards(), trump in any_suit()) {
        let lead = cards[0].suit;
        let winner = resolve_winner(&trick_of(&cards), trump, Some(lead)).unwrap();

        prop_assert_eq!(cards[usize::from(winner.player)], winner.card);

        let trumps: Vec<&Card> = cards.iter().filter(|c| c.suit == trump).collect();
        if trumps.is_empty() {
            prop_assert_eq!(winner.card.suit, lead);
            for c in cards.iter().filter(|c| c.suit == lead) {
                prop_assert!(winner.card.rank >= c.rank);
            }
        } else {
            prop_assert_eq!(winner.card.suit, trump);
            for c in trumps {
                prop_assert!(winner.card.rank >= c.rank);
            }
        }
    }
}
