//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Once;

use bourre::{
    Card, DECK_SIZE, DecisionProvider, Deck, FollowStrategy, Player, Recovery, SelectionError,
    Suit, Trick, policy,
};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a test subscriber once; `RUST_LOG` controls the level.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Every card of a standard deck, in a fixed order.
pub fn all_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 2..=14 {
            cards.push(card(suit, rank));
        }
    }
    cards
}

/// Builds a draw order that deals `hands[i]` to the i-th player in turn
/// order, followed by the rest of the deck.
pub fn deal_script(hands: &[&[Card]]) -> Vec<Card> {
    let mut draws = Vec::with_capacity(DECK_SIZE);
    for round in 0..5 {
        for hand in hands {
            draws.push(hand[round]);
        }
    }
    let rest: Vec<Card> = all_cards()
        .into_iter()
        .filter(|c| !draws.contains(c))
        .collect();
    draws.extend(rest);
    draws
}

/// A stacked deck for `deal_script(hands)`.
pub fn stacked(hands: &[&[Card]]) -> Deck {
    Deck::stacked(&deal_script(hands))
}

/// Provider with fixed answers. Trick cards come from a queue and then from
/// the conserving heuristic.
pub struct Scripted {
    play: bool,
    discards: RefCell<VecDeque<Vec<Card>>>,
    cards: RefCell<VecDeque<Card>>,
    recovery: Recovery,
    pass_or_play_calls: Rc<Cell<usize>>,
    illegal: Rc<RefCell<Vec<SelectionError>>>,
}

impl Scripted {
    pub fn new(play: bool) -> Self {
        Self {
            play,
            discards: RefCell::new(VecDeque::new()),
            cards: RefCell::new(VecDeque::new()),
            recovery: Recovery::Fallback,
            pass_or_play_calls: Rc::new(Cell::new(0)),
            illegal: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn plays() -> Self {
        Self::new(true)
    }

    pub fn passes() -> Self {
        Self::new(false)
    }

    pub fn with_discards(self, discards: Vec<Card>) -> Self {
        self.discards.borrow_mut().push_back(discards);
        self
    }

    pub fn with_cards(self, cards: &[Card]) -> Self {
        self.cards.borrow_mut().extend(cards.iter().copied());
        self
    }

    pub fn retrying(mut self) -> Self {
        self.recovery = Recovery::Retry;
        self
    }

    /// Counts pass/play questions; stays readable after the provider is boxed.
    pub fn pass_or_play_calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.pass_or_play_calls)
    }

    /// Illegal selections reported by the engine.
    pub fn illegal_log(&self) -> Rc<RefCell<Vec<SelectionError>>> {
        Rc::clone(&self.illegal)
    }
}

impl DecisionProvider for Scripted {
    fn choose_pass_or_play(&self, _player: &Player, _trump_card: Card) -> bool {
        self.pass_or_play_calls.set(self.pass_or_play_calls.get() + 1);
        self.play
    }

    fn choose_discards(&self, _player: &Player, _trump_card: Card) -> Vec<Card> {
        self.discards.borrow_mut().pop_front().unwrap_or_default()
    }

    fn choose_card(&self, player: &Player, trick: &Trick, trump: Suit) -> Card {
        if let Some(card) = self.cards.borrow_mut().pop_front() {
            return card;
        }
        policy::select_trick_card(player.hand(), trick.lead_card(), trump, FollowStrategy::Conserve)
            .expect("scripted player asked to play from an empty hand")
    }

    fn on_illegal_selection(&self, _player: &Player, error: SelectionError) -> Recovery {
        self.illegal.borrow_mut().push(error);
        self.recovery
    }
}
