//! Decision providers: who decides what a player does.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::SelectionError;
use crate::options::HeuristicOptions;
use crate::player::Player;
use crate::policy;
use crate::sync::SharedRng;
use crate::trick::Trick;

/// What the engine should do after a provider makes an illegal choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Substitute a default action.
    #[default]
    Fallback,
    /// Ask the provider again.
    Retry,
}

/// Makes decisions on behalf of one player.
///
/// The engine calls these one at a time, in turn order, and validates every
/// answer. Implementations may block (for example while waiting on a human).
pub trait DecisionProvider {
    /// Chooses whether to play the hand after seeing the trump card.
    fn choose_pass_or_play(&self, player: &Player, trump_card: Card) -> bool;

    /// Chooses which held cards to exchange. Called only for players who play.
    fn choose_discards(&self, player: &Player, trump_card: Card) -> Vec<Card>;

    /// Chooses the card to play into `trick`.
    ///
    /// When `trick` is empty the card leads; otherwise
    /// [`Trick::lead_card`] is the card to follow. The engine only asks
    /// players who still hold a card.
    fn choose_card(&self, player: &Player, trick: &Trick, trump: Suit) -> Card;

    /// Called after an illegal choice. Defaults to [`Recovery::Fallback`].
    fn on_illegal_selection(&self, player: &Player, error: SelectionError) -> Recovery {
        let _ = (player, error);
        Recovery::Fallback
    }
}

/// Computer player driven by [`policy`] and a seeded random roll.
pub struct HeuristicProvider {
    options: HeuristicOptions,
    /// Trait methods take `&self`, the roll needs `&mut`.
    rng: SharedRng,
}

impl HeuristicProvider {
    /// Creates a heuristic provider with the given options and seed.
    #[must_use]
    pub fn new(options: HeuristicOptions, seed: u64) -> Self {
        Self {
            options,
            rng: SharedRng::seeded(seed),
        }
    }

    /// Returns the heuristic options.
    #[must_use]
    pub const fn options(&self) -> &HeuristicOptions {
        &self.options
    }
}

impl DecisionProvider for HeuristicProvider {
    fn choose_pass_or_play(&self, player: &Player, trump_card: Card) -> bool {
        let roll = self.rng.roll(0..100);
        let play = policy::wants_to_play(player.hand(), trump_card.suit, roll, &self.options);
        tracing::debug!(player = player.id(), roll, play, "heuristic pass or play");
        play
    }

    fn choose_discards(&self, player: &Player, trump_card: Card) -> Vec<Card> {
        policy::exchange_candidates(player.hand(), trump_card.suit, self.options.exchange_below)
    }

    /// # Panics
    ///
    /// Panics if `player` holds no cards. [`Game::play_trick`] returns
    /// [`TrickError::EmptyHand`] before asking such a player.
    ///
    /// [`Game::play_trick`]: crate::Game::play_trick
    /// [`TrickError::EmptyHand`]: crate::TrickError::EmptyHand
    fn choose_card(&self, player: &Player, trick: &Trick, trump: Suit) -> Card {
        let Some(card) =
            policy::select_trick_card(player.hand(), trick.lead_card(), trump, self.options.follow)
        else {
            unreachable!("player {} asked to play from an empty hand", player.id());
        };
        card
    }
}
