//! A Bourré hand engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one hand of Bourré at a
//! time: ante, deal, trump reveal, pass or play, card exchange, five tricks,
//! and scoring. Players are driven by [`DecisionProvider`]s, so computer and
//! human players go through the same engine.
//!
//! # Example
//!
//! ```
//! use bourre::{Game, GameOptions, HeuristicOptions, HeuristicProvider};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! for seed in 0..3 {
//!     let npc = HeuristicProvider::new(HeuristicOptions::default(), seed);
//!     game.join("npc", 10, Box::new(npc));
//! }
//!
//! let result = game.play_hand().unwrap();
//! println!("winner: {:?}, bourré: {:?}", result.winner, result.gone_bourre);
//! game.clear_hand();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod policy;
pub mod pot;
pub mod provider;
pub mod result;
mod sync;
pub mod trick;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, HAND_SIZE, JACK, KING, QUEEN, Suit};
pub use deck::Deck;
pub use error::{
    AnteError, DealError, DeckError, ExchangeError, HandError, ScoreError, SeatError,
    SelectionError, TrickError,
};
pub use game::{Game, HandPhase, HandState, MAX_PLAYERS, MIN_PLAYERS};
pub use options::{FollowRule, FollowStrategy, GameOptions, HeuristicOptions};
pub use player::{Player, PlayerId};
pub use pot::Pot;
pub use provider::{DecisionProvider, HeuristicProvider, Recovery};
pub use result::{HandResult, PlayerResult, TrickResult};
pub use trick::{Play, Trick};
