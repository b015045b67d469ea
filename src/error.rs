//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while collecting the ante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnteError {
    /// Invalid game state for starting a hand.
    #[error("invalid game state for ante")]
    InvalidState,
    /// Fewer than two players are seated.
    #[error("not enough players to start a hand")]
    NotEnoughPlayers,
    /// More players are seated than one deck can deal five cards to.
    #[error("too many players for one deck")]
    TooManyPlayers,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors raised by the deck itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Deck and discard pile together cannot supply the requested cards.
    #[error("deck exhausted even after recycling the discard pile")]
    Exhausted,
}

/// Errors that can occur during the pass/play and exchange phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Invalid game state for pass/play decisions.
    #[error("invalid game state for pass or play")]
    InvalidState,
    /// The deck could not supply replacement cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// An illegal choice made by a decision provider.
///
/// These never abort a hand: the engine either asks again or substitutes a
/// default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The chosen card is not in the player's hand.
    #[error("card not in hand")]
    CardNotInHand,
    /// The same card was listed twice.
    #[error("card listed more than once")]
    DuplicateCard,
    /// More cards were listed for discard than the hand holds.
    #[error("too many cards to discard")]
    TooManyDiscards,
    /// The player holds the lead suit and must follow it.
    #[error("must follow the lead suit")]
    MustFollowSuit,
    /// The player is void in the lead suit and must play trump.
    #[error("must play trump")]
    MustPlayTrump,
}

/// Errors that can occur while playing a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    /// Invalid game state for trick play.
    #[error("invalid game state for trick play")]
    InvalidState,
    /// A trick was resolved with no cards in it.
    #[error("cannot resolve a trick with no cards")]
    EmptyTrick,
    /// A playing player had no card left to play.
    #[error("playing player has an empty hand")]
    EmptyHand,
}

/// Errors that can occur during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Invalid game state for scoring.
    #[error("invalid game state for scoring")]
    InvalidState,
}

/// Errors that can occur when managing seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Seats can only change between hands.
    #[error("seats can only change between hands")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Any error that can stop [`Game::play_hand`](crate::Game::play_hand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Ante failed.
    #[error(transparent)]
    Ante(#[from] AnteError),
    /// Deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Pass/play or exchange failed.
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
    /// Trick play failed.
    #[error(transparent)]
    Trick(#[from] TrickError),
    /// Scoring failed.
    #[error(transparent)]
    Score(#[from] ScoreError),
}
