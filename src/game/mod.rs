//! Hand engine and table management.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE};
use crate::deck::Deck;
use crate::error::{HandError, SeatError};
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::pot::Pot;
use crate::provider::DecisionProvider;
use crate::result::HandResult;

mod ante;
mod deal;
mod decisions;
mod scoring;
pub mod state;
mod tricks;

pub use state::{HandPhase, HandState};

/// Minimum number of seated players needed to start a hand.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players one deck can deal a full hand to.
pub const MAX_PLAYERS: usize = DECK_SIZE / HAND_SIZE;

/// A player and whoever makes their decisions.
struct Seat {
    player: Player,
    provider: Box<dyn DecisionProvider>,
}

/// A Bourré table that plays one hand at a time.
///
/// The game owns the deck, the pot, and the seats. Each hand runs
/// [`ante`](Self::ante), [`deal`](Self::deal),
/// [`pass_or_play`](Self::pass_or_play), five calls to
/// [`play_trick`](Self::play_trick), and [`score`](Self::score);
/// [`play_hand`](Self::play_hand) runs them all.
pub struct Game {
    /// Draw deck and discard pile.
    pub deck: Deck,
    /// The pot.
    pub pot: Pot,
    /// Game options.
    pub options: GameOptions,
    /// Current phase.
    phase: HandPhase,
    /// Trump, lead, trick number, and turn order for the current hand.
    hand: HandState,
    /// Next player ID to assign.
    next_id: PlayerId,
    /// Seats in joining order.
    seats: Vec<Seat>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bourre::{Game, GameOptions, HeuristicOptions, HeuristicProvider};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// for seed in 0..4 {
    ///     let npc = HeuristicProvider::new(HeuristicOptions::default(), seed);
    ///     game.join("npc", 10, Box::new(npc));
    /// }
    /// let result = game.play_hand().unwrap();
    /// assert_eq!(result.players.len(), 4);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::standard(),
            pot: Pot::new(),
            options,
            phase: HandPhase::WaitingForPlayers,
            hand: HandState::new(),
            next_id: 0,
            seats: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seats a player with the given chips and decision provider.
    ///
    /// Returns the assigned player ID. Players who join mid-hand sit out
    /// until the next hand.
    pub fn join(
        &mut self,
        name: impl Into<String>,
        chips: usize,
        provider: Box<dyn DecisionProvider>,
    ) -> PlayerId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.seats.push(Seat {
            player: Player::new(id, name, chips),
            provider,
        });
        id
    }

    /// Removes a player between hands and returns them.
    ///
    /// If the dealer leaves, the deal passes to the next seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress or the player is not seated.
    pub fn leave(&mut self, player_id: PlayerId) -> Result<Player, SeatError> {
        if self.phase != HandPhase::WaitingForPlayers {
            return Err(SeatError::InvalidState);
        }
        let idx = self
            .seat_index(player_id)
            .ok_or(SeatError::PlayerNotFound)?;

        let seat = self.seats.remove(idx);
        if seat.player.is_dealer() && !self.seats.is_empty() {
            let next = idx % self.seats.len();
            self.seats[next].player.set_dealer(true);
        }
        Ok(seat.player)
    }

    /// Makes `player_id` the dealer for the next hand.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress or the player is not seated.
    pub fn set_dealer(&mut self, player_id: PlayerId) -> Result<(), SeatError> {
        if self.phase != HandPhase::WaitingForPlayers {
            return Err(SeatError::InvalidState);
        }
        let idx = self
            .seat_index(player_id)
            .ok_or(SeatError::PlayerNotFound)?;
        self.assign_dealer(idx);
        Ok(())
    }

    /// Passes the deal to the seat after the current dealer.
    ///
    /// Returns the new dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is in progress or no dealer is assigned.
    pub fn rotate_dealer(&mut self) -> Result<PlayerId, SeatError> {
        if self.phase != HandPhase::WaitingForPlayers {
            return Err(SeatError::InvalidState);
        }
        let current = self
            .seats
            .iter()
            .position(|s| s.player.is_dealer())
            .ok_or(SeatError::PlayerNotFound)?;
        let next = (current + 1) % self.seats.len();
        self.assign_dealer(next);
        Ok(self.seats[next].player.id())
    }

    fn assign_dealer(&mut self, idx: usize) {
        for (i, seat) in self.seats.iter_mut().enumerate() {
            seat.player.set_dealer(i == idx);
        }
        let dealer = &self.seats[idx].player;
        tracing::info!(player = dealer.id(), name = dealer.name(), "dealer assigned");
    }

    fn assign_random_dealer(&mut self) {
        let idx = self.rng.random_range(0..self.seats.len());
        self.assign_dealer(idx);
    }

    fn seat_index(&self, player_id: PlayerId) -> Option<usize> {
        self.seats.iter().position(|s| s.player.id() == player_id)
    }

    /// Seat indices in the current hand's turn order.
    fn ordered_seats(&self) -> Vec<usize> {
        self.hand
            .order
            .iter()
            .filter_map(|&id| self.seat_index(id))
            .collect()
    }

    /// Returns the turn order implied by the current dealer: the seat after
    /// the dealer first, the dealer last.
    ///
    /// With no dealer assigned, seats are listed in joining order.
    pub fn turn_order(&self) -> Vec<PlayerId> {
        let ids = self.seats.iter().map(|s| s.player.id());
        match self.seats.iter().position(|s| s.player.is_dealer()) {
            Some(dealer) => ids
                .clone()
                .skip(dealer + 1)
                .chain(ids.take(dealer + 1))
                .collect(),
            None => ids.collect(),
        }
    }

    /// Returns the current dealer.
    pub fn dealer(&self) -> Option<PlayerId> {
        self.seats
            .iter()
            .find(|s| s.player.is_dealer())
            .map(|s| s.player.id())
    }

    /// Returns the specified player.
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.seats
            .iter()
            .find(|s| s.player.id() == player_id)
            .map(|s| &s.player)
    }

    /// Returns all seated players in joining order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter().map(|s| &s.player)
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> HandPhase {
        self.phase
    }

    /// Returns the state of the current hand.
    pub const fn hand_state(&self) -> &HandState {
        &self.hand
    }

    /// Returns the trump card, once dealt.
    pub const fn trump_card(&self) -> Option<Card> {
        self.hand.trump_card
    }

    /// Counts every card in hands, the deck, and the discard pile.
    ///
    /// Between steps this is always the deck size.
    pub fn card_total(&self) -> usize {
        let held: usize = self.seats.iter().map(|s| s.player.hand().len()).sum();
        held + self.deck.remaining() + self.deck.discarded()
    }

    /// Plays a whole hand: ante, deal, pass or play, five tricks, scoring.
    ///
    /// Call [`clear_hand`](Self::clear_hand) before the next one.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not between hands, fewer than two
    /// players are seated, the deck cannot cover the deal, or an internal
    /// invariant breaks during trick play.
    pub fn play_hand(&mut self) -> Result<HandResult, HandError> {
        self.ante()?;
        self.deal()?;
        self.pass_or_play()?;
        while self.phase == HandPhase::Tricks {
            self.play_trick()?;
        }
        Ok(self.score()?)
    }

    /// Returns every card to the deck and waits for the next hand.
    ///
    /// Chips left in the pot stay there.
    pub fn clear_hand(&mut self) {
        for seat in &mut self.seats {
            let cards = seat.player.take_hand();
            self.deck.reclaim(cards);
        }
        self.deck.reclaim_discards();
        self.hand = HandState::new();
        self.phase = HandPhase::WaitingForPlayers;
    }
}
