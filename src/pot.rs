//! The pot: antes in, one payout out.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::player::PlayerId;

/// Chips staked on the current hand.
///
/// Chips that are not paid out stay in the pot for the next hand.
#[derive(Debug, Clone, Default)]
pub struct Pot {
    /// Chips currently in the pot.
    chips: usize,
    /// Chips each player put in since the last payout (`player_id` -> amount).
    contributions: HashMap<PlayerId, usize>,
    /// Size of the pot at the last payout.
    previous_size: usize,
}

impl Pot {
    /// Creates an empty pot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` chips from `player` to the pot.
    pub fn collect(&mut self, player: PlayerId, amount: usize) {
        self.chips += amount;
        *self.contributions.entry(player).or_insert(0) += amount;
    }

    /// Empties the pot and returns the chips owed to `player`.
    pub fn payout(&mut self, player: PlayerId) -> usize {
        let amount = self.chips;
        tracing::info!(player, amount, "pot paid out");
        self.previous_size = amount;
        self.chips = 0;
        self.contributions.clear();
        amount
    }

    /// Returns the number of chips in the pot.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.chips
    }

    /// Returns the pot size at the last payout.
    #[must_use]
    pub const fn previous_size(&self) -> usize {
        self.previous_size
    }

    /// Returns what `player` has put in since the last payout.
    #[must_use]
    pub fn contribution(&self, player: PlayerId) -> usize {
        self.contributions.get(&player).copied().unwrap_or(0)
    }
}
