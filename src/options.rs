//! Game and heuristic configuration options.

/// How strictly players must follow the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum FollowRule {
    /// Follow the lead suit if held; otherwise play trump if held.
    #[default]
    Strict,
    /// Any held card may be played.
    Free,
}

/// How the heuristic follows a lead it may not be able to beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FollowStrategy {
    /// Beat the lead card with the highest lead-suit card when possible,
    /// otherwise shed the lowest lead-suit card.
    #[default]
    Conserve,
    /// Always play the highest lead-suit card.
    Highest,
}

/// Configuration options for a Bourré game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bourre::{FollowRule, GameOptions};
///
/// let options = GameOptions::default()
///     .with_ante(2)
///     .with_follow_rule(FollowRule::Free);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Chips each player antes before a hand.
    pub ante: usize,
    /// Follow rule enforced during tricks.
    pub follow_rule: FollowRule,
    /// Whether the deck is shuffled before each deal.
    /// Disable to deal from a stacked deck.
    pub shuffle: bool,
    /// How many times a provider is asked before the engine substitutes a
    /// default action. Only providers that ask to retry are asked again.
    pub max_selection_attempts: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            ante: 1,
            follow_rule: FollowRule::Strict,
            shuffle: true,
            max_selection_attempts: 3,
        }
    }
}

impl GameOptions {
    /// Sets the ante.
    ///
    /// # Example
    ///
    /// ```
    /// use bourre::GameOptions;
    ///
    /// let options = GameOptions::default().with_ante(5);
    /// assert_eq!(options.ante, 5);
    /// ```
    #[must_use]
    pub const fn with_ante(mut self, ante: usize) -> Self {
        self.ante = ante;
        self
    }

    /// Sets the follow rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bourre::{FollowRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_follow_rule(FollowRule::Free);
    /// assert_eq!(options.follow_rule, FollowRule::Free);
    /// ```
    #[must_use]
    pub const fn with_follow_rule(mut self, rule: FollowRule) -> Self {
        self.follow_rule = rule;
        self
    }

    /// Sets whether the deck is shuffled before each deal.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the number of selection attempts. Values below 1 are treated as 1.
    #[must_use]
    pub const fn with_max_selection_attempts(mut self, attempts: u8) -> Self {
        self.max_selection_attempts = attempts;
        self
    }
}

/// Thresholds used by the heuristic decision provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicOptions {
    /// Non-trump cards ranked below this are exchanged.
    pub exchange_below: u8,
    /// Play when holding more trumps than this.
    pub trumps_to_play: usize,
    /// Cards ranked above this count as high cards.
    pub high_card_above: u8,
    /// Play when holding more high cards than this.
    pub high_cards_to_play: usize,
    /// Otherwise play when a roll in `0..100` is at most this.
    pub play_chance: u8,
    /// Follow behaviour during tricks.
    pub follow: FollowStrategy,
}

impl Default for HeuristicOptions {
    fn default() -> Self {
        Self {
            exchange_below: 6,
            trumps_to_play: 1,
            high_card_above: 8,
            high_cards_to_play: 3,
            play_chance: 70,
            follow: FollowStrategy::Conserve,
        }
    }
}

impl HeuristicOptions {
    /// Sets the exchange threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bourre::HeuristicOptions;
    ///
    /// let options = HeuristicOptions::default().with_exchange_below(8);
    /// assert_eq!(options.exchange_below, 8);
    /// ```
    #[must_use]
    pub const fn with_exchange_below(mut self, rank: u8) -> Self {
        self.exchange_below = rank;
        self
    }

    /// Sets the trump count above which the heuristic always plays.
    #[must_use]
    pub const fn with_trumps_to_play(mut self, count: usize) -> Self {
        self.trumps_to_play = count;
        self
    }

    /// Sets the rank above which a card is counted as high.
    #[must_use]
    pub const fn with_high_card_above(mut self, rank: u8) -> Self {
        self.high_card_above = rank;
        self
    }

    /// Sets the high-card count above which the heuristic always plays.
    #[must_use]
    pub const fn with_high_cards_to_play(mut self, count: usize) -> Self {
        self.high_cards_to_play = count;
        self
    }

    /// Sets the chance (out of 100) of playing a weak hand.
    ///
    /// # Example
    ///
    /// ```
    /// use bourre::HeuristicOptions;
    ///
    /// let options = HeuristicOptions::default().with_play_chance(0);
    /// assert_eq!(options.play_chance, 0);
    /// ```
    #[must_use]
    pub const fn with_play_chance(mut self, chance: u8) -> Self {
        self.play_chance = chance;
        self
    }

    /// Sets the follow strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use bourre::{FollowStrategy, HeuristicOptions};
    ///
    /// let options = HeuristicOptions::default().with_follow(FollowStrategy::Highest);
    /// assert_eq!(options.follow, FollowStrategy::Highest);
    /// ```
    #[must_use]
    pub const fn with_follow(mut self, follow: FollowStrategy) -> Self {
        self.follow = follow;
        self
    }
}
