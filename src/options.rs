//! Deck construction options.

/// Configuration for building a full deck with [`Deck::with_options`].
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_jokers(true)
///     .with_shuffle(false);
/// ```
///
/// [`Deck::with_options`]: crate::Deck::with_options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Whether two Jokers are appended after the 52 ranked cards.
    pub jokers: bool,
    /// Whether the deck is shuffled before it is returned.
    pub shuffle: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            jokers: false,
            shuffle: true,
        }
    }
}

impl DeckOptions {
    /// Sets whether Jokers are included.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(true);
    /// assert!(options.jokers);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets whether the deck is shuffled after it is filled.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Number of cards a deck built with these options holds.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        if self.jokers {
            crate::deck::DECK_SIZE_WITH_JOKERS
        } else {
            crate::deck::DECK_SIZE
        }
    }
}
