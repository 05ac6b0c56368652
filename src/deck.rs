//! Ordered card collections: draw piles, discard piles and hands.

use alloc::vec::Vec;
use core::slice;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, Suit};
use crate::error::DeckError;
use crate::options::DeckOptions;

/// Number of ranked cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of Jokers added to a standard deck when requested.
pub const JOKERS_PER_DECK: usize = 2;

/// Number of cards in a standard deck with Jokers.
pub const DECK_SIZE_WITH_JOKERS: usize = DECK_SIZE + JOKERS_PER_DECK;

/// An ordered collection of cards.
///
/// Duplicates are allowed and order matters: the front and back are
/// addressable for peeking and drawing. The same type is used for draw piles
/// and for hands; [`Deck::transfer`] moves cards between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a new empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates an unshuffled standard deck.
    ///
    /// Cards are laid out suit by suit (Clubs, Diamonds, Hearts, Spades), each
    /// suit rising from Ace to King. If `jokers` is set, two Jokers follow.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, Suit};
    ///
    /// let deck = Deck::standard(true);
    /// assert_eq!(deck.len(), 54);
    /// assert_eq!(deck.peek_front(), Ok(Card::new(1, Suit::Clubs)));
    /// assert_eq!(deck.peek_back(), Ok(Card::JOKER));
    /// ```
    #[must_use]
    pub fn standard(jokers: bool) -> Self {
        let capacity = if jokers {
            DECK_SIZE_WITH_JOKERS
        } else {
            DECK_SIZE
        };
        let mut cards = Vec::with_capacity(capacity);

        for suit in Suit::ALL_RANKED {
            for value in 1..=13 {
                cards.push(Card::new(value, suit));
            }
        }

        if jokers {
            cards.extend([Card::JOKER; JOKERS_PER_DECK]);
        }

        debug!(cards = cards.len(), jokers, "built standard deck");
        Self { cards }
    }

    /// Creates a standard deck according to `options`, shuffling it with `rng`
    /// if requested.
    #[must_use]
    pub fn with_options<R: Rng + ?Sized>(options: DeckOptions, rng: &mut R) -> Self {
        let mut deck = Self::standard(options.jokers);
        if options.shuffle {
            deck.shuffle(rng);
        }
        deck
    }

    /// Creates a deck holding `cards` in the given order.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in deck order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Adds a card to the back of the deck.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the back of the deck, keeping their order.
    pub fn add_many<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Removes the first card equal to `card`.
    ///
    /// Returns `false` and leaves the deck untouched if no such card exists.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|c| *c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn peek_front(&self) -> Result<Card, DeckError> {
        self.cards.first().copied().ok_or(DeckError::Empty)
    }

    /// Returns the card at the back of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn peek_back(&self) -> Result<Card, DeckError> {
        self.cards.last().copied().ok_or(DeckError::Empty)
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn draw_front(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(self.cards.remove(0))
    }

    /// Removes and returns the card at the back of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn draw_back(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns whether a card equal to `card` is in the deck.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the number of cards with the given value.
    ///
    /// Jokers have value 0 and only match a query for 0.
    #[must_use]
    pub fn count_of_value(&self, value: u8) -> usize {
        self.cards.iter().filter(|c| c.value() == value).count()
    }

    /// Returns the sum of all card values. Jokers count as 0.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.value())).sum()
    }

    /// Shuffles the deck in place with the Fisher-Yates algorithm.
    ///
    /// Decks with fewer than two cards are left unchanged.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cards.len() < 2 {
            return;
        }

        for n in (2..=self.cards.len()).rev() {
            let k = rng.random_range(0..n);
            self.cards.swap(k, n - 1);
        }

        debug!(cards = self.cards.len(), "shuffled deck");
    }

    /// Shuffles the deck with a `ChaCha8` generator seeded from `seed`.
    ///
    /// The same seed applied to the same contents always yields the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let mut a = Deck::standard(false);
    /// let mut b = Deck::standard(false);
    /// a.shuffle_seeded(7);
    /// b.shuffle_seeded(7);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Moves one card equal to `card` from `from` to the back of `to`.
    ///
    /// Returns `false` and changes neither deck if `from` holds no such card.
    pub fn transfer(from: &mut Self, to: &mut Self, card: Card) -> bool {
        if !from.remove(card) {
            return false;
        }
        to.add(card);
        trace!(%card, from = from.len(), to = to.len(), "transferred card");
        true
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
