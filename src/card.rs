//! Card types, naming and comparison.

use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;

/// Card suit.
///
/// [`Suit::Joker`] is not a real suit; it marks the [`Card::JOKER`] sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// The Joker marker.
    Joker,
}

impl Suit {
    /// The four ranked suits in canonical deck order.
    pub const ALL_RANKED: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit's display name, or `None` for the Joker marker.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Clubs => Some("Clubs"),
            Self::Diamonds => Some("Diamonds"),
            Self::Hearts => Some("Hearts"),
            Self::Spades => Some("Spades"),
            Self::Joker => None,
        }
    }

    /// Returns the suit's initial (`C`, `D`, `H`, `S`), or `None` for the Joker marker.
    #[must_use]
    pub const fn initial(self) -> Option<char> {
        match self {
            Self::Clubs => Some('C'),
            Self::Diamonds => Some('D'),
            Self::Hearts => Some('H'),
            Self::Spades => Some('S'),
            Self::Joker => None,
        }
    }
}

/// How [`Card::name`] renders a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameStyle {
    /// e.g. `"Three of Diamonds"`.
    #[default]
    Full,
    /// e.g. `"3oD"`.
    Abbreviated,
    /// e.g. `"Three"`.
    ValueOnly,
}

const UNKNOWN: &str = "?";

/// Full name of a card value, `None` outside `1..=13`.
pub(crate) const fn value_name(value: u8) -> Option<&'static str> {
    match value {
        1 => Some("Ace"),
        2 => Some("Deuce"),
        3 => Some("Three"),
        4 => Some("Four"),
        5 => Some("Five"),
        6 => Some("Six"),
        7 => Some("Seven"),
        8 => Some("Eight"),
        9 => Some("Nine"),
        10 => Some("Ten"),
        11 => Some("Jack"),
        12 => Some("Queen"),
        13 => Some("King"),
        _ => None,
    }
}

/// Short form of a value: `A`, `J`, `Q`, `K` or the number itself.
pub(crate) struct ValueAbbrev(pub(crate) u8);

impl fmt::Display for ValueAbbrev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("A"),
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            value => write!(f, "{value}"),
        }
    }
}

/// A card rendered in a fixed [`NameStyle`].
struct Named<'a> {
    card: &'a Card,
    style: NameStyle,
}

impl fmt::Display for Named<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.card.write_name(f, self.style)
    }
}

/// A playing card.
///
/// Cards are plain values: two cards with the same value and suit are
/// interchangeable. Fields are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    value: u8,
    suit: Suit,
}

impl Card {
    /// The Joker: value 0 with the [`Suit::Joker`] marker.
    pub const JOKER: Self = Self::new(0, Suit::Joker);

    /// Creates a new card.
    ///
    /// Note: This function does not validate the value. Values outside 1..=13
    /// are accepted and render with `?` placeholders when named.
    #[must_use]
    pub const fn new(value: u8, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// The card's value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King, 0 = Joker).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card carries the Joker marker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns the card's name in the given style.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, NameStyle, Suit};
    ///
    /// let jack = Card::new(11, Suit::Hearts);
    /// assert_eq!(jack.name(NameStyle::Full), "Jack of Hearts");
    /// assert_eq!(jack.name(NameStyle::Abbreviated), "JoH");
    /// assert_eq!(jack.name(NameStyle::ValueOnly), "Jack");
    /// ```
    #[must_use]
    pub fn name(&self, style: NameStyle) -> String {
        Named { card: self, style }.to_string()
    }

    fn write_name(&self, out: &mut fmt::Formatter<'_>, style: NameStyle) -> fmt::Result {
        match style {
            NameStyle::ValueOnly => out.write_str(value_name(self.value).unwrap_or(UNKNOWN)),
            NameStyle::Abbreviated => write!(
                out,
                "{}o{}",
                ValueAbbrev(self.value),
                self.suit.initial().unwrap_or('?')
            ),
            NameStyle::Full => write!(
                out,
                "{} of {}",
                value_name(self.value).unwrap_or(UNKNOWN),
                self.suit.name().unwrap_or(UNKNOWN)
            ),
        }
    }

    /// Orders two cards by value.
    ///
    /// Returns `None` if either card is a Joker, since Jokers have no rank.
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Option<Ordering> {
        if self.is_joker() || other.is_joker() {
            return None;
        }
        Some(self.value.cmp(&other.value))
    }

    /// Compares two cards by value.
    ///
    /// Returns `1` if `a` is higher, `0` if equal, `-1` if lower, and `2` if
    /// either card is a Joker.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Suit};
    ///
    /// let king = Card::new(13, Suit::Clubs);
    /// let two = Card::new(2, Suit::Spades);
    /// assert_eq!(Card::compare(&king, &two), 1);
    /// assert_eq!(Card::compare(&two, &king), -1);
    /// assert_eq!(Card::compare(&king, &Card::JOKER), 2);
    /// ```
    #[must_use]
    pub fn compare(a: &Self, b: &Self) -> i8 {
        match a.cmp_value(b) {
            Some(Ordering::Greater) => 1,
            Some(Ordering::Equal) => 0,
            Some(Ordering::Less) => -1,
            None => 2,
        }
    }
}

impl Default for Card {
    /// The ace of spades.
    fn default() -> Self {
        Self::new(1, Suit::Spades)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_name(f, NameStyle::Full)
    }
}
