//! A playing-card and deck simulation core with optional `no_std` support.
//!
//! The crate provides an immutable [`Card`] value and a mutable [`Deck`]
//! collection with construction, shuffling, drawing and transfer helpers.
//! Game rules are left to the caller; a [`Deck`] serves equally as a draw
//! pile, a discard pile or a player's hand.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, Deck, NameStyle, Suit};
//!
//! let mut pile = Deck::standard(false);
//! pile.shuffle_seeded(42);
//!
//! let mut hand = Deck::new();
//! let top = pile.peek_front().unwrap();
//! assert!(Deck::transfer(&mut pile, &mut hand, top));
//! assert_eq!(pile.len() + hand.len(), 52);
//!
//! let card = Card::new(3, Suit::Diamonds);
//! assert_eq!(card.to_string(), "Three of Diamonds");
//! assert_eq!(card.name(NameStyle::Abbreviated), "3oD");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod asset;
pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shared;

// Re-export main types
pub use asset::{AssetSource, JOKER_KEY, PLACEHOLDER_KEY, asset_key, resolve_asset};
pub use card::{Card, NameStyle, Suit};
pub use deck::{DECK_SIZE, DECK_SIZE_WITH_JOKERS, Deck, JOKERS_PER_DECK};
pub use error::{AssetError, DeckError};
pub use options::DeckOptions;
pub use shared::SharedDeck;
