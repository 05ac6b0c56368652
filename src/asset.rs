//! Asset keys for presenting cards.
//!
//! The crate does not load images itself. A presentation layer implements
//! [`AssetSource`] over whatever storage it uses and calls [`resolve_asset`],
//! which applies the placeholder fallback.

use alloc::format;
use alloc::string::{String, ToString};

use tracing::{error, warn};

use crate::card::{Card, ValueAbbrev};
use crate::error::AssetError;

/// Key of the single Joker asset.
pub const JOKER_KEY: &str = "JOKER";

/// Key of the placeholder asset used when a card has no asset of its own.
pub const PLACEHOLDER_KEY: &str = "BLANK";

/// Returns the asset key for a card.
///
/// Jokers map to [`JOKER_KEY`]. Other cards map to their value abbreviation
/// followed by their suit initial, e.g. `"AS"`, `"10D"`, `"QH"`.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Suit, asset_key};
///
/// assert_eq!(asset_key(&Card::new(1, Suit::Spades)), "AS");
/// assert_eq!(asset_key(&Card::new(10, Suit::Diamonds)), "10D");
/// assert_eq!(asset_key(&Card::JOKER), "JOKER");
/// ```
#[must_use]
pub fn asset_key(card: &Card) -> String {
    if card.is_joker() {
        return String::from(JOKER_KEY);
    }

    let value = ValueAbbrev(card.value());
    match card.suit().initial() {
        Some(initial) => format!("{value}{initial}"),
        None => value.to_string(),
    }
}

/// A store of displayable card assets, keyed by [`asset_key`].
pub trait AssetSource {
    /// The loaded asset type (a sprite, a texture handle, a file path...).
    type Asset;

    /// Loads the asset stored under `key`, if any.
    fn load(&self, key: &str) -> Option<Self::Asset>;
}

/// Resolves the asset for `card`, falling back to [`PLACEHOLDER_KEY`].
///
/// # Errors
///
/// Returns [`AssetError::MissingPlaceholder`] if neither the card's asset nor
/// the placeholder exists in `source`.
pub fn resolve_asset<S: AssetSource + ?Sized>(
    source: &S,
    card: &Card,
) -> Result<S::Asset, AssetError> {
    let key = asset_key(card);
    if let Some(asset) = source.load(&key) {
        return Ok(asset);
    }

    warn!(%key, "no asset for card, using placeholder");
    source.load(PLACEHOLDER_KEY).ok_or_else(|| {
        error!(placeholder = PLACEHOLDER_KEY, "placeholder asset is missing");
        AssetError::MissingPlaceholder
    })
}
