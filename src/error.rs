//! Error types for deck and asset operations.

use thiserror::Error;

/// Errors that can occur when accessing a deck by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards to peek at or draw.
    #[error("deck is empty")]
    Empty,
}

/// Errors that can occur while resolving a card's display asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssetError {
    /// Neither the card's own asset nor the placeholder could be loaded.
    ///
    /// This is a configuration problem with the asset source and should be
    /// surfaced to the operator rather than recovered from.
    #[error("placeholder asset `BLANK` is missing from the asset source")]
    MissingPlaceholder,
}
