//! A lock-guarded deck for callers that share decks between threads.
//!
//! [`Deck`] itself does no locking. `SharedDeck` wraps one in a mutex
//! (`std::sync::Mutex` with `std`, `spin::Mutex` otherwise).

use core::ptr;

use crate::card::Card;
use crate::deck::Deck;

#[cfg(feature = "std")]
struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    // A panic while holding the lock cannot leave a deck half-edited, so a
    // poisoned lock is still usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn into_inner(self) -> T {
        self.0
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use spin::Mutex;

/// Guard returned by [`SharedDeck::lock`].
#[cfg(feature = "std")]
pub type DeckGuard<'a> = std::sync::MutexGuard<'a, Deck>;

/// Guard returned by [`SharedDeck::lock`].
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub type DeckGuard<'a> = spin::MutexGuard<'a, Deck>;

/// A [`Deck`] behind a mutex.
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps `deck` in a lock.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Locks the deck for reading or mutation.
    pub fn lock(&self) -> DeckGuard<'_> {
        self.deck.lock()
    }

    /// Returns a copy of the current deck contents.
    #[must_use]
    pub fn snapshot(&self) -> Deck {
        self.lock().clone()
    }

    /// Unwraps the inner deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }

    /// Moves one card equal to `card` from `from` to the back of `to`.
    ///
    /// Both decks stay locked for the whole move, so other callers see either
    /// the old or the new state of both. Locks are taken in address order.
    /// Transferring within one deck moves the card to its back.
    ///
    /// Returns `false` and changes neither deck if `from` holds no such card.
    pub fn transfer(from: &Self, to: &Self, card: Card) -> bool {
        if ptr::eq(from, to) {
            let mut deck = from.lock();
            let moved = deck.remove(card);
            if moved {
                deck.add(card);
            }
            drop(deck);
            return moved;
        }

        let (mut source, mut target) = if ptr::from_ref(from) < ptr::from_ref(to) {
            let source = from.lock();
            let target = to.lock();
            (source, target)
        } else {
            let target = to.lock();
            let source = from.lock();
            (source, target)
        };

        Deck::transfer(&mut source, &mut target, card)
    }
}

impl From<Deck> for SharedDeck {
    fn from(deck: Deck) -> Self {
        Self::new(deck)
    }
}

impl Default for SharedDeck {
    fn default() -> Self {
        Self::new(Deck::new())
    }
}
