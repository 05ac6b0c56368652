//! Deck integration tests.

use std::collections::HashSet;

use deckrs::{
    Card, DECK_SIZE, DECK_SIZE_WITH_JOKERS, Deck, DeckError, DeckOptions, SharedDeck, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(value: u8, suit: Suit) -> Card {
    Card::new(value, suit)
}

fn sorted(deck: &Deck) -> Vec<(u8, u8)> {
    let mut keys: Vec<(u8, u8)> = deck.iter().map(|c| (c.value(), c.suit() as u8)).collect();
    keys.sort_unstable();
    keys
}

#[test]
fn new_deck_is_empty() {
    let deck = Deck::new();
    assert!(deck.is_empty());
    assert_eq!(deck.len(), 0);
    assert_eq!(deck.total_value(), 0);
    assert_eq!(deck, Deck::default());
}

#[test]
fn standard_deck_layout() {
    let deck = Deck::standard(false);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.total_value(), 364);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for (suit_index, suit) in Suit::ALL_RANKED.into_iter().enumerate() {
        for value in 1..=13u8 {
            let index = suit_index * 13 + usize::from(value - 1);
            assert_eq!(deck.cards()[index], card(value, suit));
        }
    }
    assert_eq!(deck.count_of_value(0), 0);
    for value in 1..=13 {
        assert_eq!(deck.count_of_value(value), 4);
    }
}

#[test]
fn standard_deck_with_jokers_appends_two() {
    let deck = Deck::standard(true);
    assert_eq!(deck.len(), DECK_SIZE_WITH_JOKERS);
    assert_eq!(deck.count_of_value(0), 2);
    assert_eq!(deck.total_value(), 364);
    assert_eq!(deck.cards()[52..], [Card::JOKER, Card::JOKER]);
}

#[test]
fn with_options_respects_flags() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let ordered = Deck::with_options(DeckOptions::default().with_shuffle(false), &mut rng);
    assert_eq!(ordered, Deck::standard(false));

    let shuffled = Deck::with_options(DeckOptions::default().with_jokers(true), &mut rng);
    assert_eq!(shuffled.len(), DECK_SIZE_WITH_JOKERS);
    assert_ne!(shuffled, Deck::standard(true));
    assert_eq!(sorted(&shuffled), sorted(&Deck::standard(true)));
}

#[test]
fn options_defaults_and_counts() {
    let options = DeckOptions::default();
    assert!(!options.jokers);
    assert!(options.shuffle);
    assert_eq!(options.card_count(), DECK_SIZE);
    assert_eq!(options.with_jokers(true).card_count(), DECK_SIZE_WITH_JOKERS);
}

#[test]
fn from_cards_keeps_order_and_aggregates() {
    let deck = Deck::from_cards([
        card(3, Suit::Hearts),
        card(3, Suit::Hearts),
        card(1, Suit::Spades),
    ]);
    assert_eq!(deck.count_of_value(3), 2);
    assert_eq!(deck.total_value(), 7);
    assert_eq!(deck.peek_front(), Ok(card(3, Suit::Hearts)));
    assert_eq!(deck.peek_back(), Ok(card(1, Suit::Spades)));

    let collected: Deck = deck.iter().copied().collect();
    assert_eq!(collected, deck);
    assert_eq!(Deck::from(deck.cards().to_vec()), deck);
}

#[test]
fn add_and_add_many_append_in_order() {
    let mut deck = Deck::new();
    deck.add(card(5, Suit::Clubs));
    deck.add_many([card(6, Suit::Clubs), card(7, Suit::Clubs)]);
    deck.extend([Card::JOKER]);

    assert_eq!(
        deck.cards(),
        [
            card(5, Suit::Clubs),
            card(6, Suit::Clubs),
            card(7, Suit::Clubs),
            Card::JOKER
        ]
    );
}

#[test]
fn remove_takes_first_occurrence_only() {
    let mut deck = Deck::from_cards([Card::JOKER, card(2, Suit::Hearts), Card::JOKER]);
    assert!(deck.remove(Card::JOKER));
    assert_eq!(deck.cards(), [card(2, Suit::Hearts), Card::JOKER]);
    assert!(deck.contains(Card::JOKER));
}

#[test]
fn remove_absent_card_is_noop() {
    let mut deck = Deck::from_cards([card(2, Suit::Hearts)]);
    assert!(!deck.remove(card(2, Suit::Spades)));
    assert_eq!(deck.cards(), [card(2, Suit::Hearts)]);
    assert!(!deck.contains(card(2, Suit::Spades)));
}

#[test]
fn peek_and_draw_from_both_ends() {
    let mut deck = Deck::standard(false);
    assert_eq!(deck.peek_front(), Ok(card(1, Suit::Clubs)));
    assert_eq!(deck.peek_back(), Ok(card(13, Suit::Spades)));
    assert_eq!(deck.len(), DECK_SIZE);

    assert_eq!(deck.draw_front(), Ok(card(1, Suit::Clubs)));
    assert_eq!(deck.draw_back(), Ok(card(13, Suit::Spades)));
    assert_eq!(deck.len(), DECK_SIZE - 2);
    assert!(!deck.contains(card(1, Suit::Clubs)));
    assert_eq!(deck.peek_front(), Ok(card(2, Suit::Clubs)));
}

#[test]
fn empty_deck_access_fails() {
    let mut deck = Deck::new();
    assert_eq!(deck.peek_front(), Err(DeckError::Empty));
    assert_eq!(deck.peek_back(), Err(DeckError::Empty));
    assert_eq!(deck.draw_front(), Err(DeckError::Empty));
    assert_eq!(deck.draw_back(), Err(DeckError::Empty));
    assert_eq!(DeckError::Empty.to_string(), "deck is empty");
}

#[test]
fn draw_front_then_add_moves_card_to_back() {
    let mut deck = Deck::from_cards([
        card(1, Suit::Hearts),
        card(2, Suit::Hearts),
        card(3, Suit::Hearts),
    ]);
    let before = sorted(&deck);

    let top = deck.draw_front().unwrap();
    deck.add(top);

    assert_eq!(sorted(&deck), before);
    assert_eq!(
        deck.cards(),
        [card(2, Suit::Hearts), card(3, Suit::Hearts), card(1, Suit::Hearts)]
    );
}

#[test]
fn shuffle_small_decks_is_noop() {
    let mut empty = Deck::new();
    let mut single = Deck::from_cards([card(9, Suit::Diamonds)]);
    for seed in 0..5 {
        empty.shuffle_seeded(seed);
        single.shuffle_seeded(seed);
    }
    assert!(empty.is_empty());
    assert_eq!(single.cards(), [card(9, Suit::Diamonds)]);
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut a = Deck::standard(true);
    let mut b = Deck::standard(true);
    a.shuffle_seeded(42);
    b.shuffle_seeded(42);
    assert_eq!(a, b);

    let mut c = Deck::standard(true);
    c.shuffle_seeded(43);
    assert_ne!(a, c);
}

#[test]
fn shuffle_preserves_cards_and_changes_order() {
    let mut deck = Deck::standard(false);
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, Deck::standard(false));
    assert_eq!(sorted(&deck), sorted(&Deck::standard(false)));
}

#[test]
fn transfer_moves_one_card() {
    let mut pile = Deck::from_cards([Card::JOKER, card(4, Suit::Spades), Card::JOKER]);
    let mut hand = Deck::from_cards([card(8, Suit::Clubs)]);

    assert!(Deck::transfer(&mut pile, &mut hand, Card::JOKER));
    assert_eq!(pile.cards(), [card(4, Suit::Spades), Card::JOKER]);
    assert_eq!(hand.cards(), [card(8, Suit::Clubs), Card::JOKER]);
    assert_eq!(pile.len() + hand.len(), 4);
}

#[test]
fn transfer_absent_card_changes_nothing() {
    let mut pile = Deck::from_cards([card(4, Suit::Spades)]);
    let mut hand = Deck::new();

    assert!(!Deck::transfer(&mut pile, &mut hand, card(4, Suit::Hearts)));
    assert_eq!(pile.cards(), [card(4, Suit::Spades)]);
    assert!(hand.is_empty());
}

#[test]
fn deal_hand_from_shuffled_pile() {
    let mut pile = Deck::standard(false);
    pile.shuffle_seeded(1);
    let mut hand = Deck::new();

    for _ in 0..5 {
        let top = pile.peek_front().unwrap();
        assert!(Deck::transfer(&mut pile, &mut hand, top));
    }

    assert_eq!(hand.len(), 5);
    assert_eq!(pile.len(), DECK_SIZE - 5);
    assert!(hand.iter().all(|c| !pile.contains(*c)));
}

#[test]
fn iteration_follows_deck_order() {
    let deck = Deck::standard(false);
    let by_ref: Vec<Card> = (&deck).into_iter().copied().collect();
    let owned: Vec<Card> = deck.clone().into_iter().collect();
    assert_eq!(by_ref, deck.cards());
    assert_eq!(owned, deck.cards());
}

#[test]
fn shared_deck_transfer_between_decks() {
    let pile = SharedDeck::new(Deck::standard(false));
    let hand = SharedDeck::default();

    assert!(SharedDeck::transfer(&pile, &hand, card(1, Suit::Clubs)));
    assert!(!SharedDeck::transfer(&pile, &hand, card(1, Suit::Clubs)));
    assert!(SharedDeck::transfer(&hand, &pile, card(1, Suit::Clubs)));

    assert!(hand.lock().is_empty());
    assert_eq!(pile.lock().peek_back(), Ok(card(1, Suit::Clubs)));
    assert_eq!(pile.snapshot().len(), DECK_SIZE);
}

#[test]
fn shared_deck_transfer_to_itself_moves_card_to_back() {
    let deck = SharedDeck::from(Deck::from_cards([card(1, Suit::Clubs), card(2, Suit::Clubs)]));

    assert!(SharedDeck::transfer(&deck, &deck, card(1, Suit::Clubs)));
    assert!(!SharedDeck::transfer(&deck, &deck, Card::JOKER));
    assert_eq!(
        deck.into_inner().cards(),
        [card(2, Suit::Clubs), card(1, Suit::Clubs)]
    );
}

#[test]
fn shared_deck_across_threads() {
    let pile = SharedDeck::new(Deck::standard(false));
    let hands = [SharedDeck::default(), SharedDeck::default()];

    std::thread::scope(|scope| {
        for hand in &hands {
            let pile = &pile;
            scope.spawn(move || {
                for _ in 0..10 {
                    let top = pile.lock().peek_front();
                    if let Ok(top) = top {
                        SharedDeck::transfer(pile, hand, top);
                    }
                }
            });
        }
    });

    let dealt: usize = hands.iter().map(|h| h.lock().len()).sum();
    assert_eq!(pile.lock().len() + dealt, DECK_SIZE);
}

#[test]
fn shared_deck_unlocks_after_self_transfer() {
    let deck = SharedDeck::new(Deck::from_cards([card(1, Suit::Clubs), card(2, Suit::Clubs)]));

    assert!(SharedDeck::transfer(&deck, &deck, card(1, Suit::Clubs)));
    assert_eq!(deck.lock().peek_back(), Ok(card(1, Suit::Clubs)));

    assert!(!SharedDeck::transfer(&deck, &deck, card(3, Suit::Clubs)));
    deck.lock().add(card(3, Suit::Clubs));
    assert!(SharedDeck::transfer(&deck, &deck, card(2, Suit::Clubs)));
    assert_eq!(
        deck.lock().cards(),
        [card(1, Suit::Clubs), card(3, Suit::Clubs), card(2, Suit::Clubs)]
    );
}

#[test]
fn total_value_sums_into_u64() {
    let mut deck = Deck::new();
    deck.add_many(core::iter::repeat_n(card(13, Suit::Spades), 10_000));
    deck.add_many([Card::JOKER; 3]);

    let total: u64 = deck.total_value();
    assert_eq!(total, 130_000);
    assert_eq!(Deck::standard(true).total_value(), 364);
}
