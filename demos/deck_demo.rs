//! Interactive deck demo.
//!
//! Fills a deck, lists it with names and sprite keys, and lets you shuffle,
//! deal cards into a hand and return them. Pass a sprite directory as the
//! first argument to resolve keys against `<dir>/<KEY>.png` files.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{AssetSource, Deck, DeckOptions, NameStyle, asset_key, resolve_asset};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Sprites stored as `<KEY>.png` files in one directory.
struct SpriteDir {
    root: PathBuf,
}

impl AssetSource for SpriteDir {
    type Asset = PathBuf;

    fn load(&self, key: &str) -> Option<Self::Asset> {
        let path = self.root.join(format!("{key}.png"));
        path.is_file().then_some(path)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sprites = std::env::args().nth(1).map(|root| SpriteDir {
        root: PathBuf::from(root),
    });

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("Deck demo (type 'q' to quit)");

    let options = DeckOptions::default().with_shuffle(false);
    let mut pile = Deck::with_options(options, &mut rng);
    let mut hand = Deck::new();
    print_deck("Pile", &pile, sprites.as_ref());

    loop {
        let command = prompt_line("[s]huffle [d]eal [r]eturn [j]okers [l]ist [q]uit: ");
        match command.as_str() {
            "s" | "shuffle" => {
                pile.shuffle(&mut rng);
                print_deck("Pile", &pile, sprites.as_ref());
            }
            "d" | "deal" => match pile.peek_front() {
                Ok(top) => {
                    Deck::transfer(&mut pile, &mut hand, top);
                    println!("Dealt {top}.");
                    print_hand(&hand);
                }
                Err(err) => println!("Cannot deal: {err}"),
            },
            "r" | "return" => match hand.peek_back() {
                Ok(card) => {
                    Deck::transfer(&mut hand, &mut pile, card);
                    println!("Returned {card} to the bottom of the pile.");
                    print_hand(&hand);
                }
                Err(err) => println!("Cannot return: {err}"),
            },
            "j" | "jokers" => {
                pile = Deck::with_options(options.with_jokers(true).with_shuffle(true), &mut rng);
                hand = Deck::new();
                print_deck("Pile", &pile, sprites.as_ref());
            }
            "l" | "list" => {
                print_deck("Pile", &pile, sprites.as_ref());
                print_hand(&hand);
            }
            "q" | "quit" => return,
            _ => println!("Unknown command."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_deck(label: &str, deck: &Deck, sprites: Option<&SpriteDir>) {
    println!(
        "\n{label}: {} cards, total value {}",
        deck.len(),
        deck.total_value()
    );
    for (index, card) in deck.iter().enumerate() {
        let sprite = match sprites {
            Some(dir) => match resolve_asset(dir, card) {
                Ok(path) => display_path(&path),
                Err(err) => {
                    eprintln!("Sprite configuration error: {err}");
                    std::process::exit(1);
                }
            },
            None => asset_key(card),
        };
        let name = card.to_string();
        println!("{index:>3}  {name:<18} {sprite}");
    }
    println!();
}

fn print_hand(hand: &Deck) {
    let names: Vec<String> = hand.iter().map(|c| c.name(NameStyle::Abbreviated)).collect();
    println!("Hand: [{}] (value {})", names.join(" "), hand.total_value());
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
