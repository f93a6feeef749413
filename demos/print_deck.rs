//! Prints a shuffled shoe.
//!
//! Usage: `cargo run --example print_deck -- [decks] [jokers] [seed]`

use std::env;

use deckrs::DeckBuilder;

fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let decks = arg(&args, 0, 1u8);
    let jokers = arg(&args, 1, 0u8);
    let seed = args.get(2).and_then(|value| value.parse::<u64>().ok());

    let builder = DeckBuilder::new().with_decks(decks).with_jokers(jokers);
    let cards = match seed {
        Some(seed) => builder.shuffle_seeded(seed).build(),
        None => builder.shuffle().build(),
    };

    match seed {
        Some(seed) => println!("{} card(s), seed {seed}", cards.len()),
        None => println!("{} card(s), unseeded", cards.len()),
    }
    for (i, card) in cards.iter().enumerate() {
        println!("{:>4}  {card}", i + 1);
    }
}
