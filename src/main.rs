//! Quotery - Terminal Entry Point
//!
//! One-shot flags print a single result and exit; with no flags the app
//! runs the interactive menu.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use quotery::{QuoteCollection, menu, render};

/// Quotery - display inspirational quotes in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print one random quote and exit
    #[arg(long, group = "oneshot")]
    random: bool,

    /// Print the whole collection and exit
    #[arg(long, group = "oneshot")]
    all: bool,

    /// Print the quote of the day and exit
    #[arg(long, group = "oneshot")]
    daily: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut quotes = QuoteCollection::new();

    if args.random {
        println!("{}", render::random_card(quotes.pick_random()));
    } else if args.all {
        println!("{}", render::listing(quotes.list_all()));
    } else if args.daily {
        println!(
            "{}",
            render::daily_card(quotes.pick_of_day(Local::now().date_naive()))
        );
    } else {
        menu::run(&mut quotes)?;
    }

    Ok(())
}
