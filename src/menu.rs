//! Interactive menu front end
//!
//! A keyboard-driven select loop over the quote operations, using
//! `dialoguer`. Interrupts and terminal errors are contained here, at the
//! loop boundary, and end the session with a goodbye message.

use anyhow::Result;
use chrono::Local;
use dialoguer::{Input, Select};

use crate::quotes::QuoteCollection;
use crate::render;

const MENU_ITEMS: [&str; 5] = [
    "Display random quote",
    "Display all quotes",
    "Add new quote",
    "Display quote of the day",
    "Exit",
];

/// Run the interactive menu until the user exits.
///
/// The collection is owned by the caller and mutated in place by the
/// add-quote option. This call blocks until the session ends.
pub fn run(quotes: &mut QuoteCollection) -> Result<()> {
    println!("🌟 Welcome to the Quote Display App! 🌟\n");

    loop {
        let selection = Select::new()
            .with_prompt("Choose an option")
            .items(&MENU_ITEMS)
            .default(0)
            .interact();

        // Ctrl-C or a broken terminal ends the session, never the process
        // with a panic.
        let Ok(selection) = selection else {
            println!("\n👋 Goodbye!");
            return Ok(());
        };

        match selection {
            0 => println!("{}", render::random_card(quotes.pick_random())),
            1 => println!("{}", render::listing(quotes.list_all())),
            2 => prompt_and_add(quotes),
            3 => println!(
                "{}",
                render::daily_card(quotes.pick_of_day(Local::now().date_naive()))
            ),
            4 => {
                println!("👋 Thank you for using the Quote App! Goodbye!");
                return Ok(());
            }
            _ => {}
        }
    }
}

fn prompt_and_add(quotes: &mut QuoteCollection) {
    let input: Result<String, _> = Input::new()
        .with_prompt("Enter your new quote")
        .allow_empty(true)
        .interact_text();

    let Ok(candidate) = input else {
        println!("❌ Could not read the quote.");
        return;
    };

    if quotes.add(&candidate) {
        println!("✅ Quote added successfully! Total quotes: {}", quotes.len());
    } else {
        println!("❌ Please enter a valid quote.");
    }
}
