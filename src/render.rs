//! Formatting helpers for terminal output
//!
//! This module contains the display formatting used by the interactive menu
//! and the one-shot CLI flags.

use chrono::Local;

/// Width of the `=` separator rule.
pub const RULE_WIDTH: usize = 80;

/// Timestamp format shared by the CLI cards and the web payloads.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Full-width separator rule.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Current local time formatted for display.
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Format a single quote between separator rules, with a dated heading.
///
/// # Arguments
/// * `heading` - Line shown above the quote (usually containing a timestamp)
/// * `quote` - The quote text itself
pub fn quote_card(heading: &str, quote: &str) -> String {
    format!(
        "{rule}\n{heading}\n{rule}\n{quote}\n{rule}",
        rule = rule(),
        heading = heading,
        quote = quote,
    )
}

/// Card for a randomly picked quote.
pub fn random_card(quote: &str) -> String {
    quote_card(&format!("📅 {}", timestamp_now()), &format!("💭 {}", quote))
}

/// Card for the quote of the day.
pub fn daily_card(quote: &str) -> String {
    quote_card(
        &format!("📅 QUOTE OF THE DAY - {}", timestamp_now()),
        &format!("🌟 {}", quote),
    )
}

/// Numbered listing of the whole collection, 1-based, two-digit aligned.
pub fn listing(quotes: &[String]) -> String {
    let mut result = format!("\n📚 ALL QUOTES COLLECTION\n{}\n", rule());
    for (position, quote) in quotes.iter().enumerate() {
        result.push_str(&format!("{:2}. {}\n", position + 1, quote));
    }
    result.push_str(&rule());
    result
}
