//! Quote collection domain model
//!
//! This module contains the core in-memory quote collection and its
//! operations. The collection is seeded at construction and is never empty,
//! so every read operation is total.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// The ten quotes every collection starts with, in display order.
pub const DEFAULT_QUOTES: [&str; 10] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Innovation distinguishes between a leader and a follower. - Steve Jobs",
    "Life is what happens to you while you're busy making other plans. - John Lennon",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "It is during our darkest moments that we must focus to see the light. - Aristotle",
    "The way to get started is to quit talking and begin doing. - Walt Disney",
    "Don't be pushed around by the fears in your mind. Be led by the dreams in your heart. - Roy T. Bennett",
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "The only impossible journey is the one you never begin. - Tony Robbins",
    "Believe you can and you're halfway there. - Theodore Roosevelt",
];

/// Ordered, in-memory collection of quote strings.
///
/// Insertion order is significant: it determines display numbering and the
/// daily-quote index. Duplicates are permitted. The only mutation is
/// [`QuoteCollection::add`]; there is no removal, so the collection can never
/// become empty.
#[derive(Debug, Clone)]
pub struct QuoteCollection {
    items: Vec<String>,
}

impl Default for QuoteCollection {
    fn default() -> Self {
        Self {
            items: DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect(),
        }
    }
}

impl QuoteCollection {
    /// Create a collection seeded with the built-in quotes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick one quote with uniform probability over the current items.
    pub fn pick_random(&self) -> &str {
        let index = rand::rng().random_range(0..self.items.len());
        &self.items[index]
    }

    /// All quotes in insertion order.
    pub fn list_all(&self) -> &[String] {
        &self.items
    }

    /// The quote for a given calendar day.
    ///
    /// The index is `day_of_year % len`, with day-of-year counted 1-based
    /// from January 1 (leap years contribute a 366th day). The same date and
    /// the same collection length always map to the same quote; growing the
    /// collection remaps all days.
    pub fn pick_of_day(&self, date: NaiveDate) -> &str {
        let index = date.ordinal() as usize % self.items.len();
        &self.items[index]
    }

    /// Append a quote after trimming surrounding whitespace.
    ///
    /// Returns `true` and stores the trimmed string if anything remains
    /// after trimming; returns `false` and leaves the collection untouched
    /// otherwise. This is the only mutation and the only validation rule.
    pub fn add(&mut self, candidate: &str) -> bool {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// Current number of quotes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; the collection is seeded and never shrinks.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
