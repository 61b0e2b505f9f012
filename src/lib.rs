//! Quotery Library
//!
//! An inspirational quote display app: an in-memory collection of quote
//! strings with random, full-listing, and deterministic daily picks, plus a
//! validated append. Two front ends consume the same collection: an
//! interactive terminal menu and a small HTTP app.
//!
//! # Architecture
//!
//! - **Domain layer**: `quotes` module - the quote collection and its four
//!   operations
//! - **Presentation layer**: `render` (terminal cards and listings) and
//!   `pages` (HTML page builders)
//! - **Front ends**: `menu` (dialoguer select loop) and `server` (axum
//!   routes over shared state)
//!
//! # Example
//!
//! ```
//! use quotery::QuoteCollection;
//!
//! let mut quotes = QuoteCollection::new();
//! assert_eq!(quotes.len(), 10);
//! assert!(quotes.add("Brevity is the soul of wit. - Shakespeare"));
//! ```

pub mod menu;
pub mod pages;
pub mod quotes;
pub mod render;
pub mod server;

// Re-export commonly used types
pub use quotes::{DEFAULT_QUOTES, QuoteCollection};
pub use server::AppState;
