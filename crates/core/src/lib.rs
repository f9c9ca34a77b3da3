//! `sloth-core`: shared building blocks for the quote generator.
//!
//! This crate holds the error model every layer agrees on (no infrastructure
//! concerns).

pub mod error;

pub use error::{QuoteError, QuoteResult};
