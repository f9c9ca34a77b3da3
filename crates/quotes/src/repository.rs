//! Storage boundary for quotes.

use std::sync::Arc;

use sloth_core::QuoteResult;

/// Read/write access to a quote store.
///
/// Implementations may be backed by a remote key-value cache plus database,
/// or be in-memory stand-ins for tests. `category` and `length` are hints; an
/// implementation is free to ignore them.
pub trait QuoteRepository: Send + Sync {
    /// Fetch a random quote, optionally narrowed by category and length.
    fn random_quote(&self, category: Option<&str>, length: Option<&str>) -> QuoteResult<String>;

    /// Persist a quote. Returns whether the store accepted it.
    fn save_quote(&self, text: &str, author: &str, category: &str) -> QuoteResult<bool>;
}

impl<R> QuoteRepository for Arc<R>
where
    R: QuoteRepository + ?Sized,
{
    fn random_quote(&self, category: Option<&str>, length: Option<&str>) -> QuoteResult<String> {
        (**self).random_quote(category, length)
    }

    fn save_quote(&self, text: &str, author: &str, category: &str) -> QuoteResult<bool> {
        (**self).save_quote(text, author, category)
    }
}
