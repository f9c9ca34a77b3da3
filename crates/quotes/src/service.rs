//! Quote service: the business layer between the handler and storage.

use sloth_core::QuoteResult;

use crate::repository::QuoteRepository;

/// Greeting returned in place of a generated quote.
pub const GREETING: &str = "Hello from Sloth Util Quote Generator!";

/// Greeting and quote generation operations exposed to the handler.
pub trait QuoteService: Send + Sync {
    /// Fixed greeting message.
    fn greeting(&self) -> QuoteResult<String>;

    /// Produce a quote, optionally narrowed by category and length.
    fn generate_quote(&self, category: Option<&str>, length: Option<&str>) -> QuoteResult<String>;
}

/// Stateless service backed by a [`QuoteRepository`].
#[derive(Debug, Clone)]
pub struct DefaultQuoteService<R> {
    repository: R,
}

impl<R> DefaultQuoteService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R> QuoteService for DefaultQuoteService<R>
where
    R: QuoteRepository,
{
    fn greeting(&self) -> QuoteResult<String> {
        Ok(GREETING.to_string())
    }

    fn generate_quote(&self, category: Option<&str>, length: Option<&str>) -> QuoteResult<String> {
        // Straight pass-through: no validation, fallback or caching.
        self.repository.random_quote(category, length)
    }
}
