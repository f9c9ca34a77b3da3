//! Quotes domain module.
//!
//! Service and repository layers behind the quote generator handler. Pure
//! logic today: the only repository is a placeholder for a future
//! Cloudflare KV/D1 backend, so nothing here performs IO.

pub mod cloudflare;
pub mod repository;
pub mod service;

pub use cloudflare::{CloudflareConfig, CloudflareQuoteRepository, PLACEHOLDER_QUOTE};
pub use repository::QuoteRepository;
pub use service::{DefaultQuoteService, GREETING, QuoteService};
