//! Quote generator API: invocation envelope, handler, and HTTP wiring.

pub mod app;
pub mod config;
pub mod envelope;
pub mod handler;

pub use config::ApiConfig;
pub use envelope::{ApiGatewayRequest, ApiGatewayResponse};
pub use handler::QuoteHandler;
