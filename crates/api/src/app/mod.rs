//! HTTP application wiring (composition root + Axum router).
//!
//! - `compose`: builds repository -> service -> handler once at startup
//! - `routes.rs`: adapters between HTTP and the invocation envelope

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use sloth_quotes::{CloudflareConfig, CloudflareQuoteRepository, DefaultQuoteService};

use crate::config::ApiConfig;
use crate::handler::QuoteHandler;

pub mod routes;

/// Wire the production handler: Cloudflare repository behind the default service.
pub fn compose(cloudflare: CloudflareConfig) -> QuoteHandler {
    let repository = CloudflareQuoteRepository::new(cloudflare);
    let service = DefaultQuoteService::new(repository);
    QuoteHandler::new(Arc::new(service))
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    router(Arc::new(compose(config.cloudflare.clone())))
}

/// Router serving `handler` on the routes the gateway forwards to it.
pub fn router(handler: Arc<QuoteHandler>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/quotes/random", get(routes::invoke).options(routes::invoke))
        .layer(ServiceBuilder::new().layer(Extension(handler)))
}
