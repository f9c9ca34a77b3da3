//! Invocation handler: adapts the request envelope to a service call and
//! formats the reply.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use sloth_core::QuoteError;
use sloth_quotes::QuoteService;

use crate::envelope::{ApiGatewayRequest, ApiGatewayResponse};

/// Body returned for every failure. Error details stay in the logs.
pub const INTERNAL_ERROR_BODY: &str = r#"{"error":"Internal Server Error"}"#;

const SUCCESS_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type,Authorization"),
];

/// Source of the `timestamp` embedded in success bodies.
pub type Clock = fn() -> DateTime<Utc>;

/// Quote generator entry point.
///
/// Holds only an immutable service reference, so one instance can serve any
/// number of invocations.
#[derive(Clone)]
pub struct QuoteHandler {
    service: Arc<dyn QuoteService>,
    clock: Clock,
}

impl QuoteHandler {
    pub fn new(service: Arc<dyn QuoteService>) -> Self {
        Self::with_clock(service, Utc::now)
    }

    pub fn with_clock(service: Arc<dyn QuoteService>, clock: Clock) -> Self {
        Self { service, clock }
    }

    /// Handle one invocation.
    ///
    /// The request is not inspected: every method and path gets the greeting.
    /// A panicking service is reported like any other fault.
    pub fn handle(&self, _request: &ApiGatewayRequest) -> ApiGatewayResponse {
        tracing::info!("processing quote request");

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.service.greeting()))
            .unwrap_or_else(|payload| Err(QuoteError::internal(panic_message(payload.as_ref()))));

        match outcome {
            Ok(greeting) => {
                let timestamp = (self.clock)().to_rfc3339_opts(SecondsFormat::AutoSi, true);
                // Formatted, not serialized: a `"` in the greeting yields invalid JSON.
                let body = format!(r#"{{"message":"{greeting}","timestamp":"{timestamp}"}}"#);

                SUCCESS_HEADERS
                    .iter()
                    .fold(ApiGatewayResponse::new(200, body), |res, (k, v)| {
                        res.with_header(*k, *v)
                    })
            }
            Err(err) => {
                tracing::error!(error = %err, "quote request failed");
                ApiGatewayResponse::new(500, INTERNAL_ERROR_BODY)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("service panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("service panicked: {msg}")
    } else {
        "service panicked".to_string()
    }
}

impl core::fmt::Debug for QuoteHandler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuoteHandler").finish_non_exhaustive()
    }
}
