use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{Extension, Query},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::envelope::{ApiGatewayRequest, ApiGatewayResponse};
use crate::handler::QuoteHandler;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Run one invocation of the quote handler for an HTTP request.
pub async fn invoke(
    Extension(handler): Extension<Arc<QuoteHandler>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    query: Option<Query<HashMap<String, String>>>,
    body: Bytes,
) -> Response {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let request = to_envelope(&method, &uri, &headers, query, &body);

    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("invocation", %request_id, method = %method, path = %uri.path());
    let reply = span.in_scope(|| handler.handle(&request));

    into_http(reply)
}

/// Map an HTTP request onto the gateway envelope.
///
/// Non-UTF-8 header values are dropped; repeated headers keep the last value.
pub fn to_envelope(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    query: HashMap<String, String>,
    body: &[u8],
) -> ApiGatewayRequest {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    ApiGatewayRequest {
        http_method: method.as_str().to_string(),
        path: uri.path().to_string(),
        headers,
        query_string_parameters: query,
        body: (!body.is_empty()).then(|| String::from_utf8_lossy(body).into_owned()),
    }
}

/// Map the envelope reply back onto an HTTP response.
///
/// A reply that cannot be represented (bad status, bad header) becomes a bare 500.
pub fn into_http(reply: ApiGatewayResponse) -> Response {
    let Ok(status) = StatusCode::from_u16(reply.status_code) else {
        tracing::error!(status = reply.status_code, "handler returned an invalid status code");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    let mut builder = axum::http::Response::builder().status(status);
    for (name, value) in &reply.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    match builder.body(Body::from(reply.body)) {
        Ok(res) => res,
        Err(err) => {
            tracing::error!(error = %err, "handler reply is not a valid HTTP response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{compose, router};
    use axum::http::{HeaderValue, Request};
    use crate::handler::INTERNAL_ERROR_BODY;
    use sloth_core::QuoteResult;
    use sloth_quotes::{CloudflareConfig, GREETING, QuoteService};
    use tower::ServiceExt;

    struct PanickingService;

    impl QuoteService for PanickingService {
        fn greeting(&self) -> QuoteResult<String> {
            panic!("greeting exploded");
        }

        fn generate_quote(&self, _category: Option<&str>, _length: Option<&str>) -> QuoteResult<String> {
            panic!("generate_quote exploded");
        }
    }

    fn test_router() -> axum::Router {
        router(Arc::new(compose(CloudflareConfig::default())))
    }

    async fn body_string(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn get_random_quote_returns_greeting() {
        let res = test_router()
            .oneshot(
                Request::builder()
                    .uri("/quotes/random")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["content-type"], "application/json");
        assert_eq!(res.headers()["access-control-allow-origin"], "*");

        let body = body_string(res).await;
        assert!(body.contains(GREETING));
        assert!(body.contains("timestamp"));
    }

    #[tokio::test]
    async fn options_is_routed_to_the_handler() {
        let res = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/quotes/random")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["access-control-allow-methods"], "GET, OPTIONS");
    }

    #[tokio::test]
    async fn panicking_service_still_gets_a_500_reply() {
        let app = router(Arc::new(QuoteHandler::new(Arc::new(PanickingService))));

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/quotes/random")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.headers().get("content-type").is_none());
        assert!(res.headers().get("access-control-allow-origin").is_none());
        assert_eq!(body_string(res).await, INTERNAL_ERROR_BODY);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[test]
    fn envelope_carries_method_path_headers_query_and_body() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer t"));
        headers.insert("x-binary", HeaderValue::from_bytes(b"\xff").unwrap());
        let uri: Uri = "/quotes/random?category=life".parse().unwrap();
        let query = HashMap::from([("category".to_string(), "life".to_string())]);

        let req = to_envelope(&Method::GET, &uri, &headers, query, b"hello");

        assert_eq!(req.http_method, "GET");
        assert_eq!(req.path, "/quotes/random");
        assert_eq!(req.headers.get("authorization").map(String::as_str), Some("Bearer t"));
        assert!(!req.headers.contains_key("x-binary"));
        assert_eq!(
            req.query_string_parameters.get("category").map(String::as_str),
            Some("life")
        );
        assert_eq!(req.body.as_deref(), Some("hello"));
    }

    #[test]
    fn empty_body_maps_to_none() {
        let uri: Uri = "/quotes/random".parse().unwrap();
        let req = to_envelope(&Method::GET, &uri, &HeaderMap::new(), HashMap::new(), b"");
        assert_eq!(req.body, None);
    }

    #[tokio::test]
    async fn reply_headers_and_body_are_copied() {
        let reply = ApiGatewayResponse::new(500, r#"{"error":"Internal Server Error"}"#);

        let res = into_http(reply);

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.headers().get("content-type").is_none());
        assert_eq!(body_string(res).await, r#"{"error":"Internal Server Error"}"#);
    }

    #[test]
    fn invalid_status_becomes_500() {
        let res = into_http(ApiGatewayResponse::new(1000, "{}"));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_header_becomes_500() {
        let res = into_http(ApiGatewayResponse::new(200, "{}").with_header("bad header", "x"));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
