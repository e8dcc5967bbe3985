//! Request correlation utilities.
//!
//! Every request is tagged with an id (propagated from `x-request-id` or
//! generated) and the id is scoped task-locally so error responses and log
//! lines can pick it up without threading it through call signatures.

use axum::http::HeaderValue;
use std::future::Future;
use uuid::Uuid;

// Re-export tracing macros so `tracing::info!` keeps working at the crate
// root where this module shadows the external crate.
pub use tracing::{debug, error, info, trace, warn};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::generate()
    }
}

tokio::task_local! {
    static CURRENT_REQUEST_ID: RequestId;
}

/// Runs a future with the given request id visible via
/// [`current_request_id`] for its whole extent.
pub async fn scope_request_id<F>(id: RequestId, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_REQUEST_ID.scope(id, fut).await
}

/// The request id of the current task scope, if inside one.
pub fn current_request_id() -> Option<RequestId> {
    CURRENT_REQUEST_ID.try_with(|rid| rid.clone()).ok()
}

/// Axum middleware: scope the request id around the handler and echo it on
/// the response.
pub async fn request_id_middleware(
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let rid = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(RequestId::new)
        .unwrap_or_default();

    let mut response = scope_request_id(rid.clone(), next.run(request)).await;
    if let Ok(value) = HeaderValue::from_str(rid.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
