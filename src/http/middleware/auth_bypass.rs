//! Authentication bypass middleware.
//! Lets allowlisted requests through without authentication; everything
//! else fails closed. Deployments with a real authenticator mount it on
//! the untrusted path behind this layer.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::allowlist::composite::AllowlistHandle;
use crate::http::request::TrustRequest;

/// State required for the bypass decision.
#[derive(Clone)]
pub struct AuthBypassState {
    pub allowlist: AllowlistHandle,
}

/// Context attached to requests that bypassed authentication.
#[derive(Clone, Copy, Debug)]
pub struct TrustContext {
    pub trusted: bool,
}

pub async fn auth_bypass_middleware(
    State(state): State<AuthBypassState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let view = TrustRequest::from_request(&req);

    if state.allowlist.is_trusted(&view) {
        tracing::debug!(
            method = %view.method,
            path = %view.path,
            remote_addr = %view.remote_addr,
            "request trusted by allowlist, skipping authentication"
        );
        req.extensions_mut().insert(TrustContext { trusted: true });
        return next.run(req).await;
    }

    (StatusCode::UNAUTHORIZED, "Authentication required").into_response()
}
