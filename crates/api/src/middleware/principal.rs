//! Request principal extractor.
//!
//! The badge surface is deliberately unauthenticated: a request without
//! credentials is served as [`Principal::Anonymous`] and the per-job view
//! permission decides what it may see. A bearer token, when present, is
//! passed through opaquely to the registry's permission check -- no
//! validation happens here.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use badgeboard_core::registry::Principal;

/// The caller identity for this request, extracted from an optional
/// `Authorization: Bearer <token>` header.
///
/// Use as an extractor parameter in any handler that performs a
/// permission check:
///
/// ```ignore
/// async fn my_handler(RequestPrincipal(principal): RequestPrincipal) -> AppResult<Response> {
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequestPrincipal(pub Principal);

impl<S> FromRequestParts<S> for RequestPrincipal
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|token| Principal::Token(token.trim().to_string()))
            .unwrap_or(Principal::Anonymous);

        Ok(RequestPrincipal(principal))
    }
}
