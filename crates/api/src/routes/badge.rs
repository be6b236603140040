//! Route definitions for the badge endpoints.
//!
//! Both endpoints are public; the per-job view permission is enforced in
//! the resolver, not by an authentication layer.

use axum::routing::get;
use axum::Router;

use crate::handlers::badge;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /icon     -> icon
/// GET    /text     -> text
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/icon", get(badge::icon))
        .route("/text", get(badge::text))
}
