pub mod badge;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the badge route tree, mounted at the root.
///
/// The badge URLs are a stable public contract (they end up pasted into
/// READMEs), so they are not versioned under an API prefix:
///
/// ```text
/// /icon?job=NAME[&build=N][&style=STYLE]   badge image
/// /text?job=NAME[&build=N]                 plain-text status
/// ```
pub fn api_routes() -> Router<AppState> {
    badge::router()
}
