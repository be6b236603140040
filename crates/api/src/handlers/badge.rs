//! Handlers for the badge endpoints.
//!
//! Both endpoints are reachable without credentials; the resolver enforces
//! the per-job view permission. Responses carry `Cache-Control: no-cache`
//! so embedded badges never go stale behind a proxy.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use badgeboard_core::resolve::{resolve_status, Target};
use badgeboard_core::style::BadgeStyle;

use crate::error::{AppError, AppResult};
use crate::middleware::principal::RequestPrincipal;
use crate::state::AppState;

/// Badges are embedded in READMEs and dashboards; intermediaries must
/// revalidate on every fetch.
const BADGE_CACHE_CONTROL: &str = "no-cache, private";

/// Query parameters shared by `/icon` and `/text`.
///
/// `job` is required (its absence is a 400, not a 404); `build` and
/// `style` are optional. All parsing is done here rather than with typed
/// extractors so a missing parameter produces our error shape instead of
/// axum's rejection.
#[derive(Debug, Deserialize)]
pub struct BadgeParams {
    pub job: Option<String>,
    pub build: Option<String>,
    pub style: Option<String>,
}

/// Turn raw query parameters into a resolution target.
fn parse_target(params: &BadgeParams) -> Result<Target, AppError> {
    let job = params
        .job
        .clone()
        .ok_or_else(|| AppError::BadRequest("Missing required query parameter 'job'".into()))?;

    match params.build.as_deref() {
        None => Ok(Target::Job(job)),
        Some(raw) => {
            let number = raw.parse().map_err(|_| {
                AppError::BadRequest("Query parameter 'build' must be a build number".into())
            })?;
            Ok(Target::Build(job, number))
        }
    }
}

// ---------------------------------------------------------------------------
// Icon
// ---------------------------------------------------------------------------

/// GET /icon?job=NAME[&build=N][&style=STYLE]
///
/// Serves the badge image for the resolved status. An unrecognized style
/// falls back to the default; the content type is whatever the selected
/// asset declares.
pub async fn icon(
    RequestPrincipal(principal): RequestPrincipal,
    State(state): State<AppState>,
    Query(params): Query<BadgeParams>,
) -> AppResult<Response> {
    let target = parse_target(&params)?;
    let status = resolve_status(state.registry.as_ref(), &principal, &target)?;

    let style = BadgeStyle::from_token(params.style.as_deref());
    let asset = state.badges.image(status, style)?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, asset.content_type)
        .header(header::CACHE_CONTROL, BADGE_CACHE_CONTROL)
        .body(Body::from(asset.bytes.clone()))
        .unwrap())
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// GET /text?job=NAME[&build=N]
///
/// Serves the plain-text status descriptor (e.g. `failing`).
pub async fn text(
    RequestPrincipal(principal): RequestPrincipal,
    State(state): State<AppState>,
    Query(params): Query<BadgeParams>,
) -> AppResult<impl IntoResponse> {
    let target = parse_target(&params)?;
    let status = resolve_status(state.registry.as_ref(), &principal, &target)?;

    Ok((
        [(header::CACHE_CONTROL, BADGE_CACHE_CONTROL)],
        status.description(),
    ))
}
