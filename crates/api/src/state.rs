use std::sync::Arc;

use badgeboard_core::badge::BadgeStore;
use badgeboard_core::registry::JobRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Everything in
/// here is built once at startup and is immutable afterwards, so handlers
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The injected job/build lookup and permission capability.
    pub registry: Arc<dyn JobRegistry>,
    /// Pre-rendered badge assets keyed by (style, status slug).
    pub badges: Arc<BadgeStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
