use crate::status::BuildStatus;

/// Domain-level error taxonomy.
///
/// All four kinds are terminal for a request; there is no local recovery
/// or retry. The `badgeboard-api` crate maps each variant to an HTTP
/// status (400, 404, 403, 500).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The named entity kind does not exist. The message carries the
    /// entity kind only, never the identifier that missed.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The caller lacks view permission on the resolved job.
    #[error("View permission denied")]
    Forbidden,

    /// No badge asset is configured for a status, even under the default
    /// style. Unreachable after a successful `BadgeStore` load; kept
    /// distinguishable so a configuration gap surfaces as a server fault
    /// rather than a panic.
    #[error("No badge asset configured for status {status:?}")]
    AssetMissing { status: BuildStatus },
}
