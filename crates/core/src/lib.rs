//! Badgeboard core domain.
//!
//! Holds the pieces shared by every other crate in the workspace: the
//! build-status model, the badge asset store, the `JobRegistry` capability
//! trait, and the status resolution logic that sequences lookups and
//! permission checks. This crate performs no HTTP; the `badgeboard-api`
//! crate maps its error taxonomy onto response codes.

pub mod badge;
pub mod error;
pub mod registry;
pub mod resolve;
pub mod status;
pub mod style;
