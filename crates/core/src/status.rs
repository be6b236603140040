//! Well-known build status values.
//!
//! Statuses are supplied by the registry entities; this crate only reads
//! them. Each of the six outcomes has an in-progress twin so a badge can
//! show that a new build is running without losing the last outcome.

use serde::{Deserialize, Serialize};

/// Current health of a job or a single build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildStatus {
    Success,
    Unstable,
    Failure,
    Aborted,
    NotBuilt,
    Disabled,
    SuccessBuilding,
    UnstableBuilding,
    FailureBuilding,
    AbortedBuilding,
    NotBuiltBuilding,
    DisabledBuilding,
}

impl BuildStatus {
    /// Every status variant, in declaration order. Used to verify the
    /// asset table covers the full set at load time.
    pub const ALL: [BuildStatus; 12] = [
        BuildStatus::Success,
        BuildStatus::Unstable,
        BuildStatus::Failure,
        BuildStatus::Aborted,
        BuildStatus::NotBuilt,
        BuildStatus::Disabled,
        BuildStatus::SuccessBuilding,
        BuildStatus::UnstableBuilding,
        BuildStatus::FailureBuilding,
        BuildStatus::AbortedBuilding,
        BuildStatus::NotBuiltBuilding,
        BuildStatus::DisabledBuilding,
    ];

    /// Short human-readable descriptor served by the `/text` endpoint.
    ///
    /// Total over all variants; in-progress statuses all read "in progress"
    /// regardless of the pending outcome.
    pub fn description(&self) -> &'static str {
        match self {
            BuildStatus::Success => "passing",
            BuildStatus::Unstable => "unstable",
            BuildStatus::Failure => "failing",
            BuildStatus::Aborted => "aborted",
            BuildStatus::NotBuilt => "not built",
            BuildStatus::Disabled => "disabled",
            BuildStatus::SuccessBuilding
            | BuildStatus::UnstableBuilding
            | BuildStatus::FailureBuilding
            | BuildStatus::AbortedBuilding
            | BuildStatus::NotBuiltBuilding
            | BuildStatus::DisabledBuilding => "in progress",
        }
    }

    /// File-name stem of the badge asset for this status.
    ///
    /// In-progress statuses share the single `running` asset per style.
    pub fn badge_slug(&self) -> &'static str {
        match self {
            BuildStatus::Success => "passing",
            BuildStatus::Unstable => "unstable",
            BuildStatus::Failure => "failing",
            BuildStatus::Aborted => "aborted",
            BuildStatus::NotBuilt => "not-built",
            BuildStatus::Disabled => "disabled",
            BuildStatus::SuccessBuilding
            | BuildStatus::UnstableBuilding
            | BuildStatus::FailureBuilding
            | BuildStatus::AbortedBuilding
            | BuildStatus::NotBuiltBuilding
            | BuildStatus::DisabledBuilding => "running",
        }
    }

    /// Whether a new build is currently running for this status.
    pub fn is_building(&self) -> bool {
        matches!(
            self,
            BuildStatus::SuccessBuilding
                | BuildStatus::UnstableBuilding
                | BuildStatus::FailureBuilding
                | BuildStatus::AbortedBuilding
                | BuildStatus::NotBuiltBuilding
                | BuildStatus::DisabledBuilding
        )
    }
}
