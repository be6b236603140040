//! On-disk registry document format.
//!
//! ```json
//! {
//!   "jobs": [
//!     {
//!       "name": "free1",
//!       "status": "failure",
//!       "public": false,
//!       "viewers": ["ci-dashboard-token"],
//!       "builds": [
//!         { "number": 5, "status": "success" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use badgeboard_core::registry::BuildNumber;
use badgeboard_core::status::BuildStatus;
use serde::Deserialize;

/// Root of the registry file.
#[derive(Debug, Deserialize)]
pub struct RegistryDocument {
    #[serde(default)]
    pub jobs: Vec<JobEntry>,
}

/// One job definition.
#[derive(Debug, Deserialize)]
pub struct JobEntry {
    pub name: String,
    /// The job's aggregate status (its last known build outcome).
    pub status: BuildStatus,
    /// Whether anonymous callers may view the status. Defaults to true;
    /// badge endpoints exist to be embedded.
    #[serde(default = "default_public")]
    pub public: bool,
    /// Bearer tokens granted view permission on a non-public job.
    #[serde(default)]
    pub viewers: Vec<String>,
    #[serde(default)]
    pub builds: Vec<BuildEntry>,
}

/// One recorded build within a job.
#[derive(Debug, Deserialize)]
pub struct BuildEntry {
    pub number: BuildNumber,
    pub status: BuildStatus,
}

fn default_public() -> bool {
    true
}
