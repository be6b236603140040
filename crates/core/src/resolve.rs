//! Status resolution: identifiers in, a single [`BuildStatus`] out.

use crate::error::CoreError;
use crate::registry::{BuildNumber, JobRegistry, Principal};
use crate::status::BuildStatus;

/// What a badge request points at: a job's aggregate status, or one
/// specific build within a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Job(String),
    Build(String, BuildNumber),
}

impl Target {
    pub fn job_name(&self) -> &str {
        match self {
            Target::Job(name) | Target::Build(name, _) => name,
        }
    }
}

/// Resolve a target to its current status.
///
/// Sequencing is part of the public contract: existence is resolved
/// before the permission check, so a missing job or build reports
/// `NotFound` even to callers without view permission, and clients can
/// tell the two apart by status code.
///
/// A build target returns the build's own status, which may differ from
/// the job's aggregate.
pub fn resolve_status(
    registry: &dyn JobRegistry,
    principal: &Principal,
    target: &Target,
) -> Result<BuildStatus, CoreError> {
    let name = target.job_name();
    if name.is_empty() {
        return Err(CoreError::Validation("Job name must not be empty".into()));
    }

    let job = registry
        .lookup_job(name)
        .ok_or(CoreError::NotFound { entity: "Job" })?;

    let build = match target {
        Target::Job(_) => None,
        Target::Build(_, number) => Some(
            registry
                .lookup_build(&job, *number)
                .ok_or(CoreError::NotFound { entity: "Build" })?,
        ),
    };

    if !registry.has_view_permission(principal, &job) {
        return Err(CoreError::Forbidden);
    }

    Ok(build.map_or(job.status, |b| b.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Build, Job};

    /// Minimal registry stub: one job with one build, visible only to
    /// the configured viewer token (or everyone when `public`).
    struct StubRegistry {
        job: Job,
        build: Build,
        public: bool,
        viewer: &'static str,
    }

    impl StubRegistry {
        fn new() -> Self {
            StubRegistry {
                job: Job {
                    name: "free1".into(),
                    status: BuildStatus::Failure,
                },
                build: Build {
                    number: 5,
                    status: BuildStatus::Success,
                },
                public: true,
                viewer: "secret",
            }
        }

        fn private() -> Self {
            StubRegistry {
                public: false,
                ..StubRegistry::new()
            }
        }
    }

    impl JobRegistry for StubRegistry {
        fn lookup_job(&self, name: &str) -> Option<Job> {
            (name == self.job.name).then(|| self.job.clone())
        }

        fn lookup_build(&self, job: &Job, number: BuildNumber) -> Option<Build> {
            (job.name == self.job.name && number == self.build.number).then_some(self.build)
        }

        fn has_view_permission(&self, principal: &Principal, _job: &Job) -> bool {
            self.public || matches!(principal, Principal::Token(t) if t == self.viewer)
        }

        fn job_count(&self) -> usize {
            1
        }
    }

    #[test]
    fn job_target_returns_aggregate_status() {
        let registry = StubRegistry::new();
        let status = resolve_status(
            &registry,
            &Principal::Anonymous,
            &Target::Job("free1".into()),
        )
        .unwrap();
        assert_eq!(status, BuildStatus::Failure);
    }

    #[test]
    fn build_target_overrides_aggregate_status() {
        let registry = StubRegistry::new();
        let status = resolve_status(
            &registry,
            &Principal::Anonymous,
            &Target::Build("free1".into(), 5),
        )
        .unwrap();
        assert_eq!(status, BuildStatus::Success);
    }

    #[test]
    fn unknown_job_is_not_found() {
        let registry = StubRegistry::new();
        let err = resolve_status(
            &registry,
            &Principal::Anonymous,
            &Target::Job("nope".into()),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { entity: "Job" }));
    }

    #[test]
    fn known_job_unknown_build_is_not_found() {
        let registry = StubRegistry::new();
        let err = resolve_status(
            &registry,
            &Principal::Anonymous,
            &Target::Build("free1".into(), 99),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { entity: "Build" }));
    }

    #[test]
    fn empty_job_name_is_a_validation_error() {
        let registry = StubRegistry::new();
        let err = resolve_status(&registry, &Principal::Anonymous, &Target::Job(String::new()))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn private_job_denies_anonymous() {
        let registry = StubRegistry::private();
        let err = resolve_status(
            &registry,
            &Principal::Anonymous,
            &Target::Job("free1".into()),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Forbidden));
    }

    #[test]
    fn private_job_allows_configured_viewer() {
        let registry = StubRegistry::private();
        let status = resolve_status(
            &registry,
            &Principal::Token("secret".into()),
            &Target::Job("free1".into()),
        )
        .unwrap();
        assert_eq!(status, BuildStatus::Failure);
    }

    #[test]
    fn missing_job_reports_not_found_even_without_permission() {
        // Existence resolution runs first, so an unauthorized caller still
        // sees NotFound for a job that does not exist.
        let registry = StubRegistry::private();
        let err = resolve_status(
            &registry,
            &Principal::Anonymous,
            &Target::Job("nope".into()),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }
}
