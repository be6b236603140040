//! In-memory registry store.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use badgeboard_core::registry::{Build, BuildNumber, Job, JobRegistry, Principal};

use crate::format::RegistryDocument;

/// Error raised while loading the registry file at startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to read registry file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse registry file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate job name '{name}' in registry file")]
    DuplicateJob { name: String },
}

#[derive(Debug)]
struct JobRecord {
    job: Job,
    public: bool,
    viewers: Vec<String>,
    builds: BTreeMap<BuildNumber, Build>,
}

/// Immutable job/build store built once at startup.
#[derive(Debug)]
pub struct InMemoryRegistry {
    jobs: HashMap<String, JobRecord>,
}

impl InMemoryRegistry {
    /// Read and parse the registry document at `path`.
    pub fn load_from_path(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let doc: RegistryDocument =
            serde_json::from_str(&raw).map_err(|source| RegistryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_document(doc)
    }

    /// Build the store from an already-parsed document.
    pub fn from_document(doc: RegistryDocument) -> Result<Self, RegistryError> {
        let mut jobs = HashMap::with_capacity(doc.jobs.len());

        for entry in doc.jobs {
            let record = JobRecord {
                job: Job {
                    name: entry.name.clone(),
                    status: entry.status,
                },
                public: entry.public,
                viewers: entry.viewers,
                builds: entry
                    .builds
                    .into_iter()
                    .map(|b| {
                        (
                            b.number,
                            Build {
                                number: b.number,
                                status: b.status,
                            },
                        )
                    })
                    .collect(),
            };

            if jobs.insert(entry.name.clone(), record).is_some() {
                return Err(RegistryError::DuplicateJob { name: entry.name });
            }
        }

        Ok(InMemoryRegistry { jobs })
    }
}

impl JobRegistry for InMemoryRegistry {
    fn lookup_job(&self, name: &str) -> Option<Job> {
        self.jobs.get(name).map(|r| r.job.clone())
    }

    fn lookup_build(&self, job: &Job, number: BuildNumber) -> Option<Build> {
        self.jobs
            .get(&job.name)
            .and_then(|r| r.builds.get(&number).copied())
    }

    fn has_view_permission(&self, principal: &Principal, job: &Job) -> bool {
        let Some(record) = self.jobs.get(&job.name) else {
            return false;
        };

        if record.public {
            return true;
        }

        match principal {
            Principal::Token(token) => record.viewers.iter().any(|v| v == token),
            Principal::Anonymous => false,
        }
    }

    fn job_count(&self) -> usize {
        self.jobs.len()
    }
}
