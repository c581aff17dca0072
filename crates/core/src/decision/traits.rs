//! Traits for decision specifications and the services they consult.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::decision::types::{
    DecisionContext, RejectionType, SpecDecision, SpecificationPriority,
};
use crate::model::{EpisodeHistory, RemoteEpisode};

/// Errors that can occur while querying the disk.
#[derive(Debug, Error)]
pub enum DiskError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One admission rule.
///
/// Implementations must be cheap to call repeatedly and must not panic;
/// failures to consult a service are resolved inside the rule.
pub trait DecisionSpecification: Send + Sync {
    /// Name of this specification for logging/audit.
    fn name(&self) -> &str;

    fn priority(&self) -> SpecificationPriority;

    fn rejection_type(&self) -> RejectionType;

    fn is_satisfied_by(&self, subject: &RemoteEpisode, context: &DecisionContext) -> SpecDecision;
}

/// Filesystem queries needed by the disk specifications.
pub trait DiskProvider: Send + Sync {
    /// Free bytes on the volume holding `path`. `None` when the platform cannot tell.
    fn available_space(&self, path: &Path) -> Result<Option<u64>, DiskError>;

    fn file_exists(&self, path: &Path) -> bool;
}

/// Grab/import history lookups.
pub trait HistoryService: Send + Sync {
    fn most_recent_for_episode(&self, episode_id: i32) -> Option<EpisodeHistory>;
}
