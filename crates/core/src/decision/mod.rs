//! Download admission decisions.
//!
//! A [`DecisionEngine`] runs a [`RemoteEpisode`](crate::model::RemoteEpisode)
//! through its specifications in priority order (in-memory checks, then
//! database-backed, then disk) and stops at the first rejection.

pub mod specifications;

mod engine;
mod traits;
mod types;
mod upgrade;

pub use engine::{DecisionEngine, DecisionServices, EngineError};
pub use traits::{DecisionSpecification, DiskError, DiskProvider, HistoryService};
pub use types::{
    Decision, DecisionContext, Rejection, RejectionReason, RejectionType, SearchCriteria,
    SpecDecision, SpecificationPriority,
};
pub use upgrade::{UpgradableSpecification, UpgradeRejectReason};
