//! Quality tiers, revisions and per-quality size definitions.

mod definition;
mod revision;
mod types;

pub use definition::{
    default_definitions, QualityDefinition, QualityDefinitionService, QualityDefinitionTable,
};
pub use revision::{QualityModel, Revision};
pub use types::{Quality, QualitySource};
