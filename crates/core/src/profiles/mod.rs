//! Quality, delay and custom format profiles attached to a series.

mod delay;
mod format;
mod quality;

pub use delay::{DelayProfile, DelayProfileService, DelayProfileStore};
pub use format::{format_names, CustomFormat, ProfileFormatItem};
pub use quality::{QualityIndex, QualityProfile, QualityProfileItem};

use thiserror::Error;

use crate::quality::Quality;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Quality profile '{0}' has no items")]
    Empty(String),

    #[error("Quality profile '{0}' does not allow any quality")]
    NothingAllowed(String),

    #[error("Quality profile '{profile}' lists {quality} more than once")]
    DuplicateQuality { profile: String, quality: Quality },

    #[error("Quality profile '{profile}' cutoff {cutoff} does not match any item")]
    CutoffNotFound { profile: String, cutoff: i32 },

    #[error("Quality profile '{profile}' cutoff {cutoff} is not an allowed item")]
    CutoffNotAllowed { profile: String, cutoff: i32 },
}
