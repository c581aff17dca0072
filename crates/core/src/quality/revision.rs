use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::Quality;

/// Release revision: version counter, count of `REAL` tags, and whether it was a repack.
///
/// Ordering compares `real` first, then `version`. `is_repack` is informational
/// and does not take part in equality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Revision {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub real: u32,
    #[serde(default)]
    pub is_repack: bool,
}

fn default_version() -> u32 {
    1
}

impl Revision {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn repack(version: u32) -> Self {
        Self {
            version,
            real: 0,
            is_repack: true,
        }
    }

    pub fn with_real(mut self, real: u32) -> Self {
        self.real = real;
        self
    }

    /// True for anything past the first release (proper, repack, v2, real).
    pub fn is_proper(&self) -> bool {
        self.version > 1 || self.real > 0
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self {
            version: default_version(),
            real: 0,
            is_repack: false,
        }
    }
}

impl PartialEq for Revision {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.real == other.real
    }
}

impl Eq for Revision {}

impl Ord for Revision {
    fn cmp(&self, other: &Self) -> Ordering {
        self.real
            .cmp(&other.real)
            .then(self.version.cmp(&other.version))
    }
}

impl PartialOrd for Revision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version)?;
        if self.real > 0 {
            write!(f, " real:{}", self.real)?;
        }
        Ok(())
    }
}

/// A quality tier together with its revision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityModel {
    pub quality: Quality,
    #[serde(default)]
    pub revision: Revision,
}

impl QualityModel {
    pub fn new(quality: Quality) -> Self {
        Self {
            quality,
            revision: Revision::default(),
        }
    }

    pub fn with_revision(quality: Quality, revision: Revision) -> Self {
        Self { quality, revision }
    }
}

impl fmt::Display for QualityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quality, self.revision)
    }
}
