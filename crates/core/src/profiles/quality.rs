use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{CustomFormat, ProfileError, ProfileFormatItem};
use crate::quality::Quality;

/// One entry of a profile: either a single quality or a named group of qualities.
///
/// Sizes are in MB per minute of runtime; `None` means no limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityProfileItem {
    /// Group id (1000 and up). Zero for single-quality items.
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quality: Option<Quality>,
    #[serde(default)]
    pub items: Vec<QualityProfileItem>,
    #[serde(default)]
    pub allowed: bool,
    #[serde(default)]
    pub min_size: Option<f64>,
    #[serde(default)]
    pub max_size: Option<f64>,
}

impl QualityProfileItem {
    pub fn single(quality: Quality, allowed: bool) -> Self {
        Self {
            id: 0,
            name: None,
            quality: Some(quality),
            items: Vec::new(),
            allowed,
            min_size: None,
            max_size: None,
        }
    }

    pub fn group(id: i32, name: &str, items: Vec<QualityProfileItem>, allowed: bool) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            quality: None,
            items,
            allowed,
            min_size: None,
            max_size: None,
        }
    }

    pub fn with_sizes(mut self, min_size: Option<f64>, max_size: Option<f64>) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn is_group(&self) -> bool {
        self.quality.is_none()
    }

    /// Qualities covered by this item, in group order.
    pub fn qualities(&self) -> Vec<Quality> {
        match self.quality {
            Some(quality) => vec![quality],
            None => self.items.iter().filter_map(|i| i.quality).collect(),
        }
    }
}

/// Position of a quality inside a profile. Grouped qualities share `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityIndex {
    pub index: usize,
    pub group_index: Option<usize>,
}

/// Ordered quality preferences for a series, worst first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityProfile {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub upgrade_allowed: bool,
    /// Quality id, or group id when the cutoff is a group.
    pub cutoff: i32,
    pub items: Vec<QualityProfileItem>,
    #[serde(default)]
    pub format_items: Vec<ProfileFormatItem>,
    #[serde(default)]
    pub min_format_score: i32,
    #[serde(default)]
    pub cutoff_format_score: i32,
    #[serde(default)]
    pub min_upgrade_format_score: i32,
}

impl QualityProfile {
    pub fn new(name: &str, cutoff: Quality, items: Vec<QualityProfileItem>) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            upgrade_allowed: false,
            cutoff: cutoff.id(),
            items,
            format_items: Vec::new(),
            min_format_score: 0,
            cutoff_format_score: 0,
            min_upgrade_format_score: 0,
        }
    }

    pub fn index_of(&self, quality: Quality) -> Option<QualityIndex> {
        for (index, item) in self.items.iter().enumerate() {
            if item.quality == Some(quality) {
                return Some(QualityIndex {
                    index,
                    group_index: None,
                });
            }
            if let Some(group_index) = item.items.iter().position(|i| i.quality == Some(quality)) {
                return Some(QualityIndex {
                    index,
                    group_index: Some(group_index),
                });
            }
        }
        None
    }

    /// Weight of a quality in this profile. Qualities missing from the profile rank lowest.
    pub fn rank(&self, quality: Quality) -> i64 {
        self.index_of(quality)
            .map(|i| i.index as i64)
            .unwrap_or(-1)
    }

    /// Compare two qualities by profile weight; grouped qualities compare equal.
    pub fn compare(&self, left: Quality, right: Quality) -> Ordering {
        self.rank(left).cmp(&self.rank(right))
    }

    /// Rank of the cutoff item. A cutoff that no longer exists falls back to `Unknown`.
    pub fn cutoff_rank(&self) -> i64 {
        self.rank_of_id(self.cutoff).unwrap_or_else(|| {
            tracing::warn!(
                profile = %self.name,
                cutoff = self.cutoff,
                "cutoff not found in profile, falling back to Unknown"
            );
            self.rank(Quality::Unknown)
        })
    }

    fn rank_of_id(&self, id: i32) -> Option<i64> {
        self.items
            .iter()
            .position(|item| match item.quality {
                Some(quality) => quality.id() == id,
                None => item.id == id,
            })
            .map(|index| index as i64)
    }

    /// Display name of the cutoff item.
    pub fn cutoff_name(&self) -> String {
        let index = self.cutoff_rank();
        if index < 0 {
            return Quality::Unknown.name().to_string();
        }
        let item = &self.items[index as usize];
        match (&item.quality, &item.name) {
            (Some(quality), _) => quality.name().to_string(),
            (None, Some(name)) => name.clone(),
            (None, None) => Quality::Unknown.name().to_string(),
        }
    }

    pub fn is_allowed(&self, quality: Quality) -> bool {
        self.index_of(quality)
            .map(|i| self.items[i.index].allowed)
            .unwrap_or(false)
    }

    pub fn first_allowed_quality(&self) -> Option<Quality> {
        self.items
            .iter()
            .find(|item| item.allowed)
            .and_then(|item| item.qualities().first().copied())
    }

    /// Best quality this profile will accept. For a group, its last member.
    pub fn last_allowed_quality(&self) -> Option<Quality> {
        self.items
            .iter()
            .rev()
            .find(|item| item.allowed)
            .and_then(|item| item.qualities().last().copied())
    }

    /// Leaf item for a quality, holding its size limits.
    pub fn item_for(&self, quality: Quality) -> Option<&QualityProfileItem> {
        let index = self.index_of(quality)?;
        let item = &self.items[index.index];
        match index.group_index {
            Some(group_index) => item.items.get(group_index),
            None => Some(item),
        }
    }

    pub fn calculate_custom_format_score(&self, formats: &[CustomFormat]) -> i32 {
        self.format_items
            .iter()
            .filter(|item| formats.iter().any(|f| f.id == item.format_id))
            .map(|item| item.score)
            .sum()
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.items.is_empty() {
            return Err(ProfileError::Empty(self.name.clone()));
        }

        let mut seen = Vec::new();
        for quality in self.items.iter().flat_map(|item| item.qualities()) {
            if seen.contains(&quality) {
                return Err(ProfileError::DuplicateQuality {
                    profile: self.name.clone(),
                    quality,
                });
            }
            seen.push(quality);
        }

        if !self.items.iter().any(|item| item.allowed) {
            return Err(ProfileError::NothingAllowed(self.name.clone()));
        }

        match self.rank_of_id(self.cutoff) {
            None => Err(ProfileError::CutoffNotFound {
                profile: self.name.clone(),
                cutoff: self.cutoff,
            }),
            Some(index) if !self.items[index as usize].allowed => {
                Err(ProfileError::CutoffNotAllowed {
                    profile: self.name.clone(),
                    cutoff: self.cutoff,
                })
            }
            Some(_) => Ok(()),
        }
    }
}
