use serde::{Deserialize, Serialize};

use super::Quality;

/// Size limits and ordering weight for one quality, in MB per minute of runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityDefinition {
    pub quality: Quality,
    pub title: String,
    /// Qualities sharing a weight are grouped in default profiles.
    #[serde(default)]
    pub group_name: Option<String>,
    pub weight: u32,
    #[serde(default)]
    pub min_size: Option<f64>,
    #[serde(default)]
    pub max_size: Option<f64>,
    #[serde(default)]
    pub preferred_size: Option<f64>,
}

impl QualityDefinition {
    fn new(quality: Quality, weight: u32, min_size: f64, max_size: Option<f64>) -> Self {
        Self {
            quality,
            title: quality.name().to_string(),
            group_name: None,
            weight,
            min_size: Some(min_size),
            max_size,
            preferred_size: Some(95.0),
        }
    }

    fn grouped(mut self, group_name: &str) -> Self {
        self.group_name = Some(group_name.to_string());
        self
    }
}

/// Built-in definitions, ordered from worst to best.
pub fn default_definitions() -> Vec<QualityDefinition> {
    vec![
        QualityDefinition::new(Quality::Unknown, 1, 0.0, Some(100.0)),
        QualityDefinition::new(Quality::SDTV, 2, 2.0, Some(100.0)),
        QualityDefinition::new(Quality::WEBRip480p, 3, 2.0, Some(100.0)).grouped("WEB 480p"),
        QualityDefinition::new(Quality::WEBDL480p, 3, 2.0, Some(100.0)).grouped("WEB 480p"),
        QualityDefinition::new(Quality::DVD, 4, 2.0, Some(100.0)),
        QualityDefinition::new(Quality::Bluray480p, 5, 2.0, Some(100.0)),
        QualityDefinition::new(Quality::Bluray576p, 6, 2.0, Some(100.0)),
        QualityDefinition::new(Quality::HDTV720p, 7, 3.0, Some(125.0)),
        QualityDefinition::new(Quality::HDTV1080p, 8, 4.0, Some(125.0)),
        QualityDefinition::new(Quality::RAWHD, 9, 4.0, None),
        QualityDefinition::new(Quality::WEBRip720p, 10, 3.0, Some(130.0)).grouped("WEB 720p"),
        QualityDefinition::new(Quality::WEBDL720p, 10, 3.0, Some(130.0)).grouped("WEB 720p"),
        QualityDefinition::new(Quality::Bluray720p, 11, 4.0, Some(130.0)),
        QualityDefinition::new(Quality::WEBRip1080p, 12, 4.0, Some(130.0)).grouped("WEB 1080p"),
        QualityDefinition::new(Quality::WEBDL1080p, 12, 4.0, Some(130.0)).grouped("WEB 1080p"),
        QualityDefinition::new(Quality::Bluray1080p, 13, 4.0, Some(155.0)),
        QualityDefinition::new(Quality::Bluray1080pRemux, 14, 35.0, None),
        QualityDefinition::new(Quality::HDTV2160p, 15, 35.0, Some(199.9)),
        QualityDefinition::new(Quality::WEBRip2160p, 16, 35.0, None).grouped("WEB 2160p"),
        QualityDefinition::new(Quality::WEBDL2160p, 16, 35.0, None).grouped("WEB 2160p"),
        QualityDefinition::new(Quality::Bluray2160p, 17, 35.0, None),
        QualityDefinition::new(Quality::Bluray2160pRemux, 18, 35.0, None),
    ]
}

/// Lookup of the configured definition for a quality.
pub trait QualityDefinitionService: Send + Sync {
    fn get(&self, quality: Quality) -> QualityDefinition;
}

/// In-memory definition table, seeded with the defaults.
#[derive(Debug, Clone)]
pub struct QualityDefinitionTable {
    definitions: Vec<QualityDefinition>,
}

impl QualityDefinitionTable {
    pub fn new() -> Self {
        Self {
            definitions: default_definitions(),
        }
    }

    /// Replace the definition for the same quality, keeping table order.
    pub fn with_definition(mut self, definition: QualityDefinition) -> Self {
        match self
            .definitions
            .iter_mut()
            .find(|d| d.quality == definition.quality)
        {
            Some(existing) => *existing = definition,
            None => self.definitions.push(definition),
        }
        self
    }

    pub fn all(&self) -> &[QualityDefinition] {
        &self.definitions
    }
}

impl Default for QualityDefinitionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityDefinitionService for QualityDefinitionTable {
    fn get(&self, quality: Quality) -> QualityDefinition {
        self.definitions
            .iter()
            .find(|d| d.quality == quality)
            .cloned()
            .unwrap_or_else(|| QualityDefinition::new(quality, 0, 0.0, None))
    }
}
