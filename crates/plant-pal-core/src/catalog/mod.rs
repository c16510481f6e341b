//! Plant Catalog
//!
//! Immutable plant records and eco tips, supplied once at startup.
//! All queries are linear scans over a small list.

mod builtin;

use std::collections::HashSet;

use chrono::{DateTime, TimeZone};
use serde::Deserialize;

use crate::domain::{CatalogError, CatalogResult, PlantRecord};

/// Milliseconds per day used for tip rotation
pub const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Read-only plant and tip dataset
#[derive(Debug, Clone)]
pub struct Catalog {
    plants: Vec<PlantRecord>,
    tips: Vec<String>,
}

/// JSON layout accepted by [`Catalog::from_json`]
#[derive(Deserialize)]
struct CatalogData {
    plants: Vec<PlantRecord>,
    tips: Vec<String>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness, non-empty text and intervals.
    pub fn new(plants: Vec<PlantRecord>, tips: Vec<String>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for plant in &plants {
            if !seen.insert(plant.id.as_str()) {
                return Err(CatalogError::DuplicateId(plant.id.clone()));
            }
            if let Some((field, _)) = plant.text_fields().into_iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(CatalogError::EmptyField { id: plant.id.clone(), field });
            }
            if plant.default_reminder_days == 0 {
                return Err(CatalogError::InvalidInterval(plant.id.clone()));
            }
        }
        if tips.is_empty() {
            return Err(CatalogError::NoTips);
        }
        log::debug!("catalog loaded: {} plants, {} tips", plants.len(), tips.len());
        Ok(Self { plants, tips })
    }

    /// Parse `{ "plants": [...], "tips": [...] }` and validate it
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let data: CatalogData =
            serde_json::from_str(raw).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::new(data.plants, data.tips)
    }

    /// The dataset shipped with the app
    pub fn builtin() -> Self {
        Self {
            plants: builtin::plants(),
            tips: builtin::tips(),
        }
    }

    /// Every plant in declaration order
    pub fn all(&self) -> &[PlantRecord] {
        &self.plants
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    /// Exact match on id
    pub fn find(&self, id: &str) -> Option<&PlantRecord> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// Plants whose name contains `query`, ignoring case and surrounding
    /// whitespace. An empty query or no match yields the whole catalog.
    pub fn search(&self, query: &str) -> Vec<&PlantRecord> {
        let needle = query.trim().to_lowercase();
        let matches: Vec<&PlantRecord> = self
            .plants
            .iter()
            .filter(|p| p.name_matches(&needle))
            .collect();
        if matches.is_empty() {
            self.plants.iter().collect()
        } else {
            matches
        }
    }

    /// Tip for the UTC day containing `at`: `floor(epoch_ms / ONE_DAY_MS) mod tip_count`
    pub fn tip_of_day<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> &str {
        let day = at.timestamp_millis().div_euclid(ONE_DAY_MS);
        // tips is non-empty by construction
        let index = day.rem_euclid(self.tips.len() as i64) as usize;
        &self.tips[index]
    }
}
