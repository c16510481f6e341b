//! Plant Entity
//!
//! One read-only care record from the catalog.

use serde::{Deserialize, Serialize};

/// Care guidance for a single plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    /// Short identifier, stable across runs
    pub id: String,
    /// Display name
    pub name: String,
    pub water: String,
    pub light: String,
    pub soil: String,
    pub companions: String,
    pub toxicity: String,
    pub tips: String,
    /// Suggested watering interval in days
    pub default_reminder_days: u32,
}

impl PlantRecord {
    /// Text fields paired with their names, in display order
    pub fn text_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("id", &self.id),
            ("name", &self.name),
            ("water", &self.water),
            ("light", &self.light),
            ("soil", &self.soil),
            ("companions", &self.companions),
            ("toxicity", &self.toxicity),
            ("tips", &self.tips),
        ]
    }

    /// Case-insensitive substring match against the display name
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fern() -> PlantRecord {
        PlantRecord {
            id: "fern".to_string(),
            name: "Boston Fern".to_string(),
            water: "Keep moist".to_string(),
            light: "Indirect".to_string(),
            soil: "Peat mix".to_string(),
            companions: "Calathea".to_string(),
            toxicity: "Non-toxic".to_string(),
            tips: "Mist often".to_string(),
            default_reminder_days: 3,
        }
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let plant = fern();
        assert!(plant.name_matches("boston"));
        assert!(plant.name_matches("n f"));
        assert!(!plant.name_matches("ivy"));
    }

    #[test]
    fn test_deserialize_camel_case_interval() {
        let json = r#"{"id":"fern","name":"Boston Fern","water":"Keep moist","light":"Indirect",
            "soil":"Peat mix","companions":"Calathea","toxicity":"Non-toxic","tips":"Mist often",
            "defaultReminderDays":3}"#;
        let plant: PlantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(plant, fern());
    }
}
