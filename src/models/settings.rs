use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-editable planning parameters, persisted as a key/value map in the
/// external store. Missing or garbled entries fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSettings {
    pub currency: String,
    pub locale: String,
    pub annual_return_rate: f64,
    pub current_age: u32,
    pub contribution_cutoff_age: u32,
    pub projection_start_age: u32,
    pub projection_end_age: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            locale: "en-US".into(),
            annual_return_rate: 0.0654,
            current_age: 30,
            contribution_cutoff_age: 65,
            projection_start_age: 30,
            projection_end_age: 90,
        }
    }
}

impl PlannerSettings {
    pub fn from_map(map: HashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            currency: map.get("currency").cloned().unwrap_or(defaults.currency),
            locale: map.get("locale").cloned().unwrap_or(defaults.locale),
            annual_return_rate: map
                .get("annual_return_rate")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.annual_return_rate),
            current_age: map
                .get("current_age")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.current_age),
            contribution_cutoff_age: map
                .get("contribution_cutoff_age")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.contribution_cutoff_age),
            projection_start_age: map
                .get("projection_start_age")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.projection_start_age),
            projection_end_age: map
                .get("projection_end_age")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.projection_end_age),
        }
    }

    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("currency".into(), self.currency.clone());
        map.insert("locale".into(), self.locale.clone());
        map.insert(
            "annual_return_rate".into(),
            self.annual_return_rate.to_string(),
        );
        map.insert("current_age".into(), self.current_age.to_string());
        map.insert(
            "contribution_cutoff_age".into(),
            self.contribution_cutoff_age.to_string(),
        );
        map.insert(
            "projection_start_age".into(),
            self.projection_start_age.to_string(),
        );
        map.insert(
            "projection_end_age".into(),
            self.projection_end_age.to_string(),
        );
        map
    }
}
