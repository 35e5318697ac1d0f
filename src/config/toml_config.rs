use crate::domain::model::{DormMap, Dormitory, Gender};
use crate::utils::error::{AllocError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Dormitory set definition loaded from `dorms.toml`. Overrides the built-in
/// default configuration; persisted state still wins over both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DormsConfig {
    pub dorm: Vec<DormEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DormEntry {
    pub id: String,
    pub name: String,
    pub capacity: usize,
    pub gender: Gender,
}

impl DormsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AllocError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AllocError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.dorm.is_empty() {
            return Err(AllocError::ConfigError {
                field: "dorm".to_string(),
                message: "At least one dormitory must be defined".to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.dorm {
            validate_non_empty_string("dorm.id", &entry.id)?;
            validate_non_empty_string("dorm.name", &entry.name)?;
            validate_positive_number("dorm.capacity", entry.capacity, 1)?;

            if !seen.insert(entry.id.as_str()) {
                return Err(AllocError::ConfigError {
                    field: "dorm.id".to_string(),
                    message: format!("Duplicate dormitory id: {}", entry.id),
                });
            }
        }

        Ok(())
    }

    /// Turns the validated entries into an empty-roster dormitory map.
    pub fn into_dorms(self) -> DormMap {
        let mut dorms = BTreeMap::new();
        for entry in self.dorm {
            dorms.insert(
                entry.id,
                Dormitory::new(entry.name, entry.capacity, entry.gender),
            );
        }
        dorms
    }
}

impl Validate for DormsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
