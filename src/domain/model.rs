use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Dormitory map keyed by dormitory identifier. BTreeMap keeps the display
/// order stable across save/load cycles.
pub type DormMap = BTreeMap<String, Dormitory>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Compound uniqueness discriminant for an allocation. Roll numbers alone may
/// recur across years or genders, so all three fields participate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityKey {
    pub roll: String,
    pub year: String,
    pub gender: Gender,
}

impl IdentityKey {
    pub fn new(roll: impl Into<String>, year: impl Into<String>, gender: Gender) -> Self {
        Self {
            roll: roll.into(),
            year: year.into(),
            gender,
        }
    }
}

/// A student as recorded inside a dormitory roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub roll: String,
    pub course: String,
    pub year: String,
    pub gender: Gender,
    pub dorm: String,
}

impl Student {
    pub fn identity(&self) -> IdentityKey {
        IdentityKey::new(self.roll.clone(), self.year.clone(), self.gender)
    }
}

/// An allocation request before any checks have run. Field values come in
/// untrimmed; the store validates completeness itself.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub roll: String,
    pub course: String,
    pub year: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dormitory {
    pub name: String,
    pub capacity: usize,
    pub gender: Gender,
    pub students: Vec<Student>,
}

impl Dormitory {
    pub fn new(name: impl Into<String>, capacity: usize, gender: Gender) -> Self {
        Self {
            name: name.into(),
            capacity,
            gender,
            students: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.students.len() >= self.capacity
    }
}

/// Built-in dormitory set used when no persisted state and no dormitory
/// configuration file exist.
pub fn default_dorms() -> DormMap {
    let mut dorms = BTreeMap::new();
    dorms.insert("A".to_string(), Dormitory::new("Hostel A", 50, Gender::Male));
    dorms.insert("B".to_string(), Dormitory::new("Hostel B", 40, Gender::Female));
    dorms.insert("C".to_string(), Dormitory::new("Hostel C", 50, Gender::Male));
    dorms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_key_uses_all_three_fields() {
        let a = IdentityKey::new("101", "1", Gender::Female);
        let b = IdentityKey::new("101", "2", Gender::Female);
        let c = IdentityKey::new("101", "1", Gender::Male);

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, IdentityKey::new("101", "1", Gender::Female));
    }

    #[test]
    fn test_default_dorms_configuration() {
        let dorms = default_dorms();

        assert_eq!(dorms.len(), 3);
        assert_eq!(dorms["A"].capacity, 50);
        assert_eq!(dorms["A"].gender, Gender::Male);
        assert_eq!(dorms["B"].capacity, 40);
        assert_eq!(dorms["B"].gender, Gender::Female);
        assert_eq!(dorms["C"].capacity, 50);
        assert!(dorms.values().all(|d| d.students.is_empty()));
    }
}
