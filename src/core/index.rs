use crate::domain::model::{DormMap, IdentityKey};
use std::collections::HashSet;

/// Derived set of identity keys, one per currently-allocated student. Exists
/// purely as an O(1) membership check; never trusted independently of the
/// rosters it is rebuilt from.
#[derive(Debug, Clone, Default)]
pub struct DuplicateIndex {
    keys: HashSet<IdentityKey>,
}

impl DuplicateIndex {
    /// Full rebuild by walking every dormitory's roster. Used on load.
    pub fn rebuild(dorms: &DormMap) -> Self {
        let keys = dorms
            .values()
            .flat_map(|dorm| dorm.students.iter().map(|s| s.identity()))
            .collect();
        Self { keys }
    }

    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.keys.contains(key)
    }

    pub fn insert(&mut self, key: IdentityKey) {
        self.keys.insert(key);
    }

    pub fn remove(&mut self, key: &IdentityKey) {
        self.keys.remove(key);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{default_dorms, Gender, Student};

    fn student(roll: &str, year: &str, gender: Gender, dorm: &str) -> Student {
        Student {
            name: format!("Student {}", roll),
            roll: roll.to_string(),
            course: "CS".to_string(),
            year: year.to_string(),
            gender,
            dorm: dorm.to_string(),
        }
    }

    #[test]
    fn test_rebuild_covers_every_roster() {
        let mut dorms = default_dorms();
        dorms.get_mut("A").unwrap().students.push(student("1", "1", Gender::Male, "A"));
        dorms.get_mut("A").unwrap().students.push(student("2", "1", Gender::Male, "A"));
        dorms.get_mut("B").unwrap().students.push(student("1", "1", Gender::Female, "B"));

        let index = DuplicateIndex::rebuild(&dorms);

        assert_eq!(index.len(), 3);
        assert!(index.contains(&IdentityKey::new("1", "1", Gender::Male)));
        assert!(index.contains(&IdentityKey::new("1", "1", Gender::Female)));
        assert!(!index.contains(&IdentityKey::new("3", "1", Gender::Male)));
    }

    #[test]
    fn test_incremental_insert_and_remove() {
        let mut index = DuplicateIndex::default();
        let key = IdentityKey::new("101", "1", Gender::Female);

        index.insert(key.clone());
        assert!(index.contains(&key));

        index.remove(&key);
        assert!(!index.contains(&key));
        assert!(index.is_empty());
    }
}
