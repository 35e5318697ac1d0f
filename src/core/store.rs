use crate::core::index::DuplicateIndex;
use crate::domain::model::{Candidate, DormMap, Dormitory, IdentityKey, Student};
use crate::utils::error::{AllocError, Result};
use crate::utils::validation::require_non_empty;

/// Owns all dormitory and student data. Every mutation goes through
/// `add_student`/`remove_student`, which keep the duplicate index in lockstep
/// with the rosters; no other code path touches either.
#[derive(Debug, Clone)]
pub struct AllocationStore {
    dorms: DormMap,
    index: DuplicateIndex,
}

impl AllocationStore {
    /// Builds a store from a dormitory map, rebuilding the duplicate index
    /// from scratch. Used both for persisted state and for defaults.
    pub fn from_dorms(dorms: DormMap) -> Self {
        let index = DuplicateIndex::rebuild(&dorms);
        Self { dorms, index }
    }

    pub fn dorms(&self) -> &DormMap {
        &self.dorms
    }

    pub fn dorm(&self, dorm_id: &str) -> Option<&Dormitory> {
        self.dorms.get(dorm_id)
    }

    pub fn student_count(&self) -> usize {
        self.dorms.values().map(|d| d.students.len()).sum()
    }

    pub fn is_allocated(&self, key: &IdentityKey) -> bool {
        self.index.contains(key)
    }

    /// Runs the allocation checks in order; the first failing check wins and
    /// nothing is mutated until all of them pass.
    pub fn add_student(&mut self, candidate: Candidate, dorm_id: &str) -> Result<&Student> {
        require_non_empty("name", &candidate.name)?;
        require_non_empty("roll", &candidate.roll)?;
        require_non_empty("course", &candidate.course)?;
        require_non_empty("year", &candidate.year)?;

        let key = IdentityKey::new(
            candidate.roll.trim(),
            candidate.year.trim(),
            candidate.gender,
        );
        if self.index.contains(&key) {
            return Err(AllocError::DuplicateAllocation {
                roll: key.roll,
                year: key.year,
                gender: key.gender,
            });
        }

        let dorm = self
            .dorms
            .get_mut(dorm_id)
            .ok_or_else(|| AllocError::UnknownDormitory {
                dorm: dorm_id.to_string(),
            })?;

        if dorm.gender != candidate.gender {
            return Err(AllocError::GenderMismatch {
                dorm: dorm.name.clone(),
                required: dorm.gender,
            });
        }

        if dorm.is_full() {
            return Err(AllocError::DormitoryFull {
                dorm: dorm.name.clone(),
                capacity: dorm.capacity,
            });
        }

        let student = Student {
            name: candidate.name.trim().to_string(),
            roll: key.roll.clone(),
            course: candidate.course.trim().to_string(),
            year: key.year.clone(),
            gender: candidate.gender,
            dorm: dorm_id.to_string(),
        };

        tracing::debug!(
            "Allocating roll {} to {} ({} students before)",
            student.roll,
            dorm_id,
            dorm.students.len()
        );

        dorm.students.push(student);
        self.index.insert(key);

        Ok(dorm.students.last().expect("roster cannot be empty after push"))
    }

    /// Removes the student matching the compound key from the given
    /// dormitory's roster, preserving the order of the remaining students.
    pub fn remove_student(&mut self, key: &IdentityKey, dorm_id: &str) -> Result<Student> {
        let dorm = self
            .dorms
            .get_mut(dorm_id)
            .ok_or_else(|| AllocError::UnknownDormitory {
                dorm: dorm_id.to_string(),
            })?;

        let position = dorm
            .students
            .iter()
            .position(|s| s.identity() == *key)
            .ok_or_else(|| AllocError::NotFound {
                roll: key.roll.clone(),
                dorm: dorm.name.clone(),
            })?;

        self.index.remove(key);
        let removed = dorm.students.remove(position);

        tracing::debug!(
            "Removed roll {} from {} ({} students left)",
            removed.roll,
            dorm_id,
            dorm.students.len()
        );

        Ok(removed)
    }

    /// Index cardinality must always equal the total roster population.
    #[cfg(test)]
    fn index_in_lockstep(&self) -> bool {
        self.index.len() == self.student_count()
    }
}
