use crate::core::store::AllocationStore;
use crate::domain::model::{Candidate, DormMap, IdentityKey, Student};
use crate::domain::ports::{RosterView, StateStore};
use crate::utils::error::Result;

/// Orchestrates the submit/remove flow: every successful mutation updates the
/// roster view and rewrites the persisted blob before control returns.
/// Validation failures leave store, view, and blob untouched.
pub struct AllocationDesk<S: StateStore, V: RosterView> {
    store: AllocationStore,
    state: S,
    view: V,
}

impl<S: StateStore, V: RosterView> AllocationDesk<S, V> {
    /// Restores the store from persisted state, or falls back to the given
    /// default dormitory set when nothing has been persisted yet. A malformed
    /// blob is surfaced as an error rather than silently discarded.
    pub fn open(state: S, view: V, defaults: DormMap) -> Result<Self> {
        let dorms = match state.load()? {
            Some(dorms) => {
                tracing::info!("Restored persisted allocation state");
                dorms
            }
            None => {
                tracing::info!("No persisted state, starting from default dormitories");
                defaults
            }
        };

        let store = AllocationStore::from_dorms(dorms);
        let mut desk = Self { store, state, view };
        desk.view.render_all(desk.store.dorms());
        tracing::debug!("Rendered {} allocated students", desk.store.student_count());
        Ok(desk)
    }

    pub fn store(&self) -> &AllocationStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn submit(&mut self, candidate: Candidate, dorm_id: &str) -> Result<Student> {
        let student = self.store.add_student(candidate, dorm_id)?.clone();
        let dorm_name = self
            .store
            .dorm(dorm_id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| dorm_id.to_string());

        self.view.append_one(&student, &dorm_name);
        self.state.save(self.store.dorms())?;
        Ok(student)
    }

    pub fn withdraw(&mut self, key: &IdentityKey, dorm_id: &str) -> Result<Student> {
        let removed = self.store.remove_student(key, dorm_id)?;
        self.view.remove_row(key, dorm_id);
        self.state.save(self.store.dorms())?;
        Ok(removed)
    }

    /// No-op when the search text is empty, so hosting surfaces without a
    /// search box work unchanged.
    pub fn search(&mut self, text: &str) {
        self.view.filter(text);
    }
}
