use crate::domain::model::{DormMap, IdentityKey, Student};
use crate::utils::error::Result;

/// Key-value persistence for the whole allocation state, one blob under a
/// fixed key. Every successful mutation rewrites the blob in full.
pub trait StateStore {
    /// Returns `None` when no state has been persisted yet.
    fn load(&self) -> Result<Option<DormMap>>;
    fn save(&self, dorms: &DormMap) -> Result<()>;
}

/// Rendered roster listing kept in sync with the store. Rows carry their
/// identity key and dormitory id so they can be removed without rescanning.
pub trait RosterView {
    fn render_all(&mut self, dorms: &DormMap);
    fn append_one(&mut self, student: &Student, dorm_name: &str);
    fn remove_row(&mut self, key: &IdentityKey, dorm_id: &str);
    /// Case-insensitive substring filter over each row's visible text.
    /// Hidden rows are retained, not destroyed; empty text shows all rows.
    fn filter(&mut self, search: &str);
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn verbose(&self) -> bool;
}
