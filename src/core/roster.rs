use crate::domain::model::{DormMap, IdentityKey, Student};
use crate::domain::ports::RosterView;

/// One rendered roster line. The identity key and dormitory id travel with
/// the row so removal never has to parse the display text back apart.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub key: IdentityKey,
    pub dorm_id: String,
    pub text: String,
    pub visible: bool,
}

/// Plain-text roster listing. Rows are appended in allocation order and
/// survive filtering; a hidden row keeps its place and its data.
#[derive(Debug, Default)]
pub struct TextRoster {
    rows: Vec<RosterRow>,
}

impl TextRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &RosterRow> {
        self.rows.iter().filter(|row| row.visible)
    }

    fn render_row(student: &Student, dorm_name: &str) -> String {
        format!(
            "{} (Roll: {}) | {} - Year {} ({}) | Allocated to: {}",
            student.name, student.roll, student.course, student.year, student.gender, dorm_name
        )
    }
}

impl RosterView for TextRoster {
    fn render_all(&mut self, dorms: &DormMap) {
        self.rows.clear();
        for dorm in dorms.values() {
            for student in &dorm.students {
                self.rows.push(RosterRow {
                    key: student.identity(),
                    dorm_id: student.dorm.clone(),
                    text: Self::render_row(student, &dorm.name),
                    visible: true,
                });
            }
        }
    }

    fn append_one(&mut self, student: &Student, dorm_name: &str) {
        self.rows.push(RosterRow {
            key: student.identity(),
            dorm_id: student.dorm.clone(),
            text: Self::render_row(student, dorm_name),
            visible: true,
        });
    }

    fn remove_row(&mut self, key: &IdentityKey, dorm_id: &str) {
        self.rows
            .retain(|row| !(row.key == *key && row.dorm_id == dorm_id));
    }

    fn filter(&mut self, search: &str) {
        let term = search.to_lowercase();
        for row in &mut self.rows {
            row.visible = term.is_empty() || row.text.to_lowercase().contains(&term);
        }
    }
}
