//! Freelancer entity

use super::Qualification;

/// A freelancer row, with its qualifications resolved on single-entity fetch.
///
/// `qualifications` is the many-to-many side backed by the
/// `freelancer_qualification` join table. List queries leave it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Freelancer {
    pub id: Option<i64>,
    pub name: String,
    pub second_name: String,
    pub email: String,
    pub qualifications: Vec<Qualification>,
}

impl Freelancer {
    /// Ids of the linked qualifications, deduplicated in first-seen order.
    ///
    /// Qualifications without an id cannot be linked and are skipped.
    pub fn qualification_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = Vec::with_capacity(self.qualifications.len());
        for id in self.qualifications.iter().filter_map(|q| q.id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}
