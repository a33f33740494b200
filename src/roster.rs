//! The roster: the ordered collection of all currently known employees.
//!
//! Insertion order is preserved except when the roster is explicitly
//! sorted. The roster is the sole owner of its records; nothing else keeps
//! a reference past removal.

use std::collections::HashMap;

use crate::models::EmployeeRecord;

/// Ordered collection of [`EmployeeRecord`]s.
///
/// Duplicate ids are permitted: `add` never checks, and [`Roster::remove`]
/// deletes every match.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<EmployeeRecord>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the roster.
    pub fn add(&mut self, record: EmployeeRecord) {
        self.records.push(record);
    }

    /// Removes every record whose id equals `id`, preserving the relative
    /// order of the rest. Returns the number of records removed; zero is a
    /// miss, not an error.
    pub fn remove(&mut self, id: u32) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        before - self.records.len()
    }

    /// Finds the first record whose name matches `query` case-insensitively
    /// or whose id's decimal text form equals `query`.
    ///
    /// Scans in roster order and stops at the first match; later matches are
    /// not reported.
    pub fn find_by_name_or_id(&self, query: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|record| {
            record.name().eq_ignore_ascii_case(query) || record.id().to_string() == query
        })
    }

    /// Groups records by department.
    ///
    /// The iteration order of departments is unspecified; within a
    /// department, records keep their roster order.
    pub fn group_by_department(&self) -> HashMap<&str, Vec<&EmployeeRecord>> {
        let mut groups: HashMap<&str, Vec<&EmployeeRecord>> = HashMap::new();
        for record in &self.records {
            groups.entry(record.department()).or_default().push(record);
        }
        groups
    }

    /// Reorders the roster by computed salary, highest first.
    ///
    /// The sort is stable: records with equal salaries keep their prior
    /// relative order.
    pub fn sort_by_salary_descending(&mut self) {
        self.records.sort_by(|a, b| b.salary().cmp(&a.salary()));
    }

    /// True when the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterates records in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.records.iter()
    }

    /// Iterates records mutably in roster order. Used by the promotion pass.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EmployeeRecord> {
        self.records.iter_mut()
    }
}
