//! In-memory relational database produced by one export run
//!
//! Rows are pre-rendered fixed-width strings, grouped by relation and kept
//! in the order the traversal appended them. Nothing here touches disk; see
//! `writer` for emission.

use crate::schema::Relation;
use std::collections::BTreeMap;

/// Rows of every relation produced by one export run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssDatabase {
    lddate: String,
    relations: BTreeMap<Relation, Vec<String>>,
}

impl CssDatabase {
    /// Empty database stamped with `lddate`
    pub fn new(lddate: impl Into<String>) -> Self {
        Self {
            lddate: lddate.into(),
            relations: BTreeMap::new(),
        }
    }

    /// Load date stamped on every row
    pub fn lddate(&self) -> &str {
        &self.lddate
    }

    /// Append a rendered row to `relation`
    pub fn push(&mut self, relation: Relation, row: String) {
        self.relations.entry(relation).or_default().push(row);
    }

    /// Rows of `relation`, in insertion order
    pub fn rows(&self, relation: Relation) -> &[String] {
        self.relations
            .get(&relation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of rows in `relation`
    pub fn row_count(&self, relation: Relation) -> usize {
        self.rows(relation).len()
    }

    /// Total number of rows across all relations
    pub fn total_rows(&self) -> usize {
        self.relations.values().map(Vec::len).sum()
    }

    /// Relations holding at least one row, in write order
    pub fn populated(&self) -> impl Iterator<Item = Relation> + '_ {
        Relation::ALL
            .into_iter()
            .filter(move |r| self.row_count(*r) > 0)
    }

    /// File body of `relation`: rows joined by `\n` plus a trailing `\n`
    ///
    /// Returns `None` for relations without rows; those produce no file.
    pub fn render(&self, relation: Relation) -> Option<String> {
        let rows = self.rows(relation);
        if rows.is_empty() {
            return None;
        }
        let mut body = rows.join("\n");
        body.push('\n');
        Some(body)
    }
}
