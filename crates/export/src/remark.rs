//! Comment fan-out into the `remark` relation
//!
//! All comments of one node share a single remark group (`commid`). Groups
//! are numbered from a counter shared by the whole export run, bumped once
//! per node that owns at least one comment. Nodes without comments encode
//! `-1` as their `commid`.

use crate::format::flatten_line_breaks;
use crate::node::CatalogNode;
use crate::rows::RemarkRow;

/// `commid` of a node without comments
pub const NO_REMARK: i64 = -1;

/// Run-wide remark group counter
#[derive(Debug, Default)]
pub struct RemarkCounter {
    last: i64,
}

impl RemarkCounter {
    /// Counter that has not handed out any group yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next group id
    pub fn next_group(&mut self) -> i64 {
        self.last += 1;
        self.last
    }

    /// Last group id handed out, `0` if none
    pub fn last(&self) -> i64 {
        self.last
    }
}

/// Convert a node's comments into remark rows
///
/// Returns the node's group id together with one row per comment, numbered
/// `1..=k` in comment order. A node without comments yields `(-1, [])` and
/// leaves the counter untouched.
pub fn extract_remarks<N>(node: &N, counter: &mut RemarkCounter) -> (i64, Vec<RemarkRow>)
where
    N: CatalogNode + ?Sized,
{
    let comments = node.comments();
    if comments.is_empty() {
        return (NO_REMARK, Vec::new());
    }

    let commid = counter.next_group();
    let rows = comments
        .iter()
        .enumerate()
        .map(|(i, comment)| RemarkRow {
            commid,
            lineno: i as i64 + 1,
            remark: flatten_line_breaks(&comment.text).into_owned(),
        })
        .collect();
    (commid, rows)
}
