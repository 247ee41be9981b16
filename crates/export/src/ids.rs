//! Synthetic identifier allocation
//!
//! CSS relations reference each other through small integers (`evid`,
//! `orid`, `arid`, ...). Each kind of node gets its own table mapping the
//! node's resource identifier to a dense 1-based integer, handed out in
//! first-encounter order. Looking up the same identifier again returns the
//! integer it already received.

use rustc_hash::FxHashMap;
use seiscss_core::ResourceId;

/// Kind of node an identifier is allocated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// `evid`
    Event,
    /// `orid`
    Origin,
    /// `arid`
    Arrival,
    /// `magid`
    Magnitude,
    /// `stassid`
    StationAssociation,
}

impl IdKind {
    /// Every kind
    pub const ALL: [IdKind; 5] = [
        IdKind::Event,
        IdKind::Origin,
        IdKind::Arrival,
        IdKind::Magnitude,
        IdKind::StationAssociation,
    ];

    fn index(self) -> usize {
        match self {
            IdKind::Event => 0,
            IdKind::Origin => 1,
            IdKind::Arrival => 2,
            IdKind::Magnitude => 3,
            IdKind::StationAssociation => 4,
        }
    }
}

/// Identifier tables for one export run
#[derive(Debug, Default)]
pub struct IdAllocator {
    tables: [FxHashMap<ResourceId, i64>; 5],
}

impl IdAllocator {
    /// Create empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Integer identifier of `id` within `kind`, allocating it on first sight
    pub fn allocate(&mut self, kind: IdKind, id: &ResourceId) -> i64 {
        let table = &mut self.tables[kind.index()];
        if let Some(&existing) = table.get(id) {
            return existing;
        }
        let next = table.len() as i64 + 1;
        table.insert(id.clone(), next);
        next
    }

    /// Integer already allocated for `id`, if any
    pub fn get(&self, kind: IdKind, id: &ResourceId) -> Option<i64> {
        self.tables[kind.index()].get(id).copied()
    }

    /// Number of identifiers allocated for `kind`
    pub fn len(&self, kind: IdKind) -> usize {
        self.tables[kind.index()].len()
    }

    /// Whether no identifier of any kind has been allocated
    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(|t| t.is_empty())
    }
}
