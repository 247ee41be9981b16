//! Integration tests for the CSS export.
//!
//! These tests run the full path from catalog to files on disk and check
//! the observable contract: which files exist, what their rows contain,
//! and how identifiers and remark groups line up across relations.
//!
//! Unit tests in crates/export/src/ cover cell rendering, schemas, the
//! allocator and the fan-out in isolation.

#[path = "../common/mod.rs"]
mod common;

mod errors;
mod identifiers;
mod layout;
mod magnitudes;
