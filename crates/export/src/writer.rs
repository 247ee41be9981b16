//! Relation file emission
//!
//! A CSS database is a family of sibling files sharing one basename:
//!
//! ```text
//! quakes.arrival
//! quakes.assoc
//! quakes.event
//! quakes.origin
//! ...
//! ```
//!
//! Only relations holding at least one row get a file. Writes are not
//! transactional: if one file fails, files already written stay on disk.

use crate::database::CssDatabase;
use crate::error::{CssError, CssResult};
use crate::options::ExportOptions;
use crate::schema::Relation;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{is_separator, Path, PathBuf};
use tracing::debug;

/// One relation file written by an export
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenRelation {
    /// Relation stored in the file
    pub relation: Relation,
    /// Path of the file
    pub path: PathBuf,
    /// Number of rows written
    pub rows: usize,
}

/// Information returned after exporting a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ExportInfo {
    /// Basename shared by all files
    pub basename: PathBuf,
    /// Load date stamped on every row
    pub lddate: String,
    /// Files written, in write order
    pub files: Vec<WrittenRelation>,
}

impl ExportInfo {
    /// Total number of rows written
    pub fn total_rows(&self) -> usize {
        self.files.iter().map(|f| f.rows).sum()
    }

    /// Entry for `relation`, if a file was written for it
    pub fn file(&self, relation: Relation) -> Option<&WrittenRelation> {
        self.files.iter().find(|f| f.relation == relation)
    }
}

/// Path of the file holding `relation`: `<basename>.<suffix>`
pub fn relation_path(basename: &Path, relation: Relation) -> PathBuf {
    let mut name = OsString::from(basename.as_os_str());
    name.push(".");
    name.push(relation.suffix());
    PathBuf::from(name)
}

/// Writer for the relation files of a CSS database
pub struct RelationWriter {
    create_parent_dirs: bool,
}

impl RelationWriter {
    /// Create a writer with the given options
    pub fn new(options: &ExportOptions) -> Self {
        Self {
            create_parent_dirs: options.create_parent_dirs,
        }
    }

    /// Create a writer with default options
    pub fn with_defaults() -> Self {
        Self::new(&ExportOptions::default())
    }

    /// Check that `basename` can prefix a family of sibling files
    ///
    /// Rejects empty paths, paths without a final name component and paths
    /// whose parent is not a directory. A missing parent is accepted only
    /// when the writer may create it.
    pub fn validate_destination(&self, basename: &Path) -> CssResult<()> {
        let text = basename.as_os_str().to_string_lossy();
        if text.is_empty() {
            return Err(CssError::invalid_destination(basename, "empty path"));
        }
        if text.ends_with(is_separator) || basename.file_name().is_none() {
            return Err(CssError::invalid_destination(
                basename,
                "path does not end in a file name",
            ));
        }

        let parent = match basename.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Ok(()),
        };
        if parent.is_dir() {
            return Ok(());
        }
        if parent.exists() {
            return Err(CssError::invalid_destination(
                basename,
                format!("{} is not a directory", parent.display()),
            ));
        }
        if !self.create_parent_dirs {
            return Err(CssError::invalid_destination(
                basename,
                format!("directory {} does not exist", parent.display()),
            ));
        }
        Ok(())
    }

    /// Write every populated relation of `db` next to `basename`
    pub fn write(&self, db: &CssDatabase, basename: &Path) -> CssResult<ExportInfo> {
        self.validate_destination(basename)?;

        if self.create_parent_dirs {
            if let Some(parent) = basename.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)
                        .map_err(|e| CssError::write_failure(parent, e))?;
                }
            }
        }

        let mut files = Vec::new();
        for relation in db.populated() {
            let Some(body) = db.render(relation) else {
                continue;
            };
            let path = relation_path(basename, relation);
            write_file(&path, &body)?;

            let rows = db.row_count(relation);
            debug!(
                target: "seiscss::export",
                relation = %relation,
                rows,
                path = %path.display(),
                "Wrote relation"
            );
            files.push(WrittenRelation {
                relation,
                path,
                rows,
            });
        }

        Ok(ExportInfo {
            basename: basename.to_path_buf(),
            lddate: db.lddate().to_string(),
            files,
        })
    }
}

fn write_file(path: &Path, body: &str) -> CssResult<()> {
    let file = File::create(path).map_err(|e| CssError::write_failure(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(body.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| CssError::write_failure(path, e))
}
