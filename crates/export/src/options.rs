//! Export configuration
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! # Pin the load date stamped on every row (RFC 3339, quoted).
//! # Without it the catalog creation time is used, then the current time.
//! # load_time = "2013-06-01T12:30:45Z"
//!
//! # Create missing parent directories of the basename.
//! create_parent_dirs = false
//! ```

use crate::error::{CssError, CssResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Format of the `lddate` column
pub const LDDATE_FORMAT: &str = "%Y-%m-%dT%H%M%S";

/// Options for one export run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Load date override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_time: Option<DateTime<Utc>>,

    /// Create missing parent directories of the basename
    pub create_parent_dirs: bool,
}

impl ExportOptions {
    /// Pin the load date
    pub fn with_load_time(mut self, time: DateTime<Utc>) -> Self {
        self.load_time = Some(time);
        self
    }

    /// Allow the writer to create missing parent directories
    pub fn with_create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }

    /// Parse options from TOML text
    pub fn from_toml_str(text: &str) -> CssResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> CssResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CssError::invalid_config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Default options file content with comments
    pub fn default_toml() -> &'static str {
        r#"# CSS export configuration
#
# Pin the load date stamped on every row (RFC 3339, quoted).
# Without it the catalog creation time is used, then the current time.
# load_time = "2013-06-01T12:30:45Z"

# Create missing parent directories of the basename.
create_parent_dirs = false
"#
    }

    /// Load date for a run over a catalog created at `catalog_time`
    ///
    /// Precedence: explicit override, then catalog creation time, then now.
    pub fn resolve_load_time(&self, catalog_time: Option<DateTime<Utc>>) -> DateTime<Utc> {
        self.load_time.or(catalog_time).unwrap_or_else(Utc::now)
    }
}

/// Render a load date as `YYYY-MM-DDTHHMMSS`
pub fn format_lddate(time: &DateTime<Utc>) -> String {
    time.format(LDDATE_FORMAT).to_string()
}
