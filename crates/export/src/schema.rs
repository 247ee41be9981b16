//! CSS3.0 relation schemas
//!
//! Each relation is a fixed, ordered list of columns. A row is rendered by
//! binding a value to every column (unbound columns take the schema default)
//! and joining the cells with single spaces.
//!
//! Widths and precisions follow the CSS3.0 flat-file conventions:
//!
//! ```text
//! event    evid evname prefor auth commid lddate
//! origin   lat lon depth time orid evid jdate nass ndef ndp grn srn etype
//!          depdp dtype mb mbid ms msid ml mlid algorithm auth commid lddate
//! remark   commid lineno remark lddate
//! ```

use crate::format::{render_cell, render_default, FieldValue};
use std::fmt;
use tracing::warn;

/// Width of the load-date column
pub const LDDATE_WIDTH: usize = 17;

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Signed integer
    Int,
    /// Floating point with a fixed number of decimals
    Float {
        /// Digits after the decimal point
        precision: usize,
    },
    /// Fixed-width text, left-justified
    Text,
}

/// One column of a relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// CSS3.0 attribute name
    pub name: &'static str,
    /// Declared width in characters
    pub width: usize,
    /// Type and formatting rule
    pub kind: ColumnKind,
}

impl Column {
    /// Integer column
    pub const fn int(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            kind: ColumnKind::Int,
        }
    }

    /// Float column with `precision` decimals
    pub const fn float(name: &'static str, width: usize, precision: usize) -> Self {
        Self {
            name,
            width,
            kind: ColumnKind::Float { precision },
        }
    }

    /// Left-justified text column
    pub const fn text(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            kind: ColumnKind::Text,
        }
    }
}

/// Output relations, in the order their files are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
    /// Phase arrivals
    Arrival,
    /// Arrival/origin associations
    Assoc,
    /// Events
    Event,
    /// Geographic region names (never populated)
    Gregion,
    /// Origin error ellipses
    Origerr,
    /// Origins
    Origin,
    /// Network magnitudes
    Netmag,
    /// Free-text remarks
    Remark,
    /// Seismic region names (never populated)
    Sregion,
    /// Station magnitudes
    Stamag,
    /// Station associations
    Stassoc,
}

impl Relation {
    /// Every relation, in write order
    pub const ALL: [Relation; 11] = [
        Relation::Arrival,
        Relation::Assoc,
        Relation::Event,
        Relation::Gregion,
        Relation::Origerr,
        Relation::Origin,
        Relation::Netmag,
        Relation::Remark,
        Relation::Sregion,
        Relation::Stamag,
        Relation::Stassoc,
    ];

    /// File suffix of the relation
    pub const fn suffix(self) -> &'static str {
        match self {
            Relation::Arrival => "arrival",
            Relation::Assoc => "assoc",
            Relation::Event => "event",
            Relation::Gregion => "gregion",
            Relation::Origerr => "origerr",
            Relation::Origin => "origin",
            Relation::Netmag => "netmag",
            Relation::Remark => "remark",
            Relation::Sregion => "sregion",
            Relation::Stamag => "stamag",
            Relation::Stassoc => "stassoc",
        }
    }

    /// Column schema of the relation
    pub fn schema(self) -> &'static Schema {
        match self {
            Relation::Arrival => &ARRIVAL,
            Relation::Assoc => &ASSOC,
            Relation::Event => &EVENT,
            Relation::Gregion => &GREGION,
            Relation::Origerr => &ORIGERR,
            Relation::Origin => &ORIGIN,
            Relation::Netmag => &NETMAG,
            Relation::Remark => &REMARK,
            Relation::Sregion => &SREGION,
            Relation::Stamag => &STAMAG,
            Relation::Stassoc => &STASSOC,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Ordered column list of one relation
#[derive(Debug)]
pub struct Schema {
    /// Columns in row order
    pub columns: &'static [Column],
}

impl Schema {
    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Width of a rendered row whose cells all fit their columns
    pub fn row_width(&self) -> usize {
        let cells: usize = self.columns.iter().map(|c| c.width).sum();
        cells + self.columns.len().saturating_sub(1)
    }

    /// Byte offsets `(start, end)` of each column in a rendered row
    ///
    /// Only meaningful for rows whose cells are ASCII and fit their columns.
    pub fn column_spans(&self) -> Vec<(usize, usize)> {
        let mut start = 0;
        self.columns
            .iter()
            .map(|c| {
                let span = (start, start + c.width);
                start += c.width + 1;
                span
            })
            .collect()
    }

    /// Render one row
    ///
    /// `bind` is asked for a value for every column by name; columns it
    /// returns `None` for take the schema default.
    pub fn encode<'a, F>(&self, mut bind: F) -> String
    where
        F: FnMut(&str) -> Option<FieldValue<'a>>,
    {
        let mut row = String::with_capacity(self.row_width());
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                row.push(' ');
            }
            let cell = match bind(column.name) {
                Some(value) => render_cell(column, &value),
                None => render_default(column),
            };
            if cell.chars().count() > column.width {
                warn!(
                    target: "seiscss::export",
                    column = column.name,
                    width = column.width,
                    cell = %cell,
                    "Value wider than its column"
                );
            }
            row.push_str(&cell);
        }
        row
    }
}

const LDDATE: Column = Column::text("lddate", LDDATE_WIDTH);
const COMMID: Column = Column::int("commid", 8);
const AUTH: Column = Column::text("auth", 15);

/// `event` relation
pub static EVENT: Schema = Schema {
    columns: &[
        Column::int("evid", 8),
        Column::text("evname", 15),
        Column::int("prefor", 8),
        AUTH,
        COMMID,
        LDDATE,
    ],
};

/// `origin` relation
pub static ORIGIN: Schema = Schema {
    columns: &[
        Column::float("lat", 9, 4),
        Column::float("lon", 9, 4),
        Column::float("depth", 9, 4),
        Column::float("time", 17, 5),
        Column::int("orid", 8),
        Column::int("evid", 8),
        Column::int("jdate", 8),
        Column::int("nass", 4),
        Column::int("ndef", 4),
        Column::int("ndp", 4),
        Column::int("grn", 8),
        Column::int("srn", 8),
        Column::text("etype", 7),
        Column::float("depdp", 9, 4),
        Column::text("dtype", 1),
        Column::float("mb", 7, 2),
        Column::int("mbid", 8),
        Column::float("ms", 7, 2),
        Column::int("msid", 8),
        Column::float("ml", 7, 2),
        Column::int("mlid", 8),
        Column::text("algorithm", 15),
        AUTH,
        COMMID,
        LDDATE,
    ],
};

/// `origerr` relation
pub static ORIGERR: Schema = Schema {
    columns: &[
        Column::int("orid", 8),
        Column::float("sxx", 15, 4),
        Column::float("syy", 15, 4),
        Column::float("szz", 15, 4),
        Column::float("stt", 15, 4),
        Column::float("sxy", 15, 4),
        Column::float("sxz", 15, 4),
        Column::float("syz", 15, 4),
        Column::float("stx", 15, 4),
        Column::float("sty", 15, 4),
        Column::float("stz", 15, 4),
        Column::float("sdobs", 9, 4),
        Column::float("smajax", 9, 4),
        Column::float("sminax", 9, 4),
        Column::float("strike", 6, 2),
        Column::float("sdepth", 9, 4),
        Column::float("stime", 8, 2),
        Column::float("conf", 5, 3),
        COMMID,
        LDDATE,
    ],
};

/// `arrival` relation
pub static ARRIVAL: Schema = Schema {
    columns: &[
        Column::text("sta", 6),
        Column::float("time", 17, 5),
        Column::int("arid", 8),
        Column::int("jdate", 8),
        Column::int("stassid", 8),
        Column::int("chanid", 8),
        Column::text("chan", 8),
        Column::text("iphase", 8),
        Column::text("stype", 1),
        Column::float("deltim", 6, 3),
        Column::float("azimuth", 7, 2),
        Column::float("delaz", 7, 2),
        Column::float("slow", 7, 2),
        Column::float("delslo", 7, 2),
        Column::float("ema", 7, 2),
        Column::float("rect", 7, 3),
        Column::float("amp", 10, 1),
        Column::float("per", 7, 2),
        Column::float("logat", 7, 2),
        Column::text("clip", 1),
        Column::text("fm", 2),
        Column::float("snr", 10, 2),
        Column::text("qual", 1),
        AUTH,
        COMMID,
        LDDATE,
    ],
};

/// `assoc` relation
pub static ASSOC: Schema = Schema {
    columns: &[
        Column::int("arid", 8),
        Column::int("orid", 8),
        Column::text("sta", 6),
        Column::text("phase", 8),
        Column::float("belief", 4, 2),
        Column::float("delta", 8, 3),
        Column::float("seaz", 7, 2),
        Column::float("esaz", 7, 2),
        Column::float("timeres", 8, 3),
        Column::text("timedef", 1),
        Column::float("azres", 7, 1),
        Column::text("azdef", 1),
        Column::float("slores", 7, 2),
        Column::text("slodef", 1),
        Column::float("emares", 7, 1),
        Column::float("wgt", 6, 3),
        Column::text("vmodel", 15),
        COMMID,
        LDDATE,
    ],
};

/// `stassoc` relation
pub static STASSOC: Schema = Schema {
    columns: &[
        Column::int("stassid", 8),
        Column::text("sta", 6),
        Column::text("etype", 7),
        Column::text("location", 32),
        Column::float("dist", 7, 2),
        Column::float("azimuth", 7, 2),
        Column::float("lat", 9, 4),
        Column::float("lon", 9, 4),
        Column::float("depth", 9, 4),
        Column::float("time", 17, 5),
        Column::float("imb", 7, 2),
        Column::float("ims", 7, 2),
        Column::float("iml", 7, 2),
        AUTH,
        COMMID,
        LDDATE,
    ],
};

/// `remark` relation
pub static REMARK: Schema = Schema {
    columns: &[
        COMMID,
        Column::int("lineno", 8),
        Column::text("remark", 80),
        LDDATE,
    ],
};

/// `netmag` relation
pub static NETMAG: Schema = Schema {
    columns: &[
        Column::int("magid", 8),
        Column::text("net", 8),
        Column::int("orid", 8),
        Column::int("evid", 8),
        Column::text("magtype", 6),
        Column::int("nsta", 8),
        Column::float("magnitude", 7, 2),
        Column::float("uncertainty", 7, 2),
        AUTH,
        COMMID,
        LDDATE,
    ],
};

/// `stamag` relation
pub static STAMAG: Schema = Schema {
    columns: &[
        Column::int("magid", 8),
        Column::text("sta", 6),
        Column::int("arid", 8),
        Column::int("orid", 8),
        Column::int("evid", 8),
        Column::text("phase", 8),
        Column::text("magtype", 6),
        Column::float("magnitude", 7, 2),
        Column::float("uncertainty", 7, 2),
        AUTH,
        COMMID,
        LDDATE,
    ],
};

/// `gregion` relation
pub static GREGION: Schema = Schema {
    columns: &[Column::int("grn", 8), Column::text("grname", 40), LDDATE],
};

/// `sregion` relation
pub static SREGION: Schema = Schema {
    columns: &[Column::int("srn", 8), Column::text("srname", 40), LDDATE],
};
