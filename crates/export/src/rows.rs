//! Row encoders, one per populated relation
//!
//! Each row struct holds the values the catalog actually supplies for its
//! relation. Every other column of the relation is left unbound and takes
//! the schema default (`-1` for numbers, `-` for text).

use crate::format::FieldValue;
use crate::schema::{ARRIVAL, ASSOC, EVENT, NETMAG, ORIGERR, ORIGIN, REMARK, STAMAG, STASSOC};
use crate::schema::Schema;

/// Binds a load date and the row's own values, then renders through `schema`
fn encode_with<'a>(
    schema: &Schema,
    lddate: &'a str,
    bind: impl Fn(&str) -> Option<FieldValue<'a>>,
) -> String {
    schema.encode(|name| match name {
        "lddate" => Some(FieldValue::text(lddate)),
        other => bind(other),
    })
}

/// `event` row
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    /// Event id
    pub evid: i64,
    /// Earthquake name or `-`
    pub evname: String,
    /// Preferred origin id
    pub prefor: i64,
    /// Author
    pub auth: String,
    /// Remark group
    pub commid: i64,
}

impl EventRow {
    /// Render against the `event` schema
    pub fn encode(&self, lddate: &str) -> String {
        encode_with(&EVENT, lddate, |name| match name {
            "evid" => Some(self.evid.into()),
            "evname" => Some(self.evname.as_str().into()),
            "prefor" => Some(self.prefor.into()),
            "auth" => Some(self.auth.as_str().into()),
            "commid" => Some(self.commid.into()),
            _ => None,
        })
    }
}

/// `origin` row
#[derive(Debug, Clone, PartialEq)]
pub struct OriginRow {
    /// Latitude, degrees
    pub lat: f64,
    /// Longitude, degrees
    pub lon: f64,
    /// Depth, kilometers
    pub depth_km: f64,
    /// Origin time, epoch seconds
    pub time: f64,
    /// Origin id
    pub orid: i64,
    /// Owning event id
    pub evid: i64,
    /// Author
    pub auth: String,
    /// Remark group
    pub commid: i64,
}

impl OriginRow {
    /// Render against the `origin` schema
    pub fn encode(&self, lddate: &str) -> String {
        encode_with(&ORIGIN, lddate, |name| match name {
            "lat" => Some(self.lat.into()),
            "lon" => Some(self.lon.into()),
            "depth" => Some(self.depth_km.into()),
            "time" => Some(self.time.into()),
            "orid" => Some(self.orid.into()),
            "evid" => Some(self.evid.into()),
            "auth" => Some(self.auth.as_str().into()),
            "commid" => Some(self.commid.into()),
            _ => None,
        })
    }
}

/// `origerr` row
///
/// Only the origin link is known; the error ellipse terms stay at their
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct OrigerrRow {
    /// Origin id
    pub orid: i64,
    /// Remark group
    pub commid: i64,
}

impl OrigerrRow {
    /// Render against the `origerr` schema
    pub fn encode(&self, lddate: &str) -> String {
        encode_with(&ORIGERR, lddate, |name| match name {
            "orid" => Some(self.orid.into()),
            "commid" => Some(self.commid.into()),
            _ => None,
        })
    }
}

/// `arrival` row
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalRow {
    /// Arrival id
    pub arid: i64,
    /// Azimuth, degrees
    pub azimuth: Option<f64>,
    /// Author
    pub auth: String,
    /// Remark group
    pub commid: i64,
}

impl ArrivalRow {
    /// Render against the `arrival` schema
    pub fn encode(&self, lddate: &str) -> String {
        encode_with(&ARRIVAL, lddate, |name| match name {
            "arid" => Some(self.arid.into()),
            "azimuth" => self.azimuth.map(FieldValue::Float),
            "auth" => Some(self.auth.as_str().into()),
            "commid" => Some(self.commid.into()),
            _ => None,
        })
    }
}

/// `assoc` row
#[derive(Debug, Clone, PartialEq)]
pub struct AssocRow {
    /// Arrival id
    pub arid: i64,
    /// Origin id
    pub orid: i64,
    /// Remark group
    pub commid: i64,
}

impl AssocRow {
    /// Render against the `assoc` schema
    pub fn encode(&self, lddate: &str) -> String {
        encode_with(&ASSOC, lddate, |name| match name {
            "arid" => Some(self.arid.into()),
            "orid" => Some(self.orid.into()),
            "commid" => Some(self.commid.into()),
            _ => None,
        })
    }
}

/// `stassoc` row
#[derive(Debug, Clone, PartialEq)]
pub struct StassocRow {
    /// Azimuth, degrees
    pub azimuth: Option<f64>,
    /// Remark group
    pub commid: i64,
}

impl StassocRow {
    /// Render against the `stassoc` schema
    pub fn encode(&self, lddate: &str) -> String {
        encode_with(&STASSOC, lddate, |name| match name {
            "azimuth" => self.azimuth.map(FieldValue::Float),
            "commid" => Some(self.commid.into()),
            _ => None,
        })
    }
}

/// `remark` row
#[derive(Debug, Clone, PartialEq)]
pub struct RemarkRow {
    /// Remark group
    pub commid: i64,
    /// 1-based position within the group
    pub lineno: i64,
    /// Comment text on a single line
    pub remark: String,
}

impl RemarkRow {
    /// Render against the `remark` schema
    pub fn encode(&self, lddate: &str) -> String {
        encode_with(&REMARK, lddate, |name| match name {
            "commid" => Some(self.commid.into()),
            "lineno" => Some(self.lineno.into()),
            "remark" => Some(self.remark.as_str().into()),
            _ => None,
        })
    }
}

/// `netmag` row
#[derive(Debug, Clone, PartialEq)]
pub struct NetmagRow {
    /// Magnitude id
    pub magid: i64,
    /// Origin id, `-1` when the magnitude names no origin
    pub orid: i64,
    /// Event id
    pub evid: i64,
    /// Magnitude type
    pub magtype: Option<String>,
    /// Number of stations
    pub nsta: Option<i64>,
    /// Magnitude value
    pub magnitude: f64,
    /// Uncertainty
    pub uncertainty: Option<f64>,
    /// Author
    pub auth: String,
    /// Remark group
    pub commid: i64,
}

impl NetmagRow {
    /// Render against the `netmag` schema
    pub fn encode(&self, lddate: &str) -> String {
        encode_with(&NETMAG, lddate, |name| match name {
            "magid" => Some(self.magid.into()),
            "orid" => Some(self.orid.into()),
            "evid" => Some(self.evid.into()),
            "magtype" => self.magtype.as_deref().map(FieldValue::text),
            "nsta" => self.nsta.map(FieldValue::Int),
            "magnitude" => Some(self.magnitude.into()),
            "uncertainty" => self.uncertainty.map(FieldValue::Float),
            "auth" => Some(self.auth.as_str().into()),
            "commid" => Some(self.commid.into()),
            _ => None,
        })
    }
}

/// `stamag` row
#[derive(Debug, Clone, PartialEq)]
pub struct StamagRow {
    /// Id of the network magnitude this station contributes to, or `-1`
    pub magid: i64,
    /// Station code
    pub sta: Option<String>,
    /// Origin id, or `-1`
    pub orid: i64,
    /// Event id
    pub evid: i64,
    /// Magnitude type
    pub magtype: Option<String>,
    /// Magnitude value
    pub magnitude: f64,
    /// Uncertainty
    pub uncertainty: Option<f64>,
    /// Author
    pub auth: String,
    /// Remark group
    pub commid: i64,
}

impl StamagRow {
    /// Render against the `stamag` schema
    pub fn encode(&self, lddate: &str) -> String {
        encode_with(&STAMAG, lddate, |name| match name {
            "magid" => Some(self.magid.into()),
            "sta" => self.sta.as_deref().map(FieldValue::text),
            "orid" => Some(self.orid.into()),
            "evid" => Some(self.evid.into()),
            "magtype" => self.magtype.as_deref().map(FieldValue::text),
            "magnitude" => Some(self.magnitude.into()),
            "uncertainty" => self.uncertainty.map(FieldValue::Float),
            "auth" => Some(self.auth.as_str().into()),
            "commid" => Some(self.commid.into()),
            _ => None,
        })
    }
}
