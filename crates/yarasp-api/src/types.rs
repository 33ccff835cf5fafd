//! Domain records mirroring the upstream API schema, plus the request
//! enumerations (format, language, transport type).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

use crate::de;
use crate::error::Error;

/// Response wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON body (`format=json`, the default).
    Json,
    /// XML body (`format=xml`).
    Xml,
}

impl Format {
    /// Query-parameter value for this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(Error::UnsupportedFormat(String::from(other))),
        }
    }
}

/// Response language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// Russian (`ru_RU`, the default).
    Ru,
    /// Ukrainian (`uk_UA`).
    Uk,
}

impl Lang {
    /// Query-parameter value for this language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ru => "ru_RU",
            Self::Uk => "uk_UA",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport type filter for the schedule operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportType {
    /// Aircraft.
    Plane,
    /// Long-distance train.
    Train,
    /// Suburban (commuter) train.
    Suburban,
    /// Bus.
    Bus,
    /// Water transport.
    Water,
    /// Helicopter.
    Helicopter,
}

impl TransportType {
    /// Query-parameter value for this transport type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Train => "train",
            Self::Suburban => "suburban",
            Self::Bus => "bus",
            Self::Water => "water",
            Self::Helicopter => "helicopter",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One station as returned by the schedule, search, directory, and geo
/// operations.
///
/// `transport_type` stays an open string because the upstream adds subtypes
/// without notice; [`TransportType`] only constrains outgoing requests.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Station {
    /// Suburban direction the station belongs to (e.g. a railway branch).
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub direction: Option<String>,
    /// Code-system name to code string (e.g. `"yandex_code"` → `"s9600213"`).
    #[serde(default)]
    pub codes: HashMap<String, String>,
    /// Station kind (`"train_station"`, `"airport"`, …).
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub station_type: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Longitude; the directory serializes unknown coordinates as `""`.
    #[serde(default, alias = "lng", deserialize_with = "de::lenient_coord")]
    pub longitude: Option<f64>,
    /// Latitude; same lenient decoding as `longitude`.
    #[serde(default, alias = "lat", deserialize_with = "de::lenient_coord")]
    pub latitude: Option<f64>,
    /// Transport type served by the station.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub transport_type: Option<String>,
    /// Point code used in request parameters (e.g. `"s9600213"`).
    #[serde(default)]
    pub code: String,
    /// Region title, when the operation includes it.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub region: Option<String>,
    /// City title, when the operation includes it.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub city: Option<String>,
}

impl Station {
    /// External identifier under the `yandex_code` code system, when
    /// present. Absence is a valid "not published" result, not an error.
    #[must_use]
    pub fn external_id(&self) -> Option<&str> {
        self.codes.get("yandex_code").map(String::as_str)
    }
}

/// Carrier operating a thread.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Carrier {
    /// Numeric carrier code.
    #[serde(default)]
    pub code: Option<i64>,
    /// Carrier title.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub title: Option<String>,
}

/// One scheduled route line (e.g. a particular train service), distinct
/// from any single day's run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Thread {
    /// Thread identifier, stable across dates.
    #[serde(default)]
    pub uid: String,
    /// Full title (origin — destination).
    #[serde(default)]
    pub title: String,
    /// Run number (e.g. `"726Ч"`).
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub number: Option<String>,
    /// Short title.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub short_title: Option<String>,
    /// URL of the thread-detail operation for this thread.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub thread_method_link: Option<String>,
    /// Operating carrier.
    #[serde(default)]
    pub carrier: Option<Carrier>,
    /// Carrier postal address.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub address: Option<String>,
    /// Carrier logo URL.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub logo: Option<String>,
    /// Carrier contact email.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub email: Option<String>,
}

/// One rendezvous of a [`Thread`] with the requested station.
///
/// Timestamps are RFC 3339 with a UTC offset, the API v3.0 representation;
/// a missing or empty value decodes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schedule {
    /// Days the thread does not run even though `days` covers them
    /// (free-form, e.g. `"6, 7, 8 февраля"`).
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub except_days: Option<String>,
    /// Arrival time at the station.
    #[serde(default, deserialize_with = "de::rfc3339_opt")]
    pub arrival: Option<DateTime<FixedOffset>>,
    /// Departure time from the station.
    #[serde(default, deserialize_with = "de::rfc3339_opt")]
    pub departure: Option<DateTime<FixedOffset>>,
    /// The thread making the stop.
    #[serde(default)]
    pub thread: Thread,
    /// Whether arrival/departure times are approximate.
    #[serde(default)]
    pub is_fuzzy: bool,
    /// Days the thread runs (free-form, e.g. `"ежедневно"`).
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub days: Option<String>,
    /// Intermediate stops, free-form. The empty string is meaningful: the
    /// thread stops nowhere between its endpoints.
    #[serde(default)]
    pub stops: String,
    /// Airport terminal (e.g. `"D"`).
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub terminal: Option<String>,
    /// Platform or track (e.g. `"3 путь"`); `None` when unpublished.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub platform: Option<String>,
}

/// One origin-to-destination leg returned by the route search.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Segment {
    /// Arrival time at `to`.
    #[serde(default, deserialize_with = "de::rfc3339_opt")]
    pub arrival: Option<DateTime<FixedOffset>>,
    /// Departure time from `from`.
    #[serde(default, deserialize_with = "de::rfc3339_opt")]
    pub departure: Option<DateTime<FixedOffset>>,
    /// Origin station.
    #[serde(default)]
    pub from: Station,
    /// Destination station.
    #[serde(default)]
    pub to: Station,
    /// The thread serving the leg.
    #[serde(default)]
    pub thread: Thread,
    /// Departure platform or track.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub departure_platform: Option<String>,
    /// Arrival platform or track.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub arrival_platform: Option<String>,
    /// Departure airport terminal.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub departure_terminal: Option<String>,
    /// Arrival airport terminal.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub arrival_terminal: Option<String>,
    /// Intermediate stops, free-form.
    #[serde(default)]
    pub stops: String,
    /// Travel time in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Whether the leg involves transfers.
    #[serde(default)]
    pub has_transfers: bool,
    /// First service date of the thread (`YYYY-MM-DD`).
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub start_date: Option<String>,
    /// Ticket availability and pricing; schema is not part of the upstream
    /// contract, kept opaque.
    #[serde(default)]
    pub tickets_info: Option<Value>,
    /// Days the thread runs (free-form).
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub days: Option<String>,
}

/// One stop along a [`Thread`].
///
/// Arrival/departure stay free-form strings: the thread operation emits
/// local wall-clock values whose shape varies by transport type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stop {
    /// Arrival time, free-form.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub arrival: Option<String>,
    /// Departure time, free-form.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub departure: Option<String>,
    /// Airport terminal.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub terminal: Option<String>,
    /// The station stopped at.
    #[serde(default)]
    pub station: Station,
    /// Dwell time in seconds.
    #[serde(default)]
    pub stop_time: Option<i64>,
    /// Travel time from the thread origin in seconds.
    #[serde(default)]
    pub duration: f64,
}

/// Transport subtype descriptor attached to a thread's vehicle
/// classification (e.g. `last` — «Ласточка» for `suburban`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransportSubtype {
    /// Primary vehicle color, hex.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub color: Option<String>,
    /// Subtype code within the thread's transport type.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub code: Option<String>,
    /// Human-readable subtype description.
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub title: Option<String>,
}

/// Paging block present on list-returning operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Total number of matching entries.
    #[serde(default)]
    pub total: u32,
    /// Page size used for this response.
    #[serde(default)]
    pub limit: u32,
    /// Offset of the first returned entry.
    #[serde(default)]
    pub offset: u32,
}

/// Country node of the station directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Country {
    /// Country title.
    #[serde(default)]
    pub title: String,
    /// Code-system name to code string.
    #[serde(default)]
    pub codes: HashMap<String, String>,
    /// Regions of the country.
    #[serde(default)]
    pub regions: Vec<Region>,
}

/// Region node of the station directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Region {
    /// Region title.
    #[serde(default)]
    pub title: String,
    /// Code-system name to code string.
    #[serde(default)]
    pub codes: HashMap<String, String>,
    /// Settlements of the region.
    #[serde(default)]
    pub settlements: Vec<Settlement>,
}

/// Settlement node of the station directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settlement {
    /// Settlement title.
    #[serde(default)]
    pub title: String,
    /// Code-system name to code string.
    #[serde(default)]
    pub codes: HashMap<String, String>,
    /// Stations of the settlement.
    #[serde(default)]
    pub stations: Vec<Station>,
}
