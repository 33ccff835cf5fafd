//! Per-operation response envelopes.
//!
//! Each envelope decodes from JSON or XML (element names match the JSON
//! keys) and tolerates unknown upstream fields. Blocks whose schema the
//! upstream does not pin down stay [`serde_json::Value`].

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Country, Pagination, Schedule, Segment, Station, Stop, TransportSubtype};

/// `schedule/` response: one station's schedule for one date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchedulesResponse {
    /// Paging of the schedule list.
    #[serde(default)]
    pub pagination: Pagination,
    /// Date the list was produced for (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<String>,
    /// The requested station.
    #[serde(default)]
    pub station: Option<Station>,
    /// Scheduled rendezvous, one per thread stop.
    #[serde(default)]
    pub schedule: Vec<Schedule>,
    /// Requested direction code and title; shape varies by station.
    #[serde(default)]
    pub schedule_direction: Option<Value>,
    /// Available suburban directions; shape varies by station.
    #[serde(default)]
    pub directions: Option<Value>,
}

/// `stations_list/` response: the full directory hierarchy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationsListResponse {
    /// Countries owning regions, settlements, and stations.
    #[serde(default)]
    pub countries: Vec<Country>,
}

/// `search/` response: legs between two points.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Paging of the segment list.
    #[serde(default)]
    pub pagination: Pagination,
    /// Interval-service legs; schema is not pinned down upstream.
    #[serde(default)]
    pub interval_segments: Vec<Value>,
    /// Scheduled legs matching the search.
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Echo of the search request; shape varies by point types.
    #[serde(default)]
    pub search: Option<Value>,
}

/// `thread/` response: the stop list of one route line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThreadResponse {
    /// Days the thread runs (free-form).
    #[serde(default)]
    pub days: Option<String>,
    /// Stops along the thread, in order.
    #[serde(default)]
    pub stops: Vec<Stop>,
    /// Vehicle subtype classification.
    #[serde(default)]
    pub transport_subtype: Option<TransportSubtype>,
}

/// `nearest_stations/` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearestStationsResponse {
    /// Paging of the station list.
    #[serde(default)]
    pub pagination: Pagination,
    /// Stations within the requested radius, nearest first.
    #[serde(default)]
    pub stations: Vec<Station>,
}

/// `nearest_settlement/` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearestCityResponse {
    /// Distance to the settlement in kilometers.
    #[serde(default)]
    pub distance: f64,
    /// Settlement point code (e.g. `"c213"`).
    #[serde(default)]
    pub code: String,
    /// Settlement title.
    #[serde(default)]
    pub title: String,
    /// Colloquial title, when distinct.
    #[serde(default, deserialize_with = "crate::de::empty_string_as_none")]
    pub popular_title: Option<String>,
    /// Short title, when distinct.
    #[serde(default, deserialize_with = "crate::de::empty_string_as_none")]
    pub short_title: Option<String>,
    /// Settlement latitude.
    #[serde(default)]
    pub lat: f64,
    /// Settlement longitude.
    #[serde(default)]
    pub lng: f64,
    /// Point type; always `"settlement"` for this operation.
    #[serde(rename = "type", default)]
    pub settlement_type: String,
}
