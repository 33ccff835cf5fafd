//! Typed client for the Yandex.Rasp transit-schedule API.
//!
//! Covers the six read-only query operations of API v3.0 — schedules by
//! station, station directory, route search, thread detail, nearest
//! stations, nearest settlement — over JSON or XML.

mod api;
mod client;
mod de;
mod error;
mod key_pool;
mod params;
mod response;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalRaspApi, RaspApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_HOST, RaspClient, RaspClientBuilder};
pub use error::Error;
pub use params::{
    NearestCityParams, NearestStationsParams, SchedulesParams, SearchParams, ThreadParams,
};
pub use response::{
    NearestCityResponse, NearestStationsResponse, SchedulesResponse, SearchResponse,
    StationsListResponse, ThreadResponse,
};
pub use types::{
    Carrier, Country, Format, Lang, Pagination, Region, Schedule, Segment, Settlement, Station,
    Stop, Thread, TransportSubtype, TransportType,
};
