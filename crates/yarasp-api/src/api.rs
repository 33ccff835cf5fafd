//! `RaspApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Error;
use crate::params::{
    NearestCityParams, NearestStationsParams, SchedulesParams, SearchParams, ThreadParams,
};
use crate::response::{
    NearestCityResponse, NearestStationsResponse, SchedulesResponse, SearchResponse,
    StationsListResponse, ThreadResponse,
};

/// Yandex.Rasp API trait.
///
/// Abstracts the six query operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(RaspApi: Send)]
pub trait LocalRaspApi {
    /// Fetches one station's schedule for one date.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or body decoding fails.
    async fn schedules(&self, params: &SchedulesParams) -> Result<SchedulesResponse, Error>;

    /// Fetches the full station directory
    /// (country → region → settlement → station).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or body decoding fails.
    async fn stations_list(&self) -> Result<StationsListResponse, Error>;

    /// Searches scheduled legs between two points.
    ///
    /// # Errors
    ///
    /// Returns an error if `from`/`to` is empty, or if the HTTP request or
    /// body decoding fails.
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, Error>;

    /// Fetches the stop list of one thread (route line).
    ///
    /// # Errors
    ///
    /// Returns an error if `uid` is empty, or if the HTTP request or body
    /// decoding fails.
    async fn thread(&self, params: &ThreadParams) -> Result<ThreadResponse, Error>;

    /// Lists stations within a radius of a coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if a required coordinate or the radius is zero, or
    /// if the HTTP request or body decoding fails.
    async fn nearest_stations(
        &self,
        params: &NearestStationsParams,
    ) -> Result<NearestStationsResponse, Error>;

    /// Finds the settlement nearest to a coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if a required coordinate is zero, or if the HTTP
    /// request or body decoding fails.
    async fn nearest_city(&self, params: &NearestCityParams)
    -> Result<NearestCityResponse, Error>;
}
