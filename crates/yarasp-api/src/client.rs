//! `RaspClient` - Yandex.Rasp API client implementation.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::instrument;
use url::Url;

use crate::api::LocalRaspApi;
use crate::error::Error;
use crate::key_pool::KeyPool;
use crate::params::{
    DATE_FORMAT, NearestCityParams, NearestStationsParams, SchedulesParams, SearchParams,
    ThreadParams,
};
use crate::response::{
    NearestCityResponse, NearestStationsResponse, SchedulesResponse, SearchResponse,
    StationsListResponse, ThreadResponse,
};
use crate::types::{Format, Lang};

/// Production API host.
pub const DEFAULT_HOST: &str = "api.rasp.yandex.net";

/// API protocol version the client targets.
const API_VERSION: &str = "v3.0";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Yandex.Rasp API client.
///
/// Shareable across tasks; the key-pool cursor is the only mutable state
/// and is synchronized internally.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct RaspClient {
    /// HTTP client (reqwest, gzip enabled, client-level timeout).
    http_client: Client,
    /// Base URL including the version path segment.
    base_url: Url,
    /// Rotating API key pool.
    keys: KeyPool,
    /// Response wire format.
    format: Format,
    /// Response language.
    lang: Lang,
}

/// Builder for `RaspClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct RaspClientBuilder {
    host: Option<String>,
    base_url: Option<Url>,
    keys: Vec<String>,
    format: Option<Format>,
    lang: Option<Lang>,
    version: Option<String>,
    timeout: Option<Duration>,
}

impl RaspClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            host: None,
            base_url: None,
            keys: Vec::new(),
            format: None,
            lang: None,
            version: None,
            timeout: None,
        }
    }

    /// Overrides the API host (default: `api.rasp.yandex.net`).
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Overrides the full base URL, version path included (for wiremock in
    /// tests). Takes precedence over `host` and `version`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Appends a single API key to the pool (required at least once).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Replaces the pool with an ordered list of keys to rotate through on
    /// rate limiting.
    #[must_use]
    pub fn api_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the response format (default: JSON).
    #[must_use]
    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the response language (default: `ru_RU`).
    #[must_use]
    pub const fn lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }

    /// Overrides the API version path segment (default: `v3.0`).
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the request timeout (default: 15s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - No API key was supplied.
    /// - The host/version pair does not form a valid URL.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<RaspClient, Error> {
        let keys = KeyPool::new(self.keys)?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
            let version = self.version.as_deref().unwrap_or(API_VERSION);
            let raw = format!("https://{host}/{version}/");
            Url::parse(&raw).map_err(|e| Error::Config(format!("invalid base URL {raw:?}: {e}")))?
        };

        let http_client = Client::builder()
            .gzip(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(RaspClient {
            http_client,
            base_url,
            keys,
            format: self.format.unwrap_or(Format::Json),
            lang: self.lang.unwrap_or(Lang::Ru),
        })
    }
}

impl RaspClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> RaspClientBuilder {
        RaspClientBuilder::new()
    }

    /// Index of the pool key the next request will use.
    #[must_use]
    pub fn key_cursor(&self) -> usize {
        self.keys.cursor()
    }

    /// Decodes a response body according to the configured format.
    fn decode_body<T: serde::de::DeserializeOwned>(&self, body: &str) -> Result<T, Error> {
        match self.format {
            Format::Json => serde_json::from_str(body).map_err(Error::Json),
            Format::Xml => quick_xml::de::from_str(body).map_err(Error::Xml),
        }
    }

    /// Issues a GET against `{base_url}{path}` carrying the standard
    /// `apikey`/`format`/`lang` parameters plus `query`, and decodes the
    /// body.
    ///
    /// On HTTP 429 the key pool is rotated and the same request retried
    /// with the next key; once the pool is exhausted the call fails. Any
    /// other non-success status surfaces with its body text.
    async fn get_decoded<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, Error> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid operation path {path:?}: {e}")))?;

        loop {
            let response = self
                .http_client
                .get(url.clone())
                .query(&[
                    ("apikey", self.keys.current()),
                    ("format", self.format.as_str()),
                    ("lang", self.lang.as_str()),
                ])
                .query(query)
                .send()
                .await?;

            let status = response.status();
            tracing::debug!(%url, %status, "rasp API response");

            if status == StatusCode::TOO_MANY_REQUESTS {
                if self.keys.advance() {
                    tracing::warn!(
                        cursor = self.keys.cursor(),
                        "rate limited (429), retrying with next pool key"
                    );
                    continue;
                }
                tracing::warn!(keys = self.keys.len(), "rate limited (429), key pool exhausted");
                return Err(Error::KeyPoolExhausted {
                    keys: self.keys.len(),
                });
            }

            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("<failed to read body>"));
                return Err(Error::Status { status, body });
            }

            let body = response.text().await?;
            tracing::trace!(body_len = body.len(), "response body received");
            return self.decode_body(&body);
        }
    }
}

impl RaspClient {
    /// Builds query parameters for `schedule/`.
    fn build_schedules_query(params: &SchedulesParams) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("station", params.station.clone()),
            ("date", params.date.format(DATE_FORMAT).to_string()),
            ("transport_type", String::from(params.transport_type.as_str())),
        ];
        push_paging(&mut query, params.offset, params.limit);
        query
    }

    /// Builds query parameters for `search/`.
    fn build_search_query(params: &SearchParams) -> Vec<(&'static str, String)> {
        let mut query = vec![("from", params.from.clone()), ("to", params.to.clone())];
        if let Some(date) = params.date {
            query.push(("date", date.format(DATE_FORMAT).to_string()));
        }
        push_paging(&mut query, params.offset, params.limit);
        query
    }

    /// Builds query parameters for `thread/`.
    fn build_thread_query(params: &ThreadParams) -> Vec<(&'static str, String)> {
        let mut query = vec![("uid", params.uid.clone())];
        if let Some(ref from) = params.from {
            query.push(("from", from.clone()));
        }
        if let Some(ref to) = params.to {
            query.push(("to", to.clone()));
        }
        query
    }

    /// Builds query parameters for `nearest_stations/`.
    fn build_nearest_stations_query(
        params: &NearestStationsParams,
    ) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("lat", params.lat.to_string()),
            ("lng", params.lng.to_string()),
            ("distance", params.distance.to_string()),
        ];
        push_paging(&mut query, params.offset, params.limit);
        query
    }

    /// Builds query parameters for `nearest_settlement/`.
    fn build_nearest_city_query(params: &NearestCityParams) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("lat", params.lat.to_string()),
            ("lng", params.lng.to_string()),
        ];
        if let Some(distance) = params.distance {
            query.push(("distance", distance.to_string()));
        }
        push_paging(&mut query, params.offset, params.limit);
        query
    }
}

/// Appends `offset`/`limit` when set.
fn push_paging(query: &mut Vec<(&'static str, String)>, offset: Option<u32>, limit: Option<u32>) {
    if let Some(offset) = offset {
        query.push(("offset", offset.to_string()));
    }
    if let Some(limit) = limit {
        query.push(("limit", limit.to_string()));
    }
}

impl LocalRaspApi for RaspClient {
    #[instrument(skip_all)]
    async fn schedules(&self, params: &SchedulesParams) -> Result<SchedulesResponse, Error> {
        let query = Self::build_schedules_query(params);
        self.get_decoded("schedule/", &query).await
    }

    #[instrument(skip_all)]
    async fn stations_list(&self) -> Result<StationsListResponse, Error> {
        self.get_decoded("stations_list/", &[]).await
    }

    #[instrument(skip_all)]
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, Error> {
        params.validate()?;
        let query = Self::build_search_query(params);
        self.get_decoded("search/", &query).await
    }

    #[instrument(skip_all)]
    async fn thread(&self, params: &ThreadParams) -> Result<ThreadResponse, Error> {
        params.validate()?;
        let query = Self::build_thread_query(params);
        self.get_decoded("thread/", &query).await
    }

    #[instrument(skip_all)]
    async fn nearest_stations(
        &self,
        params: &NearestStationsParams,
    ) -> Result<NearestStationsResponse, Error> {
        params.validate()?;
        let query = Self::build_nearest_stations_query(params);
        self.get_decoded("nearest_stations/", &query).await
    }

    #[instrument(skip_all)]
    async fn nearest_city(
        &self,
        params: &NearestCityParams,
    ) -> Result<NearestCityResponse, Error> {
        params.validate()?;
        let query = Self::build_nearest_city_query(params);
        self.get_decoded("nearest_settlement/", &query).await
    }
}
