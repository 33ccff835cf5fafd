//! Request parameter types for the six query operations.
//!
//! Optional numeric parameters are explicit `Option`s: `None` omits the
//! query parameter entirely. Required coordinates and radius still reject
//! zero values, mirroring the upstream contract.

use chrono::NaiveDate;

use crate::error::Error;
use crate::types::TransportType;

/// Date format used by every date-carrying query parameter.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parameters for the station schedule operation.
#[derive(Debug, Clone)]
pub struct SchedulesParams {
    /// Station code (e.g. `"s9600213"`).
    pub station: String,
    /// Date the schedule is requested for.
    pub date: NaiveDate,
    /// Transport type filter.
    pub transport_type: TransportType,
    /// Page offset.
    pub offset: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl SchedulesParams {
    /// Creates parameters with the required fields.
    #[must_use]
    pub fn new(station: impl Into<String>, date: NaiveDate, transport_type: TransportType) -> Self {
        Self {
            station: station.into(),
            date,
            transport_type,
            offset: None,
            limit: None,
        }
    }

    /// Sets the page offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Parameters for the route search operation.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Departure point code.
    pub from: String,
    /// Arrival point code.
    pub to: String,
    /// Travel date; `None` searches all dates the schedule covers.
    pub date: Option<NaiveDate>,
    /// Page offset.
    pub offset: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl SearchParams {
    /// Creates parameters with the required fields.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            date: None,
            offset: None,
            limit: None,
        }
    }

    /// Sets the travel date.
    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rejects empty required point codes.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.from.is_empty() {
            return Err(Error::MissingParameter("from"));
        }
        if self.to.is_empty() {
            return Err(Error::MissingParameter("to"));
        }
        Ok(())
    }
}

/// Parameters for the thread-detail operation.
#[derive(Debug, Clone)]
pub struct ThreadParams {
    /// Thread identifier (e.g. `"726CH_2_2"`).
    pub uid: String,
    /// Departure station code, to pin the thread to a direction.
    pub from: Option<String>,
    /// Arrival station code.
    pub to: Option<String>,
}

impl ThreadParams {
    /// Creates parameters with the required thread identifier.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            from: None,
            to: None,
        }
    }

    /// Sets the departure station code.
    #[must_use]
    pub fn from_station(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Sets the arrival station code.
    #[must_use]
    pub fn to_station(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Rejects an empty thread identifier.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.uid.is_empty() {
            return Err(Error::MissingParameter("uid"));
        }
        Ok(())
    }
}

/// Parameters for the nearest-stations operation.
#[derive(Debug, Clone)]
pub struct NearestStationsParams {
    /// Latitude of the search center.
    pub lat: f64,
    /// Longitude of the search center.
    pub lng: f64,
    /// Search radius in kilometers.
    pub distance: u32,
    /// Page offset.
    pub offset: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl NearestStationsParams {
    /// Creates parameters with the required fields.
    #[must_use]
    pub const fn new(lat: f64, lng: f64, distance: u32) -> Self {
        Self {
            lat,
            lng,
            distance,
            offset: None,
            limit: None,
        }
    }

    /// Sets the page offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rejects zero-valued required coordinates and radius, which the
    /// upstream treats as absent.
    #[allow(clippy::float_cmp)]
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.lat == 0.0 {
            return Err(Error::MissingParameter("lat"));
        }
        if self.lng == 0.0 {
            return Err(Error::MissingParameter("lng"));
        }
        if self.distance == 0 {
            return Err(Error::MissingParameter("distance"));
        }
        Ok(())
    }
}

/// Parameters for the nearest-settlement operation.
#[derive(Debug, Clone)]
pub struct NearestCityParams {
    /// Latitude of the search center.
    pub lat: f64,
    /// Longitude of the search center.
    pub lng: f64,
    /// Search radius in kilometers.
    pub distance: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl NearestCityParams {
    /// Creates parameters with the required fields.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            distance: None,
            offset: None,
            limit: None,
        }
    }

    /// Sets the search radius in kilometers.
    #[must_use]
    pub const fn distance(mut self, distance: u32) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rejects zero-valued required coordinates.
    #[allow(clippy::float_cmp)]
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.lat == 0.0 {
            return Err(Error::MissingParameter("lat"));
        }
        if self.lng == 0.0 {
            return Err(Error::MissingParameter("lng"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_schedules_params_defaults() {
        // Arrange & Act
        let params = SchedulesParams::new(
            "s9600213",
            NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            TransportType::Plane,
        );

        // Assert
        assert_eq!(params.offset, None);
        assert_eq!(params.limit, None);
    }

    #[test]
    fn test_search_params_validate_empty_from() {
        // Arrange
        let params = SearchParams::new("", "s9602494");

        // Act
        let result = params.validate();

        // Assert
        assert!(matches!(result, Err(Error::MissingParameter("from"))));
    }

    #[test]
    fn test_search_params_validate_empty_to() {
        // Arrange
        let params = SearchParams::new("s2006004", "");

        // Act & Assert
        assert!(matches!(
            params.validate(),
            Err(Error::MissingParameter("to"))
        ));
    }

    #[test]
    fn test_search_params_validate_ok() {
        // Arrange
        let params = SearchParams::new("s2006004", "s9602494")
            .date(NaiveDate::from_ymd_opt(2024, 9, 3).unwrap())
            .limit(10);

        // Act & Assert
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_thread_params_validate_empty_uid() {
        // Arrange
        let params = ThreadParams::new("");

        // Act & Assert
        assert!(matches!(
            params.validate(),
            Err(Error::MissingParameter("uid"))
        ));
    }

    #[test]
    fn test_nearest_stations_params_validate_zero_values() {
        // Arrange & Act & Assert
        assert!(matches!(
            NearestStationsParams::new(0.0, 37.26, 3).validate(),
            Err(Error::MissingParameter("lat"))
        ));
        assert!(matches!(
            NearestStationsParams::new(55.59, 0.0, 3).validate(),
            Err(Error::MissingParameter("lng"))
        ));
        assert!(matches!(
            NearestStationsParams::new(55.59, 37.26, 0).validate(),
            Err(Error::MissingParameter("distance"))
        ));
        assert!(NearestStationsParams::new(55.59, 37.26, 3).validate().is_ok());
    }

    #[test]
    fn test_nearest_city_params_validate_zero_values() {
        // Arrange & Act & Assert
        assert!(matches!(
            NearestCityParams::new(0.0, 37.61).validate(),
            Err(Error::MissingParameter("lat"))
        ));
        assert!(matches!(
            NearestCityParams::new(55.75, 0.0).validate(),
            Err(Error::MissingParameter("lng"))
        ));
        assert!(NearestCityParams::new(55.75, 37.61).validate().is_ok());
    }
}
