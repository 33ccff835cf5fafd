//! Lenient deserialization helpers shared by the JSON and XML decoders.

use chrono::{DateTime, FixedOffset};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Deserializes empty strings as `None` (for `String` fields).
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let result = Option::deserialize(deserializer);
    let s: Option<String> = result.map_err(D::Error::custom)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserializes RFC 3339 timestamps, treating empty strings and `null` as
/// `None`.
pub(crate) fn rfc3339_opt<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let result = Option::deserialize(deserializer);
    let s: Option<String> = result.map_err(D::Error::custom)?;
    match s.as_deref() {
        None | Some("") => Ok(None),
        Some(v) => DateTime::parse_from_rfc3339(v)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid rfc3339 timestamp {v:?}: {e}"))),
    }
}

/// Visitor for coordinate values that arrive as numbers, numeric strings,
/// or empty strings (`stations_list` mixes all three).
struct CoordVisitor;

impl<'de> serde::de::Visitor<'de> for CoordVisitor {
    type Value = Option<f64>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a coordinate as a number or string")
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(None);
        }
        v.parse()
            .map(Some)
            .map_err(|e| E::custom(format!("invalid coordinate {v:?}: {e}")))
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(Self)
    }
}

/// Deserializes a coordinate that the upstream serializes inconsistently.
pub(crate) fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CoordVisitor)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        name: Option<String>,
        #[serde(default, deserialize_with = "rfc3339_opt")]
        at: Option<DateTime<FixedOffset>>,
        #[serde(default, deserialize_with = "lenient_coord")]
        lng: Option<f64>,
    }

    #[test]
    fn test_empty_string_as_none_json() {
        // Arrange & Act
        let probe: Probe = serde_json::from_str(r#"{"name": ""}"#).unwrap();

        // Assert
        assert_eq!(probe.name, None);
    }

    #[test]
    fn test_empty_string_as_none_xml() {
        // Arrange & Act
        let probe: Probe = quick_xml::de::from_str("<Probe><name></name></Probe>").unwrap();
        assert_eq!(probe.name, None);

        let probe: Probe = quick_xml::de::from_str("<Probe><name>D</name></Probe>").unwrap();

        // Assert
        assert_eq!(probe.name.as_deref(), Some("D"));
    }

    #[test]
    fn test_rfc3339_opt_parses_offset_timestamp() {
        // Arrange & Act
        let probe: Probe =
            serde_json::from_str(r#"{"at": "2024-09-02T08:25:00+03:00"}"#).unwrap();

        // Assert
        let at = probe.at.unwrap();
        assert_eq!(at.to_rfc3339(), "2024-09-02T08:25:00+03:00");
    }

    #[test]
    fn test_rfc3339_opt_empty_and_null_are_none() {
        // Arrange & Act & Assert
        let probe: Probe = serde_json::from_str(r#"{"at": ""}"#).unwrap();
        assert_eq!(probe.at, None);

        let probe: Probe = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert_eq!(probe.at, None);
    }

    #[test]
    fn test_rfc3339_opt_rejects_garbage() {
        // Arrange & Act
        let result: Result<Probe, _> = serde_json::from_str(r#"{"at": "tomorrow"}"#);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_lenient_coord_number() {
        // Arrange & Act
        let probe: Probe = serde_json::from_str(r#"{"lng": 37.619899}"#).unwrap();

        // Assert
        assert_eq!(probe.lng, Some(37.619899));
    }

    #[test]
    fn test_lenient_coord_numeric_string() {
        // Arrange & Act
        let probe: Probe = serde_json::from_str(r#"{"lng": "37.619899"}"#).unwrap();

        // Assert
        assert_eq!(probe.lng, Some(37.619899));
    }

    #[test]
    fn test_lenient_coord_empty_string_and_null() {
        // Arrange & Act & Assert
        let probe: Probe = serde_json::from_str(r#"{"lng": ""}"#).unwrap();
        assert_eq!(probe.lng, None);

        let probe: Probe = serde_json::from_str(r#"{"lng": null}"#).unwrap();
        assert_eq!(probe.lng, None);
    }

    #[test]
    fn test_lenient_coord_xml_text() {
        // Arrange & Act
        let probe: Probe = quick_xml::de::from_str("<Probe><lng>37.26</lng></Probe>").unwrap();

        // Assert
        assert_eq!(probe.lng, Some(37.26));
    }
}
