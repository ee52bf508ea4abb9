use crate::core::geo::LatLng;
use crate::{MapError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Root of an earthquake feed.
///
/// Features stay untyped here so that each one can be converted on its own:
/// one malformed record must not fail the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeedMetadata>,
}

impl FeatureCollection {
    pub fn new(features: Vec<serde_json::Value>) -> Self {
        Self {
            features,
            metadata: None,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromStr for FeatureCollection {
    type Err = MapError;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Descriptive block the USGS feeds attach to each collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedMetadata {
    #[serde(default)]
    pub title: Option<String>,
    /// Generation time in epoch milliseconds
    #[serde(default)]
    pub generated: Option<i64>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<serde_json::Value>,
    properties: Option<RawProperties>,
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawProperties {
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    time: Option<i64>,
    #[serde(default)]
    mag: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

/// One earthquake event, validated out of a feed feature
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    /// Feed-assigned identifier, when present
    pub id: Option<String>,
    pub place: String,
    pub time: DateTime<Utc>,
    pub magnitude: f64,
    pub position: LatLng,
    pub depth_km: f64,
}

impl Earthquake {
    /// Validates a raw feature.
    ///
    /// Fails with [`MapError::InvalidFeature`] when `properties.place`,
    /// `properties.time`, `properties.mag` or a three-axis
    /// `geometry.coordinates` is missing or mistyped.
    pub fn from_feature(feature: &serde_json::Value) -> Result<Self> {
        let raw = RawFeature::deserialize(feature)
            .map_err(|e| MapError::InvalidFeature(e.to_string()))?;

        let id = raw.id.map(|id| match id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });
        let missing = |field: &str| {
            MapError::InvalidFeature(match &id {
                Some(id) => format!("feature {id}: missing {field}"),
                None => format!("feature without id: missing {field}"),
            })
        };

        let properties = raw.properties.ok_or_else(|| missing("properties"))?;
        let place = properties.place.ok_or_else(|| missing("properties.place"))?;
        let time_ms = properties.time.ok_or_else(|| missing("properties.time"))?;
        let magnitude = properties.mag.ok_or_else(|| missing("properties.mag"))?;

        let geometry = raw.geometry.ok_or_else(|| missing("geometry"))?;
        let (position, depth_km) = match geometry.coordinates.as_slice() {
            [_, _, depth, ..] => (
                LatLng::from_position(&geometry.coordinates)
                    .ok_or_else(|| missing("geometry.coordinates"))?,
                *depth,
            ),
            _ => return Err(missing("geometry.coordinates[2]")),
        };

        let time = DateTime::<Utc>::from_timestamp_millis(time_ms).ok_or_else(|| {
            MapError::InvalidFeature(format!("time {time_ms} is out of range"))
        })?;

        Ok(Self {
            id,
            place,
            time,
            magnitude,
            position,
            depth_km,
        })
    }
}
