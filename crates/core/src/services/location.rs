//! Employee location trails.
//!
//! Field employees ping their position through the day. Each employee's
//! pings for one day form an append-only aggregate whose derived trail
//! is a GeoJSON FeatureCollection (RFC 7946): a LineString over the full
//! ping sequence plus a Point marking where the day started. The trail
//! is rebuilt from scratch on every append and stored serialized on the
//! aggregate.

use chrono::NaiveDate;
use ess_common::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A single GPS ping. GeoJSON axis order: longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPing {
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
}

/// GeoJSON geometry, limited to the shapes a trail uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Ordered path through all pings of the day.
    LineString {
        /// `[longitude, latitude]` pairs in ping order.
        coordinates: Vec<[f64; 2]>,
    },
    /// Marker at a single position.
    Point {
        /// `[longitude, latitude]`.
        coordinates: [f64; 2],
    },
}

/// GeoJSON feature wrapping one geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Always `"Feature"`.
    #[serde(rename = "type")]
    pub feature_type: String,
    /// Feature properties, empty for trails.
    pub properties: serde_json::Map<String, serde_json::Value>,
    /// Wrapped geometry.
    pub geometry: Geometry,
}

impl Feature {
    fn new(geometry: Geometry) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            properties: serde_json::Map::new(),
            geometry,
        }
    }
}

/// GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`.
    #[serde(rename = "type")]
    pub collection_type: String,
    /// Trail features: the LineString, then the start Point.
    pub features: Vec<Feature>,
}

/// Build the GeoJSON trail for an ordered ping sequence.
///
/// Produces exactly two features: a LineString over the pings in the
/// order given, and a Point at the first ping. An empty sequence is a
/// caller precondition violation and is rejected, never defaulted.
pub fn build_trail(pings: &[LocationPing]) -> AppResult<FeatureCollection> {
    let Some(first) = pings.first() else {
        return Err(AppError::Validation(
            "Location trail requires at least one ping".to_string(),
        ));
    };

    let coordinates: Vec<[f64; 2]> = pings.iter().map(|p| [p.longitude, p.latitude]).collect();

    Ok(FeatureCollection {
        collection_type: "FeatureCollection".to_string(),
        features: vec![
            Feature::new(Geometry::LineString { coordinates }),
            Feature::new(Geometry::Point {
                coordinates: [first.longitude, first.latitude],
            }),
        ],
    })
}

/// One employee's accumulated pings for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLocationDay {
    /// Employee the pings belong to.
    pub employee: String,
    /// Day covered by this aggregate.
    pub date: NaiveDate,
    /// Pings in arrival order.
    pub pings: Vec<LocationPing>,
    /// Serialized trail, refreshed on every append.
    pub location_map: String,
}

impl EmployeeLocationDay {
    /// Create a day aggregate from its first batch of pings.
    pub fn new(
        employee: impl Into<String>,
        date: NaiveDate,
        pings: Vec<LocationPing>,
    ) -> AppResult<Self> {
        let mut day = Self {
            employee: employee.into(),
            date,
            pings,
            location_map: String::new(),
        };
        day.revalidate()?;
        Ok(day)
    }

    /// Append pings and rebuild the stored trail.
    pub fn append(&mut self, pings: impl IntoIterator<Item = LocationPing>) -> AppResult<()> {
        self.pings.extend(pings);
        self.revalidate()
    }

    /// Rebuild `location_map` over the full accumulated sequence.
    fn revalidate(&mut self) -> AppResult<()> {
        let trail = build_trail(&self.pings)?;
        self.location_map = serde_json::to_string(&trail)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ping(longitude: f64, latitude: f64) -> LocationPing {
        LocationPing {
            longitude,
            latitude,
        }
    }

    #[test]
    fn test_trail_has_line_and_start_point() {
        let trail = build_trail(&[ping(72.85, 19.08), ping(72.87, 19.10)]).unwrap();
        assert_eq!(trail.features.len(), 2);

        let Geometry::LineString { coordinates } = &trail.features[0].geometry else {
            panic!("first feature must be the line");
        };
        assert_eq!(coordinates, &vec![[72.85, 19.08], [72.87, 19.10]]);

        let Geometry::Point { coordinates } = &trail.features[1].geometry else {
            panic!("second feature must be the start marker");
        };
        assert_eq!(coordinates, &[72.85, 19.08]);
    }

    #[test]
    fn test_trail_rejects_empty_ping_list() {
        let err = build_trail(&[]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_trail_serializes_to_geojson() {
        let trail = build_trail(&[ping(72.855_663, 19.080_709)]).unwrap();
        let json = serde_json::to_value(&trail).unwrap();

        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["type"], "Feature");
        assert_eq!(json["features"][0]["geometry"]["type"], "LineString");
        assert_eq!(
            json["features"][0]["geometry"]["coordinates"][0][0],
            72.855_663
        );
        assert_eq!(json["features"][1]["geometry"]["type"], "Point");
    }

    #[test]
    fn test_day_aggregate_rebuilds_trail_on_append() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 9).unwrap();
        let mut day =
            EmployeeLocationDay::new("HR-EMP-0001", date, vec![ping(72.85, 19.08)]).unwrap();

        day.append([ping(72.87, 19.10), ping(72.86, 19.07)]).unwrap();

        let trail: FeatureCollection = serde_json::from_str(&day.location_map).unwrap();
        let Geometry::LineString { coordinates } = &trail.features[0].geometry else {
            panic!("first feature must be the line");
        };
        assert_eq!(coordinates.len(), day.pings.len());

        // The start marker stays at the first-ever ping of the day.
        let Geometry::Point { coordinates } = &trail.features[1].geometry else {
            panic!("second feature must be the start marker");
        };
        assert_eq!(coordinates, &[72.85, 19.08]);
    }

    #[test]
    fn test_day_aggregate_requires_a_first_ping() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 9).unwrap();
        assert!(EmployeeLocationDay::new("HR-EMP-0001", date, vec![]).is_err());
    }
}
