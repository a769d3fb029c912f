//! Constellation stick-figure conversion.
//!
//! Input is a GeoJSON `FeatureCollection` whose features carry a constellation
//! `id` and a `MultiLineString`-shaped `geometry.coordinates`, with positions
//! as `[longitude°, latitude°]` and longitude in (-180, 180]. Output maps each
//! id to the same polylines with longitude turned into right ascension hours
//! (rounded to 5 decimals) and latitude kept as declination.

use crate::errors::{BoundsError, BoundsResult};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Polylines of `[ra hours, dec degrees]` per constellation id, sorted by id.
pub type ConstellationLines = BTreeMap<String, Vec<Vec<[f64; 2]>>>;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    id: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<Vec<Vec<f64>>>,
}

/// Converts a GeoJSON longitude in degrees to right ascension in hours,
/// rounded to 5 decimals.
///
/// ```
/// use celestial_bounds::lines::longitude_to_ra_hours;
///
/// assert_eq!(longitude_to_ra_hours(90.0), 6.0);
/// assert_eq!(longitude_to_ra_hours(-90.0), 18.0);
/// ```
pub fn longitude_to_ra_hours(lon: f64) -> f64 {
    let lon = if lon < 0.0 { lon + 360.0 } else { lon };
    round_to(lon * 24.0 / 360.0, 5)
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = libm::pow(10.0, decimals as f64);
    libm::round(x * scale) / scale
}

/// Parses a constellation-lines GeoJSON document and converts every position.
pub fn convert_constellation_lines(geojson: &str) -> BoundsResult<ConstellationLines> {
    let collection: FeatureCollection = serde_json::from_str(geojson)?;
    let mut out = ConstellationLines::new();

    for feature in collection.features {
        let mut polylines = Vec::with_capacity(feature.geometry.coordinates.len());
        for polyline in &feature.geometry.coordinates {
            let converted = polyline
                .iter()
                .map(|position| match position.as_slice() {
                    [lon, lat, ..] => Ok([longitude_to_ra_hours(*lon), *lat]),
                    _ => Err(BoundsError::geometry(
                        &feature.id,
                        &format!("position has {} element(s)", position.len()),
                    )),
                })
                .collect::<BoundsResult<Vec<_>>>()?;
            polylines.push(converted);
        }
        tracing::debug!(id = %feature.id, polylines = polylines.len(), "converted constellation lines");
        out.insert(feature.id, polylines);
    }

    Ok(out)
}

/// Serializes converted lines as pretty-printed JSON.
pub fn to_json(lines: &ConstellationLines) -> BoundsResult<String> {
    Ok(serde_json::to_string_pretty(lines)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "Ori",
                "properties": {"rank": "1"},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[88.79, 7.41], [81.28, 6.35]], [[-96.0, -1.2, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "id": "And",
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[2.1, 29.09], [-0.0, 30.0]]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_longitude_conversion() {
        assert_eq!(longitude_to_ra_hours(0.0), 0.0);
        assert_eq!(longitude_to_ra_hours(180.0), 12.0);
        assert_eq!(longitude_to_ra_hours(-180.0), 12.0);
        assert_eq!(longitude_to_ra_hours(-96.0), 17.6);
        assert_eq!(longitude_to_ra_hours(88.79), 5.91933);
    }

    #[test]
    fn test_convert_sample() {
        let lines = convert_constellation_lines(SAMPLE).unwrap();
        let ids: Vec<&str> = lines.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["And", "Ori"]);

        let ori = &lines["Ori"];
        assert_eq!(ori.len(), 2);
        assert_eq!(ori[0][0], [5.91933, 7.41]);
        assert_eq!(ori[1][0], [17.6, -1.2]);

        assert_eq!(lines["And"][0][0], [0.14, 29.09]);
    }

    #[test]
    fn test_short_position_is_rejected() {
        let bad = r#"{"features": [{"id": "Leo", "geometry": {"coordinates": [[[150.0]]]}}]}"#;
        let err = convert_constellation_lines(bad).unwrap_err();
        assert!(matches!(err, BoundsError::Geometry { ref id, .. } if id == "Leo"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            convert_constellation_lines("{\"features\": 3}"),
            Err(BoundsError::Json(_))
        ));
    }

    #[test]
    fn test_to_json_sorted_keys() {
        let lines = convert_constellation_lines(SAMPLE).unwrap();
        let json = to_json(&lines).unwrap();
        assert!(json.find("\"And\"").unwrap() < json.find("\"Ori\"").unwrap());
        let back: ConstellationLines = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lines);
    }
}
