use glam::DVec2;
use serde_json::Value;

use crate::map::{Country, Geometry, Point};

/// Convert a feature collection into countries, in feature order.
///
/// Features missing an id, name or geometry, or with a geometry type other
/// than `Polygon`/`MultiPolygon`, are dropped. Individual malformed points are
/// dropped from their ring. A document without a `features` list yields no
/// countries.
pub fn parse(collection: &Value) -> Vec<Country> {
    let Some(features) = collection.get("features").and_then(Value::as_array) else {
        log::warn!("Feature collection has no features list");
        return Vec::new();
    };

    let countries: Vec<Country> = features.iter().filter_map(parse_country).collect();
    log::info!(
        "Parsed {} countries ({} features dropped)",
        countries.len(),
        features.len() - countries.len()
    );
    countries
}

fn parse_country(feature: &Value) -> Option<Country> {
    let id = feature.get("id")?.as_str()?;
    let name = feature.get("properties")?.get("name")?.as_str()?;
    let geometry = feature.get("geometry")?.as_object()?;
    let kind = geometry.get("type")?.as_str()?;
    let coordinates = || geometry.get("coordinates");

    let geometry = match kind {
        "Polygon" => Geometry::Polygon(parse_polygon(coordinates()?)?),
        "MultiPolygon" => Geometry::MultiPolygon(
            coordinates()?
                .as_array()?
                .iter()
                .map(parse_polygon)
                .collect::<Option<_>>()?,
        ),
        other => {
            log::warn!("Unrecognized geometry type {other:?} for feature {id}");
            return None;
        }
    };

    Country::new(id, name, geometry)
}

/// All rings of a polygon flattened into one point sequence.
/// `None` if the rings are not nested arrays.
fn parse_polygon(rings: &Value) -> Option<Vec<Point>> {
    let mut points = Vec::new();
    for ring in rings.as_array()? {
        points.extend(ring.as_array()?.iter().filter_map(parse_point));
    }
    Some(points)
}

/// `[x, y, ...]`; extra components such as altitude are ignored
fn parse_point(point: &Value) -> Option<Point> {
    match point.as_array()?.as_slice() {
        [x, y, ..] => Some(DVec2::new(x.as_f64()?, y.as_f64()?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Mutex, Once};

    fn feature(id: &str, name: &str, kind: &str, coordinates: Value) -> Value {
        json!({
            "type": "Feature",
            "id": id,
            "properties": { "name": name },
            "geometry": { "type": kind, "coordinates": coordinates }
        })
    }

    fn collection(features: Vec<Value>) -> Value {
        json!({ "type": "FeatureCollection", "features": features })
    }

    fn triangle() -> Value {
        json!([[[0, 0], [1, 0], [1, 1]]])
    }

    /// Collects warnings so tests can check what was reported
    struct WarningLog {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for WarningLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.lines.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static WARNINGS: WarningLog = WarningLog {
        lines: Mutex::new(Vec::new()),
    };

    fn capture_warnings() -> &'static WarningLog {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            if log::set_logger(&WARNINGS).is_ok() {
                log::set_max_level(log::LevelFilter::Warn);
            }
        });
        &WARNINGS
    }

    #[test]
    fn test_parse_polygon_and_multipolygon_in_order() {
        let input = collection(vec![
            feature("FRA", "France", "MultiPolygon", json!([[[[2, 46], [3, 47], [2, 48]]], [[[9, 42], [9.5, 42.5], [9, 43]]]])),
            feature("CHE", "Switzerland", "Polygon", triangle()),
        ]);

        let countries = parse(&input);
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].id(), "FRA");
        assert_eq!(countries[1].name(), "Switzerland");

        match countries[0].geometry() {
            Geometry::MultiPolygon(rings) => {
                assert_eq!(rings.len(), 2);
                assert_eq!(rings[1][1], DVec2::new(9.5, 42.5));
            }
            other => panic!("expected multipolygon, got {other:?}"),
        }
        assert_eq!(
            countries[1].geometry(),
            &Geometry::Polygon(vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(1.0, 1.0)])
        );
    }

    #[test]
    fn test_polygon_rings_are_flattened() {
        let coordinates = json!([[[0, 0], [1, 0], [1, 1]], [[0.1, 0.1], [0.9, 0.1], [0.5, 0.9]]]);
        let countries = parse(&collection(vec![feature("LKE", "Lake", "Polygon", coordinates)]));

        let Geometry::Polygon(points) = countries[0].geometry() else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 6);
        assert_eq!(points[3], DVec2::new(0.1, 0.1));
    }

    #[test]
    fn test_unrecognized_geometry_is_dropped() {
        let input = collection(vec![
            feature("AAA", "A", "Polygon", triangle()),
            feature("BBB", "B", "LineString", json!([[0, 0], [1, 1]])),
            feature("CCC", "C", "Polygon", triangle()),
        ]);
        let ids: Vec<_> = parse(&input).iter().map(|c| c.id().to_string()).collect();
        assert_eq!(ids, vec!["AAA", "CCC"]);
    }

    #[test]
    fn test_unrecognized_geometry_is_reported() {
        let warnings = capture_warnings();
        let input = collection(vec![feature("ZZZ", "Z", "LineString", json!([[0, 0], [1, 1]]))]);
        assert!(parse(&input).is_empty());

        let lines = warnings.lines.lock().unwrap();
        assert!(lines.iter().any(|line| line.contains("\"LineString\"") && line.contains("ZZZ")));
    }

    #[test]
    fn test_incomplete_features_are_dropped() {
        let input = collection(vec![
            json!({ "properties": { "name": "No id" }, "geometry": { "type": "Polygon", "coordinates": [] } }),
            json!({ "id": "NNM", "properties": {}, "geometry": { "type": "Polygon", "coordinates": [] } }),
            json!({ "id": "NGM", "properties": { "name": "No geometry" } }),
            json!({ "id": 4, "properties": { "name": "Numeric id" }, "geometry": { "type": "Polygon", "coordinates": [] } }),
            json!({ "id": "NCO", "properties": { "name": "No coordinates" }, "geometry": { "type": "Polygon" } }),
            feature("", "Empty id", "Polygon", triangle()),
            feature("BAD", "Flat rings", "Polygon", json!([1, 2, 3])),
            feature("OK", "Valid", "Polygon", triangle()),
        ]);
        let countries = parse(&input);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].id(), "OK");
    }

    #[test]
    fn test_short_points_are_dropped() {
        let coordinates = json!([[[5], [5, 6], ["a", 1], [7, 8, 100]]]);
        let countries = parse(&collection(vec![feature("PTS", "Points", "Polygon", coordinates)]));
        assert_eq!(
            countries[0].geometry(),
            &Geometry::Polygon(vec![DVec2::new(5.0, 6.0), DVec2::new(7.0, 8.0)])
        );
    }

    #[test]
    fn test_empty_rings_are_kept() {
        let countries = parse(&collection(vec![feature("EMP", "Empty", "MultiPolygon", json!([[[]], []]))]));
        assert_eq!(countries[0].geometry(), &Geometry::MultiPolygon(vec![vec![], vec![]]));
    }

    #[test]
    fn test_missing_features_yields_nothing() {
        assert!(parse(&json!({})).is_empty());
        assert!(parse(&json!({ "features": "nope" })).is_empty());
        assert!(parse(&json!([1, 2, 3])).is_empty());
        assert!(parse(&collection(vec![])).is_empty());
    }

    #[test]
    fn test_parse_is_repeatable() {
        let input = collection(vec![
            feature("AAA", "A", "Polygon", triangle()),
            feature("-99", "Somaliland", "Polygon", triangle()),
            feature("-99", "Northern Cyprus", "Polygon", triangle()),
        ]);
        let first = parse(&input);
        assert_eq!(first, parse(&input));
        assert_eq!(first.len(), 3);
    }
}
