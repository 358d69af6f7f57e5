//! Overpass QL query construction for nearby-restaurant lookups.

use crate::domain::ports::NearbyQuery;

/// Server-side processing timeout embedded in the query, in seconds.
pub const DEFAULT_QUERY_TIMEOUT_SECONDS: u32 = 25;

const ELEMENT_KINDS: [&str; 3] = ["node", "way", "relation"];
const RESTAURANT_SELECTOR: &str = r#"["amenity"="restaurant"]"#;

/// Build the Overpass QL text selecting restaurants around a point.
///
/// Numbers are substituted verbatim using their shortest display form, so a
/// radius of `1000.0` renders as `1000`. The output recurses down (`>`) so way
/// and relation members are returned as skeleton elements for geometry.
pub fn build_nearby_restaurants_query(query: &NearbyQuery, timeout_seconds: u32) -> String {
    let around = format!(
        "(around:{radius},{lat},{lon})",
        radius = query.radius_metres,
        lat = query.latitude,
        lon = query.longitude,
    );
    let clauses = ELEMENT_KINDS
        .iter()
        .map(|kind| format!("  {kind}{RESTAURANT_SELECTOR}{around};"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("[out:json][timeout:{timeout_seconds}];\n(\n{clauses}\n);\nout body;\n>;\nout skel qt;")
}

#[cfg(test)]
mod tests {
    //! Query text coverage.

    use super::*;
    use rstest::rstest;

    #[test]
    fn default_radius_query_matches_wire_template() {
        let query = build_nearby_restaurants_query(
            &NearbyQuery::new(51.5074, -0.1278),
            DEFAULT_QUERY_TIMEOUT_SECONDS,
        );
        let expected = concat!(
            "[out:json][timeout:25];\n",
            "(\n",
            "  node[\"amenity\"=\"restaurant\"](around:1000,51.5074,-0.1278);\n",
            "  way[\"amenity\"=\"restaurant\"](around:1000,51.5074,-0.1278);\n",
            "  relation[\"amenity\"=\"restaurant\"](around:1000,51.5074,-0.1278);\n",
            ");\n",
            "out body;\n",
            ">;\n",
            "out skel qt;",
        );
        assert_eq!(query, expected);
    }

    #[rstest]
    #[case(40.7128, -74.006)]
    #[case(-33.8688, 151.2093)]
    #[case(0.0, 0.0)]
    fn every_clause_carries_the_coordinates(#[case] lat: f64, #[case] lon: f64) {
        let query = build_nearby_restaurants_query(&NearbyQuery::new(lat, lon), 25);
        let around = format!("(around:1000,{lat},{lon});");
        for kind in ["node", "way", "relation"] {
            let clause = format!("  {kind}[\"amenity\"=\"restaurant\"]{around}");
            assert_eq!(
                query.matches(clause.as_str()).count(),
                1,
                "{kind} clause should appear exactly once"
            );
        }
        assert_eq!(query.matches("around:").count(), 3);
    }

    #[rstest]
    #[case(250.0, "around:250,")]
    #[case(1500.5, "around:1500.5,")]
    fn explicit_radius_appears_verbatim(#[case] radius: f64, #[case] expected: &str) {
        let query =
            build_nearby_restaurants_query(&NearbyQuery::new(1.0, 2.0).with_radius(radius), 25);
        assert_eq!(query.matches(expected).count(), 3);
        assert!(!query.contains("around:1000,"));
    }

    #[test]
    fn timeout_directive_is_configurable() {
        let query = build_nearby_restaurants_query(&NearbyQuery::new(1.0, 2.0), 60);
        assert!(query.starts_with("[out:json][timeout:60];\n"));
    }
}
