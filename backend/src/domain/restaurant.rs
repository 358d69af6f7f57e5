//! Restaurant entity produced from OpenStreetMap elements.
//!
//! Restaurants are owned by the caller once returned; nothing in the crate
//! keeps a reference after a lookup completes.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// OpenStreetMap element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmElementKind {
    /// A single point.
    Node,
    /// An ordered list of nodes, typically a building outline.
    Way,
    /// A grouping of other elements.
    Relation,
}

impl OsmElementKind {
    /// Lowercase OSM name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }
}

impl fmt::Display for OsmElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable restaurant identity derived from the source OSM element.
///
/// Renders as `<kind>/<id>`, matching openstreetmap.org URL paths.
///
/// # Examples
/// ```
/// use restaurant_discovery::domain::{OsmElementKind, RestaurantId};
///
/// let id = RestaurantId::new(OsmElementKind::Way, 42);
/// assert_eq!(id.to_string(), "way/42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RestaurantId {
    kind: OsmElementKind,
    osm_id: i64,
}

impl RestaurantId {
    /// Build an identifier from an element kind and OSM id.
    pub fn new(kind: OsmElementKind, osm_id: i64) -> Self {
        Self { kind, osm_id }
    }

    /// Source element kind.
    pub fn kind(&self) -> OsmElementKind {
        self.kind
    }

    /// Raw OSM identifier.
    pub fn osm_id(&self) -> i64 {
        self.osm_id
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.osm_id)
    }
}

impl Serialize for RestaurantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// An eating establishment discovered near a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Identity of the source OSM element.
    pub id: RestaurantId,
    /// Display name, when tagged.
    pub name: Option<String>,
    /// Representative location of the establishment.
    pub location: GeoPoint,
    /// Cuisine values in tag order.
    pub cuisine: Vec<String>,
    /// Single-line postal address assembled from `addr:*` tags.
    pub address: Option<String>,
    /// Raw `opening_hours` tag value.
    pub opening_hours: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Website URL.
    pub website: Option<String>,
}

impl Restaurant {
    /// Build a restaurant with only identity and location populated.
    pub fn new(id: RestaurantId, location: GeoPoint) -> Self {
        Self {
            id,
            name: None,
            location,
            cuisine: Vec::new(),
            address: None,
            opening_hours: None,
            phone: None,
            website: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_with_string_id_and_camel_case_fields() {
        let restaurant = Restaurant {
            opening_hours: Some("Mo-Su 12:00-22:00".to_owned()),
            cuisine: vec!["pizza".to_owned()],
            ..Restaurant::new(
                RestaurantId::new(OsmElementKind::Node, 7),
                GeoPoint::new(51.5, -0.12),
            )
            .with_name("Luigi's")
        };

        let value = serde_json::to_value(&restaurant).expect("restaurant serialises");
        assert_eq!(
            value,
            json!({
                "id": "node/7",
                "name": "Luigi's",
                "location": { "latitude": 51.5, "longitude": -0.12 },
                "cuisine": ["pizza"],
                "address": null,
                "openingHours": "Mo-Su 12:00-22:00",
                "phone": null,
                "website": null
            })
        );
    }

    #[test]
    fn geo_point_detects_non_finite_components() {
        assert!(GeoPoint::new(1.0, 2.0).is_finite());
        assert!(!GeoPoint::new(f64::NAN, 2.0).is_finite());
        assert!(!GeoPoint::new(1.0, f64::INFINITY).is_finite());
    }
}
