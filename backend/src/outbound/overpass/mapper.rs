//! Conversion of raw Overpass elements into domain restaurants.
//!
//! Restaurant elements come from `out body`; the untagged elements that
//! follow (`>; out skel qt;`) only supply node positions and way node lists,
//! so ways and relations without their own coordinates can still be located.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::dto::{OverpassElement, OverpassMember};
use crate::domain::ports::define_port_error;
use crate::domain::{GeoPoint, OsmElementKind, Restaurant, RestaurantId};

const AMENITY_TAG: &str = "amenity";
const RESTAURANT_AMENITY: &str = "restaurant";

define_port_error! {
    /// Errors raised while converting Overpass elements.
    pub enum RestaurantMappingError {
        /// An element carried data that cannot describe a restaurant.
        MalformedElement { element: String, message: String } =>
            "malformed element {element}: {message}",
    }
}

/// Maps raw Overpass elements to restaurants.
#[cfg_attr(test, mockall::automock)]
pub trait RestaurantMapper: Send + Sync {
    /// Convert one response's elements into restaurants.
    ///
    /// # Errors
    ///
    /// Returns [`RestaurantMappingError`] when an element is malformed.
    fn map_to_restaurants(
        &self,
        elements: Vec<OverpassElement>,
    ) -> Result<Vec<Restaurant>, RestaurantMappingError>;
}

/// Default mapper for OSM `amenity=restaurant` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsmRestaurantMapper;

impl RestaurantMapper for OsmRestaurantMapper {
    fn map_to_restaurants(
        &self,
        elements: Vec<OverpassElement>,
    ) -> Result<Vec<Restaurant>, RestaurantMappingError> {
        let index = ElementIndex::build(&elements);

        let mut seen = HashSet::new();
        let mut restaurants = Vec::new();
        for element in elements {
            if element.tag(AMENITY_TAG) != Some(RESTAURANT_AMENITY) {
                continue;
            }
            let id = RestaurantId::new(element.kind, element.id);
            if !seen.insert(id) {
                continue;
            }
            let Some(location) = resolve_location(&element, &index) else {
                warn!(element = %id, "skipping restaurant without resolvable location");
                continue;
            };
            if !location.is_finite() {
                return Err(RestaurantMappingError::malformed_element(
                    id.to_string(),
                    "location includes non-finite coordinates",
                ));
            }
            restaurants.push(build_restaurant(id, location, &element));
        }
        Ok(restaurants)
    }
}

/// Positions and way node lists from skeleton output, keyed by OSM id.
struct ElementIndex {
    nodes: HashMap<i64, GeoPoint>,
    ways: HashMap<i64, Vec<i64>>,
}

impl ElementIndex {
    fn build(elements: &[OverpassElement]) -> Self {
        let mut nodes = HashMap::new();
        let mut ways = HashMap::new();
        for element in elements {
            match element.kind {
                OsmElementKind::Node => {
                    if let Some(point) = element.own_position() {
                        nodes.entry(element.id).or_insert(point);
                    }
                }
                OsmElementKind::Way if !element.nodes.is_empty() => {
                    ways.entry(element.id).or_insert_with(|| element.nodes.clone());
                }
                _ => {}
            }
        }
        Self { nodes, ways }
    }

    fn node_points<'a>(&'a self, ids: &'a [i64]) -> impl Iterator<Item = GeoPoint> + 'a {
        ids.iter().filter_map(|id| self.nodes.get(id).copied())
    }

    fn member_points<'a>(
        &'a self,
        members: &'a [OverpassMember],
    ) -> impl Iterator<Item = GeoPoint> + 'a {
        members.iter().flat_map(move |member| {
            let ids: &[i64] = match member.kind {
                OsmElementKind::Node => std::slice::from_ref(&member.reference),
                OsmElementKind::Way => self
                    .ways
                    .get(&member.reference)
                    .map_or(&[][..], Vec::as_slice),
                OsmElementKind::Relation => &[],
            };
            self.node_points(ids)
        })
    }
}

fn resolve_location(element: &OverpassElement, index: &ElementIndex) -> Option<GeoPoint> {
    element
        .own_position()
        .or_else(|| element.center.map(GeoPoint::from))
        .or_else(|| element.bounds.map(|bounds| bounds.midpoint()))
        .or_else(|| {
            element
                .geometry
                .as_deref()
                .and_then(|points| centroid(points.iter().copied().map(GeoPoint::from)))
        })
        .or_else(|| centroid(index.node_points(&element.nodes)))
        .or_else(|| centroid(index.member_points(&element.members)))
}

fn centroid(points: impl Iterator<Item = GeoPoint>) -> Option<GeoPoint> {
    let (count, lat_sum, lon_sum) = points.fold((0_u32, 0.0, 0.0), |(count, lat, lon), point| {
        (count + 1, lat + point.latitude, lon + point.longitude)
    });
    if count == 0 {
        return None;
    }
    let count = f64::from(count);
    Some(GeoPoint::new(lat_sum / count, lon_sum / count))
}

fn build_restaurant(id: RestaurantId, location: GeoPoint, element: &OverpassElement) -> Restaurant {
    Restaurant {
        id,
        name: non_blank(element.tag("name")),
        location,
        cuisine: element
            .tag("cuisine")
            .map(split_cuisine)
            .unwrap_or_default(),
        address: compose_address(element),
        opening_hours: non_blank(element.tag("opening_hours")),
        phone: non_blank(element.tag("phone")).or_else(|| non_blank(element.tag("contact:phone"))),
        website: non_blank(element.tag("website"))
            .or_else(|| non_blank(element.tag("contact:website"))),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
}

fn split_cuisine(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect()
}

fn compose_address(element: &OverpassElement) -> Option<String> {
    let street_line = join_present(
        &[element.tag("addr:housenumber"), element.tag("addr:street")],
        " ",
    );
    let locality_line = join_present(&[element.tag("addr:postcode"), element.tag("addr:city")], " ");
    join_present(&[street_line.as_deref(), locality_line.as_deref()], ", ")
}

fn join_present(parts: &[Option<&str>], separator: &str) -> Option<String> {
    let present: Vec<&str> = parts
        .iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(separator))
    }
}

#[cfg(test)]
mod tests {
    //! Mapping coverage for body and skeleton elements.

    use super::*;
    use crate::outbound::overpass::dto::{OverpassBounds, OverpassCoordinate, OverpassResponse};

    fn restaurant_node(id: i64, lat: f64, lon: f64) -> OverpassElement {
        OverpassElement::node(id, lat, lon).with_tag(AMENITY_TAG, RESTAURANT_AMENITY)
    }

    fn map(elements: Vec<OverpassElement>) -> Vec<Restaurant> {
        OsmRestaurantMapper
            .map_to_restaurants(elements)
            .expect("mapping should succeed")
    }

    #[test]
    fn maps_tagged_nodes_with_attributes() {
        let element = restaurant_node(1, 51.5, -0.1)
            .with_tag("name", "Dishoom")
            .with_tag("cuisine", "indian; breakfast ;")
            .with_tag("addr:housenumber", "12")
            .with_tag("addr:street", "Upper St Martin's Lane")
            .with_tag("addr:postcode", "WC2H 9FB")
            .with_tag("addr:city", "London")
            .with_tag("opening_hours", "Mo-Fr 08:00-23:00")
            .with_tag("contact:phone", "+44 20 7420 9320")
            .with_tag("website", "https://www.dishoom.com");

        let restaurants = map(vec![element]);
        assert_eq!(restaurants.len(), 1);
        let restaurant = &restaurants[0];
        assert_eq!(restaurant.id.to_string(), "node/1");
        assert_eq!(restaurant.name.as_deref(), Some("Dishoom"));
        assert_eq!(restaurant.location, GeoPoint::new(51.5, -0.1));
        assert_eq!(restaurant.cuisine, vec!["indian", "breakfast"]);
        assert_eq!(
            restaurant.address.as_deref(),
            Some("12 Upper St Martin's Lane, WC2H 9FB London")
        );
        assert_eq!(restaurant.opening_hours.as_deref(), Some("Mo-Fr 08:00-23:00"));
        assert_eq!(restaurant.phone.as_deref(), Some("+44 20 7420 9320"));
        assert_eq!(restaurant.website.as_deref(), Some("https://www.dishoom.com"));
    }

    #[test]
    fn ignores_untagged_skeleton_elements_and_other_amenities() {
        let restaurants = map(vec![
            restaurant_node(1, 1.0, 1.0),
            OverpassElement::node(2, 2.0, 2.0),
            OverpassElement::node(3, 3.0, 3.0).with_tag(AMENITY_TAG, "cafe"),
        ]);
        let ids: Vec<String> = restaurants.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["node/1"]);
    }

    #[test]
    fn locates_ways_from_skeleton_nodes() {
        let mut way = OverpassElement::new(OsmElementKind::Way, 20)
            .with_tag(AMENITY_TAG, RESTAURANT_AMENITY);
        way.nodes = vec![100, 101, 102, 999];

        let restaurants = map(vec![
            way,
            OverpassElement::node(100, 10.0, 20.0),
            OverpassElement::node(101, 12.0, 22.0),
            OverpassElement::node(102, 14.0, 24.0),
        ]);

        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].id.to_string(), "way/20");
        assert_eq!(restaurants[0].location, GeoPoint::new(12.0, 22.0));
    }

    #[test]
    fn locates_relations_from_member_ways_and_nodes() {
        let body = r#"{
            "elements": [
                {
                    "type": "relation",
                    "id": 5,
                    "members": [ { "type": "way", "ref": 20, "role": "outer" } ],
                    "tags": { "amenity": "restaurant", "name": "Harbour Hall" }
                },
                { "type": "way", "id": 20, "nodes": [100, 101] },
                { "type": "node", "id": 100, "lat": 10.0, "lon": 20.0 },
                { "type": "node", "id": 101, "lat": 12.0, "lon": 22.0 }
            ]
        }"#;
        let response: OverpassResponse = serde_json::from_str(body).expect("response decodes");

        let restaurants = map(response.elements);

        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].id.to_string(), "relation/5");
        assert_eq!(restaurants[0].name.as_deref(), Some("Harbour Hall"));
        assert_eq!(restaurants[0].location, GeoPoint::new(11.0, 21.0));
    }

    #[test]
    fn relation_member_nodes_count_towards_location() {
        let mut relation = OverpassElement::new(OsmElementKind::Relation, 6)
            .with_tag(AMENITY_TAG, RESTAURANT_AMENITY);
        relation.members = vec![
            OverpassMember::new(OsmElementKind::Node, 100),
            OverpassMember::new(OsmElementKind::Node, 101),
            OverpassMember::new(OsmElementKind::Relation, 7),
        ];

        let restaurants = map(vec![
            relation,
            OverpassElement::node(100, 0.0, 0.0),
            OverpassElement::node(101, 4.0, 2.0),
        ]);

        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].location, GeoPoint::new(2.0, 1.0));
    }

    #[test]
    fn prefers_center_then_bounds_then_geometry() {
        let mut centred = OverpassElement::new(OsmElementKind::Relation, 1)
            .with_tag(AMENITY_TAG, RESTAURANT_AMENITY);
        centred.center = Some(OverpassCoordinate { lat: 5.0, lon: 6.0 });
        centred.bounds = Some(OverpassBounds {
            minlat: 0.0,
            minlon: 0.0,
            maxlat: 2.0,
            maxlon: 2.0,
        });

        let mut bounded = OverpassElement::new(OsmElementKind::Relation, 2)
            .with_tag(AMENITY_TAG, RESTAURANT_AMENITY);
        bounded.bounds = centred.bounds;

        let mut shaped =
            OverpassElement::new(OsmElementKind::Way, 3).with_tag(AMENITY_TAG, RESTAURANT_AMENITY);
        shaped.geometry = Some(vec![
            OverpassCoordinate { lat: 0.0, lon: 0.0 },
            OverpassCoordinate { lat: 4.0, lon: 8.0 },
        ]);

        let restaurants = map(vec![centred, bounded, shaped]);
        let locations: Vec<GeoPoint> = restaurants.iter().map(|r| r.location).collect();
        assert_eq!(
            locations,
            vec![
                GeoPoint::new(5.0, 6.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(2.0, 4.0),
            ]
        );
    }

    #[test]
    fn skips_restaurants_without_location() {
        let orphan =
            OverpassElement::new(OsmElementKind::Way, 7).with_tag(AMENITY_TAG, RESTAURANT_AMENITY);
        let restaurants = map(vec![orphan, restaurant_node(8, 1.0, 1.0)]);
        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].id.to_string(), "node/8");
    }

    #[test]
    fn keeps_first_occurrence_of_duplicate_elements() {
        let restaurants = map(vec![
            restaurant_node(1, 1.0, 1.0).with_tag("name", "First"),
            restaurant_node(1, 1.0, 1.0).with_tag("name", "Second"),
        ]);
        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].name.as_deref(), Some("First"));
    }

    #[test]
    fn preserves_input_order() {
        let restaurants = map(vec![
            restaurant_node(3, 1.0, 1.0),
            restaurant_node(1, 1.0, 1.0),
            restaurant_node(2, 1.0, 1.0),
        ]);
        let ids: Vec<i64> = restaurants.iter().map(|r| r.id.osm_id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn non_finite_locations_fail_the_batch() {
        let error = OsmRestaurantMapper
            .map_to_restaurants(vec![restaurant_node(9, f64::NAN, 1.0)])
            .expect_err("NaN latitude must fail");
        assert_eq!(
            error,
            RestaurantMappingError::malformed_element(
                "node/9",
                "location includes non-finite coordinates"
            )
        );
    }

    #[test]
    fn blank_tags_are_treated_as_absent() {
        let restaurants = map(vec![
            restaurant_node(1, 1.0, 1.0)
                .with_tag("name", "  ")
                .with_tag("addr:city", "Leeds"),
        ]);
        assert_eq!(restaurants[0].name, None);
        assert!(restaurants[0].cuisine.is_empty());
        assert_eq!(restaurants[0].address.as_deref(), Some("Leeds"));
    }
}
