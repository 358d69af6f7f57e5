//! Transport DTOs for decoding Overpass JSON responses.
//!
//! Only the fields the restaurant mapper reads are modelled; anything else
//! Overpass sends is ignored during decoding.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{GeoPoint, OsmElementKind};

/// Top-level Overpass interpreter response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OverpassResponse {
    /// Returned elements in Overpass output order.
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
    /// Overpass API version.
    #[serde(default)]
    pub version: Option<f64>,
    /// Name of the generating server.
    #[serde(default)]
    pub generator: Option<String>,
}

/// Raw OSM element as emitted by `out body` and `out skel`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverpassElement {
    /// Element kind.
    #[serde(rename = "type")]
    pub kind: OsmElementKind,
    /// OSM identifier, unique per kind.
    pub id: i64,
    /// Node latitude.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Node longitude.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Centre point when requested with `out center`.
    #[serde(default)]
    pub center: Option<OverpassCoordinate>,
    /// Bounding box when requested with `out bb`.
    #[serde(default)]
    pub bounds: Option<OverpassBounds>,
    /// Full geometry when requested with `out geom`.
    #[serde(default)]
    pub geometry: Option<Vec<OverpassCoordinate>>,
    /// Node references of a way.
    #[serde(default)]
    pub nodes: Vec<i64>,
    /// Members of a relation.
    #[serde(default)]
    pub members: Vec<OverpassMember>,
    /// OSM tags; skeleton output carries none.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// Relation member reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverpassMember {
    /// Kind of the referenced element.
    #[serde(rename = "type")]
    pub kind: OsmElementKind,
    /// Identifier of the referenced element.
    #[serde(rename = "ref")]
    pub reference: i64,
    /// Member role, often empty.
    #[serde(default)]
    pub role: String,
}

impl OverpassMember {
    /// Reference an element without a role.
    pub fn new(kind: OsmElementKind, reference: i64) -> Self {
        Self {
            kind,
            reference,
            role: String::new(),
        }
    }
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OverpassCoordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl From<OverpassCoordinate> for GeoPoint {
    fn from(value: OverpassCoordinate) -> Self {
        GeoPoint::new(value.lat, value.lon)
    }
}

/// Element bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OverpassBounds {
    /// Southern edge.
    pub minlat: f64,
    /// Western edge.
    pub minlon: f64,
    /// Northern edge.
    pub maxlat: f64,
    /// Eastern edge.
    pub maxlon: f64,
}

impl OverpassBounds {
    /// Midpoint of the box.
    pub fn midpoint(&self) -> GeoPoint {
        GeoPoint::new(
            (self.minlat + self.maxlat) / 2.0,
            (self.minlon + self.maxlon) / 2.0,
        )
    }
}

impl OverpassElement {
    /// Build a bare element with no coordinates or tags.
    pub fn new(kind: OsmElementKind, id: i64) -> Self {
        Self {
            kind,
            id,
            lat: None,
            lon: None,
            center: None,
            bounds: None,
            geometry: None,
            nodes: Vec::new(),
            members: Vec::new(),
            tags: BTreeMap::new(),
        }
    }

    /// Build a node at the given position.
    pub fn node(id: i64, lat: f64, lon: f64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
            ..Self::new(OsmElementKind::Node, id)
        }
    }

    /// Add a tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Look up a tag value.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Own coordinates, when both components are present.
    pub fn own_position(&self) -> Option<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}
