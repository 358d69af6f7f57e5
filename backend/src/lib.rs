//! Restaurant discovery backend.
//!
//! Finds restaurants near a coordinate via the OpenStreetMap Overpass API and
//! validates login credentials, behind a small actix-web HTTP surface.
//!
//! Layout follows ports and adapters: [`domain`] holds entities, validation,
//! and the port traits; [`outbound`] implements them against external
//! systems; [`inbound`] exposes them over HTTP.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
