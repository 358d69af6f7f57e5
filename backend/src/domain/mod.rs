//! Domain primitives, validation, and ports.
//!
//! Purpose: define strongly typed entities used by the inbound and outbound
//! adapters. Keep types transport agnostic and document invariants in each
//! type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - LoginCredentials: validated login input.
//! - Restaurant: establishment discovered near a coordinate.
//! - UserId: authenticated user identity.

pub mod auth;
pub mod error;
pub mod ports;
pub mod restaurant;
pub mod user;

pub use self::auth::{LoginCredentials, LoginField, LoginRule, LoginValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::restaurant::{GeoPoint, OsmElementKind, Restaurant, RestaurantId};
pub use self::user::{UserId, UserValidationError};
