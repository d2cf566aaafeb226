//! Utilities.

pub use self::bbox::BoundingBox3d;

pub mod bbox;
