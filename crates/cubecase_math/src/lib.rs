//! Unit Cube Geometry
//!
//! This crate provides the fixed geometry the marching-cubes case table is
//! expressed in.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Corner`] - One of the 8 cube corners, position taken from the id bits
//! - [`EdgeId`] - Global index (0-11) of one of the 12 cube edges
//! - [`Edge`] - A corner pair, with interpolation along it

mod vec3;
pub mod cube;

pub use vec3::Vec3;
pub use cube::{Corner, Edge, EdgeId, EDGES, EDGE_LOOKUP, corner_position, edge_interpolated_point, edge_interpolated_point_at};
