//! Marching-cubes case table
//!
//! This crate builds the 256-entry lookup table that maps the sign pattern of
//! a cube's eight corner weights to a triangulated surface patch, and turns
//! corner weights into meshes with it:
//!
//! - [`CubeId`] - 8-bit sign pattern of a cube's corners
//! - [`Rotation`] - One of the 24 proper rotations of the cube
//! - [`Case`] - Crossed edges and triangle list for one cube id
//! - [`CaseTable`] - All 256 cases, expanded from [`REPRESENTATIVES`]
//! - [`TableValidator`] - Reports every invariant violation in a table
//! - [`MeshExtractor`] - Per-cube [`RawMesh`] generation
//! - [`export`] - Text renderings of a table

mod case;
mod cube_id;
mod error;
mod extract;
mod representatives;
mod table;
mod validator;
pub mod export;
pub mod symmetry;

pub use case::{mirror_case, rotate_case, Case};
pub use cube_id::{is_positive, CubeId};
pub use error::{CubeError, TableError};
pub use extract::{extract, MeshExtractor, RawMesh};
pub use representatives::{Representative, REPRESENTATIVES};
pub use symmetry::{
    group_classification, mirror_corner, mirror_cube_id, mirror_edge, orbit_of, rotate_corner,
    rotate_cube_id, rotate_edge, Rotation,
};
pub use table::{CaseTable, CaseTableBuilder};
pub use validator::TableValidator;

// Re-export the geometry types for convenience
pub use cubecase_math::{Corner, Edge, EdgeId, Vec3, EDGES};
