//! Error types
//!
//! [`CubeError`] is returned to callers that pass ids, weights, or authored
//! cases outside their valid domain. [`TableError`] describes a broken
//! invariant in a built table; those come from wrong representative data or
//! symmetry definitions and are only reported by construction and validation.

use std::fmt;

/// Caller-correctable domain error
#[derive(Debug, Clone, PartialEq)]
pub enum CubeError {
    /// Corner id outside 0-7
    CornerOutOfRange(usize),
    /// Edge id outside 0-11
    EdgeOutOfRange(usize),
    /// Rotation id outside 0-23
    RotationOutOfRange(usize),
    /// Cube id outside 0-255
    CubeIdOutOfRange(usize),
    /// Weight slice does not hold exactly 8 samples
    WeightCount(usize),
    /// Triangle entry points past the end of the case's edge list
    TriangleIndexOutOfRange { index: u32, edge_count: usize },
    /// Triangle list length is not a multiple of 3
    IncompleteTriangle(usize),
    /// Case edges differ from the edges crossed by the cube id's sign pattern
    EdgeMismatch { cube_id: u8 },
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::CornerOutOfRange(id) => write!(f, "Corner id {} out of range 0-7", id),
            CubeError::EdgeOutOfRange(id) => write!(f, "Edge id {} out of range 0-11", id),
            CubeError::RotationOutOfRange(id) => write!(f, "Rotation id {} out of range 0-23", id),
            CubeError::CubeIdOutOfRange(id) => write!(f, "Cube id {} out of range 0-255", id),
            CubeError::WeightCount(len) => write!(f, "Expected 8 corner weights, got {}", len),
            CubeError::TriangleIndexOutOfRange { index, edge_count } => {
                write!(f, "Triangle index {} out of range for {} edges", index, edge_count)
            }
            CubeError::IncompleteTriangle(len) => {
                write!(f, "Triangle list length {} is not a multiple of 3", len)
            }
            CubeError::EdgeMismatch { cube_id } => {
                write!(f, "Case edges do not match the edges crossed by cube id {}", cube_id)
            }
        }
    }
}

impl std::error::Error for CubeError {}

/// Invariant violation found in a case table
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// No representative reached this slot
    Unfilled(u8),
    /// Two different representatives wrote the same slot
    SlotConflict { cube_id: u8, first: u8, second: u8 },
    /// Triangle entry points past the end of the edge list
    TriangleIndexOutOfRange { cube_id: u8, index: u32, edge_count: usize },
    /// Triangle list length is not a multiple of 3
    IncompleteTriangle { cube_id: u8, len: usize },
    /// Edge list differs from the edges crossed by the sign pattern
    EdgeMismatch(u8),
    /// Slot 0 or 255 holds geometry
    NonEmptyBoundary(u8),
    /// Representative data names an invalid edge or triangle
    MalformedRepresentative(u8),
}

impl TableError {
    /// The cube id the finding is about (the base id for a malformed representative)
    pub fn cube_id(&self) -> u8 {
        match self {
            TableError::Unfilled(id)
            | TableError::EdgeMismatch(id)
            | TableError::NonEmptyBoundary(id)
            | TableError::MalformedRepresentative(id) => *id,
            TableError::SlotConflict { cube_id, .. }
            | TableError::TriangleIndexOutOfRange { cube_id, .. }
            | TableError::IncompleteTriangle { cube_id, .. } => *cube_id,
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Unfilled(id) => write!(f, "Table slot {} was never filled", id),
            TableError::SlotConflict { cube_id, first, second } => write!(
                f,
                "Table slot {} written by representatives {} and {}",
                cube_id, first, second
            ),
            TableError::TriangleIndexOutOfRange { cube_id, index, edge_count } => write!(
                f,
                "Case {}: triangle index {} out of range for {} edges",
                cube_id, index, edge_count
            ),
            TableError::IncompleteTriangle { cube_id, len } => write!(
                f,
                "Case {}: triangle list length {} is not a multiple of 3",
                cube_id, len
            ),
            TableError::EdgeMismatch(id) => {
                write!(f, "Case {}: edges differ from the crossed edges", id)
            }
            TableError::NonEmptyBoundary(id) => write!(f, "Case {} must be empty", id),
            TableError::MalformedRepresentative(base) => {
                write!(f, "Representative for base {} is malformed", base)
            }
        }
    }
}

impl std::error::Error for TableError {}
