//! Case table validation
//!
//! The [`TableValidator`] checks a built table against the invariants every
//! entry must satisfy: whole triangles, triangle entries inside the edge
//! list, edge lists that match the sign pattern, and empty boundary cases.

use crate::cube_id::CubeId;
use crate::error::TableError;
use crate::table::CaseTable;

/// Static checker for [`CaseTable`] contents
///
/// # Example
/// ```
/// use cubecase_core::{CaseTable, TableValidator};
///
/// let table = CaseTable::build();
/// assert!(TableValidator::validate(&table).is_empty());
/// ```
pub struct TableValidator;

impl TableValidator {
    /// Validate a table, returning all errors found
    ///
    /// Returns an empty vector if every entry is consistent.
    pub fn validate(table: &CaseTable) -> Vec<TableError> {
        let mut errors = Vec::new();

        for (id, case) in table.iter() {
            let cube_id = id.bits();

            if (id == CubeId::EMPTY || id == CubeId::FULL) && !case.is_empty() {
                errors.push(TableError::NonEmptyBoundary(cube_id));
            }

            let triangles = case.triangles();
            if triangles.len() % 3 != 0 {
                errors.push(TableError::IncompleteTriangle { cube_id, len: triangles.len() });
            }

            let edge_count = case.edges().len();
            if let Some(&index) = triangles.iter().find(|&&i| i as usize >= edge_count) {
                errors.push(TableError::TriangleIndexOutOfRange { cube_id, index, edge_count });
            }

            if !case.crosses_edges_of(id) {
                errors.push(TableError::EdgeMismatch(cube_id));
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(table: &CaseTable) -> Result<(), Vec<TableError>> {
        let errors = Self::validate(table);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
