//! The 256-entry case table
//!
//! The table is never written out by hand. Each representative case is
//! expanded across its orbit: first through the 24 rotations of its base id,
//! then, unless the configuration is its own mirror image, through the 24
//! rotations of the mirrored base id using the mirrored case. Together the 20
//! representatives and the two empty boundary cases fill every slot exactly
//! once.

use std::ops::Index;
use std::sync::OnceLock;

use serde::Serialize;

use crate::case::{mirror_case, rotate_case, Case};
use crate::cube_id::CubeId;
use crate::error::{CubeError, TableError};
use crate::representatives::{Representative, REPRESENTATIVES};
use crate::symmetry::{mirror_cube_id, rotate_cube_id, Rotation};
use crate::validator::TableValidator;

/// Run the orbit expansion of `representative`, handing each generated case
/// to `write`
///
/// Returns the ids reached, rotation sweep first, then mirror sweep.
fn expand_orbit(
    representative: &Case,
    base: CubeId,
    mut write: impl FnMut(CubeId, Case),
) -> Vec<CubeId> {
    let mut reached = [false; CubeId::COUNT];
    let mut order = Vec::new();

    for rotation in Rotation::all() {
        let id = rotate_cube_id(base, rotation);
        if reached[id.index()] {
            continue;
        }
        reached[id.index()] = true;
        order.push(id);
        write(id, rotate_case(representative, rotation));
    }

    let mirrored = mirror_cube_id(base);
    if reached[mirrored.index()] {
        log::trace!("base {} is mirror symmetric, orbit size {}", base, order.len());
        return order;
    }

    let mirrored_case = mirror_case(representative);
    for rotation in Rotation::all() {
        let id = rotate_cube_id(mirrored, rotation);
        if reached[id.index()] {
            continue;
        }
        reached[id.index()] = true;
        order.push(id);
        write(id, rotate_case(&mirrored_case, rotation));
    }

    log::trace!("base {} expanded to {} ids including mirror", base, order.len());
    order
}

/// Write-once construction of a [`CaseTable`]
///
/// Records which expansion filled each slot, so overlapping orbits are
/// reported instead of silently overwritten. Each [`CaseTableBuilder::expand`]
/// call is its own generation, so expanding the same base twice also clashes.
pub struct CaseTableBuilder {
    slots: Vec<Option<Case>>,
    /// Expansion generation and base id that wrote each slot
    owners: [Option<(u32, u8)>; CubeId::COUNT],
    generation: u32,
    conflicts: Vec<TableError>,
}

impl Default for CaseTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseTableBuilder {
    /// A builder with slots 0 and 255 set to the empty case and the rest unfilled
    pub fn new() -> Self {
        let mut slots = vec![None; CubeId::COUNT];
        let mut owners = [None; CubeId::COUNT];
        for id in [CubeId::EMPTY, CubeId::FULL] {
            slots[id.index()] = Some(Case::empty());
            owners[id.index()] = Some((0, id.bits()));
        }
        Self {
            slots,
            owners,
            generation: 0,
            conflicts: Vec::new(),
        }
    }

    /// Fill the orbit of `base` from `representative`
    ///
    /// Returns the ids written. A slot already filled by an earlier expansion
    /// keeps its first case and the clash is reported by
    /// [`CaseTableBuilder::finish`].
    pub fn expand(&mut self, representative: &Case, base: CubeId) -> Vec<CubeId> {
        self.generation += 1;
        let generation = self.generation;
        let slots = &mut self.slots;
        let owners = &mut self.owners;
        let conflicts = &mut self.conflicts;

        expand_orbit(representative, base, |id, case| {
            match owners[id.index()] {
                Some((owner, first)) if owner != generation => {
                    conflicts.push(TableError::SlotConflict {
                        cube_id: id.bits(),
                        first,
                        second: base.bits(),
                    });
                }
                _ => {
                    owners[id.index()] = Some((generation, base.bits()));
                    slots[id.index()] = Some(case);
                }
            }
        })
    }

    /// Number of slots filled so far
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Finish the table, reporting every unfilled slot, slot conflict and
    /// validation failure
    ///
    /// Unfilled slots are reported once; the validator does not also flag the
    /// placeholder left in them.
    pub fn finish(self) -> Result<CaseTable, Vec<TableError>> {
        let mut errors = self.conflicts;
        let mut unfilled = [false; CubeId::COUNT];
        let mut cases = Vec::with_capacity(CubeId::COUNT);

        for (index, slot) in self.slots.into_iter().enumerate() {
            match slot {
                Some(case) => cases.push(case),
                None => {
                    errors.push(TableError::Unfilled(index as u8));
                    unfilled[index] = true;
                    cases.push(Case::empty());
                }
            }
        }

        let table = CaseTable { cases };
        errors.extend(
            TableValidator::validate(&table)
                .into_iter()
                .filter(|e| !unfilled[e.cube_id() as usize]),
        );

        if errors.is_empty() {
            Ok(table)
        } else {
            Err(errors)
        }
    }
}

/// Lookup from cube id to its [`Case`]
///
/// Immutable once built, except through the explicit authoring call
/// [`CaseTable::fill_variations`] on an owned copy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseTable {
    cases: Vec<Case>,
}

static GLOBAL_TABLE: OnceLock<CaseTable> = OnceLock::new();

impl CaseTable {
    /// Build the canonical table from the representative cases
    ///
    /// # Panics
    /// If the representative data or the symmetry maps are inconsistent.
    /// That is a defect in this crate, not a caller error.
    pub fn build() -> Self {
        match Self::try_build() {
            Ok(table) => table,
            Err(errors) => {
                for error in &errors {
                    log::error!("{}", error);
                }
                panic!("case table construction failed with {} errors", errors.len());
            }
        }
    }

    /// Build the canonical table, returning every invariant violation found
    pub fn try_build() -> Result<Self, Vec<TableError>> {
        Self::from_representatives(&REPRESENTATIVES)
    }

    /// Build a table from a set of seed cases
    ///
    /// Malformed seeds are skipped and reported alongside every other
    /// finding, including the slots they left unfilled.
    pub fn from_representatives(representatives: &[Representative]) -> Result<Self, Vec<TableError>> {
        let mut builder = CaseTableBuilder::new();
        let mut malformed = Vec::new();

        for rep in representatives {
            match Case::from_raw(rep.edges, rep.triangles) {
                Ok(case) => {
                    builder.expand(&case, CubeId::new(rep.base));
                }
                Err(e) => {
                    log::error!("representative {} is malformed: {}", rep.base, e);
                    malformed.push(TableError::MalformedRepresentative(rep.base));
                }
            }
        }

        log::debug!(
            "expanded {} representatives into {} slots",
            representatives.len() - malformed.len(),
            builder.filled_count()
        );

        match builder.finish() {
            Ok(table) if malformed.is_empty() => Ok(table),
            Ok(_) => Err(malformed),
            Err(errors) => {
                malformed.extend(errors);
                Err(malformed)
            }
        }
    }

    /// Shared table, built on first use
    pub fn global() -> &'static CaseTable {
        GLOBAL_TABLE.get_or_init(Self::build)
    }

    /// The case stored for `id`
    #[inline]
    pub fn get(&self, id: CubeId) -> &Case {
        &self.cases[id.index()]
    }

    /// The case for a set of corner weights
    #[inline]
    pub fn case_for(&self, weights: &[f32; 8]) -> &Case {
        self.get(CubeId::from_weights(weights))
    }

    /// Checked lookup by raw id
    pub fn get_raw(&self, id: usize) -> Result<&Case, CubeError> {
        CubeId::try_from(id).map(|id| self.get(id))
    }

    /// All entries in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (CubeId, &Case)> {
        CubeId::all().zip(self.cases.iter())
    }

    /// Replace the orbit of `id` with variations of an authored case
    ///
    /// The case must be whole and cross exactly the edges `id` crosses. Every
    /// id in the orbit is overwritten using the same expansion the canonical
    /// build uses. Returns the ids written.
    pub fn fill_variations(&mut self, case: &Case, id: CubeId) -> Result<Vec<CubeId>, CubeError> {
        case.check_against(id)?;
        let cases = &mut self.cases;
        let written = expand_orbit(case, id, |target, generated| {
            cases[target.index()] = generated;
        });
        log::debug!("replaced {} cases around id {}", written.len(), id);
        Ok(written)
    }
}

impl Default for CaseTable {
    fn default() -> Self {
        Self::build()
    }
}

impl Index<CubeId> for CaseTable {
    type Output = Case;

    fn index(&self, id: CubeId) -> &Case {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::orbit_of;
    use cubecase_math::EdgeId;

    #[test]
    fn test_build_fills_every_slot() {
        let mut builder = CaseTableBuilder::new();
        assert_eq!(builder.filled_count(), 2);
        for rep in &REPRESENTATIVES {
            let case = Case::from_raw(rep.edges, rep.triangles).unwrap();
            builder.expand(&case, CubeId::new(rep.base));
        }
        assert_eq!(builder.filled_count(), 256);
        assert!(builder.finish().is_ok());
    }

    #[test]
    fn test_expansion_covers_orbit() {
        for rep in &REPRESENTATIVES {
            let base = CubeId::new(rep.base);
            let case = Case::from_raw(rep.edges, rep.triangles).unwrap();
            let mut builder = CaseTableBuilder::new();
            let mut written = builder.expand(&case, base);
            written.sort();
            assert_eq!(written, orbit_of(base), "base {}", base);
        }
    }

    #[test]
    fn test_orbits_are_disjoint() {
        let mut builder = CaseTableBuilder::new();
        let mut seen = [false; 256];
        seen[0] = true;
        seen[255] = true;
        for rep in &REPRESENTATIVES {
            let case = Case::from_raw(rep.edges, rep.triangles).unwrap();
            for id in builder.expand(&case, CubeId::new(rep.base)) {
                assert!(!seen[id.index()], "id {} reached twice", id);
                seen[id.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_unfilled_slots_reported() {
        let builder = CaseTableBuilder::new();
        let errors = builder.finish().unwrap_err();
        let unfilled = errors
            .iter()
            .filter(|e| matches!(e, TableError::Unfilled(_)))
            .count();
        assert_eq!(unfilled, 254);
        assert!(!errors.iter().any(|e| matches!(e, TableError::EdgeMismatch(_))));
    }

    #[test]
    fn test_unfilled_slot_reported_once() {
        let mut builder = CaseTableBuilder::new();
        let single = Case::from_raw(&[0, 3, 8], &[0, 1, 2]).unwrap();
        builder.expand(&single, CubeId::new(1));
        let errors = builder.finish().unwrap_err();
        // Only the 8 single-corner ids are filled besides the boundaries
        assert_eq!(errors.len(), 246);
        assert!(errors.iter().all(|e| matches!(e, TableError::Unfilled(_))));
    }

    #[test]
    fn test_conflict_reported() {
        let mut builder = CaseTableBuilder::new();
        let single = Case::from_raw(&[0, 3, 8], &[0, 1, 2]).unwrap();
        builder.expand(&single, CubeId::new(1));
        // Corner 1 alone is in the same orbit as corner 0
        let other = Case::from_raw(&[0, 9, 1], &[0, 1, 2]).unwrap();
        builder.expand(&other, CubeId::new(2));
        let errors = builder.finish().unwrap_err();
        assert!(errors.contains(&TableError::SlotConflict { cube_id: 2, first: 1, second: 2 }));
    }

    #[test]
    fn test_same_base_twice_reported() {
        let mut builder = CaseTableBuilder::new();
        let single = Case::from_raw(&[0, 3, 8], &[0, 1, 2]).unwrap();
        let rewound = Case::from_raw(&[0, 3, 8], &[0, 2, 1]).unwrap();
        builder.expand(&single, CubeId::new(1));
        builder.expand(&rewound, CubeId::new(1));
        let errors = builder.finish().unwrap_err();
        assert!(errors.contains(&TableError::SlotConflict { cube_id: 1, first: 1, second: 1 }));
    }

    #[test]
    fn test_every_malformed_representative_reported() {
        let mut reps = REPRESENTATIVES.to_vec();
        // Edge 12 does not exist
        reps[0] = Representative { base: 1, edges: &[0, 3, 12], triangles: &[0, 1, 2] };
        // Triangle entry past the edge list
        reps[1] = Representative { base: 3, edges: &[3, 8, 1, 9], triangles: &[0, 1, 4] };

        let errors = CaseTable::from_representatives(&reps).unwrap_err();
        assert_eq!(errors[0], TableError::MalformedRepresentative(1));
        assert_eq!(errors[1], TableError::MalformedRepresentative(3));
        assert!(errors.contains(&TableError::Unfilled(1)));
        assert!(errors.contains(&TableError::Unfilled(3)));
        assert!(!errors.iter().any(|e| matches!(e, TableError::EdgeMismatch(_))));
    }

    #[test]
    fn test_from_representatives_matches_build() {
        assert_eq!(CaseTable::from_representatives(&REPRESENTATIVES), Ok(CaseTable::build()));
    }

    #[test]
    fn test_global_is_shared() {
        let a = CaseTable::global() as *const CaseTable;
        let b = CaseTable::global() as *const CaseTable;
        assert_eq!(a, b);
        assert_eq!(CaseTable::global(), &CaseTable::build());
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(CaseTable::build(), CaseTable::build());
    }

    #[test]
    fn test_get_raw_range() {
        let table = CaseTable::build();
        assert!(table.get_raw(255).is_ok());
        assert_eq!(table.get_raw(256), Err(CubeError::CubeIdOutOfRange(256)));
    }

    #[test]
    fn test_fill_variations_replaces_orbit() {
        let mut table = CaseTable::build();
        let base = CubeId::new(3);
        // Same edges as the canonical case, opposite diagonal split of the quad
        let edges: Vec<EdgeId> = [3, 8, 1, 9].iter().map(|&i| EdgeId::new(i).unwrap()).collect();
        let authored = Case::new(edges, vec![0, 1, 3, 0, 3, 2]).unwrap();

        let written = table.fill_variations(&authored, base).unwrap();
        assert_eq!(written.len(), 12);
        assert_eq!(table[base], authored);
        assert!(TableValidator::validate(&table).is_empty());
        assert_ne!(table, CaseTable::build());
    }

    #[test]
    fn test_fill_variations_rejects_wrong_edges() {
        let mut table = CaseTable::build();
        let single = Case::from_raw(&[0, 3, 8], &[0, 1, 2]).unwrap();
        assert_eq!(
            table.fill_variations(&single, CubeId::new(3)),
            Err(CubeError::EdgeMismatch { cube_id: 3 })
        );
        assert_eq!(table, CaseTable::build());
    }
}
