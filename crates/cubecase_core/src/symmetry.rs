//! Cube symmetry group acting on corner, edge and cube ids
//!
//! The 24 proper rotations of the cube are stored as permutations of the
//! three coordinate bits combined with a set of axis inversions, so every
//! operation here is a pure integer permutation and the case table built from
//! it never depends on floating point.
//!
//! The single reflection is central inversion, `c -> 7 - c`. It reverses the
//! corner order of every edge, which [`mirror_edge`] checks.

use std::fmt;

use cubecase_math::{Corner, Edge, EdgeId};

use crate::cube_id::CubeId;

/// Bit-level description of one rotation
///
/// Output coordinate bit `k` is input bit `axes[k]`, then `flip` is XORed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RotationMap {
    axes: [u8; 3],
    flip: u8,
}

/// The 24 orientation-preserving maps, identity first
///
/// Even axis permutations pair with an even number of inversions and odd
/// permutations with an odd number, which keeps the determinant at +1.
const ROTATION_MAPS: [RotationMap; 24] = [
    RotationMap { axes: [0, 1, 2], flip: 0b000 }, // 0
    RotationMap { axes: [0, 1, 2], flip: 0b011 }, // 1
    RotationMap { axes: [0, 1, 2], flip: 0b101 }, // 2
    RotationMap { axes: [0, 1, 2], flip: 0b110 }, // 3
    RotationMap { axes: [0, 2, 1], flip: 0b001 }, // 4
    RotationMap { axes: [0, 2, 1], flip: 0b010 }, // 5
    RotationMap { axes: [0, 2, 1], flip: 0b100 }, // 6
    RotationMap { axes: [0, 2, 1], flip: 0b111 }, // 7
    RotationMap { axes: [1, 0, 2], flip: 0b001 }, // 8
    RotationMap { axes: [1, 0, 2], flip: 0b010 }, // 9
    RotationMap { axes: [1, 0, 2], flip: 0b100 }, // 10
    RotationMap { axes: [1, 0, 2], flip: 0b111 }, // 11
    RotationMap { axes: [1, 2, 0], flip: 0b000 }, // 12
    RotationMap { axes: [1, 2, 0], flip: 0b011 }, // 13
    RotationMap { axes: [1, 2, 0], flip: 0b101 }, // 14
    RotationMap { axes: [1, 2, 0], flip: 0b110 }, // 15
    RotationMap { axes: [2, 0, 1], flip: 0b000 }, // 16
    RotationMap { axes: [2, 0, 1], flip: 0b011 }, // 17
    RotationMap { axes: [2, 0, 1], flip: 0b101 }, // 18
    RotationMap { axes: [2, 0, 1], flip: 0b110 }, // 19
    RotationMap { axes: [2, 1, 0], flip: 0b001 }, // 20
    RotationMap { axes: [2, 1, 0], flip: 0b010 }, // 21
    RotationMap { axes: [2, 1, 0], flip: 0b100 }, // 22
    RotationMap { axes: [2, 1, 0], flip: 0b111 }, // 23
];

/// One of the 24 proper rotations of the cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rotation(u8);

impl Rotation {
    /// Size of the rotation group
    pub const COUNT: usize = 24;
    /// The identity rotation (id 0)
    pub const IDENTITY: Self = Self(0);

    /// Create a rotation from its id, `None` outside 0-23
    #[inline]
    pub const fn new(id: usize) -> Option<Self> {
        if id < Self::COUNT {
            Some(Self(id as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All rotations in id order
    pub fn all() -> impl Iterator<Item = Rotation> {
        (0..Self::COUNT as u8).map(Rotation)
    }

    /// Image of a corner under this rotation
    #[inline]
    pub const fn apply(self, corner: Corner) -> Corner {
        let map = ROTATION_MAPS[self.0 as usize];
        let bits = corner.bits();
        let permuted = ((bits >> map.axes[0]) & 1)
            | (((bits >> map.axes[1]) & 1) << 1)
            | (((bits >> map.axes[2]) & 1) << 2);
        Corner::from_bits(permuted ^ map.flip)
    }

    /// The rotation equal to applying `self` first, then `then`
    pub fn compose(self, then: Rotation) -> Rotation {
        for candidate in Rotation::all() {
            if Corner::all().all(|c| candidate.apply(c) == then.apply(self.apply(c))) {
                return candidate;
            }
        }
        unreachable!("rotations {} and {} compose outside the group", self, then)
    }

    /// The rotation undoing this one
    pub fn inverse(self) -> Rotation {
        for candidate in Rotation::all() {
            if self.compose(candidate) == Rotation::IDENTITY {
                return candidate;
            }
        }
        unreachable!("rotation {} has no inverse", self)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Image of a corner under a rotation
#[inline]
pub fn rotate_corner(corner: Corner, rotation: Rotation) -> Corner {
    rotation.apply(corner)
}

/// Image of a corner under the fixed reflection (`7 - c`)
#[inline]
pub const fn mirror_corner(corner: Corner) -> Corner {
    Corner::from_bits(!corner.bits())
}

/// Image of an edge under a rotation
///
/// # Panics
/// If the rotated corner pair is not a cube edge, which would mean the
/// rotation table is broken.
pub fn rotate_edge(edge: EdgeId, rotation: Rotation) -> EdgeId {
    let corners = edge.edge();
    let mut one = rotation.apply(corners.from);
    let mut other = rotation.apply(corners.to);
    if one > other {
        std::mem::swap(&mut one, &mut other);
    }
    Edge::lookup(one, other)
        .unwrap_or_else(|| panic!("rotation {} maps edge {} off the edge set", rotation, edge))
}

/// Image of an edge under the fixed reflection
///
/// Central inversion reverses every edge, so the mirrored pair always comes
/// out descending before it is reordered.
pub fn mirror_edge(edge: EdgeId) -> EdgeId {
    let corners = edge.edge();
    let one = mirror_corner(corners.from);
    let other = mirror_corner(corners.to);
    debug_assert!(one > other, "mirrored edge {} is not descending", edge);
    Edge::lookup(other, one)
        .unwrap_or_else(|| panic!("mirror maps edge {} off the edge set", edge))
}

fn permute_cube_id(id: CubeId, map: impl Fn(Corner) -> Corner) -> CubeId {
    let mut bits = 0u8;
    for corner in Corner::all() {
        if id.is_positive(corner) {
            bits |= 1 << map(corner).index();
        }
    }
    CubeId::new(bits)
}

/// Move bit `i` of the mask to bit `rotate_corner(i)`
pub fn rotate_cube_id(id: CubeId, rotation: Rotation) -> CubeId {
    permute_cube_id(id, |c| rotation.apply(c))
}

/// Move bit `i` of the mask to bit `mirror_corner(i)`
pub fn mirror_cube_id(id: CubeId) -> CubeId {
    permute_cube_id(id, mirror_corner)
}

/// All cube ids reachable from `id` by rotations and the reflection, ascending
pub fn orbit_of(id: CubeId) -> Vec<CubeId> {
    let mirrored = mirror_cube_id(id);
    let mut members: Vec<CubeId> = Rotation::all()
        .flat_map(|r| [rotate_cube_id(id, r), rotate_cube_id(mirrored, r)])
        .collect();
    members.sort();
    members.dedup();
    members
}

/// Partition of all 256 cube ids into orbits of the 48-element group
///
/// Orbits are ordered by their smallest member and each orbit is sorted, so
/// `orbit[0]` is the canonical representative.
pub fn group_classification() -> Vec<Vec<CubeId>> {
    let mut seen = [false; CubeId::COUNT];
    let mut orbits = Vec::new();

    for id in CubeId::all() {
        if seen[id.index()] {
            continue;
        }
        let orbit = orbit_of(id);
        for member in &orbit {
            seen[member.index()] = true;
        }
        orbits.push(orbit);
    }

    orbits
}

/// Range-checked versions of the corner and symmetry maps over raw integer ids
pub mod checked {
    use cubecase_math::{Corner, EdgeId, Vec3};

    use crate::cube_id::CubeId;
    use crate::error::CubeError;
    use super::Rotation;

    fn corner(id: usize) -> Result<Corner, CubeError> {
        Corner::new(id).ok_or(CubeError::CornerOutOfRange(id))
    }

    fn edge(id: usize) -> Result<EdgeId, CubeError> {
        EdgeId::new(id).ok_or(CubeError::EdgeOutOfRange(id))
    }

    fn rotation(id: usize) -> Result<Rotation, CubeError> {
        Rotation::new(id).ok_or(CubeError::RotationOutOfRange(id))
    }

    /// Position of a corner given by raw id
    pub fn corner_position(corner_id: usize) -> Result<Vec3, CubeError> {
        Ok(corner(corner_id)?.position())
    }

    pub fn rotate_corner(corner_id: usize, rotation_id: usize) -> Result<usize, CubeError> {
        Ok(super::rotate_corner(corner(corner_id)?, rotation(rotation_id)?).index())
    }

    pub fn mirror_corner(corner_id: usize) -> Result<usize, CubeError> {
        Ok(super::mirror_corner(corner(corner_id)?).index())
    }

    pub fn rotate_edge(edge_id: usize, rotation_id: usize) -> Result<usize, CubeError> {
        Ok(super::rotate_edge(edge(edge_id)?, rotation(rotation_id)?).index())
    }

    pub fn mirror_edge(edge_id: usize) -> Result<usize, CubeError> {
        Ok(super::mirror_edge(edge(edge_id)?).index())
    }

    pub fn rotate_cube_id(cube_id: usize, rotation_id: usize) -> Result<usize, CubeError> {
        let id = CubeId::try_from(cube_id)?;
        Ok(super::rotate_cube_id(id, rotation(rotation_id)?).index())
    }

    pub fn mirror_cube_id(cube_id: usize) -> Result<usize, CubeError> {
        Ok(super::mirror_cube_id(CubeId::try_from(cube_id)?).index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CubeError;
    use std::collections::HashSet;

    /// Determinant of the linear part of a corner map, from corner positions
    fn determinant(map: impl Fn(Corner) -> Corner) -> f32 {
        let origin = map(Corner::from_bits(0)).position();
        let x = map(Corner::from_bits(1)).position() - origin;
        let y = map(Corner::from_bits(2)).position() - origin;
        let z = map(Corner::from_bits(4)).position() - origin;
        x.dot(y.cross(z))
    }

    #[test]
    fn test_identity_is_first() {
        for corner in Corner::all() {
            assert_eq!(Rotation::IDENTITY.apply(corner), corner);
        }
    }

    #[test]
    fn test_rotations_are_proper() {
        for r in Rotation::all() {
            assert_eq!(determinant(|c| r.apply(c)), 1.0, "rotation {}", r);
        }
    }

    #[test]
    fn test_mirror_is_improper() {
        assert_eq!(determinant(mirror_corner), -1.0);
    }

    #[test]
    fn test_rotations_are_distinct_permutations() {
        let mut seen = HashSet::new();
        for r in Rotation::all() {
            let perm: Vec<Corner> = Corner::all().map(|c| r.apply(c)).collect();
            let unique: HashSet<_> = perm.iter().copied().collect();
            assert_eq!(unique.len(), 8, "rotation {} is not a permutation", r);
            assert!(seen.insert(perm), "rotation {} duplicated", r);
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_rotations_preserve_edges() {
        for r in Rotation::all() {
            let images: HashSet<EdgeId> = EdgeId::all().map(|e| rotate_edge(e, r)).collect();
            assert_eq!(images.len(), 12);
        }
    }

    #[test]
    fn test_composition_law() {
        for r1 in Rotation::all() {
            for r2 in Rotation::all() {
                let composed = r1.compose(r2);
                for id in CubeId::all() {
                    assert_eq!(
                        rotate_cube_id(rotate_cube_id(id, r1), r2),
                        rotate_cube_id(id, composed),
                        "id {} r1 {} r2 {}", id, r1, r2
                    );
                }
            }
        }
    }

    #[test]
    fn test_inverse() {
        for r in Rotation::all() {
            let inv = r.inverse();
            assert_eq!(r.compose(inv), Rotation::IDENTITY);
            assert_eq!(inv.compose(r), Rotation::IDENTITY);
        }
    }

    #[test]
    fn test_empty_and_full_are_fixed() {
        for r in Rotation::all() {
            assert_eq!(rotate_cube_id(CubeId::EMPTY, r), CubeId::EMPTY);
            assert_eq!(rotate_cube_id(CubeId::FULL, r), CubeId::FULL);
        }
    }

    #[test]
    fn test_rotation_preserves_positive_count() {
        for r in Rotation::all() {
            for id in CubeId::all() {
                assert_eq!(rotate_cube_id(id, r).positive_count(), id.positive_count());
            }
        }
    }

    #[test]
    fn test_mirror_involution() {
        for id in CubeId::all() {
            assert_eq!(mirror_cube_id(mirror_cube_id(id)), id);
        }
        for e in EdgeId::all() {
            assert_eq!(mirror_edge(mirror_edge(e)), e);
        }
    }

    #[test]
    fn test_mirror_reverses_every_edge() {
        for e in EdgeId::all() {
            let edge = e.edge();
            assert!(mirror_corner(edge.from) > mirror_corner(edge.to), "edge {}", e);
        }
    }

    #[test]
    fn test_mirror_corner_values() {
        assert_eq!(mirror_corner(Corner::from_bits(0)), Corner::from_bits(7));
        assert_eq!(mirror_corner(Corner::from_bits(3)), Corner::from_bits(4));
    }

    #[test]
    fn test_classification_partitions_ids() {
        let orbits = group_classification();
        assert_eq!(orbits.len(), 22);

        let mut seen = HashSet::new();
        for orbit in &orbits {
            assert!(48 % orbit.len() == 0, "orbit size {} does not divide 48", orbit.len());
            for id in orbit {
                assert!(seen.insert(*id), "id {} in two orbits", id);
            }
        }
        assert_eq!(seen.len(), 256);
    }

    #[test]
    fn test_classification_order() {
        let orbits = group_classification();
        assert_eq!(orbits[0], vec![CubeId::EMPTY]);
        assert_eq!(orbits.last(), Some(&vec![CubeId::FULL]));
        // Single positive corner: all 8 corners form one orbit
        assert_eq!(orbits[1].len(), 8);
        assert_eq!(orbits[1][0], CubeId::new(1));
        for pair in orbits.windows(2) {
            assert!(pair[0][0] < pair[1][0]);
        }
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert_eq!(checked::rotate_corner(8, 0), Err(CubeError::CornerOutOfRange(8)));
        assert_eq!(checked::rotate_corner(0, 24), Err(CubeError::RotationOutOfRange(24)));
        assert_eq!(checked::mirror_edge(12), Err(CubeError::EdgeOutOfRange(12)));
        assert_eq!(checked::rotate_cube_id(300, 1), Err(CubeError::CubeIdOutOfRange(300)));
        assert_eq!(checked::mirror_cube_id(256), Err(CubeError::CubeIdOutOfRange(256)));
        assert_eq!(checked::corner_position(8), Err(CubeError::CornerOutOfRange(8)));
    }

    #[test]
    fn test_checked_matches_typed() {
        assert_eq!(checked::mirror_corner(0), Ok(7));
        assert_eq!(checked::corner_position(6), Ok(cubecase_math::Vec3::new(0.0, 1.0, 1.0)));
        assert_eq!(checked::rotate_corner(5, 0), Ok(5));
        assert_eq!(checked::rotate_edge(3, 0), Ok(3));
        assert_eq!(checked::mirror_cube_id(1), Ok(128));
        assert_eq!(checked::rotate_cube_id(255, 17), Ok(255));
    }
}
