//! Case table entries
//!
//! A [`Case`] lists the edges the surface crosses for one cube id and a
//! triangle list whose entries are positions in that edge list, not global
//! edge ids. Triangles are wound so that their right-handed normal points
//! away from the positive corners.

use serde::Serialize;

use cubecase_math::EdgeId;

use crate::cube_id::CubeId;
use crate::error::CubeError;
use crate::symmetry::{mirror_edge, rotate_edge, Rotation};

/// Triangulated surface patch for one cube id
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Case {
    edges: Vec<EdgeId>,
    triangles: Vec<u32>,
}

impl Case {
    /// The case with no edges and no triangles
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a case, checking that every triangle is whole and in range
    pub fn new(edges: Vec<EdgeId>, triangles: Vec<u32>) -> Result<Self, CubeError> {
        if triangles.len() % 3 != 0 {
            return Err(CubeError::IncompleteTriangle(triangles.len()));
        }
        if let Some(&index) = triangles.iter().find(|&&i| i as usize >= edges.len()) {
            return Err(CubeError::TriangleIndexOutOfRange { index, edge_count: edges.len() });
        }
        Ok(Self { edges, triangles })
    }

    /// Create a case from raw global edge ids
    pub fn from_raw(edges: &[usize], triangles: &[u32]) -> Result<Self, CubeError> {
        let edges = edges
            .iter()
            .map(|&id| EdgeId::new(id).ok_or(CubeError::EdgeOutOfRange(id)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(edges, triangles.to_vec())
    }

    /// Create a case from a hand-entered index sequence, dropping a trailing
    /// partial triangle
    ///
    /// Triangle picking produces one index at a time; only complete triples
    /// become part of the case.
    pub fn from_partial_triangles(edges: Vec<EdgeId>, indices: &[u32]) -> Result<Self, CubeError> {
        let whole = indices.len() / 3 * 3;
        Self::new(edges, indices[..whole].to_vec())
    }

    /// Crossed edges, in this case's local order
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Triangle entries, indexing into [`Case::edges`]
    #[inline]
    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.triangles.is_empty()
    }

    /// Triangle entries resolved to global edge ids
    pub fn resolved_triangles(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.triangles.iter().map(move |&i| self.edges[i as usize])
    }

    /// Whether the edge list is exactly the set of edges `id` crosses
    pub fn crosses_edges_of(&self, id: CubeId) -> bool {
        let mut edges = self.edges.clone();
        edges.sort();
        edges.iter().copied().eq(id.crossed_edges())
    }

    /// Check that this case can be stored under `id`
    pub fn check_against(&self, id: CubeId) -> Result<(), CubeError> {
        if self.crosses_edges_of(id) {
            Ok(())
        } else {
            Err(CubeError::EdgeMismatch { cube_id: id.bits() })
        }
    }

    /// This case under a rotation; the triangle list is unchanged
    pub fn rotated(&self, rotation: Rotation) -> Case {
        Case {
            edges: self.edges.iter().map(|&e| rotate_edge(e, rotation)).collect(),
            triangles: self.triangles.clone(),
        }
    }

    /// This case under the reflection, with the triangle list reversed to
    /// restore the winding
    pub fn mirrored(&self) -> Case {
        Case {
            edges: self.edges.iter().map(|&e| mirror_edge(e)).collect(),
            triangles: self.triangles.iter().rev().copied().collect(),
        }
    }
}

/// Map every edge of a case through a rotation
#[inline]
pub fn rotate_case(case: &Case, rotation: Rotation) -> Case {
    case.rotated(rotation)
}

/// Map every edge of a case through the reflection and flip its winding
#[inline]
pub fn mirror_case(case: &Case) -> Case {
    case.mirrored()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_zero_case() -> Case {
        Case::from_raw(&[0, 3, 8], &[0, 1, 2]).unwrap()
    }

    #[test]
    fn test_empty_case() {
        let case = Case::empty();
        assert!(case.is_empty());
        assert_eq!(case.triangle_count(), 0);
        assert!(case.crosses_edges_of(CubeId::EMPTY));
        assert!(case.crosses_edges_of(CubeId::FULL));
    }

    #[test]
    fn test_new_rejects_bad_triangles() {
        let edges: Vec<EdgeId> = [0, 3, 8].iter().map(|&i| EdgeId::new(i).unwrap()).collect();
        assert_eq!(
            Case::new(edges.clone(), vec![0, 1]),
            Err(CubeError::IncompleteTriangle(2))
        );
        assert_eq!(
            Case::new(edges, vec![0, 1, 3]),
            Err(CubeError::TriangleIndexOutOfRange { index: 3, edge_count: 3 })
        );
    }

    #[test]
    fn test_from_raw_rejects_bad_edge() {
        assert_eq!(Case::from_raw(&[0, 12], &[]), Err(CubeError::EdgeOutOfRange(12)));
    }

    #[test]
    fn test_from_partial_triangles_drops_tail() {
        let edges: Vec<EdgeId> = [3, 8, 1, 9].iter().map(|&i| EdgeId::new(i).unwrap()).collect();
        let case = Case::from_partial_triangles(edges, &[0, 1, 2, 2, 1]).unwrap();
        assert_eq!(case.triangles(), &[0, 1, 2]);
    }

    #[test]
    fn test_resolved_triangles() {
        let case = Case::from_raw(&[3, 8, 1, 9], &[0, 1, 2, 2, 1, 3]).unwrap();
        let resolved: Vec<usize> = case.resolved_triangles().map(|e| e.index()).collect();
        assert_eq!(resolved, vec![3, 8, 1, 1, 8, 9]);
    }

    #[test]
    fn test_check_against() {
        let case = corner_zero_case();
        assert!(case.check_against(CubeId::new(1)).is_ok());
        // The complement crosses the same edges
        assert!(case.check_against(CubeId::new(254)).is_ok());
        assert_eq!(
            case.check_against(CubeId::new(2)),
            Err(CubeError::EdgeMismatch { cube_id: 2 })
        );
    }

    #[test]
    fn test_rotate_keeps_triangles() {
        let case = Case::from_raw(&[3, 8, 1, 9], &[0, 1, 2, 2, 1, 3]).unwrap();
        for r in Rotation::all() {
            let rotated = rotate_case(&case, r);
            assert_eq!(rotated.triangles(), case.triangles());
            assert_eq!(rotated.edges().len(), case.edges().len());
        }
        assert_eq!(rotate_case(&case, Rotation::IDENTITY), case);
    }

    #[test]
    fn test_mirror_reverses_triangles() {
        let case = Case::from_raw(&[3, 8, 1, 9], &[0, 1, 2, 2, 1, 3]).unwrap();
        let mirrored = mirror_case(&case);
        assert_eq!(mirrored.triangles(), &[3, 1, 2, 2, 1, 0]);
        assert_eq!(mirror_case(&mirrored), case);
    }

    #[test]
    fn test_mirror_moves_corner_case() {
        // Corner 0 mirrors onto corner 7
        let mirrored = mirror_case(&corner_zero_case());
        assert!(mirrored.crosses_edges_of(CubeId::new(128)));
    }
}
