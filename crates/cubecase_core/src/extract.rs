//! Per-cube mesh extraction
//!
//! The vertex array of an extracted mesh lines up with the case's edge list,
//! so the case's triangle list indexes it directly.

use serde::Serialize;

use cubecase_math::{edge_interpolated_point, Vec3};

use crate::case::Case;
use crate::cube_id::CubeId;
use crate::error::CubeError;
use crate::table::CaseTable;

/// Owned surface patch for one cube
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RawMesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
}

impl RawMesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Copy with the triangle list reversed, facing the other way
    ///
    /// Useful for drawing the back side of a patch.
    pub fn flipped(&self) -> RawMesh {
        RawMesh {
            vertices: self.vertices.clone(),
            triangles: self.triangles.iter().rev().copied().collect(),
        }
    }

    /// Vertex positions as tightly packed `f32` triples, ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Triangle indices as raw bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Corner positions of each triangle
    pub fn triangle_vertices(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.triangles.chunks_exact(3).map(move |t| {
            [
                self.vertices[t[0] as usize],
                self.vertices[t[1] as usize],
                self.vertices[t[2] as usize],
            ]
        })
    }
}

/// Builds meshes from corner weights using a borrowed [`CaseTable`]
#[derive(Clone, Copy, Debug)]
pub struct MeshExtractor<'a> {
    table: &'a CaseTable,
}

impl<'a> MeshExtractor<'a> {
    pub fn new(table: &'a CaseTable) -> Self {
        Self { table }
    }

    /// Extractor over the shared table
    pub fn global() -> MeshExtractor<'static> {
        MeshExtractor::new(CaseTable::global())
    }

    #[inline]
    pub fn table(&self) -> &'a CaseTable {
        self.table
    }

    /// Case selected by the signs of `weights`
    #[inline]
    pub fn case_for(&self, weights: &[f32; 8]) -> &'a Case {
        self.table.case_for(weights)
    }

    /// Extract from a weight slice, which must hold exactly 8 samples
    pub fn extract(&self, weights: &[f32], scale: f32) -> Result<RawMesh, CubeError> {
        let weights: &[f32; 8] = weights
            .try_into()
            .map_err(|_| CubeError::WeightCount(weights.len()))?;
        Ok(self.extract_array(weights, scale))
    }

    /// Extract using the case the weights classify into
    pub fn extract_array(&self, weights: &[f32; 8], scale: f32) -> RawMesh {
        self.extract_case(CubeId::from_weights(weights), weights, scale)
    }

    /// Extract using a forced cube id instead of the weights' own signs
    ///
    /// If the weights do not match `id`, some selected edges may have equal
    /// endpoint weights and their vertices will not be finite.
    pub fn extract_case(&self, id: CubeId, weights: &[f32; 8], scale: f32) -> RawMesh {
        let case = self.table.get(id);
        let vertices = case
            .edges()
            .iter()
            .map(|&edge| scale * edge_interpolated_point(edge, weights))
            .collect();

        RawMesh {
            vertices,
            triangles: case.triangles().to_vec(),
        }
    }
}

/// Extract a mesh with the shared table
pub fn extract(weights: &[f32], scale: f32) -> Result<RawMesh, CubeError> {
    MeshExtractor::global().extract(weights, scale)
}
