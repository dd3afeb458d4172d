//! Canonical triangulations seeding the case table
//!
//! Under the 24 rotations plus the reflection, the 256 cube ids fall into 22
//! orbits. Ids 0 and 255 are orbits of their own and have no surface; every
//! other orbit gets one hand-authored case here, keyed by the orbit's smallest
//! id. The triangulations follow the widely used table by D. Williamson
//! (<https://gist.github.com/dwilliamson/c041e3454a713e58baf6e4f8e5fffecd>),
//! which resolves ambiguous faces by preferring rotations over inversions.

/// One seed case: a base cube id and its triangulation
///
/// `edges` are global edge ids; `triangles` index into `edges`.
#[derive(Clone, Copy, Debug)]
pub struct Representative {
    pub base: u8,
    pub edges: &'static [usize],
    pub triangles: &'static [u32],
}

pub const REPRESENTATIVES: [Representative; 20] = [
    // One corner
    Representative {
        base: 1,
        edges: &[0, 3, 8],
        triangles: &[0, 1, 2],
    },
    // Two corners sharing an edge
    Representative {
        base: 3,
        edges: &[3, 8, 1, 9],
        triangles: &[0, 1, 2, 2, 1, 3],
    },
    // Two corners across a face diagonal
    Representative {
        base: 6,
        edges: &[3, 2, 11, 1, 0, 9],
        triangles: &[0, 1, 2, 3, 4, 5],
    },
    // Three corners on one face
    Representative {
        base: 7,
        edges: &[11, 1, 2, 9, 8],
        triangles: &[0, 1, 2, 0, 3, 1, 0, 4, 3],
    },
    // A full face
    Representative {
        base: 15,
        edges: &[8, 9, 11, 10],
        triangles: &[0, 1, 2, 2, 1, 3],
    },
    Representative {
        base: 22,
        edges: &[0, 9, 1, 8, 7, 4, 11, 3, 2],
        triangles: &[0, 1, 2, 3, 4, 5, 6, 7, 8],
    },
    Representative {
        base: 23,
        edges: &[7, 4, 11, 2, 9, 1],
        triangles: &[0, 1, 2, 2, 1, 3, 3, 1, 4, 3, 4, 5],
    },
    // Two corners across the body diagonal
    Representative {
        base: 24,
        edges: &[4, 8, 7, 2, 1, 10],
        triangles: &[0, 1, 2, 3, 4, 5],
    },
    Representative {
        base: 25,
        edges: &[7, 4, 3, 0, 10, 2, 1],
        triangles: &[0, 1, 2, 2, 1, 3, 4, 5, 6],
    },
    Representative {
        base: 27,
        edges: &[10, 2, 3, 4, 7, 9],
        triangles: &[0, 1, 2, 0, 2, 3, 2, 4, 3, 5, 0, 3],
    },
    Representative {
        base: 30,
        edges: &[7, 4, 8, 9, 3, 0, 11, 10],
        triangles: &[0, 1, 2, 3, 4, 5, 3, 6, 4, 3, 7, 6],
    },
    Representative {
        base: 31,
        edges: &[7, 4, 11, 9, 10],
        triangles: &[0, 1, 2, 1, 3, 2, 3, 4, 2],
    },
    Representative {
        base: 60,
        edges: &[8, 7, 5, 9, 11, 3, 10, 1],
        triangles: &[0, 1, 2, 0, 2, 3, 4, 5, 6, 5, 7, 6],
    },
    Representative {
        base: 61,
        edges: &[5, 11, 7, 10, 1, 9, 0],
        triangles: &[6, 4, 3, 6, 3, 1, 6, 0, 5, 6, 2, 0, 6, 1, 2],
    },
    Representative {
        base: 63,
        edges: &[5, 11, 7, 10],
        triangles: &[0, 1, 2, 3, 1, 0],
    },
    // Alternating corners: four isolated triangles
    Representative {
        base: 105,
        edges: &[0, 3, 8, 4, 5, 9, 11, 6, 7, 10, 2, 1],
        triangles: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    },
    Representative {
        base: 107,
        edges: &[8, 4, 7, 5, 10, 6, 3, 11, 2],
        triangles: &[3, 4, 1, 4, 8, 1, 1, 8, 0, 8, 6, 0, 2, 7, 5],
    },
    Representative {
        base: 111,
        edges: &[10, 6, 5, 8, 4, 7],
        triangles: &[2, 0, 4, 0, 3, 4, 0, 1, 5, 5, 3, 0],
    },
    Representative {
        base: 126,
        edges: &[8, 3, 0, 5, 10, 6],
        triangles: &[0, 1, 2, 3, 4, 5],
    },
    // Seven corners: one negative corner
    Representative {
        base: 127,
        edges: &[6, 5, 10],
        triangles: &[0, 1, 2],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::group_classification;

    #[test]
    fn test_one_representative_per_nontrivial_orbit() {
        let orbits = group_classification();
        let bases: Vec<u8> = REPRESENTATIVES.iter().map(|r| r.base).collect();
        let expected: Vec<u8> = orbits
            .iter()
            .map(|o| o[0].bits())
            .filter(|&b| b != 0 && b != 255)
            .collect();
        assert_eq!(bases, expected);
    }

    #[test]
    fn test_triangles_in_range() {
        for rep in &REPRESENTATIVES {
            assert_eq!(rep.triangles.len() % 3, 0, "base {}", rep.base);
            for &t in rep.triangles {
                assert!((t as usize) < rep.edges.len(), "base {}", rep.base);
            }
        }
    }
}
