//! Unit cube corners and edges
//!
//! The cube has 8 corners and 12 edges. A corner id encodes its own position:
//! bit 0 is x, bit 1 is y, bit 2 is z. Edges join corners whose ids differ in
//! exactly one bit and are stored with the lower id first.
//!
//! ```text
//!            6             7
//!            +-------------+               +-----6-------+
//!          / |           / |             / |            /|
//!        /   |         /   |          11   7         10   5
//!    2 +-----+-------+  3  |         +-----+2------+     |
//!      |   4 +-------+-----+ 5       |     +-----4-+-----+
//!      |   /         |   /           3   8         1   9
//!      | /           | /             | /           | /
//!    0 +-------------+ 1             +------0------+
//!
//!      y
//!      |   z
//!      | /
//!      +---- x
//! ```
//!
//! The edge order is the vocabulary every case table entry is written in and
//! must never change.

use std::fmt;

use serde::Serialize;

use crate::Vec3;

/// One of the 8 cube corners
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Corner(u8);

impl Corner {
    /// Number of cube corners
    pub const COUNT: usize = 8;

    /// Create a corner from its id, `None` outside 0-7
    #[inline]
    pub const fn new(id: usize) -> Option<Self> {
        if id < Self::COUNT {
            Some(Self(id as u8))
        } else {
            None
        }
    }

    /// Create a corner from packed coordinate bits (only the low three bits are used)
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    /// The corner id (0-7)
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Packed coordinate bits (x = bit 0, y = bit 1, z = bit 2)
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Coordinate (0 or 1) along `axis` (0 = x, 1 = y, 2 = z)
    #[inline]
    pub const fn coordinate(self, axis: usize) -> u8 {
        (self.0 >> axis) & 1
    }

    /// Position of this corner in the unit cube
    #[inline]
    pub fn position(self) -> Vec3 {
        Vec3::new(
            self.coordinate(0) as f32,
            self.coordinate(1) as f32,
            self.coordinate(2) as f32,
        )
    }

    /// All corners in id order
    pub fn all() -> impl Iterator<Item = Corner> {
        (0..Self::COUNT as u8).map(Corner)
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Global index of one of the 12 cube edges
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(u8);

impl EdgeId {
    /// Number of cube edges
    pub const COUNT: usize = 12;

    /// Create an edge id, `None` outside 0-11
    #[inline]
    pub const fn new(id: usize) -> Option<Self> {
        if id < Self::COUNT {
            Some(Self(id as u8))
        } else {
            None
        }
    }

    /// The edge index (0-11)
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The corner pair this id names
    #[inline]
    pub fn edge(self) -> &'static Edge {
        &EDGES[self.index()]
    }

    /// All edge ids in order
    pub fn all() -> impl Iterator<Item = EdgeId> {
        (0..Self::COUNT as u8).map(EdgeId)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cube edge, stored with `from < to`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Corner,
    pub to: Corner,
}

impl Edge {
    /// Create an edge between two corner ids
    ///
    /// # Panics
    /// If `from >= to` or the ids differ in more than one coordinate bit.
    /// In a const context this is a compile error.
    pub const fn new(from: u8, to: u8) -> Self {
        assert!(from < to && to < Corner::COUNT as u8, "edge corners out of order");
        assert!((from ^ to).is_power_of_two(), "edge corners must differ in one coordinate");
        Self { from: Corner(from), to: Corner(to) }
    }

    /// Look up the edge id joining two corners (lower id first)
    #[inline]
    pub fn lookup(from: Corner, to: Corner) -> Option<EdgeId> {
        EDGE_LOOKUP[from.index()][to.index()]
    }

    /// Vector from the `from` corner to the `to` corner
    #[inline]
    pub fn shift(&self) -> Vec3 {
        self.to.position() - self.from.position()
    }

    /// Point where the linear interpolation of the corner weights crosses zero
    ///
    /// Computes `from + shift * w_from / (w_from - w_to)`.
    ///
    /// The endpoint weights must differ. Equal weights divide by zero and the
    /// result has infinite or NaN components; no check is made. The case table
    /// only selects edges whose endpoints have opposite signs, so extraction
    /// never hits this. Use [`Edge::try_interpolate`] for a guarded version.
    #[inline]
    pub fn interpolate(&self, weights: &[f32; 8]) -> Vec3 {
        let weight_from = weights[self.from.index()];
        let weight_to = weights[self.to.index()];
        self.interpolate_at(weight_from / (weight_from - weight_to))
    }

    /// Like [`Edge::interpolate`], but `None` when the endpoint weights are equal
    #[inline]
    pub fn try_interpolate(&self, weights: &[f32; 8]) -> Option<Vec3> {
        if weights[self.from.index()] == weights[self.to.index()] {
            None
        } else {
            Some(self.interpolate(weights))
        }
    }

    /// Point at `ratio` along the edge (0 = `from`, 1 = `to`)
    #[inline]
    pub fn interpolate_at(&self, ratio: f32) -> Vec3 {
        self.from.position() + self.shift() * ratio
    }

    /// Midpoint of the edge
    #[inline]
    pub fn midpoint(&self) -> Vec3 {
        self.interpolate_at(0.5)
    }
}

/// The 12 cube edges in global order
pub const EDGES: [Edge; 12] = [
    Edge::new(0, 1), // 00
    Edge::new(1, 3), // 01
    Edge::new(2, 3), // 02
    Edge::new(0, 2), // 03

    Edge::new(4, 5), // 04
    Edge::new(5, 7), // 05
    Edge::new(6, 7), // 06
    Edge::new(4, 6), // 07

    Edge::new(0, 4), // 08
    Edge::new(1, 5), // 09
    Edge::new(3, 7), // 10
    Edge::new(2, 6), // 11
];

/// Reverse lookup from an ascending corner pair to its edge id
///
/// `EDGE_LOOKUP[from][to]` is `Some` only for the 12 pairs in [`EDGES`].
pub const EDGE_LOOKUP: [[Option<EdgeId>; 8]; 8] = compute_edge_lookup();

const fn compute_edge_lookup() -> [[Option<EdgeId>; 8]; 8] {
    let mut lookup = [[None; 8]; 8];
    let mut edge_idx = 0;

    while edge_idx < EdgeId::COUNT {
        let edge = EDGES[edge_idx];
        lookup[edge.from.index()][edge.to.index()] = Some(EdgeId(edge_idx as u8));
        edge_idx += 1;
    }

    lookup
}

/// Position of a corner in the unit cube
#[inline]
pub fn corner_position(corner: Corner) -> Vec3 {
    corner.position()
}

/// Zero crossing of the interpolated weights along an edge
///
/// See [`Edge::interpolate`] for the equal-weight precondition.
#[inline]
pub fn edge_interpolated_point(edge: EdgeId, weights: &[f32; 8]) -> Vec3 {
    edge.edge().interpolate(weights)
}

/// Point at a fixed ratio along an edge
#[inline]
pub fn edge_interpolated_point_at(edge: EdgeId, ratio: f32) -> Vec3 {
    edge.edge().interpolate_at(ratio)
}
