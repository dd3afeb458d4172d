//! Corner-sign masks ("cube ids")
//!
//! Bit `i` of a cube id is set when corner `i` is positive. Only the sign of a
//! weight matters here: a weight of exactly zero is non-positive.

use std::fmt;

use cubecase_math::{Corner, EdgeId};

use crate::error::CubeError;

/// Whether a corner weight classifies as positive
#[inline]
pub fn is_positive(weight: f32) -> bool {
    weight > 0.0
}

/// 8-bit corner-sign mask, the case table key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubeId(u8);

impl CubeId {
    /// Number of distinct cube ids
    pub const COUNT: usize = 256;
    /// All corners non-positive
    pub const EMPTY: Self = Self(0);
    /// All corners positive
    pub const FULL: Self = Self(255);

    #[inline]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Classify 8 corner weights
    pub fn from_weights(weights: &[f32; 8]) -> Self {
        let mut bits = 0u8;
        for (i, &weight) in weights.iter().enumerate() {
            if is_positive(weight) {
                bits |= 1 << i;
            }
        }
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Table slot of this id
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether `corner` is positive in this mask
    #[inline]
    pub const fn is_positive(self, corner: Corner) -> bool {
        (self.0 >> corner.index()) & 1 == 1
    }

    /// Number of positive corners
    #[inline]
    pub const fn positive_count(self) -> u32 {
        self.0.count_ones()
    }

    /// The mask with every corner sign flipped
    #[inline]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    /// Edges whose endpoints have opposite signs, in global edge order
    pub fn crossed_edges(self) -> impl Iterator<Item = EdgeId> {
        EdgeId::all().filter(move |id| {
            let edge = id.edge();
            self.is_positive(edge.from) != self.is_positive(edge.to)
        })
    }

    /// Weights of +1 for positive corners and -1 otherwise
    pub fn unit_weights(self) -> [f32; 8] {
        let mut weights = [-1.0; 8];
        for corner in Corner::all() {
            if self.is_positive(corner) {
                weights[corner.index()] = 1.0;
            }
        }
        weights
    }

    /// All 256 ids in ascending order
    pub fn all() -> impl Iterator<Item = CubeId> {
        (0..=u8::MAX).map(CubeId)
    }
}

impl From<u8> for CubeId {
    #[inline]
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl TryFrom<usize> for CubeId {
    type Error = CubeError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        u8::try_from(id)
            .map(CubeId)
            .map_err(|_| CubeError::CubeIdOutOfRange(id))
    }
}

impl fmt::Display for CubeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
