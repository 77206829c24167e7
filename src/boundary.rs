//! Boundary classification for the cubic grid.
//!
//! Along every axis a coordinate is either on the low face (`Min`),
//! strictly inside (`Interior`), or on the high face (`Max`).
//! The 27 combinations of three extents partition the grid into
//! one interior block, 6 faces, 12 edges and 8 corners.

use crate::util::*;

/// Position of a coordinate along a single axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Extent {
    Min,
    Interior,
    Max,
}

impl Extent {
    pub const ALL: [Extent; 3] = [Extent::Min, Extent::Interior, Extent::Max];

    /// Classify `c` along an axis of length `n`.
    #[inline]
    pub fn classify(c: i32, n: usize) -> Self {
        debug_assert!(c >= 0 && (c as usize) < n);
        if c == 0 {
            Extent::Min
        } else if c as usize == n - 1 {
            Extent::Max
        } else {
            Extent::Interior
        }
    }

    /// Inclusive coordinate range covered along an axis of length `n`.
    pub fn range(&self, n: usize) -> (i32, i32) {
        let last = n as i32 - 1;
        match self {
            Extent::Min => (0, 0),
            Extent::Interior => (1, last - 1),
            Extent::Max => (last, last),
        }
    }

    /// Direction of the neighbor that falls outside the grid,
    /// if any.
    pub fn missing_direction(&self) -> Option<i32> {
        match self {
            Extent::Min => Some(-1),
            Extent::Interior => None,
            Extent::Max => Some(1),
        }
    }
}

/// Topological kind of a region, by number of axes at an extreme.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RegionClass {
    Interior,
    Face,
    Edge,
    Corner,
}

/// One of the 27 disjoint update regions of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Region {
    pub extents: [Extent; 3],
}

impl Region {
    pub const COUNT: usize = 27;

    pub fn new(extents: [Extent; 3]) -> Self {
        Region { extents }
    }

    /// All regions, interior first.
    pub fn all() -> [Region; Region::COUNT] {
        let mut result = [Region::new([Extent::Interior; 3]); Region::COUNT];
        let mut r = 1;
        for e0 in Extent::ALL {
            for e1 in Extent::ALL {
                for e2 in Extent::ALL {
                    let region = Region::new([e0, e1, e2]);
                    if region.class() != RegionClass::Interior {
                        result[r] = region;
                        r += 1;
                    }
                }
            }
        }
        debug_assert_eq!(r, Region::COUNT);
        result
    }

    /// Stable position in `0..27`, base three over the extents.
    pub fn index(&self) -> usize {
        self.extents.iter().fold(0, |acc, e| {
            acc * 3
                + match e {
                    Extent::Min => 0,
                    Extent::Interior => 1,
                    Extent::Max => 2,
                }
        })
    }

    /// Region owning `coord` in a grid of size `n`.
    pub fn classify(coord: &Coord<3>, n: usize) -> Self {
        Region::new(std::array::from_fn(|d| Extent::classify(coord[d], n)))
    }

    /// Number of axes on which this region sits at an extreme.
    pub fn boundary_axes(&self) -> usize {
        self.extents
            .iter()
            .filter(|e| **e != Extent::Interior)
            .count()
    }

    pub fn class(&self) -> RegionClass {
        match self.boundary_axes() {
            0 => RegionClass::Interior,
            1 => RegionClass::Face,
            2 => RegionClass::Edge,
            _ => RegionClass::Corner,
        }
    }

    /// Coordinates covered by this region in a grid of size `n`.
    /// Requires `n >= 3` so that every region is non-empty.
    pub fn aabb(&self, n: usize) -> AABB<3> {
        debug_assert!(n >= 3);
        let mut bounds = Bounds::zero();
        for d in 0..3 {
            let (lo, hi) = self.extents[d].range(n);
            bounds[(d, 0)] = lo;
            bounds[(d, 1)] = hi;
        }
        AABB::new(bounds)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = |e: &Extent| match e {
            Extent::Min => "min",
            Extent::Interior => "in",
            Extent::Max => "max",
        };
        write!(
            f,
            "{:?}({}, {}, {})",
            self.class(),
            tag(&self.extents[0]),
            tag(&self.extents[1]),
            tag(&self.extents[2])
        )
    }
}
