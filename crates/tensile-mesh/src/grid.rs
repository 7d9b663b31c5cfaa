//! Implicit grid topology derived from a flat vertex count.
//!
//! Vertex `i` sits at column `x = i % width`, row `y = i / width`.
//! Each vertex is coupled by springs to its up-to-eight immediate grid
//! neighbors (4 orthogonal + 4 diagonal). Edges at the grid boundary are
//! simply absent; there is no wrap-around.
//!
//! When no width is given, the grid is assumed square with
//! `width = round(sqrt(N))`. For non-square `N` this is an approximation:
//! trailing vertices get neighbor coordinates that do not match their true
//! memory layout. Neighbors whose flat index would reach past `N` are
//! reported absent.

use serde::{Deserialize, Serialize};
use tensile_types::{TensileError, TensileResult};

/// The eight `(dx, dy)` spring directions, in the fixed order every
/// accumulation pass visits them.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Row-major grid layout over `vertex_count` point masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTopology {
    vertex_count: usize,
    width: usize,
    height: usize,
}

impl GridTopology {
    /// Infer a square grid: `width = height = round(sqrt(vertex_count))`.
    ///
    /// An empty vertex set has no grid and is rejected.
    pub fn from_vertex_count(vertex_count: usize) -> TensileResult<Self> {
        if vertex_count == 0 {
            return Err(TensileError::InvalidConfiguration(
                "Cannot infer a grid from zero vertices".into(),
            ));
        }
        let width = (vertex_count as f64).sqrt().round() as usize;
        Ok(Self {
            vertex_count,
            width,
            height: width,
        })
    }

    /// Grid with an explicit row width. Row count is `ceil(vertex_count / width)`.
    pub fn with_width(vertex_count: usize, width: usize) -> TensileResult<Self> {
        if width == 0 {
            return Err(TensileError::InvalidConfiguration(
                "Grid width must be at least 1".into(),
            ));
        }
        Ok(Self {
            vertex_count,
            width,
            height: vertex_count.div_ceil(width),
        })
    }

    /// Explicit width when given, square inference otherwise.
    pub fn resolve(vertex_count: usize, width: Option<usize>) -> TensileResult<Self> {
        match width {
            Some(w) => Self::with_width(vertex_count, w),
            None => Self::from_vertex_count(vertex_count),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when every grid cell maps to exactly one vertex.
    pub fn is_exact(&self) -> bool {
        self.width * self.height == self.vertex_count
    }

    /// Returns `(column, row)` of vertex `i`. `i` must be below `vertex_count`.
    #[inline]
    pub fn coord(&self, i: usize) -> (usize, usize) {
        (i % self.width, i / self.width)
    }

    /// Flat index of `(x, y)`, if that cell holds a vertex.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y * self.width + x;
        (i < self.vertex_count).then_some(i)
    }

    /// The neighbor of `i` one step along `(dx, dy)`.
    ///
    /// `None` is the normal answer at a grid edge: callers treat it as a
    /// zero spring contribution. `(0, 0)` is not a neighbor.
    #[inline]
    pub fn neighbor(&self, i: usize, dx: i32, dy: i32) -> Option<usize> {
        if i >= self.vertex_count || (dx == 0 && dy == 0) {
            return None;
        }
        let (x, y) = self.coord(i);
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || ny < 0 {
            return None;
        }
        self.index(nx as usize, ny as usize)
    }

    /// Present neighbors of `i`, in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.neighbor(i, dx, dy))
    }

    /// Number of springs attached to vertex `i` (0..=8).
    pub fn neighbor_count(&self, i: usize) -> usize {
        self.neighbors(i).count()
    }
}
