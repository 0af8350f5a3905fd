//! Storage for points and the springs that join them.

use crate::error::SimError;
use crate::float::Float;
use crate::point::Point;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// What [`Topology::remove_last`] took out.
#[derive(Clone, Debug, PartialEq)]
pub struct Removed<F: Float> {
    pub spring: Option<Spring>,
    pub point: Option<Point<F>>,
}

impl<F: Float> Removed<F> {
    pub fn is_empty(&self) -> bool {
        self.spring.is_none() && self.point.is_none()
    }
}

/// Dense arenas of points and springs.
///
/// Springs refer to points by index. Points are only ever appended or removed
/// from the tail, and always together with the newest spring, so every
/// surviving spring keeps referencing live points.
#[derive(Clone, Debug)]
pub struct Topology<F: Float> {
    pub(crate) points: AllocVec<Point<F>>,
    pub(crate) springs: AllocVec<Spring>,
}

impl<F: Float> Topology<F> {
    pub fn new() -> Self {
        Topology {
            points: AllocVec::new(),
            springs: AllocVec::new(),
        }
    }

    /// Append a point and return its index.
    pub fn add_point(&mut self, pos: Vec2<F>, fixed: bool) -> usize {
        let idx = self.points.len();
        self.points.push(Point::with_fixed(pos, fixed));
        idx
    }

    /// Append a spring between points `i` and `j`.
    ///
    /// Both indices must refer to existing points. Debug builds assert this;
    /// use [`try_add_spring`](Self::try_add_spring) when the indices come from
    /// outside the engine.
    pub fn add_spring(&mut self, i: usize, j: usize) -> usize {
        debug_assert!(
            i < self.points.len() && j < self.points.len(),
            "spring ({}, {}) references a missing point (count: {})",
            i,
            j,
            self.points.len(),
        );
        let idx = self.springs.len();
        self.springs.push(Spring::new(i, j));
        idx
    }

    /// Append a spring after checking both endpoints exist.
    ///
    /// # Errors
    /// [`SimError::PointOutOfBounds`] naming the first bad index.
    pub fn try_add_spring(&mut self, i: usize, j: usize) -> Result<usize, SimError> {
        self.check_index(i)?;
        self.check_index(j)?;
        Ok(self.add_spring(i, j))
    }

    /// Remove the newest spring, then the newest point.
    ///
    /// The spring goes whenever one exists. The point goes only while more
    /// than one point remains, so the store never empties once populated.
    pub fn remove_last(&mut self) -> Removed<F> {
        let spring = self.springs.pop();
        let point = if self.points.len() > 1 {
            self.points.pop()
        } else {
            None
        };
        // Popping a point invalidates its index; branching topologies built
        // with `add_spring` may still hold older springs onto it.
        if point.is_some() {
            let last = self.points.len();
            self.springs.retain(|s| !s.touches(last));
        }
        Removed { spring, point }
    }

    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn point(&self, index: usize) -> &Point<F> { &self.points[index] }
    pub fn point_mut(&mut self, index: usize) -> &mut Point<F> { &mut self.points[index] }
    pub fn get_point(&self, index: usize) -> Option<&Point<F>> { self.points.get(index) }
    pub fn spring(&self, index: usize) -> &Spring { &self.springs[index] }

    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn springs(&self) -> &[Spring] { &self.springs }

    /// Re-point an existing spring at two other points.
    ///
    /// # Errors
    /// [`SimError::PointOutOfBounds`] if either endpoint is missing, or
    /// [`SimError::SpringOutOfBounds`] if the spring is; nothing changes then.
    pub fn reconnect_spring(&mut self, spring: usize, p1: usize, p2: usize) -> Result<(), SimError> {
        self.check_index(p1)?;
        self.check_index(p2)?;
        let count = self.springs.len();
        let s = self
            .springs
            .get_mut(spring)
            .ok_or(SimError::SpringOutOfBounds { index: spring, count })?;
        *s = Spring::new(p1, p2);
        Ok(())
    }

    /// Whether every spring references live points.
    pub fn is_consistent(&self) -> bool {
        let n = self.points.len();
        self.springs.iter().all(|s| s.p1 < n && s.p2 < n)
    }

    fn check_index(&self, index: usize) -> Result<(), SimError> {
        let count = self.points.len();
        if index < count {
            Ok(())
        } else {
            Err(SimError::PointOutOfBounds { index, count })
        }
    }
}

impl<F: Float> Default for Topology<F> {
    fn default() -> Self {
        Self::new()
    }
}
