//! Linear springs between two points.

use crate::float::Float;
use crate::point::Point;
use crate::vec::Vec2;

/// Below this length a spring has no usable direction.
pub(crate) const DEGENERATE_LENGTH: f64 = 1e-10;

/// An ideal spring joining points `p1` and `p2` by index.
///
/// Rest length, stiffness and damping live in [`SimConfig`](crate::SimConfig)
/// and are shared by every spring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Spring {
    pub p1: usize,
    pub p2: usize,
}

impl Spring {
    pub fn new(p1: usize, p2: usize) -> Self {
        Spring { p1, p2 }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.p1, self.p2)
    }

    /// Whether the spring references `index` at either end.
    pub fn touches(&self, index: usize) -> bool {
        self.p1 == index || self.p2 == index
    }

    /// Current length of the spring.
    pub fn length<F: Float>(&self, points: &[Point<F>]) -> F {
        points[self.p1].pos.distance(points[self.p2].pos)
    }

    /// Elastic force along the `p1 -> p2` direction.
    ///
    /// The magnitude is `stiffness * (rest_length - length)`, positive when the
    /// spring is compressed. `p2` receives the returned vector and `p1` its
    /// negation. Returns `None` when the endpoints coincide.
    pub fn force<F: Float>(&self, points: &[Point<F>], stiffness: F, rest_length: F) -> Option<Vec2<F>> {
        let delta = points[self.p2].pos - points[self.p1].pos;
        let distance = delta.length();
        if distance.is_near_zero(F::from_f64(DEGENERATE_LENGTH)) {
            return None;
        }
        let dir = delta.scale(F::one() / distance);
        Some(dir.scale(stiffness * (rest_length - distance)))
    }

    /// Potential energy `½ k (L0 - L)²`.
    pub fn potential_energy<F: Float>(&self, points: &[Point<F>], stiffness: F, rest_length: F) -> F {
        let stretch = rest_length - self.length(points);
        F::half() * stiffness * stretch * stretch
    }
}
