//! Point masses.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass with explicit velocity.
///
/// Every point has unit mass, so forces and velocity changes are the same
/// thing. A fixed point never moves and ignores every force and impulse.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub fixed: bool,
}

impl<F: Float> Point<F> {
    /// A free point at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        Point { pos, vel: Vec2::zero(), fixed: false }
    }

    /// An immovable anchor.
    pub fn fixed(pos: Vec2<F>) -> Self {
        Point { pos, vel: Vec2::zero(), fixed: true }
    }

    pub fn with_fixed(pos: Vec2<F>, fixed: bool) -> Self {
        Point { pos, vel: Vec2::zero(), fixed }
    }

    /// Add `dv` to the velocity unless the point is fixed.
    pub fn accelerate(&mut self, dv: Vec2<F>) {
        if !self.fixed {
            self.vel += dv;
        }
    }

    /// Advance the position by one unit time step.
    pub fn integrate(&mut self) {
        if !self.fixed {
            self.pos += self.vel;
        }
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }

    /// Kinetic energy with unit mass. Fixed points contribute nothing.
    pub fn kinetic_energy(&self) -> F {
        if self.fixed {
            F::zero()
        } else {
            F::half() * self.vel.length_sq()
        }
    }
}
