//! 2D vector type used for positions, velocities and forces.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A 2D vector in simulation space (x to the right, y down, as on screen).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Length (magnitude).
    pub fn length(self) -> F { self.x.hypot(self.y) }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F { self.dot(self) }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F { (other - self).length() }

    /// Unit vector in the same direction, or `None` when the length is too
    /// small to define a direction.
    pub fn try_normalize(self, epsilon: F) -> Option<Self> {
        let len = self.length();
        if len.is_near_zero(epsilon) {
            None
        } else {
            Some(self.scale(F::one() / len))
        }
    }

    /// Both components are finite.
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f64, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn try_normalize_zero_is_none() {
        let v: Vec2<f32> = Vec2::zero();
        assert_eq!(v.try_normalize(1e-10), None);
    }

    #[test]
    fn try_normalize_unit_length() {
        let n = Vec2::new(0.0f64, -7.5).try_normalize(1e-10).unwrap();
        assert_eq!(n.x, 0.0);
        assert!((n.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_detected() {
        assert!(!Vec2::new(f64::NAN, 0.0).is_finite());
        assert!(Vec2::new(1.0f64, 2.0).is_finite());
    }
}
