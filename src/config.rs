//! Simulation configuration.

use crate::bounds::Bounds;
use crate::error::SimError;
use crate::float::Float;
use crate::vec::Vec2;

/// Shared physical constants and interaction settings.
///
/// Every spring uses the same rest length, stiffness and damping. All values
/// are in per-step units: the stepper advances one unit of time per call.
///
/// # Builder Pattern
/// ```
/// use springy::{Bounds, SimConfig, Vec2};
///
/// let config: SimConfig<f64> = SimConfig::new()
///     .with_gravity(Vec2::new(0.0, 0.25))
///     .with_stiffness(0.05)
///     .with_bounds(Bounds::from_size(1024.0, 768.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig<F: Float> {
    /// Added to every free point's velocity each step. Default: `(0, 0.5)`,
    /// which pulls downwards in screen coordinates.
    pub gravity: Vec2<F>,
    /// Spring constant converting length deviation into force. Default: 0.08.
    pub stiffness: F,
    /// Length at which a spring exerts no force. Default: 100.
    pub rest_length: F,
    /// Per-endpoint velocity damping folded into the spring update. Default: 0.16.
    pub damping: F,
    /// Region points are kept inside. Default: `(0, 0)..(800, 600)`.
    pub bounds: Bounds<F>,
    /// Radius of every point, used for boundary contact. Default: 5.
    pub point_radius: F,
    /// Radial impulses only reach points strictly closer than this. Default: 50.
    pub push_radius: F,
    /// Impulse strength used for decoded push input. Default: 35.
    pub push_magnitude: F,
}

impl<F: Float> SimConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimConfig {
            gravity: Vec2::new(F::zero(), F::from_f64(0.5)),
            stiffness: F::from_f64(0.08),
            rest_length: F::from_f64(100.0),
            damping: F::from_f64(0.16),
            bounds: Bounds::from_size(F::from_f64(800.0), F::from_f64(600.0)),
            point_radius: F::from_f64(5.0),
            push_radius: F::from_f64(50.0),
            push_magnitude: F::from_f64(35.0),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_point_radius(mut self, radius: F) -> Self {
        self.point_radius = radius;
        self
    }

    pub fn with_push_radius(mut self, radius: F) -> Self {
        self.push_radius = radius;
        self
    }

    pub fn with_push_magnitude(mut self, magnitude: F) -> Self {
        self.push_magnitude = magnitude;
        self
    }

    /// Check that the configuration can drive a stable simulation.
    ///
    /// # Errors
    /// Returns the first problem found: a non-finite value, a negative
    /// stiffness, damping or radius, or bounds too small to hold a point.
    pub fn validate(&self) -> Result<(), SimError> {
        let scalars = [
            ("gravity.x", self.gravity.x),
            ("gravity.y", self.gravity.y),
            ("stiffness", self.stiffness),
            ("rest_length", self.rest_length),
            ("damping", self.damping),
            ("bounds.min.x", self.bounds.min.x),
            ("bounds.min.y", self.bounds.min.y),
            ("bounds.max.x", self.bounds.max.x),
            ("bounds.max.y", self.bounds.max.y),
            ("point_radius", self.point_radius),
            ("push_radius", self.push_radius),
            ("push_magnitude", self.push_magnitude),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::NonFiniteParameter(*name));
        }

        if self.stiffness < F::zero() {
            return Err(SimError::InvalidStiffness);
        }
        if self.damping < F::zero() {
            return Err(SimError::InvalidDamping);
        }
        if self.point_radius < F::zero() || self.push_radius <= F::zero() {
            return Err(SimError::InvalidRadius);
        }

        let diameter = self.point_radius + self.point_radius;
        if self.bounds.width() < diameter || self.bounds.height() < diameter {
            return Err(SimError::InvalidBounds);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
