//! Step observer trait for monitoring simulation progress.

use crate::bounds::Axis;

/// Trait for observing simulation steps.
///
/// Implement this to log, visualise or count what happens inside a step.
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called once gravity and every spring force have been applied,
    /// before any point moves.
    fn on_forces_accumulated(&mut self) {}

    /// Called when a spring's endpoints coincide and it was skipped.
    fn on_degenerate_spring(&mut self, _spring: usize) {}

    /// Called when a point was reflected off the boundary on `axis`.
    fn on_boundary_contact(&mut self, _point: usize, _axis: Axis) {}

    /// Called when a step is fully complete. `step` counts from 1.
    fn on_step_complete(&mut self, _step: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts step events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: u64,
    pub degenerate_springs: usize,
    pub boundary_contacts: usize,
}

impl StepObserver for StepStats {
    fn on_degenerate_spring(&mut self, _spring: usize) {
        self.degenerate_springs += 1;
    }

    fn on_boundary_contact(&mut self, _point: usize, _axis: Axis) {
        self.boundary_contacts += 1;
    }

    fn on_step_complete(&mut self, _step: u64) {
        self.steps += 1;
    }
}
