//! The simulation: a topology plus the configuration that drives it.

use crate::bounds::Axis;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::Point;
use crate::spring::Spring;
use crate::topology::Topology;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A mass-spring system advanced one unit time step per [`step`](Self::step).
///
/// This is the single owner of all simulation state. Input handling,
/// stepping and rendering all go through it, and every mutation takes
/// `&mut self`, so an edit can never land in the middle of a step.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    pub(crate) topology: Topology<F>,
    pub(crate) config: SimConfig<F>,
    steps: u64,
}

impl<F: Float> Simulation<F> {
    /// An empty simulation.
    ///
    /// # Errors
    /// Whatever [`SimConfig::validate`] rejects.
    pub fn new(config: SimConfig<F>) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Simulation {
            topology: Topology::new(),
            config,
            steps: 0,
        })
    }

    /// A fixed anchor with a two-link chain hanging off it: anchor at
    /// (400, 100), free points at (400, 200) and (500, 200), springs 0–1 and 1–2.
    ///
    /// # Errors
    /// Whatever [`SimConfig::validate`] rejects.
    pub fn with_pendulum(config: SimConfig<F>) -> Result<Self, SimError> {
        let mut sim = Self::new(config)?;
        let v = |x: f64, y: f64| Vec2::new(F::from_f64(x), F::from_f64(y));
        let anchor = sim.add_point(v(400.0, 100.0), true);
        let a = sim.add_point(v(400.0, 200.0), false);
        let b = sim.add_point(v(500.0, 200.0), false);
        sim.add_spring(anchor, a);
        sim.add_spring(a, b);
        Ok(sim)
    }

    pub fn config(&self) -> &SimConfig<F> { &self.config }
    pub fn topology(&self) -> &Topology<F> { &self.topology }
    pub fn topology_mut(&mut self) -> &mut Topology<F> { &mut self.topology }

    /// Number of completed steps.
    pub fn steps(&self) -> u64 { self.steps }

    /// Append a point and return its index.
    pub fn add_point(&mut self, pos: Vec2<F>, fixed: bool) -> usize {
        self.topology.add_point(pos, fixed)
    }

    /// Append a spring between existing points `i` and `j`.
    pub fn add_spring(&mut self, i: usize, j: usize) -> usize {
        self.topology.add_spring(i, j)
    }

    /// Append a spring, rejecting missing endpoints.
    ///
    /// # Errors
    /// [`SimError::PointOutOfBounds`] for the first bad index.
    pub fn try_add_spring(&mut self, i: usize, j: usize) -> Result<usize, SimError> {
        self.topology.try_add_spring(i, j)
    }

    /// Advance the system by one frame.
    pub fn step(&mut self) {
        self.step_observed(&mut NoOpStepObserver);
    }

    /// Advance the system by one frame, reporting to `observer`.
    ///
    /// Forces for every spring are accumulated from the pre-step positions
    /// before any point moves; only then are positions integrated and
    /// resolved against the bounds.
    pub fn step_observed<O: StepObserver>(&mut self, observer: &mut O) {
        self.calculate_forces(observer);
        observer.on_forces_accumulated();
        self.update_points(observer);
        self.steps += 1;
        observer.on_step_complete(self.steps);
    }

    /// Gravity, then every spring in insertion order.
    ///
    /// Damping is folded into each endpoint's update and scales with that
    /// endpoint's own current velocity, not the relative velocity.
    fn calculate_forces<O: StepObserver>(&mut self, observer: &mut O) {
        let SimConfig { gravity, stiffness, rest_length, damping, .. } = self.config;
        let Topology { points, springs } = &mut self.topology;

        for p in points.iter_mut() {
            p.accelerate(gravity);
        }

        for (i, spring) in springs.iter().enumerate() {
            let Some(force) = spring.force(points.as_slice(), stiffness, rest_length) else {
                observer.on_degenerate_spring(i);
                continue;
            };

            let a = &mut points[spring.p1];
            if !a.fixed {
                let dv = force - a.vel.scale(damping);
                a.vel -= dv;
            }
            let b = &mut points[spring.p2];
            if !b.fixed {
                let dv = force - b.vel.scale(damping);
                b.vel += dv;
            }
        }
    }

    /// Explicit unit-step integration followed by boundary reflection.
    fn update_points<O: StepObserver>(&mut self, observer: &mut O) {
        let bounds = self.config.bounds;
        let radius = self.config.point_radius;

        for (i, p) in self.topology.points.iter_mut().enumerate() {
            if p.fixed {
                continue;
            }
            p.integrate();
            let contact = bounds.resolve(&mut p.pos, &mut p.vel, radius);
            if contact.x {
                observer.on_boundary_contact(i, Axis::X);
            }
            if contact.y {
                observer.on_boundary_contact(i, Axis::Y);
            }
        }
    }

    pub fn point_count(&self) -> usize { self.topology.point_count() }
    pub fn spring_count(&self) -> usize { self.topology.spring_count() }
    pub fn point(&self, index: usize) -> &Point<F> { self.topology.point(index) }
    pub fn points(&self) -> &[Point<F>] { self.topology.points() }
    pub fn springs(&self) -> &[Spring] { self.topology.springs() }

    /// Point positions in index order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.topology.points.iter().map(|p| p.pos).collect()
    }

    /// Each spring as its pair of endpoint positions, for drawing.
    pub fn segments(&self) -> AllocVec<(Vec2<F>, Vec2<F>)> {
        let points = &self.topology.points;
        self.topology
            .springs
            .iter()
            .map(|s| (points[s.p1].pos, points[s.p2].pos))
            .collect()
    }

    /// Total kinetic energy of the free points (unit mass).
    pub fn kinetic_energy(&self) -> F {
        self.topology
            .points
            .iter()
            .fold(F::zero(), |acc, p| acc + p.kinetic_energy())
    }

    /// Total elastic energy stored in the springs.
    pub fn potential_energy(&self) -> F {
        let points = &self.topology.points;
        let (k, l0) = (self.config.stiffness, self.config.rest_length);
        self.topology
            .springs
            .iter()
            .fold(F::zero(), |acc, s| acc + s.potential_energy(points, k, l0))
    }

    pub fn total_energy(&self) -> F {
        self.kinetic_energy() + self.potential_energy()
    }
}
