//! Interactive 2D mass-spring simulation.
//!
//! `springy` simulates point masses joined by linear springs, stepped one
//! frame at a time under gravity, spring forces, damping and boundary
//! reflection, while the user edits the system live: clicking to extend a
//! chain, undoing the last link, and pushing points away with an impulse.
//!
//! The crate is the engine only. Windowing, event polling, drawing and the
//! frame loop belong to the host, which calls [`Simulation::step`] once per
//! frame, forwards decoded [`InputEvent`]s, and reads back
//! [`Simulation::positions`] and [`Simulation::segments`] to draw.
//!
//! ```
//! use springy::{SimConfig, Simulation, Vec2};
//!
//! let mut sim: Simulation<f64> = Simulation::new(SimConfig::default()).unwrap();
//! sim.add_point(Vec2::new(400.0, 100.0), true);
//! sim.add_point_and_spring_on_click(400.0, 200.0);
//! sim.add_point_and_spring_on_click(500.0, 200.0);
//! for _ in 0..60 {
//!     sim.step();
//! }
//! assert_eq!(sim.spring_count(), 2);
//! ```
//!
//! # Features
//!
//! - **Index-based topology**: points and springs live in dense arenas;
//!   removal is tail-only so spring indices never dangle
//! - **Deterministic stepping**: no RNG, no wall clock
//! - **Numerically guarded**: coincident points never produce NaN
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod spring;
pub mod bounds;
pub mod topology;
pub mod simulation;
pub mod edit;
pub mod input;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::Point;
pub use spring::Spring;
pub use bounds::{Axis, Bounds, Contact};
pub use topology::{Removed, Topology};
pub use simulation::Simulation;
pub use input::{Control, InputEvent, Key};
pub use config::SimConfig;
pub use observer::{StepObserver, NoOpStepObserver, StepStats};
pub use error::SimError;
