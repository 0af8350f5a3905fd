use springy::{
    Bounds, Control, InputEvent, Key, SimConfig, Simulation, StepObserver, Vec2,
};
use wasm_bindgen::prelude::*;
use web_sys::console;

/// Forwards step events worth noticing to the browser console.
struct ConsoleObserver;

impl StepObserver for ConsoleObserver {
    fn on_degenerate_spring(&mut self, spring: usize) {
        console::warn_1(&format!("spring {spring} has coincident endpoints, skipped").into());
    }
}

fn flatten(points: impl IntoIterator<Item = Vec2<f32>>) -> Vec<f32> {
    points.into_iter().flat_map(|p| [p.x, p.y]).collect()
}

/// The mass-spring engine for a JavaScript host that owns the canvas and
/// the animation frame loop.
#[wasm_bindgen]
pub struct SpringDemo {
    sim: Simulation<f32>,
}

#[wasm_bindgen]
impl SpringDemo {
    /// Starts with an anchored two-link pendulum in an 800x600 area.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SpringDemo, JsValue> {
        Self::with_size(800.0, 600.0)
    }

    pub fn with_size(width: f32, height: f32) -> Result<SpringDemo, JsValue> {
        let config = SimConfig::new().with_bounds(Bounds::from_size(width, height));
        let sim = Simulation::with_pendulum(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SpringDemo { sim })
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        self.sim.step_observed(&mut ConsoleObserver);
    }

    /// Left click: extend the chain to `(x, y)`.
    pub fn click(&mut self, x: f32, y: f32) {
        self.sim.handle_input(InputEvent::PrimaryClick(Vec2::new(x, y)));
        console::log_1(&format!("added point {}", self.sim.point_count() - 1).into());
    }

    /// Right click: push nearby points away from `(x, y)`.
    pub fn push(&mut self, x: f32, y: f32) {
        let magnitude = self.sim.config().push_magnitude;
        let pushed = self.sim.push_nearby_points(Vec2::new(x, y), magnitude);
        console::log_1(&format!("pushed {pushed} points").into());
    }

    /// Key press. Returns false when the host should stop its loop.
    pub fn key(&mut self, key: char) -> bool {
        self.sim.handle_input(InputEvent::KeyDown(Key::from_char(key))) == Control::Continue
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(self.sim.positions())
    }

    /// Returns flat [ax0, ay0, bx0, by0, ax1, ...] spring endpoints
    pub fn segments(&self) -> Vec<f32> {
        flatten(self.sim.segments().into_iter().flat_map(|(a, b)| [a, b]))
    }

    pub fn point_radius(&self) -> f32 {
        self.sim.config().point_radius
    }

    pub fn point_count(&self) -> usize {
        self.sim.point_count()
    }

    pub fn spring_count(&self) -> usize {
        self.sim.spring_count()
    }
}
