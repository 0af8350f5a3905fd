//! Editing operations driven by user input: chain building, undo and
//! radial impulses.

use crate::float::Float;
use crate::simulation::Simulation;
use crate::spring::DEGENERATE_LENGTH;
use crate::topology::Removed;
use crate::vec::Vec2;

impl<F: Float> Simulation<F> {
    /// Append a free point at `(x, y)` and join it to the previous point.
    ///
    /// Repeated calls grow an open chain. Returns the new point's index.
    pub fn add_point_and_spring_on_click(&mut self, x: F, y: F) -> usize {
        self.add_point_and_spring(Vec2::new(x, y), false)
    }

    /// Append a point and, unless it is the first, a spring from the
    /// previous point to it.
    pub fn add_point_and_spring(&mut self, pos: Vec2<F>, fixed: bool) -> usize {
        let idx = self.topology.add_point(pos, fixed);
        if idx > 0 {
            self.topology.add_spring(idx - 1, idx);
        }
        idx
    }

    /// Undo the last chain link: drop the newest spring and, while more than
    /// one point remains, the newest point.
    pub fn remove_last_point_and_spring(&mut self) -> Removed<F> {
        self.topology.remove_last()
    }

    /// Kick free points away from `center`.
    ///
    /// Every free point strictly within `push_radius` of `center` gains a
    /// velocity of length `magnitude` pointing from `center` towards it. A
    /// point sitting exactly on `center` has no direction and is left alone.
    /// Returns how many points were pushed.
    pub fn push_nearby_points(&mut self, center: Vec2<F>, magnitude: F) -> usize {
        let radius = self.config.push_radius;
        let epsilon = F::from_f64(DEGENERATE_LENGTH);
        let mut pushed = 0;

        for p in self.topology.points.iter_mut().filter(|p| !p.fixed) {
            let delta = p.pos - center;
            if delta.length() >= radius {
                continue;
            }
            if let Some(dir) = delta.try_normalize(epsilon) {
                p.accelerate(dir.scale(magnitude));
                pushed += 1;
            }
        }
        pushed
    }
}
