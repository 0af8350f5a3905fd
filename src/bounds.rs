//! Axis-aligned boundary that points bounce off.

use crate::float::Float;
use crate::vec::Vec2;

/// One of the two simulation axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Which axes a point touched while being resolved against the bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub x: bool,
    pub y: bool,
}

impl Contact {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// The permitted region `[min, max]` on each axis. Points are discs, so the
/// usable range for a point centre shrinks by its radius on every side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Bounds { min, max }
    }

    /// Bounds spanning `(0, 0)..(width, height)`, i.e. screen space.
    pub fn from_size(width: F, height: F) -> Self {
        Bounds { min: Vec2::zero(), max: Vec2::new(width, height) }
    }

    pub fn width(&self) -> F {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> F {
        self.max.y - self.min.y
    }

    /// Whether a disc of `radius` centred at `pos` lies inside (touching allowed).
    pub fn contains(&self, pos: Vec2<F>, radius: F) -> bool {
        pos.x >= self.min.x + radius
            && pos.x <= self.max.x - radius
            && pos.y >= self.min.y + radius
            && pos.y <= self.max.y - radius
    }

    /// Reflect and clamp a point that reached the boundary.
    ///
    /// Each axis is handled on its own: touching or crossing either side
    /// negates that velocity component and clamps the position back into
    /// `[min + radius, max - radius]`.
    pub fn resolve(&self, pos: &mut Vec2<F>, vel: &mut Vec2<F>, radius: F) -> Contact {
        Contact {
            x: resolve_axis(&mut pos.x, &mut vel.x, self.min.x, self.max.x, radius),
            y: resolve_axis(&mut pos.y, &mut vel.y, self.min.y, self.max.y, radius),
        }
    }
}

fn resolve_axis<F: Float>(p: &mut F, v: &mut F, lower: F, upper: F, radius: F) -> bool {
    if *p - radius <= lower || *p + radius >= upper {
        *v = -*v;
        *p = Float::clamp(*p, lower + radius, upper - radius);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_point_untouched() {
        let bounds = Bounds::from_size(800.0f64, 600.0);
        let mut pos = Vec2::new(400.0, 300.0);
        let mut vel = Vec2::new(3.0, -2.0);
        let contact = bounds.resolve(&mut pos, &mut vel, 5.0);
        assert!(!contact.any());
        assert_eq!(pos, Vec2::new(400.0, 300.0));
        assert_eq!(vel, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn floor_reflects_and_clamps_only_y() {
        let bounds = Bounds::from_size(800.0f64, 600.0);
        let mut pos = Vec2::new(400.0, 610.0);
        let mut vel = Vec2::new(1.0, 12.0);
        let contact = bounds.resolve(&mut pos, &mut vel, 5.0);
        assert_eq!(contact, Contact { x: false, y: true });
        assert_eq!(pos, Vec2::new(400.0, 595.0));
        assert_eq!(vel, Vec2::new(1.0, -12.0));
    }

    #[test]
    fn corner_resolves_both_axes() {
        let bounds = Bounds::from_size(800.0f64, 600.0);
        let mut pos = Vec2::new(-3.0, -8.0);
        let mut vel = Vec2::new(-4.0, -6.0);
        let contact = bounds.resolve(&mut pos, &mut vel, 5.0);
        assert_eq!(contact, Contact { x: true, y: true });
        assert_eq!(pos, Vec2::new(5.0, 5.0));
        assert_eq!(vel, Vec2::new(4.0, 6.0));
    }

    #[test]
    fn touching_counts_as_contact() {
        let bounds = Bounds::from_size(100.0f32, 100.0);
        let mut pos = Vec2::new(95.0, 50.0);
        let mut vel = Vec2::new(2.0, 0.0);
        let contact = bounds.resolve(&mut pos, &mut vel, 5.0);
        assert!(contact.x);
        assert_eq!(vel.x, -2.0);
        assert_eq!(pos.x, 95.0);
    }

    #[test]
    fn offset_bounds() {
        let bounds = Bounds::new(Vec2::new(-10.0f64, -10.0), Vec2::new(10.0, 10.0));
        assert_eq!(bounds.width(), 20.0);
        assert!(bounds.contains(Vec2::new(0.0, 0.0), 5.0));
        assert!(!bounds.contains(Vec2::new(6.0, 0.0), 5.0));
    }
}
