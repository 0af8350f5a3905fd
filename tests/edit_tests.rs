use approx::assert_relative_eq;
use springy::{SimConfig, Simulation, Spring, Vec2};

fn v(x: f64, y: f64) -> Vec2<f64> {
    Vec2::new(x, y)
}

fn empty() -> Simulation<f64> {
    Simulation::new(SimConfig::default()).unwrap()
}

#[test]
fn three_clicks_build_a_chain() {
    let mut sim = empty();
    assert_eq!(sim.add_point_and_spring_on_click(100.0, 100.0), 0);
    assert_eq!(sim.add_point_and_spring_on_click(200.0, 100.0), 1);
    assert_eq!(sim.add_point_and_spring_on_click(300.0, 100.0), 2);

    assert_eq!(sim.point_count(), 3);
    assert_eq!(sim.springs(), &[Spring::new(0, 1), Spring::new(1, 2)]);
    assert!(sim.points().iter().all(|p| !p.fixed));
}

#[test]
fn click_chains_onto_existing_scene() {
    let mut sim = Simulation::with_pendulum(SimConfig::<f64>::default()).unwrap();
    let idx = sim.add_point_and_spring_on_click(600.0, 250.0);
    assert_eq!(idx, 3);
    assert_eq!(sim.springs().last(), Some(&Spring::new(2, 3)));
}

#[test]
fn fixed_first_point_then_chain() {
    let mut sim = empty();
    sim.add_point_and_spring(v(400.0, 50.0), true);
    sim.add_point_and_spring(v(400.0, 150.0), false);
    assert!(sim.point(0).fixed);
    assert!(!sim.point(1).fixed);
    assert_eq!(sim.spring_count(), 1);
}

#[test]
fn undo_removes_newest_link() {
    let mut sim = empty();
    for x in [100.0, 200.0, 300.0] {
        sim.add_point_and_spring_on_click(x, 100.0);
    }

    let removed = sim.remove_last_point_and_spring();
    assert_eq!(removed.spring, Some(Spring::new(1, 2)));
    assert_eq!(removed.point.map(|p| p.pos), Some(v(300.0, 100.0)));
    assert_eq!(sim.point_count(), 2);
    assert_eq!(sim.springs(), &[Spring::new(0, 1)]);
}

#[test]
fn undo_never_drops_last_point() {
    let mut sim = Simulation::with_pendulum(SimConfig::<f64>::default()).unwrap();
    for _ in 0..10 {
        sim.remove_last_point_and_spring();
        assert!(sim.point_count() >= 1);
        assert!(sim.topology().is_consistent());
    }
    assert_eq!(sim.point_count(), 1);
    assert_eq!(sim.spring_count(), 0);
    assert!(sim.point(0).fixed);
}

#[test]
fn undo_then_click_reuses_index() {
    let mut sim = empty();
    sim.add_point_and_spring_on_click(100.0, 100.0);
    sim.add_point_and_spring_on_click(200.0, 100.0);
    sim.remove_last_point_and_spring();
    assert_eq!(sim.add_point_and_spring_on_click(150.0, 150.0), 1);
    assert_eq!(sim.springs(), &[Spring::new(0, 1)]);
}

#[test]
fn push_only_reaches_points_inside_radius() {
    let mut sim = empty();
    let far = sim.add_point(v(460.0, 300.0), false);
    let near = sim.add_point(v(410.0, 300.0), false);

    let pushed = sim.push_nearby_points(v(400.0, 300.0), 35.0);

    assert_eq!(pushed, 1);
    assert_eq!(sim.point(far).vel, Vec2::zero());
    assert_relative_eq!(sim.point(near).vel.x, 35.0, epsilon = 1e-12);
    assert_eq!(sim.point(near).vel.y, 0.0);
}

#[test]
fn push_magnitude_is_independent_of_distance() {
    let mut sim = empty();
    let diagonal = sim.add_point(v(406.0, 308.0), false);
    let close = sim.add_point(v(399.0, 299.0), false);

    sim.push_nearby_points(v(400.0, 300.0), 35.0);

    let d = sim.point(diagonal).vel;
    assert_relative_eq!(d.length(), 35.0, epsilon = 1e-9);
    assert_relative_eq!(d.x, 21.0, epsilon = 1e-9);
    assert_relative_eq!(d.y, 28.0, epsilon = 1e-9);
    assert_relative_eq!(sim.point(close).vel.length(), 35.0, epsilon = 1e-9);
}

#[test]
fn push_adds_to_existing_velocity() {
    let mut sim = empty();
    sim.add_point(v(400.0, 320.0), false);
    sim.topology_mut().point_mut(0).vel = v(1.0, 2.0);
    sim.push_nearby_points(v(400.0, 300.0), 10.0);
    assert_relative_eq!(sim.point(0).vel.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(sim.point(0).vel.y, 12.0, epsilon = 1e-12);
}

#[test]
fn push_radius_is_exclusive() {
    let mut sim = empty();
    sim.add_point(v(450.0, 300.0), false);
    assert_eq!(sim.push_nearby_points(v(400.0, 300.0), 35.0), 0);
    assert_eq!(sim.point(0).vel, Vec2::zero());
}

#[test]
fn push_skips_fixed_and_centred_points() {
    let mut sim = empty();
    sim.add_point(v(410.0, 300.0), true);
    sim.add_point(v(400.0, 300.0), false);

    assert_eq!(sim.push_nearby_points(v(400.0, 300.0), 35.0), 0);
    for p in sim.points() {
        assert_eq!(p.vel, Vec2::zero());
        assert!(p.is_finite());
    }
}

#[test]
fn push_radius_follows_config() {
    let mut sim = Simulation::new(SimConfig::<f64>::default().with_push_radius(100.0)).unwrap();
    sim.add_point(v(460.0, 300.0), false);
    assert_eq!(sim.push_nearby_points(v(400.0, 300.0), 5.0), 1);
}
