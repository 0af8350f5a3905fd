use springy::{SimConfig, Simulation, Vec2};

fn run_session() -> Simulation<f32> {
    let mut sim = Simulation::with_pendulum(SimConfig::default()).unwrap();
    for frame in 0..600 {
        match frame {
            60 => { sim.add_point_and_spring_on_click(600.0, 250.0); }
            120 => { sim.add_point_and_spring_on_click(650.0, 320.0); }
            200 => { sim.push_nearby_points(Vec2::new(620.0, 300.0), 35.0); }
            400 => { sim.remove_last_point_and_spring(); }
            _ => {}
        }
        sim.step();
    }
    sim
}

#[test]
fn session_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run_session()).collect();

    for r in &results[1..] {
        assert_eq!(results[0].point_count(), r.point_count());
        for (a, b) in results[0].points().iter().zip(r.points()) {
            assert_eq!(a.pos.x, b.pos.x);
            assert_eq!(a.pos.y, b.pos.y);
            assert_eq!(a.vel.x, b.vel.x);
            assert_eq!(a.vel.y, b.vel.y);
        }
    }
}

#[test]
fn cloned_simulation_steps_identically() {
    let mut a = run_session();
    let mut b = a.clone();
    for _ in 0..100 {
        a.step();
        b.step();
    }
    assert_eq!(a.positions(), b.positions());
}
