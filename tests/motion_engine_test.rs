//! Tests for tick-driven movement on the motion lattice.

use grid_arcade::{Heading, MotionConfig, MotionEngine, MotionStatus, Point};

fn engine_at(x: i32, y: i32, heading: Heading, length: usize) -> MotionEngine {
    let config = MotionConfig::new(1000, 600, 50)
        .with_start(Point::new(x, y), heading)
        .with_length(length);
    MotionEngine::new(config)
}

#[test]
fn test_right_edge_collision() {
    let mut engine = engine_at(950, 0, Heading::Right, 1);
    let update = engine.tick();
    assert_eq!(update.status, MotionStatus::Collided);
    assert_eq!(update.body, vec![Point::new(950, 0)]);
}

#[test]
fn test_edge_near_integer_limit_collides() {
    let config = MotionConfig::new(i32::MAX, 600, 50)
        .with_start(Point::new(2_147_483_600, 0), Heading::Right);
    assert!(config.validate().is_ok());

    let mut engine = MotionEngine::new(config);
    let update = engine.tick();
    assert_eq!(update.status, MotionStatus::Collided);
    assert_eq!(update.body, vec![Point::new(2_147_483_600, 0)]);
}

#[test]
fn test_last_column_is_reachable() {
    let mut engine = engine_at(900, 0, Heading::Right, 1);
    let update = engine.tick();
    assert_eq!(update.status, MotionStatus::Running);
    assert_eq!(update.body, vec![Point::new(950, 0)]);
}

#[test]
fn test_bottom_edge_collision() {
    let mut engine = engine_at(0, 550, Heading::Down, 1);
    assert_eq!(engine.tick().status, MotionStatus::Collided);
}

#[test]
fn test_left_and_top_edges_collide() {
    let mut left = engine_at(0, 100, Heading::Left, 1);
    assert_eq!(left.tick().status, MotionStatus::Collided);

    let mut top = engine_at(100, 0, Heading::Up, 1);
    assert_eq!(top.tick().status, MotionStatus::Collided);
}

#[test]
fn test_length_is_preserved_by_ticks() {
    let mut engine = engine_at(200, 100, Heading::Right, 4);
    assert_eq!(engine.body().len(), 4);

    for heading in [Heading::Down, Heading::Right, Heading::Up, Heading::Up] {
        engine.set_heading(heading);
        let update = engine.tick();
        assert_eq!(update.status, MotionStatus::Running);
        assert_eq!(update.body.len(), 4);
    }
}

#[test]
fn test_tick_translates_head_and_drops_tail() {
    let mut engine = engine_at(100, 100, Heading::Right, 3);
    assert_eq!(
        engine.body().to_vec(),
        vec![Point::new(0, 100), Point::new(50, 100), Point::new(100, 100)]
    );

    let update = engine.tick();
    assert_eq!(
        update.body,
        vec![Point::new(50, 100), Point::new(100, 100), Point::new(150, 100)]
    );
}

#[test]
fn test_turn_takes_effect_on_next_tick() {
    let mut engine = engine_at(100, 100, Heading::Right, 2);
    assert!(engine.set_heading(Heading::Down));
    let update = engine.tick();
    assert_eq!(update.heading, Heading::Down);
    assert_eq!(engine.body().head(), Point::new(100, 150));
    assert_eq!(engine.body().tail(), Point::new(100, 100));
}

#[test]
fn test_collided_engine_ignores_ticks_until_reset() {
    let mut engine = engine_at(950, 0, Heading::Right, 1);
    let collided = engine.tick();
    assert_eq!(engine.tick(), collided);
    assert_eq!(engine.ticks(), 1);

    let fresh = engine.reset();
    assert_eq!(fresh.status, MotionStatus::Running);
    assert_eq!(fresh.body, vec![Point::new(950, 0)]);
    assert_eq!(fresh.ticks, 0);
}
