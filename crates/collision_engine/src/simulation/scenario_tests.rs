//! End-to-end behavior of the reference scene and the contact loop

use approx::assert_relative_eq;

use super::{ReferenceScene, TickDriver};
use crate::config::SimulationConfig;
use crate::ecs::{Entity, TransformComponent, World};
use crate::foundation::logging;
use crate::foundation::math::Vec3;
use crate::physics::collision::BoundingBox;

fn reference_world() -> (World, ReferenceScene, SimulationConfig) {
    logging::init_for_tests();
    let config = SimulationConfig::default();
    let mut world = World::new();
    let scene = ReferenceScene::build(&mut world, &config).unwrap();
    (world, scene, config)
}

#[test]
fn test_scene_layout_and_ids() {
    let (world, scene, _) = reference_world();

    assert_eq!(world.len(), 13);
    assert_eq!(scene.mover, Entity::new(0));
    assert_eq!(scene.obstacles, (1..=4).map(Entity::new).collect::<Vec<_>>());
    assert_eq!(scene.model, Entity::new(5));
    assert_eq!(scene.floor, Entity::new(6));
    assert_eq!(scene.lights, (7..=12).map(Entity::new).collect::<Vec<_>>());

    for light in &scene.lights {
        let object = world.get(*light).unwrap();
        assert!(object.point_light.is_some());
        // Every light sits on the ring of radius sqrt(2) at y = -0.5
        let position = object.transform.translation();
        assert_relative_eq!(position.y, -0.5, epsilon = 1e-6);
        assert_relative_eq!(position.xz().magnitude(), 2.0_f32.sqrt(), epsilon = 1e-5);
    }
}

#[test]
fn test_first_tick_bounces_off_bottom_cube() {
    let (mut world, scene, config) = reference_world();
    let mut driver = scene.driver(&config);

    // The mover starts flush against the bottom cube, so Y has zero overlap
    let report = driver.step(&mut world).unwrap();
    assert_eq!(report.contacts, vec![Entity::new(4)]);
    assert!(!report.decayed);

    let transform = &world.get(scene.mover).unwrap().transform;
    let expected_velocity = Vec3::new(0.016 * 0.94, -0.016 * 0.94, 0.0);
    assert_relative_eq!(transform.velocity, expected_velocity, epsilon = 1e-7);
    assert_relative_eq!(
        transform.translation(),
        Vec3::new(0.0, 0.5, 2.5) + expected_velocity,
        epsilon = 1e-6
    );
}

#[test]
fn test_box_tracks_pose_after_every_tick() {
    let (mut world, scene, config) = reference_world();
    let mut driver = scene.driver(&config);

    for _ in 0..600 {
        driver.step(&mut world).unwrap();
        let transform = &world.get(scene.mover).unwrap().transform;
        let half = transform.scale() / 2.0;
        let center = transform.translation();
        let expected = BoundingBox::from_points(center - half, center + half);
        assert_eq!(transform.bounding_box(), expected);
    }
}

#[test]
fn test_mover_comes_to_rest() {
    let (mut world, scene, config) = reference_world();
    let mut driver = scene.driver(&config);

    // 60 simulated seconds, far more than enough decays to cross the deadband
    for _ in 0..3600 {
        driver.step(&mut world).unwrap();
    }
    let resting = world.get(scene.mover).unwrap().transform.clone();
    assert_eq!(resting.velocity, Vec3::zeros());

    driver.step(&mut world).unwrap();
    assert_eq!(world.get(scene.mover).unwrap().transform.translation(), resting.translation());
}

#[test]
fn test_static_objects_never_move() {
    let (mut world, scene, config) = reference_world();
    let before: Vec<_> = world.iter().skip(1).map(|o| o.transform.clone()).collect();
    let mut driver = scene.driver(&config);

    let summary = driver.advance(&mut world, 5.0).unwrap();
    assert_eq!(summary.steps, config.max_steps_per_frame);

    let after: Vec<_> = world.iter().skip(1).map(|o| o.transform.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_relaunch_alternates_sides() {
    let (mut world, scene, config) = reference_world();
    let driver = scene.driver(&config);

    for direction in [-1.0, 1.0] {
        let start = ReferenceScene::relaunch_position(direction);
        driver.relaunch(&mut world, start, config.mover_velocity).unwrap();
        let transform = &world.get(scene.mover).unwrap().transform;
        assert_eq!(transform.translation(), start);
        assert_relative_eq!(transform.bounding_box().center(), start, epsilon = 1e-6);
    }
}

#[test]
fn test_cage_tie_inverts_z_only() {
    let mut world = World::new();
    let mover = TransformComponent::new(Vec3::repeat(0.5), Vec3::repeat(1.0));
    world.create_object().unwrap().transform = mover.with_velocity(Vec3::repeat(1.0));
    world.create_object().unwrap().transform.set_transform(Vec3::repeat(1.0), Vec3::repeat(1.0));
    let mut driver = TickDriver::new(Entity::new(0), [Entity::new(1)]).with_decay_interval(0.0);

    let report = driver.step(&mut world).unwrap();

    assert_eq!(report.contacts, vec![Entity::new(1)]);
    assert_eq!(world.get(Entity::new(0)).unwrap().transform.velocity, Vec3::new(1.0, 1.0, -1.0));
}
