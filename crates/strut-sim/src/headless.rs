//! Headless end-to-end tests driving full scenes through the app loop.

use bevy::prelude::*;
use futures::FutureExt;

use strut_scene::loader::AssetBarrier;
use strut_test_utils::{car_prefab, cube_prefab, demo_scene, two_car_scene};

use crate::SceneBuilder;

#[test]
fn cube_settles_on_the_ground() {
    let mut scene = SceneBuilder::new()
        .with_scene(demo_scene())
        .with_prefab(cube_prefab())
        .build()
        .unwrap();

    let handle = scene.resolved.actor("cube", 0).unwrap().bodies["cube"];
    scene.run_frames(300);

    let pose = scene.physics().body_pose(handle).unwrap();
    assert!(pose.translation.y > 0.2);
    assert!(pose.translation.y < 1.0);

    // The settled body is essentially at rest.
    let settled = pose.translation.y;
    scene.run_frames(60);
    let after = scene.physics().body_pose(handle).unwrap().translation.y;
    assert!((after - settled).abs() < 0.01);
}

#[test]
fn identical_scenes_evolve_identically() {
    let build = || {
        SceneBuilder::new()
            .with_scene(two_car_scene())
            .with_prefab(car_prefab())
            .build()
            .unwrap()
    };

    let mut a = build();
    let mut b = build();
    a.run_frames(120);
    b.run_frames(120);

    for ordinal in 0..2 {
        let car_a = a.resolved.actor("car", ordinal).unwrap();
        let car_b = b.resolved.actor("car", ordinal).unwrap();
        for (name, handle_a) in &car_a.bodies {
            let pose_a = a.physics().body_pose(*handle_a).unwrap();
            let pose_b = b.physics().body_pose(car_b.bodies[name]).unwrap();
            assert_eq!(pose_a, pose_b, "part {name} diverged");
        }
    }
}

#[test]
fn barrier_feeds_the_builder() {
    let assets = AssetBarrier::new()
        .with_scene(async { Ok(demo_scene()) }.boxed())
        .with_prefab(async { Ok(cube_prefab()) }.boxed())
        .block_on()
        .unwrap();

    let scene = SceneBuilder::new().with_assets(assets).build().unwrap();
    assert_eq!(scene.resolved.actors.len(), 1);
    assert_eq!(scene.resolved.static_bodies.len(), 1);
}

#[test]
fn synced_transforms_track_simulated_bodies() {
    let mut scene = SceneBuilder::new()
        .with_scene(demo_scene())
        .with_prefab(cube_prefab())
        .build()
        .unwrap();

    let handle = scene.resolved.actor("cube", 0).unwrap().bodies["cube"];
    let anchor = scene.resolved.actor("cube", 0).unwrap().anchor;
    scene.run_frames(60);

    // The render transform (anchor-relative) plus the anchor pose must land
    // on the simulated world pose.
    let mut query = scene.app.world_mut().query::<(&Name, &Transform)>();
    let local_y = query
        .iter(scene.app.world())
        .find(|(name, _)| name.as_str() == "cube[0].cube")
        .map(|(_, transform)| transform.translation.y)
        .unwrap();
    let anchor_y = scene
        .app
        .world()
        .get::<Transform>(anchor)
        .unwrap()
        .translation
        .y;
    let body_y = scene.physics().body_pose(handle).unwrap().translation.y;

    assert!((anchor_y + local_y - body_y).abs() < 1e-5);
}
