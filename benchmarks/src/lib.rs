//! Shared setup helpers for pivot3d benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench transform
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench transform -- world
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench transform -- ecs

use glam::Vec3;
use pivot3d::ecs::components::transform::{Children, GlobalTransform, Parent};
use pivot3d::SpatialTransform;

/// A transform with every field away from its identity value.
pub fn busy_transform() -> SpatialTransform {
    SpatialTransform::new(
        Vec3::new(1.5, -2.25, 8.0),
        Vec3::new(12.0, 47.5, -3.0),
        Vec3::new(1.0, 2.0, 0.5),
        Vec3::NEG_Z,
        Vec3::Y,
    )
}

/// Spawn `n` root entities in a grid.
pub fn setup_flat_world(n: usize) -> hecs::World {
    let mut world = hecs::World::new();
    let cols = (n as f32).sqrt().ceil() as usize;

    for i in 0..n {
        let x = (i % cols) as f32 * 1.5;
        let z = (i / cols) as f32 * 1.5;
        world.spawn((
            SpatialTransform::from_scale(Vec3::new(x, 0.0, z), Vec3::ONE),
            GlobalTransform::default(),
        ));
    }
    world
}

/// Spawn `n` roots, each with a chain of `depth` descendants.
pub fn setup_chain_world(n: usize, depth: usize) -> hecs::World {
    let mut world = hecs::World::new();

    for i in 0..n {
        let root = world.spawn((
            SpatialTransform::from_scale(Vec3::new(i as f32, 0.0, 0.0), Vec3::ONE),
            GlobalTransform::default(),
        ));
        let mut parent = root;
        for _ in 0..depth {
            let child = world.spawn((
                SpatialTransform::from_scale(Vec3::Y, Vec3::ONE),
                GlobalTransform::default(),
                Parent(parent),
            ));
            world
                .insert_one(parent, Children(vec![child]))
                .expect("parent was just spawned");
            parent = child;
        }
    }
    world
}

/// Mark every transform in the world dirty.
pub fn touch_all(world: &mut hecs::World) {
    for (_, transform) in world.query_mut::<&mut SpatialTransform>() {
        transform.translate_by(Vec3::ZERO);
    }
}
