//! Planet meshes, Saturn's rings and orbit guides
//!
//! Render entities carry only a [`BodyId`]; descriptor data and orbital state are
//! looked up through it.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use rand::Rng;

use crate::bodies::{BODIES, BodyDescriptor, BodyId, all_bodies};
use crate::config::{OrreryConfig, RandomStream};
use crate::orbital::Orbits;
use crate::picking::HitSphere;
use crate::visualization::spin::Spin;

const SPIN_PERIOD_SECS: std::ops::Range<f32> = 5.0..15.0;
const ORBIT_GUIDE_HALF_WIDTH: f32 = 0.2;

/// Marker component for an orbit guide ring
#[derive(Component)]
pub struct OrbitGuide;

/// Marker component for decorative rings attached to a body
#[derive(Component)]
pub struct BodyRings;

fn hit_sphere(body: &BodyDescriptor) -> HitSphere {
    let sphere = HitSphere::new(body.radius);
    match body.ring_radii() {
        Some((inner, outer)) => sphere.with_ring(inner, outer),
        None => sphere,
    }
}

/// Rotation that lays a mesh built in the XY plane flat into the orbital plane.
fn flat() -> Quat {
    Quat::from_rotation_x(-FRAC_PI_2)
}

pub fn spawn_planets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    orbits: Res<Orbits>,
    config: Res<OrreryConfig>,
) {
    let mut rng = config.rng(RandomStream::SpinPeriods);

    let guide_material = materials.add(StandardMaterial {
        base_color: Color::srgba_u8(0x88, 0x88, 0x88, 0xCC),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.67, 0.67, 0.67, 0.6),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for (id, body) in all_bodies() {
        let translation = orbits
            .get(id)
            .map(|state| state.translation())
            .unwrap_or(Vec3::new(body.distance, 0.0, 0.0));

        let mut entity = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(body.radius).mesh().uv(32, 32))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: body.color(),
                perceptual_roughness: 1.0,
                metallic: 0.0,
                ..default()
            })),
            Transform::from_translation(translation),
            id,
            hit_sphere(body),
            Spin::with_period(rng.gen_range(SPIN_PERIOD_SECS)),
            Name::new(body.name),
        ));

        if let Some((inner, outer)) = body.ring_radii() {
            // Child of the body: follows its transform; picked through the body's hit sphere.
            entity.with_child((
                Mesh3d(meshes.add(
                    Annulus::new(inner, outer)
                        .mesh()
                        .resolution(32)
                        .build(),
                )),
                MeshMaterial3d(ring_material.clone()),
                Transform::from_rotation(flat()),
                BodyRings,
                Name::new(format!("{} Rings", body.name)),
            ));
        }

        commands.spawn((
            Mesh3d(meshes.add(
                Annulus::new(
                    body.distance - ORBIT_GUIDE_HALF_WIDTH,
                    body.distance + ORBIT_GUIDE_HALF_WIDTH,
                )
                .mesh()
                .resolution(64)
                .build(),
            )),
            MeshMaterial3d(guide_material.clone()),
            Transform::from_rotation(flat()),
            OrbitGuide,
            Name::new(format!("{} Orbit", body.name)),
        ));
    }

    info!("Spawned {} planets", BODIES.len());
}

/// Place each body mesh at its integrator position
pub fn sync_body_transforms(orbits: Res<Orbits>, mut query: Query<(&BodyId, &mut Transform)>) {
    if !orbits.is_changed() {
        return;
    }
    for (id, mut transform) in &mut query {
        if let Some(state) = orbits.get(*id) {
            transform.translation = state.translation();
        }
    }
}
