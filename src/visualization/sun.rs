//! Sun, its glow shell and the scene lighting

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::visualization::spin::Spin;

pub const SUN_RADIUS: f32 = 8.0;
pub const SUN_GLOW_RADIUS: f32 = 12.0;
const SUN_SPIN_RAD_PER_SEC: f32 = 0.3;
/// Point light reach; the outer planets sit past it and read as dimmer.
const SUN_LIGHT_RANGE: f32 = 300.0;

/// Marker component for the sun mesh
#[derive(Component)]
pub struct Sun;

/// Marker component for the point light at the sun's center
#[derive(Component)]
pub struct SunLight;

pub fn sun_color() -> Color {
    Color::srgb_u8(0xFD, 0xB8, 0x13)
}

pub fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x40, 0x40, 0x40),
        brightness: 60.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: 40_000_000.0,
            range: SUN_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
        SunLight,
        Name::new("Sun Light"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(32, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: sun_color(),
            emissive: sun_color().to_linear() * 0.3,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Spin::new(SUN_SPIN_RAD_PER_SEC),
        Sun,
        Name::new("Sun"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_GLOW_RADIUS).mesh().uv(32, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: sun_color().with_alpha(0.1),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Name::new("Sun Glow"),
    ));
}
