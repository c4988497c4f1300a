//! Starfield backdrop

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::Rng;

use crate::config::{OrreryConfig, RandomStream};

/// Marker component for the starfield point cloud
#[derive(Component)]
pub struct Starfield;

/// `count` points uniformly scattered in an axis-aligned cube of edge `extent`
/// centered on the origin.
pub fn star_positions<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f32) -> Vec<[f32; 3]> {
    let half = extent * 0.5;
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            ]
        })
        .collect()
}

pub fn build_starfield_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<OrreryConfig>,
) {
    if config.star_count == 0 {
        return;
    }
    let mut rng = config.rng(RandomStream::Starfield);
    let positions = star_positions(&mut rng, config.star_count, config.star_extent);

    commands.spawn((
        Mesh3d(meshes.add(build_starfield_mesh(positions))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Starfield,
        Name::new("Starfield"),
    ));
    debug!("Starfield: {} stars", config.star_count);
}
