//! Visualization module
//!
//! Builds the scene (sun, planets, rings, orbit guides, starfield) and keeps the
//! planet meshes in step with the orbit integrator.

use bevy::prelude::*;

pub mod planets;
pub mod spin;
pub mod starfield;
pub mod sun;

pub use planets::{spawn_planets, sync_body_transforms};
pub use spin::apply_spin;
pub use starfield::spawn_starfield;
pub use sun::spawn_sun;

use crate::config::OrreryConfig;
use crate::orbital::OrbitalSystems;

/// Plugin for scene construction and per-frame mesh placement
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrreryConfig>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (spawn_sun, spawn_planets, spawn_starfield))
            .add_systems(
                Update,
                (sync_body_transforms.after(OrbitalSystems), apply_spin),
            );
    }
}
