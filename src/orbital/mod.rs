//! Orbital animation module
//!
//! This module owns the per-body orbital state and the playback state that
//! decides whether, and how fast, it advances.

use bevy::prelude::*;

pub mod integrator;
pub mod playback;

pub use integrator::{OrbitState, Orbits, advance_orbits};
pub use playback::PlaybackState;

use crate::config::{OrreryConfig, RandomStream};

/// Systems that mutate orbital state; readers of `Orbits` order after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrbitalSystems;

/// Plugin for orbit integration and playback control
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<OrreryConfig>()
            .cloned()
            .unwrap_or_default();

        let orbits = Orbits::with_random_phases(&mut config.rng(RandomStream::OrbitPhases));
        info!("Initialized {} orbits", orbits.len());

        app.insert_resource(PlaybackState::from_config(&config))
            .insert_resource(orbits)
            .add_systems(Update, advance_orbits.in_set(OrbitalSystems));
    }
}
