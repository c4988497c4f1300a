//! Axial spin for the sun and the planets
//!
//! Spin is cosmetic: it halts while playback is paused but ignores the speed
//! multiplier.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::orbital::PlaybackState;

/// Constant rotation about the local Y axis
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub rad_per_sec: f32,
}

impl Spin {
    pub fn new(rad_per_sec: f32) -> Self {
        Self { rad_per_sec }
    }

    /// One full turn every `period_secs`.
    pub fn with_period(period_secs: f32) -> Self {
        Self::new(TAU / period_secs)
    }
}

pub fn apply_spin(
    time: Res<Time>,
    playback: Res<PlaybackState>,
    mut query: Query<(&Spin, &mut Transform)>,
) {
    if playback.is_paused() {
        return;
    }
    let dt = time.delta_secs();
    for (spin, mut transform) in &mut query {
        transform.rotate_y(spin.rad_per_sec * dt);
    }
}
