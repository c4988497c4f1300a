//! Playback control: global animation speed and pause state

use bevy::prelude::*;

use crate::config::OrreryConfig;

/// Inclusive range the speed multiplier is clamped into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for SpeedBounds {
    fn default() -> Self {
        Self { min: 0.1, max: 5.0 }
    }
}

impl SpeedBounds {
    /// Clamp into the range. NaN maps to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

/// Single source of truth for whether the orbits advance and how fast
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlaybackState {
    speed_multiplier: f64,
    paused: bool,
    bounds: SpeedBounds,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(SpeedBounds::default(), 1.0)
    }
}

impl PlaybackState {
    pub fn new(bounds: SpeedBounds, initial_speed: f64) -> Self {
        Self {
            speed_multiplier: bounds.clamp(initial_speed),
            paused: false,
            bounds,
        }
    }

    pub fn from_config(config: &OrreryConfig) -> Self {
        Self::new(
            SpeedBounds {
                min: config.min_speed,
                max: config.max_speed,
            },
            config.default_speed,
        )
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn bounds(&self) -> SpeedBounds {
        self.bounds
    }

    /// Set the multiplier, clamping out-of-range input. Returns the applied value.
    pub fn set_speed(&mut self, multiplier: f64) -> f64 {
        self.speed_multiplier = self.bounds.clamp(multiplier);
        self.speed_multiplier
    }

    /// Flip pause state. Returns the new `paused` value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Caption for the play/pause button: the action a press would take.
    pub fn label(&self) -> &'static str {
        if self.paused { "Play" } else { "Pause" }
    }
}
