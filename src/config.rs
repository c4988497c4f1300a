//! Application settings
//!
//! Settings are read once at startup from `settings.json` in the platform config
//! directory. The file is optional and every field has a default, so a partial
//! file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, ensure};
use bevy::prelude::*;
use directories::ProjectDirs;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

const SETTINGS_FILE: &str = "settings.json";

/// Independent consumers of startup randomness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomStream {
    OrbitPhases,
    SpinPeriods,
    Starfield,
}

impl RandomStream {
    /// Mixed into the configured seed so each consumer gets its own sequence
    fn salt(self) -> u64 {
        match self {
            Self::OrbitPhases => 0x6f72_6269_7473,
            Self::SpinPeriods => 0x7370_696e_7300,
            Self::Starfield => 0x7374_6172_7300,
        }
    }
}

/// Startup configuration resource
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub min_speed: f64,
    pub max_speed: f64,
    pub default_speed: f64,
    pub star_count: usize,
    /// Edge length of the cube the starfield is scattered in
    pub star_extent: f32,
    pub camera_home: [f32; 3],
    /// Fixed seed for initial phases and the starfield; random when unset
    pub seed: Option<u64>,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            min_speed: 0.1,
            max_speed: 5.0,
            default_speed: 1.0,
            star_count: 10_000,
            star_extent: 2000.0,
            camera_home: [0.0, 50.0, 100.0],
            seed: None,
        }
    }
}

impl OrreryConfig {
    /// Resolve the platform settings path:
    /// - macOS: ~/Library/Application Support/orrery/settings.json
    /// - Linux: ~/.config/orrery/settings.json
    /// - Windows: %APPDATA%\orrery\config\settings.json
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "orrery")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(proj_dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Read and validate settings from `path`.
    ///
    /// Returns Ok(None) when the file does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Settings from the platform path, or defaults when the file is missing or bad.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("Using default settings: {e:#}");
                return Self::default();
            }
        };
        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!("Loaded settings from {}", path.display());
                config
            }
            Ok(None) => {
                debug!("No settings at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring settings file: {e:#}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.min_speed.is_finite() && self.min_speed > 0.0,
            "min_speed must be positive, got {}",
            self.min_speed
        );
        ensure!(
            self.max_speed.is_finite() && self.max_speed >= self.min_speed,
            "max_speed {} must not be below min_speed {}",
            self.max_speed,
            self.min_speed
        );
        ensure!(
            (self.min_speed..=self.max_speed).contains(&self.default_speed),
            "default_speed {} outside [{}, {}]",
            self.default_speed,
            self.min_speed,
            self.max_speed
        );
        ensure!(
            self.star_extent.is_finite() && self.star_extent > 0.0,
            "star_extent must be positive"
        );
        ensure!(
            self.camera_home.iter().all(|c| c.is_finite())
                && Vec3::from_array(self.camera_home).length_squared() > 0.0,
            "camera_home must be a finite point away from the origin"
        );
        Ok(())
    }

    pub fn camera_home(&self) -> Vec3 {
        Vec3::from_array(self.camera_home)
    }

    /// Generator for one stream of startup randomness. Reproducible when `seed` is set.
    pub fn rng(&self, stream: RandomStream) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ stream.salt()),
            None => StdRng::from_entropy(),
        }
    }
}
