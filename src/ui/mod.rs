//! User interface module
//!
//! Feathers controls for playback (speed, pause/play, reset view) and the
//! info panel for the picked body.

use bevy::prelude::*;

pub mod panels;
pub mod state;
pub mod systems;
pub mod theme;

pub use panels::{spawn_control_panel, spawn_info_panel};
pub use theme::orrery_theme;

use crate::picking::pick_body_on_click;
use systems::{keyboard_shortcuts, sync_pause_label, update_info_panel};

/// Plugin for the on-screen controls and info panel
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_control_panel, spawn_info_panel))
            .add_systems(
                Update,
                (
                    keyboard_shortcuts,
                    sync_pause_label.after(keyboard_shortcuts),
                    update_info_panel.after(pick_body_on_click),
                ),
            );
    }
}
