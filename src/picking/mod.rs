//! Body picking
//!
//! Maps pointer clicks to the body under the cursor. Bevy's picking pipeline
//! delivers the click; the hit test itself is [`resolver::resolve`].

use bevy::prelude::*;

pub mod resolver;
pub mod systems;

pub use resolver::HitSphere;
pub use systems::{SelectedBody, pick_body_on_click};

/// Plugin for click-to-inspect body selection
pub struct BodyPickingPlugin;

impl Plugin for BodyPickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBody>()
            .add_systems(Update, pick_body_on_click);
    }
}
