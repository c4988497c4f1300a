//! UI marker components and text formatting

use bevy::prelude::*;

use crate::bodies::BodyDescriptor;

/// Root node of the controls panel
#[derive(Component)]
pub struct ControlPanel;

/// Speed slider widget
#[derive(Component)]
pub struct SpeedSlider;

/// Pause/play button widget
#[derive(Component)]
pub struct PauseButton;

/// Caption text of the pause/play button
#[derive(Component)]
pub struct PauseLabel;

/// Root node of the body info panel
#[derive(Component)]
pub struct InfoPanel;

/// Body name heading in the info panel
#[derive(Component)]
pub struct InfoTitle;

/// Body details text in the info panel
#[derive(Component)]
pub struct InfoBody;

/// Detail lines shown under the body name.
pub fn format_body_details(body: &BodyDescriptor) -> String {
    format!(
        "Radius: {} units\nDistance: {} units\nSpeed: {:.3} units\n{}",
        body.radius, body.distance, body.angular_speed_factor, body.info
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BODIES;

    #[test]
    fn test_format_body_details() {
        let text = format_body_details(&BODIES[2]);
        assert_eq!(
            text,
            "Radius: 2.5 units\nDistance: 45 units\nSpeed: 1.000 units\nOur home planet with water and life."
        );
    }

    #[test]
    fn test_speed_uses_three_decimals() {
        let text = format_body_details(&BODIES[7]);
        assert!(text.contains("Speed: 0.006 units"));
    }
}
