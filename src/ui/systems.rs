//! UI observers and per-frame UI updates

use bevy::prelude::*;
use bevy_ui_widgets::{Activate, SliderValue, ValueChange};

use crate::camera::ResetView;
use crate::orbital::PlaybackState;
use crate::picking::SelectedBody;
use crate::ui::state::{InfoBody, InfoPanel, InfoTitle, PauseLabel, format_body_details};

pub fn on_speed_changed(
    change: On<ValueChange<f32>>,
    mut playback: ResMut<PlaybackState>,
    mut commands: Commands,
) {
    let applied = playback.set_speed(f64::from(change.value));
    // Widgets are uncontrolled; write back the clamped value.
    commands
        .entity(change.source)
        .insert(SliderValue(applied as f32));
    debug!("Speed multiplier set to {applied:.1}");
}

pub fn on_pause_pressed(_activate: On<Activate>, mut playback: ResMut<PlaybackState>) {
    let paused = playback.toggle_pause();
    info!("Playback {}", if paused { "paused" } else { "resumed" });
}

pub fn on_reset_pressed(_activate: On<Activate>, mut reset: MessageWriter<ResetView>) {
    reset.write(ResetView);
}

/// P toggles pause, R resets the view
pub fn keyboard_shortcuts(
    input: Res<ButtonInput<KeyCode>>,
    mut playback: ResMut<PlaybackState>,
    mut reset: MessageWriter<ResetView>,
) {
    if input.just_pressed(KeyCode::KeyP) {
        let paused = playback.toggle_pause();
        info!("Playback {}", if paused { "paused" } else { "resumed" });
    }
    if input.just_pressed(KeyCode::KeyR) {
        reset.write(ResetView);
    }
}

pub fn sync_pause_label(
    playback: Res<PlaybackState>,
    mut labels: Query<&mut Text, With<PauseLabel>>,
) {
    if !playback.is_changed() {
        return;
    }
    for mut text in &mut labels {
        if text.0 != playback.label() {
            text.0 = playback.label().to_string();
        }
    }
}

pub fn update_info_panel(
    selected: Res<SelectedBody>,
    mut panel: Query<&mut Node, With<InfoPanel>>,
    mut title: Query<&mut Text, (With<InfoTitle>, Without<InfoBody>)>,
    mut details: Query<&mut Text, (With<InfoBody>, Without<InfoTitle>)>,
) {
    if !selected.is_changed() {
        return;
    }
    let Ok(mut node) = panel.single_mut() else {
        return;
    };

    let Some(id) = selected.0 else {
        node.display = Display::None;
        return;
    };
    let body = id.descriptor();
    if let Ok(mut text) = title.single_mut() {
        text.0 = body.name.to_string();
    }
    if let Ok(mut text) = details.single_mut() {
        text.0 = format_body_details(body);
    }
    node.display = Display::Flex;
}
