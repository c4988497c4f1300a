//! Controls panel and body info panel

use bevy::ecs::spawn::Spawn;
use bevy::prelude::*;
use bevy_feathers::controls::{ButtonProps, SliderProps, button, slider};
use bevy_feathers::theme::ThemedText;
use bevy_ui_widgets::{SliderStep, observe};

use crate::orbital::PlaybackState;
use crate::ui::state::{
    ControlPanel, InfoBody, InfoPanel, InfoTitle, PauseButton, PauseLabel, SpeedSlider,
};
use crate::ui::systems::{on_pause_pressed, on_reset_pressed, on_speed_changed};

const PANEL_BG: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const SPEED_STEP: f32 = 0.1;

pub fn spawn_control_panel(mut commands: Commands, playback: Res<PlaybackState>) {
    let bounds = playback.bounds();

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(20.0),
            left: Val::Px(20.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(10.0),
            padding: UiRect::all(Val::Px(15.0)),
            ..default()
        },
        BackgroundColor(PANEL_BG),
        ControlPanel,
        Name::new("Controls"),
        children![
            (
                Text::new("Solar System"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                ThemedText,
            ),
            (
                Node {
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(10.0),
                    ..default()
                },
                children![
                    (Text::new("Speed:"), ThemedText),
                    (
                        Node {
                            width: Val::Px(160.0),
                            ..default()
                        },
                        children![(
                            slider(
                                SliderProps {
                                    min: bounds.min as f32,
                                    max: bounds.max as f32,
                                    value: playback.speed_multiplier() as f32,
                                },
                                (SliderStep(SPEED_STEP), SpeedSlider),
                            ),
                            observe(on_speed_changed),
                        )],
                    ),
                ],
            ),
            (
                Node {
                    column_gap: Val::Px(10.0),
                    ..default()
                },
                children![
                    (
                        button(
                            ButtonProps::default(),
                            PauseButton,
                            Spawn((Text::new(playback.label()), ThemedText, PauseLabel)),
                        ),
                        observe(on_pause_pressed),
                    ),
                    (
                        button(
                            ButtonProps::default(),
                            (),
                            Spawn((Text::new("Reset View"), ThemedText)),
                        ),
                        observe(on_reset_pressed),
                    ),
                ],
            ),
        ],
    ));
}

/// Hidden until a body is picked
pub fn spawn_info_panel(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            left: Val::Px(20.0),
            max_width: Val::Px(320.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            padding: UiRect::all(Val::Px(15.0)),
            display: Display::None,
            ..default()
        },
        BackgroundColor(PANEL_BG),
        InfoPanel,
        Name::new("Body Info"),
        children![
            (
                Text::default(),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                ThemedText,
                InfoTitle,
            ),
            (Text::default(), ThemedText, InfoBody),
        ],
    ));
}
