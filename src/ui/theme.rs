//! Feathers theme tuned for the black space backdrop

use bevy::prelude::*;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;

const SUN_GOLD: Color = Color::srgba(0.99, 0.72, 0.07, 1.0);

/// Dark theme with sun-gold accents.
///
/// Feathers registers `UiTheme` without populating it, so widgets fall back to
/// the "missing token" color unless this is inserted.
pub fn orrery_theme() -> UiTheme {
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
    theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
    theme.set_color("feathers.focus", SUN_GOLD);
    theme.set_color("feathers.slider.bg", Color::srgba(0.08, 0.08, 0.1, 0.9));
    theme.set_color("feathers.slider.bar", SUN_GOLD.with_alpha(0.7));
    theme.set_color("feathers.slider.text", Color::srgba(1.0, 0.95, 0.8, 0.95));
    theme.set_color("feathers.button.bg", Color::srgba(0.14, 0.14, 0.18, 0.9));
    theme.set_color(
        "feathers.button.bg.hover",
        Color::srgba(0.22, 0.2, 0.16, 0.95),
    );
    theme.set_color(
        "feathers.button.bg.pressed",
        Color::srgba(0.3, 0.26, 0.14, 0.95),
    );
    theme.set_color("feathers.button.txt", Color::WHITE);
    theme
}
