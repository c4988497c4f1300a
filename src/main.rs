use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod camera;
mod config;
mod orbital;
mod picking;
mod ui;
mod visualization;

use camera::CameraPlugin;
use config::OrreryConfig;
use orbital::OrbitalPlugin;
use picking::BodyPickingPlugin;
use ui::{UiPlugin, orrery_theme};
use visualization::VisualizationPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Solar System".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Loaded after DefaultPlugins so the log subscriber is up; our plugins read it in build().
    app.insert_resource(OrreryConfig::load_or_default());

    app.insert_resource(orrery_theme());
    app.add_plugins(FeathersPlugins);
    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(OrbitalPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(CameraPlugin);
    app.add_plugins(BodyPickingPlugin);
    app.add_plugins(UiPlugin);

    app.run();
}
