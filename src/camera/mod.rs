//! Main camera: spawn at the home pose and smooth return to it on request

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::config::OrreryConfig;

const FOV_DEG: f32 = 75.0;
const NEAR: f32 = 0.1;
/// Far enough for the starfield cube's corners
const FAR: f32 = 3000.0;

/// Marker component for the scene camera
#[derive(Component)]
pub struct MainCamera;

/// Request to move the camera back to its home pose
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ResetView;

/// Orbit-camera pose around the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    /// Pose that puts the camera at `position`, looking at the origin.
    pub fn from_position(position: Vec3) -> Self {
        let radius = position.length();
        let direction = position.normalize_or(Vec3::Z);
        Self {
            radius,
            yaw: direction.x.atan2(direction.z),
            pitch: direction.y.clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.pitch.cos() * self.yaw.sin(),
            self.radius * self.pitch.sin(),
            self.radius * self.pitch.cos() * self.yaw.cos(),
        )
    }
}

/// Where "Reset View" returns to
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraHome(pub CameraPose);

/// Plugin for the main camera and view reset
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        let home = app
            .world()
            .get_resource::<OrreryConfig>()
            .map(|c| c.camera_home())
            .unwrap_or(Vec3::new(0.0, 50.0, 100.0));

        app.insert_resource(CameraHome(CameraPose::from_position(home)))
            .add_message::<ResetView>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, reset_view);
    }
}

pub fn spawn_camera(mut commands: Commands, home: Res<CameraHome>) {
    let pose = home.0;

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEG.to_radians(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(pose.radius),
            yaw: Some(pose.yaw),
            pitch: Some(pose.pitch),
            force_update: true,
            ..default()
        },
        MainCamera,
        Transform::from_translation(pose.position()).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
}

/// Yaw equivalent to `target` that is at most half a turn from `current`.
/// The orbit controller accumulates yaw without wrapping.
pub fn nearest_yaw(current: f32, target: f32) -> f32 {
    let diff = (target - current + PI).rem_euclid(TAU) - PI;
    current + diff
}

/// Retarget the orbit camera at its home pose; the controller eases toward it.
pub fn reset_view(
    mut requests: MessageReader<ResetView>,
    home: Res<CameraHome>,
    mut q_camera: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    if requests.read().count() == 0 {
        return;
    }
    let Ok(mut poc) = q_camera.single_mut() else {
        warn!("reset_view: main camera not found");
        return;
    };
    let pose = home.0;
    poc.target_focus = Vec3::ZERO;
    poc.target_radius = pose.radius;
    let current_yaw = poc.yaw.unwrap_or(poc.target_yaw);
    poc.target_yaw = nearest_yaw(current_yaw, pose.yaw);
    poc.target_pitch = pose.pitch;
    info!("Resetting view");
}
