//! Click handling: resolve the body under the pointer and record the selection

use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use crate::bodies::BodyId;
use crate::camera::MainCamera;
use crate::picking::resolver::{CameraView, HitSphere, HitVolume, pointer_ndc, resolve};

/// The body whose info panel is showing, if any
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedBody(pub Option<BodyId>);

/// Current hit volumes of all body entities, positioned by their transforms
pub fn collect_hit_volumes<'a>(
    bodies: impl IntoIterator<Item = (&'a BodyId, &'a HitSphere, &'a GlobalTransform)>,
) -> Vec<HitVolume> {
    bodies
        .into_iter()
        .map(|(id, hit, transform)| {
            let scale = transform.scale().max_element();
            HitVolume {
                body: *id,
                center: transform.translation(),
                radius: hit.radius * scale,
                ring: hit.ring.map(|band| band.scaled(scale)),
            }
        })
        .collect()
}

pub fn pick_body_on_click(
    mut click_events: MessageReader<Pointer<Click>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&BodyId, &HitSphere, &GlobalTransform)>,
    mut selected: ResMut<SelectedBody>,
) {
    for click in click_events.read() {
        if click.event.button != PointerButton::Primary {
            continue;
        }
        // Clicks on UI nodes target those nodes; only window clicks reach the scene.
        let Ok(window) = windows.get(click.entity) else {
            continue;
        };
        let Ok((camera, camera_transform)) = cameras.single() else {
            warn!("pick_body_on_click: main camera not found");
            return;
        };
        let Some(ndc) = pointer_ndc(click.pointer_location.position, window.size()) else {
            continue;
        };

        let view = CameraView::from_camera(camera, camera_transform);
        let pick = resolve(ndc, &view, collect_hit_volumes(&bodies));
        match pick {
            Some(pick) => info!(
                "Picked {} at {:.1?} ({:.1} units away)",
                pick.body.descriptor().name,
                pick.point,
                pick.distance
            ),
            None => debug!("Click at {:?} hit nothing", ndc),
        }
        selected.set_if_neq(SelectedBody(pick.map(|p| p.body)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::camera::{ComputedCameraValues, NormalizedRenderTarget};
    use bevy::picking::backend::HitData;
    use bevy::picking::pointer::{Location, PointerId};
    use bevy::window::WindowRef;
    use std::time::Duration;

    #[test]
    fn test_collect_hit_volumes_uses_world_transform() {
        let id = BodyId(1);
        let hit = HitSphere::new(2.0).with_ring(3.0, 4.0);
        let transform = GlobalTransform::from(
            Transform::from_xyz(10.0, 0.0, -4.0).with_scale(Vec3::splat(1.5)),
        );
        let volumes = collect_hit_volumes([(&id, &hit, &transform)]);
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].body, id);
        assert!((volumes[0].center - Vec3::new(10.0, 0.0, -4.0)).length() < 1e-6);
        assert!((volumes[0].radius - 3.0).abs() < 1e-6);
        let ring = volumes[0].ring.unwrap();
        assert!((ring.inner - 4.5).abs() < 1e-6);
        assert!((ring.outer - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_selected_body_defaults_to_none() {
        assert_eq!(SelectedBody::default(), SelectedBody(None));
    }

    struct ClickScene {
        app: App,
        window: Entity,
        camera: Entity,
        panel: Entity,
    }

    /// Earth at (45, 0, 0) seen head-on from 100 units away, centered in a
    /// default 1280x720 window.
    fn click_scene() -> ClickScene {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_message::<Pointer<Click>>()
            .init_resource::<SelectedBody>()
            .add_systems(Update, pick_body_on_click);

        let window = app.world_mut().spawn(Window::default()).id();
        let size = Window::default().size();
        let eye =
            Transform::from_xyz(45.0, 0.0, 100.0).looking_at(Vec3::new(45.0, 0.0, 0.0), Vec3::Y);
        let camera = app
            .world_mut()
            .spawn((
                Camera {
                    computed: ComputedCameraValues {
                        clip_from_view: Mat4::perspective_infinite_reverse_rh(
                            75f32.to_radians(),
                            size.x / size.y,
                            0.1,
                        ),
                        ..default()
                    },
                    ..default()
                },
                eye,
                GlobalTransform::from(eye),
                MainCamera,
            ))
            .id();
        app.world_mut().spawn((
            BodyId(2),
            HitSphere::new(2.5),
            GlobalTransform::from_xyz(45.0, 0.0, 0.0),
        ));
        let panel = app.world_mut().spawn(Node::default()).id();

        ClickScene {
            app,
            window,
            camera,
            panel,
        }
    }

    fn click(
        scene: &ClickScene,
        target: Entity,
        position: Vec2,
        button: PointerButton,
    ) -> Pointer<Click> {
        let location = Location {
            target: NormalizedRenderTarget::Window(
                WindowRef::Entity(scene.window).normalize(None).unwrap(),
            ),
            position,
        };
        Pointer::new(
            PointerId::Mouse,
            location,
            Click {
                button,
                hit: HitData::new(scene.camera, 0.0, None, None),
                duration: Duration::from_millis(80),
            },
            target,
        )
    }

    #[test]
    fn test_window_click_selects_body_under_pointer() {
        let mut scene = click_scene();
        let center = Window::default().size() / 2.0;
        let message = click(&scene, scene.window, center, PointerButton::Primary);
        scene.app.world_mut().write_message(message);
        scene.app.update();

        assert_eq!(
            *scene.app.world().resource::<SelectedBody>(),
            SelectedBody(Some(BodyId(2)))
        );
    }

    #[test]
    fn test_clicks_on_ui_and_secondary_clicks_are_ignored() {
        let mut scene = click_scene();
        scene.app.world_mut().resource_mut::<SelectedBody>().0 = Some(BodyId(6));
        let center = Window::default().size() / 2.0;

        let on_panel = click(&scene, scene.panel, center, PointerButton::Primary);
        let right_click = click(&scene, scene.window, center, PointerButton::Secondary);
        scene.app.world_mut().write_message(on_panel);
        scene.app.world_mut().write_message(right_click);
        scene.app.update();

        assert_eq!(
            *scene.app.world().resource::<SelectedBody>(),
            SelectedBody(Some(BodyId(6)))
        );
    }

    #[test]
    fn test_miss_clears_selection() {
        let mut scene = click_scene();
        scene.app.world_mut().resource_mut::<SelectedBody>().0 = Some(BodyId(2));

        let corner = click(
            &scene,
            scene.window,
            Vec2::new(10.0, 10.0),
            PointerButton::Primary,
        );
        scene.app.world_mut().write_message(corner);
        scene.app.update();

        assert_eq!(
            *scene.app.world().resource::<SelectedBody>(),
            SelectedBody(None)
        );
    }
}
