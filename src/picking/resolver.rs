//! Pointer-to-body resolution
//!
//! A pure function of the pointer position, the camera and the current hit
//! volumes. Each body is tested as a bounding sphere plus, for ringed bodies, a
//! flat ring band; a ring hit resolves to the body that owns the ring.

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::math::primitives::InfinitePlane3d;
use bevy::prelude::*;

use crate::bodies::BodyId;

/// Annulus in the body's horizontal plane, radii measured from the body center
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingBand {
    pub inner: f32,
    pub outer: f32,
}

impl RingBand {
    fn contains(&self, radial_distance: f32) -> bool {
        (self.inner..=self.outer).contains(&radial_distance)
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self {
            inner: self.inner * factor,
            outer: self.outer * factor,
        }
    }
}

/// Pick shape of a body entity, in local units
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct HitSphere {
    pub radius: f32,
    pub ring: Option<RingBand>,
}

impl HitSphere {
    pub fn new(radius: f32) -> Self {
        Self { radius, ring: None }
    }

    pub fn with_ring(self, inner: f32, outer: f32) -> Self {
        Self {
            ring: Some(RingBand { inner, outer }),
            ..self
        }
    }
}

/// A body's hit volume placed in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitVolume {
    pub body: BodyId,
    pub center: Vec3,
    pub radius: f32,
    pub ring: Option<RingBand>,
}

impl HitVolume {
    /// Ray distance to the nearest of the sphere and ring hits.
    ///
    /// Bodies only spin about Y, so the ring plane always has a +Y normal.
    fn hit_distance(&self, ray: Ray3d, cast: &RayCast3d) -> Option<f32> {
        let sphere = cast.sphere_intersection_at(&BoundingSphere::new(self.center, self.radius));
        let ring = self.ring.and_then(|band| {
            let distance = ray.intersect_plane(self.center, InfinitePlane3d { normal: Dir3::Y })?;
            band.contains(ray.get_point(distance).distance(self.center)).then_some(distance)
        });
        match (sphere, ring) {
            (Some(sphere), Some(ring)) => Some(sphere.min(ring)),
            (sphere, ring) => sphere.or(ring),
        }
    }
}

/// Result of a successful pick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick {
    pub body: BodyId,
    /// Distance from the ray origin to the entry point
    pub distance: f32,
    pub point: Vec3,
}

/// The two matrices needed to turn an NDC point into a world-space ray
#[derive(Clone, Copy, Debug)]
pub struct CameraView {
    pub world_from_view: Mat4,
    pub clip_from_view: Mat4,
}

impl CameraView {
    pub fn new(world_from_view: Mat4, clip_from_view: Mat4) -> Self {
        Self {
            world_from_view,
            clip_from_view,
        }
    }

    pub fn from_camera(camera: &Camera, transform: &GlobalTransform) -> Self {
        Self::new(Mat4::from(transform.affine()), camera.clip_from_view())
    }

    /// Ray from the near plane through `ndc`.
    ///
    /// Same unprojection as `Camera::ndc_to_world`, but from plain matrices so
    /// picking can be tested without a render target.
    ///
    /// Bevy projections are reverse-z: depth 1 is the near plane and depth 0 is
    /// the (possibly infinite) far plane, so a depth just above 0 is used for the
    /// second point.
    pub fn ray_through(&self, ndc: Vec2) -> Option<Ray3d> {
        let ndc_to_world = self.world_from_view * self.clip_from_view.inverse();
        let near = ndc_to_world.project_point3(ndc.extend(1.0));
        let far = ndc_to_world.project_point3(ndc.extend(f32::EPSILON));
        if !near.is_finite() || !far.is_finite() {
            return None;
        }
        let direction = Dir3::new(far - near).ok()?;
        Some(Ray3d::new(near, direction))
    }
}

/// Map a pointer position in pixels (origin top-left) to NDC in `[-1, 1]`, +y up.
///
/// Returns None for an empty viewport.
pub fn pointer_ndc(position: Vec2, viewport_size: Vec2) -> Option<Vec2> {
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        position.x / viewport_size.x * 2.0 - 1.0,
        -(position.y / viewport_size.y) * 2.0 + 1.0,
    ))
}

/// Body under the pointer, nearest to the camera when several volumes are hit.
pub fn resolve(
    pointer_ndc: Vec2,
    camera: &CameraView,
    volumes: impl IntoIterator<Item = HitVolume>,
) -> Option<Pick> {
    let ray = camera.ray_through(pointer_ndc)?;
    let cast = RayCast3d::from_ray(ray, f32::MAX);

    volumes
        .into_iter()
        .filter_map(|volume| {
            let distance = volume.hit_distance(ray, &cast)?;
            Some(Pick {
                body: volume.body,
                distance,
                point: ray.get_point(distance),
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
