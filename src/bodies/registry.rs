//! Static descriptive data for every orbiting body

use bevy::prelude::*;

/// Stable index of a body in [`BODIES`].
///
/// Orbit state, render entities and picking results all refer to a body through
/// this id rather than carrying a copy of its descriptor.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    /// Descriptor for this id. Ids are only minted from the registry, so the
    /// lookup cannot miss.
    pub fn descriptor(self) -> &'static BodyDescriptor {
        &BODIES[self.0]
    }
}

/// Immutable description of one orbiting body.
#[derive(Debug, PartialEq)]
pub struct BodyDescriptor {
    pub name: &'static str,
    /// Sphere radius in scene units
    pub radius: f32,
    /// Orbital radius around the sun in scene units
    pub distance: f32,
    /// Relative angular speed; Earth is 1.0
    pub angular_speed_factor: f64,
    /// 0xRRGGBB, sRGB
    pub color_hex: u32,
    pub info: &'static str,
    pub has_rings: bool,
}

/// Gap between a body's surface and the inner edge of its ring
const RING_GAP: f32 = 1.0;
/// Radial width of a ring band
const RING_WIDTH: f32 = 2.0;

impl BodyDescriptor {
    /// Inner and outer radius of the ring band, for bodies that have one.
    pub fn ring_radii(&self) -> Option<(f32, f32)> {
        self.has_rings.then(|| {
            let inner = self.radius + RING_GAP;
            (inner, inner + RING_WIDTH)
        })
    }

    pub fn color(&self) -> Color {
        let [_, r, g, b] = self.color_hex.to_be_bytes();
        Color::srgb_u8(r, g, b)
    }
}

pub const BODIES: [BodyDescriptor; 8] = [
    BodyDescriptor {
        name: "Mercury",
        radius: 1.5,
        distance: 25.0,
        angular_speed_factor: 4.74,
        color_hex: 0x8C7853,
        info: "Closest planet to the Sun. No atmosphere.",
        has_rings: false,
    },
    BodyDescriptor {
        name: "Venus",
        radius: 2.2,
        distance: 35.0,
        angular_speed_factor: 1.85,
        color_hex: 0xFFC649,
        info: "Hottest planet with thick atmosphere.",
        has_rings: false,
    },
    BodyDescriptor {
        name: "Earth",
        radius: 2.5,
        distance: 45.0,
        angular_speed_factor: 1.0,
        color_hex: 0x6B93D6,
        info: "Our home planet with water and life.",
        has_rings: false,
    },
    BodyDescriptor {
        name: "Mars",
        radius: 2.0,
        distance: 55.0,
        angular_speed_factor: 0.53,
        color_hex: 0xC1440E,
        info: "The Red Planet with polar ice caps.",
        has_rings: false,
    },
    BodyDescriptor {
        name: "Jupiter",
        radius: 6.0,
        distance: 75.0,
        angular_speed_factor: 0.084,
        color_hex: 0xD8CA9D,
        info: "Largest planet with a Great Red Spot.",
        has_rings: false,
    },
    BodyDescriptor {
        name: "Saturn",
        radius: 5.0,
        distance: 95.0,
        angular_speed_factor: 0.034,
        color_hex: 0xFAD5A5,
        info: "Famous for its prominent ring system.",
        has_rings: true,
    },
    BodyDescriptor {
        name: "Uranus",
        radius: 3.5,
        distance: 115.0,
        angular_speed_factor: 0.012,
        color_hex: 0x4FD0E4,
        info: "Ice giant tilted on its side.",
        has_rings: false,
    },
    BodyDescriptor {
        name: "Neptune",
        radius: 3.2,
        distance: 135.0,
        angular_speed_factor: 0.006,
        color_hex: 0x4B70DD,
        info: "Windiest planet in our solar system.",
        has_rings: false,
    },
];

/// Iterate `(id, descriptor)` pairs in registry order.
pub fn all_bodies() -> impl Iterator<Item = (BodyId, &'static BodyDescriptor)> {
    BODIES.iter().enumerate().map(|(i, d)| (BodyId(i), d))
}

/// Look up a body by case-insensitive name.
#[cfg(test)]
pub fn find_body(name: &str) -> Option<BodyId> {
    all_bodies()
        .find(|(_, d)| d.name.eq_ignore_ascii_case(name))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_values_are_positive() {
        for (_, body) in all_bodies() {
            assert!(body.radius > 0.0, "{} radius", body.name);
            assert!(body.distance > 0.0, "{} distance", body.name);
            assert!(body.angular_speed_factor > 0.0, "{} speed", body.name);
        }
    }

    #[test]
    fn test_bodies_do_not_overlap_the_sun_or_each_other() {
        // Sun glow radius is 12
        let mut last_outer = 12.0;
        for (_, body) in all_bodies() {
            assert!(body.distance - body.radius > last_outer, "{}", body.name);
            last_outer = body.distance + body.radius;
        }
    }

    #[test]
    fn test_only_saturn_has_rings() {
        let ringed: Vec<_> = all_bodies()
            .filter(|(_, d)| d.has_rings)
            .map(|(_, d)| d.name)
            .collect();
        assert_eq!(ringed, vec!["Saturn"]);
        assert_eq!(BODIES[5].ring_radii(), Some((6.0, 8.0)));
        assert_eq!(BODIES[2].ring_radii(), None);
    }

    #[test]
    fn test_find_body() {
        let earth = find_body("earth").unwrap();
        assert_eq!(earth, BodyId(2));
        assert_eq!(earth.descriptor().angular_speed_factor, 1.0);
        assert!(find_body("Pluto").is_none());
    }

    #[test]
    fn test_color_decodes_hex() {
        let srgba = BODIES[3].color().to_srgba();
        assert!((srgba.red - 0xC1 as f32 / 255.0).abs() < 1e-6);
        assert!((srgba.green - 0x44 as f32 / 255.0).abs() < 1e-6);
        assert!((srgba.blue - 0x0E as f32 / 255.0).abs() < 1e-6);
    }
}
