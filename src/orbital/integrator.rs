//! Orbit integrator
//!
//! Bodies move on coplanar circles around the origin. Each body keeps an
//! accumulated phase angle; its position is always derived from that angle and
//! never stored independently.

use std::f64::consts::TAU;

use bevy::math::DVec2;
use bevy::prelude::*;
use rand::Rng;

use crate::bodies::{BodyDescriptor, BodyId, all_bodies};
use crate::orbital::playback::PlaybackState;

/// Angular velocity of a body with speed factor 1.0 at speed multiplier 1.0.
///
/// One revolution every 20 seconds. This is a visual tuning knob, not a physical
/// constant.
pub const REFERENCE_ANGULAR_RATE: f64 = TAU / 20.0;

/// Radians per second for a body with the given speed factor.
pub fn base_angular_rate(speed_factor: f64) -> f64 {
    REFERENCE_ANGULAR_RATE * speed_factor
}

/// Mutable orbital state of one body
#[derive(Debug, Clone)]
pub struct OrbitState {
    id: BodyId,
    angle: f64,
    /// (x, z) in the orbital plane
    position: DVec2,
}

impl OrbitState {
    pub fn new(id: BodyId, angle: f64) -> Self {
        let mut state = Self {
            id,
            angle,
            position: DVec2::ZERO,
        };
        state.derive_position();
        state
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn descriptor(&self) -> &'static BodyDescriptor {
        self.id.descriptor()
    }

    /// Accumulated phase in radians. Not wrapped into `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// World-space position; orbits lie in the y = 0 plane.
    pub fn translation(&self) -> Vec3 {
        let position = self.position();
        Vec3::new(position.x as f32, 0.0, position.y as f32)
    }

    /// Advance by `elapsed_seconds` of wall time. Negative or NaN input counts as zero.
    pub fn step(&mut self, elapsed_seconds: f64, playback: &PlaybackState) {
        if playback.is_paused() {
            return;
        }
        let elapsed = elapsed_seconds.max(0.0);
        self.angle += elapsed
            * base_angular_rate(self.descriptor().angular_speed_factor)
            * playback.speed_multiplier();
        self.derive_position();
    }

    fn derive_position(&mut self) {
        let distance = f64::from(self.descriptor().distance);
        let (sin, cos) = self.angle().sin_cos();
        self.position = DVec2::new(distance * cos, distance * sin);
    }
}

/// Orbit state of every registered body, in registry order
#[derive(Resource, Debug, Clone)]
pub struct Orbits {
    states: Vec<OrbitState>,
}

impl Orbits {
    /// One state per registered body with an independent random phase in `[0, 2π)`.
    pub fn with_random_phases<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let states = all_bodies()
            .map(|(id, _)| OrbitState::new(id, rng.gen_range(0.0..TAU)))
            .collect();
        Self { states }
    }

    #[cfg(test)]
    pub fn from_states(states: Vec<OrbitState>) -> Self {
        Self { states }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitState> {
        self.states.iter()
    }

    pub fn get(&self, id: BodyId) -> Option<&OrbitState> {
        self.states.iter().find(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Step every body exactly once.
    pub fn step_all(&mut self, elapsed_seconds: f64, playback: &PlaybackState) {
        for state in &mut self.states {
            state.step(elapsed_seconds, playback);
        }
    }
}

/// Per-frame driver: one `step` per body using the frame delta
pub fn advance_orbits(
    time: Res<Time>,
    playback: Res<PlaybackState>,
    mut orbits: ResMut<Orbits>,
) {
    if playback.is_paused() {
        return;
    }
    orbits.step_all(time.delta_secs_f64(), &playback);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPS: f64 = 1e-9;

    fn earth_at(angle: f64) -> OrbitState {
        OrbitState::new(BodyId(2), angle)
    }

    fn assert_on_circle(state: &OrbitState) {
        let d = f64::from(state.descriptor().distance);
        let expected = DVec2::new(d * state.angle().cos(), d * state.angle().sin());
        assert!(
            (state.position() - expected).length() < EPS,
            "{}: {:?} vs {:?}",
            state.descriptor().name,
            state.position(),
            expected
        );
    }

    #[test]
    fn test_position_follows_angle_through_steps() {
        let playback = PlaybackState::default();
        let mut orbits = Orbits::with_random_phases(&mut StdRng::seed_from_u64(1));
        for dt in [0.016, 0.5, 0.0, 3.0, 0.033, 120.0] {
            orbits.step_all(dt, &playback);
            for state in orbits.iter() {
                assert_on_circle(state);
                assert_eq!(state.translation().y, 0.0);
            }
        }
    }

    #[test]
    fn test_paused_step_is_a_no_op() {
        let mut playback = PlaybackState::default();
        playback.toggle_pause();
        let mut state = earth_at(1.0);
        let before = state.clone();
        for dt in [0.016, 10.0, 1e6] {
            state.step(dt, &playback);
        }
        assert_eq!(state.angle(), before.angle());
        assert_eq!(state.position(), before.position());
    }

    #[test]
    fn test_angle_advances_at_reference_rate() {
        let playback = PlaybackState::default();
        let mut state = earth_at(0.0);
        // Earth (factor 1.0) completes a revolution in 20 s at speed 1.0
        state.step(20.0, &playback);
        assert!((state.angle() - TAU).abs() < EPS);
        assert!((state.position() - DVec2::new(45.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_angle_is_not_wrapped() {
        let playback = PlaybackState::default();
        let mut state = earth_at(0.0);
        for _ in 0..100 {
            state.step(1.0, &playback);
        }
        assert!(state.angle() > TAU * 4.9);
        assert_on_circle(&state);
    }

    #[test]
    fn test_double_speed_half_time_is_equivalent() {
        let mut slow = PlaybackState::default();
        slow.set_speed(1.0);
        let mut fast = PlaybackState::default();
        fast.set_speed(2.0);

        let mut a = OrbitState::new(BodyId(0), 0.3);
        let mut b = OrbitState::new(BodyId(0), 0.3);
        for _ in 0..50 {
            a.step(0.02, &slow);
            b.step(0.01, &fast);
        }
        assert!((a.angle() - b.angle()).abs() < 1e-9);
    }

    #[test]
    fn test_pause_resume_has_no_drift() {
        let mut playback = PlaybackState::default();
        let mut paused_run = earth_at(0.5);
        let mut straight_run = earth_at(0.5);

        paused_run.step(1.0, &playback);
        playback.toggle_pause();
        paused_run.step(30.0, &playback);
        playback.toggle_pause();
        paused_run.step(1.0, &playback);

        straight_run.step(2.0, &playback);
        assert!((paused_run.angle() - straight_run.angle()).abs() < EPS);
    }

    #[test]
    fn test_negative_and_nan_elapsed_clamp_to_zero() {
        let playback = PlaybackState::default();
        let mut state = earth_at(2.0);
        state.step(-5.0, &playback);
        assert_eq!(state.angle(), 2.0);
        state.step(f64::NAN, &playback);
        assert_eq!(state.angle(), 2.0);
    }

    #[test]
    fn test_faster_factor_progresses_faster() {
        let playback = PlaybackState::default();
        let mut mercury = OrbitState::new(BodyId(0), 0.0);
        let mut neptune = OrbitState::new(BodyId(7), 0.0);
        mercury.step(1.0, &playback);
        neptune.step(1.0, &playback);
        assert!(mercury.angle() > neptune.angle());
    }

    #[test]
    fn test_random_phases_are_in_range() {
        let orbits = Orbits::with_random_phases(&mut StdRng::seed_from_u64(42));
        assert_eq!(orbits.len(), 8);
        for state in orbits.iter() {
            assert!((0.0..TAU).contains(&state.angle()));
        }
        assert_eq!(orbits.get(BodyId(5)).unwrap().descriptor().name, "Saturn");
    }

    fn headless_app(playback: PlaybackState) -> App {
        use bevy::time::TimeUpdateStrategy;
        use std::time::Duration;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)))
            .insert_resource(playback)
            .insert_resource(Orbits::from_states(vec![earth_at(0.0)]))
            .add_systems(Update, advance_orbits);
        app
    }

    #[test]
    fn test_advance_orbits_uses_frame_time() {
        let mut app = headless_app(PlaybackState::default());
        for _ in 0..5 {
            app.update();
        }
        let elapsed = app.world().resource::<Time>().elapsed_secs_f64();
        let angle = app.world().resource::<Orbits>().get(BodyId(2)).unwrap().angle();
        assert!(elapsed > 0.0);
        assert!((angle - elapsed * REFERENCE_ANGULAR_RATE).abs() < 1e-6);
    }

    #[test]
    fn test_advance_orbits_respects_pause() {
        let mut playback = PlaybackState::default();
        playback.toggle_pause();
        let mut app = headless_app(playback);
        for _ in 0..5 {
            app.update();
        }
        let angle = app.world().resource::<Orbits>().get(BodyId(2)).unwrap().angle();
        assert_eq!(angle, 0.0);
    }
}
