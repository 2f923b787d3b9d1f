//! The particle field: population, per-frame motion, proximity connections.
//!
//! This is the CPU core of the backdrop and is fully testable without a
//! window or GPU. The renderer consumes it read-only each frame.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{FieldConfig, Mode};
use crate::particle::Particle;

/// A proximity link between two particles, by index into the field.
///
/// Emitted once per unordered pair (`a < b`). `alpha` falls off linearly
/// from 0.2 at zero separation to 0.0 at the connection distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// A bounded set of drifting particles with mode-dependent tunables.
///
/// The field owns its particle population exclusively. Changing mode via
/// [`ParticleField::set_mode`] discards the population and respawns it from
/// the new [`FieldConfig`]; resizing via [`ParticleField::resize`] moves the
/// bounds only and leaves every particle untouched.
#[derive(Debug)]
pub struct ParticleField {
    mode: Mode,
    config: FieldConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: SmallRng,
}

impl ParticleField {
    /// Create a field for `mode` spanning `width x height` pixels.
    pub fn new(mode: Mode, width: f32, height: f32) -> Self {
        Self::with_rng(mode, width, height, SmallRng::from_entropy())
    }

    /// Create a field with a caller-provided RNG. Deterministic for tests.
    pub fn with_rng(mode: Mode, width: f32, height: f32, rng: SmallRng) -> Self {
        let mut field = Self {
            mode,
            config: FieldConfig::for_mode(mode),
            particles: Vec::new(),
            width,
            height,
            rng,
        };
        field.respawn();
        field
    }

    fn respawn(&mut self) {
        self.particles.clear();
        self.particles.reserve(self.config.particle_count);
        for _ in 0..self.config.particle_count {
            self.particles.push(Particle::spawn(
                &mut self.rng,
                self.width,
                self.height,
                self.config.speed_multiplier,
            ));
        }
    }

    /// Switch display mode, discarding the current population and spawning a
    /// fresh one from the new config. No-op if the mode is unchanged.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.config = FieldConfig::for_mode(mode);
        self.respawn();
    }

    /// Update the logical bounds after a viewport resize.
    ///
    /// Particles are not repositioned or clipped; one that ends up outside
    /// the new bounds drifts back in through the bounce rule.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by one frame.
    ///
    /// Each particle moves by its velocity, then a velocity component is
    /// negated if the particle sits outside the bounds on that axis. The
    /// position is deliberately not clamped back inside - a particle can
    /// overshoot for a frame before the flipped velocity takes effect.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.position += p.velocity;

            if p.position.x < 0.0 || p.position.x > self.width {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > self.height {
                p.velocity.y = -p.velocity.y;
            }
        }
    }

    /// Collect the proximity connections for the current positions.
    ///
    /// Considers each unordered pair exactly once; pairs separated by the
    /// connection distance or more produce nothing.
    pub fn connections(&self) -> Vec<Connection> {
        let mut connections = Vec::new();
        let max_dist = self.config.connection_distance;

        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let dist = self.particles[i]
                    .position
                    .distance(self.particles[j].position);
                if dist < max_dist {
                    connections.push(Connection {
                        a: i,
                        b: j,
                        alpha: (1.0 - dist / max_dist) * 0.2,
                    });
                }
            }
        }

        connections
    }

    /// Current display mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Config the population was spawned from.
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The live particle population.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Logical bounds in pixels.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_field(mode: Mode, width: f32, height: f32) -> ParticleField {
        ParticleField::with_rng(mode, width, height, SmallRng::seed_from_u64(42))
    }

    #[test]
    fn test_subtle_population() {
        let field = test_field(Mode::Subtle, 800.0, 600.0);
        assert_eq!(field.particles().len(), 60);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        }
    }

    #[test]
    fn test_arena_population() {
        let field = test_field(Mode::Arena, 800.0, 600.0);
        assert_eq!(field.particles().len(), 120);
    }

    #[test]
    fn test_reinit_same_mode_same_count() {
        let a = test_field(Mode::Subtle, 800.0, 600.0);
        let b = ParticleField::with_rng(Mode::Subtle, 800.0, 600.0, SmallRng::seed_from_u64(7));
        assert_eq!(a.particles().len(), b.particles().len());
        // Different seeds, so the populations themselves differ
        assert_ne!(a.particles(), b.particles());
    }

    #[test]
    fn test_mode_switch_replaces_population() {
        let mut field = test_field(Mode::Subtle, 800.0, 600.0);
        let old_first = field.particles()[0];
        field.set_mode(Mode::Arena);
        assert_eq!(field.mode(), Mode::Arena);
        assert_eq!(field.particles().len(), 120);
        assert_ne!(field.particles()[0], old_first);
    }

    #[test]
    fn test_set_same_mode_keeps_population() {
        let mut field = test_field(Mode::Arena, 800.0, 600.0);
        let before = field.particles().to_vec();
        field.set_mode(Mode::Arena);
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_resize_keeps_particles() {
        let mut field = test_field(Mode::Subtle, 800.0, 600.0);
        let before = field.particles().to_vec();
        field.resize(1200.0, 800.0);
        assert_eq!(field.bounds(), Vec2::new(1200.0, 800.0));
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_step_advances_by_velocity() {
        let mut field = test_field(Mode::Subtle, 800.0, 600.0);
        let expected: Vec<Vec2> = field
            .particles()
            .iter()
            .map(|p| p.position + p.velocity)
            .collect();
        field.step();
        for (p, want) in field.particles().iter().zip(expected) {
            assert_eq!(p.position, want);
        }
    }

    #[test]
    fn test_bounce_negates_velocity_without_clamping() {
        let mut field = test_field(Mode::Subtle, 800.0, 600.0);
        {
            // Force a known out-of-bounds state on the first particle
            let p = &mut field.particles[0];
            p.position = Vec2::new(801.0, 300.0);
            p.velocity = Vec2::new(2.0, 0.0);
        }
        field.step();
        let p = field.particles()[0];
        assert_eq!(p.velocity.x, -2.0);
        // Overshoot is preserved, not clamped
        assert_eq!(p.position.x, 803.0);
    }

    #[test]
    fn test_bounce_y_axis() {
        let mut field = test_field(Mode::Subtle, 800.0, 600.0);
        {
            let p = &mut field.particles[0];
            p.position = Vec2::new(400.0, -3.0);
            p.velocity = Vec2::new(0.0, -1.5);
        }
        field.step();
        assert_eq!(field.particles()[0].velocity.y, 1.5);
    }

    #[test]
    fn test_connection_alpha_at_zero_distance() {
        let mut field = test_field(Mode::Subtle, 800.0, 600.0);
        field.particles[0].position = Vec2::new(400.0, 300.0);
        field.particles[1].position = Vec2::new(400.0, 300.0);
        let connections = field.connections();
        let c = connections
            .iter()
            .find(|c| c.a == 0 && c.b == 1)
            .expect("coincident particles must connect");
        assert!((c.alpha - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_no_connection_at_or_beyond_distance() {
        let mut field = test_field(Mode::Subtle, 800.0, 600.0);
        // Park everything far away, then place one pair exactly at the cutoff
        for p in &mut field.particles {
            p.position = Vec2::new(-10_000.0, -10_000.0);
        }
        field.particles[0].position = Vec2::new(0.0, 0.0);
        field.particles[1].position = Vec2::new(100.0, 0.0);
        assert!(field.connections().iter().all(|c| !(c.a == 0 && c.b == 1)));
    }

    #[test]
    fn test_connection_alpha_linear_falloff() {
        let mut field = test_field(Mode::Subtle, 800.0, 600.0);
        for p in &mut field.particles {
            p.position = Vec2::new(-10_000.0, -10_000.0);
        }
        field.particles[0].position = Vec2::new(0.0, 0.0);
        field.particles[1].position = Vec2::new(50.0, 0.0);
        let connections = field.connections();
        let c = connections.iter().find(|c| c.a == 0 && c.b == 1).unwrap();
        // Halfway to the 100px cutoff -> half of the 0.2 cap
        assert!((c.alpha - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_each_pair_connected_once() {
        let mut field = test_field(Mode::Subtle, 800.0, 600.0);
        // Cluster everything so every pair connects
        for p in &mut field.particles {
            p.position = Vec2::new(400.0, 300.0);
        }
        let n = field.particles().len();
        let connections = field.connections();
        assert_eq!(connections.len(), n * (n - 1) / 2);
        for c in &connections {
            assert!(c.a < c.b);
        }
    }
}
