//! Particle state and spawning.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

/// One animated point of the field.
///
/// Particles are ephemeral: the whole set is discarded and respawned whenever
/// the display mode changes. `size` and `alpha` are fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in pixel space, spawned inside `[0, width) x [0, height)`.
    pub position: Vec2,
    /// Per-frame displacement. Not scaled by delta time.
    pub velocity: Vec2,
    /// Draw radius in pixels.
    pub size: f32,
    /// Draw opacity.
    pub alpha: f32,
}

impl Particle {
    /// Spawn a particle with uniform-random state inside the given bounds.
    ///
    /// Velocity components are uniform in `[-0.5, 0.5) * speed_multiplier`,
    /// size in `[0.5, 2.5)`, alpha in `[0.1, 0.6)`.
    pub fn spawn(rng: &mut SmallRng, width: f32, height: f32, speed_multiplier: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * speed_multiplier,
                (rng.gen::<f32>() - 0.5) * speed_multiplier,
            ),
            size: rng.gen::<f32>() * 2.0 + 0.5,
            alpha: rng.gen::<f32>() * 0.5 + 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0, 0.3);
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
            assert!(p.velocity.x >= -0.15 && p.velocity.x < 0.15);
            assert!(p.velocity.y >= -0.15 && p.velocity.y < 0.15);
            assert!(p.size >= 0.5 && p.size < 2.5);
            assert!(p.alpha >= 0.1 && p.alpha < 0.6);
        }
    }

    #[test]
    fn test_spawn_speed_scaling() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, 100.0, 100.0, 0.8);
            assert!(p.velocity.x.abs() <= 0.4);
            assert!(p.velocity.y.abs() <= 0.4);
        }
    }
}
