//! Field configuration derived from the display mode.
//!
//! Every tunable of the backdrop (population, connection radius, drift speed,
//! colors) is a pure function of [`Mode`]. Switching modes never blends
//! between configurations - the field is torn down and regenerated.

use glam::Vec3;

/// Visual intensity of the backdrop.
///
/// `Subtle` is the quiet variant for content-heavy screens; `Arena` is the
/// dense high-contrast variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Sparse, slow, slate-gray particles on a light background.
    #[default]
    Subtle,
    /// Dense, fast, cyan particles on a dark background.
    Arena,
}

impl Mode {
    /// The other mode. Convenience for input handlers that flip the backdrop.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Subtle => Mode::Arena,
            Mode::Arena => Mode::Subtle,
        }
    }
}

/// Tunables for one mode of the particle field.
///
/// Immutable for the lifetime of a mode; obtained via [`FieldConfig::for_mode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Number of particles in the field.
    pub particle_count: usize,
    /// Maximum separation (pixels) at which two particles are linked by a line.
    pub connection_distance: f32,
    /// Scales the random per-frame velocity drawn at spawn.
    pub speed_multiplier: f32,
    /// Particle and connection color, RGB in 0.0-1.0.
    pub color: Vec3,
    /// Surface clear color, RGB in 0.0-1.0.
    pub background: Vec3,
}

impl FieldConfig {
    /// Look up the configuration for a mode.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Subtle => Self {
                particle_count: 60,
                connection_distance: 100.0,
                speed_multiplier: 0.3,
                // Slate gray on near-white slate
                color: Vec3::new(0.580, 0.639, 0.722),
                background: Vec3::new(0.973, 0.980, 0.988),
            },
            Mode::Arena => Self {
                particle_count: 120,
                connection_distance: 120.0,
                speed_multiplier: 0.8,
                // Cyan on near-black slate
                color: Vec3::new(0.0, 1.0, 1.0),
                background: Vec3::new(0.008, 0.024, 0.090),
            },
        }
    }
}
