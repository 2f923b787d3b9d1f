//! # plexus - ambient connected-particle backdrop
//!
//! A continuously animated field of drifting points linked by faint lines
//! whenever two points come within a proximity radius. Intended as a
//! decorative full-window background with two selectable intensities.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plexus::{Backdrop, Mode};
//!
//! fn main() -> Result<(), plexus::BackdropError> {
//!     Backdrop::new()
//!         .with_mode(Mode::Arena)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Modes
//!
//! The backdrop has two visual intensities, selected by [`Mode`]:
//!
//! | mode | particles | connection distance | speed | look |
//! |------|-----------|---------------------|-------|------|
//! | `Subtle` | 60 | 100px | 0.3 | slate gray on light |
//! | `Arena` | 120 | 120px | 0.8 | cyan on dark |
//!
//! Switching modes discards the whole particle set and spawns a fresh one;
//! nothing is interpolated between configurations.
//!
//! ### The field
//!
//! [`ParticleField`] is the CPU core: it owns the population, advances it one
//! velocity unit per frame, bounces velocities off the viewport edges, and
//! reports proximity [`Connection`]s. It has no GPU dependency and can be
//! driven headlessly, which is how the test suite exercises it.
//!
//! ### Rendering
//!
//! The windowed runtime draws the field with wgpu: connection lines first,
//! then particles as circular sprites, alpha-blended over a mode-dependent
//! clear color. Resizing the window reconfigures the surface and moves the
//! field bounds without touching any particle.

mod app;
mod backdrop;
mod config;
mod error;
mod field;
mod gpu;
mod particle;
mod shader;
pub mod time;

pub use backdrop::Backdrop;
pub use config::{FieldConfig, Mode};
pub use error::{BackdropError, GpuError};
pub use field::{Connection, ParticleField};
pub use particle::Particle;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::config::{FieldConfig, Mode};
    pub use crate::error::BackdropError;
    pub use crate::field::{Connection, ParticleField};
    pub use crate::particle::Particle;
    pub use crate::time::Time;
}
