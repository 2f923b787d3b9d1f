//! Scenario tests for the particle field, driven headlessly through the
//! public API exactly as the windowed runtime drives it.

use plexus::{FieldConfig, Mode, ParticleField};

#[test]
fn test_subtle_init_scenario() {
    // 800x600 viewport in subtle mode: exactly 60 particles, all in bounds
    let field = ParticleField::new(Mode::Subtle, 800.0, 600.0);
    assert_eq!(field.particles().len(), 60);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
    }
}

#[test]
fn test_spawn_distribution_both_modes() {
    for mode in [Mode::Subtle, Mode::Arena] {
        let config = FieldConfig::for_mode(mode);
        let field = ParticleField::new(mode, 1024.0, 768.0);
        assert_eq!(field.particles().len(), config.particle_count);
        for p in field.particles() {
            assert!(p.size >= 0.5 && p.size < 2.5);
            assert!(p.alpha >= 0.1 && p.alpha < 0.6);
            assert!(p.velocity.x.abs() <= 0.5 * config.speed_multiplier);
            assert!(p.velocity.y.abs() <= 0.5 * config.speed_multiplier);
        }
    }
}

#[test]
fn test_mode_switch_mid_run() {
    let mut field = ParticleField::new(Mode::Subtle, 800.0, 600.0);
    for _ in 0..100 {
        field.step();
    }
    assert_eq!(field.particles().len(), 60);

    field.set_mode(Mode::Arena);
    assert_eq!(field.particles().len(), 120);
    // The fresh population spawns inside the current bounds
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
    }

    // And keeps animating in the new mode
    for _ in 0..100 {
        field.step();
    }
    assert_eq!(field.particles().len(), 120);
}

#[test]
fn test_resize_scenario() {
    let mut field = ParticleField::new(Mode::Subtle, 800.0, 600.0);
    for _ in 0..10 {
        field.step();
    }
    let count_before = field.particles().len();

    field.resize(1200.0, 800.0);
    assert_eq!(field.bounds().x, 1200.0);
    assert_eq!(field.bounds().y, 800.0);
    assert_eq!(field.particles().len(), count_before);
}

#[test]
fn test_connection_alpha_stays_capped() {
    let mut field = ParticleField::new(Mode::Arena, 400.0, 300.0);
    for _ in 0..50 {
        field.step();
        for c in field.connections() {
            assert!(c.alpha > 0.0 && c.alpha <= 0.2);
            assert!(c.a < c.b);
            assert!(c.b < field.particles().len());
        }
    }
}

#[test]
fn test_long_run_stays_bounded() {
    // Particles bounce rather than escape: after many frames every particle
    // is still within a velocity step of the viewport.
    let mut field = ParticleField::new(Mode::Arena, 640.0, 480.0);
    let slack = 0.5 * field.config().speed_multiplier + 1e-3;
    for _ in 0..10_000 {
        field.step();
    }
    for p in field.particles() {
        assert!(p.position.x >= -slack && p.position.x <= 640.0 + slack);
        assert!(p.position.y >= -slack && p.position.y <= 480.0 + slack);
    }
}
