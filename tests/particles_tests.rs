// Host-side tests for the particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use particles::*;

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn make_field() -> ParticleField {
    ParticleField::new(WIDTH, HEIGHT, DEFAULT_PARTICLE_COUNT, 42)
}

#[test]
fn field_spawns_requested_count_within_bounds() {
    let field = make_field();
    assert_eq!(field.particles.len(), DEFAULT_PARTICLE_COUNT);
    for p in &field.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x <= WIDTH, "x out of bounds: {p:?}");
        assert!(p.pos.y >= 0.0 && p.pos.y <= HEIGHT, "y out of bounds: {p:?}");
        assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25, "velocity too fast: {p:?}");
        assert!(p.radius >= 1.0 && p.radius < 3.0, "radius out of range: {p:?}");
    }
}

#[test]
fn same_seed_reproduces_the_field() {
    let a = ParticleField::new(WIDTH, HEIGHT, 10, 7);
    let b = ParticleField::new(WIDTH, HEIGHT, 10, 7);
    for (pa, pb) in a.particles.iter().zip(b.particles.iter()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
        assert_eq!(pa.radius, pb.radius);
    }
}

#[test]
fn step_advances_every_position_by_its_velocity() {
    let mut field = make_field();
    let before = field.particles.clone();
    field.step();
    for (old, new) in before.iter().zip(field.particles.iter()) {
        assert_eq!(new.pos, old.pos + old.vel);
    }
}

#[test]
fn boundary_contact_flips_velocity_without_clamping() {
    let mut field = ParticleField::new(WIDTH, HEIGHT, 1, 0);
    field.particles[0] = Particle {
        pos: Vec2::new(WIDTH - 0.1, 300.0),
        vel: Vec2::new(0.2, 0.0),
        radius: 1.0,
    };
    field.step();
    let p = field.particles[0];
    // Overshot the right edge; position is left past the edge for one tick,
    // velocity now points back in.
    assert!(p.pos.x > WIDTH);
    assert_eq!(p.vel.x, -0.2);

    field.step();
    assert!(field.particles[0].pos.x <= WIDTH);
}

#[test]
fn positions_stay_within_one_tick_of_bounds_over_many_ticks() {
    let mut field = make_field();
    for _ in 0..10_000 {
        field.step();
        for p in &field.particles {
            assert!(
                p.pos.x >= -0.26 && p.pos.x <= WIDTH + 0.26,
                "x escaped plane: {p:?}"
            );
            assert!(
                p.pos.y >= -0.26 && p.pos.y <= HEIGHT + 0.26,
                "y escaped plane: {p:?}"
            );
        }
    }
}

#[test]
fn resize_regenerates_for_the_new_bounds() {
    let mut field = make_field();
    field.resize(400.0, 300.0);
    assert_eq!(field.width(), 400.0);
    assert_eq!(field.height(), 300.0);
    assert_eq!(field.particles.len(), DEFAULT_PARTICLE_COUNT);
    for p in &field.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 400.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 300.0);
    }
}

#[test]
fn links_connect_only_pairs_under_the_distance() {
    let mut field = ParticleField::new(WIDTH, HEIGHT, 3, 1);
    field.particles[0].pos = Vec2::new(0.0, 0.0);
    field.particles[1].pos = Vec2::new(60.0, 0.0);
    field.particles[2].pos = Vec2::new(500.0, 500.0);

    let mut links = Vec::new();
    field.links(&mut links);
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].a, links[0].b), (0, 1));
    // 60 of 100: alpha = 0.15 * (1 - 0.6)
    assert!((links[0].alpha - 0.06).abs() < 1e-5, "alpha was {}", links[0].alpha);
}

#[test]
fn link_alpha_fades_linearly_with_distance() {
    let mut field = ParticleField::new(WIDTH, HEIGHT, 2, 1);
    let mut links = Vec::new();

    field.particles[0].pos = Vec2::new(100.0, 100.0);
    field.particles[1].pos = Vec2::new(100.0, 100.0);
    field.links(&mut links);
    assert!((links[0].alpha - LINK_ALPHA_MAX).abs() < 1e-6);

    field.particles[1].pos = Vec2::new(150.0, 100.0);
    field.links(&mut links);
    assert!((links[0].alpha - LINK_ALPHA_MAX * 0.5).abs() < 1e-6);

    field.particles[1].pos = Vec2::new(100.0 + LINK_DISTANCE, 100.0);
    field.links(&mut links);
    assert!(links.is_empty(), "link at exactly the threshold distance");
}

#[test]
fn pair_scan_covers_every_unordered_pair() {
    let n = 12;
    let mut field = ParticleField::new(WIDTH, HEIGHT, n, 3);
    for p in &mut field.particles {
        p.pos = Vec2::new(10.0, 10.0);
    }
    let mut links = Vec::new();
    field.links(&mut links);
    assert_eq!(links.len(), n * (n - 1) / 2);
}

#[test]
fn links_buffer_is_cleared_between_scans() {
    let mut field = ParticleField::new(WIDTH, HEIGHT, 2, 1);
    field.particles[0].pos = Vec2::new(0.0, 0.0);
    field.particles[1].pos = Vec2::new(10.0, 0.0);
    let mut links = Vec::new();
    field.links(&mut links);
    field.links(&mut links);
    assert_eq!(links.len(), 1, "stale links accumulated");
}
