use glam::Vec2;
use rand::prelude::*;

pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Particles closer than this are linked by a line.
pub const LINK_DISTANCE: f32 = 100.0;
/// Link opacity at zero distance; fades linearly to 0 at [`LINK_DISTANCE`].
pub const LINK_ALPHA_MAX: f32 = 0.15;

// Per-frame velocity component range: (-0.25, 0.25).
const SPEED_RANGE: f32 = 0.5;
const RADIUS_MIN: f32 = 1.0;
const RADIUS_SPAN: f32 = 2.0;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// A link between the particles at indices `a` and `b`.
#[derive(Clone, Copy, Debug)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// A fixed-size set of particles drifting inside a bounded plane.
///
/// Velocities are per animation tick, not per second: one `step` is one
/// frame, matching the display-refresh cadence the field is driven at.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f32,
    height: f32,
    count: usize,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(count),
            width,
            height,
            count,
            rng: StdRng::seed_from_u64(seed),
        };
        field.regenerate();
        field
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Adopt a new plane size and regenerate every particle for it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.particles.clear();
        for _ in 0..self.count {
            let pos = Vec2::new(
                self.rng.gen::<f32>() * self.width,
                self.rng.gen::<f32>() * self.height,
            );
            let vel = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * SPEED_RANGE,
                (self.rng.gen::<f32>() - 0.5) * SPEED_RANGE,
            );
            let radius = self.rng.gen::<f32>() * RADIUS_SPAN + RADIUS_MIN;
            self.particles.push(Particle { pos, vel, radius });
        }
    }

    /// Advance one animation tick: move every particle by its velocity and
    /// reflect at the plane edges. Reflection flips the velocity sign without
    /// clamping the position, so a particle may sit past an edge by at most
    /// one tick's velocity before the flipped velocity brings it back.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 || p.pos.x > self.width {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > self.height {
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Collect a link for every unordered pair closer than [`LINK_DISTANCE`].
    /// The scan is O(n²) over the pair set; acceptable for the default 50
    /// particles, reconsider before raising the count.
    pub fn links(&self, out: &mut Vec<Link>) {
        out.clear();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let d = self.particles[i].pos.distance(self.particles[j].pos);
                if d < LINK_DISTANCE {
                    out.push(Link {
                        a: i,
                        b: j,
                        alpha: LINK_ALPHA_MAX * (1.0 - d / LINK_DISTANCE),
                    });
                }
            }
        }
    }
}
