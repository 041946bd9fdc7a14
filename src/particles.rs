//! Drifting particle field behind the hero banner.

use rand::Rng;

/// Particles per `DENSITY_AREA` square pixels.
const PARTICLES_PER_AREA: f64 = 30.0;
const DENSITY_AREA: f64 = 1_500_000.0;
const MAX_SPEED: f64 = 0.8;
pub const LINK_DISTANCE: f64 = 120.0;
const LINK_OPACITY: f64 = 0.2;
pub const GRAB_DISTANCE: f64 = 100.0;
const GRAB_OPACITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// A line drawn between two points, faded by distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

/// Number of particles for a `width` x `height` field, at least one.
pub fn particle_count(width: f64, height: f64) -> usize {
    let area = (width.max(0.0) * height.max(0.0)).max(0.0);
    let count = (PARTICLES_PER_AREA * area / DENSITY_AREA).round();
    (count as usize).max(1)
}

impl ParticleField {
    pub fn new<R: Rng>(width: f64, height: f64, rng: &mut R) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let particles = (0..particle_count(width, height))
            .map(|_| Self::spawn(width, height, rng))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    fn spawn<R: Rng>(width: f64, height: f64, rng: &mut R) -> Particle {
        let radius = rng.gen_range(1.0..=2.0);
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = rng.gen_range(0.0..=MAX_SPEED);
        Particle {
            x: rng.gen_range(0.0..=width),
            y: rng.gen_range(0.0..=height),
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            radius,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Advance one frame; particles bounce off the edges.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, w);
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, h);
            }
        }
    }

    /// Rescale positions to a new field size and top up or trim the count.
    /// A field that was never sized is built from scratch instead.
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        if self.width <= 0.0 || self.height <= 0.0 {
            *self = Self::new(width, height, rng);
            return;
        }
        let width = width.max(1.0);
        let height = height.max(1.0);
        let (sx, sy) = (width / self.width, height / self.height);
        for p in &mut self.particles {
            p.x = (p.x * sx).clamp(0.0, width);
            p.y = (p.y * sy).clamp(0.0, height);
        }
        let target = particle_count(width, height);
        self.particles.truncate(target);
        while self.particles.len() < target {
            self.particles.push(Self::spawn(width, height, rng));
        }
        self.width = width;
        self.height = height;
    }

    /// Lines between every pair of particles closer than [`LINK_DISTANCE`].
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = distance((a.x, a.y), (b.x, b.y));
                if d < LINK_DISTANCE {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity: LINK_OPACITY * (1.0 - d / LINK_DISTANCE),
                    });
                }
            }
        }
        links
    }

    /// Lines from the pointer to nearby particles while hovering.
    pub fn grab_links(&self, pointer: (f64, f64)) -> Vec<Link> {
        self.particles
            .iter()
            .filter_map(|p| {
                let d = distance(pointer, (p.x, p.y));
                (d < GRAB_DISTANCE).then(|| Link {
                    from: pointer,
                    to: (p.x, p.y),
                    opacity: GRAB_OPACITY * (1.0 - d / GRAB_DISTANCE),
                })
            })
            .collect()
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn field_with(particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width: 200.0,
            height: 200.0,
            particles,
        }
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
        }
    }

    #[test]
    fn test_particle_count_scales_with_area() {
        assert_eq!(particle_count(1500.0, 1000.0), 30);
        assert_eq!(particle_count(3000.0, 1000.0), 60);
        assert_eq!(particle_count(10.0, 10.0), 1);
        assert_eq!(particle_count(0.0, 0.0), 1);
    }

    #[test]
    fn test_spawned_particles_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let field = ParticleField::new(1920.0, 1080.0, &mut rng);
        assert_eq!(field.particles().len(), particle_count(1920.0, 1080.0));
        for p in field.particles() {
            assert!((0.0..=1920.0).contains(&p.x));
            assert!((0.0..=1080.0).contains(&p.y));
            assert!((1.0..=2.0).contains(&p.radius));
            assert!(p.vx.hypot(p.vy) <= MAX_SPEED + 1e-9);
        }
    }

    #[test]
    fn test_particles_stay_inside_while_stepping() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut field = ParticleField::new(300.0, 200.0, &mut rng);
        for _ in 0..5_000 {
            field.step();
        }
        for p in field.particles() {
            assert!((0.0..=300.0).contains(&p.x));
            assert!((0.0..=200.0).contains(&p.y));
        }
    }

    #[test]
    fn test_bounce_reverses_velocity() {
        let mut field = field_with(vec![Particle {
            vx: 0.8,
            ..still(199.9, 100.0)
        }]);
        field.step();
        let p = field.particles()[0];
        assert_eq!(p.x, 200.0);
        assert!(p.vx < 0.0);
    }

    #[test]
    fn test_links_respect_distance() {
        let field = field_with(vec![still(0.0, 0.0), still(60.0, 0.0), still(0.0, 150.0)]);
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, (0.0, 0.0));
        assert_eq!(links[0].to, (60.0, 0.0));
        assert!((links[0].opacity - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_grab_links() {
        let field = field_with(vec![still(10.0, 10.0), still(190.0, 190.0)]);
        let links = field.grab_links((0.0, 10.0));
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].to, (10.0, 10.0));
        assert!(links[0].opacity <= GRAB_OPACITY);
    }

    #[test]
    fn test_resize_rescales_and_recounts() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut field = ParticleField::new(1500.0, 1000.0, &mut rng);
        field.resize(750.0, 1000.0, &mut rng);
        assert_eq!(field.size(), (750.0, 1000.0));
        assert_eq!(field.particles().len(), 15);
        assert!(field.particles().iter().all(|p| p.x <= 750.0));

        field.resize(3000.0, 1000.0, &mut rng);
        assert_eq!(field.particles().len(), 60);
    }

    #[test]
    fn test_resize_unsized_field_builds_it() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut field = ParticleField::default();
        field.resize(1500.0, 1000.0, &mut rng);
        assert_eq!(field.size(), (1500.0, 1000.0));
        assert_eq!(field.particles().len(), 30);
        assert!(field
            .particles()
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
