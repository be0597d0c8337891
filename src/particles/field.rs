//! Particle model for the hero background: positions, drift, boundary
//! reflection, and the connection-line math. No DOM access here, so the whole
//! module tests natively; `canvas.rs` owns the drawing.

use std::f64::consts::PI;

use crate::config::{CONNECTION_DISTANCE, PARTICLE_AREA_DIVISOR};

const NUMERALS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const SYMBOLS: [&str; 8] = ["+", "-", "*", "/", "<", ">", "=", "∞"];
const LABELS: [&str; 10] = [
    "KIMI", "AI", "GPT", "ML", "CODE", "DATA", "TECH", "{ }", "</>", "⚡",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticleKind {
    Dot,
    Numeral,
    Symbol,
    Label,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// One particle per `PARTICLE_AREA_DIVISOR` square pixels, truncated.
    pub fn particle_count(&self) -> usize {
        (self.width * self.height / PARTICLE_AREA_DIVISOR) as usize
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub size: f64,
    pub opacity: f64,
    pub pulse: f64,
    pub kind: ParticleKind,
    pub content: &'static str,
}

impl Particle {
    pub fn spawn(rng: &mut fastrand::Rng, bounds: Bounds) -> Self {
        let kind = match rng.usize(0..4) {
            0 => ParticleKind::Numeral,
            1 => ParticleKind::Symbol,
            2 => ParticleKind::Label,
            _ => ParticleKind::Dot,
        };
        let content = match kind {
            ParticleKind::Numeral => NUMERALS[rng.usize(..NUMERALS.len())],
            ParticleKind::Symbol => SYMBOLS[rng.usize(..SYMBOLS.len())],
            ParticleKind::Label => LABELS[rng.usize(..LABELS.len())],
            ParticleKind::Dot => "",
        };
        // Labels stay a little smaller so the longer tokens don't dominate;
        // dots get a lower floor.
        let size = match kind {
            ParticleKind::Label => rng.f64() * 14.0 + 8.0,
            ParticleKind::Dot => rng.f64() * 18.0 + 2.0,
            _ => rng.f64() * 18.0 + 8.0,
        };

        Particle {
            x: rng.f64() * bounds.width,
            y: rng.f64() * bounds.height,
            speed_x: (rng.f64() - 0.5) * 0.5,
            speed_y: (rng.f64() - 0.5) * 0.5,
            size,
            opacity: rng.f64() * 0.3 + 0.1,
            pulse: rng.f64() * 2.0 * PI,
            kind,
            content,
        }
    }

    /// One frame of motion: drift, reflect off the edges, clamp back inside.
    /// The clamp keeps the position in bounds on the same frame the bounce is
    /// detected.
    pub fn advance(&mut self, bounds: Bounds) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x < 0.0 || self.x > bounds.width {
            self.speed_x = -self.speed_x;
        }
        if self.y < 0.0 || self.y > bounds.height {
            self.speed_y = -self.speed_y;
        }

        self.x = self.x.clamp(0.0, bounds.width);
        self.y = self.y.clamp(0.0, bounds.height);
        self.pulse += 0.02;
    }

    /// Base opacity modulated by the pulse phase, oscillating ±20%.
    pub fn pulse_opacity(&self) -> f64 {
        self.opacity * (0.8 + self.pulse.sin() * 0.2)
    }
}

pub fn spawn_field(rng: &mut fastrand::Rng, bounds: Bounds) -> Vec<Particle> {
    (0..bounds.particle_count())
        .map(|_| Particle::spawn(rng, bounds))
        .collect()
}

/// Line opacity for a particle pair: 0.1 at zero distance, fading linearly to
/// nothing at `CONNECTION_DISTANCE`.
pub fn connection_alpha(distance: f64) -> f64 {
    if distance >= CONNECTION_DISTANCE {
        0.0
    } else {
        0.1 * (1.0 - distance / CONNECTION_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0x5eed)
    }

    const BOUNDS: Bounds = Bounds {
        width: 1920.0,
        height: 1080.0,
    };

    #[test]
    fn count_follows_the_density_rule() {
        assert_eq!(BOUNDS.particle_count(), 138); // 1920*1080/15000 truncated
        assert_eq!(
            Bounds {
                width: 375.0,
                height: 667.0
            }
            .particle_count(),
            16
        );
        assert_eq!(
            Bounds {
                width: 0.0,
                height: 0.0
            }
            .particle_count(),
            0
        );
    }

    #[test]
    fn spawned_particles_start_inside_bounds() {
        let mut rng = rng();
        let field = spawn_field(&mut rng, BOUNDS);
        assert_eq!(field.len(), BOUNDS.particle_count());
        for p in &field {
            assert!((0.0..=BOUNDS.width).contains(&p.x));
            assert!((0.0..=BOUNDS.height).contains(&p.y));
            assert!(p.speed_x.abs() <= 0.25 && p.speed_y.abs() <= 0.25);
            assert!((0.1..=0.4).contains(&p.opacity));
            assert!((0.0..2.0 * PI).contains(&p.pulse));
        }
    }

    #[test]
    fn sizes_respect_their_kind_ranges() {
        let mut rng = rng();
        for _ in 0..2000 {
            let p = Particle::spawn(&mut rng, BOUNDS);
            match p.kind {
                ParticleKind::Label => assert!((8.0..22.0).contains(&p.size)),
                ParticleKind::Dot => assert!((2.0..20.0).contains(&p.size)),
                _ => assert!((8.0..26.0).contains(&p.size)),
            }
            if p.kind == ParticleKind::Dot {
                assert!(p.content.is_empty());
            } else {
                assert!(!p.content.is_empty());
            }
        }
    }

    #[test]
    fn advance_stays_inside_bounds_indefinitely() {
        let mut rng = rng();
        let mut field = spawn_field(&mut rng, BOUNDS);
        for _ in 0..10_000 {
            for p in &mut field {
                p.advance(BOUNDS);
                assert!((0.0..=BOUNDS.width).contains(&p.x));
                assert!((0.0..=BOUNDS.height).contains(&p.y));
            }
        }
    }

    #[test]
    fn clamp_holds_even_for_out_of_range_velocities() {
        let mut p = Particle::spawn(&mut rng(), BOUNDS);
        p.x = BOUNDS.width - 1.0;
        p.y = 1.0;
        p.speed_x = 500.0;
        p.speed_y = -500.0;
        p.advance(BOUNDS);
        assert_eq!(p.x, BOUNDS.width);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn boundary_hit_reflects_velocity() {
        let mut p = Particle::spawn(&mut rng(), BOUNDS);
        p.x = BOUNDS.width - 0.05;
        p.speed_x = 0.2;
        p.advance(BOUNDS);
        assert_eq!(p.x, BOUNDS.width);
        assert_eq!(p.speed_x, -0.2);

        p.y = 0.05;
        p.speed_y = -0.2;
        p.advance(BOUNDS);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.speed_y, 0.2);
    }

    #[test]
    fn connection_alpha_fades_monotonically_to_zero() {
        let mut last = connection_alpha(0.0);
        assert!((last - 0.1).abs() < 1e-12);
        for step in 1..=300 {
            let d = step as f64 * 0.5;
            let alpha = connection_alpha(d);
            assert!(alpha <= last);
            last = alpha;
        }
        assert_eq!(connection_alpha(150.0), 0.0);
        assert_eq!(connection_alpha(1e6), 0.0);
    }

    #[test]
    fn pulse_opacity_stays_within_twenty_percent_of_base() {
        let mut p = Particle::spawn(&mut rng(), BOUNDS);
        p.opacity = 0.4;
        for _ in 0..1000 {
            p.advance(BOUNDS);
            let o = p.pulse_opacity();
            assert!((0.4 * 0.6..=0.4).contains(&o));
        }
    }
}
