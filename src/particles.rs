//! Decorative particle layer.
//!
//! Six emitter kinds run on independent jittered spawn intervals; each
//! keeps a soft cap on its live elements so the layer never grows
//! without bound. Spawning pauses while the terminal is unfocused;
//! whatever is already airborne simply ages out. Caps and intervals are
//! tuning constants, not contract.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

/// One emitter family, with its own glyphs, cadence and cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitterKind {
    /// Lotus petals drifting down the whole screen.
    Petal,
    /// Hearts rising from the bottom edge.
    Heart,
    /// Short-lived sparkles at random positions.
    Sparkle,
    /// Confetti showers from the top edge.
    Confetti,
    /// Radial firework bursts.
    Firework,
    /// Streamers sliding in from the side edges.
    Streamer,
}

impl EmitterKind {
    pub const ALL: [EmitterKind; 6] = [
        EmitterKind::Petal,
        EmitterKind::Heart,
        EmitterKind::Sparkle,
        EmitterKind::Confetti,
        EmitterKind::Firework,
        EmitterKind::Streamer,
    ];

    /// Soft cap on concurrently live elements of this kind.
    pub fn cap(&self) -> usize {
        match self {
            EmitterKind::Petal => 12,
            EmitterKind::Heart => 8,
            EmitterKind::Sparkle => 20,
            EmitterKind::Confetti => 30,
            EmitterKind::Firework => 32,
            EmitterKind::Streamer => 6,
        }
    }

    /// Next spawn delay: a fixed base plus random jitter.
    pub fn spawn_interval<R: Rng>(&self, rng: &mut R) -> Duration {
        let (base_ms, jitter_ms) = match self {
            EmitterKind::Petal => (3_000, 1_200),
            EmitterKind::Heart => (4_000, 2_000),
            EmitterKind::Sparkle => (1_500, 900),
            EmitterKind::Confetti => (9_000, 4_000),
            EmitterKind::Firework => (7_000, 5_000),
            EmitterKind::Streamer => (6_000, 3_000),
        };
        Duration::from_millis(base_ms + rng.gen_range(0..=jitter_ms))
    }

    fn glyphs(&self) -> &'static [&'static str] {
        match self {
            EmitterKind::Petal => &["❀", "✿", "⁕"],
            EmitterKind::Heart => &["♥", "♡"],
            EmitterKind::Sparkle => &["✦", "✧", "*", "·"],
            EmitterKind::Confetti => &["▪", "•", "◦", "▫"],
            EmitterKind::Firework => &["✸", "✶", "✹"],
            EmitterKind::Streamer => &["~", "≈"],
        }
    }
}

/// One live decorative element. Positions are in cell coordinates but
/// fractional, so slow drift survives integer rounding.
#[derive(Debug, Clone)]
pub struct Particle {
    pub kind: EmitterKind,
    pub glyph: &'static str,
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    age: f32,
    lifetime: f32,
    pub color_index: usize,
}

impl Particle {
    /// 0.0 fresh → 1.0 expired; the renderer dims the tail end.
    pub fn fade(&self) -> f32 {
        if self.lifetime <= f32::EPSILON {
            1.0
        } else {
            (self.age / self.lifetime).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Default)]
pub struct Particles {
    pub alive: Vec<Particle>,
    paused: bool,
}

impl Particles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visibility gate: while paused, spawn passes are no-ops.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn count(&self, kind: EmitterKind) -> usize {
        self.alive.iter().filter(|p| p.kind == kind).count()
    }

    /// One spawn pass for `kind` over a `width`×`height` cell stage.
    /// Skipped while paused, at the emitter's cap, or with no stage.
    pub fn spawn(&mut self, kind: EmitterKind, width: u16, height: u16) {
        if self.paused || width == 0 || height == 0 {
            return;
        }
        let mut rng = rand::thread_rng();
        let headroom = kind.cap().saturating_sub(self.count(kind));
        let batch = match kind {
            EmitterKind::Petal | EmitterKind::Heart | EmitterKind::Streamer => 1,
            EmitterKind::Sparkle => rng.gen_range(2..=4),
            EmitterKind::Confetti => rng.gen_range(6..=10),
            EmitterKind::Firework => rng.gen_range(10..=14),
        };
        let w = f32::from(width);
        let h = f32::from(height);
        // Fireworks burst from one shared origin.
        let origin = (
            rng.gen_range(0.2..0.8) * w,
            rng.gen_range(0.15..0.5) * h,
        );
        for _ in 0..batch.min(headroom) {
            let particle = match kind {
                EmitterKind::Petal => Particle {
                    kind,
                    glyph: pick(kind.glyphs(), &mut rng),
                    x: rng.gen_range(0.0..w),
                    y: 0.0,
                    vx: rng.gen_range(-0.8..0.8),
                    vy: rng.gen_range(1.2..2.4),
                    age: 0.0,
                    lifetime: rng.gen_range(8.0..12.0),
                    color_index: rng.gen_range(0..4),
                },
                EmitterKind::Heart => Particle {
                    kind,
                    glyph: pick(kind.glyphs(), &mut rng),
                    x: rng.gen_range(0.0..w),
                    y: h - 1.0,
                    vx: rng.gen_range(-0.5..0.5),
                    vy: rng.gen_range(-2.2..-1.0),
                    age: 0.0,
                    lifetime: rng.gen_range(6.0..10.0),
                    color_index: rng.gen_range(0..4),
                },
                EmitterKind::Sparkle => Particle {
                    kind,
                    glyph: pick(kind.glyphs(), &mut rng),
                    x: rng.gen_range(0.0..w),
                    y: rng.gen_range(0.0..h),
                    vx: 0.0,
                    vy: 0.0,
                    age: 0.0,
                    lifetime: rng.gen_range(0.6..1.6),
                    color_index: rng.gen_range(0..4),
                },
                EmitterKind::Confetti => Particle {
                    kind,
                    glyph: pick(kind.glyphs(), &mut rng),
                    x: rng.gen_range(0.0..w),
                    y: 0.0,
                    vx: rng.gen_range(-1.5..1.5),
                    vy: rng.gen_range(3.0..6.0),
                    age: 0.0,
                    lifetime: rng.gen_range(3.0..6.0),
                    color_index: rng.gen_range(0..4),
                },
                EmitterKind::Firework => {
                    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                    let speed = rng.gen_range(3.0..7.0);
                    Particle {
                        kind,
                        glyph: pick(kind.glyphs(), &mut rng),
                        x: origin.0,
                        y: origin.1,
                        vx: angle.cos() * speed,
                        // Cells are taller than wide; squash vertically.
                        vy: angle.sin() * speed * 0.5,
                        age: 0.0,
                        lifetime: rng.gen_range(1.2..2.2),
                        color_index: rng.gen_range(0..4),
                    }
                }
                EmitterKind::Streamer => {
                    let from_left = rng.gen_bool(0.5);
                    Particle {
                        kind,
                        glyph: pick(kind.glyphs(), &mut rng),
                        x: if from_left { 0.0 } else { w - 1.0 },
                        y: rng.gen_range(0.0..h),
                        vx: if from_left { 1.0 } else { -1.0 } * rng.gen_range(4.0..8.0),
                        vy: 0.0,
                        age: 0.0,
                        lifetime: rng.gen_range(4.0..7.0),
                        color_index: rng.gen_range(0..4),
                    }
                }
            };
            self.alive.push(particle);
        }
    }

    /// Advances motion by `dt` seconds and culls expired or off-screen
    /// elements.
    pub fn advance(&mut self, dt: f32, width: u16, height: u16) {
        let w = f32::from(width);
        let h = f32::from(height);
        for particle in &mut self.alive {
            particle.age += dt;
            particle.x += particle.vx * dt;
            particle.y += particle.vy * dt;
            // Fireworks and confetti feel gravity.
            if matches!(particle.kind, EmitterKind::Firework | EmitterKind::Confetti) {
                particle.vy += 1.8 * dt;
            }
        }
        self.alive.retain(|p| {
            p.age < p.lifetime && p.x > -2.0 && p.x < w + 2.0 && p.y > -2.0 && p.y < h + 2.0
        });
    }
}

fn pick<R: Rng>(glyphs: &'static [&'static str], rng: &mut R) -> &'static str {
    glyphs.choose(rng).copied().unwrap_or("·")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_is_respected_per_kind() {
        let mut particles = Particles::new();
        for _ in 0..100 {
            particles.spawn(EmitterKind::Petal, 80, 24);
        }
        assert!(particles.count(EmitterKind::Petal) <= EmitterKind::Petal.cap());
        // One kind at its cap does not block another.
        particles.spawn(EmitterKind::Heart, 80, 24);
        assert_eq!(particles.count(EmitterKind::Heart), 1);
    }

    #[test]
    fn paused_layer_spawns_nothing_but_keeps_aging() {
        let mut particles = Particles::new();
        particles.spawn(EmitterKind::Sparkle, 80, 24);
        let live = particles.alive.len();
        assert!(live > 0);

        particles.set_paused(true);
        particles.spawn(EmitterKind::Sparkle, 80, 24);
        assert_eq!(particles.alive.len(), live);

        // Sparkles live under two seconds; they still age out while paused.
        particles.advance(5.0, 80, 24);
        assert!(particles.alive.is_empty());
    }

    #[test]
    fn expired_and_offscreen_elements_are_culled() {
        let mut particles = Particles::new();
        particles.alive.push(Particle {
            kind: EmitterKind::Streamer,
            glyph: "~",
            x: 1.0,
            y: 5.0,
            vx: 100.0,
            vy: 0.0,
            age: 0.0,
            lifetime: 60.0,
            color_index: 0,
        });
        particles.advance(1.0, 80, 24);
        assert!(particles.alive.is_empty(), "flew off the right edge");
    }

    #[test]
    fn empty_stage_is_a_no_op() {
        let mut particles = Particles::new();
        particles.spawn(EmitterKind::Confetti, 0, 0);
        assert!(particles.alive.is_empty());
    }

    #[test]
    fn fade_runs_zero_to_one() {
        let mut particles = Particles::new();
        particles.spawn(EmitterKind::Petal, 80, 24);
        let particle = &particles.alive[0];
        assert_eq!(particle.fade(), 0.0);
        let mut done = particle.clone();
        done.age = done.lifetime * 2.0;
        assert_eq!(done.fade(), 1.0);
    }
}
