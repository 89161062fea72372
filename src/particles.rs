//! The ambient particle swarm.
//!
//! Several hundred particles drift through the space outside the room. Each
//! one carries a phase counter and a randomly chosen axis: that axis receives
//! an oscillatory term while the other two drift steadily, and every
//! [`PHASE_PERIOD`] frames the axis and direction are re-rolled so the swarm
//! never settles into a repeating pattern. Audio momentum scales all of it,
//! and loud frames let particles flash to a new color, throttled per particle
//! by a cooldown.

use crate::constants::{
    BASE_DRIFT, COLOR_BRIGHTNESS_MAX, FLASH_COOLDOWN_FRAMES, PHASE_DIVISOR, PHASE_PERIOD,
    SPAWN_MARGIN, SPAWN_SCATTER, STEADY_DRIFT_BOOST,
};
use crate::energy::AudioEnergyState;
use glam::Vec3;
use rand::prelude::*;

/// Which axis currently receives the oscillatory motion term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn sample(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }
}

/// Simulation state for one particle. References its render node by index in
/// the field; owns no scene-graph state of its own.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
    pub axis_choice: Axis,
    pub sign: f32,
    pub phase_counter: u32,
    pub last_flash_frame: u32,
}

/// Brightness-biased random color: a uniform RGB blended toward a gray fixed
/// by `level` (0 darkest, 5 brightest), then halved, giving randomized but
/// visibly lighter hues at higher levels. Channels are normalized to 0..=1.
pub fn brightness_biased_color(rng: &mut impl Rng, level: u32) -> [f32; 3] {
    let mix = (level * 51) as f32; // 51 = 255 / 5
    let mut color = [0.0f32; 3];
    for channel in &mut color {
        *channel = ((rng.gen::<f32>() * 256.0 + mix) / 2.0).round() / 255.0;
    }
    color
}

fn plus_or_minus(rng: &mut impl Rng) -> f32 {
    if rng.gen::<f32>() < 0.5 {
        -1.0
    } else {
        1.0
    }
}

fn spawn_coord(rng: &mut impl Rng, half_margin: f32) -> f32 {
    plus_or_minus(rng) * (half_margin + (rng.gen::<f32>() * SPAWN_SCATTER).round())
}

/// The whole swarm plus the RNG that drives its re-randomization and flashes.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Spawn `count` particles scattered outside the room's bounding margin.
    /// Seeded, so a field is reproducible in tests.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half_margin = SPAWN_MARGIN / 2.0;
        let particles = (0..count)
            .map(|_| {
                let position = Vec3::new(
                    spawn_coord(&mut rng, half_margin),
                    spawn_coord(&mut rng, half_margin),
                    spawn_coord(&mut rng, half_margin),
                );
                Particle {
                    position,
                    color: brightness_biased_color(&mut rng, COLOR_BRIGHTNESS_MAX),
                    axis_choice: Axis::sample(&mut rng),
                    sign: plus_or_minus(&mut rng),
                    phase_counter: 0,
                    last_flash_frame: 0,
                }
            })
            .collect();
        Self { particles, rng }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one frame under the given audio energy.
    pub fn tick(&mut self, energy: &AudioEnergyState, playing: bool) {
        for p in &mut self.particles {
            p.phase_counter += 1;

            if p.phase_counter % PHASE_PERIOD == 0 {
                p.axis_choice = Axis::sample(&mut self.rng);
                p.sign = plus_or_minus(&mut self.rng);
                p.phase_counter = 0;
                p.last_flash_frame = 0;
            }

            if playing
                && energy.flash_eligible
                && p.phase_counter - p.last_flash_frame > FLASH_COOLDOWN_FRAMES
            {
                p.last_flash_frame = p.phase_counter;
                p.color = brightness_biased_color(&mut self.rng, COLOR_BRIGHTNESS_MAX);
            }

            let wobble = (BASE_DRIFT
                + (p.phase_counter as f32 / PHASE_DIVISOR).sin() * energy.momentum)
                * p.sign;
            let drift = (BASE_DRIFT + STEADY_DRIFT_BOOST) * p.sign * energy.momentum;
            for axis in Axis::ALL {
                let step = if axis == p.axis_choice { wobble } else { drift };
                match axis {
                    Axis::X => p.position.x += step,
                    Axis::Y => p.position.y += step,
                    Axis::Z => p.position.z += step,
                }
            }
        }
    }
}
