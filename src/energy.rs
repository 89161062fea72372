use crate::constants::{
    FLASH_DELTA_THRESHOLD, FLASH_LOUDNESS_THRESHOLD, IDLE_MOMENTUM, MOMENTUM_CAP,
    MOMENTUM_PER_LOUDNESS,
};

/// Frame-rate audio energy derived from the loudness sampler.
///
/// Both outputs are recomputed from scratch every frame; the only state
/// carried across frames is the previous loudness sample used for the delta
/// comparison. `momentum` scales the particle swarm's speed, `flash_eligible`
/// gates color flashes for the frame.
#[derive(Clone, Copy, Debug)]
pub struct AudioEnergyState {
    pub momentum: f32,
    pub flash_eligible: bool,
    prev_loudness: f32,
}

impl Default for AudioEnergyState {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEnergyState {
    pub fn new() -> Self {
        Self {
            momentum: IDLE_MOMENTUM,
            flash_eligible: false,
            prev_loudness: 0.0,
        }
    }

    /// Fold in this frame's average loudness sample.
    ///
    /// A frame is flash-eligible when the loudness is loud in absolute terms
    /// or jumped sharply since the previous frame. Momentum follows loudness
    /// linearly up to a cap while a track plays, and falls back to a small
    /// idle constant otherwise.
    pub fn update(&mut self, loudness: f32, playing: bool) {
        self.flash_eligible = loudness > FLASH_LOUDNESS_THRESHOLD
            || (loudness - self.prev_loudness).abs() > FLASH_DELTA_THRESHOLD;
        self.momentum = if playing {
            (loudness.floor() * MOMENTUM_PER_LOUDNESS).min(MOMENTUM_CAP)
        } else {
            IDLE_MOMENTUM
        };
        self.prev_loudness = loudness;
    }
}
