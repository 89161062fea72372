//! Per-frame driver tying the core together.
//!
//! The rendering engine calls [`Session::tick`] once per rendered frame from a
//! single thread. Within a frame the order is fixed: loudness and energy
//! first, then the particle swarm, then the showpiece spin, then each
//! controller (locomotion, music toggle, interaction) in left-to-right order.
//! Energy-before-particles is a real data dependency; the two controllers are
//! ordered only so grab arbitration is deterministic.

use crate::constants::{PARTICLE_COUNT, SHOWPIECE_SPIN_Y, SHOWPIECE_SPIN_Z};
use crate::energy::AudioEnergyState;
use crate::input::{locomotion_delta, ControllerFrame, Hand};
use crate::interaction::{GrabRegistry, InteractionController};
use crate::particles::ParticleField;
use crate::playlist::{AudioDeck, Playlist, PlaylistError};
use crate::scene::SceneQuery;
use glam::Vec3;

/// Everything the driving loop feeds the core for one frame. Controllers are
/// ordered left then right, matching [`Session::controllers`].
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub controllers: [ControllerFrame; 2],
    /// Viewer (head) position in world space, for the look-at constraint.
    pub viewer_position: Vec3,
}

impl FrameInput {
    /// Both controllers at rest, viewer at the origin.
    pub fn idle() -> Self {
        Self {
            controllers: [
                ControllerFrame::idle(Hand::Left),
                ControllerFrame::idle(Hand::Right),
            ],
            viewer_position: Vec3::ZERO,
        }
    }
}

/// Whole-session core state, advanced once per rendered frame.
pub struct Session {
    pub energy: AudioEnergyState,
    pub particles: ParticleField,
    /// Left then right; evaluation order doubles as grab arbitration order.
    pub controllers: [InteractionController; 2],
    pub registry: GrabRegistry,
    pub playlist: Playlist,
    /// Rig anchor the renderer parents the viewer and controllers under.
    pub rig_position: Vec3,
    /// Accumulated showpiece rotation, radians around (x, y, z).
    pub showpiece_rotation: Vec3,
    pub frame_index: u64,
}

impl Session {
    pub fn new(track_count: usize, particle_seed: u64) -> Result<Self, PlaylistError> {
        Ok(Self {
            energy: AudioEnergyState::new(),
            particles: ParticleField::new(PARTICLE_COUNT, particle_seed),
            controllers: [
                InteractionController::new(Hand::Left),
                InteractionController::new(Hand::Right),
            ],
            registry: GrabRegistry::new(),
            playlist: Playlist::new(track_count)?,
            rig_position: Vec3::ZERO,
            showpiece_rotation: Vec3::ZERO,
            frame_index: 0,
        })
    }

    /// Advance the whole core by one frame. Never blocks; every edge condition
    /// (no hit, out of reach, contested grab, silent deck) recovers locally.
    pub fn tick<S: SceneQuery, D: AudioDeck>(
        &mut self,
        input: &FrameInput,
        scene: &mut S,
        deck: &mut D,
    ) {
        self.frame_index += 1;

        let loudness = deck.average_loudness();
        let playing = deck.is_playing();
        self.energy.update(loudness, playing);
        self.particles.tick(&self.energy, playing);

        self.showpiece_rotation.y += SHOWPIECE_SPIN_Y;
        self.showpiece_rotation.z += SHOWPIECE_SPIN_Z;

        for (ctl, frame) in self.controllers.iter_mut().zip(input.controllers.iter()) {
            debug_assert_eq!(ctl.hand, frame.hand, "controller order is left, right");

            self.rig_position += locomotion_delta(frame.hand, frame.joystick);

            // Music control lives on the left trigger's press edge.
            if frame.hand == Hand::Left && frame.select_pressed && !ctl.select_pressed_prev() {
                self.playlist.toggle(deck);
            }

            ctl.tick(frame, scene, &mut self.registry, input.viewer_position);
        }
    }
}
