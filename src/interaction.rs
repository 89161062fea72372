//! Grab-and-drag manipulation for one pointing controller.
//!
//! Each controller runs a two-state machine: `Idle` until its trigger is held
//! and its aim ray hits a candidate within reach, then `Grabbing` until the
//! trigger is released. While grabbing, the object is re-projected along the
//! aim ray at the distance frozen when the grab began, so it drags at constant
//! range rather than snapping to the controller. A shared [`GrabRegistry`]
//! keeps two controllers from ever owning the same object.

use crate::constants::CONTROLLER_REACH;
use crate::input::{ControllerFrame, Hand};
use crate::scene::SceneQuery;
use fnv::FnvHashMap;
use glam::Vec3;

/// Per-controller grab state. `held_distance` is captured at the moment of
/// the grab and stays constant for the whole episode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrabState {
    Idle,
    Grabbing { object: usize, held_distance: f32 },
}

/// Object-to-owning-hand table enforcing single ownership of a grabbed object.
///
/// Controllers are evaluated in a fixed order within a frame, so when both aim
/// at the same object the first one claims it and the other stays idle.
#[derive(Debug, Default)]
pub struct GrabRegistry {
    owners: FnvHashMap<usize, Hand>,
}

impl GrabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self, object: usize) -> Option<Hand> {
        self.owners.get(&object).copied()
    }

    /// Claim `object` for `hand`. Fails if the other hand already owns it.
    pub fn try_claim(&mut self, object: usize, hand: Hand) -> bool {
        match self.owners.get(&object) {
            Some(&owner) => owner == hand,
            None => {
                self.owners.insert(object, hand);
                true
            }
        }
    }

    /// Release `object` if `hand` is the current owner; no-op otherwise.
    pub fn release(&mut self, object: usize, hand: Hand) {
        if self.owners.get(&object) == Some(&hand) {
            self.owners.remove(&object);
        }
    }
}

/// The selection/manipulation state machine for one controller.
pub struct InteractionController {
    pub hand: Hand,
    /// Re-orient a held object toward the viewer every frame. Cosmetic.
    pub face_viewer: bool,
    grab: GrabState,
    select_pressed_prev: bool,
    reach_indicator: f32,
}

impl InteractionController {
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            face_viewer: true,
            grab: GrabState::Idle,
            select_pressed_prev: false,
            reach_indicator: 0.0,
        }
    }

    pub fn grab_state(&self) -> GrabState {
        self.grab
    }

    /// Trigger level observed on the previous frame, for edge detection.
    pub fn select_pressed_prev(&self) -> bool {
        self.select_pressed_prev
    }

    /// Length hint for the controller's aim line: the held distance while
    /// grabbing, the full reach while the trigger is held with nothing caught,
    /// zero when idle.
    pub fn reach_indicator(&self) -> f32 {
        self.reach_indicator
    }

    /// Advance the state machine by one frame.
    ///
    /// Acquisition is attempted on every frame the trigger is held while idle,
    /// so a held trigger can sweep onto an object. Release happens on the
    /// first frame the trigger reads false; the object stays where it was.
    pub fn tick<S: SceneQuery>(
        &mut self,
        frame: &ControllerFrame,
        scene: &mut S,
        registry: &mut GrabRegistry,
        viewer: Vec3,
    ) {
        if frame.select_pressed {
            match self.grab {
                GrabState::Idle => self.try_grab(frame, scene, registry),
                GrabState::Grabbing {
                    object,
                    held_distance,
                } => {
                    let target = frame.pose.position + frame.pose.forward() * held_distance;
                    scene.set_object_position(object, target);
                    if self.face_viewer {
                        scene.face_toward(object, viewer);
                    }
                    self.reach_indicator = held_distance;
                }
            }
        } else {
            if let GrabState::Grabbing { object, .. } = self.grab {
                registry.release(object, self.hand);
                self.grab = GrabState::Idle;
                log::info!("[{:?}] released object {}", self.hand, object);
            }
            self.reach_indicator = 0.0;
        }
        self.select_pressed_prev = frame.select_pressed;
    }

    fn try_grab<S: SceneQuery>(
        &mut self,
        frame: &ControllerFrame,
        scene: &S,
        registry: &mut GrabRegistry,
    ) {
        self.reach_indicator = CONTROLLER_REACH;
        let origin = frame.pose.position;
        let hits = scene.raycast(origin, frame.pose.forward());
        for hit in hits {
            if hit.distance > CONTROLLER_REACH {
                // Sorted ascending, so everything after is out of reach too.
                break;
            }
            if !registry.try_claim(hit.object, self.hand) {
                // Held by the other hand; fall through to the next hit.
                continue;
            }
            // Distance to the owning node, not the hit surface, so the object
            // keeps its center range while dragged.
            let held_distance = scene.object_position(hit.object).distance(origin);
            self.grab = GrabState::Grabbing {
                object: hit.object,
                held_distance,
            };
            self.reach_indicator = hit.distance;
            log::info!("[{:?}] begin grab on object {}", self.hand, hit.object);
            break;
        }
    }
}
