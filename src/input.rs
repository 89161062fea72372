use crate::constants::LOCOMOTION_STEP;
use crate::scene::Pose;
use glam::Vec3;

/// Which hand a controller connected as. Assigned once per session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

/// One frame's snapshot of a controller: world-space pose, trigger level and
/// locomotion axes, sampled by the driving loop before each tick.
#[derive(Clone, Copy, Debug)]
pub struct ControllerFrame {
    pub hand: Hand,
    pub pose: Pose,
    pub select_pressed: bool,
    /// Joystick reading as `[horizontal, vertical]`, each in -1..=1.
    pub joystick: [f32; 2],
}

impl ControllerFrame {
    /// A resting controller at the origin, aiming down -Z.
    pub fn idle(hand: Hand) -> Self {
        Self {
            hand,
            pose: Pose::default(),
            select_pressed: false,
            joystick: [0.0, 0.0],
        }
    }
}

/// Fixed-step rig translation from one controller's joystick.
///
/// The right stick walks the rig in the horizontal plane, with the horizontal
/// axis taking priority over the vertical one; the left stick raises and
/// lowers it. Axes only gate direction, magnitude is a fixed step per frame.
pub fn locomotion_delta(hand: Hand, joystick: [f32; 2]) -> Vec3 {
    let mut delta = Vec3::ZERO;
    match hand {
        Hand::Right => {
            if joystick[0] > 0.0 {
                delta.x -= LOCOMOTION_STEP;
            } else if joystick[0] < 0.0 {
                delta.x += LOCOMOTION_STEP;
            } else if joystick[1] > 0.0 {
                delta.z -= LOCOMOTION_STEP;
            } else if joystick[1] < 0.0 {
                delta.z += LOCOMOTION_STEP;
            }
        }
        Hand::Left => {
            if joystick[1] > 0.0 {
                delta.y -= LOCOMOTION_STEP;
            } else if joystick[1] < 0.0 {
                delta.y += LOCOMOTION_STEP;
            }
        }
    }
    delta
}
