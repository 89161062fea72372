//! Interaction and animation core for an immersive, audio-reactive music room.
//!
//! The crate owns the two pieces of per-frame logic the room needs: grab-and-drag
//! manipulation driven by a pointing ray and a trigger, and a swarm of ambient
//! particles whose motion and color follow the loudness of whatever track is
//! playing. Rendering, asset loading, and the VR session itself live behind the
//! [`scene::SceneQuery`] and [`playlist::AudioDeck`] traits; the driving loop
//! calls [`frame::Session::tick`] once per rendered frame.

pub mod constants;
pub mod energy;
pub mod frame;
pub mod input;
pub mod interaction;
pub mod particles;
pub mod playlist;
pub mod scene;

pub use energy::*;
pub use frame::*;
pub use input::*;
pub use interaction::*;
pub use particles::*;
pub use playlist::*;
pub use scene::*;
