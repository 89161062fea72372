// Tuning constants for the room's interaction and animation core.

// Interaction
pub const CONTROLLER_REACH: f32 = 3.0; // max grab distance along the aim ray
pub const LOCOMOTION_STEP: f32 = 0.01; // rig translation per frame per held axis

// Room layout
pub const GRID_SIZE: f32 = 20.0; // edge length of the cubic grid room
pub const SPAWN_MARGIN: f32 = GRID_SIZE + 2.0; // the swarm spawns outside this box
pub const SPAWN_SCATTER: f32 = 100.0; // extra spawn distance, uniform per axis

// Particle swarm
pub const PARTICLE_COUNT: usize = 350;
pub const PHASE_PERIOD: u32 = 70; // frames between axis/sign re-randomization
pub const BASE_DRIFT: f32 = 0.01; // per-frame drift independent of audio energy
pub const STEADY_DRIFT_BOOST: f32 = 0.5; // extra drift on the non-oscillating axes
pub const PHASE_DIVISOR: f32 = 4.0; // stretches the oscillation wavelength

// Audio energy
pub const FLASH_LOUDNESS_THRESHOLD: f32 = 60.0; // absolute loudness that permits flashes
pub const FLASH_DELTA_THRESHOLD: f32 = 5.0; // frame-to-frame jump that permits flashes
pub const FLASH_COOLDOWN_FRAMES: u32 = 5; // min phase frames between recolors of one particle
pub const MOMENTUM_PER_LOUDNESS: f32 = 0.015; // momentum per loudness unit while playing
pub const MOMENTUM_CAP: f32 = 0.6;
pub const IDLE_MOMENTUM: f32 = 0.02; // momentum when no track is playing

// Color
pub const COLOR_BRIGHTNESS_MAX: u32 = 5; // brightness level for spawn and flash colors

// Showpiece model spin (radians per frame)
pub const SHOWPIECE_SPIN_Y: f32 = 0.01;
pub const SHOWPIECE_SPIN_Z: f32 = 0.02;
