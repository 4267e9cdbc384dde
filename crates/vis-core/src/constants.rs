// Shared simulation/visual tuning constants used by both frontends.

// Scene layout
pub const CAMERA_Z: f32 = 9.0; // camera eye distance to the pointer plane

// Convergence staggering
pub const START_DELAY_MAX_SEC: f32 = 1.6; // stagger window for the converge-in effect
pub const CONVERGE_SPEED_MIN: f32 = 0.35; // per-particle progress rate range (1/s)
pub const CONVERGE_SPEED_MAX: f32 = 1.15;

// Positional smoothing time constants (seconds)
pub const SMOOTH_TAU_SEC: f32 = 0.28;
pub const SMOOTH_TAU_FAST_SEC: f32 = 0.08; // while repelled or transforming

// Secondary float (idle wobble)
pub const FLOAT_AMP_MIN: f32 = 0.02;
pub const FLOAT_AMP_MAX: f32 = 0.09;
pub const FLOAT_FREQ_X: f32 = 0.9; // rad/s, deliberately incommensurate per axis
pub const FLOAT_FREQ_Y: f32 = 1.3;
pub const FLOAT_FREQ_Z: f32 = 0.7;
pub const REST_FLOAT_FACTOR: f32 = 0.35; // wobble attenuation once settled

// Wave travel
pub const WAVE_SPATIAL_FREQ: f32 = 0.8; // rad per world unit of x
pub const WAVE_PHASE_JITTER_MAX: f32 = 0.4; // per-particle phase spread (rad)
pub const WAVE_SECONDARY_AMP_RATIO: f32 = 0.35;
pub const WAVE_SECONDARY_FREQ_RATIO: f32 = 0.5;

// Derived visuals
pub const SPIN_RATE_BASE: f32 = 0.6; // rad/s
pub const SPIN_RATE_REPELLED_BONUS: f32 = 2.4;
pub const SCALE_PULSE_FREQ: f32 = 1.7; // rad/s
pub const SCALE_PULSE_AMP: f32 = 0.18;
pub const SCALE_PULSE_REPELLED_BOOST: f32 = 1.8;
pub const BASE_OPACITY: f32 = 0.9;
