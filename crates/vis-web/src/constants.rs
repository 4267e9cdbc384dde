// Render tuning for the web frontend.

// Clamp dt after tab-switch stalls so particles never teleport.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

pub const CLEAR_COLOR: [f64; 4] = [0.015, 0.02, 0.045, 1.0];

// rgb = color, a = intensity
pub const AMBIENT: [f32; 4] = [0.55, 0.6, 0.8, 0.22];
// xyz = position, w = intensity
pub const LIGHT0: [f32; 4] = [6.0, 7.0, 8.0, 0.9];
pub const LIGHT1: [f32; 4] = [-7.0, -4.0, 6.0, 0.55];
