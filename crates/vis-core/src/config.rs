//! Per-visual configuration: which sampler parameters, timeline stages, and
//! force parameters apply to each of the four shipped variants.

use glam::Vec2;

use crate::constants::*;
use crate::error::ConfigError;
use crate::shape::{
    CubeLatticeParams, Ellipse, GlyphRasterParams, Rect, RingGlyphParams, ScatterParams,
    ShapeDescriptor, WaveFieldParams,
};
use crate::store::InitParams;
use crate::timeline::{Phase, PhaseEnd, Timeline};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Falloff {
    Linear,
    Squared,
}

/// Radius-bounded force pushing particles away from the mapped pointer
/// position.
#[derive(Clone, Copy, Debug)]
pub struct Repulsion {
    pub radius: f32,
    pub strength: f32,
    pub falloff: Falloff,
    /// Below this distance an extra fixed push guarantees visible clearing
    /// directly under the pointer.
    pub core_radius: f32,
    pub core_push: f32,
}

/// Continuous rigid rotation applied to one phase's targets, so particles in
/// that phase chase a moving target rather than a static one.
#[derive(Clone, Copy, Debug)]
pub struct Spin {
    /// Timeline phase whose targets orbit.
    pub phase: usize,
    /// Angular velocity around Y (rad/s).
    pub rate_a: f32,
    /// Angular velocity around X (rad/s).
    pub rate_b: f32,
}

/// Per-variant force composition consumed by the integrator. Keeping the
/// magic numbers here keeps the integrator generic across variants.
#[derive(Clone, Copy, Debug)]
pub struct ForceProfile {
    pub repulsion: Option<Repulsion>,
    pub oscillation: bool,
    pub target_spin: Option<Spin>,
    /// Fade opacity toward zero as pointer distance approaches zero.
    pub fade_near_pointer: bool,
    pub smooth_tau: f32,
    pub smooth_tau_fast: f32,
    /// Global multiplier on the per-particle float amplitude.
    pub float_scale: f32,
}

impl Default for ForceProfile {
    fn default() -> Self {
        Self {
            repulsion: None,
            oscillation: false,
            target_spin: None,
            fade_near_pointer: false,
            smooth_tau: SMOOTH_TAU_SEC,
            smooth_tau_fast: SMOOTH_TAU_FAST_SEC,
            float_scale: 1.0,
        }
    }
}

/// Everything needed to mount one visual.
#[derive(Clone, Debug)]
pub struct VariantConfig {
    pub name: &'static str,
    /// One shape per timeline phase, in phase order.
    pub shapes: Vec<ShapeDescriptor>,
    pub timeline: Timeline,
    pub profile: ForceProfile,
    pub init: InitParams,
    pub particle_radius: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantKind {
    /// Coin-like emblem formed by the absence of particles.
    Emblem,
    /// Cube lattice that resolves into letterforms on demand.
    CubeLetters,
    /// Full-bleed travelling wave field.
    Soundwave,
    /// Slowly drifting node scatter.
    NodeGraph,
}

impl VariantKind {
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "emblem" => Ok(Self::Emblem),
            "cube-letters" | "cube_letters" => Ok(Self::CubeLetters),
            "soundwave" => Ok(Self::Soundwave),
            "node-graph" | "node_graph" => Ok(Self::NodeGraph),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }

    pub fn config(self) -> VariantConfig {
        match self {
            Self::Emblem => emblem(),
            Self::CubeLetters => cube_letters(),
            Self::Soundwave => soundwave(),
            Self::NodeGraph => node_graph(),
        }
    }
}

fn default_init() -> InitParams {
    InitParams {
        scatter_radius: 7.0,
        delay_max: START_DELAY_MAX_SEC,
        converge_speed: (CONVERGE_SPEED_MIN, CONVERGE_SPEED_MAX),
        float_amp: (FLOAT_AMP_MIN, FLOAT_AMP_MAX),
    }
}

/// Coin emblem: annulus plus an "R" monogram punched out of a dense field.
pub fn emblem() -> VariantConfig {
    VariantConfig {
        name: "emblem",
        shapes: vec![ShapeDescriptor::RingGlyph(RingGlyphParams {
            extent: 4.0,
            grid_step: 0.16,
            overlay_points: 1500,
            r_inner: 1.6,
            r_outer: 2.4,
            rects: vec![
                // monogram stem
                Rect {
                    min: Vec2::new(-0.9, -1.1),
                    max: Vec2::new(-0.45, 1.1),
                },
                // monogram leg
                Rect {
                    min: Vec2::new(0.25, -1.1),
                    max: Vec2::new(0.7, -0.1),
                },
            ],
            ellipses: [
                // monogram bowl
                Ellipse {
                    center: Vec2::new(-0.1, 0.55),
                    radii: Vec2::new(0.95, 0.55),
                },
                // bowl-to-leg joint
                Ellipse {
                    center: Vec2::new(0.25, -0.05),
                    radii: Vec2::new(0.55, 0.3),
                },
            ],
            jitter_amount: 0.05,
        })],
        timeline: Timeline::single(),
        profile: ForceProfile {
            repulsion: Some(Repulsion {
                radius: 1.4,
                strength: 1.1,
                falloff: Falloff::Linear,
                core_radius: 0.18,
                core_push: 0.5,
            }),
            ..ForceProfile::default()
        },
        init: default_init(),
        particle_radius: 0.045,
        color: [0.92, 0.78, 0.35, 1.0],
    }
}

/// Cube lattice that resolves into the wordmark when the interaction flag is
/// raised. Three staged targets: wide scatter, spinning cube, letterforms.
pub fn cube_letters() -> VariantConfig {
    VariantConfig {
        name: "cube-letters",
        shapes: vec![
            ShapeDescriptor::Scatter(ScatterParams {
                extent: Vec2::new(5.5, 3.2),
                depth: 2.0,
                interior_points: 1000,
                edge_points: 200,
                edge_band: 0.8,
            }),
            ShapeDescriptor::CubeLattice(CubeLatticeParams {
                half_size: 1.6,
                edge_resolution: 14,
            }),
            ShapeDescriptor::GlyphRaster(GlyphRasterParams {
                text: "NOVA".to_string(),
                cell: 0.22,
                letter_spacing: 1.5,
                baseline_y: -0.77,
                jitter_amount: 0.02,
            }),
        ],
        timeline: Timeline::new(vec![
            Phase {
                ends: PhaseEnd::At(2.2),
            },
            Phase {
                ends: PhaseEnd::OnInteraction,
            },
            Phase {
                ends: PhaseEnd::Never,
            },
        ])
        .expect("static timeline"),
        profile: ForceProfile {
            target_spin: Some(Spin {
                phase: 1,
                rate_a: 0.5,
                rate_b: 0.33,
            }),
            ..ForceProfile::default()
        },
        init: default_init(),
        particle_radius: 0.05,
        color: [0.55, 0.78, 1.0, 1.0],
    }
}

/// Full-bleed travelling wave field with a sharp repulsion void under the
/// pointer.
pub fn soundwave() -> VariantConfig {
    VariantConfig {
        name: "soundwave",
        shapes: vec![ShapeDescriptor::WaveField(WaveFieldParams {
            rows: 28,
            cols: 64,
            extent: Vec2::new(6.4, 3.4),
            jitter_amount: 0.06,
            amp_range: (0.08, 0.42),
            speed_range: (1.2, 3.2),
            scatter_points: 900,
            edge_points: 400,
            edge_band: 1.2,
        })],
        timeline: Timeline::single(),
        profile: ForceProfile {
            repulsion: Some(Repulsion {
                radius: 1.6,
                strength: 1.0,
                falloff: Falloff::Squared,
                core_radius: 0.2,
                core_push: 0.6,
            }),
            oscillation: true,
            fade_near_pointer: true,
            float_scale: 0.5,
            ..ForceProfile::default()
        },
        init: default_init(),
        particle_radius: 0.04,
        color: [0.45, 0.9, 0.8, 1.0],
    }
}

/// Sparse drifting nodes; no staged targets, the float wobble carries the
/// motion.
pub fn node_graph() -> VariantConfig {
    VariantConfig {
        name: "node-graph",
        shapes: vec![ShapeDescriptor::Scatter(ScatterParams {
            extent: Vec2::new(5.5, 3.2),
            depth: 1.5,
            interior_points: 140,
            edge_points: 80,
            edge_band: 0.8,
        })],
        timeline: Timeline::single(),
        profile: ForceProfile {
            float_scale: 1.6,
            ..ForceProfile::default()
        },
        init: InitParams {
            scatter_radius: 8.0,
            ..default_init()
        },
        particle_radius: 0.07,
        color: [0.8, 0.8, 0.95, 0.9],
    }
}
