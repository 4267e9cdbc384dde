//! Flat, preallocated per-particle state.
//!
//! The store is built once when a variant mounts and torn down with it;
//! afterwards it is mutation-only. Particles never leave the store: the
//! integrator borrows the slice mutably once per frame and the render
//! adapter reads it immediately after.

use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::shape::{SampleOutput, WaveMotion};

/// Stream-splitting mix so each particle draws from an independent RNG
/// stream derived from one base seed.
const SEED_STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Per-particle random parameters fixed at creation and never recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSeed {
    /// Progress rate multiplier for convergence easing (1/s).
    pub converge_speed: f32,
    /// Phase offset into the travelling wave (rad).
    pub wave_phase: f32,
    /// Phase offset for the idle float wobble (rad).
    pub float_phase: f32,
    /// Amplitude of the idle float wobble (world units).
    pub float_amp: f32,
    /// Phase offset for the scale pulse (rad).
    pub scale_phase: f32,
}

#[derive(Clone, Debug)]
pub struct Particle {
    /// Current position, mutated every frame.
    pub position: Vec3,
    /// Initial scatter position; easing always starts here.
    pub home: Vec3,
    /// One target per timeline phase, assigned by cloud index.
    pub targets: SmallVec<[Vec3; 2]>,
    /// Oscillation parameters carried over from the wave-field sampler.
    pub wave: WaveMotion,
    /// Seconds before this particle starts animating.
    pub delay: f32,
    pub seed: MotionSeed,

    // Derived each frame from time and pointer distance; read by the render
    // adapter, never authoritative.
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Randomization ranges applied at initialization.
#[derive(Clone, Copy, Debug)]
pub struct InitParams {
    /// Radius of the initial scatter ball around the origin.
    pub scatter_radius: f32,
    /// Per-particle start delays are drawn from `[0, delay_max]`.
    pub delay_max: f32,
    pub converge_speed: (f32, f32),
    pub float_amp: (f32, f32),
}

pub struct ParticleStore {
    particles: Vec<Particle>,
    targets_per_particle: usize,
}

impl ParticleStore {
    /// Allocate particle state for the given phase clouds. The particle
    /// count is the largest cloud's length; shorter clouds wrap by modulo so
    /// every particle has a target in every phase. A cloud with zero points
    /// is a configuration error, not something to render silently.
    pub fn initialize(
        clouds: &[SampleOutput],
        params: &InitParams,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if clouds.is_empty() {
            return Err(ConfigError::EmptyTimeline);
        }
        for (phase, cloud) in clouds.iter().enumerate() {
            if cloud.points.is_empty() {
                return Err(ConfigError::EmptyCloud { phase });
            }
        }
        let count = clouds.iter().map(|c| c.points.len()).max().unwrap_or(0);
        let base_seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            let mut rng =
                StdRng::seed_from_u64(base_seed ^ (i as u64).wrapping_mul(SEED_STREAM_MIX));
            let targets: SmallVec<[Vec3; 2]> = clouds
                .iter()
                .map(|c| c.points[i % c.points.len()])
                .collect();
            // Wave parameters come from the last phase that has them.
            let wave = clouds
                .iter()
                .rev()
                .find(|c| !c.waves.is_empty())
                .map(|c| c.waves[i % c.waves.len()])
                .unwrap_or_default();
            let home = scatter_point(&mut rng, params.scatter_radius);
            particles.push(Particle {
                position: home,
                home,
                targets,
                wave,
                delay: rng.gen_range(0.0..=params.delay_max.max(0.0)),
                seed: MotionSeed {
                    converge_speed: rng
                        .gen_range(params.converge_speed.0..=params.converge_speed.1),
                    wave_phase: rng.gen_range(0.0..=crate::constants::WAVE_PHASE_JITTER_MAX),
                    float_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                    float_amp: rng.gen_range(params.float_amp.0..=params.float_amp.1),
                    scale_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                },
                rotation: 0.0,
                scale: 1.0,
                opacity: crate::constants::BASE_OPACITY,
            });
        }
        Ok(Self {
            particles,
            targets_per_particle: clouds.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn targets_per_particle(&self) -> usize {
        self.targets_per_particle
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

// Uniform point in a ball; rejection sampling is fine at init time.
fn scatter_point(rng: &mut StdRng, radius: f32) -> Vec3 {
    if radius <= 0.0 {
        return Vec3::ZERO;
    }
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..=1.0f32),
            rng.gen_range(-1.0..=1.0f32),
            rng.gen_range(-1.0..=1.0f32),
        );
        if v.length_squared() <= 1.0 {
            return v * radius;
        }
    }
}
