//! Simulation facade tying the sampler, store, timeline, and integrator
//! together behind one mutable object the frontends drive once per frame.

use glam::Vec2;

use crate::config::{ForceProfile, VariantConfig};
use crate::error::ConfigError;
use crate::integrate::{self, FrameContext};
use crate::pointer::PointerMapper;
use crate::shape::{Jitter, SampleOutput};
use crate::state::Camera;
use crate::store::{Particle, ParticleStore};
use crate::timeline::Timeline;

pub struct Simulation {
    store: ParticleStore,
    timeline: Timeline,
    profile: ForceProfile,
    mapper: PointerMapper,
    /// Last known pointer position in normalized viewport space. Written by
    /// the input layer between frames, snapshotted once per frame.
    pointer_uv: Option<Vec2>,
    interaction: bool,
    elapsed: f32,
}

impl Simulation {
    /// Sample every phase cloud and allocate the particle store. Rejects a
    /// configuration whose shape count disagrees with its timeline or whose
    /// clouds come up empty.
    pub fn new(
        config: &VariantConfig,
        jitter: Jitter,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if config.shapes.len() != config.timeline.len() {
            return Err(ConfigError::PhaseMismatch {
                shapes: config.shapes.len(),
                phases: config.timeline.len(),
            });
        }
        let clouds: Vec<SampleOutput> = config
            .shapes
            .iter()
            .map(|s| s.sample(jitter))
            .collect::<Result<_, _>>()?;
        let store = ParticleStore::initialize(&clouds, &config.init, seed)?;
        log::info!(
            "[sim] variant={} particles={} phases={}",
            config.name,
            store.len(),
            config.timeline.len()
        );
        Ok(Self {
            store,
            timeline: config.timeline.clone(),
            profile: config.profile,
            mapper: PointerMapper::new(&Camera::default_for_aspect(1.0)),
            pointer_uv: None,
            interaction: false,
            elapsed: 0.0,
        })
    }

    /// Rebuild the uv-to-world scale; call when the camera aspect or
    /// distance changes, not per frame.
    pub fn set_camera(&mut self, camera: &Camera) {
        self.mapper = PointerMapper::new(camera);
    }

    pub fn set_pointer_uv(&mut self, uv: Option<Vec2>) {
        self.pointer_uv = uv;
    }

    pub fn set_interaction(&mut self, on: bool) {
        self.interaction = on;
    }

    pub fn interaction(&self) -> bool {
        self.interaction
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn mapper(&self) -> &PointerMapper {
        &self.mapper
    }

    pub fn profile(&self) -> &ForceProfile {
        &self.profile
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.particles()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Advance the whole population by one frame. The pointer and elapsed
    /// time are snapshotted here; every particle in the frame sees the same
    /// values.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        let ctx = FrameContext {
            elapsed: self.elapsed,
            dt,
            pointer_world: self.pointer_uv.map(|uv| self.mapper.map(uv)),
            interaction: self.interaction,
        };
        integrate::advance(&mut self.store, &self.timeline, &self.profile, &ctx);
    }
}
