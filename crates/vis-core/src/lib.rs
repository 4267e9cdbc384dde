pub mod config;
pub mod constants;
pub mod error;
pub mod glyphs;
pub mod integrate;
pub mod mesh;
pub mod pointer;
pub mod scheduler;
pub mod shape;
pub mod sim;
pub mod state;
pub mod store;
pub mod timeline;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use config::*;
pub use constants::*;
pub use error::ConfigError;
pub use integrate::FrameContext;
pub use pointer::PointerMapper;
pub use scheduler::{ManualScheduler, Scheduler};
pub use shape::{Jitter, SampleOutput, ShapeDescriptor, WaveMotion};
pub use sim::Simulation;
pub use state::Camera;
pub use store::{InitParams, MotionSeed, Particle, ParticleStore};
pub use timeline::{Phase, PhaseCursor, PhaseEnd, Timeline};
