use thiserror::Error;

/// Initialization failures. None of these are recoverable at runtime; a
/// variant that trips one renders nothing and the caller is expected to
/// surface the message loudly.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shape for phase {phase} produced an empty point cloud")]
    EmptyCloud { phase: usize },

    #[error("variant declares no timeline phases")]
    EmptyTimeline,

    #[error("variant declares {shapes} shape(s) but its timeline has {phases} phase(s)")]
    PhaseMismatch { shapes: usize, phases: usize },

    #[error("invalid shape parameter: {0}")]
    InvalidDescriptor(&'static str),

    #[error("no glyph authored for {0:?}")]
    UnknownGlyph(char),

    #[error("unknown variant name: {0}")]
    UnknownVariant(String),
}
