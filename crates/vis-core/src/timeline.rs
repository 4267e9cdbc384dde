//! Globally shared sequence of time- or interaction-gated stages.
//!
//! Boundaries apply to all particles; each particle's *effective* phase time
//! is offset by its own start delay before selection.

use crate::error::ConfigError;

/// How a phase hands over to its successor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhaseEnd {
    /// Ends at a fixed elapsed time (seconds since the particle's delay
    /// expired).
    At(f32),
    /// Ends when the external interaction flag is set, independent of time.
    OnInteraction,
    /// Terminal phase.
    Never,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    pub ends: PhaseEnd,
}

/// Active phase for one particle this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseCursor {
    pub index: usize,
    /// Seconds since this phase began for the particle in question.
    pub phase_t: f32,
    /// True when the cursor crossed an interaction gate, i.e. the particle
    /// is mid "transform on demand".
    pub via_interaction: bool,
}

#[derive(Clone, Debug)]
pub struct Timeline {
    phases: Vec<Phase>,
}

impl Timeline {
    pub fn new(phases: Vec<Phase>) -> Result<Self, ConfigError> {
        if phases.is_empty() {
            return Err(ConfigError::EmptyTimeline);
        }
        Ok(Self { phases })
    }

    /// Single open-ended phase: converge once, then rest.
    pub fn single() -> Self {
        Self {
            phases: vec![Phase { ends: PhaseEnd::Never }],
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Select the active phase for a particle whose delay-adjusted elapsed
    /// time is `local_t`.
    pub fn select(&self, local_t: f32, interaction: bool) -> PhaseCursor {
        let mut start = 0.0f32;
        let mut via_interaction = false;
        let last = self.phases.len() - 1;
        for (i, phase) in self.phases.iter().enumerate() {
            if i == last {
                break;
            }
            match phase.ends {
                PhaseEnd::At(t_end) => {
                    if local_t < t_end {
                        return PhaseCursor {
                            index: i,
                            phase_t: (local_t - start).max(0.0),
                            via_interaction,
                        };
                    }
                    start = t_end;
                }
                PhaseEnd::OnInteraction => {
                    if !interaction {
                        return PhaseCursor {
                            index: i,
                            phase_t: (local_t - start).max(0.0),
                            via_interaction,
                        };
                    }
                    // The gated handover has no boundary of its own; the
                    // successor inherits the gate's start time.
                    via_interaction = true;
                }
                PhaseEnd::Never => {
                    return PhaseCursor {
                        index: i,
                        phase_t: (local_t - start).max(0.0),
                        via_interaction,
                    };
                }
            }
        }
        PhaseCursor {
            index: last,
            phase_t: (local_t - start).max(0.0),
            via_interaction,
        }
    }
}
