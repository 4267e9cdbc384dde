//! The per-frame update rule, run once per display frame for every particle.
//!
//! All force terms are composed additively onto the particle's *target*
//! position; positional smoothing then moves the current position a fraction
//! of the remaining distance toward that composed target. Nothing in this
//! module allocates: a frame over thousands of particles is pure arithmetic
//! over the store slice.

use glam::{Quat, Vec2, Vec3};

use crate::config::{Falloff, ForceProfile, Repulsion};
use crate::constants::*;
use crate::shape::WaveMotion;
use crate::store::ParticleStore;
use crate::timeline::Timeline;

/// Immutable inputs for one frame. Built once per frame so every particle
/// sees the same elapsed-time and pointer snapshot.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext {
    /// Seconds since the variant mounted.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Pointer position mapped into the camera plane, if a pointer has been
    /// seen at all.
    pub pointer_world: Option<Vec2>,
    /// External flag gating the final phase of interaction-gated timelines.
    pub interaction: bool,
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Magnitude of the repulsion displacement at planar pointer distance
/// `dist`: zero at and beyond the radius, strictly decreasing in `dist`
/// inside it. The caller is responsible for the zero-distance case, which
/// has no direction to push along.
pub fn repulsion_push(dist: f32, rep: &Repulsion) -> f32 {
    if !(dist > 0.0) || dist >= rep.radius {
        return 0.0;
    }
    let fall = 1.0 - dist / rep.radius;
    let fall = match rep.falloff {
        Falloff::Linear => fall,
        Falloff::Squared => fall * fall,
    };
    let mut push = rep.strength * fall;
    if dist < rep.core_radius {
        push += rep.core_push;
    }
    push
}

/// Vertical displacement of a wave-field particle. The phase advances with
/// both time and the target's x coordinate, which reads as lateral wave
/// travel; a slower, smaller sinusoid is summed in on top.
pub fn oscillation_offset(elapsed: f32, x: f32, wave: &WaveMotion, phase: f32) -> f32 {
    let primary = (elapsed * wave.speed + x * WAVE_SPATIAL_FREQ + phase).sin() * wave.amplitude;
    let secondary = (elapsed * wave.speed * WAVE_SECONDARY_FREQ_RATIO
        + x * WAVE_SPATIAL_FREQ * WAVE_SECONDARY_FREQ_RATIO)
        .sin()
        * wave.amplitude
        * WAVE_SECONDARY_AMP_RATIO;
    primary + secondary
}

/// Advance every particle by one frame.
pub fn advance(
    store: &mut ParticleStore,
    timeline: &Timeline,
    profile: &ForceProfile,
    ctx: &FrameContext,
) {
    // The spun target's rotation is shared by all particles this frame.
    let spin_rotation = profile.target_spin.map(|s| {
        (
            s.phase,
            Quat::from_rotation_y(ctx.elapsed * s.rate_a)
                * Quat::from_rotation_x(ctx.elapsed * s.rate_b),
        )
    });

    for p in store.particles_mut() {
        // 1. Delay gate: hold at the scatter position until this particle's
        //    stagger window has passed.
        if ctx.elapsed < p.delay {
            continue;
        }
        let local_t = ctx.elapsed - p.delay;

        // 2. Phase-target selection against the shared timeline.
        let cur = timeline.select(local_t, ctx.interaction);
        let raw_target = p.targets[cur.index % p.targets.len()];

        // 3/4. Rigid spin of the phase target (the target itself orbits),
        //      then eased convergence from the particle's scatter position.
        let target = match spin_rotation {
            Some((phase, rot)) if phase == cur.index => rot * raw_target,
            _ => raw_target,
        };
        let progress = ease_out_cubic(cur.phase_t * p.seed.converge_speed);
        let mut desired = p.home.lerp(target, progress);

        // 5. Travelling wave displacement.
        if profile.oscillation {
            desired.y += oscillation_offset(ctx.elapsed, raw_target.x, &p.wave, p.seed.wave_phase);
        }

        // 6. Pointer repulsion in the camera plane. A pointer sitting
        //    exactly on the particle has no away direction; skip that frame.
        let mut repelled = false;
        let mut pointer_dist = f32::INFINITY;
        if let Some(ptr) = ctx.pointer_world {
            let delta = Vec2::new(p.position.x - ptr.x, p.position.y - ptr.y);
            let dist = delta.length();
            pointer_dist = dist;
            if let Some(rep) = &profile.repulsion {
                if dist > 0.0 && dist < rep.radius {
                    let away = delta / dist;
                    let push = repulsion_push(dist, rep);
                    desired.x += away.x * push;
                    desired.y += away.y * push;
                    repelled = true;
                }
            }
        }

        // 8. Secondary float, folded into the composed target and attenuated
        //    once the particle has settled, so the final pose never freezes.
        if profile.float_scale > 0.0 {
            let amp =
                p.seed.float_amp * profile.float_scale * lerp(1.0, REST_FLOAT_FACTOR, progress);
            let ph = p.seed.float_phase;
            desired += Vec3::new(
                (ctx.elapsed * FLOAT_FREQ_X + ph).sin(),
                (ctx.elapsed * FLOAT_FREQ_Y + ph * 1.7).sin(),
                (ctx.elapsed * FLOAT_FREQ_Z + ph * 2.3).sin(),
            ) * amp;
        }

        // 7. Exponential decay toward the composed target; snappier while
        //    repelled or mid-transform.
        let tau = if repelled || cur.via_interaction {
            profile.smooth_tau_fast
        } else {
            profile.smooth_tau
        };
        let alpha = 1.0 - (-ctx.dt / tau.max(1e-4)).exp();
        p.position += (desired - p.position) * alpha;

        // 9. Derived visuals: monotonic spin, pulsing scale, pointer fade.
        let spin_rate = SPIN_RATE_BASE
            + if repelled {
                SPIN_RATE_REPELLED_BONUS
            } else {
                0.0
            };
        p.rotation += ctx.dt * spin_rate;
        let pulse_amp = SCALE_PULSE_AMP
            * if repelled {
                SCALE_PULSE_REPELLED_BOOST
            } else {
                1.0
            };
        p.scale = 1.0 + pulse_amp * (ctx.elapsed * SCALE_PULSE_FREQ + p.seed.scale_phase).sin();
        p.opacity = BASE_OPACITY;
        if profile.fade_near_pointer {
            if let Some(rep) = &profile.repulsion {
                if pointer_dist > 0.0 && pointer_dist < rep.radius {
                    p.opacity = BASE_OPACITY * (pointer_dist / rep.radius);
                }
            }
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
