// Integration-step tests driven without any display loop.

use glam::{Vec2, Vec3};
use vis_core::config::{Falloff, ForceProfile, Repulsion};
use vis_core::constants::BASE_OPACITY;
use vis_core::integrate::{self, ease_out_cubic, oscillation_offset, repulsion_push, FrameContext};
use vis_core::shape::{Jitter, SampleOutput, ShapeDescriptor, WaveFieldParams};
use vis_core::store::{InitParams, ParticleStore};
use vis_core::timeline::{Phase, PhaseEnd, Timeline};

const DT: f32 = 1.0 / 60.0;

/// Forces stripped down to pure convergence: no float, snappy smoothing.
fn still_profile() -> ForceProfile {
    ForceProfile {
        float_scale: 0.0,
        smooth_tau: 0.05,
        smooth_tau_fast: 0.02,
        ..ForceProfile::default()
    }
}

fn exact_init() -> InitParams {
    InitParams {
        scatter_radius: 0.0,
        delay_max: 0.0,
        converge_speed: (1.0, 1.0),
        float_amp: (0.0, 0.0),
    }
}

fn cloud(points: Vec<Vec3>) -> SampleOutput {
    SampleOutput {
        points,
        waves: vec![],
    }
}

fn run(
    store: &mut ParticleStore,
    timeline: &Timeline,
    profile: &ForceProfile,
    elapsed: &mut f32,
    frames: usize,
    pointer: Option<Vec2>,
    interaction: bool,
) {
    for _ in 0..frames {
        *elapsed += DT;
        let ctx = FrameContext {
            elapsed: *elapsed,
            dt: DT,
            pointer_world: pointer,
            interaction,
        };
        integrate::advance(store, timeline, profile, &ctx);
    }
}

#[test]
fn ease_out_cubic_is_clamped_and_monotonic() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_out_cubic(i as f32 / 100.0);
        assert!(v >= prev, "easing must be monotonic");
        prev = v;
    }
}

#[test]
fn particles_hold_still_before_their_start_delay() {
    let clouds = [cloud((0..40).map(|i| Vec3::new(i as f32, 1.0, 0.0)).collect())];
    let mut init = exact_init();
    init.scatter_radius = 4.0;
    init.delay_max = 2.0;
    let mut store = ParticleStore::initialize(&clouds, &init, Some(11)).unwrap();
    let timeline = Timeline::single();
    let profile = still_profile();

    let max_delay = store
        .particles()
        .iter()
        .map(|p| p.delay)
        .fold(0.0f32, f32::max);
    assert!(max_delay > 0.0);

    let homes: Vec<Vec3> = store.particles().iter().map(|p| p.home).collect();
    let elapsed = max_delay * 0.5;
    let ctx = FrameContext {
        elapsed,
        dt: DT,
        pointer_world: None,
        interaction: false,
    };
    integrate::advance(&mut store, &timeline, &profile, &ctx);

    let mut gated = 0;
    for (p, home) in store.particles().iter().zip(&homes) {
        if elapsed < p.delay {
            gated += 1;
            assert_eq!(
                p.position, *home,
                "a particle still inside its delay must not move"
            );
        }
    }
    assert!(gated > 0, "the half-delay frame must gate someone");
}

#[test]
fn convergence_strictly_decreases_distance_to_the_target() {
    let target = Vec3::new(1.5, -0.5, 2.0);
    let mut store = ParticleStore::initialize(&[cloud(vec![target])], &exact_init(), Some(1)).unwrap();
    let timeline = Timeline::single();
    let profile = still_profile();

    let mut elapsed = 0.0;
    let mut prev = store.particles()[0].position.distance(target);
    for _ in 0..600 {
        run(&mut store, &timeline, &profile, &mut elapsed, 1, None, false);
        let dist = store.particles()[0].position.distance(target);
        if prev > 1e-4 {
            assert!(
                dist < prev,
                "distance must strictly decrease while converging (was {prev}, now {dist})"
            );
        }
        prev = dist;
    }
    assert!(prev < 1e-3, "converged within epsilon, got {prev}");
}

#[test]
fn single_particle_reaches_the_unit_target() {
    // Target (1,0,0), convergence speed 1.0, starting at the origin.
    let target = Vec3::new(1.0, 0.0, 0.0);
    let mut store = ParticleStore::initialize(&[cloud(vec![target])], &exact_init(), Some(1)).unwrap();
    assert_eq!(store.particles()[0].home, Vec3::ZERO);

    let timeline = Timeline::single();
    let profile = still_profile();
    let mut elapsed = 0.0;
    run(&mut store, &timeline, &profile, &mut elapsed, 300, None, false);

    let pos = store.particles()[0].position;
    assert!(
        pos.distance(target) < 1e-3,
        "ease-out-cubic progress saturated long ago, got {pos:?}"
    );
}

#[test]
fn repulsion_magnitude_is_zero_outside_and_decreasing_inside() {
    for falloff in [Falloff::Linear, Falloff::Squared] {
        let rep = Repulsion {
            radius: 2.0,
            strength: 1.0,
            falloff,
            core_radius: 0.2,
            core_push: 0.5,
        };
        assert_eq!(repulsion_push(2.0, &rep), 0.0);
        assert_eq!(repulsion_push(5.0, &rep), 0.0);
        assert_eq!(repulsion_push(0.0, &rep), 0.0, "no direction at zero distance");

        let mut prev = f32::INFINITY;
        for i in 1..40 {
            let d = 2.0 * i as f32 / 40.0;
            let push = repulsion_push(d, &rep);
            assert!(push > 0.0);
            assert!(
                push < prev,
                "push must strictly decrease as distance grows ({falloff:?})"
            );
            prev = push;
        }
    }
}

#[test]
fn particles_outside_the_radius_feel_no_repulsion() {
    let target = Vec3::new(3.0, 0.0, 0.0);
    let mut store = ParticleStore::initialize(&[cloud(vec![target])], &exact_init(), Some(1)).unwrap();
    let timeline = Timeline::single();
    let profile = ForceProfile {
        repulsion: Some(Repulsion {
            radius: 1.0,
            strength: 1.0,
            falloff: Falloff::Linear,
            core_radius: 0.1,
            core_push: 0.3,
        }),
        ..still_profile()
    };

    // Pointer three units away from the target the whole time: convergence
    // must land exactly on the target, with no repulsion offset.
    let mut elapsed = 0.0;
    run(
        &mut store,
        &timeline,
        &profile,
        &mut elapsed,
        600,
        Some(Vec2::ZERO),
        false,
    );
    let settled = store.particles()[0].position;
    assert!(settled.distance(target) < 1e-3, "got {settled:?}");

    // Move the pointer inside the radius; the particle must clear away from
    // it along +x.
    run(
        &mut store,
        &timeline,
        &profile,
        &mut elapsed,
        60,
        Some(Vec2::new(2.5, 0.0)),
        false,
    );
    let pushed = store.particles()[0].position;
    assert!(
        pushed.x > target.x + 0.05,
        "expected an away-from-pointer displacement, got {pushed:?}"
    );
}

#[test]
fn pointer_sitting_exactly_on_a_particle_is_skipped() {
    let target = Vec3::ZERO;
    let mut store = ParticleStore::initialize(&[cloud(vec![target])], &exact_init(), Some(1)).unwrap();
    let timeline = Timeline::single();
    let profile = ForceProfile {
        repulsion: Some(Repulsion {
            radius: 1.0,
            strength: 1.0,
            falloff: Falloff::Squared,
            core_radius: 0.2,
            core_push: 0.6,
        }),
        fade_near_pointer: true,
        ..still_profile()
    };

    let mut elapsed = 0.0;
    run(&mut store, &timeline, &profile, &mut elapsed, 600, None, false);

    // Zero planar distance: no repulsion direction, no fade this frame.
    run(
        &mut store,
        &timeline,
        &profile,
        &mut elapsed,
        1,
        Some(Vec2::ZERO),
        false,
    );
    let p = &store.particles()[0];
    assert!(p.position.distance(target) < 1e-3);
    assert_eq!(p.opacity, BASE_OPACITY);
}

#[test]
fn opacity_fades_with_pointer_distance_on_fading_profiles() {
    let target = Vec3::new(0.5, 0.0, 0.0);
    let mut store = ParticleStore::initialize(&[cloud(vec![target])], &exact_init(), Some(1)).unwrap();
    let timeline = Timeline::single();
    let profile = ForceProfile {
        repulsion: Some(Repulsion {
            radius: 2.0,
            strength: 0.0,
            falloff: Falloff::Squared,
            core_radius: 0.0,
            core_push: 0.0,
        }),
        fade_near_pointer: true,
        ..still_profile()
    };

    let mut elapsed = 0.0;
    run(&mut store, &timeline, &profile, &mut elapsed, 600, None, false);
    run(
        &mut store,
        &timeline,
        &profile,
        &mut elapsed,
        1,
        Some(Vec2::ZERO),
        false,
    );
    let near = store.particles()[0].opacity;
    assert!(
        near > 0.0 && near < BASE_OPACITY,
        "opacity fades toward zero near the pointer, got {near}"
    );

    run(
        &mut store,
        &timeline,
        &profile,
        &mut elapsed,
        1,
        Some(Vec2::new(50.0, 0.0)),
        false,
    );
    assert_eq!(store.particles()[0].opacity, BASE_OPACITY);
}

#[test]
fn interaction_flag_switches_targets_without_touching_seeds() {
    let formed: Vec<Vec3> = (0..16).map(|_| Vec3::new(-2.0, 0.0, 0.0)).collect();
    let resolved: Vec<Vec3> = (0..16).map(|_| Vec3::new(2.0, 0.0, 0.0)).collect();
    let clouds = [cloud(formed), cloud(resolved.clone())];
    let mut store = ParticleStore::initialize(&clouds, &exact_init(), Some(5)).unwrap();
    let timeline = Timeline::new(vec![
        Phase {
            ends: PhaseEnd::OnInteraction,
        },
        Phase {
            ends: PhaseEnd::Never,
        },
    ])
    .unwrap();
    let profile = still_profile();

    let mut elapsed = 0.0;
    run(&mut store, &timeline, &profile, &mut elapsed, 600, None, false);

    let seeds_before: Vec<_> = store
        .particles()
        .iter()
        .map(|p| (p.seed, p.delay))
        .collect();
    let dist_before: Vec<f32> = store
        .particles()
        .iter()
        .enumerate()
        .map(|(i, p)| p.position.distance(resolved[i]))
        .collect();

    // One frame with the flag raised: every particle's selected target
    // flips to the resolved shape.
    run(&mut store, &timeline, &profile, &mut elapsed, 1, None, true);

    for (i, p) in store.particles().iter().enumerate() {
        assert!(
            p.position.distance(resolved[i]) < dist_before[i],
            "particle {i} must move toward the resolved target within one frame"
        );
        assert_eq!((p.seed, p.delay), seeds_before[i], "seeds are immutable");
    }
}

#[test]
fn wave_field_end_to_end_converges_and_follows_the_wave() {
    // 10x10 field, jitter disabled: exactly 100 grid points, no
    // supplemental scatter.
    let descriptor = ShapeDescriptor::WaveField(WaveFieldParams {
        rows: 10,
        cols: 10,
        extent: Vec2::new(2.0, 2.0),
        jitter_amount: 0.05,
        amp_range: (0.05, 0.15),
        speed_range: (0.6, 1.0),
        scatter_points: 500,
        edge_points: 200,
        edge_band: 1.0,
    });
    let field = descriptor.sample(Jitter::Disabled).unwrap();
    assert_eq!(field.points.len(), 100);

    let mut init = exact_init();
    init.scatter_radius = 3.0;
    let mut store = ParticleStore::initialize(&[field], &init, Some(42)).unwrap();
    let timeline = Timeline::single();
    let profile = ForceProfile {
        repulsion: Some(Repulsion {
            radius: 1.0,
            strength: 1.0,
            falloff: Falloff::Squared,
            core_radius: 0.1,
            core_push: 0.4,
        }),
        oscillation: true,
        fade_near_pointer: true,
        ..still_profile()
    };

    // Pointer parked far outside the field for 300 simulated frames.
    let far = Some(Vec2::new(100.0, 100.0));
    let mut elapsed = 0.0;
    run(&mut store, &timeline, &profile, &mut elapsed, 300, far, false);

    for p in store.particles() {
        let target = p.targets[0];
        let expected =
            target + Vec3::Y * oscillation_offset(elapsed, target.x, &p.wave, p.seed.wave_phase);
        let err = p.position.distance(expected);
        assert!(
            err < 0.05,
            "particle must sit on its grid point plus wave offset, err {err}"
        );
        assert_eq!(p.opacity, BASE_OPACITY, "an unrepelled particle never fades");
    }
}

#[test]
fn spun_targets_orbit_while_the_phase_is_active() {
    use vis_core::config::Spin;
    let target = Vec3::new(1.0, 0.0, 0.0);
    let mut store = ParticleStore::initialize(&[cloud(vec![target])], &exact_init(), Some(1)).unwrap();
    let timeline = Timeline::single();
    let profile = ForceProfile {
        target_spin: Some(Spin {
            phase: 0,
            rate_a: 1.0,
            rate_b: 0.0,
        }),
        ..still_profile()
    };

    let mut elapsed = 0.0;
    run(&mut store, &timeline, &profile, &mut elapsed, 600, None, false);
    let p = store.particles()[0].position;
    // The chased target stays on the unit circle but is long past (1,0,0).
    assert!(
        (p.length() - 1.0).abs() < 0.05,
        "particle tracks the orbiting target's radius, got {p:?}"
    );
    assert!(
        p.distance(target) > 0.1,
        "the target itself must have moved on, got {p:?}"
    );
}
