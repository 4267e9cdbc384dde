use glam::Vec3;
use vis_core::error::ConfigError;
use vis_core::shape::{SampleOutput, WaveMotion};
use vis_core::store::{InitParams, ParticleStore};

fn cloud(points: Vec<Vec3>) -> SampleOutput {
    SampleOutput {
        points,
        waves: vec![],
    }
}

fn params() -> InitParams {
    InitParams {
        scatter_radius: 5.0,
        delay_max: 1.0,
        converge_speed: (0.5, 1.0),
        float_amp: (0.0, 0.05),
    }
}

#[test]
fn store_rejects_an_empty_cloud() {
    let clouds = [cloud(vec![Vec3::ONE]), cloud(vec![])];
    let err = ParticleStore::initialize(&clouds, &params(), Some(1));
    assert!(matches!(err, Err(ConfigError::EmptyCloud { phase: 1 })));
}

#[test]
fn store_rejects_zero_phases() {
    let err = ParticleStore::initialize(&[], &params(), Some(1));
    assert!(matches!(err, Err(ConfigError::EmptyTimeline)));
}

#[test]
fn particle_count_is_the_largest_cloud_with_modulo_wrap() {
    let small: Vec<Vec3> = (0..3).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
    let large: Vec<Vec3> = (0..7).map(|i| Vec3::new(0.0, i as f32, 0.0)).collect();
    let store =
        ParticleStore::initialize(&[cloud(small.clone()), cloud(large)], &params(), Some(1))
            .unwrap();
    assert_eq!(store.len(), 7);
    assert_eq!(store.targets_per_particle(), 2);
    for (i, p) in store.particles().iter().enumerate() {
        assert_eq!(
            p.targets[0],
            small[i % small.len()],
            "extra particles wrap onto the shorter cloud by index"
        );
        assert_eq!(p.targets[1], Vec3::new(0.0, i as f32, 0.0));
    }
}

#[test]
fn same_seed_reproduces_the_same_randomization() {
    let clouds = [cloud((0..20).map(|i| Vec3::splat(i as f32)).collect())];
    let a = ParticleStore::initialize(&clouds, &params(), Some(7)).unwrap();
    let b = ParticleStore::initialize(&clouds, &params(), Some(7)).unwrap();
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.home, pb.home);
        assert_eq!(pa.delay, pb.delay);
        assert_eq!(pa.seed, pb.seed);
    }
}

#[test]
fn scatter_radius_bounds_the_homes() {
    let clouds = [cloud((0..50).map(|i| Vec3::splat(i as f32)).collect())];
    let store = ParticleStore::initialize(&clouds, &params(), Some(3)).unwrap();
    for p in store.particles() {
        assert!(p.home.length() <= 5.0 + 1e-5);
        assert_eq!(p.position, p.home, "particles start at their scatter home");
    }
}

#[test]
fn zero_scatter_radius_starts_everything_at_the_origin() {
    let clouds = [cloud(vec![Vec3::new(1.0, 0.0, 0.0)])];
    let mut init = params();
    init.scatter_radius = 0.0;
    let store = ParticleStore::initialize(&clouds, &init, Some(1)).unwrap();
    assert_eq!(store.particles()[0].home, Vec3::ZERO);
}

#[test]
fn wave_parameters_carry_over_from_the_sampled_cloud() {
    let wave_cloud = SampleOutput {
        points: (0..4).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect(),
        waves: (0..4)
            .map(|i| WaveMotion {
                amplitude: 0.1 * (i + 1) as f32,
                speed: 1.0 + i as f32,
            })
            .collect(),
    };
    let store = ParticleStore::initialize(&[wave_cloud.clone()], &params(), Some(1)).unwrap();
    for (i, p) in store.particles().iter().enumerate() {
        assert_eq!(p.wave, wave_cloud.waves[i]);
    }
}
