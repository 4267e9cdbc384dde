use glam::Vec2;
use vis_core::pointer::PointerMapper;
use vis_core::state::Camera;

#[test]
fn viewport_center_maps_to_the_world_origin() {
    let mapper = PointerMapper::new(&Camera::default_for_aspect(16.0 / 9.0));
    let w = mapper.map(Vec2::new(0.5, 0.5));
    assert!(w.length() < 1e-5, "got {w:?}");
}

#[test]
fn corners_map_to_the_plane_extents_with_y_flipped() {
    let mapper = PointerMapper::new(&Camera::default_for_aspect(2.0));
    let half = mapper.half_extents();

    let top_left = mapper.map(Vec2::new(0.0, 0.0));
    assert!((top_left.x + half.x).abs() < 1e-5);
    assert!((top_left.y - half.y).abs() < 1e-5, "viewport y grows down");

    let bottom_right = mapper.map(Vec2::new(1.0, 1.0));
    assert!((bottom_right.x - half.x).abs() < 1e-5);
    assert!((bottom_right.y + half.y).abs() < 1e-5);
}

#[test]
fn extents_follow_the_camera_frustum() {
    let camera = Camera::default_for_aspect(1.0);
    let mapper = PointerMapper::new(&camera);
    let dist = (camera.eye - camera.target).length();
    let expected = (camera.fovy_radians * 0.5).tan() * dist;
    let half = mapper.half_extents();
    assert!((half.y - expected).abs() < 1e-5);
    assert!((half.x - expected).abs() < 1e-5, "aspect 1: square plane");
}

#[test]
fn wider_aspect_scales_only_the_x_extent() {
    let narrow = PointerMapper::new(&Camera::default_for_aspect(1.0));
    let wide = PointerMapper::new(&Camera::default_for_aspect(2.0));
    assert!((wide.half_extents().y - narrow.half_extents().y).abs() < 1e-6);
    assert!((wide.half_extents().x - 2.0 * narrow.half_extents().x).abs() < 1e-5);
}

#[test]
fn mapper_is_a_pure_function_of_the_camera() {
    let camera = Camera::default_for_aspect(1.5);
    assert_eq!(PointerMapper::new(&camera), PointerMapper::new(&camera));
}
