//! Maps normalized viewport pointer coordinates into the simulation's world
//! space for the active camera.

use glam::Vec2;

use crate::state::Camera;

/// Fixed linear uv-to-world scale for the camera's z = 0 plane.
///
/// The scale depends only on camera parameters, so it is computed once here
/// and reused every frame until the camera changes; the per-frame mapping is
/// two multiplies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMapper {
    half: Vec2,
}

impl PointerMapper {
    pub fn new(camera: &Camera) -> Self {
        let dist = (camera.eye - camera.target).length();
        let half_h = (camera.fovy_radians * 0.5).tan() * dist;
        Self {
            half: Vec2::new(half_h * camera.aspect, half_h),
        }
    }

    /// `uv` has its origin at the viewport's top-left corner, so y flips.
    pub fn map(&self, uv: Vec2) -> Vec2 {
        Vec2::new(
            (uv.x * 2.0 - 1.0) * self.half.x,
            (1.0 - uv.y * 2.0) * self.half.y,
        )
    }

    /// World half-extents of the pointer plane.
    pub fn half_extents(&self) -> Vec2 {
        self.half
    }
}
