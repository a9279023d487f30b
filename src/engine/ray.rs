use glam::Vec2;

use crate::world::Camera;

/// Normalised screen coordinate of column `col`: `-1` at the left edge,
/// approaching `+1` at the right.
#[inline]
pub fn camera_x(col: usize, width: usize) -> f32 {
    2.0 * col as f32 / width as f32 - 1.0
}

/// Direction of the ray fired through screen column `col`.
///
/// Pure function of the camera snapshot; rays are never persisted.
#[inline]
pub fn column_ray(cam: &Camera, col: usize, width: usize) -> Vec2 {
    cam.dir() + cam.plane() * camera_x(col, width)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
