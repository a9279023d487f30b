//! Perpendicular distance and wall-slice projection.

use glam::Vec2;

use crate::engine::dda::{RayHit, Side};

/// Lower bound substituted for a degenerate zero hit distance so it can be
/// used as a divisor.
const MIN_DIST: f32 = 1e-4;

/// Fisheye-corrected distance from `origin` to the wall face of `hit`.
///
/// Measured along the ray's component on the crossed axis rather than as
/// Euclidean length, so walls seen through edge columns do not bow outward.
/// The `(1 - step) / 2` term selects which face of the cell was entered.
pub fn perp_wall_dist(origin: Vec2, dir: Vec2, hit: &RayHit) -> f32 {
    let d = match hit.side {
        Side::X => (hit.cell.x as f32 - origin.x + (1 - hit.step.x) as f32 * 0.5) / dir.x,
        Side::Y => (hit.cell.y as f32 - origin.y + (1 - hit.step.y) as f32 * 0.5) / dir.y,
    };
    d.max(MIN_DIST)
}

/// Vertical pixel span one wall column occupies on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSlice {
    /// Unclamped slice height in pixels.
    pub height: i32,
    /// First wall row, clamped to the top of the viewport.
    pub draw_start: i32,
    /// Last wall row, clamped to the bottom of the viewport.
    pub draw_end: i32,
}

/// Project a perpendicular distance into screen rows for a viewport
/// `view_h` pixels tall.  Farther walls yield shorter slices.
pub fn project_slice(dist: f32, view_h: usize) -> WallSlice {
    let h = view_h as i32;
    let height = (view_h as f32 / dist) as i32;
    let draw_start = (h / 2 - height / 2).max(0);
    let draw_end = (h / 2 + height / 2).min(h - 1);
    WallSlice {
        height,
        draw_start,
        draw_end,
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{dda, ray};
    use crate::world::{Camera, Grid};

    fn ring3() -> Grid {
        Grid::new(3, 3, vec![1, 1, 1, 1, 0, 1, 1, 1, 1])
    }

    #[test]
    fn perpendicular_equals_euclidean_for_the_facing_ray() {
        // camera facing straight +x, central ray: no fisheye to correct
        let origin = Vec2::new(1.25, 1.5);
        let dir = Vec2::X;
        let hit = dda::march(origin, dir, &ring3()).unwrap();
        let dist = perp_wall_dist(origin, dir, &hit);
        let euclid = (Vec2::new(2.0, 1.5) - origin).length();
        assert!((dist - euclid).abs() < 1e-6);
    }

    #[test]
    fn slice_bounds_stay_inside_the_viewport() {
        for &view_h in &[1usize, 2, 63, 480, 800] {
            for &dist in &[0.0f32, 1e-6, 0.01, 0.5, 1.0, 7.3, 1e6] {
                let slice = project_slice(dist.max(MIN_DIST), view_h);
                assert!(slice.draw_start <= slice.draw_end);
                assert!(slice.draw_start >= 0);
                assert!((slice.draw_end as usize) < view_h);
            }
        }
    }

    #[test]
    fn zero_distance_is_clamped_positive() {
        let origin = Vec2::new(1.5, 1.5);
        let dir = Vec2::X;
        let mut hit = dda::march(origin, dir, &ring3()).unwrap();
        // force a hit face through the origin
        hit.cell.x = 1;
        hit.step.x = 1;
        let dist = perp_wall_dist(Vec2::new(1.0, 1.5), dir, &hit);
        assert!(dist > 0.0);
    }

    #[test]
    fn symmetric_box_reports_uniform_distance() {
        // 3×3 ring, camera dead centre facing +x: every column's ray stays
        // within the front cell's face, so the corrected distance is 0.5
        // across the whole screen.
        let grid = ring3();
        let cam = Camera::new(
            Vec2::new(1.5, 1.5),
            Vec2::X,
            2.0 * 0.66f32.atan(), // |plane| = 0.66
        );
        for col in 0..64 {
            let dir = ray::column_ray(&cam, col, 64);
            let hit = dda::march(cam.pos, dir, &grid).unwrap();
            let dist = perp_wall_dist(cam.pos, dir, &hit);
            assert!(
                (dist - 0.5).abs() < 1e-5,
                "column {col}: dist {dist} != 0.5"
            );
        }
    }
}
