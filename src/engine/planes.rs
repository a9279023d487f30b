//! Environment (floor/ceiling) casting: back-project screen rows below the
//! wall slice onto the ground plane, mirroring each one onto the sky plane.

use glam::Vec2;

use crate::engine::dda::{RayHit, Side};

/// World point where the ray exited the wall face onto the ground plane.
///
/// Which corner formula applies depends on the crossed side and the ray's
/// sign on that axis.
pub fn env_pixel_pos(hit: &RayHit, dir: Vec2, wall_x: f32) -> Vec2 {
    let c = hit.cell.as_vec2();
    match hit.side {
        Side::X if dir.x > 0.0 => Vec2::new(c.x, c.y + wall_x),
        Side::X => Vec2::new(c.x + 1.0, c.y + wall_x),
        Side::Y if dir.y > 0.0 => Vec2::new(c.x + wall_x, c.y),
        Side::Y => Vec2::new(c.x + wall_x, c.y + 1.0),
    }
}

/// Ground-plane distance seen at screen row `y`.
///
/// Only meaningful below the horizon (`2y > view_h`), which is where the
/// caster iterates.
#[inline]
pub fn row_distance(y: i32, view_h: i32) -> f32 {
    view_h as f32 / (2 * y - view_h) as f32
}

/// Blend between the camera position and the wall-exit point.
///
/// One evaluation serves both the floor row and its mirrored ceiling row.
#[inline]
pub fn env_point(origin: Vec2, env_pos: Vec2, weight: f32) -> Vec2 {
    env_pos * weight + origin * (1.0 - weight)
}

/// Texel coordinates for a ground/sky world point, `None` when the wrapped
/// coordinate falls outside the texture.
pub fn env_texel(p: Vec2, tex_size: usize) -> Option<(i32, i32)> {
    let n = tex_size as i32;
    let tx = (p.x * tex_size as f32) as i32 % n;
    let ty = (p.y * tex_size as f32) as i32 % n;
    if tx < 0 || tx >= n || ty < 0 || ty >= n {
        return None;
    }
    Some((tx, ty))
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn hit(cell: (i32, i32), side: Side) -> RayHit {
        RayHit {
            cell: IVec2::new(cell.0, cell.1),
            side,
            step: IVec2::ONE,
            side_dist: Vec2::ZERO,
        }
    }

    #[test]
    fn exit_point_picks_the_entered_face() {
        let w = 0.25;
        // x-side approached from the west: west face of the cell
        let p = env_pixel_pos(&hit((4, 2), Side::X), Vec2::new(1.0, 0.1), w);
        assert_eq!(p, Vec2::new(4.0, 2.25));
        // x-side approached from the east: east face
        let p = env_pixel_pos(&hit((4, 2), Side::X), Vec2::new(-1.0, 0.1), w);
        assert_eq!(p, Vec2::new(5.0, 2.25));
        // y-side approached from the north: north face
        let p = env_pixel_pos(&hit((4, 2), Side::Y), Vec2::new(0.1, 1.0), w);
        assert_eq!(p, Vec2::new(4.25, 2.0));
        // y-side approached from the south: south face
        let p = env_pixel_pos(&hit((4, 2), Side::Y), Vec2::new(0.1, -1.0), w);
        assert_eq!(p, Vec2::new(4.25, 3.0));
    }

    #[test]
    fn row_distance_shrinks_toward_the_bottom() {
        let h = 480;
        let mut last = f32::INFINITY;
        for y in (h / 2 + 1)..h {
            let d = row_distance(y, h);
            assert!(d > 0.0 && d < last);
            last = d;
        }
        // bottom row looks at the ground right at the camera's feet
        assert!((row_distance(h - 1, h) - 1.0).abs() < 0.01);
    }

    #[test]
    fn weight_interpolates_between_camera_and_wall() {
        let origin = Vec2::new(1.0, 1.0);
        let wall = Vec2::new(5.0, 3.0);
        assert_eq!(env_point(origin, wall, 1.0), wall);
        assert_eq!(env_point(origin, wall, 0.0), origin);
        let mid = env_point(origin, wall, 0.5);
        assert!((mid - Vec2::new(3.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn texel_wraps_by_cell_and_rejects_negatives() {
        assert_eq!(env_texel(Vec2::new(2.25, 3.5), 64), Some((16, 32)));
        // integer truncation of a negative coordinate is rejected, not wrapped
        assert_eq!(env_texel(Vec2::new(-0.25, 0.5), 64), None);
    }
}
