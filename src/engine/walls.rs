//! Wall texture sampling coordinates: where on the wall face the ray
//! landed, and which texel each screen row maps to.

use glam::Vec2;

use crate::engine::dda::Side;
use crate::engine::projection::WallSlice;

/// Fractional position in `[0, 1)` along the wall face where the ray hit.
///
/// Uses the axis the ray did *not* cross; the integer part is discarded.
pub fn wall_x(origin: Vec2, dir: Vec2, dist: f32, side: Side) -> f32 {
    let w = match side {
        Side::X => origin.y + dist * dir.y,
        Side::Y => origin.x + dist * dir.x,
    };
    w - w.floor()
}

/// Reflect a texture column across the face.  Involutive.
#[inline]
pub fn mirror(x: i32, tex_size: usize) -> i32 {
    tex_size as i32 - x - 1
}

/// Whether the texture runs right-to-left as seen from the hit side, so
/// orientation stays consistent when a face is approached from either
/// direction.
#[inline]
fn runs_mirrored(dir: Vec2, side: Side) -> bool {
    match side {
        Side::X => dir.x > 0.0,
        Side::Y => dir.y < 0.0,
    }
}

/// Texture column for a hit at `wall_x`, or `None` when the coordinate
/// falls outside `[0, tex_size)` — the boundary itself is rejected, never
/// wrapped.
pub fn tex_column(wall_x: f32, dir: Vec2, side: Side, tex_size: usize) -> Option<i32> {
    let x = (wall_x * tex_size as f32) as i32;
    if x < 0 || x >= tex_size as i32 {
        return None;
    }
    Some(if runs_mirrored(dir, side) {
        mirror(x, tex_size)
    } else {
        x
    })
}

/// Texture row for screen row `y` of a wall slice.
///
/// Recentres `y` about the slice midpoint, scales by texture/slice height in
/// doubled fixed-point, then halves with a right shift.  Rows that land
/// outside the texture are `None` and get skipped.
pub fn tex_row(y: i32, view_h: i32, slice: &WallSlice, tex_size: usize) -> Option<i32> {
    let numer = (2 * y - view_h + slice.height) as i64 * tex_size as i64;
    let t = ((numer / slice.height.max(1) as i64) >> 1) as i32;
    if t < 0 || t >= tex_size as i32 {
        return None;
    }
    Some(t)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
