//! Untextured fallback pass.
//!
//! No frame buffer: the sky and ground halves are two flat fills and every
//! wall column is a single flat-shaded vertical line, drawn straight onto
//! the presentation [`Surface`].  Cheaper than the textured path, and the
//! only mode that needs per-primitive draw calls.

use crate::{
    engine::{
        dda::{self, Side},
        projection, ray,
    },
    renderer::{Rect, Rgba, Surface},
    world::{Camera, Grid},
};

/// Sky fill, drawn over the top half of the viewport.
pub const CEILING_COLOR: Rgba = 0x00_87CEEB;
/// Ground fill, drawn over the bottom half.
pub const FLOOR_COLOR: Rgba = 0x00_228B22;
/// Wall slice color for hits on vertical grid lines.
pub const WALL_X_COLOR: Rgba = 0x00_C0C0C0;
/// Darker slice color for hits on horizontal grid lines.
pub const WALL_Y_COLOR: Rgba = 0x00_808080;

/// Flat-shaded column renderer.
#[derive(Default)]
pub struct Flat;

impl Flat {
    /// Draw one frame onto `surface`: environment halves first, then one
    /// vertical line per column.  Columns whose ray escapes the grid are
    /// left as background.
    pub fn draw_view<S: Surface>(
        &self,
        surface: &mut S,
        width: usize,
        height: usize,
        cam: &Camera,
        grid: &Grid,
    ) {
        surface.fill_rect(
            Rect {
                x: 0,
                y: 0,
                w: width,
                h: height / 2,
            },
            CEILING_COLOR,
        );
        surface.fill_rect(
            Rect {
                x: 0,
                y: height / 2,
                w: width,
                h: height - height / 2,
            },
            FLOOR_COLOR,
        );

        for col in 0..width {
            let dir = ray::column_ray(cam, col, width);
            let Some(hit) = dda::march(cam.pos, dir, grid) else {
                continue;
            };
            let dist = projection::perp_wall_dist(cam.pos, dir, &hit);
            let slice = projection::project_slice(dist, height);
            let color = match hit.side {
                Side::X => WALL_X_COLOR,
                Side::Y => WALL_Y_COLOR,
            };
            surface.draw_vertical_line(
                col,
                slice.draw_start as usize,
                slice.draw_end as usize,
                color,
            );
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
