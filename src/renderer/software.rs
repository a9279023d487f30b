//! ---------------------------------------------------------------------------
//! Textured software render pass
//!
//! * One ray per screen column: march the grid, project the hit into a wall
//!   slice, sample the wall texture, then back-project the remaining rows
//!   onto the floor and ceiling.
//! * Fills an owned `Vec<u32>` frame-buffer in **0x00RRGGBB** format, loans
//!   it out once per frame and zero-fills it afterwards.
//! * Columns only ever write their own pixels, so processing order across
//!   columns is irrelevant to the output.
//! ---------------------------------------------------------------------------

use glam::Vec2;

use crate::{
    engine::{
        dda::{self, RayHit, Side},
        planes, projection, ray, walls,
    },
    renderer::{Renderer, Rgba},
    world::{Camera, Grid, TextureBank},
};

/// Floor/ceiling material assignment for the environment caster.
///
/// The pair is deliberately configurable instead of hard-coded: swapping the
/// two flips which texture is underfoot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvMaterials {
    pub floor: usize,
    pub ceiling: usize,
}

impl Default for EnvMaterials {
    fn default() -> Self {
        Self {
            floor: 4,
            ceiling: 5,
        }
    }
}

/// Column ray-caster drawing into an off-screen frame buffer.
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
    env: EnvMaterials,
}

impl Default for Software {
    fn default() -> Self {
        Self::new(EnvMaterials::default())
    }
}

impl Software {
    pub fn new(env: EnvMaterials) -> Self {
        Self {
            scratch: Vec::new(),
            width: 0,
            height: 0,
            env,
        }
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed; the buffer is already zeroed
        // from the previous end_frame otherwise
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.clear();
            self.scratch.resize(w * h, 0);
        }
    }

    fn draw_view(&mut self, cam: &Camera, grid: &Grid, bank: &TextureBank) {
        for col in 0..self.width {
            self.cast_column(col, cam, grid, bank);
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
        self.scratch.fill(0);
    }
}

/*──────────────────────── column rendering ───────────────────────────*/

impl Software {
    /// Trace one screen column: wall strip first, then floor/ceiling.
    ///
    /// A ray that escapes the grid or lands outside its texture abandons the
    /// column, leaving those pixels unwritten — never a failed frame.
    fn cast_column(&mut self, col: usize, cam: &Camera, grid: &Grid, bank: &TextureBank) {
        let dir = ray::column_ray(cam, col, self.width);
        let Some(hit) = dda::march(cam.pos, dir, grid) else {
            return;
        };

        let dist = projection::perp_wall_dist(cam.pos, dir, &hit);
        let slice = projection::project_slice(dist, self.height);
        let wall_x = walls::wall_x(cam.pos, dir, dist, hit.side);

        let Some(material) = grid.material(hit.cell) else {
            return;
        };
        let tex = bank.material_or_missing(material);
        let Some(tex_x) = walls::tex_column(wall_x, dir, hit.side, tex.size) else {
            return;
        };

        let h = self.height as i32;
        for y in slice.draw_start..slice.draw_end {
            let Some(tex_y) = walls::tex_row(y, h, &slice, tex.size) else {
                continue;
            };
            let Some(mut color) = tex.sample(tex_x, tex_y) else {
                continue;
            };
            if hit.side == Side::Y {
                // darker y-faces tell the two wall orientations apart
                color = (color >> 1) & 0x7F7F7F;
            }
            self.scratch[y as usize * self.width + col] = color;
        }

        self.cast_env(col, cam.pos, dir, &hit, dist, wall_x, slice.draw_end, bank);
    }

    /// Fill the rows under the wall slice with floor texels and their
    /// vertical mirrors with ceiling texels.
    #[allow(clippy::too_many_arguments)]
    fn cast_env(
        &mut self,
        col: usize,
        origin: Vec2,
        dir: Vec2,
        hit: &RayHit,
        dist: f32,
        wall_x: f32,
        draw_end: i32,
        bank: &TextureBank,
    ) {
        let env_pos = planes::env_pixel_pos(hit, dir, wall_x);
        let floor = bank.material_or_missing(self.env.floor);
        let ceiling = bank.material_or_missing(self.env.ceiling);
        let h = self.height as i32;

        for y in (draw_end + 1)..h {
            let weight = planes::row_distance(y, h) / dist;
            let p = planes::env_point(origin, env_pos, weight);
            let Some((tx, ty)) = planes::env_texel(p, floor.size) else {
                continue;
            };

            // one interpolation, two writes: this row and its mirror
            if let Some(c) = floor.sample(tx, ty) {
                self.scratch[y as usize * self.width + col] = c;
            }
            let mirrored = h - y;
            if (0..h).contains(&mirrored) {
                if let Some(c) = ceiling.sample(tx, ty) {
                    self.scratch[mirrored as usize * self.width + col] = c;
                }
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
