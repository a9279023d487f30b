//! First-person maze viewer.
//!
//! Controls  W/S = forward/back  A/D = strafe  ←/→ = turn  Esc = quit
//!
//! ```bash
//! cargo run --release -- --map assets/maps/level_01.txt
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use minifb::{Key, Window, WindowOptions};

use mazecast::{
    map::load_map,
    renderer::{Flat, Rect, RendererExt, Rgba, Software, Surface},
    sim::{InputCmd, apply_input},
    world::{Camera, TextureBank},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Map file to load
    #[arg(long, value_name = "FILE", default_value = "assets/maps/level_01.txt")]
    map: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1000)]
    width: usize,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800)]
    height: usize,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 66.0)]
    fov: f32,

    /// Flat-shaded walls and plain-colour floor/sky instead of textures
    #[arg(long)]
    untextured: bool,
}

/// Staging pixels the untextured path draws into before presentation.
struct StagingSurface {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl StagingSurface {
    fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
        }
    }
}

impl Surface for StagingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        for y in rect.y..(rect.y + rect.h).min(self.height) {
            let row = y * self.width;
            for x in rect.x..(rect.x + rect.w).min(self.width) {
                self.pixels[row + x] = color;
            }
        }
    }

    fn draw_vertical_line(&mut self, x: usize, y_start: usize, y_end: usize, color: Rgba) {
        if x >= self.width || self.height == 0 {
            return;
        }
        for y in y_start..=y_end.min(self.height - 1) {
            self.pixels[y * self.width + x] = color;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let grid = load_map(&opts.map)
        .with_context(|| format!("loading map {}", opts.map.display()))?;
    let bank = TextureBank::with_builtin_set();

    let spawn = grid
        .first_open_cell()
        .context("map has no open cell to spawn in")?;
    let mut camera = Camera::new(spawn, Vec2::X, opts.fov.to_radians());

    let mut window = Window::new("Mazecast", opts.width, opts.height, WindowOptions::default())?;
    window.set_target_fps(60);

    let mut software = Software::default();
    let flat = Flat;
    let mut staging = StagingSurface::new(opts.width, opts.height);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last
    let mut last_frame = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        // clamp dt so a dragged window doesn't teleport the player
        let dt = last_frame.elapsed().as_secs_f32().min(0.1);
        last_frame = Instant::now();

        /* --------------- build one InputCmd per frame --------------------- */
        let mut cmd = InputCmd::default();
        if window.is_key_down(Key::W) || window.is_key_down(Key::Up) {
            cmd.forward += 1.0;
        }
        if window.is_key_down(Key::S) || window.is_key_down(Key::Down) {
            cmd.forward -= 1.0;
        }
        if window.is_key_down(Key::A) {
            cmd.strafe -= 1.0;
        }
        if window.is_key_down(Key::D) {
            cmd.strafe += 1.0;
        }
        if window.is_key_down(Key::Left) {
            cmd.turn += 1.0;
        }
        if window.is_key_down(Key::Right) {
            cmd.turn -= 1.0;
        }

        apply_input(&mut camera, &grid, &cmd, dt);

        /* draw */
        let t0 = Instant::now();
        if opts.untextured {
            flat.draw_view(&mut staging, opts.width, opts.height, &camera, &grid);
            acc_time += t0.elapsed();
            window.update_with_buffer(&staging.pixels, opts.width, opts.height)?;
        } else {
            software.render_frame(opts.width, opts.height, &camera, &grid, &bank, |fb, w, h| {
                acc_time += t0.elapsed();
                window.update_with_buffer(fb, w, h).unwrap()
            });
        }
        acc_frames += 1;

        // ─────────── report every ~3 s ────────────────────
        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
