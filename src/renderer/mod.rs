//! Rendering abstraction layer.
//!
//! *The rest of the crate never touches a pixel buffer directly.*
//! The engine produces per-column geometry; a type implementing
//! [`Renderer`] turns it into pixels and loans the finished frame to the
//! presentation side.
//!
//! * [`Software`] is the textured path: it owns an off-screen buffer,
//!   accumulates every column, hands the buffer out once per frame and
//!   clears it afterwards.
//! * [`Flat`] is the untextured fallback: no buffer of its own, it issues
//!   flat fills and vertical lines against whatever implements [`Surface`].

use crate::world::{Camera, Grid, TextureBank};

/// Pixel format of the software frame-buffer (`0x00RRGGBB`).
pub type Rgba = u32;

/// Axis-aligned pixel rectangle for [`Surface::fill_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

/// Presentation-side drawing surface used by the untextured path.
///
/// The windowing collaborator implements this over whatever it presents
/// from; the renderer never learns what that is.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw a 1-px-wide vertical run from `y_start` to `y_end` inclusive.
    fn draw_vertical_line(&mut self, x: usize, y_start: usize, y_end: usize, color: Rgba);
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure —
/// exactly once per frame — and zero-fills it for the next pass.  Callers
/// typically forward the loan to their window manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Ray-cast the whole viewport for this frame's camera snapshot.
    fn draw_view(&mut self, cam: &Camera, grid: &Grid, bank: &TextureBank);

    /// Finish the frame and **loan** the buffer to `submit`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `render_frame` adaptor.
pub trait RendererExt: Renderer {
    fn render_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        cam: &Camera,
        grid: &Grid,
        bank: &TextureBank,
        submit: F,
    ) where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        self.draw_view(cam, grid, bank);
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod flat;
pub mod software;

pub use flat::Flat;
pub use software::{EnvMaterials, Software};
