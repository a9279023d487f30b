use glam::{IVec2, Vec2};

/// Rectangular tile grid the rays march through.
///
/// Cell `0` is walkable; any positive value `v` is a solid wall rendered with
/// material `v - 1`.  All access goes through bounds-checked lookups — there
/// is deliberately no raw indexing into the backing vector from outside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from row-major cell codes.
    ///
    /// `cells.len()` must equal `width * height`; the map loader guarantees
    /// this before construction.
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell code at `(x, y)`, or `None` outside `[0,W)×[0,H)`.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    /// True when `cell` holds a wall.  Out-of-range cells are not walls —
    /// the stepper treats leaving the grid as "no tile", not as a hit.
    #[inline]
    pub fn is_wall(&self, cell: IVec2) -> bool {
        matches!(self.get(cell.x, cell.y), Some(v) if v > 0)
    }

    /// Material index (`cell value - 1`) of a wall cell, `None` for empty or
    /// out-of-range cells.
    #[inline]
    pub fn material(&self, cell: IVec2) -> Option<usize> {
        match self.get(cell.x, cell.y) {
            Some(v) if v > 0 => Some(v as usize - 1),
            _ => None,
        }
    }

    /// True when a continuous position lies in an empty cell.
    /// Used by movement, never by the render pass.
    #[inline]
    pub fn is_open(&self, pos: Vec2) -> bool {
        self.get(pos.x as i32, pos.y as i32) == Some(0)
    }

    /// True when every border cell is solid.
    ///
    /// The stepper relies on this: a ray started inside an enclosed grid can
    /// never leave it.
    pub fn is_enclosed(&self) -> bool {
        let (w, h) = (self.width as i32, self.height as i32);
        for x in 0..w {
            if !self.is_wall(IVec2::new(x, 0)) || !self.is_wall(IVec2::new(x, h - 1)) {
                return false;
            }
        }
        for y in 0..h {
            if !self.is_wall(IVec2::new(0, y)) || !self.is_wall(IVec2::new(w - 1, y)) {
                return false;
            }
        }
        true
    }

    /// Centre of the first empty cell in scan order, if any.
    pub fn first_open_cell(&self) -> Option<Vec2> {
        let idx = self.cells.iter().position(|&c| c == 0)?;
        let (x, y) = (idx % self.width, idx / self.width);
        Some(Vec2::new(x as f32 + 0.5, y as f32 + 0.5))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
