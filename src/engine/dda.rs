//! Grid stepper: march a ray cell-by-cell until it enters a wall.

use glam::{IVec2, Vec2};

use crate::world::Grid;

/// Which pair of grid lines the ray crossed on its final step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// A vertical grid line (constant x) was crossed.
    X,
    /// A horizontal grid line (constant y) was crossed.
    Y,
}

/// Result of marching one ray to the first solid cell.
///
/// Produced and consumed within a single column's processing.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// The wall cell the ray stopped in.
    pub cell: IVec2,
    /// Axis crossed on the final step.
    pub side: Side,
    /// Step signs used on each axis (`±1`).
    pub step: IVec2,
    /// Accumulated side distances at the time of the hit.
    pub side_dist: Vec2,
}

/// Distance along the ray between two grid lines of one axis.
///
/// A zero direction component yields `+inf` instead of a division fault;
/// that axis then never wins the advance comparison.
#[inline]
fn delta_dist(dir: f32) -> f32 {
    if dir == 0.0 {
        f32::INFINITY
    } else {
        (1.0 / dir).abs()
    }
}

/// Distance along the ray from `origin` to the first grid line of one axis.
///
/// With a zero direction component this is `(cell + 1 - origin) * inf`,
/// which is a clean `+inf` because the factor is strictly positive for any
/// origin inside the cell.
#[inline]
fn initial_side_dist(origin: f32, cell: i32, dir: f32, delta: f32) -> f32 {
    if dir < 0.0 {
        (origin - cell as f32) * delta
    } else {
        (cell as f32 + 1.0 - origin) * delta
    }
}

/// March `dir` from `origin` until a wall cell is entered.
///
/// Exactly one axis advances per iteration — whichever side distance is
/// smaller.  Returns `None` if the ray leaves the grid (cannot happen on a
/// border-enclosed map) or if `dir` is the zero vector; the caller abandons
/// the column in that case.
pub fn march(origin: Vec2, dir: Vec2, grid: &Grid) -> Option<RayHit> {
    if dir == Vec2::ZERO {
        return None;
    }

    let delta = Vec2::new(delta_dist(dir.x), delta_dist(dir.y));
    // ties toward +1
    let step = IVec2::new(
        if dir.x < 0.0 { -1 } else { 1 },
        if dir.y < 0.0 { -1 } else { 1 },
    );

    let mut cell = origin.as_ivec2();
    let mut side_dist = Vec2::new(
        initial_side_dist(origin.x, cell.x, dir.x, delta.x),
        initial_side_dist(origin.y, cell.y, dir.y, delta.y),
    );

    loop {
        let side = if side_dist.x < side_dist.y {
            side_dist.x += delta.x;
            cell.x += step.x;
            Side::X
        } else {
            side_dist.y += delta.y;
            cell.y += step.y;
            Side::Y
        };

        match grid.get(cell.x, cell.y) {
            // left the grid: no tile, abandon the ray
            None => return None,
            Some(v) if v > 0 => {
                return Some(RayHit {
                    cell,
                    side,
                    step,
                    side_dist,
                });
            }
            Some(_) => {}
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn ring3() -> Grid {
        Grid::new(3, 3, vec![1, 1, 1, 1, 0, 1, 1, 1, 1])
    }

    /// 8×8 box, hollow inside.
    fn box8() -> Grid {
        let mut cells = vec![0u8; 64];
        for i in 0..8 {
            cells[i] = 1;
            cells[56 + i] = 1;
            cells[i * 8] = 1;
            cells[i * 8 + 7] = 1;
        }
        Grid::new(8, 8, cells)
    }

    #[test]
    fn terminates_everywhere_in_an_enclosed_grid() {
        let grid = box8();
        for ix in 1..7 {
            for iy in 1..7 {
                let origin = Vec2::new(ix as f32 + 0.3, iy as f32 + 0.7);
                for k in 0..16 {
                    let dir = Vec2::from_angle(k as f32 * std::f32::consts::TAU / 16.0);
                    let hit = march(origin, dir, &grid).expect("enclosed grid must hit");
                    assert!(grid.is_wall(hit.cell));
                }
            }
        }
    }

    #[test]
    fn escaping_ray_is_abandoned_not_read_out_of_bounds() {
        // no wall to the east of the start cell
        let grid = Grid::new(3, 1, vec![0, 0, 0]);
        assert!(march(Vec2::new(0.5, 0.5), Vec2::X, &grid).is_none());
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(march(Vec2::new(1.5, 1.5), Vec2::ZERO, &ring3()).is_none());
    }

    #[test]
    fn axis_aligned_ray_steps_only_on_its_axis() {
        // dir.x == 0 exactly: delta.x is the infinite sentinel, every step
        // must advance y
        let hit = march(Vec2::new(1.5, 1.5), Vec2::Y, &ring3()).unwrap();
        assert_eq!(hit.cell, IVec2::new(1, 2));
        assert_eq!(hit.side, Side::Y);
        assert_eq!(delta_dist(0.0), f32::INFINITY);

        // same with a grid-line origin on the dead axis
        let grid = box8();
        let hit = march(Vec2::new(3.0, 3.5), Vec2::NEG_Y, &grid).unwrap();
        assert_eq!(hit.cell, IVec2::new(3, 0));
        assert_eq!(hit.side, Side::Y);
    }

    #[test]
    fn step_signs_tie_toward_positive() {
        let hit = march(Vec2::new(1.5, 1.5), Vec2::Y, &ring3()).unwrap();
        assert_eq!(hit.step, IVec2::new(1, 1));
        let hit = march(Vec2::new(1.5, 1.5), Vec2::new(-1.0, 0.0), &ring3()).unwrap();
        assert_eq!(hit.step, IVec2::new(-1, 1));
    }

    #[test]
    fn reported_side_matches_the_crossed_axis() {
        let grid = box8();
        let origin = Vec2::new(4.5, 4.5);
        let hit = march(origin, Vec2::X, &grid).unwrap();
        assert_eq!((hit.cell, hit.side), (IVec2::new(7, 4), Side::X));
        // diagonal toward the corner still reports whichever axis crossed last
        let hit = march(origin, Vec2::new(1.0, 0.2), &grid).unwrap();
        assert_eq!(hit.side, Side::X);
    }
}
