//! Player simulation: walking and turning, applied between render passes.
//!
//! Consumes the camera snapshot the input collaborator gathered a command
//! for, produces the next one.  Never runs concurrently with a render pass.

use crate::world::{Camera, Grid};

/// Walk speed in grid cells per second.
pub const MOVE_SPEED: f32 = 5.0;
/// Turn speed in radians per second.
pub const TURN_SPEED: f32 = 3.0;

/// One frame's worth of player intent, gathered by the input collaborator.
///
/// Axes are `-1.0 ..= 1.0`; zero means no input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    /// Along the facing direction (positive = forward).
    pub forward: f32,
    /// Along the camera plane (positive = right at the default handedness).
    pub strafe: f32,
    /// Rotation (positive = counter-clockwise).
    pub turn: f32,
}

/// Apply one frame of input to the camera.
///
/// Turning rotates direction and plane in lock-step.  Walking moves only
/// when the destination cell is inside the grid and empty — a blocking
/// check against the whole displacement, so walls stop the player dead.
pub fn apply_input(cam: &mut Camera, grid: &Grid, cmd: &InputCmd, dt: f32) {
    if cmd.turn != 0.0 {
        cam.rotate(cmd.turn * TURN_SPEED * dt);
    }

    let delta = (cam.dir() * cmd.forward + cam.plane() * cmd.strafe) * MOVE_SPEED * dt;
    if delta == glam::Vec2::ZERO {
        return;
    }
    let target = cam.pos + delta;
    if grid.is_open(target) {
        cam.pos = target;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn box5() -> Grid {
        let mut cells = vec![0u8; 25];
        for i in 0..5 {
            cells[i] = 1;
            cells[20 + i] = 1;
            cells[i * 5] = 1;
            cells[i * 5 + 4] = 1;
        }
        Grid::new(5, 5, cells)
    }

    fn cam() -> Camera {
        Camera::new(Vec2::new(2.5, 2.5), Vec2::X, 2.0 * 0.66f32.atan())
    }

    #[test]
    fn walks_forward_through_open_cells() {
        let mut c = cam();
        let cmd = InputCmd {
            forward: 1.0,
            ..Default::default()
        };
        apply_input(&mut c, &box5(), &cmd, 0.1);
        assert!((c.pos.x - 3.0).abs() < 1e-6);
        assert_eq!(c.pos.y, 2.5);
    }

    #[test]
    fn walls_block_the_whole_move() {
        let mut c = cam();
        c.pos = Vec2::new(3.6, 2.5);
        let cmd = InputCmd {
            forward: 1.0,
            ..Default::default()
        };
        // 0.5 cells forward would land inside the east wall
        apply_input(&mut c, &box5(), &cmd, 0.1);
        assert_eq!(c.pos, Vec2::new(3.6, 2.5));
    }

    #[test]
    fn turning_does_not_move() {
        let mut c = cam();
        let cmd = InputCmd {
            turn: 1.0,
            ..Default::default()
        };
        let pos = c.pos;
        apply_input(&mut c, &box5(), &cmd, 0.25);
        assert_eq!(c.pos, pos);
        // 0.25 s at TURN_SPEED rad/s
        let expected = Vec2::from_angle(TURN_SPEED * 0.25).rotate(Vec2::X);
        assert!((c.dir() - expected).length() < 1e-6);
    }

    #[test]
    fn strafes_along_the_plane() {
        let mut c = cam();
        let cmd = InputCmd {
            strafe: 1.0,
            ..Default::default()
        };
        apply_input(&mut c, &box5(), &cmd, 0.1);
        assert_eq!(c.pos.x, 2.5);
        assert!(c.pos.y != 2.5);
    }
}
