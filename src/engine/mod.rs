//! Per-column ray-casting pipeline.
//!
//! Pure geometry: a ray is generated for a screen column, marched through
//! the grid, projected into a vertical slice, and turned into texture
//! coordinates.  Nothing in here touches a pixel buffer — that is the
//! renderer's job.

pub mod dda;
pub mod planes;
pub mod projection;
pub mod ray;
pub mod walls;

pub use dda::{RayHit, Side, march};
pub use projection::{WallSlice, perp_wall_dist, project_slice};
