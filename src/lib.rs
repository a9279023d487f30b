//! Textured grid-maze ray-casting renderer.
//!
//! For every screen column one ray is fired from the camera into a grid of
//! walled/empty cells ([`engine::dda`]), the nearest wall intersection is
//! projected into a vertical textured strip ([`engine::projection`],
//! [`engine::walls`]), and the rows above and below it are back-projected
//! onto the ceiling and floor ([`engine::planes`]).  [`renderer`] turns the
//! column geometry into pixels; [`map`] loads the world; [`sim`] moves the
//! player between frames.

pub mod engine;
pub mod map;
pub mod renderer;
pub mod sim;
pub mod world;
