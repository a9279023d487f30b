mod camera;
mod grid;
mod texture;

pub use camera::Camera;
pub use grid::Grid;
pub use texture::{BUILTIN_TEX_SIZE, NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};
