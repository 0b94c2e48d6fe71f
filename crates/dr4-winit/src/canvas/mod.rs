//! CPU rasterization target shared by textures, images and the window back buffer.

mod raster;
mod surface;

pub use raster::ShapePaint;
pub use surface::Canvas;
