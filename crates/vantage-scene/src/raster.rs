//! SVG → RGBA rasterization through `resvg`.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid svg: {0}")]
    Svg(#[from] resvg::usvg::Error),
    #[error("cannot allocate a {width}x{height} image")]
    Size { width: u32, height: u32 },
    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Renders `svg` stretched to `width` × `height` pixels, straight alpha.
pub fn rasterize(svg: &str, width: u32, height: u32) -> Result<RgbaImage, RasterError> {
    let mut options = Options::default();
    options.resources_dir = None;

    let tree = Tree::from_str(svg, &options)?;
    let mut pixmap = Pixmap::new(width, height).ok_or(RasterError::Size { width, height })?;

    let size = tree.size();
    let transform = Transform::from_scale(width as f32 / size.width(), height as f32 / size.height());
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied pixels.
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    log::debug!("rasterized {width}x{height} from a {}x{} view", size.width(), size.height());
    RgbaImage::from_raw(width, height, data).ok_or(RasterError::Size { width, height })
}

pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), RasterError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
