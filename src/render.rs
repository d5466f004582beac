use image::ImageBuffer;
use image::Rgb;
use image::RgbImage;
use thiserror::Error;

use crate::grid::Grid;

/// Color of a live cell.
pub const ALIVE: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

/// Color of a dead cell.
pub const DEAD: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Bytes per RGB8 pixel.
const CHANNELS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("the scale has to be > 0")]
    ZeroScale,

    #[error("a {width}x{rows} grid at scale {scale} does not fit in an image")]
    TooLarge {
        width: usize,
        rows: usize,
        scale: u32,
    },
}

/// Draw the grid with one pixel per cell. Live cells are black, dead cells are white.
///
/// The image is `grid.width()` pixels wide and `grid.rows()` pixels high. Fails only when a side
/// does not fit in a `u32`.
pub fn rasterize(grid: &Grid) -> Result<RgbImage, RenderError> {
    rasterize_scaled(grid, 1)
}

/// Like [`rasterize`], but every cell becomes a `scale x scale` block of pixels.
pub fn rasterize_scaled(grid: &Grid, scale: u32) -> Result<RgbImage, RenderError> {
    let (width, height) = image_dimensions(grid, scale)?;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let (row, col) = ((y / scale) as usize, (x / scale) as usize);

        pixel(grid.get(row, col))
    });

    Ok(img)
}

/// Pixel dimensions `(width, height)` of `grid` drawn at `scale`.
///
/// Both sides have to fit in a `u32`, and the whole RGB buffer in a `usize`.
pub fn image_dimensions(grid: &Grid, scale: u32) -> Result<(u32, u32), RenderError> {
    if scale == 0 {
        return Err(RenderError::ZeroScale);
    }

    let too_large = || RenderError::TooLarge {
        width: grid.width(),
        rows: grid.rows(),
        scale,
    };

    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(scale))
            .ok_or_else(too_large)
    };

    let (width, height) = (side(grid.width())?, side(grid.rows())?);

    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(too_large)?;

    Ok((width, height))
}

fn pixel(alive: bool) -> Rgb<u8> {
    if alive { ALIVE } else { DEAD }
}
