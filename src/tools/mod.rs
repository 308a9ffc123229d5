//! Rendering helpers shared by the CLI and tests

use image::{GrayImage, Luma};
use std::path::Path;

use crate::models::ModuleMatrix;

/// Border width in modules on every side
pub const QUIET_ZONE: usize = 2;

/// Glyphs used for text rendering, two display cells per module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Glyph for a dark module
    pub dark: &'static str,
    /// Glyph for a light module and the border
    pub light: &'static str,
}

impl RenderStyle {
    /// Dark modules as full blocks, for light-background terminals
    pub fn inverted() -> Self {
        let default = Self::default();
        Self {
            dark: default.light,
            light: default.dark,
        }
    }
}

impl Default for RenderStyle {
    /// Light modules as full blocks, so the symbol reads correctly on a dark
    /// terminal background
    fn default() -> Self {
        Self {
            dark: "  ",
            light: "██",
        }
    }
}

/// Render the matrix as text, one line per row, with a light border
pub fn render_text(matrix: &ModuleMatrix, style: RenderStyle) -> String {
    let width = matrix.size() + 2 * QUIET_ZONE;
    let border_line = style.light.repeat(width);
    let side = style.light.repeat(QUIET_ZONE);

    let mut out = String::with_capacity((width * style.light.len() + 1) * width);
    for _ in 0..QUIET_ZONE {
        out.push_str(&border_line);
        out.push('\n');
    }
    for row in matrix.rows() {
        out.push_str(&side);
        for dark in row {
            out.push_str(if dark { style.dark } else { style.light });
        }
        out.push_str(&side);
        out.push('\n');
    }
    for _ in 0..QUIET_ZONE {
        out.push_str(&border_line);
        out.push('\n');
    }
    out
}

/// Render the matrix as a grayscale image, `scale` pixels per module
pub fn render_image(matrix: &ModuleMatrix, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let modules = (matrix.size() + 2 * QUIET_ZONE) as u32;
    let side = modules * scale;
    let quiet = QUIET_ZONE as u32;

    GrayImage::from_fn(side, side, |px, py| {
        let col = px / scale;
        let row = py / scale;
        let inside = (quiet..modules - quiet).contains(&col) && (quiet..modules - quiet).contains(&row);
        let dark = inside && matrix.get((row - quiet) as usize, (col - quiet) as usize);
        Luma([if dark { 0 } else { 255 }])
    })
}

/// Write the matrix to `path` as a PNG
pub fn save_png<P: AsRef<Path>>(
    matrix: &ModuleMatrix,
    path: P,
    scale: u32,
) -> Result<(), image::ImageError> {
    render_image(matrix, scale).save_with_format(path, image::ImageFormat::Png)
}
