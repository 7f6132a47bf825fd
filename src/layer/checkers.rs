use crate::foundation::core::Rgba;
use crate::foundation::error::{TfeError, TfeResult};
use crate::layer::Layer;
use crate::raster::buffer::Raster;
use crate::raster::color::pack;

/// Checkerboard background layer.
///
/// Pixel (x, y) belongs to cell `(x / cell_size, y / cell_size)`; cells whose
/// index parities match render `color1`, the rest `color2`. Both colors are
/// forced fully opaque.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Checkers {
    cell_size: u32,
    color1: Rgba,
    color2: Rgba,
}

impl Checkers {
    /// Build a checkerboard with `cell_size`-pixel cells.
    pub fn new(cell_size: u32, color1: Rgba, color2: Rgba) -> TfeResult<Self> {
        if cell_size == 0 {
            return Err(TfeError::validation("checker cell size must be > 0"));
        }
        Ok(Self {
            cell_size,
            color1: Rgba::opaque(color1.r, color1.g, color1.b),
            color2: Rgba::opaque(color2.r, color2.g, color2.b),
        })
    }

    /// Cell edge length in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }
}

impl Default for Checkers {
    /// 8-pixel black and white cells.
    fn default() -> Self {
        Self {
            cell_size: 8,
            color1: Rgba::opaque(0.0, 0.0, 0.0),
            color2: Rgba::opaque(1.0, 1.0, 1.0),
        }
    }
}

impl Layer for Checkers {
    fn rasterize(&self, width: u32, height: u32) -> TfeResult<Raster> {
        // Deserialized values bypass `new`, so re-check here.
        if self.cell_size == 0 {
            return Err(TfeError::validation("checker cell size must be > 0"));
        }

        let mut raster = Raster::new(width, height)?;
        let colors = [pack(self.color1), pack(self.color2)];

        for y in 0..height {
            for x in 0..width {
                let cx = x / self.cell_size;
                let cy = y / self.cell_size;
                let idx = usize::from(cx % 2 != cy % 2);
                raster.set(x, y, colors[idx])?;
            }
        }

        Ok(raster)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/checkers.rs"]
mod tests;
