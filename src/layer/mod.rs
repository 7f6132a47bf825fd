pub mod checkers;

use crate::foundation::core::Rgba;
use crate::foundation::error::TfeResult;
use crate::function::Function;
use crate::raster::buffer::Raster;
use crate::raster::color::pack;

/// Fixed translucent gray filling every function's area. The on-screen color
/// of overlapping curves comes from layer blending, not from this fill.
pub(crate) const FUNCTION_FILL: Rgba = Rgba::new(0.6, 0.6, 0.6, 0.95);

/// Anything that can render itself into a [`Raster`] of a requested size.
///
/// Backgrounds and functions are both layers; the editor composites them
/// back-to-front.
pub trait Layer {
    /// Render this layer into a fresh raster of `width` × `height` pixels.
    fn rasterize(&self, width: u32, height: u32) -> TfeResult<Raster>;
}

/// Functions rasterize as the filled area under their curve.
///
/// Column x is evaluated at `x / (width - 1)`; rows `0..eval * height`
/// (clamped to the raster height) are filled, so a curve at opacity 1 fills
/// the full column. Columns evaluating to 0 or below stay transparent.
impl Layer for Function {
    fn rasterize(&self, width: u32, height: u32) -> TfeResult<Raster> {
        let mut raster = Raster::new(width, height)?;
        let fill = pack(FUNCTION_FILL);
        let denom = f64::from(width.saturating_sub(1).max(1));

        for x in 0..width {
            let yf = self.eval(f64::from(x) / denom);
            if yf <= 0.0 {
                continue;
            }
            let top = ((yf * f64::from(height)) as u32).min(height);
            for y in 0..top {
                raster.set(x, y, fill)?;
            }
        }

        Ok(raster)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/fill.rs"]
mod tests;
