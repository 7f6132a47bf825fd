//! The compositor: an ordered function stack over an optional background.

mod cache;

pub use self::cache::CachedEditor;

use crate::foundation::core::{Point, Rgba};
use crate::foundation::error::{TfeError, TfeResult};
use crate::function::Function;
use crate::layer::Layer;
use crate::raster::buffer::Raster;
use crate::raster::color::{over, pack, unpack};

/// Opaque orange used for the envelope outline overlay.
const OUTLINE: Rgba = Rgba::new(1.0, 0.5, 0.0, 1.0);

/// Stable identifier for a function registered with an [`Editor`].
///
/// Ids survive reordering and are never reused within one editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionId(u64);

/// The transfer-function compositor.
///
/// Owns an ordered stack of functions plus an optional background layer.
/// List order is bottom-to-top for hit-testing ([`Editor::select`]) and for
/// the envelope ([`Editor::eval`]). Compositing follows the same list order
/// but blends each newly rasterized function *underneath* the running
/// accumulator, so later-added functions render below earlier ones; that
/// asymmetry is part of the editor's contract, see [`Editor::rasterize`].
pub struct Editor {
    background: Option<Box<dyn Layer>>,
    functions: Vec<(FunctionId, Function)>,
    next_id: u64,
    show_outline: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an empty editor with the outline overlay enabled.
    pub fn new() -> Self {
        Self {
            background: None,
            functions: Vec::new(),
            next_id: 0,
            show_outline: true,
        }
    }

    /// Register a function as the new topmost entry for hit-testing and
    /// return its stable id.
    pub fn add_function(&mut self, function: Function) -> FunctionId {
        let id = FunctionId(self.next_id);
        self.next_id += 1;
        self.functions.push((id, function));
        id
    }

    /// Replace the background layer; it always renders bottommost.
    pub fn set_background(&mut self, background: Box<dyn Layer>) {
        self.background = Some(background);
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no functions are registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Shared access to a registered function.
    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        self.functions
            .iter()
            .find(|(fid, _)| *fid == id)
            .map(|(_, f)| f)
    }

    /// Mutable access to a registered function; changes are picked up by the
    /// next [`Editor::rasterize`] call.
    pub fn function_mut(&mut self, id: FunctionId) -> Option<&mut Function> {
        self.functions
            .iter_mut()
            .find(|(fid, _)| *fid == id)
            .map(|(_, f)| f)
    }

    /// Reorder `id` to the top of the stacking/selection order.
    ///
    /// Returns whether the id was present; unknown ids are a no-op.
    pub fn move_to_top(&mut self, id: FunctionId) -> bool {
        let Some(pos) = self.functions.iter().position(|(fid, _)| *fid == id) else {
            return false;
        };
        let entry = self.functions.remove(pos);
        self.functions.push(entry);
        true
    }

    /// The topmost function whose filled area contains `pos`, scanning from
    /// the most recently stacked entry down. `None` when no curve reaches
    /// above `pos.y` at `pos.x`.
    pub fn select(&self, pos: Point) -> Option<FunctionId> {
        self.functions
            .iter()
            .rev()
            .find(|(_, f)| pos.y < f.eval(pos.x))
            .map(|(id, _)| *id)
    }

    /// Pointwise maximum opacity across all registered functions; 0 when the
    /// editor is empty.
    pub fn eval(&self, x: f64) -> f64 {
        self.functions
            .iter()
            .map(|(_, f)| f.eval(x))
            .fold(0.0, f64::max)
    }

    /// `num_samples` evenly spaced envelope evaluations over `[0, 1]`.
    pub fn sample_alpha(&self, num_samples: u32) -> Vec<f64> {
        let denom = f64::from(num_samples.saturating_sub(1).max(1));
        (0..num_samples)
            .map(|i| self.eval(f64::from(i) / denom))
            .collect()
    }

    /// Whether the envelope outline is drawn on top of the composite.
    pub fn show_outline(&self) -> bool {
        self.show_outline
    }

    /// Toggle the envelope outline overlay.
    pub fn set_show_outline(&mut self, show: bool) {
        self.show_outline = show;
    }

    /// Composite all layers into a fresh raster.
    ///
    /// Functions are rasterized in list order and each is blended
    /// *underneath* the accumulated image (the accumulator is the `src`
    /// operand of [`over`]); the background, if set, is placed below
    /// everything; the envelope outline is plotted on top when enabled.
    /// Later-added functions therefore render below earlier-added ones while
    /// [`Editor::select`] prefers them; both follow the list order.
    #[tracing::instrument(skip(self))]
    pub fn rasterize(&self, width: u32, height: u32) -> TfeResult<Raster> {
        let mut acc = Raster::new(width, height)?;

        for (_, function) in &self.functions {
            let layer = function.rasterize(width, height)?;
            blend_under(&mut acc, &layer)?;
        }

        if let Some(background) = &self.background {
            let bg = background.rasterize(width, height)?;
            blend_under(&mut acc, &bg)?;
        }

        if self.show_outline {
            self.draw_outline(&mut acc)?;
        }

        Ok(acc)
    }

    /// Plot the upper envelope of all curves as single opaque pixels, one
    /// per column with a positive envelope value.
    fn draw_outline(&self, raster: &mut Raster) -> TfeResult<()> {
        let (width, height) = (raster.width(), raster.height());
        let outline = pack(OUTLINE);
        let denom = f64::from(width.saturating_sub(1).max(1));

        for x in 0..width {
            let yf = self.eval(f64::from(x) / denom);
            if yf <= 0.0 {
                continue;
            }
            // An envelope at exactly 1 lands on the top row.
            let y = ((yf * f64::from(height)) as u32).min(height - 1);
            raster.set(x, y, outline)?;
        }

        Ok(())
    }
}

/// Blend `below` underneath the accumulated image: per pixel the accumulator
/// is the `src` operand of [`over`] and `below` the `dst`.
fn blend_under(acc: &mut Raster, below: &Raster) -> TfeResult<()> {
    if acc.width() != below.width() || acc.height() != below.height() {
        return Err(TfeError::validation(
            "blend_under expects equal-size rasters",
        ));
    }
    for (a, b) in acc.pixels_mut().iter_mut().zip(below.pixels()) {
        *a = pack(over(unpack(*a), unpack(*b)));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/editor/editor.rs"]
mod tests;
