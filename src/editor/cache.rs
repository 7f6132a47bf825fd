use crate::editor::{Editor, FunctionId};
use crate::foundation::core::Point;
use crate::foundation::error::{TfeError, TfeResult};
use crate::function::Function;
use crate::layer::Layer;
use crate::raster::buffer::Raster;

/// Cache-invalidation wrapper around [`Editor`].
///
/// Adapters that re-upload the composite every frame wrap the editor here to
/// skip rasterization while the state and the requested dimensions are
/// unchanged. Every mutating call marks the cache dirty; the next
/// [`CachedEditor::raster`] call after a mutation or a resize renders again.
pub struct CachedEditor {
    editor: Editor,
    cached: Option<Raster>,
    dirty: bool,
}

impl CachedEditor {
    /// Wrap an editor; the first `raster` call always renders.
    pub fn new(editor: Editor) -> Self {
        Self {
            editor,
            cached: None,
            dirty: true,
        }
    }

    /// Shared access to the wrapped editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Unwrap into the inner editor, dropping any cached raster.
    pub fn into_inner(self) -> Editor {
        self.editor
    }

    /// See [`Editor::add_function`]; invalidates the cache.
    pub fn add_function(&mut self, function: Function) -> FunctionId {
        self.dirty = true;
        self.editor.add_function(function)
    }

    /// See [`Editor::set_background`]; invalidates the cache.
    pub fn set_background(&mut self, background: Box<dyn Layer>) {
        self.dirty = true;
        self.editor.set_background(background);
    }

    /// See [`Editor::move_to_top`]; invalidates the cache when the id was
    /// present.
    pub fn move_to_top(&mut self, id: FunctionId) -> bool {
        let moved = self.editor.move_to_top(id);
        if moved {
            self.dirty = true;
        }
        moved
    }

    /// See [`Editor::function_mut`]; invalidates the cache because the
    /// caller may mutate through the returned reference.
    pub fn function_mut(&mut self, id: FunctionId) -> Option<&mut Function> {
        self.dirty = true;
        self.editor.function_mut(id)
    }

    /// See [`Editor::set_show_outline`]; invalidates the cache.
    pub fn set_show_outline(&mut self, show: bool) {
        self.dirty = true;
        self.editor.set_show_outline(show);
    }

    /// See [`Editor::function`].
    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        self.editor.function(id)
    }

    /// See [`Editor::select`].
    pub fn select(&self, pos: Point) -> Option<FunctionId> {
        self.editor.select(pos)
    }

    /// See [`Editor::eval`].
    pub fn eval(&self, x: f64) -> f64 {
        self.editor.eval(x)
    }

    /// See [`Editor::sample_alpha`].
    pub fn sample_alpha(&self, num_samples: u32) -> Vec<f64> {
        self.editor.sample_alpha(num_samples)
    }

    /// See [`Editor::show_outline`].
    pub fn show_outline(&self) -> bool {
        self.editor.show_outline()
    }

    /// The composite for `width` × `height`, re-rasterizing only when the
    /// editor changed or the dimensions differ from the previous call.
    pub fn raster(&mut self, width: u32, height: u32) -> TfeResult<&Raster> {
        let reuse = !self.dirty
            && self
                .cached
                .as_ref()
                .is_some_and(|r| r.width() == width && r.height() == height);

        if !reuse {
            tracing::debug!(width, height, "composite cache refresh");
            self.cached = Some(self.editor.rasterize(width, height)?);
            self.dirty = false;
        }

        self.cached
            .as_ref()
            .ok_or_else(|| TfeError::raster("composite cache is empty"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/cache.rs"]
mod tests;
