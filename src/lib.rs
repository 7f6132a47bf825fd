//! tfedit is a 1-D transfer-function editing and compositing core.
//!
//! A transfer function is assembled from a stack of alpha curves
//! ([`Function`]) layered over an optional background pattern. The
//! [`Editor`] rasterizes every layer to packed RGBA8 pixels, composites them
//! in a defined order, and overlays the upper envelope of all curves as a
//! guide line.
//!
//! # Pipeline overview
//!
//! 1. **Evaluate**: a [`Function`] maps a normalized x to an opacity in
//!    `[0, 1]`, restricted to its declared [`Domain`].
//! 2. **Rasterize**: every [`Layer`] (curves and backgrounds alike) renders
//!    itself into a fresh [`Raster`]; curves fill the area under their plot.
//! 3. **Composite**: the [`Editor`] blends the layer rasters with the
//!    Porter-Duff [`over`] operator and plots the envelope outline on top.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: [`Editor::rasterize`] is a pure function of editor
//!   state plus the requested dimensions; the only caching lives in the
//!   explicit [`CachedEditor`] wrapper.
//! - **Tolerant evaluation**: degenerate curves and out-of-domain samples
//!   evaluate to 0 instead of failing; only structural misuse (zero
//!   dimensions, out-of-range pixel access) reports a [`TfeError`].
//! - **RGBA8 interchange**: [`Raster::to_rgba8`] guarantees a row-major,
//!   top-row-first R,G,B,A byte layout suitable for texture upload or PNG
//!   encoding.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod editor;
mod foundation;
mod function;
mod layer;
mod raster;

pub use editor::{CachedEditor, Editor, FunctionId};
pub use foundation::core::{Domain, Point, Rgba, Vec2};
pub use foundation::error::{TfeError, TfeResult};
pub use function::Function;
pub use function::piecewise::PiecewiseLinear;
pub use function::shapes::{Boxcar, Gaussian};
pub use function::tent::Tent;
pub use layer::Layer;
pub use layer::checkers::Checkers;
pub use raster::buffer::Raster;
pub use raster::color::{byte_to_channel, channel_to_byte, over, pack, unpack};
