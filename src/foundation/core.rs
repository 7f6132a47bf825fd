pub use kurbo::{Point, Vec2};

/// Closed 1-D interval bounding a function's valid x-range.
///
/// `lower <= upper` is the caller's responsibility; the constructor does not
/// reorder endpoints.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Domain {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Inclusive upper bound.
    pub upper: f64,
}

impl Domain {
    /// The full normalized range `[0, 1]` every shape uses unless overridden.
    pub const UNIT: Self = Self {
        lower: 0.0,
        upper: 1.0,
    };

    /// Build a domain from explicit bounds.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Whether `x` lies inside the closed interval.
    pub fn contains(self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Normalized straight-alpha RGBA color, each channel conceptually in `[0, 1]`.
///
/// Channels are stored unclamped; quantization to a packed RGBA8 pixel clamps
/// at the conversion boundary (see [`crate::pack`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel (straight, not premultiplied).
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Build a color from explicit channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a fully opaque color from RGB channels.
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
