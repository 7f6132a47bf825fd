use crate::foundation::core::{Domain, Point};
use crate::function::piecewise::PiecewiseLinear;

/// Trapezoid-shaped opacity curve described by a tip position, a flat top
/// width and a bottom width.
///
/// The shape expands once at construction into four control points handled
/// by an internal [`PiecewiseLinear`]: left-bottom at `tip.x - bw/2`,
/// left-top at `tip.x - tw/2`, right-top at `tip.x + tw/2`, right-bottom at
/// `tip.x + bw/2`. A zero `top_width` collapses the flat top into a triangle
/// tip. Immutable after construction.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(from = "TentSpec", into = "TentSpec")]
pub struct Tent {
    tip: Point,
    top_width: f64,
    bottom_width: f64,
    inner: PiecewiseLinear,
}

impl Tent {
    /// Build a tent from its tip position and top/bottom widths.
    pub fn new(tip: Point, top_width: f64, bottom_width: f64) -> Self {
        let inner = PiecewiseLinear::new(vec![
            Point::new(tip.x - bottom_width / 2.0, 0.0),
            Point::new(tip.x - top_width / 2.0, tip.y),
            Point::new(tip.x + top_width / 2.0, tip.y),
            Point::new(tip.x + bottom_width / 2.0, 0.0),
        ]);
        Self {
            tip,
            top_width,
            bottom_width,
            inner,
        }
    }

    /// Restrict evaluation to `domain`; samples outside it return 0.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.inner = self.inner.with_domain(domain);
        self
    }

    /// Tip position: `x` is the peak location, `y` the opacity at the peak.
    pub fn tip(&self) -> Point {
        self.tip
    }

    /// The declared valid x-range.
    pub fn domain(&self) -> Domain {
        self.inner.domain()
    }

    /// Opacity at `x`, delegated to the expanded trapezoid.
    pub fn eval(&self, x: f64) -> f64 {
        self.inner.eval(x)
    }
}

impl Default for Tent {
    /// Triangle with tip (0.5, 1) over the full unit range.
    fn default() -> Self {
        Self::new(Point::new(0.5, 1.0), 0.0, 1.0)
    }
}

/// Serialized form; the expanded control points are rebuilt on deserialize.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct TentSpec {
    tip: Point,
    top_width: f64,
    bottom_width: f64,
    #[serde(default)]
    domain: Domain,
}

impl From<TentSpec> for Tent {
    fn from(spec: TentSpec) -> Self {
        Tent::new(spec.tip, spec.top_width, spec.bottom_width).with_domain(spec.domain)
    }
}

impl From<Tent> for TentSpec {
    fn from(tent: Tent) -> Self {
        Self {
            tip: tent.tip,
            top_width: tent.top_width,
            bottom_width: tent.bottom_width,
            domain: tent.domain(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/function/tent.rs"]
mod tests;
