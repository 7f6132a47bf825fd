//! Opacity curve shapes and their closed dispatch enum.

pub mod piecewise;
pub mod shapes;
pub mod tent;

use self::piecewise::PiecewiseLinear;
use self::shapes::{Boxcar, Gaussian};
use self::tent::Tent;
use crate::foundation::core::Domain;

/// A 1-D opacity curve over a bounded domain, used as a transfer-function
/// component.
///
/// The shape set is closed; dispatch is a plain `match`. Every variant
/// carries its own [`Domain`] and answers [`Function::eval`] with 0 for
/// samples outside it.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Function {
    /// Linear interpolation between sorted control points.
    PiecewiseLinear(PiecewiseLinear),
    /// Trapezoid (or triangle) described by a tip and two widths.
    Tent(Tent),
    /// Constant value over a sub-interval, 0 elsewhere.
    Boxcar(Boxcar),
    /// Gaussian bump described by center, spread and amplitude.
    Gaussian(Gaussian),
}

impl Function {
    /// Opacity at normalized position `x`.
    ///
    /// Degenerate shapes and samples outside the declared domain evaluate to
    /// 0 rather than failing.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::PiecewiseLinear(f) => f.eval(x),
            Self::Tent(f) => f.eval(x),
            Self::Boxcar(f) => f.eval(x),
            Self::Gaussian(f) => f.eval(x),
        }
    }

    /// The x-range this function is defined over.
    pub fn domain(&self) -> Domain {
        match self {
            Self::PiecewiseLinear(f) => f.domain(),
            Self::Tent(f) => f.domain(),
            Self::Boxcar(f) => f.domain(),
            Self::Gaussian(f) => f.domain(),
        }
    }
}

impl From<PiecewiseLinear> for Function {
    fn from(f: PiecewiseLinear) -> Self {
        Self::PiecewiseLinear(f)
    }
}

impl From<Tent> for Function {
    fn from(f: Tent) -> Self {
        Self::Tent(f)
    }
}

impl From<Boxcar> for Function {
    fn from(f: Boxcar) -> Self {
        Self::Boxcar(f)
    }
}

impl From<Gaussian> for Function {
    fn from(f: Gaussian) -> Self {
        Self::Gaussian(f)
    }
}
