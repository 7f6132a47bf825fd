use crate::foundation::core::{Domain, Point};

/// Piecewise-linear opacity curve over control points sorted ascending by x.
///
/// Points are sorted once at construction and never re-sorted. A curve with
/// fewer than two points is degenerate and evaluates to 0 everywhere.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PiecewiseLinear {
    points: Vec<Point>,
    #[serde(default)]
    domain: Domain,
}

impl PiecewiseLinear {
    /// Build a curve from control points; `x` is the curve parameter, `y`
    /// the opacity at that x. Input order does not matter.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        let mut points = points.into();
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self {
            points,
            domain: Domain::UNIT,
        }
    }

    /// Restrict evaluation to `domain`; samples outside it return 0.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// The declared valid x-range.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Sorted control points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Opacity at `x`: linear interpolation between the surrounding pair of
    /// control points.
    ///
    /// Returns 0 for degenerate curves, samples outside the domain, and
    /// samples not covered by any consecutive control-point pair.
    pub fn eval(&self, x: f64) -> f64 {
        if self.points.len() < 2 || !self.domain.contains(x) {
            return 0.0;
        }

        for pair in self.points.windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            if p1.x > x || p2.x < x {
                continue;
            }

            let m = (p2.y - p1.y) / (p2.x - p1.x);
            return p1.y + m * (x - p1.x);
        }

        0.0
    }
}

impl Default for PiecewiseLinear {
    /// Identity ramp from (0, 0) to (1, 1).
    fn default() -> Self {
        Self::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/function/piecewise.rs"]
mod tests;
