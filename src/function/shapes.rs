use crate::foundation::core::Domain;

/// Rectangular pulse: a constant opacity over `[start, end]`, 0 elsewhere.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Boxcar {
    start: f64,
    end: f64,
    value: f64,
    #[serde(default)]
    domain: Domain,
}

impl Boxcar {
    /// Build a pulse holding `value` over `[start, end]`.
    pub fn new(start: f64, end: f64, value: f64) -> Self {
        Self {
            start,
            end,
            value,
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

    /// Opacity at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        if !self.domain.contains(x) || x < self.start || x > self.end {
            return 0.0;
        }
        self.value
    }
}

/// Gaussian bump `amplitude * exp(-(x - center)^2 / (2 * stddev^2))`.
///
/// A non-positive `stddev` is degenerate and evaluates to 0.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Gaussian {
    center: f64,
    stddev: f64,
    amplitude: f64,
    #[serde(default)]
    domain: Domain,
}

impl Gaussian {
    /// Build a bump centered at `center` with spread `stddev` and peak
    /// opacity `amplitude`.
    pub fn new(center: f64, stddev: f64, amplitude: f64) -> Self {
        Self {
            center,
            stddev,
            amplitude,
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

    /// Opacity at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        if !self.domain.contains(x) || self.stddev <= 0.0 {
            return 0.0;
        }
        let d = x - self.center;
        self.amplitude * (-(d * d) / (2.0 * self.stddev * self.stddev)).exp()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/function/shapes.rs"]
mod tests;
