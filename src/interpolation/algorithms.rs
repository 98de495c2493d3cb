//! Divided-difference regimes.
//!
//! Provides the [`Regime`] enum, which tags an ordered point sequence by
//! how its nodes repeat.


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::Point;


/// Divided-difference regime of a point sequence.
/// - [`Regime::Coincident`] every point equals the first one
/// - [`Regime::Distinct`]   no point is repeated
/// - [`Regime::Mixed`]      some points repeated, but not all of them
///
/// Only the first two have a closed form here. Mixed sequences need the
/// full Hermite table and are rejected by the calculator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Regime {
    Coincident,
    Distinct,
    Mixed,
}

impl Regime {
    /// Classifies an ordered point sequence.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyPoints`] if `points` is empty.
    pub fn classify(points: &[Point]) -> Result<Self, InterpolationError> {
        let first = points.first().ok_or(InterpolationError::EmptyPoints)?;

        if points.iter().all(|p| p == first) {
            return Ok(Regime::Coincident);
        }

        let repeated = points
            .iter()
            .enumerate()
            .any(|(i, p)| points[i + 1..].contains(p));

        if repeated { Ok(Regime::Mixed) } else { Ok(Regime::Distinct) }
    }

    pub const fn regime_name(self) -> &'static str {
        match self {
            Regime::Coincident => "coincident",
            Regime::Distinct   => "distinct",
            Regime::Mixed      => "mixed",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.regime_name())
    }
}
