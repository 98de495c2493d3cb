//! Generalized (Hermite) Divided Differences
//!
//! Computes the divided difference `f[x_0, ..., x_{n-1}]` of an ordered
//! sequence of [`Point`]s, see
//! [divided differences](https://en.wikipedia.org/wiki/Divided_differences).
//!
//! Two regimes have a closed form:
//!
//! ```text
//! coincident   f[x, x, ..., x]   = f^(n-1)(x) / (n-1)!
//! distinct     f[x_0, ..., x_n-1] = Σ_i f(x_i) / Π_{k≠i} (x_i - x_k)
//! ```
//!
//! The coincident form is the limit of the distinct one as all nodes
//! collapse onto `x`. Sequences that repeat only some of their points
//! ([`Regime::Mixed`]) need the full Hermite table and are rejected with
//! [`InterpolationError::MixedUnsupported`].


use tracing::{debug, trace, warn};

use crate::interpolation::algorithms::Regime;
use crate::interpolation::config::DividedDifferenceCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::Point;


/// `k!` for `0 <= k <= max_order`.
///
/// # Errors
/// - [`InterpolationError::NegativeOrder`] if `k < 0`.
/// - [`InterpolationError::OrderTooLarge`] if `k > max_order`.
pub fn factorial(k: i64, max_order: u32) -> Result<f64, InterpolationError> {
    if k < 0 {
        return Err(InterpolationError::NegativeOrder { got: k });
    }
    if k > i64::from(max_order) {
        return Err(InterpolationError::OrderTooLarge { got: k, max: max_order });
    }

    Ok(factorial_unchecked(k as u32))
}

#[inline]
fn factorial_unchecked(k: u32) -> f64 {
    if k <= 1 { 1.0 } else { f64::from(k) * factorial_unchecked(k - 1) }
}


/// Highest derivative order known across `points`, `None` if empty.
///
/// When a full divided-difference table is built, every location is
/// repeated this many extra times.
pub fn max_derivative_order(points: &[Point]) -> Option<usize> {
    points.iter().map(Point::known_derivative_order).max()
}


/// Divided difference of `points` with the default [`DividedDifferenceCfg`].
pub fn compute_divided_difference(points: &[Point]) -> Result<f64, InterpolationError> {
    divided_difference(points, &DividedDifferenceCfg::new())
}


/// Computes the generalized divided difference of an ordered point sequence.
///
/// # Behavior
/// - [`Regime::Coincident`] (all `n` points equal): returns
///   `values[n-1] / (n-1)!` of that point. A single point yields `f(x)`.
/// - [`Regime::Distinct`]: sums `f(x_i) / Π_{k≠i}(x_i - x_k)` by position.
/// - [`Regime::Mixed`]: not supported.
///
/// # Errors
/// - [`InterpolationError::EmptyPoints`] if `points` is empty.
/// - [`InterpolationError::DerivativeOutOfRange`] if a coincident point
///   does not know `f^(n-1)`.
/// - [`InterpolationError::OrderTooLarge`] if `n-1` exceeds `cfg.max_order()`.
/// - [`InterpolationError::ZeroDenominator`] if two unequal points share an
///   `x` (some `Π_{k≠i}(x_i - x_k)` is exactly zero).
/// - [`InterpolationError::NonFiniteResult`] if the distinct-regime sum
///   overflows (or cancels `inf - inf`) despite finite inputs.
/// - [`InterpolationError::MixedUnsupported`] for partially repeated points.
pub fn divided_difference(
    points : &[Point],
    cfg    : &DividedDifferenceCfg,
) -> Result<f64, InterpolationError> {
    let regime = Regime::classify(points)?;
    debug!(n_points = points.len(), %regime, "computing divided difference");

    match regime {
        Regime::Coincident => coincident(&points[0], points.len(), cfg),
        Regime::Distinct   => distinct(points),
        Regime::Mixed      => {
            warn!(n_points = points.len(), "rejecting partially repeated points");
            Err(InterpolationError::MixedUnsupported)
        }
    }
}


fn coincident(
    point : &Point,
    n     : usize,
    cfg   : &DividedDifferenceCfg,
) -> Result<f64, InterpolationError> {
    let order = n - 1;

    let fk = point.derivative(order).ok_or(InterpolationError::DerivativeOutOfRange {
        order,
        available: point.known_derivative_order(),
    })?;
    let denom = factorial(order as i64, cfg.max_order())?;

    let result = fk / denom;
    trace!(x = point.x(), order, result, "coincident divided difference");
    Ok(result)
}


fn distinct(points: &[Point]) -> Result<f64, InterpolationError> {
    // a shared `x` zeroes a factor; catch it before an overflowed
    // factor can turn the product into NaN
    if let Some(idx) = shared_x_idx(points) {
        warn!(idx, x = points[idx].x(), "zero denominator in divided difference");
        return Err(InterpolationError::ZeroDenominator { idx });
    }

    let mut sum = 0.0;

    for (i, pi) in points.iter().enumerate() {
        let xi = pi.x();

        let denom: f64 = points
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i)
            .map(|(_, pk)| xi - pk.x())
            .product();

        // underflow
        if denom == 0.0 {
            warn!(idx = i, x = xi, "zero denominator in divided difference");
            return Err(InterpolationError::ZeroDenominator { idx: i });
        }

        let term = pi.value() / denom;
        trace!(idx = i, x = xi, term, "distinct divided difference term");
        sum += term;
    }

    if !sum.is_finite() {
        warn!(n_points = points.len(), sum, "non-finite divided difference");
        return Err(InterpolationError::NonFiniteResult { got: sum });
    }

    Ok(sum)
}


/// First index whose `x` is shared with another point.
fn shared_x_idx(points: &[Point]) -> Option<usize> {
    points.iter().enumerate().position(|(i, pi)| {
        points
            .iter()
            .enumerate()
            .any(|(k, pk)| k != i && pk.x() == pi.x())
    })
}
