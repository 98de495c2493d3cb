//! Sample points with known derivatives.
//!
//! A [`Point`] is one interpolation node `x` together with its value stack
//! `values = [f(x), f'(x), ..., f^(m)(x)]`, where `m` is the highest
//! derivative order known at `x`.
//!
//! Repeating a point in a divided-difference sequence encodes the use of
//! its derivatives (ref. [Hermite interpolation](https://en.wikipedia.org/wiki/Hermite_interpolation)).
//!
//! Example:
//! ```text
//! x = 0, f(x) = 1, f'(x) = -1   ->   Point::new(0.0, vec![1.0, -1.0])   (m = 1)
//! ```


use crate::interpolation::config::non_finite_idx;
use crate::interpolation::errors::InterpolationError;


/// One sample location and its value/derivative stack.
///
/// # Fields
/// - `x`      : sample location
/// - `values` : `values[k] = f^(k)(x)`, never empty
///
/// # Equality
/// Two points are equal when both `x` and `values` match. The
/// divided-difference calculator uses this to detect coincident nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    x      : f64,
    values : Vec<f64>,
}

impl Point {
    /// Builds a point from its location and value stack.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyValues`] if `values` is empty.
    /// - [`InterpolationError::NonFiniteX`] if `x` is NaN or infinite.
    /// - [`InterpolationError::NonFiniteValue`] if any entry of `values` is.
    pub fn new(x: f64, values: Vec<f64>) -> Result<Self, InterpolationError> {
        if values.is_empty() {
            return Err(InterpolationError::EmptyValues);
        }
        if !x.is_finite() {
            return Err(InterpolationError::NonFiniteX { x });
        }
        if let Some(idx) = non_finite_idx(&values) {
            return Err(InterpolationError::NonFiniteValue { idx });
        }

        Ok(Self { x, values })
    }

    // getters
    pub fn x(&self) -> f64 { self.x }
    pub fn values(&self) -> &[f64] { &self.values }

    /// `f(x)`
    pub fn value(&self) -> f64 { self.values[0] }

    /// Highest derivative order known at this point (`m = values.len() - 1`).
    pub fn known_derivative_order(&self) -> usize { self.values.len() - 1 }

    /// `f^(k)(x)`, or `None` if order `k` is not known here.
    pub fn derivative(&self, k: usize) -> Option<f64> {
        self.values.get(k).copied()
    }
}
