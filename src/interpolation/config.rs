//! Configuration for the divided-difference calculator.
//!
//! Provides [`DividedDifferenceCfg`] holding the maximum derivative order
//! the calculator accepts; [`DEFAULT_MAX_ORDER`] by default.
//!
//! [`DividedDifferenceCfg`] fields
//! - `max_order` : largest `k` accepted by
//!   [`crate::interpolation::divided_difference::factorial`], and so the
//!   largest derivative order usable at a coincident point
//!
//! [`DividedDifferenceCfg::new`] initializes configuration with defaults.


use crate::interpolation::errors::InterpolationError;

/// Highest derivative order validated out of the box.
pub const DEFAULT_MAX_ORDER: u32 = 5;

/// Largest `k` for which `k!` is finite in `f64`.
pub const MAX_REPRESENTABLE_ORDER: u32 = 170;


#[derive(Debug, Copy, Clone)]
pub struct DividedDifferenceCfg {
    max_order: u32,
}

impl DividedDifferenceCfg {
    pub fn new() -> Self {
        Self { max_order: DEFAULT_MAX_ORDER }
    }

    /// Raises (or lowers) the maximum derivative order.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidMaxOrder`] if `v` exceeds
    ///   [`MAX_REPRESENTABLE_ORDER`].
    pub fn set_max_order(mut self, v: u32) -> Result<Self, InterpolationError> {
        if v > MAX_REPRESENTABLE_ORDER {
            return Err(InterpolationError::InvalidMaxOrder {
                got: v,
                limit: MAX_REPRESENTABLE_ORDER,
            });
        }
        self.max_order = v;
        Ok(self)
    }

    // getters
    pub fn max_order(&self) -> u32 { self.max_order }
}

impl Default for DividedDifferenceCfg {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}
