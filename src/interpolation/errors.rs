//! Divided-difference error types.
//!
//! Every variant of [`InterpolationError`] is an invalid-argument failure:
//!
//! ┌ point construction
//! │   ├ empty value stack
//! │   └ non-finite location or value
//! │
//! ├ divided-difference computation
//! │   ├ empty point sequence
//! │   ├ zero denominator (repeated `x` among unequal points)
//! │   ├ non-finite result (overflow in the distinct sum)
//! │   ├ derivative order not available at a coincident point
//! │   └ mixed coincident/distinct data (unsupported)
//! │
//! └ factorial / configuration
//!     ├ negative order
//!     ├ order above the configured maximum
//!     └ invalid configured maximum


use thiserror::Error;


#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("empty point sequence")]
    EmptyPoints,

    #[error("empty value vector: f(x) must be known")]
    EmptyValues,

    #[error("non-finite sample location x={x}")]
    NonFiniteX { x: f64 },

    #[error("non-finite value in value vector at index {idx}")]
    NonFiniteValue { idx: usize },

    #[error("denominator is zero at point {idx}, divided difference undefined")]
    ZeroDenominator { idx: usize },

    #[error("non-finite divided difference {got} from finite points")]
    NonFiniteResult { got: f64 },

    #[error("derivative of order {order} requested, only up to order {available} known")]
    DerivativeOutOfRange { order: usize, available: usize },

    #[error("negative factorial argument {got}")]
    NegativeOrder { got: i64 },

    #[error("order too large: got {got}, configured maximum is {max}")]
    OrderTooLarge { got: i64, max: u32 },

    #[error("invalid max_order {got}: k! must be finite, need max_order <= {limit}")]
    InvalidMaxOrder { got: u32, limit: u32 },

    #[error("mixed point data not supported: points are partially repeated")]
    MixedUnsupported,
}
