//! Generalized (Hermite) divided differences.
//!
//! See [`interpolation::divided_difference`] for the calculator and
//! [`interpolation::point::Point`] for the sample data model.

pub mod interpolation;
