// src/error.rs
//! Error taxonomy of the engine.
//!
//! Structural shape errors are rejected at construction; numeric
//! degeneracies expected in normal operation (a joint exactly at zero
//! rotation) are absorbed by branch-safe formulas and never surface here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// Wrong coefficient arity for a fixed blade shape, a non-symmetric
    /// metric, or a narrowing conversion that would drop a non-negligible
    /// coefficient.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Inverse or logarithm requested on a degenerate element, e.g. a null
    /// conformal point. Sandwiching through such an element indicates a
    /// logic error upstream.
    #[error("non-invertible element: {0}")]
    NonInvertible(String),

    /// Exponential-map input whose algebraic square is not a scalar, or an
    /// otherwise malformed generator.
    #[error("degenerate generator: {0}")]
    DegenerateGenerator(String),
}

pub type Result<T> = std::result::Result<T, GaError>;
