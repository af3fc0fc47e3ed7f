// src/types.rs
#![allow(dead_code)]

/// Scalar coefficient type used throughout the engine.
pub type Scalar = f64;

/// Residue threshold for narrowing a multivector to a smaller blade shape:
/// truncated coefficients above this magnitude are an error.
pub const SHAPE_TOLERANCE: Scalar = 1e-9;

/// Threshold below which `scalar(a * reverse(a))` counts as zero, making the
/// element non-invertible.
pub const INVERSE_TOLERANCE: Scalar = 1e-12;

/// Threshold for classifying the square of a generator as elliptic, parabolic
/// or hyperbolic, and for the small-angle Taylor fallbacks in exp/log.
pub const BRANCH_TOLERANCE: Scalar = 1e-12;
