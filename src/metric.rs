// src/metric.rs
//! Symmetric bilinear form over the basis vectors of an algebra.
//!
//! The metric is fixed at construction and never mutated; zero entries mark
//! degenerate (null) directions, which the conformal model relies on for its
//! origin and infinity basis vectors.

use crate::error::{GaError, Result};
use crate::types::Scalar;
use std::fmt;

/// An n x n symmetric coefficient matrix defining the inner products of the
/// basis vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    dim: usize,
    coeffs: Vec<Scalar>, // row-major, dim * dim
}

impl Metric {
    /// Build a metric from a full row-major matrix. Rejects non-square and
    /// non-symmetric input.
    pub fn new(dim: usize, coeffs: Vec<Scalar>) -> Result<Self> {
        if coeffs.len() != dim * dim {
            return Err(GaError::ShapeMismatch(format!(
                "metric needs {} coefficients for dimension {}, got {}",
                dim * dim,
                dim,
                coeffs.len()
            )));
        }
        for i in 0..dim {
            for j in (i + 1)..dim {
                if coeffs[i * dim + j] != coeffs[j * dim + i] {
                    return Err(GaError::ShapeMismatch(format!(
                        "metric is not symmetric at ({i}, {j})"
                    )));
                }
            }
        }
        Ok(Self { dim, coeffs })
    }

    /// Diagonal metric from a signature, e.g. `[1, 1, 1]` for Euclidean 3D
    /// or `[1, 1, 1, 1, -1]` for the diagonalized conformal signature.
    pub fn diagonal(signature: &[Scalar]) -> Self {
        let dim = signature.len();
        let mut coeffs = vec![0.0; dim * dim];
        for (i, &s) in signature.iter().enumerate() {
            coeffs[i * dim + i] = s;
        }
        Self { dim, coeffs }
    }

    /// Euclidean metric in `dim` dimensions: identity matrix.
    pub fn euclidean(dim: usize) -> Self {
        Self::diagonal(&vec![1.0; dim])
    }

    /// Conformal metric over the basis (e0, e1, e2, e3, ei): the Euclidean
    /// block plus two null directions pairing as e0 . ei = -1.
    pub fn conformal() -> Self {
        let dim = 5;
        let mut coeffs = vec![0.0; dim * dim];
        for i in 1..4 {
            coeffs[i * dim + i] = 1.0;
        }
        coeffs[4] = -1.0; // (0, 4)
        coeffs[4 * dim] = -1.0; // (4, 0)
        Self { dim, coeffs }
    }

    /// Number of basis vectors.
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of basis blades, 2^dim.
    #[inline(always)]
    pub fn blade_count(&self) -> usize {
        1 << self.dim
    }

    /// Inner product of basis vectors i and j.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> Scalar {
        self.coeffs[i * self.dim + j]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.dim {
            for j in 0..self.dim {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:5.1}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
