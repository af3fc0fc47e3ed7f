// src/cga/dilator.rs
//! Dilator: uniform scaling about the origin, the hyperbolic versor on e0i.
//!
//! `Dilator::exp(d e0i)` is `cosh(d/2) - sinh(d/2) e0i`, which scales
//! Euclidean positions by `exp(-d)`. `from_factor` converts a plain scale
//! factor into that parametrization.

use crate::cga::blades;
use crate::cga::shapes;
use crate::cga::versor::Versor;
use crate::error::{GaError, Result};
use crate::multivector::Multivector;
use crate::types::{Scalar, SHAPE_TOLERANCE};

#[derive(Debug, Clone, PartialEq)]
pub struct Dilator {
    mv: Multivector,
}

impl Versor for Dilator {
    const SHAPE: &'static [u32] = shapes::DILATOR;

    fn from_shaped(mv: Multivector) -> Self {
        Self { mv }
    }

    fn multivector(&self) -> &Multivector {
        &self.mv
    }

    fn into_multivector(self) -> Multivector {
        self.mv
    }
}

impl Dilator {
    pub fn identity() -> Self {
        Self {
            mv: Multivector::scalar(1.0),
        }
    }

    /// Exponential of a generator `d e0i`.
    pub fn exp(generator: &Multivector) -> Result<Self> {
        let g = generator.narrow(&[blades::E0I], SHAPE_TOLERANCE)?;
        let half = -0.5 * g.get(blades::E0I);
        Ok(Self {
            mv: Multivector::from_sorted_terms(vec![
                (blades::SCALAR, half.cosh()),
                (blades::E0I, half.sinh()),
            ]),
        })
    }

    /// Dilator scaling by a positive `factor`.
    pub fn from_factor(factor: Scalar) -> Result<Self> {
        if factor <= 0.0 {
            return Err(GaError::DegenerateGenerator(format!(
                "dilation factor must be positive, got {factor}"
            )));
        }
        Self::exp(&Multivector::from_blade(blades::E0I, -factor.ln()))
    }

    /// Exact logarithm; sinh is injective, so no branch guard is needed.
    pub fn log(&self) -> Multivector {
        Multivector::from_blade(blades::E0I, -2.0 * self.mv.get(blades::E0I).asinh())
    }

    /// Scale factor applied to Euclidean positions.
    pub fn factor(&self) -> Scalar {
        (-self.log().get(blades::E0I)).exp()
    }
}
