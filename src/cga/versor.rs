// src/cga/versor.rs
//! Versors: invertible elements applied by the sandwich product, plus the
//! generic exponential and logarithm over generators with scalar square.
//!
//! The exponential has three branches on the sign of `scalar(g * g)`:
//! elliptic (rotations), parabolic (translations, nilpotent) and hyperbolic
//! (dilations). Near-zero squares fall through to the parabolic series, so
//! the map is total over well-formed generators.

use crate::algebra::Algebra;
use crate::cga::object::GeometricObject;
use crate::error::{GaError, Result};
use crate::multivector::Multivector;
use crate::types::{Scalar, BRANCH_TOLERANCE, SHAPE_TOLERANCE};

/// A fixed-shape element applied as `V X V^-1`.
pub trait Versor: Sized {
    const SHAPE: &'static [u32];

    /// Wrap a multivector already matching `SHAPE`.
    fn from_shaped(mv: Multivector) -> Self;

    fn multivector(&self) -> &Multivector;

    fn into_multivector(self) -> Multivector;

    /// Sandwich an object and narrow the result back to the object's shape.
    fn apply<O: GeometricObject>(&self, obj: &O, alg: &Algebra) -> Result<O> {
        let v = self.multivector();
        let inv = v.inverse(alg)?;
        let out = v.gp(obj.multivector(), alg).gp(&inv, alg);
        O::from_multivector(&out)
    }

    /// Composition by geometric product; applying the result equals applying
    /// `other` first, then `self`.
    fn compose(&self, other: &Self, alg: &Algebra) -> Result<Self> {
        let product = self.multivector().gp(other.multivector(), alg);
        Ok(Self::from_shaped(
            product.narrow(Self::SHAPE, SHAPE_TOLERANCE)?,
        ))
    }
}

/// `sin(t) / t` with the small-angle series.
fn sinc(t: Scalar) -> Scalar {
    if t.abs() < 1e-6 {
        1.0 - t * t / 6.0
    } else {
        t.sin() / t
    }
}

/// `sinh(t) / t` with the small-argument series.
fn sinhc(t: Scalar) -> Scalar {
    if t.abs() < 1e-6 {
        1.0 + t * t / 6.0
    } else {
        t.sinh() / t
    }
}

/// Exponential of a generator whose geometric square is a scalar.
///
/// Elliptic: `cos(t) + sin(t)/t g` for `g*g = -t^2`.
/// Parabolic: `1 + g` for `g*g = 0`.
/// Hyperbolic: `cosh(t) + sinh(t)/t g` for `g*g = t^2`.
pub fn versor_exp(g: &Multivector, alg: &Algebra) -> Result<Multivector> {
    let g2 = g.gp(g, alg);
    let residue = g2
        .terms()
        .iter()
        .filter(|&&(b, _)| b != 0)
        .fold(0.0 as Scalar, |m, &(_, c)| m.max(c.abs()));
    if residue > SHAPE_TOLERANCE {
        return Err(GaError::DegenerateGenerator(format!(
            "generator square has a non-scalar residue of magnitude {residue:e}"
        )));
    }
    let s = g2.scalar_part();
    if s < -BRANCH_TOLERANCE {
        let t = (-s).sqrt();
        Ok(Multivector::scalar(t.cos()) + g * sinc(t))
    } else if s > BRANCH_TOLERANCE {
        let t = s.sqrt();
        Ok(Multivector::scalar(t.cosh()) + g * sinhc(t))
    } else {
        Ok(Multivector::scalar(1.0) + g.clone())
    }
}

/// Logarithm inverting `versor_exp` for versors with positive scalar part.
///
/// Classifies the non-scalar part b by the sign of `scalar(b * b)` and
/// rescales it to the generator, with the `sin(h)/h -> 1` guard as the
/// non-scalar part vanishes.
pub fn versor_log(v: &Multivector, alg: &Algebra) -> Result<Multivector> {
    let s = v.scalar_part();
    if s <= 0.0 {
        return Err(GaError::NonInvertible(
            "logarithm needs a positive scalar part".to_string(),
        ));
    }
    let mut b = v.clone();
    b.set(0, 0.0);
    let b2 = b.gp(&b, alg).scalar_part();
    let factor = if b2 < -BRANCH_TOLERANCE {
        let m = (-b2).sqrt();
        m.atan2(s) / m
    } else if b2 > BRANCH_TOLERANCE {
        let m = b2.sqrt();
        m.asinh() / m
    } else {
        1.0 / s
    };
    Ok(&b * factor)
}
