// src/cga/rotor.rs
//! Rotor: rotation about an axis through the origin.
//!
//! `Rotor::exp(G)` for a Euclidean bivector generator G of magnitude t
//! produces `cos(t/2) - sin(t/2) G_hat`, whose sandwich rotates by exactly t
//! in the plane of G. The half-angle lives inside exp/log, so generators
//! read directly in radians.

use crate::algebra::Algebra;
use crate::cga::shapes;
use crate::cga::versor::{versor_exp, Versor};
use crate::error::Result;
use crate::multivector::Multivector;
use crate::types::{Scalar, BRANCH_TOLERANCE, SHAPE_TOLERANCE};
use crate::vector::Vec3;

/// Even Euclidean versor over (1, e12, e13, e23).
#[derive(Debug, Clone, PartialEq)]
pub struct Rotor {
    mv: Multivector,
}

impl Versor for Rotor {
    const SHAPE: &'static [u32] = shapes::ROTOR;

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

impl Rotor {
    pub fn identity() -> Self {
        Self {
            mv: Multivector::scalar(1.0),
        }
    }

    /// Exponential of a bivector generator over (e12, e13, e23); the
    /// generator magnitude is the rotation angle.
    pub fn exp(generator: &Multivector, alg: &Algebra) -> Result<Self> {
        let g = generator.narrow(shapes::ROTOR_GENERATOR, SHAPE_TOLERANCE)? * -0.5;
        let v = versor_exp(&g, alg)?;
        Ok(Self {
            mv: v.narrow(shapes::ROTOR, SHAPE_TOLERANCE)?,
        })
    }

    /// Rotation of `angle` radians about a (not necessarily unit) axis,
    /// right-handed.
    pub fn from_axis_angle(axis: Vec3, angle: Scalar, alg: &Algebra) -> Result<Self> {
        let n = axis.normalized();
        let generator = Multivector::from_terms(vec![
            (crate::cga::blades::E12, n.z * angle),
            (crate::cga::blades::E13, -n.y * angle),
            (crate::cga::blades::E23, n.x * angle),
        ])?;
        Self::exp(&generator, alg)
    }

    /// Generator recovering this rotor through `exp`; the principal branch,
    /// with the small-angle guard.
    pub fn log(&self) -> Multivector {
        let s = self.mv.scalar_part();
        let b = self.mv.grade_part(2);
        let m = b
            .terms()
            .iter()
            .map(|&(_, c)| c * c)
            .sum::<Scalar>()
            .sqrt();
        let factor = if m < BRANCH_TOLERANCE {
            -2.0
        } else {
            -2.0 * m.atan2(s) / m
        };
        &b * factor
    }

    /// Rotation angle of the principal branch, the magnitude of `log`.
    pub fn angle(&self) -> Scalar {
        let b = self.mv.grade_part(2);
        let m = b
            .terms()
            .iter()
            .map(|&(_, c)| c * c)
            .sum::<Scalar>()
            .sqrt();
        2.0 * m.atan2(self.mv.scalar_part())
    }
}
