// src/cga/motor.rs
//! Motor: rigid-body displacement, the product of a translator and a rotor.
//!
//! A motor factors exactly as `M = T * R`: the Euclidean even part of M is
//! the rotor, and `M * reverse(R)` recovers the translator. exp and log go
//! through that factorization, so their round trip is exact.

use crate::algebra::Algebra;
use crate::cga::rotor::Rotor;
use crate::cga::shapes;
use crate::cga::translator::Translator;
use crate::cga::versor::Versor;
use crate::error::Result;
use crate::multivector::Multivector;
use crate::types::SHAPE_TOLERANCE;

#[derive(Debug, Clone, PartialEq)]
pub struct Motor {
    mv: Multivector,
}

impl Versor for Motor {
    const SHAPE: &'static [u32] = shapes::MOTOR;

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

impl Motor {
    pub fn identity() -> Self {
        Self {
            mv: Multivector::scalar(1.0),
        }
    }

    /// Motor applying `rotor` first, then `translator`.
    pub fn from_parts(translator: &Translator, rotor: &Rotor, alg: &Algebra) -> Result<Self> {
        let product = translator.multivector().gp(rotor.multivector(), alg);
        Ok(Self {
            mv: product.narrow(shapes::MOTOR, SHAPE_TOLERANCE)?,
        })
    }

    /// Rotational factor: the Euclidean even part of the motor. Exact for
    /// motors built from unit rotors.
    pub fn rotor(&self) -> Rotor {
        let mut terms = Vec::with_capacity(Rotor::SHAPE.len());
        for &b in Rotor::SHAPE {
            terms.push((b, self.mv.get(b)));
        }
        Rotor::from_shaped(Multivector::from_sorted_terms(terms))
    }

    /// Translational factor, `M * reverse(R)`.
    pub fn translator(&self, alg: &Algebra) -> Result<Translator> {
        let r = self.rotor();
        let t = self.mv.gp(&r.multivector().reverse(), alg);
        Ok(Translator::from_shaped(
            t.narrow(Translator::SHAPE, SHAPE_TOLERANCE)?,
        ))
    }

    /// Exponential of a generator over (e12, e13, e23, e1i, e2i, e3i):
    /// the translator factor of the infinity part times the rotor factor
    /// of the Euclidean part.
    pub fn exp(generator: &Multivector, alg: &Algebra) -> Result<Self> {
        let g = generator.narrow(shapes::MOTOR_GENERATOR, SHAPE_TOLERANCE)?;
        let mut rot = Multivector::zero();
        for &b in shapes::ROTOR_GENERATOR {
            rot.set(b, g.get(b));
        }
        let mut trans = Multivector::zero();
        for &b in shapes::TRANSLATOR_GENERATOR {
            trans.set(b, g.get(b));
        }
        let t = Translator::exp(&trans)?;
        let r = Rotor::exp(&rot, alg)?;
        Self::from_parts(&t, &r, alg)
    }

    /// Logarithm by factorization: translator log plus rotor log.
    pub fn log(&self, alg: &Algebra) -> Result<Multivector> {
        let r = self.rotor();
        let t = self.translator(alg)?;
        Ok(&t.log() + &r.log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cga::blades;

    #[test]
    fn factorization_recovers_parts() {
        let alg = Algebra::conformal();
        let r = Rotor::exp(&Multivector::from_blade(blades::E12, 0.8), &alg).unwrap();
        let t = Translator::exp(&Multivector::from_blade(blades::E1I, 0.5)).unwrap();
        let m = Motor::from_parts(&t, &r, &alg).unwrap();
        assert_eq!(m.rotor(), r);
        let t2 = m.translator(&alg).unwrap();
        for &b in Translator::SHAPE {
            assert!((t2.multivector().get(b) - t.multivector().get(b)).abs() < 1e-12);
        }
    }

    #[test]
    fn exp_log_round_trip() {
        let alg = Algebra::conformal();
        let g = Multivector::from_terms(vec![
            (blades::E12, 0.6),
            (blades::E23, -0.2),
            (blades::E1I, 1.1),
            (blades::E3I, -0.4),
        ])
        .unwrap();
        let m = Motor::exp(&g, &alg).unwrap();
        let back = m.log(&alg).unwrap();
        for &(b, c) in g.terms() {
            assert!((back.get(b) - c).abs() < 1e-9, "blade {b:#b}");
        }
    }
}
