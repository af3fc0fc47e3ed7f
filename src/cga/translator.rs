// src/cga/translator.rs
//! Translator: parabolic versor moving points along a fixed direction.
//!
//! The generator lives on (e1i, e2i, e3i) and is nilpotent, so the
//! exponential truncates exactly: `exp(g) = 1 - g`. A generator of
//! `0.5 (tx e1i + ty e2i + tz e3i)` translates by (tx, ty, tz).

use crate::cga::blades;
use crate::cga::shapes;
use crate::cga::versor::Versor;
use crate::error::Result;
use crate::multivector::Multivector;
use crate::types::SHAPE_TOLERANCE;
use crate::vector::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    mv: Multivector,
}

impl Versor for Translator {
    const SHAPE: &'static [u32] = shapes::TRANSLATOR;

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

impl Translator {
    pub fn identity() -> Self {
        Self {
            mv: Multivector::scalar(1.0),
        }
    }

    /// Exact exponential of a nilpotent generator over (e1i, e2i, e3i).
    pub fn exp(generator: &Multivector) -> Result<Self> {
        let g = generator.narrow(shapes::TRANSLATOR_GENERATOR, SHAPE_TOLERANCE)?;
        Ok(Self {
            mv: Multivector::scalar(1.0) - g,
        })
    }

    /// Translator moving points by `t`, via the half-weighted generator.
    pub fn from_translation(t: Vec3) -> Self {
        Self {
            mv: Multivector::from_sorted_terms(vec![
                (blades::SCALAR, 1.0),
                (blades::E1I, -0.5 * t.x),
                (blades::E2I, -0.5 * t.y),
                (blades::E3I, -0.5 * t.z),
            ]),
        }
    }

    /// Exact logarithm, the negated bivector part.
    pub fn log(&self) -> Multivector {
        -self.mv.grade_part(2)
    }

    /// Euclidean displacement applied by this translator.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(
            -2.0 * self.mv.get(blades::E1I),
            -2.0 * self.mv.get(blades::E2I),
            -2.0 * self.mv.get(blades::E3I),
        )
    }
}
