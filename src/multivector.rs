// src/multivector.rs
//! Sparse multivector over an explicit blade shape.
//!
//! The term list is the *shape*: blades stay present even when their
//! coefficients are zero, so the structural result of a product is the same
//! for every numeric input with that shape. Blades are kept in ascending
//! bitmask order with no duplicates.

use crate::algebra::Algebra;
use crate::blade;
use crate::cayley::ProductKind;
use crate::error::{GaError, Result};
use crate::types::{Scalar, INVERSE_TOLERANCE};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A linear combination of basis blades with a stable shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Multivector {
    terms: Vec<(u32, Scalar)>,
}

impl Multivector {
    /// The empty multivector: no blades, identically zero.
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// A pure scalar.
    pub fn scalar(s: Scalar) -> Self {
        Self {
            terms: vec![(0, s)],
        }
    }

    /// A single weighted blade.
    pub fn from_blade(blade: u32, coeff: Scalar) -> Self {
        Self {
            terms: vec![(blade, coeff)],
        }
    }

    /// Terms already in ascending order with no duplicates.
    pub(crate) fn from_sorted_terms(terms: Vec<(u32, Scalar)>) -> Self {
        debug_assert!(terms.windows(2).all(|w| w[0].0 < w[1].0));
        Self { terms }
    }

    /// Build from explicit terms; sorts into canonical order and rejects
    /// duplicate blades.
    pub fn from_terms(mut terms: Vec<(u32, Scalar)>) -> Result<Self> {
        terms.sort_by_key(|&(b, _)| b);
        for w in terms.windows(2) {
            if w[0].0 == w[1].0 {
                return Err(GaError::ShapeMismatch(format!(
                    "duplicate blade {:#b} in term list",
                    w[0].0
                )));
            }
        }
        Ok(Self { terms })
    }

    /// Pair a fixed ascending blade shape with its coefficients.
    pub fn with_shape(blades: &[u32], coeffs: &[Scalar]) -> Result<Self> {
        if blades.len() != coeffs.len() {
            return Err(GaError::ShapeMismatch(format!(
                "shape has {} blades but {} coefficients were given",
                blades.len(),
                coeffs.len()
            )));
        }
        Self::from_terms(blades.iter().copied().zip(coeffs.iter().copied()).collect())
    }

    /// Blade/coefficient pairs in ascending blade order.
    #[inline(always)]
    pub fn terms(&self) -> &[(u32, Scalar)] {
        &self.terms
    }

    /// Coefficient of a blade, zero when the blade is outside the shape.
    pub fn get(&self, blade: u32) -> Scalar {
        match self.terms.binary_search_by_key(&blade, |&(b, _)| b) {
            Ok(i) => self.terms[i].1,
            Err(_) => 0.0,
        }
    }

    /// Set a blade's coefficient, widening the shape if absent.
    pub fn set(&mut self, blade: u32, value: Scalar) {
        match self.terms.binary_search_by_key(&blade, |&(b, _)| b) {
            Ok(i) => self.terms[i].1 = value,
            Err(i) => self.terms.insert(i, (blade, value)),
        }
    }

    /// Grade-0 coefficient.
    #[inline(always)]
    pub fn scalar_part(&self) -> Scalar {
        self.get(0)
    }

    /// Restriction to the blades of a single grade.
    pub fn grade_part(&self, grade: u32) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .copied()
                .filter(|&(b, _)| blade::grade(b) == grade)
                .collect(),
        }
    }

    /// Shared kernel of the three products: accumulate every blade the term
    /// lists can reach, keeping blades whose coefficients cancel so the
    /// output shape depends only on the input shapes.
    fn product(&self, other: &Self, alg: &Algebra, kind: ProductKind) -> Self {
        let table = alg.table(kind);
        let mut out = Self::zero();
        for &(a, ca) in &self.terms {
            for &(b, cb) in &other.terms {
                for t in table.entry(a, b) {
                    let c = out.get(t.blade);
                    out.set(t.blade, c + ca * cb * t.coeff);
                }
            }
        }
        out
    }

    /// Geometric product.
    pub fn gp(&self, other: &Self, alg: &Algebra) -> Self {
        self.product(other, alg, ProductKind::Geometric)
    }

    /// Inner product (symmetric contraction, scalars excluded).
    pub fn ip(&self, other: &Self, alg: &Algebra) -> Self {
        self.product(other, alg, ProductKind::Inner)
    }

    /// Outer (wedge) product.
    pub fn op(&self, other: &Self, alg: &Algebra) -> Self {
        self.product(other, alg, ProductKind::Outer)
    }

    /// Reverse involution: per-blade sign `(-1)^(k(k-1)/2)`, metric-free.
    pub fn reverse(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|&(b, c)| (b, c * blade::reverse_sign(b)))
                .collect(),
        }
    }

    /// Squared magnitude `scalar(a * reverse(a))`; may be negative or zero
    /// in non-Euclidean metrics.
    pub fn squared_norm(&self, alg: &Algebra) -> Scalar {
        self.gp(&self.reverse(), alg).scalar_part()
    }

    /// Norm `sqrt(|scalar(a * reverse(a))|)`; exactly zero for null elements.
    ///
    /// The squared norm of a null element cancels only up to float residue,
    /// which sqrt would amplify, so anything below the inverse threshold
    /// reports as exactly 0.
    pub fn norm(&self, alg: &Algebra) -> Scalar {
        let s = self.squared_norm(alg);
        if s.abs() < INVERSE_TOLERANCE {
            return 0.0;
        }
        s.abs().sqrt()
    }

    /// Versor inverse `reverse(a) / scalar(a * reverse(a))`. Null elements
    /// have no inverse.
    pub fn inverse(&self, alg: &Algebra) -> Result<Self> {
        let s = self.squared_norm(alg);
        if s.abs() < INVERSE_TOLERANCE {
            return Err(GaError::NonInvertible(
                "scalar(a * reverse(a)) is zero".to_string(),
            ));
        }
        Ok(self.reverse() * (1.0 / s))
    }

    /// Dual: geometric product with the inverse pseudoscalar.
    pub fn dual(&self, alg: &Algebra) -> Result<Self> {
        let inv = alg.pseudoscalar().inverse(alg)?;
        Ok(self.gp(&inv, alg))
    }

    /// Narrow to a fixed ascending blade shape. Coefficients outside the
    /// target above `tol` in magnitude are an error; smaller residue is
    /// dropped as numeric noise.
    pub fn narrow(&self, shape: &[u32], tol: Scalar) -> Result<Self> {
        let mut coeffs = Vec::with_capacity(shape.len());
        for &b in shape {
            coeffs.push(self.get(b));
        }
        for &(b, c) in &self.terms {
            if !shape.contains(&b) && c.abs() > tol {
                return Err(GaError::ShapeMismatch(format!(
                    "narrowing would drop blade {:#b} with coefficient {c:e}",
                    b
                )));
            }
        }
        Self::with_shape(shape, &coeffs)
    }

    /// Largest coefficient magnitude; zero for the empty multivector.
    pub fn max_abs(&self) -> Scalar {
        self.terms.iter().fold(0.0, |m, &(_, c)| m.max(c.abs()))
    }

    /// Wrap for display with an algebra's blade labels.
    pub fn display<'a>(&'a self, alg: &'a Algebra) -> Pretty<'a> {
        Pretty(self, alg)
    }
}

impl Add for &Multivector {
    type Output = Multivector;
    fn add(self, rhs: &Multivector) -> Multivector {
        let mut out = self.clone();
        for &(b, c) in &rhs.terms {
            let cur = out.get(b);
            out.set(b, cur + c);
        }
        out
    }
}

impl Sub for &Multivector {
    type Output = Multivector;
    fn sub(self, rhs: &Multivector) -> Multivector {
        let mut out = self.clone();
        for &(b, c) in &rhs.terms {
            let cur = out.get(b);
            out.set(b, cur - c);
        }
        out
    }
}

impl Add for Multivector {
    type Output = Multivector;
    fn add(self, rhs: Multivector) -> Multivector {
        &self + &rhs
    }
}

impl Sub for Multivector {
    type Output = Multivector;
    fn sub(self, rhs: Multivector) -> Multivector {
        &self - &rhs
    }
}

impl Neg for Multivector {
    type Output = Multivector;
    fn neg(mut self) -> Multivector {
        for t in &mut self.terms {
            t.1 = -t.1;
        }
        self
    }
}

impl Mul<Scalar> for Multivector {
    type Output = Multivector;
    fn mul(mut self, rhs: Scalar) -> Multivector {
        for t in &mut self.terms {
            t.1 *= rhs;
        }
        self
    }
}

impl Mul<Scalar> for &Multivector {
    type Output = Multivector;
    fn mul(self, rhs: Scalar) -> Multivector {
        self.clone() * rhs
    }
}

/// Display wrapper pairing a multivector with the labels of its algebra,
/// e.g. `1.0 + 0.5 e1i - 2.0 e12`.
pub struct Pretty<'a>(pub &'a Multivector, pub &'a Algebra);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Pretty(mv, alg) = self;
        let labels = alg.labels();
        if mv.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, &(b, c)) in mv.terms.iter().enumerate() {
            if i == 0 {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else if c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            write!(f, "{}", c.abs())?;
            if b != 0 {
                write!(f, " {}", blade::name(b, &labels))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_is_kept_through_cancellation() {
        let alg = Algebra::euclidean(2);
        let a = Multivector::from_blade(0b01, 1.0);
        let b = Multivector::from_blade(0b01, -1.0);
        let sum = &a + &b;
        assert_eq!(sum.terms(), &[(0b01, 0.0)]);
        // product shape covers the structural image even at zero
        let p = sum.gp(&Multivector::from_blade(0b10, 2.0), &alg);
        assert_eq!(p.terms(), &[(0b11, 0.0)]);
    }

    #[test]
    fn duplicate_blades_rejected() {
        assert!(Multivector::from_terms(vec![(3, 1.0), (3, 2.0)]).is_err());
    }

    #[test]
    fn narrow_policy() {
        let mv = Multivector::from_terms(vec![(0, 1.0), (1, 1e-12)]).unwrap();
        let narrowed = mv.narrow(&[0], 1e-9).unwrap();
        assert_eq!(narrowed.terms(), &[(0, 1.0)]);
        let fat = Multivector::from_terms(vec![(0, 1.0), (1, 0.5)]).unwrap();
        assert!(fat.narrow(&[0], 1e-9).is_err());
    }

    #[test]
    fn display_names() {
        let alg = Algebra::conformal();
        let mv = Multivector::from_terms(vec![(0, 1.0), (0b10010, -0.5)]).unwrap();
        assert_eq!(format!("{}", mv.display(&alg)), "1 - 0.5 e1i");
    }
}
