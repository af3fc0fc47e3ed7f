// src/cga/object.rs
//! Conformal geometric objects: points, planes, lines and spheres.
//!
//! Each object is a multivector pinned to a fixed blade shape, so versor
//! application can narrow its sandwich result back to the same type.

use crate::algebra::Algebra;
use crate::cga::blades;
use crate::cga::shapes;
use crate::error::{GaError, Result};
use crate::multivector::Multivector;
use crate::types::{Scalar, INVERSE_TOLERANCE, SHAPE_TOLERANCE};
use crate::vector::Vec3;

/// A multivector bound to a fixed blade shape.
pub trait GeometricObject: Sized {
    const SHAPE: &'static [u32];

    /// Wrap a multivector already matching `SHAPE`.
    fn from_shaped(mv: Multivector) -> Self;

    fn multivector(&self) -> &Multivector;

    fn into_multivector(self) -> Multivector;

    /// Narrow an arbitrary multivector into this shape; residue above the
    /// shape tolerance is an error.
    fn from_multivector(mv: &Multivector) -> Result<Self> {
        Ok(Self::from_shaped(mv.narrow(Self::SHAPE, SHAPE_TOLERANCE)?))
    }
}

macro_rules! geometric_object {
    ($ty:ident, $shape:path) => {
        impl GeometricObject for $ty {
            const SHAPE: &'static [u32] = $shape;

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
    };
}

/// Conformal point: `e0 + x e1 + y e2 + z e3 + 0.5 |x|^2 ei`, a null vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    mv: Multivector,
}

geometric_object!(Point, shapes::POINT);

impl Point {
    /// Embed a Euclidean position.
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        let w = 0.5 * (x * x + y * y + z * z);
        Self {
            mv: Multivector::from_sorted_terms(vec![
                (blades::E0, 1.0),
                (blades::E1, x),
                (blades::E2, y),
                (blades::E3, z),
                (blades::EI, w),
            ]),
        }
    }

    pub fn from_vec(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// The origin, plain `e0`.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Project back to Euclidean coordinates by dividing through the e0
    /// weight. A point at infinity has no Euclidean image.
    pub fn euclidean(&self) -> Result<Vec3> {
        let w = self.mv.get(blades::E0);
        if w.abs() < INVERSE_TOLERANCE {
            return Err(GaError::NonInvertible(
                "point has zero projective weight".to_string(),
            ));
        }
        Ok(Vec3::new(
            self.mv.get(blades::E1) / w,
            self.mv.get(blades::E2) / w,
            self.mv.get(blades::E3) / w,
        ))
    }
}

/// Point pair, the grade-2 wedge of two conformal points. The round
/// counterpart of a line segment's endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPair {
    mv: Multivector,
}

geometric_object!(PointPair, shapes::POINT_PAIR);

impl PointPair {
    pub fn new(alg: &Algebra, p: &Point, q: &Point) -> Result<Self> {
        let outer = p.multivector().op(q.multivector(), alg);
        Self::from_multivector(&outer)
    }
}

/// Circle through three conformal points, `p /\ q /\ r`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    mv: Multivector,
}

geometric_object!(Circle, shapes::CIRCLE);

impl Circle {
    pub fn through_points(alg: &Algebra, p: &Point, q: &Point, r: &Point) -> Result<Self> {
        let outer = p
            .multivector()
            .op(q.multivector(), alg)
            .op(r.multivector(), alg);
        Self::from_multivector(&outer)
    }
}

/// Conformal plane, the grade-4 dual of `n + d ei` for unit normal n and
/// signed distance d.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    mv: Multivector,
}

geometric_object!(Plane, shapes::PLANE);

impl Plane {
    /// Plane with the given normal at signed distance `d` from the origin.
    pub fn new(alg: &Algebra, normal: Vec3, d: Scalar) -> Result<Self> {
        let n = normal.normalized();
        let support = Multivector::from_terms(vec![
            (blades::E1, n.x),
            (blades::E2, n.y),
            (blades::E3, n.z),
            (blades::EI, d),
        ])?;
        Self::from_multivector(&support.dual(alg)?)
    }

    /// Plane through three points, `p /\ q /\ r /\ ei`.
    pub fn through_points(alg: &Algebra, p: &Point, q: &Point, r: &Point) -> Result<Self> {
        let ei = Multivector::from_blade(blades::EI, 1.0);
        let outer = p
            .multivector()
            .op(q.multivector(), alg)
            .op(r.multivector(), alg)
            .op(&ei, alg);
        Self::from_multivector(&outer)
    }
}

/// Conformal line through two points, `p /\ q /\ ei`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    mv: Multivector,
}

geometric_object!(Line, shapes::LINE);

impl Line {
    pub fn through_points(alg: &Algebra, p: &Point, q: &Point) -> Result<Self> {
        let ei = Multivector::from_blade(blades::EI, 1.0);
        let outer = p.multivector().op(q.multivector(), alg).op(&ei, alg);
        Self::from_multivector(&outer)
    }
}

/// Conformal sphere, the grade-4 dual of `center - 0.5 r^2 ei`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    mv: Multivector,
}

geometric_object!(Sphere, shapes::SPHERE);

impl Sphere {
    pub fn new(alg: &Algebra, center: Vec3, radius: Scalar) -> Result<Self> {
        let c = Point::from_vec(center).into_multivector();
        let ei = Multivector::from_blade(blades::EI, 0.5 * radius * radius);
        let support = &c - &ei;
        Self::from_multivector(&support.dual(alg)?)
    }
}
