// src/cga/mod.rs
//! Conformal model of 3-D Euclidean space, Cl(4,1) in the null basis.
//!
//! Basis order (e0, e1, e2, e3, ei) maps to bits 0..=4: e0 is the origin,
//! ei the point at infinity, with e0 . ei = -1 and both null. Geometric
//! objects and versors are thin wrappers over fixed blade shapes.

pub mod dilator;
pub mod motor;
pub mod object;
pub mod rotor;
pub mod translator;
pub mod versor;

pub use dilator::Dilator;
pub use motor::Motor;
pub use object::{Circle, GeometricObject, Line, Plane, Point, PointPair, Sphere};
pub use rotor::Rotor;
pub use translator::Translator;
pub use versor::Versor;

/// Basis blades of the conformal algebra, named in ascending index order.
pub mod blades {
    pub const SCALAR: u32 = 0;
    pub const E0: u32 = 1 << 0;
    pub const E1: u32 = 1 << 1;
    pub const E2: u32 = 1 << 2;
    pub const E3: u32 = 1 << 3;
    pub const EI: u32 = 1 << 4;
    pub const E01: u32 = E0 | E1;
    pub const E02: u32 = E0 | E2;
    pub const E12: u32 = E1 | E2;
    pub const E03: u32 = E0 | E3;
    pub const E13: u32 = E1 | E3;
    pub const E23: u32 = E2 | E3;
    pub const E0I: u32 = E0 | EI;
    pub const E1I: u32 = E1 | EI;
    pub const E2I: u32 = E2 | EI;
    pub const E3I: u32 = E3 | EI;
    pub const E012: u32 = E0 | E1 | E2;
    pub const E013: u32 = E0 | E1 | E3;
    pub const E023: u32 = E0 | E2 | E3;
    pub const E123: u32 = E1 | E2 | E3;
    pub const E0123: u32 = E0 | E1 | E2 | E3;
    pub const E01I: u32 = E0 | E1 | EI;
    pub const E02I: u32 = E0 | E2 | EI;
    pub const E12I: u32 = E1 | E2 | EI;
    pub const E03I: u32 = E0 | E3 | EI;
    pub const E13I: u32 = E1 | E3 | EI;
    pub const E23I: u32 = E2 | E3 | EI;
    pub const E012I: u32 = E0 | E1 | E2 | EI;
    pub const E013I: u32 = E0 | E1 | E3 | EI;
    pub const E023I: u32 = E0 | E2 | E3 | EI;
    pub const E123I: u32 = E1 | E2 | E3 | EI;
    pub const E0123I: u32 = E0 | E1 | E2 | E3 | EI;
}

/// Fixed ascending blade shapes of the conformal objects and versors.
pub mod shapes {
    use super::blades::*;

    pub const POINT: &[u32] = &[E0, E1, E2, E3, EI];
    pub const POINT_PAIR: &[u32] = &[E01, E02, E12, E03, E13, E23, E0I, E1I, E2I, E3I];
    pub const CIRCLE: &[u32] = &[E012, E013, E023, E123, E01I, E02I, E12I, E03I, E13I, E23I];
    pub const PLANE: &[u32] = &[E012I, E013I, E023I, E123I];
    pub const LINE: &[u32] = &[E01I, E02I, E12I, E03I, E13I, E23I];
    pub const SPHERE: &[u32] = &[E0123, E012I, E013I, E023I, E123I];

    pub const ROTOR: &[u32] = &[SCALAR, E12, E13, E23];
    pub const ROTOR_GENERATOR: &[u32] = &[E12, E13, E23];
    pub const TRANSLATOR: &[u32] = &[SCALAR, E1I, E2I, E3I];
    pub const TRANSLATOR_GENERATOR: &[u32] = &[E1I, E2I, E3I];
    pub const DILATOR: &[u32] = &[SCALAR, E0I];
    pub const MOTOR: &[u32] = &[SCALAR, E12, E13, E23, E1I, E2I, E3I, E123I];
    pub const MOTOR_GENERATOR: &[u32] = &[E12, E13, E23, E1I, E2I, E3I];
}
