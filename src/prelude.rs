// src/prelude.rs
//! The "everything" import for cga_engine.
//!
//! Brings you the most commonly used types with one glob:
//! ```rust
//! use cga_engine::prelude::*;
//! ```

// core data types
pub use crate::algebra::Algebra;
pub use crate::metric::Metric;
pub use crate::multivector::Multivector;
pub use crate::vector::Vec3;

// errors
pub use crate::error::{GaError, Result};

// conformal model
pub use crate::cga::{
    blades, shapes, Circle, Dilator, GeometricObject, Line, Motor, Plane, Point, PointPair,
    Rotor, Sphere, Translator, Versor,
};
