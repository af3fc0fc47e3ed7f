//! # cga_engine Quickstart
//!
//! ```rust
//! use cga_engine::prelude::*;
//!
//! // Rotate the point (1,0,0) by 90° about the Z axis
//! let alg = Algebra::conformal();
//! let p = Point::new(1.0, 0.0, 0.0);
//! let g = Multivector::from_blade(blades::E12, std::f64::consts::FRAC_PI_2);
//! let r = Rotor::exp(&g, &alg).unwrap();
//! let rotated = r.apply(&p, &alg).unwrap().euclidean().unwrap();
//!
//! // Should end up at (0,1,0)
//! const EPS: f64 = 1e-9;
//! assert!(rotated.x.abs() < EPS);
//! assert!((rotated.y - 1.0).abs() < EPS);
//! assert!(rotated.z.abs() < EPS);
//! ```

// Core modules
pub mod algebra;
pub mod blade;
pub mod cayley;
pub mod error;
pub mod metric;
pub mod multivector;
pub mod prelude;
pub mod types;
pub mod vector;

// Conformal model
pub mod cga;

// --- Public API exports ---

pub use algebra::Algebra;
pub use cayley::{CayleyTerm, ProductKind, ProductTable};
pub use error::{GaError, Result};
pub use metric::Metric;
pub use multivector::Multivector;
pub use types::Scalar;
pub use vector::Vec3;

pub use cga::{
    blades, shapes, Circle, Dilator, GeometricObject, Line, Motor, Plane, Point, PointPair,
    Rotor, Sphere, Translator, Versor,
};
