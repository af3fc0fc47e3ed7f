// src/algebra.rs
//! An `Algebra` bundles a metric with its three Cayley tables.
//!
//! Construction pays the table-building cost once; every product afterwards
//! is a pair of nested loops over sparse terms with slice lookups. Algebras
//! are cheap to share by reference and all multivector products take one.

use crate::cayley::{self, ProductKind, ProductTable};
use crate::metric::Metric;
use crate::multivector::Multivector;

/// A Clifford algebra: metric plus memoized product tables.
#[derive(Debug, Clone)]
pub struct Algebra {
    metric: Metric,
    geometric: ProductTable,
    inner: ProductTable,
    outer: ProductTable,
    labels: Vec<String>,
}

impl Algebra {
    /// Build an algebra over an arbitrary metric, with per-axis labels used
    /// for blade display names.
    pub fn new(metric: Metric, labels: Vec<String>) -> Self {
        let geometric = cayley::geometric_table(&metric);
        let inner = cayley::inner_table(&geometric);
        let outer = cayley::outer_table(&metric);
        Self {
            metric,
            geometric,
            inner,
            outer,
            labels,
        }
    }

    /// Euclidean algebra Cl(n), axes labeled `1..=n`.
    pub fn euclidean(dim: usize) -> Self {
        let labels = (1..=dim).map(|i| i.to_string()).collect();
        Self::new(Metric::euclidean(dim), labels)
    }

    /// Conformal algebra Cl(4,1) in the null basis (e0, e1, e2, e3, ei).
    pub fn conformal() -> Self {
        let labels = ["0", "1", "2", "3", "i"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self::new(Metric::conformal(), labels)
    }

    #[inline(always)]
    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.metric.dim()
    }

    #[inline(always)]
    pub fn blade_count(&self) -> usize {
        self.metric.blade_count()
    }

    /// Cayley table for one product kind.
    #[inline(always)]
    pub fn table(&self, kind: ProductKind) -> &ProductTable {
        match kind {
            ProductKind::Geometric => &self.geometric,
            ProductKind::Inner => &self.inner,
            ProductKind::Outer => &self.outer,
        }
    }

    /// Per-axis display labels, in bit order.
    pub fn labels(&self) -> Vec<&str> {
        self.labels.iter().map(|s| s.as_str()).collect()
    }

    /// Unit pseudoscalar, the top-grade blade.
    pub fn pseudoscalar(&self) -> Multivector {
        Multivector::from_blade((self.blade_count() - 1) as u32, 1.0)
    }
}
