// src/cayley.rs
//! Per-metric Cayley table builders for the geometric, inner and outer
//! products.
//!
//! Each table maps an ordered pair of basis blades to a short list of
//! `(result blade, signed coefficient)` terms. For orthogonal metrics every
//! entry has at most one term; a non-orthogonal metric such as the conformal
//! null basis produces mixed entries (`e0 * ei = -1 + e0i`), which is why
//! the entries are lists. Tables are built once per metric and immutable
//! afterwards, so lookups are plain slice reads.

use crate::blade;
use crate::metric::Metric;
use crate::types::Scalar;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// The three product kinds sharing the blade-pair machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Geometric,
    Inner,
    Outer,
}

/// One signed term of a basis-blade product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CayleyTerm {
    pub blade: u32,
    pub coeff: Scalar,
}

/// Term list of a single table entry; stays inline for the common one- and
/// two-term cases.
pub type TermList = SmallVec<[CayleyTerm; 2]>;

/// Dense `(2^n) x (2^n)` lookup table for one product kind.
#[derive(Debug, Clone)]
pub struct ProductTable {
    blade_count: usize,
    entries: Vec<TermList>,
}

impl ProductTable {
    /// Terms of `blade_a * blade_b`; empty when the pair annihilates.
    #[inline(always)]
    pub fn entry(&self, a: u32, b: u32) -> &[CayleyTerm] {
        &self.entries[a as usize * self.blade_count + b as usize]
    }

    pub fn blade_count(&self) -> usize {
        self.blade_count
    }
}

/// Product of basis vector `i` with a blade: the alternating contraction
/// expansion plus the wedge term.
///
/// `e_i C = e_i _| C + e_i /\ C`, where the contraction removes each basis
/// vector j of C with coefficient `metric[i][j] * (-1)^(set bits below j)`,
/// and the wedge prepends e_i with the analogous reorder sign.
fn vector_times_blade(metric: &Metric, i: u32, blade: u32) -> TermList {
    let mut out = TermList::new();
    let mut rest = blade;
    while rest != 0 {
        let j = rest.trailing_zeros();
        let m_ij = metric.get(i as usize, j as usize);
        if m_ij != 0.0 {
            let sign = if blade::left_count(j, blade) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            out.push(CayleyTerm {
                blade: blade ^ (1 << j),
                coeff: m_ij * sign,
            });
        }
        rest &= rest - 1;
    }
    if blade >> i & 1 == 0 {
        let sign = if blade::left_count(i, blade) % 2 == 0 {
            1.0
        } else {
            -1.0
        };
        out.push(CayleyTerm {
            blade: blade | (1 << i),
            coeff: sign,
        });
    }
    out
}

/// Contraction part only: `e_i _| C`.
fn contract_vector(metric: &Metric, i: u32, blade: u32) -> TermList {
    let mut out = TermList::new();
    let mut rest = blade;
    while rest != 0 {
        let j = rest.trailing_zeros();
        let m_ij = metric.get(i as usize, j as usize);
        if m_ij != 0.0 {
            let sign = if blade::left_count(j, blade) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            out.push(CayleyTerm {
                blade: blade ^ (1 << j),
                coeff: m_ij * sign,
            });
        }
        rest &= rest - 1;
    }
    out
}

fn collect(acc: BTreeMap<u32, Scalar>) -> TermList {
    acc.into_iter()
        .filter(|&(_, c)| c != 0.0)
        .map(|(blade, coeff)| CayleyTerm { blade, coeff })
        .collect()
}

/// Build the geometric-product table.
///
/// Uses the exact recursive split on the lowest basis vector of the left
/// blade, `A B = e_i (rest B) - (e_i _| rest) B` with `A = e_i /\ rest`,
/// realized as dynamic programming: both `rest` and every contraction image
/// are strictly smaller bitmasks, so their rows are already built.
pub fn geometric_table(metric: &Metric) -> ProductTable {
    let m = metric.blade_count();
    let mut entries: Vec<TermList> = Vec::with_capacity(m * m);
    for a in 0..m as u32 {
        for b in 0..m as u32 {
            if a == 0 {
                entries.push(SmallVec::from_slice(&[CayleyTerm {
                    blade: b,
                    coeff: 1.0,
                }]));
                continue;
            }
            let i = a.trailing_zeros();
            let rest = a & (a - 1);
            let mut acc: BTreeMap<u32, Scalar> = BTreeMap::new();
            for t in &entries[rest as usize * m + b as usize] {
                for u in vector_times_blade(metric, i, t.blade) {
                    *acc.entry(u.blade).or_insert(0.0) += t.coeff * u.coeff;
                }
            }
            for c in contract_vector(metric, i, rest) {
                for t in &entries[c.blade as usize * m + b as usize] {
                    *acc.entry(t.blade).or_insert(0.0) -= c.coeff * t.coeff;
                }
            }
            entries.push(collect(acc));
        }
    }
    ProductTable {
        blade_count: m,
        entries,
    }
}

/// Build the outer-product table: zero whenever a basis vector is shared,
/// otherwise the merged blade with the canonical reorder sign.
pub fn outer_table(metric: &Metric) -> ProductTable {
    let m = metric.blade_count();
    let mut entries: Vec<TermList> = Vec::with_capacity(m * m);
    for a in 0..m as u32 {
        for b in 0..m as u32 {
            if a & b != 0 {
                entries.push(TermList::new());
            } else {
                entries.push(SmallVec::from_slice(&[CayleyTerm {
                    blade: a ^ b,
                    coeff: blade::reorder_sign(a, b),
                }]));
            }
        }
    }
    ProductTable {
        blade_count: m,
        entries,
    }
}

/// Build the inner-product table as the grade filter of the geometric one:
/// keep terms of grade `|grade(a) - grade(b)|`, and zero out any pair
/// involving the scalar blade (no contraction can occur there).
pub fn inner_table(geometric: &ProductTable) -> ProductTable {
    let m = geometric.blade_count();
    let mut entries: Vec<TermList> = Vec::with_capacity(m * m);
    for a in 0..m as u32 {
        for b in 0..m as u32 {
            if a == 0 || b == 0 {
                entries.push(TermList::new());
                continue;
            }
            let target = blade::grade(a).abs_diff(blade::grade(b));
            entries.push(
                geometric
                    .entry(a, b)
                    .iter()
                    .copied()
                    .filter(|t| blade::grade(t.blade) == target)
                    .collect(),
            );
        }
    }
    ProductTable {
        blade_count: m,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(table: &ProductTable, a: u32, b: u32) -> (u32, Scalar) {
        let e = table.entry(a, b);
        assert_eq!(e.len(), 1, "expected a single term for {a:#b} * {b:#b}");
        (e[0].blade, e[0].coeff)
    }

    #[test]
    fn euclidean_geometric_basics() {
        let g = geometric_table(&Metric::euclidean(3));
        // e1 * e1 = 1
        assert_eq!(term(&g, 0b001, 0b001), (0, 1.0));
        // e1 * e2 = e12, e2 * e1 = -e12
        assert_eq!(term(&g, 0b001, 0b010), (0b011, 1.0));
        assert_eq!(term(&g, 0b010, 0b001), (0b011, -1.0));
        // e12 * e12 = -1
        assert_eq!(term(&g, 0b011, 0b011), (0, -1.0));
        // pseudoscalar squares to -1 in Cl(3)
        assert_eq!(term(&g, 0b111, 0b111), (0, -1.0));
    }

    #[test]
    fn conformal_null_basis() {
        let g = geometric_table(&Metric::conformal());
        let e0 = 1 << 0;
        let ei = 1 << 4;
        // e0 and ei are null
        assert!(g.entry(e0, e0).is_empty());
        assert!(g.entry(ei, ei).is_empty());
        // e0 * ei = -1 + e0i: the mixed two-term entry
        let e = g.entry(e0, ei);
        assert_eq!(e.len(), 2);
        assert_eq!((e[0].blade, e[0].coeff), (0, -1.0));
        assert_eq!((e[1].blade, e[1].coeff), (e0 | ei, 1.0));
        // e0i * e0i = 1 (hyperbolic plane)
        assert_eq!(term(&g, e0 | ei, e0 | ei), (0, 1.0));
        // e1i * e1i = 0 (null translation generator)
        assert!(g.entry(0b10010, 0b10010).is_empty());
    }

    #[test]
    fn outer_nilpotent_and_reorder() {
        let o = outer_table(&Metric::euclidean(3));
        assert!(o.entry(0b001, 0b001).is_empty());
        assert_eq!(term(&o, 0b001, 0b010), (0b011, 1.0));
        assert_eq!(term(&o, 0b010, 0b001), (0b011, -1.0));
    }

    #[test]
    fn inner_grade_filter() {
        let metric = Metric::conformal();
        let g = geometric_table(&metric);
        let i = inner_table(&g);
        // scalar pairs never contract
        assert!(i.entry(0, 0b00110).is_empty());
        assert!(i.entry(0b00110, 0).is_empty());
        // e0 . ei = -1, without the bivector term
        let e = i.entry(1 << 0, 1 << 4);
        assert_eq!(e.len(), 1);
        assert_eq!((e[0].blade, e[0].coeff), (0, -1.0));
        // e1 . e12 = e2
        assert_eq!(term(&i, 0b00010, 0b00110), (0b00100, 1.0));
    }
}
