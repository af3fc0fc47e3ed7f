// src/blade.rs
//! Combinatorial utilities over blade bitmasks.
//!
//! A blade is an unsigned integer in `[0, 2^n)`: bit i set means basis
//! vector i participates in the wedge, in canonical ascending index order.
//! All sign bookkeeping of the Cayley-table builders reduces to counting set
//! bits on one side of a given position.

use crate::types::Scalar;

/// Grade of a blade: the number of participating basis vectors.
#[inline(always)]
pub fn grade(blade: u32) -> u32 {
    blade.count_ones()
}

/// Set bits of `blade` at positions strictly below `bit`. Each one costs an
/// anticommutation sign flip when basis vector `bit` moves left past it.
#[inline(always)]
pub fn left_count(bit: u32, blade: u32) -> u32 {
    (blade & ((1 << bit) - 1)).count_ones()
}

/// Set bits of `blade` at positions strictly above `bit`; sign flips when
/// basis vector `bit` moves right past them.
#[inline(always)]
pub fn right_count(bit: u32, blade: u32) -> u32 {
    (blade >> (bit + 1)).count_ones()
}

/// Sign of merging two disjoint ascending blades into one canonical
/// ascending blade: every bit of `a` hops over the bits of `b` below it.
pub fn reorder_sign(a: u32, b: u32) -> Scalar {
    let mut swaps = 0;
    let mut rest = a;
    while rest != 0 {
        let bit = rest.trailing_zeros();
        swaps += left_count(bit, b);
        rest &= rest - 1;
    }
    if swaps % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Sign of the reverse involution: `(-1)^(k(k-1)/2)` for grade k. Pure
/// function of the blade, independent of the metric.
#[inline(always)]
pub fn reverse_sign(blade: u32) -> Scalar {
    match grade(blade) % 4 {
        0 | 1 => 1.0,
        _ => -1.0,
    }
}

/// Canonical display name of a blade, given per-axis labels: the scalar
/// blade is `"1"`, others are `e` followed by the labels of the set bits in
/// ascending order (e.g. `"e12"`, `"e1i"`, `"e0123i"`).
pub fn name(blade: u32, labels: &[&str]) -> String {
    if blade == 0 {
        return "1".to_string();
    }
    let mut out = String::from("e");
    for (i, label) in labels.iter().enumerate() {
        if blade >> i & 1 == 1 {
            out.push_str(label);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades() {
        assert_eq!(grade(0b00000), 0);
        assert_eq!(grade(0b00110), 2);
        assert_eq!(grade(0b11111), 5);
    }

    #[test]
    fn shift_counts() {
        // blade e0 e2 e3 = 0b01101
        assert_eq!(left_count(2, 0b01101), 1);
        assert_eq!(right_count(2, 0b01101), 1);
        assert_eq!(left_count(0, 0b01101), 0);
        assert_eq!(right_count(3, 0b01101), 0);
    }

    #[test]
    fn reorder_signs() {
        // e1 then e2 is already canonical; e2 then e1 costs one swap
        assert_eq!(reorder_sign(0b010, 0b100), 1.0);
        assert_eq!(reorder_sign(0b100, 0b010), -1.0);
        // e12 merged with e3 costs nothing
        assert_eq!(reorder_sign(0b0110, 0b1000), 1.0);
    }

    #[test]
    fn reverse_signs_cycle_with_grade() {
        assert_eq!(reverse_sign(0b0), 1.0);
        assert_eq!(reverse_sign(0b1), 1.0);
        assert_eq!(reverse_sign(0b11), -1.0);
        assert_eq!(reverse_sign(0b111), -1.0);
        assert_eq!(reverse_sign(0b1111), 1.0);
    }

    #[test]
    fn names() {
        let labels = ["0", "1", "2", "3", "i"];
        assert_eq!(name(0, &labels), "1");
        assert_eq!(name(0b00110, &labels), "e12");
        assert_eq!(name(0b10010, &labels), "e1i");
        assert_eq!(name(0b11111, &labels), "e0123i");
    }
}
