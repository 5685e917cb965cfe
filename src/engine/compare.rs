//! Instruction ranking.
//!
//! When several instructions compete for the same slot (two `support` links
//! both applicable to one package), the winner is decided by a total, stable
//! order. The policy, most significant first:
//!
//! 1. Package-scoped beats wildcard-scoped.
//! 2. More payload tokens beats fewer (more specific rule).
//! 3. Later insertion index beats earlier (later sources override).
//!
//! Step 3 compares distinct indices, so the order is strict for any two
//! registry entries: antisymmetric, transitive, and independent of
//! evaluation order. Repeated resolution over the same registry state is
//! therefore deterministic.
//!
//! The policy lives entirely behind [`RankKey`]; the resolver sorts by key
//! and never re-derives these comparisons ad hoc.

use std::cmp::Ordering;

use crate::Instruction;

/// Sort key encoding the ranking policy.
///
/// Derived `Ord` is lexicographic over the fields, which matches the policy
/// exactly: `scoped` (true > false), then `payload`, then `index`. Greater
/// key = preferred instruction, so sort descending for best-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    scoped: bool,
    payload: usize,
    index: usize,
}

impl RankKey {
    /// Key for `instruction` registered at insertion position `index`.
    pub fn new(instruction: &Instruction, index: usize) -> Self {
        RankKey { scoped: !instruction.is_wildcard(), payload: instruction.payload_len(), index }
    }
}

/// Three-way comparison of two registry entries by rank.
///
/// `Ordering::Greater` means `a` outranks `b`.
pub fn compare(a: &Instruction, a_index: usize, b: &Instruction, b_index: usize) -> Ordering {
    RankKey::new(a, a_index).cmp(&RankKey::new(b, b_index))
}
