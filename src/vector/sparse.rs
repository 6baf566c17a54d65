// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sparse term-weight vectors.

use serde::{Deserialize, Serialize};

/// Index of a term in the per-run vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TermId(pub u32);

impl TermId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// `(term, weight)` pairs sorted by term id, zero weights omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(TermId, f64)>,
}

impl SparseVector {
    /// The all-zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from arbitrary pairs. Sorts, merges duplicate ids, drops zeros.
    pub fn from_pairs(mut pairs: Vec<(TermId, f64)>) -> Self {
        pairs.sort_by_key(|&(term, _)| term);
        let mut entries: Vec<(TermId, f64)> = Vec::with_capacity(pairs.len());
        for (term, weight) in pairs {
            match entries.last_mut() {
                Some(last) if last.0 == term => last.1 += weight,
                _ => entries.push((term, weight)),
            }
        }
        entries.retain(|&(_, weight)| weight != 0.0);
        Self { entries }
    }

    pub fn entries(&self) -> &[(TermId, f64)] {
        &self.entries
    }

    /// Number of non-zero terms.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of `term`, zero if absent.
    pub fn get(&self, term: TermId) -> f64 {
        self.entries
            .binary_search_by_key(&term, |&(t, _)| t)
            .map_or(0.0, |i| self.entries[i].1)
    }

    /// Dot product by merging the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale to unit length. Zero vectors stay zero.
    pub fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 && norm.is_finite() {
            for entry in &mut self.entries {
                entry.1 /= norm;
            }
        }
        self
    }
}
