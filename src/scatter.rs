//! Clause reordering ahead of the path search.
//!
//! Scattering never changes which clauses are in a formula, only their
//! order, so it has no effect on satisfiability. It does change how fast the
//! frontier grows.

use std::{
    cmp::Reverse,
    collections::{BTreeMap, HashSet},
};

use rand::{seq::SliceRandom, Rng};

use crate::{Clause, Clauses, Var};

const CHUNKS: usize = 4;

/// Positive and negative occurrence counts of every variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occurrences(BTreeMap<Var, (usize, usize)>);

impl Occurrences {
    pub fn count(clauses: &[Clause]) -> Occurrences {
        let mut counts: BTreeMap<Var, (usize, usize)> = BTreeMap::new();
        for lit in clauses.iter().flat_map(|clause| clause.inner()) {
            let entry = counts.entry(lit.var()).or_default();
            if lit.is_positive() {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }
        Occurrences(counts)
    }

    /// Variables whose literals all have the same sign.
    pub fn pure_vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.0
            .iter()
            .filter(|(_, (pos, neg))| *pos == 0 || *neg == 0)
            .map(|(var, _)| *var)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `(distinct variables, |positive - negative|)` of a clause.
pub fn diversity(clause: &Clause) -> (usize, usize) {
    let distinct = clause
        .inner()
        .iter()
        .map(|lit| lit.var())
        .collect::<HashSet<_>>()
        .len();
    let positive = clause.inner().iter().filter(|lit| lit.is_positive()).count();
    let negative = clause.len() - positive;
    (distinct, positive.abs_diff(negative))
}

/// Sorts clauses by diversity (most distinct variables first, then the most
/// balanced signs), then shuffles each quarter of the result independently.
pub fn scatter<R: Rng + ?Sized>(clauses: Clauses, rng: &mut R) -> Clauses {
    let Clauses(mut clauses) = clauses;
    if clauses.is_empty() {
        return Clauses(clauses);
    }

    let occurrences = Occurrences::count(&clauses);
    log::trace!(
        "scattering {} clauses over {} variables ({} pure)",
        clauses.len(),
        occurrences.len(),
        occurrences.pure_vars().count()
    );

    clauses.sort_by_cached_key(|clause| {
        let (vars, imbalance) = diversity(clause);
        (Reverse(vars), imbalance)
    });

    for range in chunk_ranges(clauses.len()) {
        clauses[range].shuffle(rng);
    }
    Clauses(clauses)
}

// four contiguous ranges; the last one takes the remainder
fn chunk_ranges(len: usize) -> Vec<std::ops::Range<usize>> {
    let size = (len / CHUNKS).max(1);
    (0..CHUNKS)
        .map(|i| {
            let start = (i * size).min(len);
            let end = if i == CHUNKS - 1 {
                len
            } else {
                ((i + 1) * size).min(len)
            };
            start..end
        })
        .filter(|range| !range.is_empty())
        .collect()
}
