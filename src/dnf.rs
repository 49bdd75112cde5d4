use std::fmt;

use crate::{Clause, Clauses, Frontier, Lit};

/// Satisfying partial assignments found by a solve, one term per surviving
/// path. This is a certificate, not an enumeration of every model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dnf(pub(crate) Vec<Vec<Lit>>);

impl Dnf {
    /// Terms list their literals by ascending variable; terms are sorted.
    /// All-unassigned paths yield no term.
    pub fn from_frontier(frontier: &Frontier) -> Dnf {
        let index = frontier.index();
        let mut terms: Vec<Vec<Lit>> = frontier
            .iter()
            .map(|path| path.lits(index).collect::<Vec<_>>())
            .filter(|term| !term.is_empty())
            .collect();
        terms.sort();
        Dnf(terms)
    }

    pub fn terms(&self) -> &[Vec<Lit>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every term, asserted on its own, satisfies every clause.
    pub fn satisfies(&self, clauses: &Clauses) -> bool {
        self.0
            .iter()
            .all(|term| clauses.iter().all(|clause| satisfied_by(clause, term)))
    }

    pub fn to_dimacs(&self) -> Vec<Vec<i32>> {
        self.0
            .iter()
            .map(|term| term.iter().map(|lit| lit.to_dimacs()).collect())
            .collect()
    }
}

fn satisfied_by(clause: &Clause, term: &[Lit]) -> bool {
    clause.inner().iter().any(|lit| term.contains(lit))
}

impl fmt::Display for Dnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "false");
        }
        let result = self
            .0
            .iter()
            .map(|term| {
                let lits = term
                    .iter()
                    .map(|lit| lit.to_string())
                    .collect::<Vec<_>>()
                    .join(" ∧ ");
                format!("({})", lits)
            })
            .collect::<Vec<_>>()
            .join(" ∨ ");
        write!(f, "{}", result)
    }
}
