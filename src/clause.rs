use std::collections::BTreeSet;

use crate::{
    error::{Error, Result},
    lit::{Lit, Var},
};

/// A disjunction of literals. Duplicates and opposite literals are kept as
/// given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause(pub(crate) Vec<Lit>);

impl Clause {
    pub fn new(lits: Vec<Lit>) -> Clause {
        Clause(lits)
    }

    pub fn inner(&self) -> &[Lit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_dimacs(&self) -> Vec<i32> {
        self.0.iter().map(|lit| lit.to_dimacs()).collect()
    }

    // `index` is the clause's position in its formula, for error reports
    fn parse(index: usize, value: &[i32]) -> Result<Clause> {
        let mut clause = Vec::with_capacity(value.len());
        for (position, &lit) in value.iter().enumerate() {
            match Lit::from_dimacs(lit) {
                Some(lit) => clause.push(lit),
                None if lit == 0 => {
                    return Err(Error::ZeroLiteral {
                        clause: index,
                        position,
                    })
                }
                None => return Err(Error::LiteralOutOfRange(lit)),
            }
        }
        Ok(Clause(clause))
    }
}

impl TryFrom<&[i32]> for Clause {
    type Error = Error;

    fn try_from(value: &[i32]) -> Result<Self> {
        Clause::parse(0, value)
    }
}

impl TryFrom<Vec<i32>> for Clause {
    type Error = Error;

    fn try_from(value: Vec<i32>) -> Result<Self> {
        Clause::parse(0, &value)
    }
}

/// A CNF formula: the conjunction of its clauses, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clauses(pub(crate) Vec<Clause>);

impl Clauses {
    pub fn inner(&self) -> &[Clause] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.0.iter()
    }

    /// Distinct variables of the formula, ascending.
    pub fn variables(&self) -> BTreeSet<Var> {
        self.0
            .iter()
            .flat_map(|clause| clause.0.iter().map(|lit| lit.var()))
            .collect()
    }

    pub fn to_dimacs(&self) -> Vec<Vec<i32>> {
        self.0.iter().map(Clause::to_dimacs).collect()
    }
}

impl From<Vec<Clause>> for Clauses {
    fn from(value: Vec<Clause>) -> Self {
        Clauses(value)
    }
}

impl TryFrom<&[Vec<i32>]> for Clauses {
    type Error = Error;

    fn try_from(value: &[Vec<i32>]) -> Result<Self> {
        let mut clauses = Vec::with_capacity(value.len());
        for (index, clause) in value.iter().enumerate() {
            clauses.push(Clause::parse(index, clause)?);
        }
        Ok(Clauses(clauses))
    }
}

impl TryFrom<Vec<Vec<i32>>> for Clauses {
    type Error = Error;

    fn try_from(value: Vec<Vec<i32>>) -> Result<Self> {
        Clauses::try_from(value.as_slice())
    }
}
