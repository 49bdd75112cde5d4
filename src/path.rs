use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::{Clause, Clauses, Lit, Strategy, Var};

/// Maps every variable of a formula to a slot `0..len`, ascending by id.
#[derive(Debug, Clone, Default)]
pub struct VarIndex {
    vars: Vec<Var>,
    slots: HashMap<Var, usize>,
}

impl VarIndex {
    pub fn build(clauses: &Clauses) -> VarIndex {
        let vars: Vec<Var> = clauses.variables().into_iter().collect();
        let slots = vars.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        VarIndex { vars, slots }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn slot(&self, var: Var) -> Option<usize> {
        self.slots.get(&var).copied()
    }

    pub fn var(&self, slot: usize) -> Option<Var> {
        self.vars.get(slot).copied()
    }

    // (slot, sign) of every literal, in clause order; signs are ±1
    fn resolve(&self, clause: &Clause) -> Vec<(usize, i8)> {
        clause
            .inner()
            .iter()
            .filter_map(|lit| self.slot(lit.var()).map(|slot| (slot, lit.sign())))
            .collect()
    }
}

/// A partial assignment: `0` unassigned, `1` true, `-1` false per slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Box<[i8]>);

impl Path {
    pub fn unassigned(num_vars: usize) -> Path {
        Path(vec![0; num_vars].into_boxed_slice())
    }

    pub fn values(&self) -> &[i8] {
        &self.0
    }

    // `None` if the slot already holds the opposite sign
    fn extend(&self, slot: usize, sign: i8) -> Option<Path> {
        if self.0[slot] == -sign {
            return None;
        }
        let mut values = self.0.clone();
        values[slot] = sign;
        Some(Path(values))
    }

    /// Assigned literals, ascending by slot.
    pub fn lits<'a>(&'a self, index: &'a VarIndex) -> impl Iterator<Item = Lit> + 'a {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, &value)| value != 0)
            .filter_map(|(slot, &value)| index.var(slot).map(|var| var.lit(value > 0)))
    }

    fn extensions<'a>(&'a self, lits: &'a [(usize, i8)]) -> impl Iterator<Item = Path> + 'a {
        lits.iter()
            .filter_map(|&(slot, sign)| self.extend(slot, sign))
    }
}

/// The deduplicated set of paths consistent with every clause seen so far,
/// together with the index their slots refer to.
#[derive(Debug, Clone)]
pub struct Frontier {
    index: VarIndex,
    paths: HashSet<Path>,
}

impl Frontier {
    /// The single all-unassigned path over `index`.
    pub fn new(index: VarIndex) -> Frontier {
        let paths = HashSet::from([Path::unassigned(index.len())]);
        Frontier { index, paths }
    }

    pub fn index(&self) -> &VarIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }

    /// Extends every path by every literal of the clause and keeps the
    /// distinct consistent results. Literals over variables the index does
    /// not know cannot be assigned and extend nothing.
    pub fn advance(self, clause: &Clause, strategy: Strategy) -> Frontier {
        let lits = self.index.resolve(clause);
        let paths: HashSet<Path> = match strategy {
            Strategy::Sequential => self
                .paths
                .iter()
                .flat_map(|path| path.extensions(&lits))
                .collect(),
            Strategy::Parallel => self
                .paths
                .par_iter()
                .flat_map_iter(|path| path.extensions(&lits))
                .collect(),
        };
        Frontier {
            index: self.index,
            paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clauses(raw: Vec<Vec<i32>>) -> Clauses {
        Clauses::try_from(raw).unwrap()
    }

    fn clause(raw: Vec<i32>) -> Clause {
        Clause::try_from(raw).unwrap()
    }

    fn var(id: i32) -> Var {
        Lit::from_dimacs(id).unwrap().var()
    }

    fn values(frontier: &Frontier) -> Vec<Vec<i8>> {
        let mut values: Vec<Vec<i8>> = frontier.iter().map(|p| p.values().to_vec()).collect();
        values.sort();
        values
    }

    #[test]
    fn index_is_sorted_and_dense() {
        let index = VarIndex::build(&clauses(vec![vec![10, -3], vec![7, 3]]));
        assert_eq!(index.len(), 3);
        assert_eq!(index.slot(var(3)), Some(0));
        assert_eq!(index.slot(var(7)), Some(1));
        assert_eq!(index.slot(var(10)), Some(2));
        assert_eq!(index.slot(var(4)), None);
        assert_eq!(index.var(2), Some(var(10)));
        assert_eq!(index.resolve(&clause(vec![-10, 3, 3])), vec![(2, -1), (0, 1), (0, 1)]);
    }

    #[test]
    fn extend_respects_conflicts() {
        let path = Path::unassigned(2).extend(0, 1).unwrap();
        assert_eq!(path.values(), &[1, 0]);
        assert_eq!(path.extend(0, -1), None);
        assert_eq!(path.extend(0, 1), Some(path.clone()));
        assert_eq!(path.extend(1, -1).unwrap().values(), &[1, -1]);
    }

    #[test]
    fn paths_compare_by_value() {
        let a = Path::unassigned(3).extend(1, -1).unwrap();
        let b = Path::unassigned(3).extend(1, -1).unwrap();
        assert_eq!(a, b);
        assert_eq!(HashSet::from([a, b]).len(), 1);
    }

    #[test]
    fn advance_branches_per_literal() {
        let index = VarIndex::build(&clauses(vec![vec![1, 2, 3]]));
        let next = Frontier::new(index).advance(&clause(vec![1, 2, -3]), Strategy::Sequential);
        assert_eq!(next.len(), 3);
        let next = next.advance(&clause(vec![-2]), Strategy::Sequential);
        assert_eq!(values(&next), vec![vec![0, -1, -1], vec![1, -1, 0]]);
        // duplicate literals collapse
        let next = next.advance(&clause(vec![1, 1]), Strategy::Sequential);
        assert_eq!(values(&next), vec![vec![1, -1, -1], vec![1, -1, 0]]);
        let next = next.advance(&clause(vec![-1]), Strategy::Sequential);
        assert!(next.is_empty());
    }

    #[test]
    fn values_stay_in_range() {
        let formula = clauses(vec![vec![1, -2, 2], vec![-1, -1], vec![2, -2]]);
        let mut frontier = Frontier::new(VarIndex::build(&formula));
        for c in formula.iter() {
            frontier = frontier.advance(c, Strategy::Sequential);
            assert!(frontier
                .iter()
                .all(|path| path.values().iter().all(|v| (-1..=1).contains(v))));
        }
        assert_eq!(values(&frontier), vec![vec![-1, -1], vec![-1, 1]]);
    }

    #[test]
    fn unknown_variables_extend_nothing() {
        let index = VarIndex::build(&clauses(vec![vec![1, 2]]));
        let next = Frontier::new(index).advance(&clause(vec![9, -9]), Strategy::Sequential);
        assert!(next.is_empty());
        let index = VarIndex::build(&clauses(vec![vec![1, 2]]));
        let next = Frontier::new(index).advance(&clause(vec![9, 2]), Strategy::Parallel);
        assert_eq!(values(&next), vec![vec![0, 1]]);
    }

    #[test]
    fn empty_clause_empties_frontier() {
        let index = VarIndex::build(&clauses(vec![vec![1, 2]]));
        assert!(Frontier::new(index).advance(&clause(vec![]), Strategy::Sequential).is_empty());
        let next = Frontier::new(VarIndex::default()).advance(&clause(vec![]), Strategy::Parallel);
        assert!(next.is_empty());
    }

    #[test]
    fn parallel_matches_sequential() {
        let formula = clauses(vec![
            vec![1, -2, 3],
            vec![2, 4, -1],
            vec![-3, -4],
            vec![1, 2, 3, 4],
        ]);
        let mut seq = Frontier::new(VarIndex::build(&formula));
        let mut par = seq.clone();
        for c in formula.iter() {
            seq = seq.advance(c, Strategy::Sequential);
            par = par.advance(c, Strategy::Parallel);
            assert_eq!(values(&seq), values(&par));
        }
        assert!(!seq.is_empty());
    }

    #[test]
    fn lits_skip_unassigned() {
        let index = VarIndex::build(&clauses(vec![vec![2, 5, 9]]));
        let path = Path::unassigned(3)
            .extend(0, -1)
            .and_then(|p| p.extend(2, 1))
            .unwrap();
        let lits: Vec<i32> = path.lits(&index).map(Lit::to_dimacs).collect();
        assert_eq!(lits, vec![-2, 9]);
    }
}
