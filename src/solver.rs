use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{scatter, Clauses, Dnf, Frontier, Result, Strategy, VarIndex};

#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Seed for clause scattering; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub scatter: bool,
    pub strategy: Strategy,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            seed: None,
            scatter: true,
            strategy: Strategy::Sequential,
        }
    }
}

/// Counters from the most recent solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub num_vars: usize,
    // includes the clause that emptied the frontier
    pub clauses_processed: usize,
    pub peak_frontier: usize,
    pub final_frontier: usize,
}

/// Breadth-first path search over the clauses of a CNF formula.
///
/// Every clause extends each path of the frontier once per literal; paths
/// that would flip an assigned variable are dropped, the rest are merged by
/// value. The formula is unsatisfiable as soon as the frontier is empty.
#[derive(Debug)]
pub struct PathSolver<R = StdRng> {
    options: SolverOptions,
    rng: R,
    dnf: Option<Dnf>,
    stats: SolveStats,
}

impl PathSolver<StdRng> {
    pub fn new() -> Self {
        Self::with_options(SolverOptions::default())
    }

    pub fn with_options(options: SolverOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, options)
    }
}

impl Default for PathSolver<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PathSolver<R> {
    /// `options.seed` is ignored, `rng` drives the scattering.
    pub fn with_rng(rng: R, options: SolverOptions) -> Self {
        PathSolver {
            options,
            rng,
            dnf: None,
            stats: SolveStats::default(),
        }
    }

    /// The certificate of the last solve, if it was satisfiable and asked
    /// for one.
    pub fn dnf(&self) -> Option<&Dnf> {
        self.dnf.as_ref()
    }

    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Returns `true` iff the formula is satisfiable.
    pub fn solve(&mut self, clauses: &Clauses, generate_dnf: bool) -> bool {
        self.dnf = None;
        let clauses = if self.options.scatter {
            scatter::scatter(clauses.clone(), &mut self.rng)
        } else {
            clauses.clone()
        };

        let index = VarIndex::build(&clauses);
        let num_vars = index.len();
        log::debug!(
            "solving {} clauses over {} variables ({:?})",
            clauses.len(),
            num_vars,
            self.options.strategy
        );

        let mut frontier = Frontier::new(index);
        let mut stats = SolveStats {
            num_vars,
            peak_frontier: frontier.len(),
            ..Default::default()
        };

        for (i, clause) in clauses.iter().enumerate() {
            frontier = frontier.advance(clause, self.options.strategy);
            stats.clauses_processed += 1;
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
            log::trace!("clause {}: {} paths", i, frontier.len());

            if frontier.is_empty() {
                log::debug!("UNSAT: no path survives clause {} {:?}", i, clause);
                self.stats = stats;
                return false;
            }
        }

        stats.final_frontier = frontier.len();
        self.stats = stats;
        log::debug!(
            "SAT: {} paths survive, peak {}",
            stats.final_frontier,
            stats.peak_frontier
        );

        if generate_dnf {
            self.dnf = Some(Dnf::from_frontier(&frontier));
        }
        true
    }

    /// Validates dimacs-style clauses, then solves them.
    pub fn solve_dimacs(&mut self, clauses: &[Vec<i32>], generate_dnf: bool) -> Result<bool> {
        let clauses = Clauses::try_from(clauses)?;
        Ok(self.solve(&clauses, generate_dnf))
    }
}
