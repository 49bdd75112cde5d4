mod clause;
mod dnf;
mod error;
mod lit;
mod path;
pub mod scatter;
mod solver;

pub use clause::{Clause, Clauses};
pub use dnf::Dnf;
pub use error::{Error, Result};
pub use lit::{Lit, Var};
pub use path::{Frontier, Path, VarIndex};
pub use solver::{PathSolver, SolveStats, SolverOptions};

/// How a clause's extensions are computed across the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Sequential,
    /// Per-path extensions run on the rayon pool.
    Parallel,
}
