use path_sat::{PathSolver, SolverOptions, Strategy};

fn main() -> path_sat::Result<()> {
    env_logger::init();

    #[rustfmt::skip]
    let clauses = vec![
        vec![4, -18, 19], vec![3, 18, -5], vec![-5, -8, -15], vec![-20, 7, -16], vec![10, -13, -7],
        vec![-12, -9, 17], vec![17, 19, 5], vec![-16, 9, 15], vec![11, -5, -14], vec![18, -10, 13],
        vec![-3, 11, 12], vec![-6, -17, -8], vec![-18, 14, 1], vec![-19, -15, 10], vec![12, 18, -19],
        vec![-8, 4, 7], vec![-8, -9, 4], vec![7, 17, -15], vec![12, -7, -14], vec![-10, -11, 8],
        vec![2, -15, -11], vec![9, 6, 1], vec![-11, 20, -17], vec![9, -15, 13], vec![12, -7, -17],
        vec![-18, -2, 20], vec![20, 12, 4], vec![19, 11, 14], vec![-16, 18, -4], vec![-1, -17, -19],
        vec![-13, 15, 10], vec![-12, -14, -13], vec![12, -14, -7], vec![-7, 16, 10], vec![6, 10, 7],
        vec![20, 14, -16], vec![-19, 17, 11], vec![-7, 1, -20], vec![-5, 12, 15], vec![-4, -9, -13],
        vec![12, -11, -7], vec![-5, 19, -8], vec![1, 16, 17], vec![20, -14, -15], vec![13, -4, 10],
        vec![14, 7, 10], vec![-5, 9, 20], vec![10, 1, -19], vec![-16, -15, -1], vec![16, 3, -11],
        vec![-15, -10, 4], vec![4, -15, -3], vec![-10, -16, 11], vec![-8, 12, -5], vec![14, -6, 12],
        vec![1, 6, 11], vec![-13, -5, -1], vec![-7, -2, 12], vec![1, -20, 19], vec![-2, -13, -8],
        vec![15, 18, 4], vec![-11, 14, 9], vec![-6, -15, -2], vec![5, -12, -15], vec![-6, 17, 5],
        vec![-13, 5, -19], vec![20, -1, 14], vec![9, -17, 15], vec![-5, 19, -18], vec![-12, 8, -10],
        vec![-18, 14, -4], vec![15, -9, 13], vec![9, -5, -1], vec![10, -19, -14], vec![20, 9, 4],
        vec![-9, -2, 19], vec![-5, 13, -17], vec![2, -10, -18], vec![-18, 3, 11], vec![7, -9, 17],
        vec![-15, -6, -3], vec![-2, 3, -13], vec![12, 3, -2], vec![-2, -3, 17], vec![20, -15, -16],
        vec![-5, -17, -19], vec![-20, -18, 11], vec![-9, 1, -5], vec![-19, 9, 17], vec![12, -2, 17],
    ];

    let mut solver = PathSolver::with_options(SolverOptions {
        strategy: Strategy::Parallel,
        ..Default::default()
    });
    let sat = solver.solve_dimacs(&clauses, true)?;
    println!("SAT Result: {}", if sat { "SAT" } else { "UNSAT" });
    println!("{:?}", solver.stats());
    if let Some(dnf) = solver.dnf() {
        println!("DNF terms: {}", dnf.len());
        if let Some(term) = dnf.to_dimacs().first() {
            println!("first term: {:?}", term);
        }
    }
    Ok(())
}
