use path_sat::{Clauses, Frontier, PathSolver, SolverOptions, Strategy, VarIndex};
use rand::{rngs::StdRng, Rng, SeedableRng};

const MAX_VAR: i32 = 8;

fn create_rand_cnf(rng: &mut StdRng) -> Vec<Vec<i32>> {
    (0..rng.gen_range(0..24))
        .map(|_| {
            (0..rng.gen_range(1..5))
                .map(|_| {
                    let var = rng.gen_range(1..=MAX_VAR);
                    if rng.gen_bool(0.5) {
                        var
                    } else {
                        -var
                    }
                })
                .collect()
        })
        .collect()
}

fn solve_by_testing_all_combinations(clauses: &[Vec<i32>]) -> bool {
    (0u32..1 << MAX_VAR).any(|bits| {
        clauses.iter().all(|clause| {
            clause.iter().any(|&lit| {
                let value = bits & (1 << (lit.unsigned_abs() - 1)) != 0;
                value == (lit > 0)
            })
        })
    })
}

#[test]
fn agrees_with_brute_force() {
    let mut rng = StdRng::seed_from_u64(2025);
    for round in 0..200 {
        let raw = create_rand_cnf(&mut rng);
        let expected = solve_by_testing_all_combinations(&raw);
        let strategy = if round % 2 == 0 {
            Strategy::Sequential
        } else {
            Strategy::Parallel
        };
        let mut solver = PathSolver::with_options(SolverOptions {
            seed: Some(round),
            strategy,
            ..Default::default()
        });
        let result = solver.solve_dimacs(&raw, true).unwrap();
        assert_eq!(result, expected, "wrong verdict for {:?}", raw);

        if result {
            let clauses = Clauses::try_from(raw.as_slice()).unwrap();
            let dnf = solver.dnf().unwrap();
            assert!(dnf.satisfies(&clauses), "unsound certificate {} for {:?}", dnf, raw);
            assert_eq!(dnf.is_empty(), raw.is_empty());
        }
    }
}

#[test]
fn verdict_ignores_clause_order() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let raw = create_rand_cnf(&mut rng);
        let mut reversed = raw.clone();
        reversed.reverse();
        let mut solver = PathSolver::with_options(SolverOptions {
            scatter: false,
            ..Default::default()
        });
        let forward = solver.solve_dimacs(&raw, false).unwrap();
        let backward = solver.solve_dimacs(&reversed, false).unwrap();
        assert_eq!(forward, backward, "{:?}", raw);
    }
}

#[test]
fn frontier_only_narrows() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let clauses = Clauses::try_from(create_rand_cnf(&mut rng)).unwrap();
        let mut frontier = Frontier::new(VarIndex::build(&clauses));
        for clause in clauses.iter() {
            let old = frontier.clone();
            frontier = frontier.advance(clause, Strategy::Sequential);
            // every new path extends some old one
            for path in frontier.iter() {
                assert!(old.iter().any(|prev| {
                    prev.values()
                        .iter()
                        .zip(path.values())
                        .all(|(&o, &n)| o == 0 || o == n)
                }));
            }
            if frontier.is_empty() {
                break;
            }
        }
        if frontier.is_empty() {
            for clause in clauses.iter() {
                frontier = frontier.advance(clause, Strategy::Sequential);
                assert!(frontier.is_empty());
            }
        }
    }
}
