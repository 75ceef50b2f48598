use assignment_solver::{AssignmentSolver, OptimizationType, SolverError};

const ASSIGNMENT_SIZE: usize = 64;
const N: usize = 100;

fn main() -> Result<(), SolverError> {
    env_logger::init();

    let mut solver = AssignmentSolver::new();
    let mut total_cost = 0_i64;
    for _ in 0..N {
        let costs = nalgebra::DMatrix::<u16>::new_random(ASSIGNMENT_SIZE, ASSIGNMENT_SIZE)
            .map(i64::from);
        solver.configure_matrix(&costs, OptimizationType::Minimize)?;
        solver.solve()?;
        total_cost += solver
            .solution()
            .into_iter()
            .flatten()
            .enumerate()
            .map(|a| costs[a])
            .sum::<i64>();
    }

    println!("total: {total_cost}");
    Ok(())
}
