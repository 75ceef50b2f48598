use assignment_solver::{AssignmentSolver, OptimizationType, SolverError, SolverStep};

fn main() -> Result<(), SolverError> {
    env_logger::init();

    let mut solver: AssignmentSolver = AssignmentSolver::new();
    solver
        .notifications_mut()
        .add_listener(1, |step, solver: &mut AssignmentSolver| {
            println!("after {step}:");
            println!("{}", solver.matrix());
            if step == SolverStep::MarkZeroes {
                println!("framed: {:?}", solver.framed_zeroes());
                println!("struck out: {:?}", solver.struck_out_zeroes());
            }
        })?;

    #[rustfmt::skip]
    let costs = [
        [9, 2, 7],
        [6, 4, 3],
        [5, 8, 1],
    ];
    for optimization in [OptimizationType::Minimize, OptimizationType::Maximize] {
        solver.configure(&costs, optimization)?;
        solver.solve()?;
        if let Some(solution) = solver.solution() {
            for (agent, task) in solution.iter().enumerate() {
                println!("agent {agent} is assigned to task {task}");
            }
        }
        println!("{optimization:?}: {}", solver.optimal_value());
    }
    Ok(())
}
