//! Hungarian algorithm (Kuhn–Munkres) for square assignment problems.
//!
//! [`AssignmentSolver`] pairs n agents with n tasks so that the total cost is
//! minimal, or the total productivity maximal. The solve runs in the classic
//! phases, which listeners registered on the [`NotificationHandler`] can
//! follow step by step:
//!
//! 1. reduction: every column, then every row, loses its minimum;
//! 2. covering: independent zeroes are framed, the zeroes they rule out are
//!    struck out;
//! 3. line cover and adjustment: while fewer than n zeroes are framed, a
//!    minimum set of lines covering all zeroes is marked and the smallest
//!    uncovered value is moved across it.
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use assignment_solver::{AssignmentSolver, OptimizationType, SolverStep};
//!
//! let steps = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&steps);
//!
//! let mut solver: AssignmentSolver = AssignmentSolver::new();
//! solver
//!     .notifications_mut()
//!     .add_listener(1, move |step, _| sink.borrow_mut().push(step))?;
//! solver.configure(&[[9, 2, 7], [6, 4, 3], [5, 8, 1]], OptimizationType::Maximize)?;
//! solver.solve()?;
//!
//! assert_eq!(solver.solution(), Some(vec![2, 0, 1]));
//! assert_eq!(solver.optimal_value(), 21);
//! assert_eq!(steps.borrow()[0], SolverStep::SubtractMin);
//! # Ok::<(), assignment_solver::SolverError>(())
//! ```

mod coord;
mod cost;
mod error;
mod notify;
mod solver;
mod step;

pub use coord::Coord;
pub use cost::Cost;
pub use error::SolverError;
pub use notify::{Listener, ListenerId, NotificationHandler};
pub use solver::{AssignmentSolver, OptimizationType, SolverState};
pub use step::SolverStep;
