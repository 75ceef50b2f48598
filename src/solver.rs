use std::collections::BTreeSet;

use log::{debug, trace};
use nalgebra::DMatrix;
use num_traits::NumCast;

use crate::{Coord, Cost, NotificationHandler, SolverError, SolverStep};

mod augment;
mod cover;
mod reduce;

/// Whether the matrix holds costs to minimize or productivities to maximize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum OptimizationType {
    Minimize,
    Maximize,
}

/// Lifecycle of an [`AssignmentSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum SolverState {
    /// No matrix has been configured yet.
    #[default]
    Uninitialized,
    /// A matrix is loaded and ready to be solved.
    Configured,
    /// [`AssignmentSolver::solve`] is running; only listeners observe this.
    Solving,
    /// The last solve failed; the solver has to be configured again.
    Error,
    /// An optimal assignment is available.
    Solved,
}

/// Hungarian algorithm solver for square assignment problems.
///
/// ```
/// use assignment_solver::{AssignmentSolver, OptimizationType};
///
/// let mut solver: AssignmentSolver = AssignmentSolver::new();
/// solver.configure(&[[9, 2, 7], [6, 4, 3], [5, 8, 1]], OptimizationType::Minimize)?;
/// solver.solve()?;
/// assert_eq!(solver.solution(), Some(vec![1, 0, 2]));
/// assert_eq!(solver.optimal_value(), 9);
/// # Ok::<(), assignment_solver::SolverError>(())
/// ```
pub struct AssignmentSolver<T: Cost = i64> {
    state: SolverState,
    optimization: Option<OptimizationType>,
    // matrix as configured, after the ceiling transform; every solve starts from it
    configured: Option<DMatrix<T>>,
    matrix: DMatrix<T>,
    solution: Option<Vec<usize>>,
    optimal_value: T,
    ceiling: T,
    framed_in_row: Vec<Option<usize>>,
    framed_in_col: Vec<Option<usize>>,
    struck_out: DMatrix<bool>,
    marked_rows: Vec<bool>,
    marked_cols: Vec<bool>,
    row_min_cols: Vec<usize>,
    col_min_rows: Vec<usize>,
    notifications: NotificationHandler<T>,
}

impl<T: Cost> Default for AssignmentSolver<T> {
    fn default() -> Self {
        Self {
            state: SolverState::Uninitialized,
            optimization: None,
            configured: None,
            matrix: DMatrix::from_element(0, 0, T::zero()),
            solution: None,
            optimal_value: T::zero(),
            ceiling: T::zero(),
            framed_in_row: Vec::new(),
            framed_in_col: Vec::new(),
            struck_out: DMatrix::from_element(0, 0, false),
            marked_rows: Vec::new(),
            marked_cols: Vec::new(),
            row_min_cols: Vec::new(),
            col_min_rows: Vec::new(),
            notifications: NotificationHandler::default(),
        }
    }
}

impl<T: Cost> std::fmt::Debug for AssignmentSolver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssignmentSolver")
            .field("state", &self.state)
            .field("optimization", &self.optimization)
            .field("size", &self.size())
            .field("solution", &self.solution)
            .field("optimal_value", &self.optimal_value)
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}

impl<T: Cost> AssignmentSolver<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an n×n matrix given as rows, discarding any previous result.
    ///
    /// Rows are copied, so later changes to `rows` do not reach the solver.
    /// With [`OptimizationType::Maximize`] every cell is rewritten as
    /// `ceiling - cell`, `ceiling` being the largest cell, which turns the
    /// problem into an equivalent minimization.
    ///
    /// # Errors
    ///
    /// - [`SolverError::InvalidArgument`] if there are no rows, if a row's
    ///   length differs from the number of rows, or if the maximization
    ///   transform overflows `T`.
    /// - [`SolverError::InvalidState`] when called from a listener while
    ///   solving.
    pub fn configure<R>(&mut self, rows: &[R], optimization: OptimizationType) -> Result<(), SolverError>
    where
        R: AsRef<[T]>,
    {
        self.ensure_not_solving("configure() called while solving")?;
        let n = rows.len();
        if n == 0 {
            return Err(SolverError::invalid_argument("matrix has no rows"));
        }
        if let Some((i, row)) = rows
            .iter()
            .map(|row| row.as_ref())
            .enumerate()
            .find(|(_, row)| row.len() != n)
        {
            return Err(SolverError::invalid_argument(format!(
                "row {i} has {} entries, expected {n}",
                row.len()
            )));
        }

        let matrix = DMatrix::from_fn(n, n, |r, c| rows[r].as_ref()[c]);
        self.load(matrix, optimization)
    }

    /// Same as [`configure`](Self::configure) for a matrix already held in
    /// nalgebra storage.
    ///
    /// # Errors
    ///
    /// As [`configure`](Self::configure); a non-square matrix is an
    /// [`SolverError::InvalidArgument`].
    pub fn configure_matrix(
        &mut self,
        matrix: &DMatrix<T>,
        optimization: OptimizationType,
    ) -> Result<(), SolverError> {
        self.ensure_not_solving("configure() called while solving")?;
        let (h, w) = matrix.shape();
        if h == 0 || h != w {
            return Err(SolverError::invalid_argument(format!(
                "expected a non-empty square matrix, got {h}x{w}"
            )));
        }
        self.load(matrix.clone(), optimization)
    }

    fn load(&mut self, mut matrix: DMatrix<T>, optimization: OptimizationType) -> Result<(), SolverError> {
        let n = matrix.nrows();
        let ceiling = matrix.iter().copied().fold(T::min_value(), T::max);
        if optimization.is_maximize() {
            for cell in matrix.iter_mut() {
                *cell = ceiling.checked_sub(cell).ok_or_else(|| {
                    SolverError::invalid_argument(format!(
                        "{ceiling:?} - {cell:?} does not fit the cell type"
                    ))
                })?;
            }
        }

        self.optimization = Some(optimization);
        self.ceiling = ceiling;
        self.configured = Some(matrix.clone());
        self.matrix = matrix;
        self.solution = None;
        self.optimal_value = T::zero();
        self.row_min_cols.clear();
        self.col_min_rows.clear();
        self.clear_marks();
        self.state = SolverState::Configured;
        debug!("configured {n}x{n} matrix for {optimization:?}, ceiling {ceiling:?}");
        Ok(())
    }

    fn ensure_not_solving(&self, reason: &'static str) -> Result<(), SolverError> {
        if self.state.is_solving() {
            return Err(SolverError::invalid_state(reason));
        }
        Ok(())
    }

    /// Runs the Hungarian algorithm on the configured matrix.
    ///
    /// Every call restarts from the configured matrix, so solving an already
    /// solved instance gives the same result again.
    ///
    /// # Errors
    ///
    /// - [`SolverError::InvalidState`] if nothing is configured, if called
    ///   from a listener while solving, or after a failed solve.
    /// - [`SolverError::Overflow`] if a cell or the optimal value leaves the
    ///   range of `T`; the solver then moves to [`SolverState::Error`].
    ///   Reduced cells are held in `T`, so a line whose largest and smallest
    ///   cells lie further apart than `T::max_value()` overflows even when
    ///   the optimum itself fits. Cells within `±T::max_value() / 2` are
    ///   always safe; beyond that, solve with a wider `T`.
    pub fn solve(&mut self) -> Result<(), SolverError> {
        match self.state {
            SolverState::Uninitialized => {
                return Err(SolverError::invalid_state("no matrix configured"))
            }
            SolverState::Solving => {
                return Err(SolverError::invalid_state("solve() called while solving"))
            }
            SolverState::Error => {
                return Err(SolverError::invalid_state(
                    "previous solve failed, configure the solver again",
                ))
            }
            SolverState::Configured | SolverState::Solved => {}
        }
        let Some(configured) = &self.configured else {
            return Err(SolverError::invalid_state("no matrix configured"));
        };
        self.matrix = configured.clone();
        self.state = SolverState::Solving;

        match self.run() {
            Ok(()) => {
                self.state = SolverState::Solved;
                Ok(())
            }
            Err(err) => {
                debug!("solve failed: {err}");
                self.solution = None;
                self.state = SolverState::Error;
                Err(err)
            }
        }
    }

    fn run(&mut self) -> Result<(), SolverError> {
        let n = self.size();
        self.solution = None;
        self.optimal_value = T::zero();
        self.row_min_cols.clear();
        self.col_min_rows.clear();
        self.clear_marks();

        self.reduce()?;
        let mut iterations = 0_usize;
        loop {
            iterations += 1;
            self.clear_marks();
            self.cover_zeroes();
            if !self.cover_lines() {
                break;
            }
            self.adjust()?;
        }

        let solution = self
            .framed_in_row
            .iter()
            .copied()
            .collect::<Option<Vec<_>>>()
            .ok_or(SolverError::invalid_state("assignment left incomplete"))?;
        if matches!(self.optimization, Some(OptimizationType::Maximize)) {
            let total = <T as NumCast>::from(n)
                .and_then(|n| n.checked_mul(&self.ceiling))
                .and_then(|total| total.checked_sub(&self.optimal_value))
                .ok_or(SolverError::overflow("maximization"))?;
            self.optimal_value = total;
        }
        debug!(
            "solved {n}x{n} in {iterations} iterations, optimal value {:?}",
            self.optimal_value
        );
        self.solution = Some(solution);
        Ok(())
    }

    /// Delivers `step` to its subscribers.
    fn notify(&mut self, step: SolverStep) {
        for listener in self.notifications.subscribers(step) {
            // a listener is never re-entered; it can only be busy if it is the
            // caller further up the stack
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(step, self);
            }
        }
    }

    fn clear_marks(&mut self) {
        let n = self.size();
        self.framed_in_row.clear();
        self.framed_in_row.resize(n, None);
        self.framed_in_col.clear();
        self.framed_in_col.resize(n, None);
        self.struck_out = DMatrix::from_element(n, n, false);
        self.marked_rows.clear();
        self.marked_rows.resize(n, false);
        self.marked_cols.clear();
        self.marked_cols.resize(n, false);
    }

    fn accumulate(&mut self, amount: T, during: &'static str) -> Result<(), SolverError> {
        self.optimal_value = self
            .optimal_value
            .checked_add(&amount)
            .ok_or(SolverError::overflow(during))?;
        trace!("accumulated {amount:?} during {during}, total {:?}", self.optimal_value);
        Ok(())
    }

    fn framed_count(&self) -> usize {
        self.framed_in_row.iter().flatten().count()
    }

    /// Number of agents (and tasks); `0` before the first configuration.
    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    #[must_use]
    pub fn state(&self) -> SolverState {
        self.state
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    #[must_use]
    pub fn optimization(&self) -> Option<OptimizationType> {
        self.optimization
    }

    /// Largest cell of the matrix as it was configured.
    #[must_use]
    pub fn ceiling(&self) -> T {
        self.ceiling
    }

    /// Copy of the working matrix.
    ///
    /// After `configure` this is the input (ceiling-transformed when
    /// maximizing); during and after `solve` it is the reduced matrix.
    #[must_use]
    pub fn matrix(&self) -> DMatrix<T> {
        self.matrix.clone()
    }

    /// Column assigned to each row, once solved.
    #[must_use]
    pub fn solution(&self) -> Option<Vec<usize>> {
        self.solution.clone()
    }

    /// Minimum total cost or maximum total productivity, once solved.
    ///
    /// While solving this is the running sum of the amounts subtracted so
    /// far.
    #[must_use]
    pub fn optimal_value(&self) -> T {
        self.optimal_value
    }

    #[must_use]
    pub fn marked_rows(&self) -> BTreeSet<usize> {
        indices(&self.marked_rows)
    }

    #[must_use]
    pub fn marked_cols(&self) -> BTreeSet<usize> {
        indices(&self.marked_cols)
    }

    /// Zeroes currently selected for the assignment.
    #[must_use]
    pub fn framed_zeroes(&self) -> BTreeSet<Coord> {
        self.framed_in_row
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|col| Coord::new(row, col)))
            .collect()
    }

    /// Zeroes ruled out by sharing a row or a column with a framed zero.
    #[must_use]
    pub fn struck_out_zeroes(&self) -> BTreeSet<Coord> {
        let n = self.size();
        (0..n)
            .flat_map(|row| (0..n).map(move |col| Coord::new(row, col)))
            .filter(|at| self.struck_out[at.assignment()])
            .collect()
    }

    /// For each row, the column of its first minimum during row reduction.
    #[must_use]
    pub fn row_min_cols(&self) -> Vec<usize> {
        self.row_min_cols.clone()
    }

    /// For each column, the row of its first minimum during column reduction.
    #[must_use]
    pub fn col_min_rows(&self) -> Vec<usize> {
        self.col_min_rows.clone()
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationHandler<T> {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationHandler<T> {
        &mut self.notifications
    }
}

fn indices(flags: &[bool]) -> BTreeSet<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, &set)| set.then_some(i))
        .collect()
}
