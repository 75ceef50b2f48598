use log::trace;

use crate::{cost::first_min, AssignmentSolver, Cost, SolverError, SolverStep};

fn subtract_from<'a, T: Cost>(cells: impl Iterator<Item = &'a mut T>, min: T) -> Option<()> {
    for cell in cells {
        *cell = cell.checked_sub(&min)?;
    }
    Some(())
}

impl<T: Cost> AssignmentSolver<T> {
    /// Subtracts each column's minimum, then each row's, so that every line
    /// holds at least one zero.
    pub(super) fn reduce(&mut self) -> Result<(), SolverError> {
        self.reduce_cols()?;
        self.notify(SolverStep::SubtractColMin);
        self.reduce_rows()?;
        self.notify(SolverStep::SubtractRowMin);
        self.notify(SolverStep::SubtractMin);
        Ok(())
    }

    fn reduce_cols(&mut self) -> Result<(), SolverError> {
        for col in 0..self.size() {
            let Some((row, min)) = first_min(self.matrix.column(col).iter().copied()) else {
                continue;
            };
            self.col_min_rows.push(row);
            if min.is_zero() {
                continue;
            }
            subtract_from(self.matrix.column_mut(col).iter_mut(), min)
                .ok_or(SolverError::overflow("column reduction"))?;
            self.accumulate(min, "column reduction")?;
        }
        trace!("column minima found at rows {:?}", self.col_min_rows);
        Ok(())
    }

    fn reduce_rows(&mut self) -> Result<(), SolverError> {
        for row in 0..self.size() {
            let Some((col, min)) = first_min(self.matrix.row(row).iter().copied()) else {
                continue;
            };
            self.row_min_cols.push(col);
            if min.is_zero() {
                continue;
            }
            subtract_from(self.matrix.row_mut(row).iter_mut(), min)
                .ok_or(SolverError::overflow("row reduction"))?;
            self.accumulate(min, "row reduction")?;
        }
        trace!("row minima found at columns {:?}", self.row_min_cols);
        Ok(())
    }
}
