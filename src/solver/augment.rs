use std::collections::VecDeque;

use log::trace;
use num_traits::NumCast;

use crate::{AssignmentSolver, Coord, Cost, SolverError, SolverStep};

#[derive(Debug, Clone, Copy)]
enum Line {
    Row(usize),
    Col(usize),
}

impl<T: Cost> AssignmentSolver<T> {
    /// Builds a minimum line cover of the zeroes.
    ///
    /// Returns `false` once every row holds a framed zero, `true` when the
    /// marks describe a cover with fewer than n lines and the matrix has to be
    /// adjusted.
    pub(super) fn cover_lines(&mut self) -> bool {
        loop {
            if self.framed_count() == self.size() {
                self.marked_rows.fill(false);
                self.marked_cols.fill(false);
                return false;
            }
            let Some(path) = self.mark_lines() else {
                self.notify(SolverStep::MarkLines);
                return true;
            };
            trace!("reframing along alternating path {path:?}");
            for at in path {
                self.frame(at);
                self.notify(SolverStep::FrameZero);
            }
            self.restrike();
            self.notify(SolverStep::StrikeOutZeroes);
            self.cover_zeroes();
        }
    }

    /// Marks rows without a framed zero, then propagates: a marked row marks
    /// the columns of its struck-out zeroes, a marked column marks the row of
    /// its framed zero.
    ///
    /// If a column without a framed zero gets marked, the framed set is not a
    /// maximum matching; the alternating path ending at that column is
    /// returned as the cells to frame instead, and the marks made so far are
    /// dropped without a [`SolverStep::MarkLines`].
    fn mark_lines(&mut self) -> Option<Vec<Coord>> {
        let n = self.size();
        self.marked_rows.fill(false);
        self.marked_cols.fill(false);
        let mut marked_by = vec![0; n];
        let mut worklist = VecDeque::new();

        for row in 0..n {
            if self.framed_in_row[row].is_none() {
                self.marked_rows[row] = true;
                self.notify(SolverStep::MarkRow);
                worklist.push_back(Line::Row(row));
            }
        }

        while let Some(line) = worklist.pop_front() {
            match line {
                Line::Row(row) => {
                    for col in 0..n {
                        if !self.struck_out[(row, col)] || self.marked_cols[col] {
                            continue;
                        }
                        self.marked_cols[col] = true;
                        marked_by[col] = row;
                        self.notify(SolverStep::MarkCol);
                        if self.framed_in_col[col].is_none() {
                            return Some(self.alternating_path(col, &marked_by));
                        }
                        worklist.push_back(Line::Col(col));
                    }
                }
                Line::Col(col) => {
                    let Some(row) = self.framed_in_col[col] else {
                        continue;
                    };
                    if !self.marked_rows[row] {
                        self.marked_rows[row] = true;
                        self.notify(SolverStep::MarkRow);
                        worklist.push_back(Line::Row(row));
                    }
                }
            }
        }
        None
    }

    fn alternating_path(&self, end: usize, marked_by: &[usize]) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut col = end;
        loop {
            let row = marked_by[col];
            path.push(Coord::new(row, col));
            match self.framed_in_row[row] {
                Some(previous) => col = previous,
                None => return path,
            }
        }
    }

    /// Shifts the smallest uncovered value from the marked rows to the marked
    /// columns.
    pub(super) fn adjust(&mut self) -> Result<(), SolverError> {
        let n = self.size();
        let mut uncovered: Option<T> = None;
        for row in (0..n).filter(|&row| self.marked_rows[row]) {
            for col in (0..n).filter(|&col| !self.marked_cols[col]) {
                let value = self.matrix[(row, col)];
                if uncovered.map_or(true, |min| value < min) {
                    uncovered = Some(value);
                }
            }
        }
        let min = uncovered.ok_or(SolverError::invalid_state(
            "line cover leaves no uncovered cell",
        ))?;
        self.notify(SolverStep::FindMin);

        for row in 0..n {
            for col in 0..n {
                let cell = &mut self.matrix[(row, col)];
                *cell = match (self.marked_rows[row], self.marked_cols[col]) {
                    (true, false) => cell.checked_sub(&min),
                    (false, true) => cell.checked_add(&min),
                    _ => Some(*cell),
                }
                .ok_or(SolverError::overflow("adjustment"))?;
            }
        }

        // every permutation's reduced cost drops by min per marked row and
        // grows by min per marked column
        let rows = self.marked_rows.iter().filter(|&&m| m).count();
        let cols = self.marked_cols.iter().filter(|&&m| m).count();
        let amount = <T as NumCast>::from(rows - cols)
            .and_then(|deficit| min.checked_mul(&deficit))
            .ok_or(SolverError::overflow("adjustment"))?;
        trace!("adjusting by {min:?} over {rows} marked rows and {cols} marked columns");
        self.accumulate(amount, "adjustment")?;
        self.notify(SolverStep::ApplyMin);
        self.notify(SolverStep::AdjustByMin);
        Ok(())
    }
}
