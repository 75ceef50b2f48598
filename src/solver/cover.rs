use log::trace;

use crate::{AssignmentSolver, Coord, Cost, SolverStep};

impl<T: Cost> AssignmentSolver<T> {
    /// Frames independent zeroes greedily, striking out the zeroes each framed
    /// zero rules out, until no eligible zero is left.
    pub(super) fn cover_zeroes(&mut self) {
        while let Some(at) = self.next_zero_to_frame() {
            self.frame(at);
            self.notify(SolverStep::FrameZero);
            self.strike_out_around(at);
            self.notify(SolverStep::StrikeOutZeroes);
        }
        trace!("framed {} of {} zeroes", self.framed_count(), self.size());
        self.notify(SolverStep::MarkZeroes);
    }

    /// A zero that is neither framed nor struck out.
    fn is_eligible(&self, row: usize, col: usize) -> bool {
        self.matrix[(row, col)].is_zero()
            && self.framed_in_row[row] != Some(col)
            && !self.struck_out[(row, col)]
    }

    /// First eligible zero of the row with the fewest eligible zeroes.
    fn next_zero_to_frame(&self) -> Option<Coord> {
        let n = self.size();
        let mut best: Option<(usize, Coord)> = None;
        for row in 0..n {
            let mut eligible = (0..n).filter(|&col| self.is_eligible(row, col));
            let Some(first) = eligible.next() else {
                continue;
            };
            let count = 1 + eligible.count();
            if best.map_or(true, |(fewest, _)| count < fewest) {
                best = Some((count, Coord::new(row, first)));
            }
        }
        best.map(|(_, at)| at)
    }

    pub(super) fn frame(&mut self, at: Coord) {
        self.framed_in_row[at.row()] = Some(at.col());
        self.framed_in_col[at.col()] = Some(at.row());
    }

    fn strike_out_around(&mut self, at: Coord) {
        for row in (0..self.size()).filter(|&row| row != at.row()) {
            if self.matrix[(row, at.col())].is_zero() {
                self.struck_out[(row, at.col())] = true;
            }
        }
        for col in (0..self.size()).filter(|&col| col != at.col()) {
            if self.matrix[(at.row(), col)].is_zero() {
                self.struck_out[(at.row(), col)] = true;
            }
        }
    }

    /// Recomputes the struck-out zeroes after the framed set changed outside
    /// of [`cover_zeroes`](Self::cover_zeroes).
    pub(super) fn restrike(&mut self) {
        let n = self.size();
        for row in 0..n {
            for col in 0..n {
                let framed_line =
                    self.framed_in_row[row].is_some() || self.framed_in_col[col].is_some();
                self.struck_out[(row, col)] = self.matrix[(row, col)].is_zero()
                    && self.framed_in_row[row] != Some(col)
                    && framed_line;
            }
        }
    }
}
