use num_traits::{PrimInt, Signed};

/// Cell type of an assignment matrix.
///
/// Any signed primitive integer qualifies; the solver defaults to `i64`.
/// All arithmetic performed on cells is checked, so narrow types report
/// [`SolverError::Overflow`](crate::SolverError::Overflow) instead of wrapping.
/// Pick a type whose range covers the spread of every row and column.
pub trait Cost: PrimInt + Signed + std::fmt::Debug + 'static {}

impl<T> Cost for T where T: PrimInt + Signed + std::fmt::Debug + 'static {}

/// Index and value of the first minimum of `values`.
pub(crate) fn first_min<T: Cost>(values: impl IntoIterator<Item = T>) -> Option<(usize, T)> {
    values
        .into_iter()
        .enumerate()
        .fold(None, |best, (i, v)| match best {
            Some((_, min)) if min <= v => best,
            _ => Some((i, v)),
        })
}
