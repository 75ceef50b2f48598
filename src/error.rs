/// Errors reported by [`AssignmentSolver`](crate::AssignmentSolver) and its
/// [`NotificationHandler`](crate::NotificationHandler).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The operation is not allowed in the solver's current state.
    #[display("invalid state: {reason}")]
    InvalidState { reason: &'static str },
    /// An argument was rejected before any state was touched.
    #[display("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    /// Checked arithmetic on matrix cells failed.
    #[display("arithmetic overflow during {during}")]
    Overflow { during: &'static str },
}

impl SolverError {
    pub(crate) const fn invalid_state(reason: &'static str) -> Self {
        Self::InvalidState { reason }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) const fn overflow(during: &'static str) -> Self {
        Self::Overflow { during }
    }
}
