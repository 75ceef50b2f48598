//! Step notifications.
//!
//! Listeners subscribe at one of two levels. A level-1 listener hears only the
//! phase boundaries; a level-2 listener hears every step, phase boundaries
//! included. Delivery is synchronous: the solver does not move past a step
//! until every interested listener has returned.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{AssignmentSolver, Cost, SolverError, SolverStep};

/// Callback invoked with the completed step and the live solver.
pub type Listener<T> = dyn FnMut(SolverStep, &mut AssignmentSolver<T>);

pub(crate) type SharedListener<T> = Rc<RefCell<Listener<T>>>;

/// Handle returned by [`NotificationHandler::add_listener`], used to remove
/// the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Two ordered listener registries, one per level.
pub struct NotificationHandler<T: Cost> {
    registries: [Vec<(ListenerId, SharedListener<T>)>; 2],
    next_id: u64,
}

impl<T: Cost> Default for NotificationHandler<T> {
    fn default() -> Self {
        Self {
            registries: [Vec::new(), Vec::new()],
            next_id: 0,
        }
    }
}

impl<T: Cost> fmt::Debug for NotificationHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHandler")
            .field("level_1", &self.registries[0].len())
            .field("level_2", &self.registries[1].len())
            .finish()
    }
}

fn registry_index(level: u8) -> Result<usize, SolverError> {
    match level {
        1 | 2 => Ok(usize::from(level - 1)),
        _ => Err(SolverError::invalid_argument(format!(
            "invalid listener level: {level}"
        ))),
    }
}

impl<T: Cost> NotificationHandler<T> {
    /// Registers `listener` at `level` (1 or 2).
    ///
    /// Listeners of the same level are called in registration order. A
    /// registration made from inside a callback applies from the next step.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidArgument`] if `level` is neither 1 nor 2.
    pub fn add_listener<F>(&mut self, level: u8, listener: F) -> Result<ListenerId, SolverError>
    where
        F: FnMut(SolverStep, &mut AssignmentSolver<T>) + 'static,
    {
        let index = registry_index(level)?;
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.registries[index].push((id, Rc::new(RefCell::new(listener))));
        Ok(id)
    }

    /// Removes a listener previously registered at `level`.
    ///
    /// Returns whether a listener was removed.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidArgument`] if `level` is neither 1 nor 2.
    pub fn remove_listener(&mut self, level: u8, id: ListenerId) -> Result<bool, SolverError> {
        let registry = &mut self.registries[registry_index(level)?];
        let before = registry.len();
        registry.retain(|(registered, _)| *registered != id);
        Ok(registry.len() != before)
    }

    /// Number of listeners registered at `level`.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidArgument`] if `level` is neither 1 nor 2.
    pub fn listener_count(&self, level: u8) -> Result<usize, SolverError> {
        Ok(self.registries[registry_index(level)?].len())
    }

    /// Snapshot of the listeners interested in `step`: every level-2 listener,
    /// followed by the level-1 listeners when `step` is a level-1 step.
    pub(crate) fn subscribers(&self, step: SolverStep) -> Vec<SharedListener<T>> {
        let fine = self.registries[1].iter();
        let coarse = self.registries[0]
            .iter()
            .filter(|_| step.level() == 1);
        fine.chain(coarse)
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}
