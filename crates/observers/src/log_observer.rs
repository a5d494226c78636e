use solvekit_core::Observer;

use crate::traits::HasError;

/// An observer that logs each iteration at trace level.
///
/// Output goes through the `log` facade, so nothing is printed unless the
/// application installs a logger. The observer never requests an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    label: &'static str,
}

impl LogObserver {
    /// Creates an observer that prefixes each line with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl<E: HasError, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        log::trace!(
            "{}: iter {} error {:e}",
            self.label,
            event.iter(),
            event.error()
        );
        None
    }
}
