/// Control actions supported by the root finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current approximation.
    StopEarly,
}
