/// Control actions supported by the iterative linear solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current sweep and return the latest iterate.
    StopEarly,
}
