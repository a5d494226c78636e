use solvekit_core::{IterationRecord, Observer};

/// An observer that keeps every [`IterationRecord`] it sees.
///
/// Pass `&mut Recorder` to a solver to keep access to the records after the
/// solve returns. The recorder never requests an action.
///
/// # Example
///
/// ```rust
/// use solvekit_core::Config;
/// use solvekit_observers::Recorder;
/// use solvekit_solvers::equation::bisection;
///
/// let mut recorder = Recorder::new();
/// let f = |x: f64| x * x - 2.0;
/// bisection::solve(&f, [0.0, 2.0], &Config::default(), &mut recorder).unwrap();
///
/// assert_eq!(recorder.len(), 24);
/// assert!(recorder.errors().windows(2).all(|w| w[1] < w[0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<X> {
    records: Vec<IterationRecord<X>>,
}

impl<X> Recorder<X> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord<X>] {
        &self.records
    }

    /// Consumes the recorder and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<IterationRecord<X>> {
        self.records
    }

    /// Returns the error column.
    #[must_use]
    pub fn errors(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.error).collect()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<X> Default for Recorder<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: Clone, A> Observer<IterationRecord<X>, A> for Recorder<X> {
    fn observe(&mut self, event: &IterationRecord<X>) -> Option<A> {
        self.records.push(event.clone());
        None
    }
}

/// Allows `&mut Recorder<X>` to be passed to solvers that take an observer
/// by value.
impl<X: Clone, A> Observer<IterationRecord<X>, A> for &mut Recorder<X> {
    fn observe(&mut self, event: &IterationRecord<X>) -> Option<A> {
        (**self).observe(event)
    }
}
