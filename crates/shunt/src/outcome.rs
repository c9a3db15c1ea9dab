use serde::{Deserialize, Serialize};

/// The result of a single step on the railway.
///
/// An outcome holds either a success value or an error value, never both and
/// never neither. Success is defined by the *absence* of an error, not the
/// presence of a value: `Outcome::<Option<i64>, String>::success(None)` is a
/// perfectly good success and distinct from any failure.
///
/// Outcomes are plain immutable data. They are constructed through
/// [`success`] and [`failure`], read through the accessors, and never mutated.
///
/// [`success`]: Outcome::success
/// [`failure`]: Outcome::failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<V, E> {
    /// The step succeeded with the given value.
    Success(V),
    /// The step failed with the given error.
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    /// Construct a success outcome carrying the given value.
    pub fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Construct a failure outcome carrying the given error.
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Test if this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(..))
    }

    /// Test if this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Get the success value, if present.
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(..) => None,
        }
    }

    /// Get the error value, if present.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(..) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Convert into the success value, if present.
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(..) => None,
        }
    }

    /// Convert into the error value, if present.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(..) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Convert into a standard library result.
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}
