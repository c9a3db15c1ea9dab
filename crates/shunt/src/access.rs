use thiserror::Error;

/// An error raised when reading the wrong branch of a chain.
///
/// Wrong-branch access is a contract violation by the caller, not a domain
/// failure, so it is kept apart from whatever error type the chain itself
/// carries. The panicking accessors on [`Chain`] raise it immediately; the
/// `try_` accessors return it.
///
/// [`Chain`]: crate::Chain
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// Tried to read the success value of a failure chain.
    #[error("tried to read the success value of a failure chain")]
    ExpectedSuccess,
    /// Tried to read the error value of a success chain.
    #[error("tried to read the error value of a success chain")]
    ExpectedFailure,
}

#[cfg(test)]
mod tests {
    use super::AccessError;

    #[test]
    fn test_access_error_display() {
        assert_eq!(
            AccessError::ExpectedSuccess.to_string(),
            "tried to read the success value of a failure chain"
        );
        assert_eq!(
            AccessError::ExpectedFailure.to_string(),
            "tried to read the error value of a success chain"
        );
    }
}
