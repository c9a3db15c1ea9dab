use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// The payload of a panic caught at one of the capture boundaries.
///
/// Operations that document capture ([`bind`], [`try_catch`], [`try_with`],
/// [`compose::lift`]) intercept unwinds from caller-supplied functions and
/// hand the payload around as one of these. The payload is whatever was given
/// to `panic!`, so [`message`] only recovers a string for the common
/// string-payload cases.
///
/// [`bind`]: crate::Chain::bind
/// [`try_catch`]: crate::Chain::try_catch
/// [`try_with`]: crate::Chain::try_with
/// [`compose::lift`]: crate::compose::lift
/// [`message`]: Panic::message
pub struct Panic {
    inner: Box<dyn Any + Send + 'static>,
}

impl Panic {
    pub(crate) fn new(inner: Box<dyn Any + Send + 'static>) -> Self {
        Self { inner }
    }

    /// The panic message, if the payload was a string.
    pub fn message(&self) -> &str {
        if let Some(message) = self.inner.downcast_ref::<&'static str>() {
            message
        } else if let Some(message) = self.inner.downcast_ref::<String>() {
            message
        } else {
            "non-string panic payload"
        }
    }

    /// Convert into the raw payload, as it was handed to `panic!`.
    pub fn into_inner(self) -> Box<dyn Any + Send + 'static> {
        self.inner
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.message())
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Panic")
            .field("message", &self.message())
            .finish()
    }
}

/// Run the given function, converting an unwind into a caught panic.
pub(crate) fn catch<T, F>(f: F) -> Result<T, Panic>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let caught = Panic::new(payload);
            log::trace!("caught panic at capture boundary: {}", caught);
            Err(caught)
        }
    }
}
