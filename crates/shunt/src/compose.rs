//! Function composition helpers.
//!
//! This module is independent of the railway types, with one bridge: [`lift`]
//! turns a plain function into a [`Chain`]-returning one with panic capture.
//!
//! # Examples
//!
//! ```
//! use shunt::compose::{flow, step, Pipeline};
//!
//! let add_then_double = flow(vec![step(|n: i64| n + 1), step(|n| n * 2)]);
//! assert_eq!(add_then_double(2), 6);
//!
//! let out = Pipeline::from(2).pipe(|n| n + 1).pipe(|n| n * 2).value();
//! assert_eq!(out, 6);
//! ```

use crate::panic;
use crate::Chain;

/// A boxed composition step.
pub type Step<T> = Box<dyn Fn(T) -> T>;

/// Box a closure into a composition step.
pub fn step<T, F>(f: F) -> Step<T>
where
    F: Fn(T) -> T + 'static,
{
    Box::new(f)
}

/// Compose steps left to right.
///
/// The returned function threads its input through each step in the order
/// given. Panics raised by a step propagate to the caller.
pub fn flow<T>(steps: Vec<Step<T>>) -> impl Fn(T) -> T {
    move |initial| steps.iter().fold(initial, |acc, step| step(acc))
}

/// Compose steps right to left.
///
/// The sequence is reversed and then applied as [`flow`] would.
pub fn compose<T>(mut steps: Vec<Step<T>>) -> impl Fn(T) -> T {
    steps.reverse();
    flow(steps)
}

/// A fluent step-by-step pipeline over a plain value.
///
/// Holds the most recently computed value and nothing else. Each [`pipe`]
/// call returns a fresh pipeline; panics raised by the supplied function
/// propagate uncaught.
///
/// [`pipe`]: Pipeline::pipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline<T> {
    value: T,
}

impl<T> Pipeline<T> {
    /// Start a pipeline holding the given value.
    pub fn from(value: T) -> Self {
        Self { value }
    }

    /// Advance the pipeline by applying the given function.
    pub fn pipe<R, F>(self, f: F) -> Pipeline<R>
    where
        F: FnOnce(T) -> R,
    {
        Pipeline {
            value: f(self.value),
        }
    }

    /// Extract the held value.
    pub fn value(self) -> T {
        self.value
    }
}

/// Wrap a plain function into one producing a chain, with panic capture.
///
/// The returned function applies `f` and wraps the result through
/// [`Chain::of`]; a panic raised by `f` is caught and stringified into the
/// error, the same conversion [`Chain::bind`] applies.
pub fn lift<V, R, E, F>(f: F) -> impl Fn(V) -> Chain<R, E>
where
    F: Fn(V) -> R,
    E: From<String>,
{
    move |value| match panic::catch(|| f(value)) {
        Ok(result) => Chain::of(result),
        Err(caught) => Chain::fail(E::from(caught.message().to_owned())),
    }
}
