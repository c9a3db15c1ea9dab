use crate::panic::{self, Panic};
use crate::{AccessError, ErrorSplice, IntoChain, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chainable wrapper around an [`Outcome`], exposing the railway
/// combinators.
///
/// A chain is on one of two tracks, success or failure, fixed at construction
/// time. Every combinator consumes the receiver and returns a fresh chain;
/// nothing is ever mutated in place. Failure chains short-circuit through the
/// sequencing combinators without invoking the supplied callbacks.
///
/// # Examples
///
/// ```
/// use shunt::Chain;
///
/// let chain: Chain<i64, String> = Chain::of(2)
///     .bind(|n| Chain::of(n * 2))
///     .bind(|n| Chain::of(n + 1));
///
/// assert_eq!(chain.fold(|n| n, |_| -1), 5);
/// ```
///
/// # Capture boundaries
///
/// [`bind`], [`map`], [`try_catch`], [`try_catch_raw`], and [`try_with`] catch
/// panics raised by the supplied callback and convert them into failures. All
/// other combinators let panics propagate to the caller unchanged.
///
/// [`bind`]: Chain::bind
/// [`map`]: Chain::map
/// [`try_catch`]: Chain::try_catch
/// [`try_catch_raw`]: Chain::try_catch_raw
/// [`try_with`]: Chain::try_with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain<V, E> {
    outcome: Outcome<V, E>,
}

impl<V, E> Chain<V, E> {
    /// Construct a success chain wrapping the given value.
    pub fn of(value: V) -> Self {
        Self {
            outcome: Outcome::success(value),
        }
    }

    /// Construct a failure chain wrapping the given error.
    pub fn fail(error: E) -> Self {
        Self {
            outcome: Outcome::failure(error),
        }
    }

    /// Wrap an existing outcome.
    pub fn from_outcome(outcome: Outcome<V, E>) -> Self {
        Self { outcome }
    }

    /// Test if this chain is on the success track.
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Access the wrapped outcome.
    pub fn outcome(&self) -> &Outcome<V, E> {
        &self.outcome
    }

    /// Convert into the wrapped outcome.
    pub fn into_outcome(self) -> Outcome<V, E> {
        self.outcome
    }

    /// Convert into a standard library result.
    pub fn into_result(self) -> Result<V, E> {
        self.outcome.into_result()
    }

    /// Get the success value, or the access error raised by reading the wrong
    /// branch.
    pub fn try_value(self) -> Result<V, AccessError> {
        self.outcome.into_value().ok_or(AccessError::ExpectedSuccess)
    }

    /// Get the error value, or the access error raised by reading the wrong
    /// branch.
    pub fn try_error(self) -> Result<E, AccessError> {
        self.outcome.into_error().ok_or(AccessError::ExpectedFailure)
    }

    /// Get the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure chain. Reading the wrong branch is a
    /// contract violation that should surface at the call site; use
    /// [`try_value`] to get a result instead.
    ///
    /// [`try_value`]: Chain::try_value
    pub fn value(self) -> V
    where
        E: fmt::Debug,
    {
        match self.outcome {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("{}: {:?}", AccessError::ExpectedSuccess, error)
            }
        }
    }

    /// Get the error value.
    ///
    /// # Panics
    ///
    /// Panics when called on a success chain. Use [`try_error`] to get a
    /// result instead.
    ///
    /// [`try_error`]: Chain::try_error
    pub fn error(self) -> E
    where
        V: fmt::Debug,
    {
        match self.outcome {
            Outcome::Success(value) => {
                panic!("{}: {:?}", AccessError::ExpectedFailure, value)
            }
            Outcome::Failure(error) => error,
        }
    }

    /// Wrap a plain function into one producing a success chain.
    ///
    /// The returned function applies `f` and wraps its result through [`of`].
    /// Unlike [`try_with`] it does not catch panics.
    ///
    /// [`of`]: Chain::of
    /// [`try_with`]: Chain::try_with
    pub fn lift<R, F>(f: F) -> impl Fn(V) -> Chain<R, E>
    where
        F: Fn(V) -> R,
    {
        move |value| Chain::of(f(value))
    }

    /// Sequence a step onto the success track.
    ///
    /// A failure chain is returned unchanged and `f` is never invoked. On a
    /// success chain `f` is applied to the value; its return value may be a
    /// [`Chain`], an [`Outcome`], or a [`Result`] (see [`IntoChain`]). A
    /// panic raised by `f` is caught and converted into a failure carrying
    /// the panic message.
    pub fn bind<R, T, F>(self, f: F) -> Chain<R, E>
    where
        F: FnOnce(V) -> T,
        T: IntoChain<R, E>,
        E: From<String>,
    {
        match self.outcome {
            Outcome::Failure(error) => Chain::fail(error),
            Outcome::Success(value) => match panic::catch(move || f(value)) {
                Ok(next) => next.into_chain(),
                Err(caught) => Chain::fail(E::from(caught.message().to_owned())),
            },
        }
    }

    /// Transform the success value, propagating failure untouched.
    ///
    /// Defined through [`bind`], so a panic raised by `f` is caught and
    /// converted into a failure the same way.
    ///
    /// [`bind`]: Chain::bind
    pub fn map<R, F>(self, f: F) -> Chain<R, E>
    where
        F: FnOnce(V) -> R,
        E: From<String>,
    {
        self.bind(move |value| Chain::of(f(value)))
    }

    /// Transform the error value, propagating success untouched.
    ///
    /// The failure-track counterpart of [`map`]. Panics raised by `f` are not
    /// caught.
    ///
    /// [`map`]: Chain::map
    pub fn map_err<F2, F>(self, f: F) -> Chain<V, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self.outcome {
            Outcome::Success(value) => Chain::of(value),
            Outcome::Failure(error) => Chain::fail(f(error)),
        }
    }

    /// Run a side effect against the success value, returning the chain
    /// unchanged.
    ///
    /// `f` is only invoked on the success track and its return value is
    /// discarded. Panics raised by `f` are not caught.
    pub fn tee<F>(self, f: F) -> Chain<V, E>
    where
        F: FnOnce(&V),
    {
        if let Outcome::Success(value) = &self.outcome {
            f(value);
        }

        self
    }

    /// Transform both tracks at once.
    ///
    /// Exactly one of the two functions is invoked, picked by the current
    /// branch, and the fresh chain stays on the same semantic branch. Panics
    /// raised by either function are not caught.
    pub fn double_map<R, F2, S, F>(self, success_fn: S, failure_fn: F) -> Chain<R, F2>
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> F2,
    {
        match self.outcome {
            Outcome::Success(value) => Chain::of(success_fn(value)),
            Outcome::Failure(error) => Chain::fail(failure_fn(error)),
        }
    }

    /// Sequence a step, routing a caught panic through a handler.
    ///
    /// A failure chain is returned unchanged and neither function is invoked.
    /// On a success chain `f` is applied to the value; a panic raised by `f`
    /// is handed to `handler` as a [`Panic`] and the handler's return becomes
    /// the error. Unlike [`bind`], the caught panic is passed whole rather
    /// than stringified.
    ///
    /// [`bind`]: Chain::bind
    pub fn try_catch<R, T, F, H>(self, f: F, handler: H) -> Chain<R, E>
    where
        F: FnOnce(V) -> T,
        T: IntoChain<R, E>,
        H: FnOnce(Panic) -> E,
    {
        match self.outcome {
            Outcome::Failure(error) => Chain::fail(error),
            Outcome::Success(value) => match panic::catch(move || f(value)) {
                Ok(next) => next.into_chain(),
                Err(caught) => Chain::fail(handler(caught)),
            },
        }
    }

    /// Sequence a step, storing a caught panic as the error itself.
    ///
    /// The handler-less form of [`try_catch`]: the raw [`Panic`] converts
    /// into the error type directly.
    ///
    /// [`try_catch`]: Chain::try_catch
    pub fn try_catch_raw<R, T, F>(self, f: F) -> Chain<R, E>
    where
        F: FnOnce(V) -> T,
        T: IntoChain<R, E>,
        E: From<Panic>,
    {
        self.try_catch(f, E::from)
    }

    /// Package a step with [`try_catch`] semantics as a standalone function.
    ///
    /// The returned function applies `f` to a raw value, converting a caught
    /// panic through `handler`, and is suitable for handing to [`bind`].
    ///
    /// [`try_catch`]: Chain::try_catch
    /// [`bind`]: Chain::bind
    pub fn try_with<R, T, F, H>(f: F, handler: H) -> impl FnOnce(V) -> Chain<R, E>
    where
        F: FnOnce(V) -> T,
        T: IntoChain<R, E>,
        H: FnOnce(Panic) -> E,
    {
        move |value| match panic::catch(move || f(value)) {
            Ok(next) => next.into_chain(),
            Err(caught) => Chain::fail(handler(caught)),
        }
    }

    /// Combine two chains in parallel, aggregating errors.
    ///
    /// Unlike [`bind`] this does not short-circuit: both operands are
    /// inspected. When both succeed, `success_fn` combines the two values.
    /// When either fails, the errors present are spliced into one ordered
    /// list (first operand's errors before the second's, `Vec`-typed errors
    /// flattened one level — see [`ErrorSplice`]) and `failure_fn` turns the
    /// list into the resulting error.
    ///
    /// Panics raised by either function are not caught.
    ///
    /// [`bind`]: Chain::bind
    pub fn plus<V2, E2, R, F2, I, S, F>(
        success_fn: S,
        failure_fn: F,
        a: Chain<V, E>,
        b: Chain<V2, E2>,
    ) -> Chain<R, F2>
    where
        S: FnOnce(V, V2) -> R,
        F: FnOnce(Vec<I>) -> F2,
        E: ErrorSplice<I>,
        E2: ErrorSplice<I>,
    {
        match (a.outcome, b.outcome) {
            (Outcome::Success(first), Outcome::Success(second)) => {
                Chain::of(success_fn(first, second))
            }
            (first, second) => {
                let mut errors = Vec::new();

                if let Outcome::Failure(error) = first {
                    error.splice_into(&mut errors);
                }

                if let Outcome::Failure(error) = second {
                    error.splice_into(&mut errors);
                }

                Chain::fail(failure_fn(errors))
            }
        }
    }

    /// Instance form of [`plus`], with the receiver as the first operand.
    ///
    /// [`plus`]: Chain::plus
    pub fn plus_with<V2, E2, R, F2, I, S, F>(
        self,
        success_fn: S,
        failure_fn: F,
        other: Chain<V2, E2>,
    ) -> Chain<R, F2>
    where
        S: FnOnce(V, V2) -> R,
        F: FnOnce(Vec<I>) -> F2,
        E: ErrorSplice<I>,
        E2: ErrorSplice<I>,
    {
        Chain::plus(success_fn, failure_fn, self, other)
    }

    /// Replace a success chain with another chain, keeping failures.
    ///
    /// A success receiver returns `other` verbatim, discarding its own value.
    /// A failure receiver returns itself verbatim and `other` is dropped
    /// unread.
    pub fn unite<V2>(self, other: Chain<V2, E>) -> Chain<V2, E> {
        match self.outcome {
            Outcome::Success(..) => other,
            Outcome::Failure(error) => Chain::fail(error),
        }
    }

    /// Terminal extraction: collapse both tracks into a plain value.
    ///
    /// Exactly one of the two functions is invoked, picked by the current
    /// branch, and its return value is handed back directly.
    pub fn fold<R, S, F>(self, success_fn: S, failure_fn: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self.outcome {
            Outcome::Success(value) => success_fn(value),
            Outcome::Failure(error) => failure_fn(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Chain<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        Self::from_outcome(outcome)
    }
}

impl<V, E> From<Result<V, E>> for Chain<V, E> {
    fn from(result: Result<V, E>) -> Self {
        Self::from_outcome(Outcome::from(result))
    }
}

#[cfg(test)]
mod tests {
    use super::Chain;
    use crate::{AccessError, Outcome};
    use std::cell::Cell;

    #[test]
    fn test_of_is_success() {
        let chain = Chain::<_, String>::of(7);
        assert!(chain.is_success());
        assert_eq!(chain.value(), 7);
    }

    #[test]
    fn test_fail_is_failure() {
        let chain = Chain::<i64, _>::fail("bad".to_string());
        assert!(!chain.is_success());
        assert_eq!(chain.error(), "bad");
    }

    #[test]
    #[should_panic(expected = "tried to read the success value of a failure chain")]
    fn test_value_panics_on_failure() {
        let _ = Chain::<i64, _>::fail("bad".to_string()).value();
    }

    #[test]
    #[should_panic(expected = "tried to read the error value of a success chain")]
    fn test_error_panics_on_success() {
        let _ = Chain::<_, String>::of(7).error();
    }

    #[test]
    fn test_try_accessors() {
        assert_eq!(Chain::<_, String>::of(7).try_value(), Ok(7));
        assert_eq!(
            Chain::<i64, String>::fail("bad".to_string()).try_value(),
            Err(AccessError::ExpectedSuccess)
        );
        assert_eq!(
            Chain::<i64, String>::of(7).try_error(),
            Err(AccessError::ExpectedFailure)
        );
    }

    #[test]
    fn test_bind_short_circuits_on_failure() {
        let chain = Chain::<i64, String>::fail("bad".to_string());
        let out = chain.bind(|_| -> Chain<i64, String> { unreachable!() });
        assert_eq!(out, Chain::fail("bad".to_string()));
    }

    #[test]
    fn test_bind_accepts_chain_outcome_and_result() {
        let from_chain = Chain::<_, String>::of(1).bind(|n| Chain::of(n + 1));
        assert_eq!(from_chain.value(), 2);

        let from_outcome = Chain::<_, String>::of(1).bind(|n| Outcome::success(n + 1));
        assert_eq!(from_outcome.value(), 2);

        let from_result = Chain::<_, String>::of(1).bind(|n| -> Result<i64, String> { Ok(n + 1) });
        assert_eq!(from_result.value(), 2);
    }

    #[test]
    fn test_bind_converts_panic_to_message() {
        let chain = Chain::<i64, String>::of(1)
            .bind(|_| -> Chain<i64, String> { panic!("callback blew up") });
        assert_eq!(chain.error(), "callback blew up");
    }

    #[test]
    fn test_map_composes() {
        let stepped = Chain::<i64, String>::of(2).map(|n| n + 1).map(|n| n * 2);
        let fused = Chain::<i64, String>::of(2).map(|n| (n + 1) * 2);
        assert_eq!(stepped, fused);
    }

    #[test]
    fn test_tee_fires_once_and_keeps_value() {
        let calls = Cell::new(0);
        let chain = Chain::<_, String>::of(9).tee(|n| {
            assert_eq!(*n, 9);
            calls.set(calls.get() + 1);
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(chain.value(), 9);
    }

    #[test]
    fn test_tee_skips_failure() {
        let chain = Chain::<i64, String>::fail("bad".to_string()).tee(|_| unreachable!());
        assert_eq!(chain.error(), "bad");
    }

    #[test]
    fn test_double_map_picks_one_branch() {
        let success = Chain::<i64, String>::of(2).double_map(|n| n * 10, |_| -> i64 { unreachable!() });
        assert_eq!(success.value(), 20);

        let failure = Chain::<i64, String>::fail("bad".to_string())
            .double_map(|_| -> i64 { unreachable!() }, |e| format!("wrapped: {}", e));
        assert_eq!(failure.error(), "wrapped: bad");
    }

    #[test]
    fn test_map_err_keeps_success() {
        let chain = Chain::<_, String>::of(3).map_err(|e| format!("wrapped: {}", e));
        assert_eq!(chain.value(), 3);

        let failed = Chain::<i64, String>::fail("bad".to_string()).map_err(|e| e.len());
        assert_eq!(failed.error(), 3);
    }

    #[test]
    fn test_try_catch_routes_panic_through_handler() {
        let chain = Chain::<i64, String>::of(1).try_catch(
            |_| -> Chain<i64, String> { panic!("kaboom") },
            |caught| format!("handled: {}", caught.message()),
        );
        assert_eq!(chain.error(), "handled: kaboom");
    }

    #[test]
    fn test_try_catch_short_circuits_on_failure() {
        let chain = Chain::<i64, String>::fail("bad".to_string()).try_catch(
            |_| -> Chain<i64, String> { unreachable!() },
            |_| unreachable!(),
        );
        assert_eq!(chain.error(), "bad");
    }

    #[test]
    fn test_try_catch_passes_chain_through() {
        let chain = Chain::<i64, String>::of(1).try_catch(
            |n| -> Chain<i64, String> { Chain::fail(format!("rejected {}", n)) },
            |c| c.message().to_owned(),
        );
        assert_eq!(chain.error(), "rejected 1");
    }

    #[test]
    fn test_try_with_packages_capture() {
        let chain = Chain::<i64, String>::of(1).bind(Chain::try_with(
            |_: i64| -> Chain<i64, String> { panic!("inner") },
            |caught| format!("caught: {}", caught.message()),
        ));
        assert_eq!(chain.error(), "caught: inner");
    }

    #[test]
    fn test_plus_combines_successes() {
        let chain: Chain<i64, String> = Chain::plus(
            |a, b| a + b,
            |errors: Vec<String>| errors.join(", "),
            Chain::<i64, String>::of(2),
            Chain::<i64, String>::of(3),
        );
        assert_eq!(chain.value(), 5);
    }

    #[test]
    fn test_plus_aggregates_in_order() {
        let chain: Chain<i64, String> = Chain::plus(
            |a: i64, b: i64| a + b,
            |errors: Vec<String>| errors.join(", "),
            Chain::fail("e1".to_string()),
            Chain::fail("e2".to_string()),
        );
        assert_eq!(chain.error(), "e1, e2");
    }

    #[test]
    fn test_plus_flattens_list_errors_per_operand() {
        let chain: Chain<i64, String> = Chain::plus(
            |a: i64, b: i64| a + b,
            |errors: Vec<String>| errors.join(", "),
            Chain::<i64, Vec<String>>::fail(vec!["a1".to_string(), "a2".to_string()]),
            Chain::<i64, Vec<String>>::fail(vec!["b1".to_string()]),
        );
        assert_eq!(chain.error(), "a1, a2, b1");
    }

    #[test]
    fn test_plus_with_uses_receiver_first() {
        let chain: Chain<i64, String> = Chain::<i64, String>::fail("left".to_string()).plus_with(
            |a, b: i64| a + b,
            |errors: Vec<String>| errors.join("|"),
            Chain::<i64, String>::fail("right".to_string()),
        );
        assert_eq!(chain.error(), "left|right");
    }

    #[test]
    fn test_unite_routes_by_receiver() {
        let taken = Chain::<i64, String>::of(1).unite(Chain::of(2));
        assert_eq!(taken.value(), 2);

        let kept = Chain::<i64, String>::fail("bad".to_string()).unite(Chain::of(2));
        assert_eq!(kept.error(), "bad");
    }

    #[test]
    fn test_fold_returns_plain_value() {
        let success = Chain::<_, String>::of(2).fold(|n| n * 10, |_| -1);
        assert_eq!(success, 20);

        let failure = Chain::<i64, _>::fail("bad".to_string()).fold(|_| 0, |e| e.len() as i64);
        assert_eq!(failure, 3);
    }

    #[test]
    fn test_lift_wraps_without_capture() {
        let double = Chain::<i64, String>::lift(|n| n * 2);
        assert_eq!(double(4).value(), 8);
    }
}
