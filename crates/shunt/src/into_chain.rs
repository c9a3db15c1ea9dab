use crate::{Chain, Outcome};

/// Trait for the types a sequencing step is allowed to produce.
///
/// [`bind`] and [`try_catch`] accept callbacks returning a [`Chain`], an
/// [`Outcome`], or a plain [`Result`], and normalize all three through this
/// trait. A chain is passed through as-is, the other two are wrapped.
///
/// Plain-value steps go through [`map`], which shares the capture semantics
/// of `bind`.
///
/// [`bind`]: Chain::bind
/// [`try_catch`]: Chain::try_catch
/// [`map`]: Chain::map
pub trait IntoChain<V, E> {
    /// Convert into a chain.
    fn into_chain(self) -> Chain<V, E>;
}

impl<V, E> IntoChain<V, E> for Chain<V, E> {
    fn into_chain(self) -> Chain<V, E> {
        self
    }
}

impl<V, E> IntoChain<V, E> for Outcome<V, E> {
    fn into_chain(self) -> Chain<V, E> {
        Chain::from_outcome(self)
    }
}

impl<V, E> IntoChain<V, E> for Result<V, E> {
    fn into_chain(self) -> Chain<V, E> {
        Chain::from_outcome(Outcome::from(self))
    }
}
