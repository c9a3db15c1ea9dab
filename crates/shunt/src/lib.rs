//! Railway oriented programming combinators for composing fallible pipelines.
//!
//! A pipeline runs on two implicit tracks. Steps sequenced with [`bind`] keep
//! a computation moving along the success track; the first failure switches
//! to the failure track and every later step short-circuits past it, so there
//! is no need for nested conditionals around each fallible call.
//!
//! Three pieces cooperate:
//!
//! - [`Outcome`] — an immutable container holding either a success value or
//!   an error value.
//! - [`Chain`] — a chainable wrapper around an outcome, exposing the
//!   combinators.
//! - [`compose`] — function composition helpers, independent of the railway
//!   types except for a [`compose::lift`] bridge.
//!
//! # Examples
//!
//! ```
//! use shunt::Chain;
//!
//! fn parse(input: &str) -> Chain<i64, String> {
//!     match input.trim().parse() {
//!         Ok(n) => Chain::of(n),
//!         Err(..) => Chain::fail(format!("not a number: {:?}", input)),
//!     }
//! }
//!
//! let out = parse(" 12 ")
//!     .bind(|n| {
//!         if n % 2 == 0 {
//!             Chain::of(n)
//!         } else {
//!             Chain::fail(format!("odd number: {}", n))
//!         }
//!     })
//!     .map(|n| n / 2)
//!     .fold(|n| format!("half is {}", n), |e| format!("rejected: {}", e));
//!
//! assert_eq!(out, "half is 6");
//! ```
//!
//! Panics raised inside a [`bind`] step are caught and become failures:
//!
//! ```
//! use shunt::{compose, Chain};
//!
//! let divide = compose::lift(|n: i64| 10 / n);
//! let out: Chain<i64, String> = divide(0);
//!
//! assert!(!out.is_success());
//! ```
//!
//! [`bind`]: Chain::bind

#![deny(missing_docs)]

mod access;
mod aggregate;
mod chain;
pub mod compose;
mod into_chain;
mod outcome;
mod panic;

pub use self::access::AccessError;
pub use self::aggregate::ErrorSplice;
pub use self::chain::Chain;
pub use self::into_chain::IntoChain;
pub use self::outcome::Outcome;
pub use self::panic::Panic;
