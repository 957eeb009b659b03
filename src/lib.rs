// Copyright 2025 Cowboy AI, LLC.

//! # CIM Maybe
//!
//! An explicit optional/result type for the Composable Information Machine,
//! and a boundary that turns the ways an ordinary function can fail into it.
//!
//! This crate provides:
//! - **Maybe**: `Just(value)` or `Nothing`, with `fmap`, `bind` and safe extraction
//! - **Predicates**: strict checks that only accept literal `true`, with `and`/`or`
//! - **Boundary**: `maybe()` / `perhaps(default)` wrap a callable so that panics,
//!   `Err` returns, `tracing` warnings and failed `ensure` checks all collapse
//!   to `Nothing` (or the default)
//! - **Composition**: `chain`, `compose_maybe` and `sequence` for pipelines of
//!   fallible steps
//!
//! ## Design Principles
//!
//! 1. **Uniform failure**: three causes, one outward signal
//! 2. **Immutability**: a `Maybe` never changes once built
//! 3. **Strictness**: a predicate passes only by returning `true`
//! 4. **Scoped capture**: warnings are charged to the call that emitted them
//! 5. **Short-circuit**: nothing runs after the first `Nothing`
//!
//! ## Example
//!
//! ```rust
//! use cim_maybe::{chain, just, maybe, perhaps, Maybe};
//!
//! let parse = maybe::<i64>().wrap_fallible(|s: &str| s.parse::<i64>());
//! let positive = maybe::<i64>().ensure(|n: &i64| *n > 0);
//!
//! let steps: Vec<Box<dyn Fn(i64) -> Maybe<i64>>> = vec![
//!     Box::new(move |n: i64| positive.run(|| n)),
//!     Box::new(|n: i64| just(n * 2)),
//! ];
//! assert_eq!(chain(parse("21"), steps), just(42));
//!
//! let or_zero = perhaps(0i64).wrap_fallible(|s: &str| s.parse::<i64>());
//! assert_eq!(or_zero("nope"), 0);
//! ```

#![warn(missing_docs)]

mod absorb;
mod capture;
pub mod composition;
pub mod conversion;
pub mod decorator;
mod errors;
pub mod maybe;
pub mod predicates;

// Re-export core types
pub use composition::{chain, compose_maybe, Pipeline, Step};
pub use conversion::{from_optional, sequence};
pub use decorator::{maybe, perhaps, Boundary, Outcome, Perhaps};
pub use errors::{MaybeError, MaybeResult, Rejection};
pub use maybe::{just, nothing, Just, Maybe, Nothing};
pub use predicates::{
    and, not_empty, not_infinite, not_nan, not_null, not_true, not_undefined, or, Inspect,
    Predicate, StrictBool,
};
