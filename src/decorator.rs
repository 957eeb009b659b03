// Copyright (c) 2025 - Cowboy AI, LLC.

//! Failure boundary for ordinary callables
//!
//! [`maybe`] and [`perhaps`] build a [`Boundary`] that runs a callable and
//! folds every way it can fail into one explicit result. Each invocation
//! ends in exactly one terminal [`Outcome`]:
//!
//! ```text
//! RUNNING ──panic / Err──────────────────────────▶ Raised
//!         ──warning, allow_warning == false──────▶ WarningTriggered
//!         ──ensure not literally true────────────▶ PredicateRejected
//!         ──otherwise────────────────────────────▶ Success(value)
//! ```
//!
//! `maybe` collapses the outcome to `Just(value)` / `Nothing`, `perhaps`
//! to `value` / `default`. For the same callable, arguments and settings,
//! `perhaps(d).run(f) == maybe().run(f).get_or(d)`.
//!
//! # Example
//! ```rust
//! use cim_maybe::{just, maybe};
//!
//! let parse = maybe::<i32>().wrap_fallible(|s: &str| s.parse::<i32>());
//!
//! assert_eq!(parse("10"), just(10));
//! assert!(parse("xyz").is_nothing());
//! ```

use std::convert::Infallible;
use std::fmt;

use tracing::trace;

use crate::absorb::absorb_panic;
use crate::capture::capture_warnings;
use crate::errors::Rejection;
use crate::maybe::{Just, Maybe, Nothing};
use crate::predicates::Predicate;

/// Terminal state of one decorated invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The call returned and passed every gate
    Success(T),
    /// The call panicked or returned `Err`
    Raised,
    /// Warnings were emitted and not allowed
    WarningTriggered {
        /// Number of warnings captured during the call
        warnings: usize,
    },
    /// The ensure predicate rejected the value
    PredicateRejected,
}

impl<T> Outcome<T> {
    /// True for `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The absorbed failure cause, if any
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Raised => Some(Rejection::Raised),
            Outcome::WarningTriggered { warnings } => Some(Rejection::Warning { count: *warnings }),
            Outcome::PredicateRejected => Some(Rejection::Predicate),
        }
    }

    /// Collapse to `Just(value)` or `Nothing`
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Just(value),
            _ => Nothing,
        }
    }

    /// Collapse to the value or `default`
    pub fn unwrap_or(self, default: T) -> T {
        self.into_maybe().get_or(default)
    }
}

impl<T> From<Outcome<T>> for Maybe<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_maybe()
    }
}

/// Settings for the failure boundary: an optional ensure predicate and
/// whether warnings are tolerated
///
/// Immutable once built; clone it to derive variants.
pub struct Boundary<T> {
    ensure: Option<Predicate<T>>,
    allow_warning: bool,
}

/// Start a `Maybe`-returning boundary with no ensure predicate and
/// warnings allowed
pub fn maybe<T>() -> Boundary<T> {
    Boundary::new()
}

impl<T> Default for Boundary<T> {
    fn default() -> Self {
        Self {
            ensure: None,
            allow_warning: true,
        }
    }
}

impl<T> Clone for Boundary<T> {
    fn clone(&self) -> Self {
        Self {
            ensure: self.ensure.clone(),
            allow_warning: self.allow_warning,
        }
    }
}

impl<T> fmt::Debug for Boundary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boundary")
            .field("ensure", &self.ensure.is_some())
            .field("allow_warning", &self.allow_warning)
            .finish()
    }
}

impl<T: 'static> Boundary<T> {
    /// Require the result to satisfy `predicate`
    pub fn ensure(mut self, predicate: impl Into<Predicate<T>>) -> Self {
        self.ensure = Some(predicate.into());
        self
    }
}

impl<T> Boundary<T> {
    /// Create a boundary with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether warnings emitted during the call are tolerated
    pub fn allow_warning(mut self, allow: bool) -> Self {
        self.allow_warning = allow;
        self
    }

    /// Whether warnings are tolerated
    pub fn allows_warnings(&self) -> bool {
        self.allow_warning
    }

    /// Run an infallible callable once and report how it ended
    pub fn evaluate<F>(&self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> T,
    {
        self.settle(|| Ok::<T, Infallible>(f()))
    }

    /// Run a `Result`-returning callable once; `Err` counts as raised
    pub fn evaluate_fallible<E, F>(&self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.settle(f)
    }

    /// Run once, returning `Just(value)` or `Nothing`
    pub fn run<F>(&self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> T,
    {
        self.evaluate(f).into_maybe()
    }

    /// Run a `Result`-returning callable once, returning `Just` or `Nothing`
    pub fn run_fallible<E, F>(&self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.evaluate_fallible(f).into_maybe()
    }

    /// Turn `f` into a reusable function returning `Maybe<T>`
    ///
    /// Several arguments travel as one tuple; a receiver is simply captured
    /// by the closure.
    pub fn wrap<A, F>(self, f: F) -> impl Fn(A) -> Maybe<T>
    where
        F: Fn(A) -> T,
    {
        move |args| self.run(|| f(args))
    }

    /// Like [`Boundary::wrap`] for callables returning `Result`
    pub fn wrap_fallible<A, E, F>(self, f: F) -> impl Fn(A) -> Maybe<T>
    where
        F: Fn(A) -> Result<T, E>,
    {
        move |args| self.run_fallible(|| f(args))
    }

    fn settle<E, F>(&self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let outcome = self.gate(f);
        if let Some(rejection) = outcome.rejection() {
            trace!(reason = rejection.kind(), "{}", rejection);
        }
        outcome
    }

    fn gate<E, F>(&self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let captured = match absorb_panic(|| capture_warnings(f)) {
            Ok(captured) => captured,
            Err(_) => return Outcome::Raised,
        };

        let value = match captured.value {
            Ok(value) => value,
            Err(_) => return Outcome::Raised,
        };

        if captured.warnings > 0 {
            if !self.allow_warning {
                return Outcome::WarningTriggered {
                    warnings: captured.warnings,
                };
            }
            trace!(warnings = captured.warnings, "Absorbed warnings from wrapped call");
        }

        if let Some(ensure) = &self.ensure {
            let accepted = absorb_panic(|| ensure.test(&value)).unwrap_or(false);
            if !accepted {
                return Outcome::PredicateRejected;
            }
        }

        Outcome::Success(value)
    }
}

/// The same boundary, answering with a raw value or a default
pub struct Perhaps<T> {
    boundary: Boundary<T>,
    default: T,
}

/// Start a boundary that yields `default` on any failure
pub fn perhaps<T>(default: T) -> Perhaps<T> {
    Perhaps {
        boundary: Boundary::new(),
        default,
    }
}

impl<T: Clone> Clone for Perhaps<T> {
    fn clone(&self) -> Self {
        Self {
            boundary: self.boundary.clone(),
            default: self.default.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Perhaps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Perhaps")
            .field("boundary", &self.boundary)
            .field("default", &self.default)
            .finish()
    }
}

impl<T: 'static> Perhaps<T> {
    /// Require the result to satisfy `predicate`
    pub fn ensure(mut self, predicate: impl Into<Predicate<T>>) -> Self {
        self.boundary = self.boundary.ensure(predicate);
        self
    }
}

impl<T> Perhaps<T> {
    /// Set whether warnings emitted during the call are tolerated
    pub fn allow_warning(mut self, allow: bool) -> Self {
        self.boundary = self.boundary.allow_warning(allow);
        self
    }

    /// The value returned on failure
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// The underlying boundary
    pub fn boundary(&self) -> &Boundary<T> {
        &self.boundary
    }
}

impl<T: Clone> Perhaps<T> {
    /// Run once, returning the value or the default
    pub fn run<F>(&self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.boundary
            .evaluate(f)
            .into_maybe()
            .get_or_else(|| self.default.clone())
    }

    /// Run a `Result`-returning callable once, returning the value or the default
    pub fn run_fallible<E, F>(&self, f: F) -> T
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.boundary
            .evaluate_fallible(f)
            .into_maybe()
            .get_or_else(|| self.default.clone())
    }

    /// Turn `f` into a reusable function returning the value or the default
    pub fn wrap<A, F>(self, f: F) -> impl Fn(A) -> T
    where
        F: Fn(A) -> T,
    {
        move |args| self.run(|| f(args))
    }

    /// Like [`Perhaps::wrap`] for callables returning `Result`
    pub fn wrap_fallible<A, E, F>(self, f: F) -> impl Fn(A) -> T
    where
        F: Fn(A) -> Result<T, E>,
    {
        move |args| self.run_fallible(|| f(args))
    }
}
