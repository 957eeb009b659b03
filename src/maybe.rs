// Copyright (c) 2025 - Cowboy AI, LLC.

//! Maybe as MONAD - an explicit, immutable optional value
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. It is the single outward
//! shape every failure takes once it crosses the decorator boundary.
//!
//! # Monad Laws
//!
//! 1. Left Identity: `just(a).bind(f) ≡ f(a)`
//! 2. Right Identity: `m.bind(just) ≡ m`
//! 3. Associativity: `m.bind(f).bind(g) ≡ m.bind(|x| f(x).bind(g))`
//!
//! `fmap` is the functor operation and never flattens: mapping a
//! Maybe-returning function produces `Maybe<Maybe<U>>`. Use `bind` for that.

use std::fmt;

use crate::errors::{MaybeError, MaybeResult};

/// The two-variant optional container
///
/// `Nothing` carries no payload, so every `Nothing` of a type is equal.
/// `==` compares within one payload type; [`Maybe::same_as`] compares
/// across payload types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// Success, holding exactly one value
    Just(T),
    /// Absence or failure, no payload
    Nothing,
}

pub use Maybe::{Just, Nothing};

/// Lift a value into `Just`
pub fn just<T>(value: T) -> Maybe<T> {
    Just(value)
}

/// The empty `Maybe`
pub fn nothing<T>() -> Maybe<T> {
    Nothing
}

impl<T> Maybe<T> {
    /// True for `Just`
    pub fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    /// True for `Nothing`
    pub fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    /// map: Functor operation
    ///
    /// `f` only runs for `Just`. A panic inside `f` is not absorbed here.
    ///
    /// # Example
    /// ```rust
    /// use cim_maybe::just;
    ///
    /// assert_eq!(just(5).fmap(|x| x * 2), just(10));
    /// ```
    pub fn fmap<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Just(value) => Just(f(value)),
            Nothing => Nothing,
        }
    }

    /// bind/flatMap: Maybe(T) -> (T -> Maybe(U)) -> Maybe(U)
    ///
    /// Returns whatever `f` returns, without re-wrapping.
    ///
    /// # Example
    /// ```rust
    /// use cim_maybe::{just, nothing};
    ///
    /// let half = |x: i32| if x % 2 == 0 { just(x / 2) } else { nothing() };
    /// assert_eq!(just(8).bind(half), just(4));
    /// assert!(just(3).bind(half).is_nothing());
    /// ```
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Just(value) => f(value),
            Nothing => Nothing,
        }
    }

    /// The payload, or `default` for `Nothing`
    pub fn get_or(self, default: T) -> T {
        match self {
            Just(value) => value,
            Nothing => default,
        }
    }

    /// The payload, or a default computed on demand
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Just(value) => value,
            Nothing => default(),
        }
    }

    /// Convert to the host nullable: `Some(payload)` or `None`
    pub fn to_optional(self) -> Option<T> {
        match self {
            Just(value) => Some(value),
            Nothing => None,
        }
    }

    /// Borrow the payload
    ///
    /// Fails with [`MaybeError::NothingAccessed`] on `Nothing`; use
    /// [`Maybe::get_or`] or [`Maybe::to_optional`] to extract safely.
    pub fn value(&self) -> MaybeResult<&T> {
        match self {
            Just(value) => Ok(value),
            Nothing => Err(MaybeError::NothingAccessed),
        }
    }

    /// Take the payload, failing loudly on `Nothing`
    pub fn into_value(self) -> MaybeResult<T> {
        match self {
            Just(value) => Ok(value),
            Nothing => Err(MaybeError::NothingAccessed),
        }
    }

    /// Equality across payload types
    ///
    /// Two `Nothing`s are always the same, whatever they are parameterized
    /// over; two `Just`s are the same when their payloads compare equal.
    /// The payload types only need to be comparable, not identical.
    ///
    /// # Example
    /// ```rust
    /// use cim_maybe::{just, nothing};
    ///
    /// assert!(nothing::<String>().same_as(&nothing::<&str>()));
    /// assert!(just(String::from("a")).same_as(&just("a")));
    /// assert!(!just(1).same_as(&nothing::<i32>()));
    /// ```
    pub fn same_as<U>(&self, other: &Maybe<U>) -> bool
    where
        T: PartialEq<U>,
    {
        match (self, other) {
            (Just(left), Just(right)) => left == right,
            (Nothing, Nothing) => true,
            _ => false,
        }
    }

    /// `&Maybe<T>` to `Maybe<&T>`
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Just(value) => Just(value),
            Nothing => Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Nothing
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Just(value) => write!(f, "Just({value})"),
            Nothing => write!(f, "Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.to_optional()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_optional().into_iter()
    }
}
