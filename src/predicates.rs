// Copyright (c) 2025 - Cowboy AI, LLC.

//! Strict predicates and their combinators
//!
//! A predicate only accepts a value when it returns the boolean literal
//! `true`. Anything else a predicate might hand back, such as `1`, a
//! non-empty vector or `Some(true)`, counts as a rejection. [`StrictBool`]
//! draws that line, [`Inspect`] gives the built-in checks a uniform view of
//! null, NaN, infinity and size, and [`Predicate`] is the shareable
//! capability that [`and`] and [`or`] combine.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::absorb::absorb_panic;
use crate::maybe::{Just, Maybe, Nothing};

/// A predicate result that only counts when it is literally `true`
pub trait StrictBool {
    /// True only for the boolean `true`
    fn is_strictly_true(&self) -> bool;
}

impl StrictBool for bool {
    fn is_strictly_true(&self) -> bool {
        *self
    }
}

macro_rules! never_strictly_true {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StrictBool for $ty {
                fn is_strictly_true(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_strictly_true!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, (), str,
    String,
);

impl<T> StrictBool for Option<T> {
    fn is_strictly_true(&self) -> bool {
        false
    }
}

impl<T> StrictBool for Maybe<T> {
    fn is_strictly_true(&self) -> bool {
        false
    }
}

impl<T> StrictBool for Vec<T> {
    fn is_strictly_true(&self) -> bool {
        false
    }
}

impl<T> StrictBool for [T] {
    fn is_strictly_true(&self) -> bool {
        false
    }
}

impl<T: StrictBool + ?Sized> StrictBool for &T {
    fn is_strictly_true(&self) -> bool {
        (**self).is_strictly_true()
    }
}

impl<T: StrictBool + ?Sized> StrictBool for Box<T> {
    fn is_strictly_true(&self) -> bool {
        (**self).is_strictly_true()
    }
}

/// Negation of strict truth: true for everything except literal `true`
pub fn not_true<R: StrictBool + ?Sized>(result: &R) -> bool {
    !result.is_strictly_true()
}

/// Uniform view of the properties the built-in predicates look at
///
/// Every method has a vacuous default, so a type with no notion of null,
/// NaN, infinity or size passes the corresponding checks.
pub trait Inspect {
    /// Whether this is the null sentinel
    fn is_null(&self) -> bool {
        false
    }

    /// Whether this is a NaN number
    fn is_nan(&self) -> bool {
        false
    }

    /// Whether this is a positive or negative infinite number
    fn is_infinite(&self) -> bool {
        false
    }

    /// Element count, if the type has one
    fn size(&self) -> Option<usize> {
        None
    }
}

macro_rules! inspect_opaque {
    ($($ty:ty),* $(,)?) => {
        $(impl Inspect for $ty {})*
    };
}

inspect_opaque!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (),
);

macro_rules! inspect_float {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn is_nan(&self) -> bool {
                    <$ty>::is_nan(*self)
                }

                fn is_infinite(&self) -> bool {
                    <$ty>::is_infinite(*self)
                }
            }
        )*
    };
}

inspect_float!(f32, f64);

impl Inspect for str {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Inspect for String {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Inspect for [T] {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn size(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> Inspect for Vec<T> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Inspect for VecDeque<T> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn is_nan(&self) -> bool {
        self.as_ref().is_some_and(Inspect::is_nan)
    }

    fn is_infinite(&self) -> bool {
        self.as_ref().is_some_and(Inspect::is_infinite)
    }

    fn size(&self) -> Option<usize> {
        self.as_ref().and_then(Inspect::size)
    }
}

impl<T: Inspect> Inspect for Maybe<T> {
    fn is_null(&self) -> bool {
        self.is_nothing()
    }

    fn is_nan(&self) -> bool {
        matches!(self, Just(value) if value.is_nan())
    }

    fn is_infinite(&self) -> bool {
        matches!(self, Just(value) if value.is_infinite())
    }

    fn size(&self) -> Option<usize> {
        match self {
            Just(value) => value.size(),
            Nothing => None,
        }
    }
}

macro_rules! inspect_through {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $wrapper<T> {
                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                fn is_nan(&self) -> bool {
                    (**self).is_nan()
                }

                fn is_infinite(&self) -> bool {
                    (**self).is_infinite()
                }

                fn size(&self) -> Option<usize> {
                    (**self).size()
                }
            }
        )*
    };
}

inspect_through!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn is_nan(&self) -> bool {
        (**self).is_nan()
    }

    fn is_infinite(&self) -> bool {
        (**self).is_infinite()
    }

    fn size(&self) -> Option<usize> {
        (**self).size()
    }
}

/// True unless the value is the null sentinel (`None` / `Nothing`)
pub fn not_null<T: Inspect + ?Sized>(value: &T) -> bool {
    !value.is_null()
}

/// False only for NaN; non-numbers pass
pub fn not_nan<T: Inspect + ?Sized>(value: &T) -> bool {
    !value.is_nan()
}

/// False only for positive or negative infinity; non-numbers pass
pub fn not_infinite<T: Inspect + ?Sized>(value: &T) -> bool {
    !value.is_infinite()
}

/// Not null, not NaN and not infinite
pub fn not_undefined<T: Inspect + ?Sized>(value: &T) -> bool {
    not_null(value) && not_nan(value) && not_infinite(value)
}

/// Non-empty when the value has a size; unconditionally true otherwise
pub fn not_empty<T: Inspect + ?Sized>(value: &T) -> bool {
    value.size().map_or(true, |size| size > 0)
}

type Check<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A shareable strict predicate over `T`
///
/// Built from any `Fn(&T) -> R` where `R: StrictBool`; the result is
/// normalised once, so [`Predicate::test`] is `true` exactly when the
/// underlying function returned literal `true`.
pub struct Predicate<T> {
    check: Check<T>,
}

impl<T: 'static> Predicate<T> {
    /// Wrap a function as a strict predicate
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: StrictBool,
    {
        Self {
            check: Arc::new(move |value| f(value).is_strictly_true()),
        }
    }

    /// Predicate that accepts everything
    pub fn always() -> Self {
        Self::new(|_: &T| true)
    }

    /// Conjunction with another predicate; see [`and`]
    pub fn and(self, other: impl Into<Predicate<T>>) -> Self {
        and([self, other.into()])
    }

    /// Disjunction with another predicate; see [`or`]
    pub fn or(self, other: impl Into<Predicate<T>>) -> Self {
        or([self, other.into()])
    }
}

impl<T> Predicate<T> {
    /// Evaluate against a value
    pub fn test(&self, value: &T) -> bool {
        (self.check)(value)
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T, F, R> From<F> for Predicate<T>
where
    T: 'static,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: StrictBool,
{
    fn from(f: F) -> Self {
        Predicate::new(f)
    }
}

/// All members must return literal `true`
///
/// Members run in order and evaluation stops at the first one that does
/// not. With no members the conjunction holds. A panicking member is not
/// caught here.
pub fn and<T, I>(predicates: I) -> Predicate<T>
where
    T: 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let members: Vec<Predicate<T>> = predicates.into_iter().collect();
    Predicate::new(move |value: &T| members.iter().all(|member| member.test(value)))
}

/// At least one member must return literal `true`
///
/// Members run in order and evaluation stops at the first one that does.
/// A member that panics counts as not true and the next one is tried.
/// With no members the disjunction fails.
pub fn or<T, I>(predicates: I) -> Predicate<T>
where
    T: 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let members: Vec<Predicate<T>> = predicates.into_iter().collect();
    Predicate::new(move |value: &T| {
        members
            .iter()
            .any(|member| absorb_panic(|| member.test(value)).unwrap_or(false))
    })
}

/// Variadic [`and`]: `and!(p1, p2, ...)`
///
/// Members may be [`Predicate`]s or plain functions returning a
/// [`StrictBool`].
#[macro_export]
macro_rules! and {
    ($($member:expr),* $(,)?) => {
        $crate::predicates::and(::std::vec![$($crate::Predicate::from($member)),*])
    };
}

/// Variadic [`or`]: `or!(p1, p2, ...)`
#[macro_export]
macro_rules! or {
    ($($member:expr),* $(,)?) => {
        $crate::predicates::or(::std::vec![$($crate::Predicate::from($member)),*])
    };
}
