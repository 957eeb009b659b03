// Copyright (c) 2025 - Cowboy AI, LLC.

//! Sequential composition of Maybe-returning steps
//!
//! A step is a Kleisli arrow `T -> Maybe<T>`. [`chain`] folds `bind` over
//! steps and stops at the first `Nothing`; [`Pipeline`] keeps a list of
//! steps around so the same chain can be replayed on many inputs.
//!
//! The [`chain!`](crate::chain!) and [`compose_maybe!`](crate::compose_maybe!)
//! macros do the same for steps whose payload types differ from one step to
//! the next.

use std::fmt;
use std::sync::Arc;

use crate::maybe::{Just, Maybe, Nothing};

/// A shareable step: `T -> Maybe<T>`
pub type Step<T> = Arc<dyn Fn(T) -> Maybe<T> + Send + Sync>;

/// Apply `steps` in order, each to the previous step's value
///
/// As soon as the running value is `Nothing` the remaining steps are
/// neither invoked nor pulled from the iterator.
///
/// # Example
/// ```rust
/// use cim_maybe::{chain, just, nothing, Maybe};
///
/// let steps: Vec<fn(i32) -> Maybe<i32>> = vec![
///     |x| just(x + 1),
///     |x| if x > 5 { just(x) } else { nothing() },
/// ];
/// assert_eq!(chain(just(5), steps.clone()), just(6));
/// assert!(chain(just(1), steps).is_nothing());
/// ```
pub fn chain<T, I, F>(initial: Maybe<T>, steps: I) -> Maybe<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Maybe<T>,
{
    let mut steps = steps.into_iter();
    let mut current = initial;
    while let Just(value) = current {
        match steps.next() {
            Some(step) => current = step(value),
            None => return Just(value),
        }
    }
    Nothing
}

/// A reusable, stateless chain of steps
///
/// `pipeline.run(m)` is `chain(m, steps)`. Cloning is cheap; steps are
/// shared, never copied.
pub struct Pipeline<T> {
    steps: Vec<Step<T>>,
}

/// Build a [`Pipeline`] from steps
pub fn compose_maybe<T, I, F>(steps: I) -> Pipeline<T>
where
    T: 'static,
    I: IntoIterator<Item = F>,
    F: Fn(T) -> Maybe<T> + Send + Sync + 'static,
{
    steps
        .into_iter()
        .fold(Pipeline::new(), |pipeline, step| pipeline.then(step))
}

impl<T> Pipeline<T> {
    /// Empty pipeline; `run` returns its input unchanged
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append an already shared step
    pub fn then_step(mut self, step: Step<T>) -> Self {
        self.steps.push(step);
        self
    }

    /// Run every step against `initial`
    pub fn run(&self, initial: Maybe<T>) -> Maybe<T> {
        chain(initial, self.steps.iter().map(|step| &**step))
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when there are no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the pipeline into a plain function
    pub fn into_fn(self) -> impl Fn(Maybe<T>) -> Maybe<T> {
        move |initial| self.run(initial)
    }
}

impl<T: 'static> Pipeline<T> {
    /// Append a step
    pub fn then<F>(self, step: F) -> Self
    where
        F: Fn(T) -> Maybe<T> + Send + Sync + 'static,
    {
        self.then_step(Arc::new(step))
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// `chain!(initial, step, ...)`: bind each step in turn
///
/// Unlike [`chain`], every step may change the payload type.
///
/// ```rust
/// use cim_maybe::{chain, just, Maybe};
///
/// let parsed: Maybe<usize> = chain!(
///     just("42"),
///     |s: &str| Maybe::from(s.parse::<i64>().ok()),
///     |n: i64| just(n as usize),
/// );
/// assert_eq!(parsed, just(42));
/// ```
#[macro_export]
macro_rules! chain {
    ($initial:expr $(, $step:expr)* $(,)?) => {{
        let current = $initial;
        $(let current = $crate::Maybe::bind(current, $step);)*
        current
    }};
}

/// `compose_maybe!(step, ...)`: a reusable closure running [`chain!`]
///
/// Steps are captured by the closure and borrowed on every call, so they
/// must be `Fn`.
#[macro_export]
macro_rules! compose_maybe {
    ($($step:expr),* $(,)?) => {
        move |initial| $crate::chain!(initial $(, &$step)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{just, nothing};
    use std::cell::Cell;

    fn increment(x: i32) -> Maybe<i32> {
        just(x + 1)
    }

    fn reject_odd(x: i32) -> Maybe<i32> {
        if x % 2 == 0 {
            just(x)
        } else {
            nothing()
        }
    }

    #[test]
    fn test_chain_applies_in_order() {
        let steps: Vec<fn(i32) -> Maybe<i32>> = vec![increment, reject_odd, increment];
        assert_eq!(chain(just(1), steps), just(3));
    }

    #[test]
    fn test_chain_stops_at_first_nothing() {
        let invoked = Cell::new(0);
        let counted = |x: i32| {
            invoked.set(invoked.get() + 1);
            just(x)
        };

        let steps: Vec<&dyn Fn(i32) -> Maybe<i32>> = vec![&reject_odd, &counted, &counted];
        assert!(chain(just(3), steps).is_nothing());
        assert_eq!(invoked.get(), 0);
    }

    #[test]
    fn test_chain_does_not_pull_steps_after_nothing() {
        let pulled = Cell::new(0);
        let steps = [increment as fn(i32) -> Maybe<i32>, increment, increment]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1));

        assert!(chain(nothing(), steps).is_nothing());
        assert_eq!(pulled.get(), 0);
    }

    #[test]
    fn test_chain_without_steps_is_identity() {
        let none: Vec<fn(i32) -> Maybe<i32>> = Vec::new();
        assert_eq!(chain(just(9), none.clone()), just(9));
        assert_eq!(chain(nothing(), none), nothing::<i32>());
    }

    #[test]
    fn test_pipeline_matches_chain() {
        let pipeline = compose_maybe([increment, reject_odd]);
        let steps: Vec<fn(i32) -> Maybe<i32>> = vec![increment, reject_odd];

        for input in [just(1), just(2), nothing()] {
            assert_eq!(pipeline.run(input), chain(input, steps.clone()));
        }
        assert_eq!(pipeline.len(), 2);
    }

    #[test]
    fn test_pipeline_is_reusable() {
        let pipeline = Pipeline::new().then(increment).then(|x: i32| just(x * 10));
        let run = pipeline.clone().into_fn();

        assert_eq!(pipeline.run(just(1)), just(20));
        assert_eq!(run(just(1)), just(20));
        assert_eq!(run(just(2)), just(30));
        assert!(Pipeline::<i32>::default().is_empty());
        assert_eq!(Pipeline::<i32>::new().run(just(4)), just(4));
    }

    #[test]
    fn test_chain_macro_changes_types() {
        let result = crate::chain!(
            just(4),
            |x: i32| just(x.to_string()),
            |s: String| just(s.len()),
        );
        assert_eq!(result, just(1));
    }

    #[test]
    fn test_compose_macro() {
        let halve = |x: u32| if x % 2 == 0 { just(x / 2) } else { nothing() };
        let describe = |x: u32| just(format!("{x}"));
        let run = crate::compose_maybe!(halve, halve, describe);

        assert_eq!(run(just(8)), just(String::from("2")));
        assert!(run(just(6)).is_nothing());
    }
}
