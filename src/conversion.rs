// Copyright (c) 2025 - Cowboy AI, LLC.

//! Bridges between Maybe and host nullable values or batches

use crate::maybe::{Just, Maybe, Nothing};

/// `None` becomes `Nothing`, anything else `Just`
pub fn from_optional<T>(value: Option<T>) -> Maybe<T> {
    match value {
        Some(value) => Just(value),
        None => Nothing,
    }
}

/// Turn a sequence of `Maybe`s into a `Maybe` of all their values
///
/// Values keep their input order. The first `Nothing` ends the traversal:
/// no further item is pulled from `maybes`, which matters for lazy or
/// side-effecting iterators.
///
/// # Example
/// ```rust
/// use cim_maybe::{just, nothing, sequence};
///
/// assert_eq!(sequence(vec![just(1), just(2), just(3)]), just(vec![1, 2, 3]));
/// assert!(sequence(vec![just(1), nothing(), just(3)]).is_nothing());
/// ```
pub fn sequence<T, I>(maybes: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    let mut values = Vec::new();
    for maybe in maybes {
        match maybe {
            Just(value) => values.push(value),
            Nothing => return Nothing,
        }
    }
    Just(values)
}

impl<T> FromIterator<Maybe<T>> for Maybe<Vec<T>> {
    /// `collect()` form of [`sequence`]
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        sequence(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{just, nothing};
    use std::cell::Cell;

    #[test]
    fn test_from_optional() {
        assert_eq!(from_optional(Some("x")), just("x"));
        assert_eq!(from_optional(None::<&str>), nothing::<&str>());
        assert_eq!(from_optional(Some(None::<u8>)), just(None));
    }

    #[test]
    fn test_sequence_all_just() {
        assert_eq!(
            sequence(vec![just(1), just(2), just(3)]).get_or(vec![]),
            vec![1, 2, 3]
        );
        assert_eq!(sequence(Vec::<Maybe<i32>>::new()), just(vec![]));
    }

    #[test]
    fn test_sequence_stops_pulling_after_nothing() {
        let pulled = Cell::new(0);
        let source = [just(1), nothing(), just(3), just(4)]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1));

        assert!(sequence(source).is_nothing());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_sequence_ignores_size_hint_before_first_item() {
        let huge = (0..usize::MAX).map(|i| {
            if i == 0 {
                nothing::<u64>()
            } else {
                just(i as u64)
            }
        });
        assert!(sequence(huge).is_nothing());

        let trailing = (0..usize::MAX).map(|i| if i < 3 { just(i) } else { nothing() });
        assert!(sequence(trailing).is_nothing());
    }

    #[test]
    fn test_collect_matches_sequence() {
        let collected: Maybe<Vec<u8>> = (1..=3).map(just).collect();
        assert_eq!(collected, just(vec![1, 2, 3]));

        let failed: Maybe<Vec<u8>> = [just(1), nothing()].into_iter().collect();
        assert!(failed.is_nothing());
    }
}
