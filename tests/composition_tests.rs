use std::cell::RefCell;

use cim_maybe::{
    compose_maybe, from_optional, just, maybe, not_null, nothing, Maybe, Pipeline, Predicate,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    sku: String,
    quantity: u32,
}

fn parse_order(line: &str) -> Maybe<Order> {
    let (sku, quantity) = match line.split_once(':') {
        Some(parts) => parts,
        None => return nothing(),
    };
    maybe::<u32>()
        .run_fallible(|| quantity.trim().parse::<u32>())
        .fmap(|quantity| Order {
            sku: sku.trim().to_string(),
            quantity,
        })
}

#[test]
fn macros_compose_heterogeneous_steps() {
    let positive = |order: Order| {
        if order.quantity > 0 {
            just(order)
        } else {
            nothing()
        }
    };
    let total = |order: Order| just(order.quantity * 5);
    let price = cim_maybe::compose_maybe!(parse_order, positive, total);

    assert_eq!(price(just("widget: 3")), just(15));
    assert_eq!(price(just("widget: 0")), nothing());
    assert_eq!(price(just("widget")), nothing());
    assert_eq!(price(nothing()), nothing());

    let direct = cim_maybe::chain!(just("bolt: 2"), parse_order, total);
    assert_eq!(direct, just(10));
    assert_eq!(
        parse_order("bolt: 2").fmap(|order| order.sku),
        just(String::from("bolt"))
    );
}

#[test]
fn chain_records_only_reached_steps() {
    let trail = RefCell::new(Vec::new());
    let trail_ref = &trail;
    let log = move |label: &'static str| {
        move |x: i32| {
            trail_ref.borrow_mut().push(label);
            just(x)
        }
    };

    let reject = |_: i32| nothing::<i32>();
    let steps: Vec<Box<dyn Fn(i32) -> Maybe<i32> + '_>> =
        vec![Box::new(log("first")), Box::new(reject), Box::new(log("third"))];

    assert_eq!(cim_maybe::chain(just(1), steps), nothing());
    assert_eq!(*trail.borrow(), vec!["first"]);
}

#[test]
fn pipeline_is_stateless_between_runs() {
    let pipeline = Pipeline::new()
        .then(|x: i64| from_optional(x.checked_mul(2)))
        .then(|x: i64| if x < 100 { just(x) } else { nothing() });
    let doubled = compose_maybe([|x: i64| from_optional(x.checked_mul(2))]);

    let inputs = [just(1), just(60), nothing(), just(i64::MAX), just(7)];
    let outputs: Vec<Maybe<i64>> = inputs.iter().map(|m| pipeline.run(*m)).collect();

    assert_eq!(
        outputs,
        vec![just(2), nothing(), nothing(), nothing(), just(14)]
    );
    assert_eq!(doubled.run(just(60)), just(120));
    assert_eq!(doubled.len(), 1);
}

#[test]
fn predicate_macros_from_outside_the_crate() {
    let present = cim_maybe::and!(not_null::<Option<u8>>, |x: &Option<u8>| x.map(|v| v > 3));
    assert!(!present.test(&Some(9)));

    let present_and_big = cim_maybe::and!(not_null::<Option<u8>>, |x: &Option<u8>| {
        x.is_some_and(|v| v > 3)
    });
    assert!(present_and_big.test(&Some(9)));
    assert!(!present_and_big.test(&Some(1)));
    assert!(!present_and_big.test(&None));

    let never: Predicate<u8> = cim_maybe::or!();
    assert!(!never.test(&0));
}
