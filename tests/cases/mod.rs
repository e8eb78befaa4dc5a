#![allow(dead_code)]

use dijkstra::{EvalError, EvaluatorOptions, evaluate_with_options};
use once_cell::sync::Lazy;

pub struct TestCase {
    pub name: &'static str,
    pub expr: &'static str,
    pub value: f64,
}

/// Expressions every front end should agree on, regardless of strictness.
pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "simple_addition",
            expr: "1 + 2",
            value: 3.0,
        },
        TestCase {
            name: "precedence",
            expr: "2 + 3 * 4",
            value: 14.0,
        },
        TestCase {
            name: "grouping",
            expr: "(2 + 3) * 4",
            value: 20.0,
        },
        TestCase {
            name: "left_assoc_sub",
            expr: "8 - 3 - 2",
            value: 3.0,
        },
        TestCase {
            name: "left_assoc_div",
            expr: "20 / 4 / 5",
            value: 1.0,
        },
        TestCase {
            name: "leading_dot",
            expr: ".5 + .5",
            value: 1.0,
        },
        TestCase {
            name: "nested",
            expr: "(1 + (2 * 3))",
            value: 7.0,
        },
    ]
});

/// Evaluate with default and strict options and check that both agree.
pub fn eval_both(expr: &str) -> Result<f64, EvalError> {
    let permissive = evaluate_with_options(expr, &EvaluatorOptions::default());
    let strict = evaluate_with_options(expr, &EvaluatorOptions::strict());
    assert_eq!(permissive, strict, "strictness changed the result of {expr:?}");
    permissive
}

/// Declares a test evaluating `input` and comparing against `expected`.
///
/// `options` defaults to `EvaluatorOptions::default()`.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        expected: $expected:expr $(,)?
    ) => {
        $crate::test_case! {
            name: $name,
            input: $input,
            options: dijkstra::EvaluatorOptions::default(),
            expected: $expected,
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        options: $options:expr,
        expected: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let result = dijkstra::evaluate_with_options($input, &$options);
            pretty_assertions::assert_eq!(result, $expected, "input: {:?}", $input);
        }
    };
}
