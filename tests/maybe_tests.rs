//! Unit tests for Maybe<T>.
//!
//! Maybe represents a value that is present (`Some`) or absent (`None`).
//! Tests cover construction, map/bind, elimination and conversion to Either.

use funk::control::{Either, Maybe, ToMaybe};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn some_value_is_some() {
    assert!(Maybe::some(42).is_some());
}

#[rstest]
fn none_is_none() {
    assert!(Maybe::<i32>::none().is_none());
}

#[rstest]
fn nullable_boundary() {
    let missing: Option<Vec<i32>> = None;
    assert!(missing.to_maybe().is_none());
    assert!(Some(vec![1, 2, 3]).to_maybe().is_some());
}

// =============================================================================
// Map and Bind
// =============================================================================

#[rstest]
fn map_some_value_returns_mapped_value() {
    let result = Maybe::some(10).map(|x| x * 2).fold(|some| some, || -100);
    assert_eq!(result, 20);
}

#[rstest]
fn map_on_none_stays_none() {
    assert!(Maybe::<i32>::none().map(|x| x * 100).is_none());
}

#[rstest]
#[case(5, "Value: 5")]
#[case(-1, "Value: -1")]
fn bind_some_value_returns_new_maybe(#[case] input: i32, #[case] expected: &str) {
    let result = Maybe::some(input)
        .bind(|x| Maybe::some(format!("Value: {x}")))
        .fold(|s| s, || "ALL WRONG".to_string());
    assert_eq!(result, expected);
}

#[rstest]
fn bind_none_returns_none() {
    let result = Maybe::<i32>::none().bind(|x| Maybe::some(format!("Value: {x}")));
    assert!(result.is_none());
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
#[case(Maybe::none(), 7, 7)]
#[case(Maybe::some(3), 7, 3)]
fn if_none_returns_payload_or_default(
    #[case] value: Maybe<i32>,
    #[case] default: i32,
    #[case] expected: i32,
) {
    assert_eq!(value.if_none(default), expected);
}

#[rstest]
fn if_none_with_is_lazy_for_some() {
    let result = Maybe::some(1).if_none_with(|| unreachable!("provider must not run"));
    assert_eq!(result, 1);
}

// =============================================================================
// Conversion to Either
// =============================================================================

#[rstest]
fn some_converts_to_right() {
    let result = Maybe::some("payload".to_string())
        .to_either(|| "missing".to_string())
        .fold(|l| format!("left: {l}"), |r| r);
    assert_eq!(result, "payload");
}

#[rstest]
fn none_converts_to_supplied_left() {
    #[derive(Debug, PartialEq)]
    struct Missing;

    let result = Maybe::<i32>::none()
        .to_either(|| Missing)
        .reduce(|_| panic!("a Right is not expected here"));
    assert_eq!(result, Missing);
}

#[rstest]
fn either_right_extraction_yields_maybe() {
    let value: Either<&str, i32> = Either::Right(9);
    assert_eq!(value.right(), Maybe::some(9));
    assert_eq!(value.left(), Maybe::none());
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn structural_equality() {
    assert_eq!(Maybe::some("a".to_string()), Maybe::some("a".to_string()));
    assert_ne!(Maybe::some(1), Maybe::some(2));
    assert_ne!(Maybe::some(1), Maybe::none());
    assert!(Maybe::none() < Maybe::some(0));
}
