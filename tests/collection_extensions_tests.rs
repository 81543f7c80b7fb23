//! Tests for the sequence helpers over Maybe, Either and NonEmptyList.

use funk::collection::{
    NonEmptyList, ToNonEmptyOption, to_non_empty_option, unwrap, unwrap_left, unwrap_right,
};
use funk::control::{Either, Maybe};
use rstest::rstest;

// =============================================================================
// Unwrap
// =============================================================================

#[rstest]
fn unwrap_keeps_present_values_in_order() {
    let items = vec![
        Maybe::some("a"),
        Maybe::none(),
        Maybe::some("b"),
        Maybe::none(),
        Maybe::some("c"),
    ];
    assert_eq!(unwrap(items).collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[rstest]
fn unwrap_of_all_none_is_empty() {
    let items: Vec<Maybe<i32>> = vec![Maybe::none(); 4];
    assert_eq!(unwrap(items).count(), 0);
}

#[rstest]
fn unwrap_left_keeps_lefts_in_order() {
    let items = vec![
        Either::<i32, &str>::Left(4),
        Either::Left(2),
        Either::Right("test"),
    ];
    assert_eq!(unwrap_left(items).collect::<Vec<_>>(), vec![4, 2]);
}

#[rstest]
fn unwrap_right_keeps_rights_in_order() {
    let items = vec![
        Either::<i32, &str>::Right("first"),
        Either::Left(2),
        Either::Right("second"),
    ];
    assert_eq!(unwrap_right(items).collect::<Vec<_>>(), vec!["first", "second"]);
}

#[rstest]
fn unwrap_accepts_borrowed_sources_via_iterators() {
    let items = [Maybe::some(1), Maybe::none(), Maybe::some(3)];
    let total: i32 = unwrap(items.iter().copied()).sum();
    assert_eq!(total, 4);
}

#[rstest]
fn unwrap_filters_are_restartable_from_the_source() {
    let items = vec![Either::<&str, i32>::Right(1), Either::Left("x")];
    let first: Vec<i32> = unwrap_right(items.clone()).collect();
    let second: Vec<i32> = unwrap_right(items).collect();
    assert_eq!(first, second);
}

// =============================================================================
// ToNonEmptyOption
// =============================================================================

#[rstest]
fn empty_sequence_becomes_none() {
    assert!(to_non_empty_option(Some(Vec::<i32>::new())).is_none());
}

#[rstest]
fn method_on_present_empty_sequence_becomes_none() {
    let empty: Option<Vec<i32>> = Some(Vec::new());
    assert_eq!(empty.to_non_empty_option(), Maybe::none());
}

#[rstest]
#[case(None)]
#[case(Some(vec![]))]
#[case(Some(vec![1]))]
#[case(Some(vec![3, 1, 2]))]
fn method_and_function_agree(#[case] source: Option<Vec<i32>>) {
    assert_eq!(
        source.clone().to_non_empty_option(),
        to_non_empty_option(source)
    );
}

#[rstest]
fn missing_sequence_becomes_none() {
    assert!(to_non_empty_option(None::<Vec<i32>>).is_none());
}

#[rstest]
fn single_element_becomes_singleton_list() {
    let result = Some(vec![1]).to_non_empty_option();
    let (count, tail_empty) = result.fold(|list| (list.len(), list.tail().is_empty()), || (0, false));
    assert_eq!(count, 1);
    assert!(tail_empty);
}

#[rstest]
fn many_elements_preserve_order() {
    let result = to_non_empty_option(Some("abc".chars()));
    assert_eq!(result, Maybe::some(NonEmptyList::new('a', ['b', 'c'])));
}
