//! Unit tests for the Optional<T> type.
//!
//! Optional represents a value that may or may not be present:
//! - `Present(T)`: Contains a value of type T
//! - `Absent`: Contains nothing
//!
//! Tests cover construction, inspection, fallback, transformation,
//! conditional execution, equality and display.

use presence::optional::{self, Optional};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::panic;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn some_with_integer_is_present() {
    let value = Optional::some(42);
    assert!(value.is_present());
    assert_eq!(value.get(), 42);
}

#[rstest]
fn some_with_string_is_present() {
    let value = optional::some("hello");
    assert!(value.is_present());
    assert_eq!(value.get(), "hello");
}

#[rstest]
fn some_with_null_reference_is_still_present() {
    let reference: Option<&str> = None;
    let value = Optional::some(reference);
    assert!(value.is_present());
    assert_eq!(value.get(), None);
}

#[rstest]
fn none_is_absent() {
    let integer = optional::none::<i32>();
    let text: Optional<String> = Optional::none();
    assert!(integer.is_empty());
    assert!(!integer.is_present());
    assert!(text.is_empty());
}

#[rstest]
fn from_nullable_with_value_is_present() {
    let value = 42;
    assert_eq!(Optional::from_nullable_ref(Some(&value)), Optional::some(42));
    assert_eq!(optional::from_nullable(Some(value)), Optional::some(42));
}

#[rstest]
fn from_nullable_with_null_is_absent() {
    assert!(optional::from_nullable::<i32>(None).is_empty());
    assert!(Optional::<i32>::from_nullable_ref(None).is_empty());
}

#[rstest]
fn to_nullable_borrows_present_value() {
    let value = Optional::some(42);
    assert_eq!(value.to_nullable(), Some(&42));
    assert_eq!(Optional::<i32>::none().to_nullable(), None);
}

#[rstest]
fn to_nullable_mut_aliases_storage() {
    let mut value = Optional::some(String::from("draft"));
    if let Some(text) = value.to_nullable_mut() {
        text.push_str("-final");
    }
    assert_eq!(value, Optional::some(String::from("draft-final")));

    let mut absent: Optional<String> = Optional::none();
    assert!(absent.to_nullable_mut().is_none());
}

#[rstest]
fn option_conversions_roundtrip() {
    let original: Option<i32> = Some(42);
    let converted: Optional<i32> = original.into();
    let back: Option<i32> = converted.into();
    assert_eq!(back, Some(42));

    let converted: Optional<i32> = None.into();
    assert_eq!(converted.into_option(), None);
}

// =============================================================================
// Inspection
// =============================================================================

#[rstest]
#[case(Optional::some(0))]
#[case(Optional::none())]
fn presence_is_exclusive_and_exhaustive(#[case] value: Optional<i32>) {
    assert_eq!(value.is_present(), !value.is_empty());
}

#[rstest]
#[should_panic(expected = "called `Optional::get()` on an `Absent` value")]
fn get_on_absent_panics() {
    let value: Optional<i32> = Optional::none();
    value.get();
}

#[rstest]
#[should_panic(expected = "called `Optional::get_ref()` on an `Absent` value")]
fn get_ref_on_absent_panics() {
    let value: Optional<i32> = Optional::none();
    let _ = value.get_ref();
}

#[rstest]
fn or_else_panic_with_present_returns_value() {
    assert_eq!(Optional::some(42).or_else_panic("should not panic"), 42);
}

#[rstest]
fn or_else_panic_with_absent_carries_message() {
    let result = panic::catch_unwind(|| Optional::<i32>::none().or_else_panic("custom panic message"));
    let payload = result.unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied());
    assert_eq!(message, Some("custom panic message"));
}

#[rstest]
fn try_get_reports_empty_value_error() {
    let error = Optional::<i32>::none().try_get().unwrap_err();
    assert_eq!(error.method_name, "try_get");
    assert_eq!(Optional::some(1).try_get(), Ok(1));
}

// =============================================================================
// Fallback & Defaulting
// =============================================================================

#[rstest]
#[case(Optional::some(42), 0, 42)]
#[case(Optional::none(), 100, 100)]
fn or_else_returns_value_or_default(
    #[case] value: Optional<i32>,
    #[case] default: i32,
    #[case] expected: i32,
) {
    assert_eq!(value.or_else(default), expected);
}

#[rstest]
#[case(Optional::some(42), 42, 0)]
#[case(Optional::none(), 100, 1)]
fn or_else_get_invokes_supplier_only_when_absent(
    #[case] value: Optional<i32>,
    #[case] expected: i32,
    #[case] expected_calls: usize,
) {
    let calls = Cell::new(0);
    let result = value.or_else_get(|| {
        calls.set(calls.get() + 1);
        100
    });
    assert_eq!(result, expected);
    assert_eq!(calls.get(), expected_calls);
}

#[rstest]
#[case(Optional::some(42), Optional::some(100), Optional::some(42))]
#[case(Optional::some(42), Optional::none(), Optional::some(42))]
#[case(Optional::none(), Optional::some(100), Optional::some(100))]
#[case(Optional::none(), Optional::none(), Optional::none())]
fn or_returns_receiver_or_other(
    #[case] value: Optional<i32>,
    #[case] other: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(value.or(other), expected);
}

#[rstest]
fn or_default_uses_type_default() {
    assert_eq!(Optional::<String>::none().or_default(), String::new());
    assert_eq!(Optional::some(3).or_default(), 3);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_present_applies_mapper_once() {
    let calls = Cell::new(0);
    let result = optional::map(Optional::some(42), |x| {
        calls.set(calls.get() + 1);
        x * 2
    });
    assert_eq!(result.get(), 84);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn map_absent_never_invokes_mapper() {
    let calls = Cell::new(0);
    let result = optional::map(Optional::<i32>::none(), |x| {
        calls.set(calls.get() + 1);
        x.to_string()
    });
    assert!(result.is_empty());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_changes_element_type() {
    let label = optional::map(Optional::some(42), |x| format!("Number: {x}"));
    assert_eq!(label, Optional::some("Number: 42".to_string()));
}

#[rstest]
fn flat_map_present_to_present() {
    let result = optional::flat_map(Optional::some(42), |x| Optional::some(x.to_string()));
    assert_eq!(result, Optional::some("42".to_string()));
}

#[rstest]
fn flat_map_present_to_absent_passes_through() {
    let result = optional::flat_map(Optional::some(42), |_| Optional::<String>::none());
    assert!(result.is_empty());
}

#[rstest]
fn flat_map_absent_never_invokes_mapper() {
    let calls = Cell::new(0);
    let result = optional::flat_map(Optional::<i32>::none(), |x| {
        calls.set(calls.get() + 1);
        Optional::some(x)
    });
    assert!(result.is_empty());
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(Optional::some(84), Optional::some(84))]
#[case(Optional::some(42), Optional::none())]
#[case(Optional::none(), Optional::none())]
fn filter_keeps_matching_values(#[case] value: Optional<i32>, #[case] expected: Optional<i32>) {
    assert_eq!(value.filter(|x| *x > 50), expected);
}

#[rstest]
#[case(Optional::some(42), Optional::some("hello"), Optional::some("42-hello".to_string()), 1)]
#[case(Optional::some(42), Optional::none(), Optional::none(), 0)]
#[case(Optional::none(), Optional::some("hello"), Optional::none(), 0)]
#[case(Optional::none(), Optional::none(), Optional::none(), 0)]
fn zip_combines_only_when_both_present(
    #[case] first: Optional<i32>,
    #[case] second: Optional<&str>,
    #[case] expected: Optional<String>,
    #[case] expected_calls: usize,
) {
    let calls = Cell::new(0);
    let result = optional::zip(first, second, |a, b| {
        calls.set(calls.get() + 1);
        format!("{a}-{b}")
    });
    assert_eq!(result, expected);
    assert_eq!(calls.get(), expected_calls);
}

#[rstest]
fn zip_pair_and_unzip() {
    let pair = Optional::some(1).zip(Optional::some('a'));
    assert_eq!(pair, Optional::some((1, 'a')));
    assert_eq!(pair.unzip(), (Optional::some(1), Optional::some('a')));

    let absent: Optional<(i32, char)> = Optional::none();
    assert_eq!(absent.unzip(), (Optional::none(), Optional::none()));
}

#[rstest]
fn flatten_removes_one_level() {
    assert_eq!(Optional::some(Optional::some(1)).flatten(), Optional::some(1));
    assert_eq!(Optional::some(Optional::<i32>::none()).flatten(), Optional::none());
    assert_eq!(Optional::<Optional<i32>>::none().flatten(), Optional::none());
}

#[rstest]
fn ok_or_converts_to_result() {
    assert_eq!(Optional::some(1).ok_or("missing"), Ok(1));
    assert_eq!(Optional::<i32>::none().ok_or("missing"), Err("missing"));
}

#[rstest]
fn map_or_else_picks_branch() {
    assert_eq!(Optional::some(2).map_or_else(|| -1, |x| x * 10), 20);
    assert_eq!(Optional::<i32>::none().map_or_else(|| -1, |x| x * 10), -1);
    assert_eq!(Optional::<i32>::none().map_or(7, |x| x * 10), 7);
}

// =============================================================================
// Conditional Execution
// =============================================================================

#[rstest]
fn if_present_calls_consumer_once() {
    let seen = RefCell::new(Vec::new());
    Optional::some(42).if_present(|x| seen.borrow_mut().push(*x));
    Optional::<i32>::none().if_present(|x| seen.borrow_mut().push(*x));
    assert_eq!(seen.into_inner(), vec![42]);
}

#[rstest]
#[case(Optional::some(42), 1, 0)]
#[case(Optional::none(), 0, 1)]
fn if_present_or_else_calls_exactly_one(
    #[case] value: Optional<i32>,
    #[case] expected_consumer_calls: usize,
    #[case] expected_absent_calls: usize,
) {
    let consumer_calls = Cell::new(0);
    let absent_calls = Cell::new(0);
    value.if_present_or_else(
        |_| consumer_calls.set(consumer_calls.get() + 1),
        || absent_calls.set(absent_calls.get() + 1),
    );
    assert_eq!(consumer_calls.get(), expected_consumer_calls);
    assert_eq!(absent_calls.get(), expected_absent_calls);
}

// =============================================================================
// Equality & Display
// =============================================================================

#[rstest]
#[case(Optional::some(42), Optional::some(42), true)]
#[case(Optional::some(42), Optional::some(43), false)]
#[case(Optional::none(), Optional::none(), true)]
#[case(Optional::some(42), Optional::none(), false)]
#[case(Optional::none(), Optional::some(42), false)]
fn equals_is_structural(
    #[case] first: Optional<i32>,
    #[case] second: Optional<i32>,
    #[case] expected: bool,
) {
    assert_eq!(first.equals(&second), expected);
    assert_eq!(first == second, expected);
}

/// A reading whose text omits the sensor that produced it.
#[derive(Debug, PartialEq)]
struct Reading {
    value: i32,
    sensor: u8,
}

impl std::fmt::Display for Reading {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.value)
    }
}

#[rstest]
fn textual_equality_conflates_values_with_identical_text() {
    let first = Optional::some(Reading { value: 20, sensor: 1 });
    let second = Optional::some(Reading { value: 20, sensor: 2 });

    assert_ne!(first, second);
    assert!(!first.equals(&second));
    assert!(first.equals_textually(&second));
}

#[rstest]
fn textual_equality_distinguishes_presence_and_text() {
    let reading = Optional::some(Reading { value: 20, sensor: 1 });
    let other = Optional::some(Reading { value: 21, sensor: 1 });

    assert!(!reading.equals_textually(&other));
    assert!(!reading.equals_textually(&Optional::none()));
    assert!(Optional::<Reading>::none().equals_textually(&Optional::none()));
}

#[rstest]
fn combinators_leave_receiver_unchanged() {
    let original = Optional::some(String::from("kept"));

    let mapped = original.as_ref().map(|text| text.len());
    let filtered = original.clone().filter(|text| text.is_empty());
    let replaced = original.clone().or(Optional::some(String::from("other")));

    assert_eq!(mapped, Optional::some(4));
    assert!(filtered.is_empty());
    assert_eq!(replaced, Optional::some(String::from("kept")));
    assert_eq!(original, Optional::some(String::from("kept")));
}

#[rstest]
#[case(Optional::some(42), "Some(42)")]
#[case(Optional::none(), "None")]
fn display_integer(#[case] value: Optional<i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
fn display_string() {
    assert_eq!(Optional::some("hello").to_string(), "Some(hello)");
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn chained_operations() {
    let result = optional::map(Optional::some(42), |x| x * 2);
    assert_eq!(result.to_string(), "Some(84)");

    let result = optional::map(result, |x| x + 10);
    assert_eq!(result, Optional::some(94));
}

#[rstest]
fn parse_user_inputs() {
    let parse = |input: &str| Optional::from_nullable(input.parse::<i32>().ok());
    let parsed: Vec<String> = ["42", "invalid", "100"]
        .into_iter()
        .map(|input| optional::map(parse(input), |n| n * 2).to_string())
        .collect();
    assert_eq!(parsed, vec!["Some(84)", "None", "Some(200)"]);
}

#[rstest]
fn collect_is_all_or_nothing() {
    let all: Optional<Vec<i32>> = (1..=3).map(Optional::some).collect();
    assert_eq!(all, Optional::some(vec![1, 2, 3]));

    let gap: Optional<Vec<i32>> = [Optional::some(1), Optional::none()].into_iter().collect();
    assert!(gap.is_empty());
}
