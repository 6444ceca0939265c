// src/tests/numbers_tests.rs

//! tests for `numbers.rs`

use crate::util::numbers::{decimal_numbers, sum_profit};

use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// income sentence with three embedded decimal numbers
const TEXT_INCOME: &str = "Загальний дохід працівника складається з декількох частин: \
1000.01 як основний дохід, доповнений додатковими надходженнями \
27.45 і 324.00 доларів.";

#[test]
fn test_decimal_numbers_income_text() {
    let numbers: Vec<f64> = decimal_numbers(TEXT_INCOME).collect();
    assert_eq!(numbers, vec![1000.01, 27.45, 324.00]);
}

#[test]
fn test_decimal_numbers_is_restartable() {
    let first: Vec<f64> = decimal_numbers(TEXT_INCOME).collect();
    let second: Vec<f64> = decimal_numbers(TEXT_INCOME).collect();
    assert_eq!(first, second);
}

#[test]
fn test_decimal_numbers_is_lazy() {
    let mut numbers = decimal_numbers("5.5 6.25 7.125");
    assert_eq!(numbers.next(), Some(5.5));
    assert_eq!(numbers.next(), Some(6.25));
    assert_eq!(numbers.next(), Some(7.125));
    assert_eq!(numbers.next(), None);
}

#[test_case(""; "empty text")]
#[test_case("no numbers here"; "no digits")]
#[test_case("integers 100 and 324 only"; "integers lack a fractional part")]
#[test_case("12.34abc touches a word"; "no trailing word boundary")]
#[test_case("abc12.34 touches a word"; "no leading word boundary")]
#[test_case("dangling 12. and .34 dots"; "digits missing on one side")]
fn test_decimal_numbers_no_match(text: &str) {
    assert_eq!(decimal_numbers(text).count(), 0);
}

#[test]
fn test_decimal_numbers_punctuation_is_a_boundary() {
    let numbers: Vec<f64> = decimal_numbers("(12.34), 56.78;").collect();
    assert_eq!(numbers, vec![12.34, 56.78]);
}

#[test]
fn test_sum_profit_income_text() {
    let total: f64 = sum_profit(TEXT_INCOME, decimal_numbers);
    assert!((total - 1351.46).abs() < 1e-9, "total {}", total);
}

#[test]
fn test_sum_profit_empty_text_is_zero() {
    assert_eq!(sum_profit("", decimal_numbers), 0.0);
}

#[test]
fn test_sum_profit_custom_extractor() {
    // the extractor is substitutable; feed a fixed sequence
    let total: f64 = sum_profit("ignored", |_text| [1.5, 2.5].into_iter());
    assert_eq!(total, 4.0);
}
