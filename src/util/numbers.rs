// src/util/numbers.rs

//! Extract decimal numbers from free text and sum them.
//!
//! A "decimal number" is digits, a `.`, then digits, standing at word
//! boundaries; `1000.01` matches, `324` and `12.34abc` do not.

use ::lazy_static::lazy_static;
use ::regex::Regex;

lazy_static! {
    /// lexical pattern of a decimal number with a fractional part
    static ref DECIMAL_NUMBER_REGEX: Regex = Regex::new(r"\b\d+\.\d+\b").unwrap();
}

/// Lazily yield every decimal number found in `text`, in text order.
///
/// The returned iterator is finite and restartable; calling this function
/// again on the same `text` yields the same sequence anew.
pub fn decimal_numbers(text: &str) -> impl Iterator<Item = f64> + '_ {
    DECIMAL_NUMBER_REGEX
        .find_iter(text)
        // the pattern guarantees a parseable number
        .filter_map(|match_| match_.as_str().parse::<f64>().ok())
}

/// Total of the number sequence the passed `extractor` produces from
/// `text`.
///
/// Generic over the extractor so callers may substitute their own notion
/// of "number in text"; [`decimal_numbers`] is the stock one.
pub fn sum_profit<'a, I, F>(
    text: &'a str,
    extractor: F,
) -> f64
where
    F: FnOnce(&'a str) -> I,
    I: Iterator<Item = f64>,
{
    extractor(text).sum()
}
