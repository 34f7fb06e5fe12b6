//! Signal expression parsing.
//!
//! Turns a textual expression into a [`DiscreteSignal`]. Two input forms are
//! accepted:
//!
//! - a comma-separated list of real numbers (`"1, 2.5, -3"`), sampled from
//!   index 0 — any supplied or derived range is ignored in this mode;
//! - a sum of impulse and unit-step terms, each matching the grammar
//!   `sign? amplitude? '*'? ('δ' | 'delta' | 'u') '[' 'n' (sign digits)? ']'`.
//!
//! The bracket offset sign is inverted when computing the delay: `δ[n-2]`
//! is an impulse delayed by +2 (shifted right), `δ[n+2]` by −2. Terms that
//! do not match the grammar contribute nothing and are silently dropped;
//! with the `verbose-logging` feature each dropped term is reported at debug
//! level.

use alloc::string::String;
use alloc::vec::Vec;

use crate::num::Float;
use crate::signal::{combine, impulse, unit_step, DiscreteSignal, IndexRange};

/// Extra indices appended past the largest step delay when deriving a range,
/// so the step has room to develop.
const STEP_RANGE_EXTENSION: i64 = 10;

/// Indices of padding added on each side of a derived range.
const RANGE_PADDING: i64 = 2;

/// Default upper bound of the derived range before any term widens it.
const DEFAULT_RANGE_MAX: i64 = 10;

/// Signal primitive named by a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kernel {
    Impulse,
    Step,
}

/// One parsed additive term: `amplitude · kernel[n - delay]`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Term {
    amplitude: f64,
    kernel: Kernel,
    delay: i64,
}

/// Parse `expression` into a sampled signal.
///
/// When `range` is `None` and the expression contains impulse/step terms,
/// a display range is derived with [`auto_range`]. In numeric-list mode the
/// range (explicit or derived) is ignored entirely and the samples start at
/// index 0.
pub fn parse_signal_expression<T: Float>(
    expression: &str,
    range: Option<IndexRange>,
) -> DiscreteSignal<T> {
    let cleaned = strip_whitespace(expression);
    if is_numeric_list(&cleaned) {
        return parse_numeric_list(&cleaned);
    }
    let range = range.unwrap_or_else(|| auto_range(expression));

    let mut signals: Vec<DiscreteSignal<T>> = Vec::new();
    for term_text in split_terms(&cleaned) {
        match parse_term(&term_text) {
            Some(term) => signals.push(build_term(term, range)),
            None => {
                #[cfg(feature = "verbose-logging")]
                log::debug!("dropping malformed term {:?}", term_text);
            }
        }
    }
    combine(&signals)
}

/// Derive a display range for `expression` by folding over its terms.
///
/// Starts from `[0, 10]`; impulse delays widen both ends, step delays widen
/// the maximum by an extra [`STEP_RANGE_EXTENSION`] indices. The final range
/// is padded by [`RANGE_PADDING`] on each side. Numeric lists range from 0
/// to their last sample index.
pub fn auto_range(expression: &str) -> IndexRange {
    let cleaned = strip_whitespace(expression);
    if is_numeric_list(&cleaned) {
        let count = cleaned
            .split(',')
            .filter(|t| t.parse::<f64>().is_ok())
            .count() as i64;
        return IndexRange::new(0, (count - 1).max(0));
    }

    let mut min = 0;
    let mut max = DEFAULT_RANGE_MAX;
    for term_text in split_terms(&cleaned) {
        let Some(term) = parse_term(&term_text) else {
            continue;
        };
        min = min.min(term.delay);
        max = match term.kernel {
            Kernel::Impulse => max.max(term.delay),
            Kernel::Step => max.max(term.delay + STEP_RANGE_EXTENSION),
        };
    }
    IndexRange::new(min - RANGE_PADDING, max + RANGE_PADDING)
}

fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Numeric-list mode applies when no impulse or step token appears.
fn is_numeric_list(cleaned: &str) -> bool {
    !cleaned.contains('δ') && !cleaned.contains("u[") && !cleaned.contains("delta")
}

/// Comma-separated reals starting at index 0; unparsable entries are
/// skipped. An expression with no valid entries yields the empty sentinel.
fn parse_numeric_list<T: Float>(cleaned: &str) -> DiscreteSignal<T> {
    let values: Vec<T> = cleaned
        .split(',')
        .filter_map(|t| t.parse::<f64>().ok())
        .map(T::from_f64)
        .collect();
    DiscreteSignal::new(values, 0)
}

/// Split on `+`/`-` occurring outside `[...]`, keeping each operator as the
/// sign of the following term. A leading sign attaches to the first term.
fn split_terms(cleaned: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut in_brackets = false;
    for c in cleaned.chars() {
        match c {
            '[' => {
                in_brackets = true;
                current.push(c);
            }
            ']' => {
                in_brackets = false;
                current.push(c);
            }
            '+' | '-' if !in_brackets && !current.is_empty() => {
                terms.push(core::mem::take(&mut current));
                current.push(c);
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        terms.push(current);
    }
    terms
}

/// Scan one term against the grammar; `None` means the term is malformed
/// and contributes nothing.
fn parse_term(term: &str) -> Option<Term> {
    let chars: Vec<char> = term.chars().collect();
    let mut pos = 0;

    let mut amplitude = 1.0;
    if matches!(chars.first(), Some('-')) {
        amplitude = -1.0;
        pos += 1;
    } else if matches!(chars.first(), Some('+')) {
        pos += 1;
    }

    // Optional numeric amplitude, optionally followed by '*'.
    let number_start = pos;
    while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
        pos += 1;
    }
    if pos > number_start {
        let text: String = chars[number_start..pos].iter().collect();
        amplitude *= text.parse::<f64>().ok()?;
    }
    if matches!(chars.get(pos), Some('*')) {
        pos += 1;
    }

    let kernel = if matches!(chars.get(pos), Some('δ')) {
        pos += 1;
        Kernel::Impulse
    } else if chars[pos..].starts_with(&['d', 'e', 'l', 't', 'a']) {
        pos += 5;
        Kernel::Impulse
    } else if matches!(chars.get(pos), Some('u')) {
        pos += 1;
        Kernel::Step
    } else {
        return None;
    };

    if !matches!(chars.get(pos), Some('[')) {
        return None;
    }
    pos += 1;
    if !matches!(chars.get(pos), Some('n')) {
        return None;
    }
    pos += 1;

    // Optional signed offset; the sign inverts when becoming a delay:
    // [n-k] shifts right by k, [n+k] shifts left by k.
    let mut delay = 0;
    if matches!(chars.get(pos), Some('+') | Some('-')) {
        let negative_offset = chars[pos] == '-';
        pos += 1;
        let digits_start = pos;
        while pos < chars.len() && chars[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == digits_start {
            return None;
        }
        let text: String = chars[digits_start..pos].iter().collect();
        let magnitude = text.parse::<i64>().ok()?;
        delay = if negative_offset { magnitude } else { -magnitude };
    }

    if !matches!(chars.get(pos), Some(']')) {
        return None;
    }
    pos += 1;
    if pos != chars.len() {
        return None;
    }

    Some(Term {
        amplitude,
        kernel,
        delay,
    })
}

fn build_term<T: Float>(term: Term, range: IndexRange) -> DiscreteSignal<T> {
    let amplitude = T::from_f64(term.amplitude);
    match term.kernel {
        Kernel::Impulse => impulse(amplitude, term.delay, range),
        Kernel::Step => unit_step(amplitude, term.delay, range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn impulse_over_explicit_range() {
        let s = parse_signal_expression::<f64>("δ[n]", Some(IndexRange::new(-2, 2)));
        assert_eq!(s.start_index, -2);
        assert_eq!(s.values, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn bracket_offset_sign_inverts() {
        let right = parse_signal_expression::<f64>("δ[n-2]", Some(IndexRange::new(0, 4)));
        assert_eq!(right.values, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
        let left = parse_signal_expression::<f64>("δ[n+2]", Some(IndexRange::new(-4, 0)));
        assert_eq!(left.values, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn amplitude_and_sign_combine() {
        let s = parse_signal_expression::<f64>("2*δ[n]-0.5*δ[n-1]", Some(IndexRange::new(0, 2)));
        assert_eq!(s.values, vec![2.0, -0.5, 0.0]);
    }

    #[test]
    fn delta_keyword_matches_unicode_form() {
        let a = parse_signal_expression::<f64>("delta[n-1]", Some(IndexRange::new(0, 2)));
        let b = parse_signal_expression::<f64>("δ[n-1]", Some(IndexRange::new(0, 2)));
        assert_eq!(a, b);
    }

    #[test]
    fn step_sums_with_impulse() {
        let s = parse_signal_expression::<f64>("u[n]+δ[n]", Some(IndexRange::new(-1, 2)));
        assert_eq!(s.values, vec![0.0, 2.0, 1.0, 1.0]);
    }

    #[test]
    fn numeric_list_ignores_range() {
        let s = parse_signal_expression::<f64>("1,2,3", Some(IndexRange::new(-5, 5)));
        assert_eq!(s.start_index, 0);
        assert_eq!(s.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn numeric_list_skips_garbage_entries() {
        let s = parse_signal_expression::<f64>("1, x, 2", None);
        assert_eq!(s.values, vec![1.0, 2.0]);
    }

    #[test]
    fn malformed_terms_are_dropped() {
        let s = parse_signal_expression::<f64>("δ[n]+δ[m]", Some(IndexRange::new(0, 2)));
        assert_eq!(s.values, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn all_malformed_terms_yield_empty_sentinel() {
        let s = parse_signal_expression::<f64>("δ[m]+u[k]", Some(IndexRange::new(0, 2)));
        assert_eq!(s, DiscreteSignal::empty());
    }

    #[test]
    fn whitespace_is_stripped() {
        let s = parse_signal_expression::<f64>(" 2 * δ[n] ", Some(IndexRange::new(0, 1)));
        assert_eq!(s.values, vec![2.0, 0.0]);
    }

    #[test]
    fn auto_range_pads_impulse_delays() {
        // Defaults [0, 10], widened by the delays, padded by 2.
        assert_eq!(auto_range("δ[n]"), IndexRange::new(-2, 12));
        assert_eq!(auto_range("δ[n+5]"), IndexRange::new(-7, 12));
        assert_eq!(auto_range("δ[n-15]"), IndexRange::new(-2, 17));
    }

    #[test]
    fn auto_range_extends_steps() {
        assert_eq!(auto_range("u[n-3]"), IndexRange::new(-2, 15));
    }

    #[test]
    fn auto_range_numeric_list_counts_samples() {
        assert_eq!(auto_range("1,2,3"), IndexRange::new(0, 2));
        assert_eq!(auto_range(""), IndexRange::new(0, 0));
    }

    #[test]
    fn term_scanner_rejects_trailing_garbage() {
        assert_eq!(parse_term("δ[n]x"), None);
        assert_eq!(parse_term("δ[n-]"), None);
        assert_eq!(parse_term("d[n]"), None);
        assert!(parse_term("δ[n-2]").is_some());
    }
}
