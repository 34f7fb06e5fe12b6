//! Free-text parsing of complex sample lists.
//!
//! The presentation layer hands the transform raw comma-separated tokens in
//! the forms `a`, `bi`, `a+bi`, `a-bi` (plus the bare units `i`, `+i`,
//! `-i`). Whitespace is ignored. Unlike the signal expression parser,
//! malformed tokens here are an error rather than silently dropped: a typo
//! in a sample list would otherwise shift every later bin.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::num::{Complex, Float};

/// Errors produced while parsing complex sample text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseComplexError {
    /// The input contained no tokens.
    Empty,
    /// A token matched none of the accepted forms.
    MalformedToken,
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseComplexError::Empty => write!(f, "input contains no samples"),
            ParseComplexError::MalformedToken => {
                write!(f, "expected a real or complex number like 2, 3i or 1-2i")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseComplexError {}

/// Parse one complex token.
///
/// Accepted forms: `a`, `bi`, `a+bi`, `a-bi`, and the bare units `i`, `+i`,
/// `-i`. Coefficients may be signed decimals; an omitted imaginary
/// coefficient (`1+i`) means 1.
pub fn parse_complex<T: Float>(token: &str) -> Result<Complex<T>, ParseComplexError> {
    let cleaned: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(ParseComplexError::Empty);
    }
    let chars: Vec<char> = cleaned.chars().collect();
    let mut pos = 0;

    let (first_sign, first_coeff) = scan_signed_number(&chars, &mut pos);

    // Pure imaginary: `bi`, `i`, `-i`.
    if matches!(chars.get(pos), Some('i')) && pos + 1 == chars.len() {
        let im = implied_coefficient(first_sign, first_coeff);
        return Ok(Complex::new(T::zero(), T::from_f64(im)));
    }

    // Pure real: the number must consume the whole token.
    if pos == chars.len() {
        let re = first_coeff.ok_or(ParseComplexError::MalformedToken)?;
        return Ok(Complex::new(T::from_f64(first_sign * re), T::zero()));
    }

    // Full form `a±bi`: a real part followed by a signed imaginary part.
    let re = first_coeff.ok_or(ParseComplexError::MalformedToken)?;
    if !matches!(chars.get(pos), Some('+') | Some('-')) {
        return Err(ParseComplexError::MalformedToken);
    }
    let (second_sign, second_coeff) = scan_signed_number(&chars, &mut pos);
    if !matches!(chars.get(pos), Some('i')) || pos + 1 != chars.len() {
        return Err(ParseComplexError::MalformedToken);
    }
    let im = implied_coefficient(second_sign, second_coeff);
    Ok(Complex::new(T::from_f64(first_sign * re), T::from_f64(im)))
}

/// Parse a comma-separated list of complex tokens.
///
/// # Errors
/// [`ParseComplexError::Empty`] when the text holds no tokens,
/// [`ParseComplexError::MalformedToken`] on the first bad token.
pub fn parse_complex_list<T: Float>(text: &str) -> Result<Vec<Complex<T>>, ParseComplexError> {
    if text.chars().all(|c| c.is_whitespace() || c == ',') {
        return Err(ParseComplexError::Empty);
    }
    text.split(',').map(parse_complex).collect()
}

/// Scan an optional sign and an optional decimal number at `pos`, advancing
/// past whatever was consumed. Returns the sign (`±1.0`) and the number if
/// one was present.
fn scan_signed_number(chars: &[char], pos: &mut usize) -> (f64, Option<f64>) {
    let mut sign = 1.0;
    if matches!(chars.get(*pos), Some('-')) {
        sign = -1.0;
        *pos += 1;
    } else if matches!(chars.get(*pos), Some('+')) {
        *pos += 1;
    }
    let start = *pos;
    while *pos < chars.len() && (chars[*pos].is_ascii_digit() || chars[*pos] == '.') {
        *pos += 1;
    }
    if *pos == start {
        return (sign, None);
    }
    let text: String = chars[start..*pos].iter().collect();
    match text.parse::<f64>() {
        Ok(value) => (sign, Some(value)),
        Err(_) => {
            // Unparsable digit runs (e.g. "1..2") poison the token.
            *pos = start;
            (sign, None)
        }
    }
}

/// A signed coefficient where the number itself may be omitted (`+i` → 1).
fn implied_coefficient(sign: f64, coeff: Option<f64>) -> f64 {
    sign * coeff.unwrap_or(1.0)
}
