// Textual form of complex values: the parser and the formatter
//
// Accepted:  "R"   "(R, I)"   "R + Ii"   "R - Ii"   "Ii"   "(R + Ii)"
// Written:   "R" when the imaginary part is zero, otherwise "R + Ii" / "R - Ii"

use crate::complex::BigComplex;
use crate::error::{Error, Result};
use bigdecimal::BigDecimal;
use log::debug;
use num_traits::{Signed, Zero};
use std::fmt;
use std::str::FromStr;

// Unicode spellings of the two signs
const MINUS_VARIANTS: &[char] = &['\u{2212}', '\u{2012}', '\u{2013}', '\u{FE63}', '\u{FF0D}'];
const PLUS_VARIANTS: &[char] = &['\u{FE62}', '\u{FF0B}'];

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            if MINUS_VARIANTS.contains(&c) {
                '-'
            } else if PLUS_VARIANTS.contains(&c) {
                '+'
            } else {
                c
            }
        })
        .collect()
}

fn is_exponent(c: char) -> bool {
    c == 'e' || c == 'E'
}

#[derive(Debug, Default)]
struct Tokens {
    numbers: Vec<String>,
    // Indices of the numbers that carried a trailing `i`
    imaginary: Vec<usize>,
    comma: bool,
}

// Splits the text into its numeric tokens. A sign that follows a finished
// number starts the next token; a sign after an exponent marker stays put.
// Two signs in a row have no reading and are rejected.
fn tokenize(input: &str, text: &str) -> Result<Tokens> {
    let mut tokens = Tokens::default();
    let mut current = String::new();
    let mut signed = false;
    for c in text.chars() {
        match c {
            '(' | ')' | ',' => {
                if signed {
                    return Err(Error::format(input, format!("sign before {:?}", c)));
                }
                tokens.comma |= c == ',';
                if !current.is_empty() {
                    tokens.numbers.push(std::mem::take(&mut current));
                }
            }
            'i' => {
                // A bare `i` is the unit itself, with whatever sign precedes it
                if current.is_empty() || current == "-" {
                    current.push('1');
                }
                tokens.imaginary.push(tokens.numbers.len());
                tokens.numbers.push(std::mem::take(&mut current));
                signed = false;
            }
            '+' | '-' if current.ends_with(is_exponent) => current.push(c),
            '+' | '-' => {
                if signed {
                    return Err(Error::format(input, "two signs in a row"));
                }
                if !current.is_empty() {
                    tokens.numbers.push(std::mem::take(&mut current));
                }
                if c == '-' {
                    current.push('-');
                }
                signed = true;
            }
            _ => {
                current.push(c);
                signed = false;
            }
        }
    }
    if !current.is_empty() {
        tokens.numbers.push(current);
    }
    Ok(tokens)
}

fn decimal(input: &str, token: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(token)
        .map_err(|err| Error::format(input, format!("{:?} is not a number: {}", token, err)))
}

/// Parses a complex literal.
///
/// Whitespace is ignored and Unicode minus and plus signs are read as their
/// ASCII forms. A comma separates the real and imaginary parts; without one,
/// a second number must carry the trailing `i`. A single number is the real
/// part unless it carries the `i` itself.
pub fn parse(text: &str) -> Result<BigComplex> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(Error::format(text, "empty input"));
    }
    if normalized.ends_with(|c: char| c == '+' || c == '-') {
        return Err(Error::format(text, "dangling sign"));
    }
    let tokens = tokenize(text, &normalized)?;
    let imaginary = tokens.imaginary.as_slice();
    let value = match (tokens.numbers.as_slice(), imaginary, tokens.comma) {
        ([single], [0], false) => BigComplex::new(BigDecimal::zero(), decimal(text, single)?),
        ([single], [], false) => BigComplex::from_real(decimal(text, single)?),
        ([re, im], [], true) | ([re, im], [1], false) => {
            BigComplex::new(decimal(text, re)?, decimal(text, im)?)
        }
        (numbers, imaginary, comma) => {
            debug!(
                "rejected {:?}: {} numbers, imaginary at {:?}, comma {}",
                text,
                numbers.len(),
                imaginary,
                comma
            );
            let reason = match numbers.len() {
                1 | 2 => String::from("expected \"R\", \"(R, I)\" or \"R + Ii\""),
                n => format!("expected one or two numbers, found {}", n),
            };
            return Err(Error::format(text, reason));
        }
    };
    Ok(value)
}

// Plain decimal notation without trailing fractional zeros. Built on the
// digit string so a large exponent only costs its zeros.
fn plain(value: &BigDecimal) -> String {
    let (int, scale) = value.as_bigint_and_exponent();
    let sign = if int.is_negative() { "-" } else { "" };
    let mut digits = int.abs().to_string();
    if scale <= 0 {
        if !int.is_zero() {
            digits.extend(std::iter::repeat('0').take(scale.unsigned_abs() as usize));
        }
        return format!("{}{}", sign, digits);
    }
    let scale = scale as usize;
    if digits.len() <= scale {
        digits = format!("{:0>width$}", digits, width = scale + 1);
    }
    let (whole, fraction) = digits.split_at(digits.len() - scale);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, fraction)
    }
}

/// Formats a complex value.
///
/// Only an exactly zero imaginary part collapses the output to the real part;
/// a zero real part is always written.
pub fn format(value: &BigComplex) -> String {
    let (re, im) = (value.real(), value.imaginary());
    if im.is_zero() {
        return plain(re);
    }
    let sign = if im.is_negative() { '-' } else { '+' };
    format!("{} {} {}i", plain(re), sign, plain(&im.abs()))
}

impl fmt::Display for BigComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format(self))
    }
}

impl FromStr for BigComplex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(feature = "serde")]
mod serialization {
    use super::*;
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};

    impl Serialize for BigComplex {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            serializer.serialize_str(&format(self))
        }
    }

    struct LiteralVisitor;

    impl<'de> Visitor<'de> for LiteralVisitor {
        type Value = BigComplex;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a complex literal such as \"3 + 4i\"")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<BigComplex, E> {
            parse(value).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for BigComplex {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            deserializer.deserialize_str(LiteralVisitor)
        }
    }
}
