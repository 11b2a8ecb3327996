use bigcomplex::{format, parse, BigComplex, Error};
use bigdecimal::BigDecimal;
use std::str::FromStr;

fn c(re: &str, im: &str) -> BigComplex {
    BigComplex::new(
        BigDecimal::from_str(re).unwrap(),
        BigDecimal::from_str(im).unwrap(),
    )
}

#[test]
fn canonical_round_trips() {
    let cases = [
        ("3 + 4i", "3 + 4i"),
        ("(3, 4)", "3 + 4i"),
        ("(3 + 4i)", "3 + 4i"),
        ("  3+4i  ", "3 + 4i"),
        ("3", "3"),
        ("(3, 0)", "3"),
        ("3 - 4i", "3 - 4i"),
        ("(-3, -4)", "-3 - 4i"),
        ("-2.50 + 0.125i", "-2.5 + 0.125i"),
        ("0 + 1i", "0 + 1i"),
        ("7i", "0 + 7i"),
    ];
    for (input, expected) in cases.iter() {
        let value = parse(input).unwrap();
        assert_eq!(format(&value), *expected, "formatting {:?}", input);
        assert_eq!(parse(expected).unwrap(), value, "re-reading {:?}", expected);
    }
}

#[test]
fn from_str_agrees_with_parse() {
    let value: BigComplex = "(1.5, -2)".parse().unwrap();
    assert_eq!(value, c("1.5", "-2"));
    assert_eq!(BigComplex::from_str("1.5 - 2i").unwrap(), value);
}

#[test]
fn unicode_minus_signs() {
    for minus in ['\u{2212}', '\u{2012}', '\u{2013}', '\u{FE63}', '\u{FF0D}'].iter() {
        let text = format!("{}3 {} 4i", minus, minus);
        assert_eq!(parse(&text).unwrap(), c("-3", "-4"), "{:?}", text);
    }
    assert_eq!(parse("3 \u{FF0B} 4i").unwrap(), c("3", "4"));
}

#[test]
fn high_precision_literals_survive() {
    let text = "3.1415926535897932384626433832795028841971693993751 - 0.00000000000000000000000000000000000001i";
    let value = parse(text).unwrap();
    assert_eq!(format(&value), text);
}

#[test]
fn malformed_input_is_a_format_error() {
    let inputs = [
        "", " ", "()", "(1, 2, 3)", "1 + 2i + 3i", "hello", "3 + 4", "1,",
        "3--4i", "--3", "+-3", "3 - -4i", "i-i", "2i+3i", "4i + 3i",
    ];
    for input in inputs.iter() {
        match parse(input) {
            Err(Error::Format { input: reported, .. }) => assert_eq!(reported, *input),
            other => panic!("{:?} parsed as {:?}", input, other),
        }
    }
}

#[test]
fn display_respects_width() {
    assert_eq!(format!("{:>8}", c("3", "4")), "  3 + 4i");
}
