use crate::model::{Number, Value};

// Whitespace tolerated around a numeric literal.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Whether the string is a decimal numeric literal, with optional surrounding whitespace:
/// `[+-]? (DIGITS ('.' DIGITS?)? | '.' DIGITS) ([eE] [+-]? DIGITS)?`
///
/// Notably excludes hex/octal/binary prefixes, `inf` and `NaN`.
pub(crate) fn is_numeric(value: &str) -> bool {
    let literal = value.trim_matches(is_blank);
    let bytes = literal.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let integral = count_digits(&bytes[i..]);
    i += integral;
    let mut fractional = 0;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        fractional = count_digits(&bytes[i..]);
        i += fractional;
    }

    if integral == 0 && fractional == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;

        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }

        let exponent = count_digits(&bytes[i..]);

        if exponent == 0 {
            return false;
        }

        i += exponent;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Convert a numeric literal into a `Number`, keeping integer-looking literals as integers where they fit.
/// Returns `None` if the value isn't a numeric literal (see [`is_numeric`]).
pub(crate) fn to_number(value: &str) -> Option<Number> {
    if !is_numeric(value) {
        return None;
    }

    let literal = value.trim_matches(is_blank);

    if !literal.contains(&['.', 'e', 'E'][..]) {
        if let Ok(integer) = literal.parse::<i64>() {
            return Some(Number::Integer(integer));
        }
    }

    literal.parse::<f64>().ok().map(Number::Float)
}

/// Convert a numeric literal into a floating point `Number`.
pub(crate) fn to_float(value: &str) -> Option<Number> {
    to_number(value).map(|n| Number::Float(n.as_f64()))
}

/// Infer the value from its literal form.
pub(crate) fn auto_value(value: &str) -> Value {
    match value {
        "true" | "1" => Value::Bool(true),
        "false" | "0" => Value::Bool(false),
        _ => match to_number(value) {
            Some(number) => Value::Number(number),
            None => Value::String(value.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[rstest]
    #[case("0")]
    #[case("8080")]
    #[case("-5")]
    #[case("+5")]
    #[case("1.5")]
    #[case("1.")]
    #[case(".5")]
    #[case("-.5")]
    #[case("1e3")]
    #[case("1E-3")]
    #[case("2.5e+10")]
    #[case(" 12")]
    #[case("12 ")]
    #[case("\t12\n")]
    #[case("007")]
    fn numeric(#[case] value: &str) {
        assert!(is_numeric(value), "'{value}' should be numeric");
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case(".")]
    #[case("-")]
    #[case("+")]
    #[case("e3")]
    #[case("1e")]
    #[case("1e+")]
    #[case("0x1A")]
    #[case("0b11")]
    #[case("inf")]
    #[case("NaN")]
    #[case("1_000")]
    #[case("1 2")]
    #[case("abc")]
    #[case("12abc")]
    #[case("--1")]
    #[case("1..2")]
    fn not_numeric(#[case] value: &str) {
        assert!(!is_numeric(value), "'{value}' should not be numeric");
        assert_eq!(to_number(value), None);
        assert_eq!(to_float(value), None);
    }

    #[rstest]
    #[case("8080", Number::Integer(8080))]
    #[case("-5", Number::Integer(-5))]
    #[case("+5", Number::Integer(5))]
    #[case(" 12 ", Number::Integer(12))]
    #[case("007", Number::Integer(7))]
    #[case("1.0", Number::Float(1.0))]
    #[case(".5", Number::Float(0.5))]
    #[case("1.", Number::Float(1.0))]
    #[case("1e3", Number::Float(1000.0))]
    #[case("99999999999999999999", Number::Float(1e20))]
    fn number(#[case] value: &str, #[case] expected: Number) {
        assert_eq!(to_number(value), Some(expected));
    }

    #[test]
    fn float_always() {
        for _ in 0..100 {
            let i: i32 = thread_rng().gen();
            assert_eq!(to_float(&i.to_string()), Some(Number::Float(i as f64)));
        }
    }

    #[rstest]
    #[case("true", Value::Bool(true))]
    #[case("1", Value::Bool(true))]
    #[case("false", Value::Bool(false))]
    #[case("0", Value::Bool(false))]
    #[case("TRUE", Value::String("TRUE".to_string()))]
    #[case("01", Value::Number(Number::Integer(1)))]
    #[case("2", Value::Number(Number::Integer(2)))]
    #[case("-1", Value::Number(Number::Integer(-1)))]
    #[case("0.0", Value::Number(Number::Float(0.0)))]
    #[case("b", Value::String("b".to_string()))]
    #[case("", Value::String("".to_string()))]
    fn auto(#[case] value: &str, #[case] expected: Value) {
        assert_eq!(auto_value(value), expected);
    }
}
