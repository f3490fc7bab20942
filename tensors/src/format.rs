//! Value display matching how a browser prints numbers.
//!
//! DESIGN
//! ======
//! The viewers show either the raw value or a fixed-decimal rendering. Both
//! follow ECMAScript `Number::toString` and `Number.prototype.toFixed` so the
//! grid reads the same as the numbers the endpoint serialized. Rust's `{}`
//! and `{:.N}` differ from those in exponent thresholds, negative zero, and
//! tie rounding (`toFixed` rounds exact halves away from zero, Rust rounds
//! them to even).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Largest decimal count the round control accepts.
pub const MAX_DECIMALS: u32 = 20;

/// How a scalar is rendered in a viewer cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    #[default]
    Raw,
    Fixed(usize),
}

impl Rounding {
    /// Rounding selected by the round checkbox and decimal input.
    ///
    /// A decimal count of zero shows raw values even with rounding on.
    #[must_use]
    pub fn from_controls(round: bool, decimals: u32) -> Self {
        if round && decimals > 0 {
            Self::Fixed(decimals.min(MAX_DECIMALS) as usize)
        } else {
            Self::Raw
        }
    }

    #[must_use]
    pub fn apply(self, value: f64) -> String {
        match self {
            Self::Raw => to_js_string(value),
            Self::Fixed(digits) => to_fixed(value, digits),
        }
    }
}

/// Cell text for a possibly missing value. Missing cells are blank.
#[must_use]
pub fn display_cell(value: Option<f64>, rounding: Rounding) -> String {
    value.map(|v| rounding.apply(v)).unwrap_or_default()
}

/// `Number::toString` for an `f64`.
#[must_use]
pub fn to_js_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, point) = shortest_digits(value.abs());
    let k = i64::try_from(digits.len()).unwrap_or(i64::MAX);
    let n = point;

    let body = if k <= n && n <= 21 {
        let zeros = usize::try_from(n - k).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < n && n <= 21 {
        let split = usize::try_from(n).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if -6 < n && n <= 0 {
        let zeros = usize::try_from(-n).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let exp = n - 1;
        let exp_sign = if exp < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}e{exp_sign}{}", exp.abs())
        } else {
            format!("{head}.{tail}e{exp_sign}{}", exp.abs())
        }
    };
    format!("{sign}{body}")
}

/// Shortest round-trip digits of a positive finite value and the position of
/// the decimal point relative to them (`value = 0.digits × 10^point`).
fn shortest_digits(value: f64) -> (String, i64) {
    // `{:e}` prints the shortest round-trip mantissa, e.g. `1.2345e3`.
    let sci = format!("{value:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i64 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exp + 1)
}

/// `Number.prototype.toFixed(digits)` for an `f64`.
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return to_js_string(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // One digit past the kept ones decides the rounding; ties round up, so
    // the exact expansion needs no further sticky digits.
    let precision = exact_fraction_digits(value).max(digits + 1);
    let exact = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (kept, rest) = frac_part.split_at(digits.min(frac_part.len()));

    let mut number: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    number.resize(int_part.len() + digits, b'0');
    if rest.as_bytes().first().is_some_and(|&d| d >= b'5') {
        increment_decimal(&mut number);
    }

    let split = number.len() - digits;
    let (int_digits, frac_digits) = number.split_at(split);
    let int_digits = String::from_utf8_lossy(int_digits);
    if digits == 0 {
        format!("{sign}{int_digits}")
    } else {
        format!("{sign}{int_digits}.{}", String::from_utf8_lossy(frac_digits))
    }
}

/// Number of fractional decimal digits in the exact expansion of `value`.
///
/// A finite `f64` is `m × 2^e` with `m` odd, and its expansion ends after
/// exactly `-e` fractional digits (none when `e >= 0`).
fn exact_fraction_digits(value: f64) -> usize {
    let bits = value.to_bits();
    let fraction = bits & ((1 << 52) - 1);
    let biased = i64::try_from((bits >> 52) & 0x7ff).unwrap_or(0);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return 0;
    }
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    usize::try_from(-exponent).unwrap_or(0)
}

/// Add one to an ASCII decimal digit string, growing it on carry-out.
fn increment_decimal(number: &mut Vec<u8>) {
    for digit in number.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    number.insert(0, b'1');
}
