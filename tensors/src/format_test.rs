use super::*;

// =============================================================
// to_js_string
// =============================================================

#[test]
fn integers_print_without_fraction() {
    assert_eq!(to_js_string(1111.0), "1111");
    assert_eq!(to_js_string(-2234.0), "-2234");
}

#[test]
fn fractions_print_shortest_round_trip_digits() {
    assert_eq!(to_js_string(0.1), "0.1");
    assert_eq!(to_js_string(-123.456), "-123.456");
    assert_eq!(to_js_string(0.000_001), "0.000001");
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(to_js_string(-0.0), "0");
}

#[test]
fn large_and_tiny_magnitudes_switch_to_exponent_form() {
    assert_eq!(to_js_string(1e21), "1e+21");
    assert_eq!(to_js_string(1e20), "100000000000000000000");
    assert_eq!(to_js_string(1e-7), "1e-7");
    assert_eq!(to_js_string(-1.5e-7), "-1.5e-7");
}

// =============================================================
// to_fixed
// =============================================================

#[test]
fn to_fixed_pads_and_rounds() {
    assert_eq!(to_fixed(1111.0, 2), "1111.00");
    assert_eq!(to_fixed(-0.123_456, 3), "-0.123");
    assert_eq!(to_fixed(0.996, 2), "1.00");
    assert_eq!(to_fixed(9.999, 2), "10.00");
}

#[test]
fn to_fixed_rounds_exact_halves_away_from_zero() {
    assert_eq!(to_fixed(0.125, 2), "0.13");
    assert_eq!(to_fixed(-0.125, 2), "-0.13");
    assert_eq!(to_fixed(2.5, 0), "3");
}

#[test]
fn to_fixed_uses_binary_value_not_decimal_literal() {
    // 1.005 is stored as 1.00499999999999989...
    assert_eq!(to_fixed(1.005, 2), "1.00");
}

#[test]
fn to_fixed_keeps_sign_of_small_negatives() {
    assert_eq!(to_fixed(-0.001, 2), "-0.00");
    assert_eq!(to_fixed(-0.0, 2), "0.00");
}

#[test]
fn to_fixed_falls_back_to_string_for_huge_values() {
    assert_eq!(to_fixed(1e21, 2), "1e+21");
}

// =============================================================
// Rounding
// =============================================================

#[test]
fn rounding_requires_flag_and_positive_decimals() {
    assert_eq!(Rounding::from_controls(false, 2), Rounding::Raw);
    assert_eq!(Rounding::from_controls(true, 0), Rounding::Raw);
    assert_eq!(Rounding::from_controls(true, 2), Rounding::Fixed(2));
    assert_eq!(Rounding::from_controls(true, 99), Rounding::Fixed(20));
}

#[test]
fn display_cell_blanks_missing_values() {
    assert_eq!(display_cell(None, Rounding::Fixed(2)), "");
    assert_eq!(display_cell(Some(-1111.0), Rounding::Raw), "-1111");
    assert_eq!(display_cell(Some(-1111.0), Rounding::Fixed(2)), "-1111.00");
}

#[test]
fn exact_fraction_digits_match_binary_expansion() {
    assert_eq!(exact_fraction_digits(0.0), 0);
    assert_eq!(exact_fraction_digits(3.0), 0);
    assert_eq!(exact_fraction_digits(1e300), 0);
    assert_eq!(exact_fraction_digits(0.5), 1);
    assert_eq!(exact_fraction_digits(-0.125), 3);
    assert_eq!(exact_fraction_digits(0.1), 55);
    assert_eq!(exact_fraction_digits(f64::from_bits(1)), 1074);
}

#[test]
fn to_fixed_rounds_from_exact_digits_beyond_shortest_form() {
    // 0.1 is 0.1000000000000000055511151231257827...
    assert_eq!(to_fixed(0.1, 20), "0.10000000000000000555");
    // Smallest subnormal still has a digit past the kept ones.
    assert_eq!(to_fixed(f64::from_bits(1), 20), "0.00000000000000000000");
    assert_eq!(to_fixed(0.000_5, 3), "0.001");
}
