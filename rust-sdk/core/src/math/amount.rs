//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

use crate::{CoreError, AMOUNT_EXCEEDS_MAX_U128, INVALID_TOKEN_AMOUNT, INVALID_TOKEN_DECIMALS, MAX_TOKEN_DECIMALS, TOO_MANY_FRACTIONAL_DIGITS};

/// Parse a decimal string into integer base units.
///
/// Accepts what a user types into an amount field: `"12"`, `"12.5"`, `"12."` and `".5"`.
/// Surrounding whitespace is ignored, signs and exponents are not.
///
/// # Parameters
/// - `amount` - The decimal string
/// - `decimals` - The number of decimals of the token
///
/// # Returns
/// - The amount in base units, e.g. `"1.5"` with 6 decimals is `1_500_000`
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_parse_token_amount(amount: &str, decimals: u8) -> Result<u128, CoreError> {
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(INVALID_TOKEN_DECIMALS);
    }

    let amount = amount.trim();
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(INVALID_TOKEN_AMOUNT);
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(INVALID_TOKEN_AMOUNT);
    }

    // Trailing zeros carry no precision, "1.50" is valid for a token with one decimal.
    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(TOO_MANY_FRACTIONAL_DIGITS);
    }

    let scale = 10u128.pow(decimals as u32);
    let whole_units = parse_digits(whole)?.checked_mul(scale).ok_or(AMOUNT_EXCEEDS_MAX_U128)?;
    let fraction_scale = 10u128.pow((decimals as usize - fraction.len()) as u32);
    let fraction_units = parse_digits(fraction)? * fraction_scale;

    whole_units.checked_add(fraction_units).ok_or(AMOUNT_EXCEEDS_MAX_U128)
}

/// Format integer base units as a canonical decimal string.
/// Trailing fractional zeros are dropped, as is the decimal point of whole amounts.
///
/// # Parameters
/// - `amount` - The amount in base units
/// - `decimals` - The number of decimals of the token
///
/// # Returns
/// - The decimal string, e.g. `1_500_000` with 6 decimals is `"1.5"`
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn format_token_amount(amount: u128, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

fn parse_digits(digits: &str) -> Result<u128, CoreError> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add((b - b'0') as u128))
            .ok_or(AMOUNT_EXCEEDS_MAX_U128)
    })
}
