//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{CoreError, AMOUNT_EXCEEDS_MAX_U128, DIVISION_BY_ZERO};

/// Narrow a 256-bit intermediate back to u128.
pub fn try_into_u128(value: U256) -> Result<u128, CoreError> {
    let (hi, lo) = value.into_words();
    if hi != 0 {
        return Err(AMOUNT_EXCEEDS_MAX_U128);
    }
    Ok(lo)
}

/// Computes `value * numerator / denominator` without overflowing the intermediate product.
///
/// # Parameters
/// - `value` - The value to scale
/// - `numerator` - The multiplier
/// - `denominator` - The divisor, must be non-zero
/// - `round_up` - Round the quotient up instead of down
///
/// # Returns
/// - The scaled value, or an error if the divisor is zero or the result does not fit into a u128
pub fn try_mul_div(value: u128, numerator: u128, denominator: u128, round_up: bool) -> Result<u128, CoreError> {
    if denominator == 0 {
        return Err(DIVISION_BY_ZERO);
    }

    let product = <U256>::from(value) * <U256>::from(numerator);
    let denominator = <U256>::from(denominator);
    let quotient = product / denominator;
    let result = if round_up && product % denominator != U256::ZERO {
        quotient + U256::ONE
    } else {
        quotient
    };

    try_into_u128(result)
}

/// Floor of the square root of a 256-bit value.
/// The root of any U256 fits into 128 bits.
pub fn sqrt_u256(value: U256) -> u128 {
    if value < <U256>::from(2u8) {
        return value.as_u128();
    }

    // Start from a power of two that is not below the root, then Newton's iteration
    // decreases monotonically onto the floor.
    let bits = 256 - value.leading_zeros();
    let mut x = <U256>::ONE << ((bits + 1) / 2);
    loop {
        let y = (x + value / x) >> 1u32;
        if y >= x {
            return x.as_u128();
        }
        x = y;
    }
}

/// Floor of the geometric mean `sqrt(a * b)`.
pub fn geometric_mean(a: u128, b: u128) -> u128 {
    sqrt_u256(<U256>::from(a) * <U256>::from(b))
}
