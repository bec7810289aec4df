//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

use libm::pow;

/// Convert base units to a human-unit float for display.
///
/// # Parameters
/// - `amount` - The amount in base units
/// - `decimals` - The number of decimals of the token
///
/// # Returns
/// - A f64 value, e.g. `1_500_000` with 6 decimals is `1.5`
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn base_units_to_f64(amount: u128, decimals: u8) -> f64 {
    amount as f64 / pow(10.0, decimals as f64)
}

/// The price of token A denominated in token B, derived from two amounts entered by the user.
/// Returns `None` while either amount is zero, negative or not a number.
///
/// # Parameters
/// - `amount_a` - The human-unit amount of token A
/// - `amount_b` - The human-unit amount of token B
///
/// # Returns
/// - `amount_a / amount_b`
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn price_ratio(amount_a: f64, amount_b: f64) -> Option<f64> {
    if !is_positive_amount(amount_a) || !is_positive_amount(amount_b) {
        return None;
    }
    let ratio = amount_a / amount_b;
    ratio.is_finite().then_some(ratio)
}

/// Same as `price_ratio`, for amounts in base units.
///
/// # Parameters
/// - `amount_a` - The amount of token A in base units
/// - `decimals_a` - The number of decimals of token A
/// - `amount_b` - The amount of token B in base units
/// - `decimals_b` - The number of decimals of token B
///
/// # Returns
/// - The human-unit price ratio
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn price_ratio_from_base_units(amount_a: u128, decimals_a: u8, amount_b: u128, decimals_b: u8) -> Option<f64> {
    price_ratio(base_units_to_f64(amount_a, decimals_a), base_units_to_f64(amount_b, decimals_b))
}

/// USD value of a token amount at an oracle price.
/// Returns `None` when the oracle has no price for the token.
///
/// # Parameters
/// - `amount` - The amount in base units
/// - `decimals` - The number of decimals of the token
/// - `price_usd` - The USD price of one whole token
///
/// # Returns
/// - The USD value
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn token_usd_value(amount: u128, decimals: u8, price_usd: Option<f64>) -> Option<f64> {
    let price_usd = price_usd?;
    if !price_usd.is_finite() || price_usd < 0.0 {
        return None;
    }
    Some(base_units_to_f64(amount, decimals) * price_usd)
}

fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}
