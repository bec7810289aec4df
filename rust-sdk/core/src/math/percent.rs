//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

use log::debug;

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

use libm::{ceil, round};

use crate::{try_get_min_amount_with_slippage_tolerance, CoreError, MinimumAmounts, BPS_DENOMINATOR, INVALID_ARGUMENT, INVALID_SLIPPAGE_TOLERANCE};

/// Convert a percentage to basis points, `round(percent * 100)`.
///
/// # Parameters
/// - `percent` - The percentage, e.g. `0.5` for 0.5%
///
/// # Returns
/// - The basis points, or an error for non-finite input or a result outside `0..=10000`
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn percent_to_basis_points(percent: f64) -> Result<u16, CoreError> {
    try_percent_to_basis_points(percent, round)
}

// Rounding up never asks for more than the tolerance in percent allows.
// The offset absorbs float noise such as `0.07 * 100.0 == 7.000000000000001`.
fn percent_to_basis_points_rounded_up(percent: f64) -> Result<u16, CoreError> {
    try_percent_to_basis_points(percent, |bps| ceil(bps - 1e-9))
}

fn try_percent_to_basis_points(percent: f64, rounding: impl Fn(f64) -> f64) -> Result<u16, CoreError> {
    if !percent.is_finite() {
        return Err(INVALID_ARGUMENT);
    }
    let bps = rounding(percent * 100.0);
    if bps < 0.0 || bps > BPS_DENOMINATOR as f64 {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    Ok(bps as u16)
}

/// Convert basis points to a percentage, `bps / 100`.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn basis_points_to_percent(bps: u16) -> f64 {
    bps as f64 / 100.0
}

/// The share of the pool owned by `lp_tokens_minted` once they are added to the supply.
///
/// # Parameters
/// - `lp_tokens_minted` - The LP tokens of the user
/// - `total_supply_after` - The total LP supply including `lp_tokens_minted`
///
/// # Returns
/// - The share in percent, or `None` when the supply is zero or smaller than the minted amount
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn pool_share_percent(lp_tokens_minted: u128, total_supply_after: u128) -> Option<f64> {
    if total_supply_after == 0 || lp_tokens_minted > total_supply_after {
        return None;
    }
    Some(lp_tokens_minted as f64 / total_supply_after as f64 * 100.0)
}

/// Minimum amounts of a liquidity deposit for a slippage tolerance given in percent.
/// The tolerance is converted to basis points rounding up, so a fractional basis point never
/// raises the minimum, and the minimums are computed in base units rounding down.
///
/// # Parameters
/// - `desired_a` - The desired amount of token A in base units
/// - `desired_b` - The desired amount of token B in base units
/// - `slippage_percent` - The slippage tolerance in percent
///
/// # Returns
/// - The minimum amounts, or `None` for a tolerance that is not a percentage
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn minimum_amounts(desired_a: u128, desired_b: u128, slippage_percent: f64) -> Option<MinimumAmounts> {
    let bps = match percent_to_basis_points_rounded_up(slippage_percent) {
        Ok(bps) => bps,
        Err(err) => {
            debug!(target: "log", "No minimum amounts for slippage {}%: {}", slippage_percent, err);
            return None;
        }
    };
    Some(MinimumAmounts {
        min_a: try_get_min_amount_with_slippage_tolerance(desired_a, bps).ok()?,
        min_b: try_get_min_amount_with_slippage_tolerance(desired_b, bps).ok()?,
    })
}
