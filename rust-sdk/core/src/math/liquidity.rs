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

use crate::{geometric_mean, try_mul_div, CoreError, PairFacade, INSUFFICIENT_LIQUIDITY, LIQUIDITY_EXCEEDS_TOTAL_SUPPLY};

/// Estimate the LP tokens a pair mints for a deposit.
///
/// A pair that already has liquidity mints proportionally to the smaller side of the deposit:
/// `min(amount_a * total_supply / reserve_a, amount_b * total_supply / reserve_b)`.
/// An empty or unknown pair falls back to the bootstrap estimate `sqrt(amount_a * amount_b)`.
///
/// The result is a preview; the pair contract decides the real amount.
///
/// # Parameters
/// - `amount_a` - The deposit of token A in base units
/// - `amount_b` - The deposit of token B in base units
/// - `pool` - The pair state, if known
///
/// # Returns
/// - The estimated LP tokens, or `None` if the estimate does not fit into a u128
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn estimate_lp_tokens(amount_a: u128, amount_b: u128, pool: Option<PairFacade>) -> Option<u128> {
    match pool {
        Some(pool) if pool.has_liquidity() => {
            let liquidity_a = try_mul_div(amount_a, pool.total_supply, pool.reserve_a, false).ok()?;
            let liquidity_b = try_mul_div(amount_b, pool.total_supply, pool.reserve_b, false).ok()?;
            Some(liquidity_a.min(liquidity_b))
        }
        _ => {
            debug!(target: "log", "No pair liquidity, estimating LP tokens with the geometric mean");
            Some(geometric_mean(amount_a, amount_b))
        }
    }
}

/// The LP supply after `lp_tokens_minted` are added to the pair.
/// An unknown pair counts as empty.
///
/// # Parameters
/// - `lp_tokens_minted` - The LP tokens minted by a deposit
/// - `pool` - The pair state, if known
///
/// # Returns
/// - The total supply after the deposit, or `None` on overflow
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn total_supply_after_deposit(lp_tokens_minted: u128, pool: Option<PairFacade>) -> Option<u128> {
    match pool {
        Some(pool) if pool.has_liquidity() => pool.total_supply.checked_add(lp_tokens_minted),
        _ => Some(lp_tokens_minted),
    }
}

/// The tokens a pair pays out when `liquidity_delta` LP tokens are burned.
/// Rounds down per side like the pair's `burn`.
///
/// # Parameters
/// - `liquidity_delta` - The LP tokens to burn
/// - `pool` - The pair state
///
/// # Returns
/// - `(token_a, token_b)` in base units
pub fn try_get_token_estimates_from_liquidity(liquidity_delta: u128, pool: PairFacade) -> Result<(u128, u128), CoreError> {
    if pool.total_supply == 0 {
        return Err(INSUFFICIENT_LIQUIDITY);
    }
    if liquidity_delta > pool.total_supply {
        return Err(LIQUIDITY_EXCEEDS_TOTAL_SUPPLY);
    }

    let token_a = try_mul_div(liquidity_delta, pool.reserve_a, pool.total_supply, false)?;
    let token_b = try_mul_div(liquidity_delta, pool.reserve_b, pool.total_supply, false)?;
    Ok((token_a, token_b))
}
