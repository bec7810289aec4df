//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

use crate::{try_get_min_amount_with_slippage_tolerance, try_get_token_estimates_from_liquidity, CoreError, PairFacade, RemoveLiquidityQuote};

#[cfg(feature = "floats")]
use crate::{estimate_lp_tokens, pool_share_percent, price_ratio_from_base_units, total_supply_after_deposit, LiquidityQuote};
#[cfg(feature = "floats")]
use log::debug;

/// Computes the preview of an add-liquidity form.
/// Meant to be called on every change of the entered amounts, so it never fails:
/// `None` means no quote is available for the current input.
///
/// # Parameters
/// - `amount_a` - The deposit of token A in base units
/// - `amount_b` - The deposit of token B in base units
/// - `decimals_a` - The number of decimals of token A
/// - `decimals_b` - The number of decimals of token B
/// - `pool` - The pair state, `None` if the pair does not exist yet or was not fetched
/// - `slippage_tolerance_bps` - The slippage tolerance in bps
///
/// # Returns
/// - A LiquidityQuote
#[cfg(feature = "floats")]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn add_liquidity_quote(
    amount_a: u128,
    amount_b: u128,
    decimals_a: u8,
    decimals_b: u8,
    pool: Option<PairFacade>,
    slippage_tolerance_bps: u16,
) -> Option<LiquidityQuote> {
    let lp_tokens_estimated = estimate_lp_tokens(amount_a, amount_b, pool)?;
    let total_supply_after = total_supply_after_deposit(lp_tokens_estimated, pool)?;

    let (min_amount_a, min_amount_b) = match (
        try_get_min_amount_with_slippage_tolerance(amount_a, slippage_tolerance_bps),
        try_get_min_amount_with_slippage_tolerance(amount_b, slippage_tolerance_bps),
    ) {
        (Ok(min_a), Ok(min_b)) => (min_a, min_b),
        (Err(err), _) | (_, Err(err)) => {
            debug!(target: "log", "No liquidity quote: {}", err);
            return None;
        }
    };

    // An existing pair trades at its reserve price, whatever the entered amounts.
    let price_ratio = match pool {
        Some(pool) if pool.has_liquidity() => price_ratio_from_base_units(pool.reserve_a, decimals_a, pool.reserve_b, decimals_b),
        _ => price_ratio_from_base_units(amount_a, decimals_a, amount_b, decimals_b),
    };

    Some(LiquidityQuote {
        price_ratio,
        lp_tokens_estimated,
        pool_share_percent: pool_share_percent(lp_tokens_estimated, total_supply_after),
        min_amount_a,
        min_amount_b,
    })
}

/// Computes the preview of a remove-liquidity form.
///
/// # Parameters
/// - `liquidity_delta` - The LP tokens to burn
/// - `pool` - The pair state
/// - `slippage_tolerance_bps` - The slippage tolerance in bps
///
/// # Returns
/// - A RemoveLiquidityQuote with the estimated and minimum token amounts
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn remove_liquidity_quote(liquidity_delta: u128, pool: PairFacade, slippage_tolerance_bps: u16) -> Result<RemoveLiquidityQuote, CoreError> {
    let (token_est_a, token_est_b) = try_get_token_estimates_from_liquidity(liquidity_delta, pool)?;
    let token_min_a = try_get_min_amount_with_slippage_tolerance(token_est_a, slippage_tolerance_bps)?;
    let token_min_b = try_get_min_amount_with_slippage_tolerance(token_est_b, slippage_tolerance_bps)?;

    Ok(RemoveLiquidityQuote {
        liquidity_delta,
        token_est_a,
        token_est_b,
        token_min_a,
        token_min_b,
    })
}
