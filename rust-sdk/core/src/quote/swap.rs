//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

use ethnum::U256;

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

use crate::{
    try_apply_swap_fee, try_get_max_amount_with_slippage_tolerance, try_get_min_amount_with_slippage_tolerance, try_into_u128, CoreError,
    ExactInSwapQuote, ExactOutSwapQuote, PairFacade, ARITHMETIC_OVERFLOW, BPS_DENOMINATOR, INSUFFICIENT_LIQUIDITY, INVALID_FEE_RATE,
    ZERO_TRADABLE_AMOUNT,
};

/// Computes the expected output of a swap with an exact input amount.
///
/// # Arguments
/// - `token_in`: The input token amount.
/// - `specified_token_a`: If `true`, the input token is token A. Otherwise, it is token B.
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points.
/// - `pool`: The pair state.
/// - `fee_bps`: The pair fee in basis points, `DEFAULT_SWAP_FEE_BPS` for a V2 pair.
///
/// # Returns
/// The quote, where `token_min_out` is the `amountOutMin` to send to the router.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn swap_quote_by_input_token(
    token_in: u128,
    specified_token_a: bool,
    slippage_tolerance_bps: u16,
    pool: PairFacade,
    fee_bps: u16,
) -> Result<ExactInSwapQuote, CoreError> {
    if token_in == 0 {
        return Err(ZERO_TRADABLE_AMOUNT);
    }
    let (reserve_in, reserve_out) = pool.reserves(specified_token_a);

    let token_est_out = try_get_amount_out(token_in, reserve_in, reserve_out, fee_bps)?;
    let token_min_out = try_get_min_amount_with_slippage_tolerance(token_est_out, slippage_tolerance_bps)?;
    let trade_fee = token_in - try_apply_swap_fee(token_in, fee_bps)?;
    let price_impact_bps = get_price_impact_bps(token_in, token_est_out, reserve_in, reserve_out);

    Ok(ExactInSwapQuote {
        token_in,
        token_est_out,
        token_min_out,
        trade_fee,
        price_impact_bps,
    })
}

/// Computes the required input of a swap with an exact output amount.
///
/// # Arguments
/// - `token_out`: The output token amount.
/// - `specified_token_a`: If `true`, the output token is token A. Otherwise, it is token B.
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points.
/// - `pool`: The pair state.
/// - `fee_bps`: The pair fee in basis points, `DEFAULT_SWAP_FEE_BPS` for a V2 pair.
///
/// # Returns
/// The quote, where `token_max_in` is the `amountInMax` to send to the router.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn swap_quote_by_output_token(
    token_out: u128,
    specified_token_a: bool,
    slippage_tolerance_bps: u16,
    pool: PairFacade,
    fee_bps: u16,
) -> Result<ExactOutSwapQuote, CoreError> {
    if token_out == 0 {
        return Err(ZERO_TRADABLE_AMOUNT);
    }
    let (reserve_in, reserve_out) = pool.reserves(!specified_token_a);

    let token_est_in = try_get_amount_in(token_out, reserve_in, reserve_out, fee_bps)?;
    let token_max_in = try_get_max_amount_with_slippage_tolerance(token_est_in, slippage_tolerance_bps)?;
    let trade_fee = token_est_in - try_apply_swap_fee(token_est_in, fee_bps)?;
    let price_impact_bps = get_price_impact_bps(token_est_in, token_out, reserve_in, reserve_out);

    Ok(ExactOutSwapQuote {
        token_out,
        token_est_in,
        token_max_in,
        trade_fee,
        price_impact_bps,
    })
}

/// Output of a constant-product swap, rounded down like the router's `getAmountOut`:
/// `in * (10000 - fee) * reserve_out / (reserve_in * 10000 + in * (10000 - fee))`.
pub fn try_get_amount_out(token_in: u128, reserve_in: u128, reserve_out: u128, fee_bps: u16) -> Result<u128, CoreError> {
    if fee_bps >= BPS_DENOMINATOR {
        return Err(INVALID_FEE_RATE);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(INSUFFICIENT_LIQUIDITY);
    }

    let amount_in_with_fee = <U256>::from(token_in) * <U256>::from(BPS_DENOMINATOR - fee_bps);
    let numerator = amount_in_with_fee.checked_mul(<U256>::from(reserve_out)).ok_or(ARITHMETIC_OVERFLOW)?;
    let denominator = (<U256>::from(reserve_in) * <U256>::from(BPS_DENOMINATOR))
        .checked_add(amount_in_with_fee)
        .ok_or(ARITHMETIC_OVERFLOW)?;

    try_into_u128(numerator / denominator)
}

/// Input of a constant-product swap for a given output, rounded up like the router's `getAmountIn`:
/// `reserve_in * out * 10000 / ((reserve_out - out) * (10000 - fee)) + 1`.
pub fn try_get_amount_in(token_out: u128, reserve_in: u128, reserve_out: u128, fee_bps: u16) -> Result<u128, CoreError> {
    if fee_bps >= BPS_DENOMINATOR {
        return Err(INVALID_FEE_RATE);
    }
    if reserve_in == 0 || token_out >= reserve_out {
        return Err(INSUFFICIENT_LIQUIDITY);
    }

    let numerator = (<U256>::from(reserve_in) * <U256>::from(token_out))
        .checked_mul(<U256>::from(BPS_DENOMINATOR))
        .ok_or(ARITHMETIC_OVERFLOW)?;
    let denominator = <U256>::from(reserve_out - token_out) * <U256>::from(BPS_DENOMINATOR - fee_bps);

    try_into_u128(numerator / denominator + U256::ONE)
}

/// Price impact of a trade in bps: how much worse `token_out` is than the output at the
/// pre-trade spot price (fee included, as the trader sees it).
pub fn get_price_impact_bps(token_in: u128, token_out: u128, reserve_in: u128, reserve_out: u128) -> u16 {
    let spot_out = <U256>::from(token_in) * <U256>::from(reserve_out);
    let actual_out = <U256>::from(token_out) * <U256>::from(reserve_in);
    if spot_out == U256::ZERO || actual_out >= spot_out {
        return 0;
    }

    // Drop low bits so the scaled difference cannot overflow.
    let difference = spot_out - actual_out;
    let shift = (256 - spot_out.leading_zeros()).saturating_sub(240);
    let impact = (difference >> shift) * <U256>::from(BPS_DENOMINATOR) / (spot_out >> shift);
    impact.as_u128() as u16
}
