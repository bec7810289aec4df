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

use crate::{
    try_mul_div, CoreError, SlippageBounds, ToleranceCheck, ToleranceViolation, BPS_DENOMINATOR, INVALID_FEE_RATE, INVALID_SLIPPAGE_TOLERANCE,
};

/// Get the minimum amount with a slippage tolerance.
/// This is the amount that is echoed to the router as `amountOutMin`/`amountAMin`,
/// so it rounds down exactly like the contract: `amount * (10000 - bps) / 10000`.
///
/// # Parameters
/// - `amount`: The amount in base units
/// - `slippage_tolerance_bps`: The slippage tolerance in bps (should be in range 0..BPS_DENOMINATOR)
///
/// # Returns
/// - `u128`: The minimum amount
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_get_min_amount_with_slippage_tolerance(amount: u128, slippage_tolerance_bps: u16) -> Result<u128, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        debug!(target: "log", "Rejected slippage tolerance of {} bps", slippage_tolerance_bps);
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = (BPS_DENOMINATOR - slippage_tolerance_bps) as u128;
    try_mul_div(amount, numerator, BPS_DENOMINATOR as u128, false)
}

/// Get the maximum amount with a slippage tolerance.
/// Used as `amountInMax` of exact-output swaps, so it rounds up.
///
/// # Parameters
/// - `amount`: The amount in base units
/// - `slippage_tolerance_bps`: The slippage tolerance in bps (should be in range 0..BPS_DENOMINATOR)
///
/// # Returns
/// - `u128`: The maximum amount
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_get_max_amount_with_slippage_tolerance(amount: u128, slippage_tolerance_bps: u16) -> Result<u128, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        debug!(target: "log", "Rejected slippage tolerance of {} bps", slippage_tolerance_bps);
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = BPS_DENOMINATOR as u128 + slippage_tolerance_bps as u128;
    try_mul_div(amount, numerator, BPS_DENOMINATOR as u128, true)
}

/// Check a slippage tolerance against inclusive bounds.
///
/// # Parameters
/// - `slippage_tolerance_bps`: The slippage tolerance in bps
/// - `bounds`: The accepted range, `SlippageBounds::default()` for the contract floor/ceiling
///
/// # Returns
/// - `ToleranceCheck`: Whether the tolerance is accepted and, if not, why
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn validate_slippage_tolerance(slippage_tolerance_bps: u16, bounds: SlippageBounds) -> ToleranceCheck {
    if bounds.min_bps > bounds.max_bps || bounds.max_bps > BPS_DENOMINATOR {
        ToleranceCheck::invalid(ToleranceViolation::InvalidBounds)
    } else if slippage_tolerance_bps < bounds.min_bps {
        ToleranceCheck::invalid(ToleranceViolation::BelowMinimum)
    } else if slippage_tolerance_bps > bounds.max_bps {
        ToleranceCheck::invalid(ToleranceViolation::AboveMaximum)
    } else {
        ToleranceCheck::valid()
    }
}

/// Apply a swap fee to an input amount: the part of the input that is actually traded.
///
/// # Parameters
/// - `amount`: The input amount
/// - `fee_bps`: The pair fee in bps
///
/// # Returns
/// - `u128`: The amount after the fee, rounded down
pub fn try_apply_swap_fee(amount: u128, fee_bps: u16) -> Result<u128, CoreError> {
    if fee_bps >= BPS_DENOMINATOR {
        return Err(INVALID_FEE_RATE);
    }
    try_mul_div(amount, (BPS_DENOMINATOR - fee_bps) as u128, BPS_DENOMINATOR as u128, false)
}

/// Reverse the swap fee: the input needed so that `amount` is left after the fee.
///
/// # Parameters
/// - `amount`: The amount after the fee
/// - `fee_bps`: The pair fee in bps
///
/// # Returns
/// - `u128`: The amount before the fee, rounded up
pub fn try_reverse_apply_swap_fee(amount: u128, fee_bps: u16) -> Result<u128, CoreError> {
    if fee_bps >= BPS_DENOMINATOR {
        return Err(INVALID_FEE_RATE);
    }
    try_mul_div(amount, BPS_DENOMINATOR as u128, (BPS_DENOMINATOR - fee_bps) as u128, true)
}

#[cfg(all(test, not(feature = "wasm")))]
mod tests {
    use super::*;
    use crate::{AMOUNT_EXCEEDS_MAX_U128, DEFAULT_SLIPPAGE_TOLERANCE_BPS, MAX_SLIPPAGE_TOLERANCE_BPS, MIN_SLIPPAGE_TOLERANCE_BPS};

    #[test]
    fn test_get_min_amount_with_slippage_tolerance() {
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1000, 50), Ok(995));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1000, 100), Ok(990));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1000, 0), Ok(1000));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1000, 10000), Ok(0));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(999, 50), Ok(994));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1000, 10001), Err(INVALID_SLIPPAGE_TOLERANCE));
    }

    #[test]
    fn test_get_min_amount_large_values() {
        // 1 billion tokens with 18 decimals
        let amount = 1_000_000_000 * 10u128.pow(18);
        assert_eq!(try_get_min_amount_with_slippage_tolerance(amount, 50), Ok(995_000_000 * 10u128.pow(18)));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(u128::MAX, 0), Ok(u128::MAX));
    }

    #[test]
    fn test_get_max_amount_with_slippage_tolerance() {
        assert_eq!(try_get_max_amount_with_slippage_tolerance(1000, 50), Ok(1005));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(1000, 100), Ok(1010));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(999, 50), Ok(1004));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(1000, 10000), Ok(2000));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(1000, 10001), Err(INVALID_SLIPPAGE_TOLERANCE));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(u128::MAX, 1), Err(AMOUNT_EXCEEDS_MAX_U128));
    }

    #[test]
    fn test_validate_slippage_tolerance() {
        let bounds = SlippageBounds::default();
        assert_eq!(bounds.min_bps, MIN_SLIPPAGE_TOLERANCE_BPS);
        assert_eq!(bounds.max_bps, MAX_SLIPPAGE_TOLERANCE_BPS);
        assert_eq!(validate_slippage_tolerance(DEFAULT_SLIPPAGE_TOLERANCE_BPS, bounds), ToleranceCheck::valid());

        let below = validate_slippage_tolerance(40, bounds);
        assert!(!below.valid);
        assert_eq!(below.reason, Some(ToleranceViolation::BelowMinimum));

        let above = validate_slippage_tolerance(1500, bounds);
        assert!(!above.valid);
        assert_eq!(above.reason, Some(ToleranceViolation::AboveMaximum));

        let ok = validate_slippage_tolerance(500, bounds);
        assert!(ok.valid);
        assert_eq!(ok.reason, None);

        assert!(validate_slippage_tolerance(50, bounds).valid);
        assert!(validate_slippage_tolerance(1000, bounds).valid);
    }

    #[test]
    fn test_validate_slippage_tolerance_custom_bounds() {
        let bounds = SlippageBounds::new(10, 500);
        assert!(validate_slippage_tolerance(10, bounds).valid);
        assert!(!validate_slippage_tolerance(501, bounds).valid);

        let inverted = validate_slippage_tolerance(100, SlippageBounds::new(500, 10));
        assert_eq!(inverted.reason, Some(ToleranceViolation::InvalidBounds));

        let too_wide = validate_slippage_tolerance(100, SlippageBounds::new(0, 20000));
        assert_eq!(too_wide.reason, Some(ToleranceViolation::InvalidBounds));
    }

    #[test]
    fn test_apply_swap_fee() {
        assert_eq!(try_apply_swap_fee(1000, 30), Ok(997));
        assert_eq!(try_apply_swap_fee(1000, 0), Ok(1000));
        assert_eq!(try_apply_swap_fee(10, 30), Ok(9));
        assert_eq!(try_apply_swap_fee(1000, 10000), Err(INVALID_FEE_RATE));
    }

    #[test]
    fn test_reverse_apply_swap_fee() {
        assert_eq!(try_reverse_apply_swap_fee(997, 30), Ok(1000));
        assert_eq!(try_reverse_apply_swap_fee(9, 30), Ok(10));
        assert_eq!(try_reverse_apply_swap_fee(1000, 0), Ok(1000));
        assert_eq!(try_reverse_apply_swap_fee(1000, 10000), Err(INVALID_FEE_RATE));
    }
}
