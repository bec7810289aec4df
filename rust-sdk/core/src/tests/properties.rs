//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;
use proptest::prelude::*;

use crate::{
    estimate_lp_tokens, format_token_amount, swap_quote_by_input_token, swap_quote_by_output_token, try_get_max_amount_with_slippage_tolerance,
    try_get_min_amount_with_slippage_tolerance, try_parse_token_amount, PairFacade, BPS_DENOMINATOR, DEFAULT_SWAP_FEE_BPS, MAX_TOKEN_DECIMALS,
};

// V2 reserves are uint112
const MAX_RESERVE: u128 = (1u128 << 112) - 1;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn min_amount_never_exceeds_amount(amount in any::<u128>(), bps in 0u16..=BPS_DENOMINATOR) {
        let min = try_get_min_amount_with_slippage_tolerance(amount, bps).unwrap();
        prop_assert!(min <= amount);
        let expected = <U256>::from(amount) * <U256>::from(BPS_DENOMINATOR - bps) / <U256>::from(BPS_DENOMINATOR);
        prop_assert_eq!(<U256>::from(min), expected);
    }

    #[test]
    fn max_amount_never_below_amount(amount in 0u128..=u64::MAX as u128, bps in 0u16..=BPS_DENOMINATOR) {
        let max = try_get_max_amount_with_slippage_tolerance(amount, bps).unwrap();
        prop_assert!(max >= amount);
    }

    #[test]
    fn token_amount_format_parse_round_trip(amount in any::<u128>(), decimals in 0u8..=MAX_TOKEN_DECIMALS) {
        let formatted = format_token_amount(amount, decimals);
        prop_assert_eq!(try_parse_token_amount(&formatted, decimals), Ok(amount));
    }

    #[test]
    fn bootstrap_lp_is_floor_of_geometric_mean(amount_a in any::<u128>(), amount_b in any::<u128>()) {
        let lp = estimate_lp_tokens(amount_a, amount_b, None).unwrap();
        let product = <U256>::from(amount_a) * <U256>::from(amount_b);
        let lp = <U256>::from(lp);
        prop_assert!(lp * lp <= product);
        if let Some(next_square) = (lp + U256::ONE).checked_mul(lp + U256::ONE) {
            prop_assert!(next_square > product);
        }
    }

    #[test]
    fn proportional_lp_bounded_by_each_side(
        amount_a in 1u128..=u64::MAX as u128,
        amount_b in 1u128..=u64::MAX as u128,
        reserve_a in 1u128..=MAX_RESERVE,
        reserve_b in 1u128..=MAX_RESERVE,
        total_supply in 1u128..=u32::MAX as u128,
    ) {
        let pool = PairFacade::new(reserve_a, reserve_b, total_supply);
        let lp = estimate_lp_tokens(amount_a, amount_b, Some(pool)).unwrap();
        let share_a = <U256>::from(amount_a) * <U256>::from(total_supply) / <U256>::from(reserve_a);
        let share_b = <U256>::from(amount_b) * <U256>::from(total_supply) / <U256>::from(reserve_b);
        prop_assert!(<U256>::from(lp) <= share_a);
        prop_assert!(<U256>::from(lp) <= share_b);
        prop_assert!(<U256>::from(lp) == share_a || <U256>::from(lp) == share_b);
    }

    #[test]
    fn exact_out_of_exact_in_costs_no_more(
        token_in in 1u128..=u64::MAX as u128,
        reserve_a in 1_000u128..=MAX_RESERVE,
        reserve_b in 1_000u128..=MAX_RESERVE,
        a_to_b in any::<bool>(),
    ) {
        let pool = PairFacade::new(reserve_a, reserve_b, 1);
        let exact_in = swap_quote_by_input_token(token_in, a_to_b, 0, pool, DEFAULT_SWAP_FEE_BPS).unwrap();
        prop_assume!(exact_in.token_est_out > 0);
        let exact_out = swap_quote_by_output_token(exact_in.token_est_out, !a_to_b, 0, pool, DEFAULT_SWAP_FEE_BPS).unwrap();
        // getAmountIn adds one unit even when the division is exact
        prop_assert!(exact_out.token_est_in <= token_in + 1);
        prop_assert!(exact_in.price_impact_bps >= DEFAULT_SWAP_FEE_BPS - 1);
    }
}

#[cfg(feature = "floats")]
mod floats {
    use approx::relative_eq;
    use proptest::prelude::*;

    use crate::{basis_points_to_percent, percent_to_basis_points, pool_share_percent, price_ratio, BPS_DENOMINATOR};

    proptest! {
        #[test]
        fn price_ratio_times_b_is_a(amount_a in 1e-12f64..1e12, amount_b in 1e-12f64..1e12) {
            let ratio = price_ratio(amount_a, amount_b).unwrap();
            prop_assert!(relative_eq!(ratio * amount_b, amount_a, max_relative = 1e-12));
        }

        #[test]
        fn basis_points_round_trip(bps in 0u16..=BPS_DENOMINATOR) {
            prop_assert_eq!(percent_to_basis_points(basis_points_to_percent(bps)), Ok(bps));
        }

        #[test]
        fn pool_share_is_a_percentage(total in 1u128..=u64::MAX as u128, lp_fraction in 0.0f64..=1.0) {
            let lp = (total as f64 * lp_fraction) as u128;
            let lp = lp.min(total);
            let share = pool_share_percent(lp, total).unwrap();
            prop_assert!((0.0..=100.0).contains(&share));
        }
    }
}
