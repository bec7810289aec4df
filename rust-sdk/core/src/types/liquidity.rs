//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct LiquidityQuote {
    /// Human-unit price of token A in token B, from the reserves when the pair has liquidity,
    /// else from the entered amounts; `None` while that ratio is undefined.
    pub price_ratio: Option<f64>,
    pub lp_tokens_estimated: u128,
    /// Share of the pool after the deposit; `None` if the pool would still be empty.
    pub pool_share_percent: Option<f64>,
    pub min_amount_a: u128,
    pub min_amount_b: u128,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct RemoveLiquidityQuote {
    pub liquidity_delta: u128,
    pub token_est_a: u128,
    pub token_est_b: u128,
    pub token_min_a: u128,
    pub token_min_b: u128,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct MinimumAmounts {
    pub min_a: u128,
    pub min_b: u128,
}
