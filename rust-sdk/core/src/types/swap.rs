//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct ExactInSwapQuote {
    pub token_in: u128,
    pub token_est_out: u128,
    pub token_min_out: u128,
    pub trade_fee: u128,
    pub price_impact_bps: u16,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct ExactOutSwapQuote {
    pub token_out: u128,
    pub token_est_in: u128,
    pub token_max_in: u128,
    pub trade_fee: u128,
    pub price_impact_bps: u16,
}
