//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

/// Swap fee of a V2 pair in basis points (0.3%, i.e. 997/1000 of the input is traded).
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const DEFAULT_SWAP_FEE_BPS: u16 = 30;
