//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

/// The largest decimals count whose scale (10^38) still fits into a u128.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const MAX_TOKEN_DECIMALS: u8 = 38;
