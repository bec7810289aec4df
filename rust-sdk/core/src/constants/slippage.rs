//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

/// Basis points in 100%.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const BPS_DENOMINATOR: u16 = 10_000;

/// The lowest slippage tolerance the router contracts accept (0.5%).
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const MIN_SLIPPAGE_TOLERANCE_BPS: u16 = 50;

/// The highest slippage tolerance the router contracts accept (10%).
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const MAX_SLIPPAGE_TOLERANCE_BPS: u16 = 1_000;

/// The tolerance a form starts with, the contract floor.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const DEFAULT_SLIPPAGE_TOLERANCE_BPS: u16 = 50;
