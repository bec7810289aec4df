//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

pub type CoreError = &'static str;

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const DIVISION_BY_ZERO: CoreError = "Division by zero";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const AMOUNT_EXCEEDS_MAX_U128: CoreError = "Amount exceeds max u128";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_ARGUMENT: CoreError = "Invalid argument";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_SLIPPAGE_TOLERANCE: CoreError = "Invalid slippage tolerance";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_FEE_RATE: CoreError = "Invalid fee rate";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_TOKEN_AMOUNT: CoreError = "Invalid token amount";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_TOKEN_DECIMALS: CoreError = "Invalid token decimals";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const TOO_MANY_FRACTIONAL_DIGITS: CoreError = "Amount has more fractional digits than the token decimals";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const ZERO_TRADABLE_AMOUNT: CoreError = "Zero tradable amount";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INSUFFICIENT_LIQUIDITY: CoreError = "Insufficient liquidity";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const LIQUIDITY_EXCEEDS_TOTAL_SUPPLY: CoreError = "Liquidity exceeds total supply";
