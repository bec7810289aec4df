//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

use crate::{MAX_SLIPPAGE_TOLERANCE_BPS, MIN_SLIPPAGE_TOLERANCE_BPS};

/// Inclusive slippage tolerance range in basis points.
///
/// The default is the floor/ceiling enforced by the router contracts. Chains that configure
/// tighter bounds construct their own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct SlippageBounds {
    pub min_bps: u16,
    pub max_bps: u16,
}

impl SlippageBounds {
    pub fn new(min_bps: u16, max_bps: u16) -> Self {
        Self { min_bps, max_bps }
    }
}

impl Default for SlippageBounds {
    fn default() -> Self {
        Self {
            min_bps: MIN_SLIPPAGE_TOLERANCE_BPS,
            max_bps: MAX_SLIPPAGE_TOLERANCE_BPS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub enum ToleranceViolation {
    BelowMinimum,
    AboveMaximum,
    InvalidBounds,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct ToleranceCheck {
    pub valid: bool,
    pub reason: Option<ToleranceViolation>,
}

impl ToleranceCheck {
    pub fn valid() -> Self {
        Self { valid: true, reason: None }
    }

    pub fn invalid(reason: ToleranceViolation) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}
