//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

/// Reserves and LP supply of a constant-product pair, as read from chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct PairFacade {
    pub reserve_a: u128,
    pub reserve_b: u128,
    pub total_supply: u128,
}

impl PairFacade {
    pub fn new(reserve_a: u128, reserve_b: u128, total_supply: u128) -> Self {
        Self {
            reserve_a,
            reserve_b,
            total_supply,
        }
    }

    /// A pair that already has liquidity, so new deposits mint proportionally.
    pub fn has_liquidity(&self) -> bool {
        self.total_supply > 0 && self.reserve_a > 0 && self.reserve_b > 0
    }

    /// Reserves ordered as (in, out) for a trade.
    pub fn reserves(&self, a_to_b: bool) -> (u128, u128) {
        if a_to_b {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }
}
