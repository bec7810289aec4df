//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

use std::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(feature = "wasm")]
use pairdex_macros::wasm_expose;

use crate::{format_token_amount, try_parse_token_amount, CoreError};

/// A token quantity in integer base units together with the token decimals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct TokenAmount {
    pub amount: u128,
    pub decimals: u8,
}

impl TokenAmount {
    pub fn new(amount: u128, decimals: u8) -> Self {
        Self { amount, decimals }
    }

    pub fn try_from_decimal_str(amount: &str, decimals: u8) -> Result<Self, CoreError> {
        let amount = try_parse_token_amount(amount, decimals)?;
        Ok(Self { amount, decimals })
    }

    pub fn to_decimal_string(&self) -> String {
        format_token_amount(self.amount, self.decimals)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_decimal_string())
    }
}
