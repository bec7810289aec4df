//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod liquidity;
mod pool;
mod slippage;
mod swap;
mod token;

pub use liquidity::*;
pub use pool::*;
pub use slippage::*;
pub use swap::*;
pub use token::*;
