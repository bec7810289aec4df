//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod error;
mod pool;
mod slippage;
mod token;

pub use error::*;
pub use pool::*;
pub use slippage::*;
pub use token::*;
