//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod amount;
mod liquidity;
mod token;
mod u256_math;

#[cfg(feature = "floats")]
mod percent;
#[cfg(feature = "floats")]
mod price;

pub use amount::*;
pub use liquidity::*;
pub use token::*;
pub use u256_math::*;

#[cfg(feature = "floats")]
pub use percent::*;
#[cfg(feature = "floats")]
pub use price::*;
