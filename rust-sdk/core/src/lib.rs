//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

// FIXME: disable std for non-test builds to decrease wasm binary size.
// There is currently something in tsify that prevents this:
// https://github.com/madonoharu/tsify/issues/56
// #![cfg_attr(not(test), no_std)]

mod constants;
mod math;
mod quote;
mod types;

#[cfg(all(test, not(feature = "wasm")))]
mod tests;

pub use constants::*;
pub use math::*;
pub use quote::*;
pub use types::*;
