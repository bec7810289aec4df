//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

// Compiles the core against a pinned version of one of its dependencies.

pub use pairdex_core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_links() {
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1000, 50), Ok(995));
        assert_eq!(estimate_lp_tokens(100, 100, None), Some(100));
        assert_eq!(percent_to_basis_points(0.5), Ok(50));
    }
}
