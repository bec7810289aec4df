//
// Copyright (c) PairDEX contributors
//
// Licensed under PairDEX SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Item, ItemConst, ItemEnum, ItemFn, ItemStruct};

/// Exposes an item of the core crate to javascript.
///
/// - functions are exported with a camelCase `js_name`,
/// - structs and enums derive `serde` and `tsify` with camelCase fields,
/// - constants get an `_NAME()` getter returning the value as a `JsValue`.
#[proc_macro_attribute]
pub fn wasm_expose(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as Item);
    let expanded = match item {
        Item::Fn(item) => expose_fn(item),
        Item::Struct(item) => expose_struct(item),
        Item::Enum(item) => expose_enum(item),
        Item::Const(item) => expose_const(item),
        other => syn::Error::new_spanned(other, "wasm_expose only supports functions, structs, enums and constants").to_compile_error(),
    };
    expanded.into()
}

fn expose_fn(item: ItemFn) -> TokenStream2 {
    let js_name = to_camel_case(&item.sig.ident.to_string());
    quote! {
        #[::wasm_bindgen::prelude::wasm_bindgen(js_name = #js_name)]
        #item
    }
}

fn expose_struct(item: ItemStruct) -> TokenStream2 {
    quote! {
        #[derive(::serde::Serialize, ::serde::Deserialize, ::tsify::Tsify)]
        #[serde(rename_all = "camelCase")]
        #[tsify(into_wasm_abi, from_wasm_abi)]
        #item
    }
}

fn expose_enum(item: ItemEnum) -> TokenStream2 {
    quote! {
        #[derive(::serde::Serialize, ::serde::Deserialize, ::tsify::Tsify)]
        #[tsify(into_wasm_abi, from_wasm_abi)]
        #item
    }
}

fn expose_const(item: ItemConst) -> TokenStream2 {
    let ident = &item.ident;
    let getter = format_ident!("_{}", ident);
    quote! {
        #item

        #[::wasm_bindgen::prelude::wasm_bindgen(js_name = #getter)]
        pub fn #getter() -> ::wasm_bindgen::JsValue {
            ::wasm_bindgen::JsValue::from(#ident)
        }
    }
}

fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            // keep a leading underscore, drop the rest
            if result.is_empty() {
                result.push(c);
            } else {
                upper_next = true;
            }
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("estimate_lp_tokens"), "estimateLpTokens");
        assert_eq!(to_camel_case("try_get_min_amount_with_slippage_tolerance"), "tryGetMinAmountWithSlippageTolerance");
        assert_eq!(to_camel_case("price_ratio"), "priceRatio");
        assert_eq!(to_camel_case("format"), "format");
        assert_eq!(to_camel_case("_internal_name"), "_internalName");
    }
}
