//!
//! Macros for the main crate.
//!

mod utils;

use proc_macro::TokenStream as Tokens;
use quote::{quote, ToTokens};
use syn::parse_macro_input;
use utils::{get_item_attrs, span_field, AbcStandardRef, ToRustdoc};

///
/// ## AbcRef
///
/// Allows easy reference of the **ABC 2.1** standard.
///
/// This macro will add an additional section at the top of the Rustdoc
/// for the item attached, linking to the relevant section of the standard.
///
/// ### Example
///
/// ```ignore
/// use abc_scanner_macros::AbcRef;
///
/// // With a title and an anchor into the standard.
/// #[AbcRef("Bar lines", "abc:standard:v2.1:bar_lines")]
/// fn scan_barline() {}
///
/// // The anchor alone doubles as the title.
/// #[AbcRef("abc:standard:v2.1:lyrics")]
/// fn scan_lyric_text() {}
/// ```
///
#[allow(non_snake_case)]
#[proc_macro_attribute]
pub fn AbcRef(params: Tokens, target: Tokens) -> Tokens {
    let mut target: syn::Item = parse_macro_input!(target);
    let params: AbcStandardRef = parse_macro_input!(params);
    let attrs = params.to_rustdoc();

    let Some(original_attrs) = get_item_attrs(&mut target) else {
        return syn::Error::new_spanned(target, "Cannot add a standard reference to this item.")
            .into_compile_error()
            .into();
    };

    // Prepend our new documentation to the start of
    // the attribute macros.
    *original_attrs = attrs
        .into_iter()
        .chain(original_attrs.iter().cloned())
        .collect();

    target.into_token_stream().into()
}

///
/// ## Spanned
///
/// Implements `crate::common::Spanned` for a struct
/// by returning its (only) field of type `Span`.
///
#[proc_macro_derive(Spanned)]
pub fn spanned(target: Tokens) -> Tokens {
    let target: syn::ItemStruct = parse_macro_input!(target);

    let Some(member) = span_field(&target) else {
        return syn::Error::new_spanned(&target.ident, "Expected a field of type `Span`.")
            .into_compile_error()
            .into();
    };

    let ident = &target.ident;
    let (impl_generics, ty_generics, where_clause) = target.generics.split_for_impl();

    quote! {
        impl #impl_generics crate::common::Spanned for #ident #ty_generics #where_clause {
            fn span(&self) -> crate::common::Span {
                self.#member
            }
        }
    }
    .into()
}
