//!
//! Utilities for the utility macros.
//!

use std::ops::Deref;

use proc_macro2::Span;
use syn::{parse_quote, punctuated::Punctuated, Token};

///
/// Where the ABC 2.1 standard lives.
///
const STANDARD_BASE: &str = "https://abcnotation.com/wiki/abc:standard:v2.1";

///
/// A lit str that refuses to be empty.
///
pub struct NonEmptyStr(syn::LitStr);

impl syn::parse::Parse for NonEmptyStr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lit: syn::LitStr = input.parse()?;

        if lit.value().trim().is_empty() {
            return Err(syn::Error::new(lit.span(), "This should not be empty."));
        }

        Ok(Self(lit))
    }
}

impl Deref for NonEmptyStr {
    type Target = syn::LitStr;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

///
/// Parameters of `#[AbcRef(...)]`: an optional title,
/// then the anchor of the section in the standard.
///
pub struct AbcStandardRef {
    title: String,
    anchor: String,
}

impl syn::parse::Parse for AbcStandardRef {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let params = Punctuated::<NonEmptyStr, Token![,]>::parse_terminated(input)?;
        let mut params = params.into_iter().map(|st| st.value());

        match (params.next(), params.next(), params.next()) {
            (Some(anchor), None, None) => Ok(Self {
                title: anchor.rsplit(':').next().unwrap_or(&anchor).replace('_', " "),
                anchor,
            }),
            (Some(title), Some(anchor), None) => Ok(Self { title, anchor }),
            _ => Err(syn::Error::new(
                Span::call_site(),
                "Expected `(\"anchor\")` or `(\"Title\", \"anchor\")`.",
            )),
        }
    }
}

impl AbcStandardRef {
    fn url(&self) -> String {
        if self.anchor.starts_with("https://") {
            return self.anchor.clone();
        }

        format!("{STANDARD_BASE}#{}", self.anchor.trim_start_matches('#'))
    }
}

///
/// Conversion into a list of `#[doc = "..."]` attributes.
///
pub trait ToRustdoc {
    fn to_rustdoc(&self) -> Vec<syn::Attribute>;
}

impl ToRustdoc for AbcStandardRef {
    fn to_rustdoc(&self) -> Vec<syn::Attribute> {
        let heading = format!(" ## {}", self.title);
        let link = format!(" See [ABC 2.1: {}]({}).", self.title, self.url());

        vec![
            parse_quote!(#[doc = ""]),
            parse_quote!(#[doc = #heading]),
            parse_quote!(#[doc = #link]),
            parse_quote!(#[doc = ""]),
        ]
    }
}

///
/// Get the attributes of an item, if it can carry any.
///
pub fn get_item_attrs(item: &mut syn::Item) -> Option<&mut Vec<syn::Attribute>> {
    match item {
        syn::Item::Const(syn::ItemConst { attrs, .. })
        | syn::Item::Enum(syn::ItemEnum { attrs, .. })
        | syn::Item::Fn(syn::ItemFn { attrs, .. })
        | syn::Item::Mod(syn::ItemMod { attrs, .. })
        | syn::Item::Static(syn::ItemStatic { attrs, .. })
        | syn::Item::Struct(syn::ItemStruct { attrs, .. })
        | syn::Item::Trait(syn::ItemTrait { attrs, .. })
        | syn::Item::Type(syn::ItemType { attrs, .. }) => Some(attrs),
        _ => None,
    }
}

///
/// Checks if a type's path ends in the given identifier.
///
fn is_named_type(ty: &syn::Type, ident: &str) -> bool {
    match ty {
        syn::Type::Path(syn::TypePath { path, .. }) => path
            .segments
            .last()
            .map(|seg| seg.ident == ident)
            .unwrap_or(false),
        _ => false,
    }
}

///
/// Find the member of a struct holding its `Span`.
///
pub fn span_field(st: &syn::ItemStruct) -> Option<syn::Member> {
    match &st.fields {
        syn::Fields::Named(syn::FieldsNamed { named, .. }) => named
            .iter()
            .find(|f| is_named_type(&f.ty, "Span"))
            .and_then(|f| f.ident.clone())
            .map(syn::Member::Named),
        syn::Fields::Unnamed(syn::FieldsUnnamed { unnamed, .. }) => unnamed
            .iter()
            .position(|f| is_named_type(&f.ty, "Span"))
            .map(|i| syn::Member::Unnamed(syn::Index::from(i))),
        syn::Fields::Unit => None,
    }
}
