//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::Kinded`, and `crate::Quantity`, so it is intended to be used by `mensura-core` (or by
//! crates that expose an identical crate-root API).
//!
//! Most users should depend on `mensura` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit>` (formats as `<value> <symbol>`)
//! - `crate::Kinded for MyUnit` when a `kind` is given, linking the marker to its family's runtime kind enum
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "mm"`: displayed unit symbol
//! - `dimension = SomeDim`: dimension marker type
//! - `ratio = 25.4`: conversion ratio to the canonical scaling unit of the dimension
//! - `kind = LengthUnit::Millimeter` (optional): runtime kind discriminant for this unit

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Path, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`; an
/// optional `kind = Family::Variant` additionally derives `crate::Kinded`.
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[unit(...)] attribute
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let ratio = &unit_attr.ratio;

    let kinded_impl = match &unit_attr.kind {
        Some(kind_path) => {
            let kind_ty = kind_enum_path(kind_path)?;
            quote! {
                impl crate::Kinded for #name {
                    type Kind = #kind_ty;
                    const KIND: Self::Kind = #kind_path;
                }
            }
        }
        None => TokenStream2::new(),
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: f64 = #ratio;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#name as crate::Unit>::SYMBOL)
            }
        }

        #kinded_impl
    };

    Ok(expanded)
}

/// Strips the variant segment off `Family::Variant`, leaving the enum's type path.
fn kind_enum_path(kind: &Path) -> syn::Result<TokenStream2> {
    if kind.segments.len() < 2 {
        return Err(syn::Error::new_spanned(
            kind,
            "`kind` must be a path to an enum variant, e.g. `LengthUnit::Millimeter`",
        ));
    }

    let ty_segments: Vec<_> = kind
        .segments
        .iter()
        .take(kind.segments.len() - 1)
        .collect();
    Ok(quote! { #(#ty_segments)::* })
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    ratio: Expr,
    kind: Option<Path>,
    // Future extensions:
    // long_name: Option<LitStr>,
    // plural: Option<LitStr>,
    // aliases: Option<Vec<LitStr>>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;
        let mut kind: Option<Path> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                "kind" => {
                    kind = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio,
            kind,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
