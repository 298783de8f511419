//! Derive macro generating propscope field-descriptor tables.
//!
//! # Usage
//!
//! ```ignore
//! use propscope::Inspectable;
//!
//! #[derive(Inspectable)]
//! struct Text {
//!     #[prop]
//!     text: String,
//!     #[prop(res_type = "color")]
//!     text_color: Option<i32>,
//!     #[prop(res_type = "drawable", name = "background")]
//!     bg: Option<Drawable>,
//!     // Not listed: no marker.
//!     cached_layout: Layout,
//! }
//!
//! #[derive(Inspectable)]
//! struct TextState {
//!     #[state]
//!     selected: bool,
//! }
//! ```
//!
//! Every marked field's type must implement `Inspect`.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use proc_macro_crate::{FoundCrate, crate_name};
use propscope_types::ResType;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

// ============================================================================
// Runtime Path
// ============================================================================

/// Path generated code uses to reach the runtime crate.
///
/// Prefers the `propscope` facade and falls back to `propscope-describe`, so
/// renamed dependencies keep working.
fn runtime_path() -> syn::Result<syn::Path> {
    if let Ok(found) = crate_name("propscope") {
        return Ok(match found {
            // Inside the facade's own tests and binaries `crate` is the wrong
            // crate; the extern prelude name is stable.
            FoundCrate::Itself => syn::parse_quote!(::propscope),
            FoundCrate::Name(name) => path_from_name(&name),
        });
    }

    match crate_name("propscope-describe") {
        Ok(FoundCrate::Itself) => Ok(syn::parse_quote!(crate)),
        Ok(FoundCrate::Name(name)) => Ok(path_from_name(&name)),
        Err(_) => Err(syn::Error::new(
            Span::call_site(),
            "could not resolve `propscope`; add it (or `propscope-describe`) as a dependency",
        )),
    }
}

fn path_from_name(name: &str) -> syn::Path {
    let ident = syn::Ident::new(&name.replace('-', "_"), Span::call_site());
    syn::parse_quote!(::#ident)
}

// ============================================================================
// Field Attributes
// ============================================================================

enum MarkerKind {
    Prop(ResType),
    State,
}

struct FieldMarker {
    kind: MarkerKind,
    rename: Option<String>,
}

/// Parse the `#[prop(...)]` or `#[state(...)]` attribute of a field, if any.
fn parse_marker(field: &syn::Field) -> syn::Result<Option<FieldMarker>> {
    let mut marker: Option<FieldMarker> = None;

    for attr in &field.attrs {
        let kind = if attr.path().is_ident("prop") {
            MarkerKind::Prop(ResType::None)
        } else if attr.path().is_ident("state") {
            MarkerKind::State
        } else {
            continue;
        };

        if marker.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "a field takes a single #[prop] or #[state] marker",
            ));
        }

        let mut parsed = FieldMarker { kind, rename: None };
        match &attr.meta {
            syn::Meta::Path(_) => {}
            syn::Meta::List(_) => {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("res_type") {
                        if let MarkerKind::State = parsed.kind {
                            return Err(meta.error("`res_type` is only valid on #[prop]"));
                        }
                        let lit: LitStr = meta.value()?.parse()?;
                        let res_type = ResType::from_name(&lit.value()).ok_or_else(|| {
                            let known: Vec<_> = ResType::ALL.iter().map(|r| r.name()).collect();
                            syn::Error::new(
                                lit.span(),
                                format!(
                                    "unknown res_type `{}`, expected one of: {}",
                                    lit.value(),
                                    known.join(", ")
                                ),
                            )
                        })?;
                        parsed.kind = MarkerKind::Prop(res_type);
                        Ok(())
                    } else if meta.path.is_ident("name") {
                        let lit: LitStr = meta.value()?.parse()?;
                        parsed.rename = Some(lit.value());
                        Ok(())
                    } else {
                        Err(meta.error("unsupported key, expected `res_type` or `name`"))
                    }
                })?;
            }
            syn::Meta::NameValue(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected #[prop], #[prop(...)], #[state] or #[state(...)]",
                ));
            }
        }
        marker = Some(parsed);
    }

    Ok(marker)
}

// ============================================================================
// Derive
// ============================================================================

/// Generate an `Inspectable` impl listing the fields marked `#[prop]` or
/// `#[state]`, in declaration order.
///
/// # Field Attributes
///
/// - `#[prop]` - A component prop with no resource type
/// - `#[prop(res_type = "color")]` - A prop with a resource type (`none`,
///   `string`, `string_array`, `int`, `int_array`, `bool`, `color`,
///   `dimen_size`, `dimen_text`, `dimen_offset`, `float`, `drawable`)
/// - `#[prop(name = "...")]`, `#[state(name = "...")]` - Name shown in the inspector
/// - `#[state]` - A value of a state container
#[proc_macro_derive(Inspectable, attributes(prop, state))]
pub fn derive_inspectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_inspectable(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_inspectable(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "#[derive(Inspectable)] needs named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Inspectable)] only supports structs",
            ));
        }
    };

    let root = runtime_path()?;
    let mut entries = Vec::new();

    for field in fields {
        let Some(marker) = parse_marker(field)? else {
            continue;
        };
        let Some(ident) = &field.ident else {
            continue;
        };
        let ty = &field.ty;
        let name = marker
            .rename
            .unwrap_or_else(|| ident.unraw().to_string());
        let kind = quote! { <#ty as #root::Inspect>::type_kind() };

        entries.push(match marker.kind {
            MarkerKind::Prop(res_type) => {
                let variant = syn::Ident::new(&format!("{:?}", res_type), Span::call_site());
                quote! {
                    #root::FieldDescriptor::<Self>::prop(
                        #name,
                        #kind,
                        #root::ResType::#variant,
                        |this| &this.#ident,
                    )
                }
            }
            MarkerKind::State => quote! {
                #root::FieldDescriptor::<Self>::state(#name, #kind, |this| &this.#ident)
            },
        });
    }

    let ty_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #root::Inspectable for #ty_name #ty_generics #where_clause {
            fn declared_fields() -> ::std::vec::Vec<#root::FieldDescriptor<Self>> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}
