//! Shared expansion for `#[state]` and `#[request]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, ItemStruct};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    State,
    Request,
}

impl Kind {
    fn required_derives(self) -> &'static [&'static str] {
        match self {
            Kind::State => &["Debug", "Clone", "PartialEq"],
            Kind::Request => &["Debug", "Clone"],
        }
    }

    fn label(self) -> &'static str {
        match self {
            Kind::State => "state",
            Kind::Request => "request",
        }
    }
}

pub fn expand(kind: Kind, attr: TokenStream, mut item: ItemStruct) -> syn::Result<TokenStream> {
    let path = parse_path(kind, attr)?;

    let present = collect_derives(&item);
    let missing: Vec<syn::Ident> = kind
        .required_derives()
        .iter()
        .filter(|name| !present.iter().any(|p| p == *name))
        .map(|name| syn::Ident::new(name, proc_macro2::Span::call_site()))
        .collect();
    if !missing.is_empty() {
        // Put our derive first so serde helper attributes stay after it.
        item.attrs.insert(0, parse_quote!(#[derive(#(#missing),*)]));
    }

    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let doc = format!("Flux {} path.", kind.label());

    Ok(quote! {
        #item

        impl #impl_generics #name #ty_generics #where_clause {
            #[doc = #doc]
            pub const PATH: &'static str = #path;
        }
    })
}

/// Paths are concrete: non-empty, no wildcards, no empty levels.
fn parse_path(kind: Kind, attr: TokenStream) -> syn::Result<String> {
    let lit: syn::LitStr = syn::parse2(attr)?;
    let path = lit.value();
    if path.is_empty() {
        return Err(syn::Error::new(
            lit.span(),
            format!("{} path cannot be empty", kind.label()),
        ));
    }
    if path.split('/').any(|level| level.is_empty()) {
        return Err(syn::Error::new(
            lit.span(),
            format!("{} path `{}` has an empty level", kind.label(), path),
        ));
    }
    if path.split('/').any(|level| level == "+" || level == "#") {
        return Err(syn::Error::new(
            lit.span(),
            format!("{} path `{}` cannot contain wildcards", kind.label(), path),
        ));
    }
    Ok(path)
}

fn collect_derives(item: &ItemStruct) -> Vec<String> {
    let mut derives = Vec::new();
    for attr in &item.attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }
        if let Ok(paths) = attr.parse_args_with(
            syn::punctuated::Punctuated::<syn::Path, syn::Token![,]>::parse_terminated,
        ) {
            for path in paths {
                if let Some(last) = path.segments.last() {
                    derives.push(last.ident.to_string());
                }
            }
        }
    }
    derives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(kind: Kind, path: &str, item: ItemStruct) -> syn::Result<String> {
        expand(kind, quote!(#path), item).map(|t| t.to_string())
    }

    #[test]
    fn state_gets_path_and_derives() {
        let item: ItemStruct = parse_quote! {
            pub struct ProductForm { pub codigo: String }
        };
        let out = expand_str(Kind::State, "producto/form", item).unwrap();
        assert!(out.contains("PATH"));
        assert!(out.contains("\"producto/form\""));
        assert!(out.contains("PartialEq"));
        assert!(out.contains("Clone"));
    }

    #[test]
    fn request_does_not_add_partial_eq() {
        let item: ItemStruct = parse_quote! {
            pub struct LookupReq { pub codigo: String }
        };
        let out = expand_str(Kind::Request, "producto/lookup", item).unwrap();
        assert!(!out.contains("PartialEq"));
        assert!(out.contains("Debug"));
    }

    #[test]
    fn existing_derives_are_not_repeated() {
        let item: ItemStruct = parse_quote! {
            #[derive(Debug, Clone, PartialEq, serde::Serialize)]
            pub struct Notices { pub items: Vec<String> }
        };
        let out = expand_str(Kind::State, "ui/notices", item).unwrap();
        assert_eq!(out.matches("PartialEq").count(), 1);
        assert_eq!(out.matches("derive").count(), 1);
    }

    #[test]
    fn unit_struct_is_supported() {
        let item: ItemStruct = parse_quote! { pub struct CancelReq; };
        let out = expand_str(Kind::Request, "transferencia/cancel", item).unwrap();
        assert!(out.contains("CancelReq"));
    }

    #[test]
    fn wildcard_path_is_rejected() {
        let item: ItemStruct = parse_quote! { pub struct X; };
        let err = expand_str(Kind::State, "ui/#", item).unwrap_err();
        assert!(err.to_string().contains("wildcards"));
    }

    #[test]
    fn empty_level_is_rejected() {
        let item: ItemStruct = parse_quote! { pub struct X; };
        assert!(expand_str(Kind::Request, "producto//lookup", item).is_err());
        let item: ItemStruct = parse_quote! { pub struct X; };
        assert!(expand_str(Kind::Request, "", item).is_err());
    }
}
