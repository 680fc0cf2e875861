#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, parse_macro_input};

const INTEGER_REPRS: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// Derive `symtab::Enumeration` for a fieldless enum.
///
/// Usage:
///
/// ```ignore
/// #[derive(Clone, Copy, Enumeration)]
/// #[repr(u8)]
/// #[symtab(ignore_case)]
/// enum Color { Red, Orange, Yellow }
/// ```
///
/// The discriminant type comes from `#[repr(..)]` and defaults to `isize`.
/// `#[symtab(ignore_case)]` makes `from_name` case-insensitive and
/// `#[symtab(null_terminated)]` stores names as C strings. The symbol table is
/// built on first use and shared afterwards.
#[proc_macro_derive(Enumeration, attributes(symtab))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct Options {
    ignore_case: bool,
    null_terminated: bool,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Enumeration can only be derived for enums",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Enumeration cannot be derived for generic enums",
        ));
    }

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Enumeration requires at least one variant",
        ));
    }

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "Enumeration variants cannot carry fields",
            ));
        }
        variants.push(&variant.ident);
    }

    let repr = parse_repr(input)?;
    let options = parse_options(input)?;

    let ident = &input.ident;
    let type_name = ident.to_string();
    let names = variants
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let names = LitStr::new(&names, Span::call_site());
    let ignore_case = options.ignore_case;
    let null_terminated = options.null_terminated;

    Ok(quote! {
        impl ::symtab::Enumeration for #ident {
            type Repr = #repr;

            const TYPE_NAME: &'static str = #type_name;
            const QUALIFIED_TYPE_NAME: &'static str =
                ::core::concat!(::core::module_path!(), "::", #type_name);
            const VARIANTS: &'static [Self] = &[#(#ident::#variants),*];

            #[inline]
            fn to_repr(self) -> #repr {
                self as #repr
            }

            fn symbol_table() -> &'static ::symtab::SymbolTable<#repr> {
                static TABLE: ::std::sync::LazyLock<::symtab::SymbolTable<#repr>> =
                    ::std::sync::LazyLock::new(|| {
                        ::symtab::SymbolTable::builder(#type_name)
                            .with_qualified_name(<#ident as ::symtab::Enumeration>::QUALIFIED_TYPE_NAME)
                            .with_ignore_case(#ignore_case)
                            .with_null_terminators(#null_terminated)
                            .from_source(#names, &[#(#ident::#variants as #repr),*])
                            .expect("one name per variant")
                    });
                &TABLE
            }
        }
    })
}

/// Integer type named in `#[repr(..)]`, or `isize`.
fn parse_repr(input: &DeriveInput) -> syn::Result<Ident> {
    let mut repr = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident()
                && INTEGER_REPRS.contains(&ident.to_string().as_str())
            {
                repr = Some(ident.clone());
            } else if meta.input.peek(syn::token::Paren) {
                // `align(N)`, `packed(N)`
                let _args;
                syn::parenthesized!(_args in meta.input);
            }
            Ok(())
        })?;
    }
    Ok(repr.unwrap_or_else(|| Ident::new("isize", Span::call_site())))
}

fn parse_options(input: &DeriveInput) -> syn::Result<Options> {
    let mut options = Options::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("symtab")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("ignore_case") {
                options.ignore_case = true;
            } else if meta.path.is_ident("null_terminated") {
                options.null_terminated = true;
            } else {
                return Err(meta.error("expected `ignore_case` or `null_terminated`"));
            }
            Ok(())
        })?;
    }
    Ok(options)
}
