//! Procedural macros used by and exported from the [`tuplefmt`](https://docs.rs/tuplefmt) crate.
//!
//! The function-like macros here generate the large, regular families of trait impls that
//! `tuplefmt` needs for its built-in product types (tuples and arrays) and its type-level numbers.
//! They are invoked from inside `tuplefmt` itself and expect the relevant names to be in scope at
//! the call site. The [`Product`](macro@Product) derive is the only macro meant for downstream use.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Literal, Span, TokenStream as TokenStream2},
    quote::{format_ident, quote},
    syn::{
        parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Field, Ident, LitInt,
        Member,
    },
};

/// Build the unary type-level representation of `n` out of the given successor and zero paths.
fn unary(n: usize, succ: &TokenStream2, zero: &TokenStream2) -> TokenStream2 {
    (0..n).fold(zero.clone(), |inner, _| quote!(#succ<#inner>))
}

/// Parse the upper bound given to one of the `impl_*!` macros.
fn parse_bound(input: TokenStream) -> syn::Result<usize> {
    syn::parse::<LitInt>(input)?.base10_parse::<usize>()
}

/// Generate a `ToUnary` impl for every number from `0` up to and including the given bound.
/// Expects `Number`, `ToUnary`, `S` and `Z` to be in scope.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = match parse_bound(input) {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    let (succ, zero) = (quote!(S), quote!(Z));
    let impls = (0..=max).map(|n| {
        let u = unary(n, &succ, &zero);
        let n = Literal::usize_unsuffixed(n);
        quote! {
            impl ToUnary for Number<#n> {
                type AsUnary = #u;
            }
        }
    });

    quote!(#(#impls)*).into()
}

/// Generate `Product`, `Get` and `Element` impls for every tuple arity from `0` up to and including
/// the given bound. Expects `Product`, `Get`, `Element`, `Format`, `Sink`, `S` and `Z` to be in
/// scope.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = match parse_bound(input) {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    let (succ, zero) = (quote!(S), quote!(Z));
    let impls = (0..=max).map(|arity| {
        let params: Vec<Ident> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
        let tuple = quote!((#(#params,)*));
        let length = unary(arity, &succ, &zero);

        let getters = params.iter().enumerate().map(|(i, param)| {
            let index = unary(i, &succ, &zero);
            let field = syn::Index::from(i);
            quote! {
                impl<#(#params),*> Get<#index> for #tuple {
                    type Element = #param;

                    fn get(&self) -> &#param {
                        &self.#field
                    }

                    fn get_mut(&mut self) -> &mut #param {
                        &mut self.#field
                    }
                }
            }
        });

        quote! {
            impl<#(#params),*> Product for #tuple {
                type Arity = #length;
            }

            #(#getters)*

            impl<#(#params),*> Element for #tuple
            where
                Self: Format,
            {
                fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
                    Format::format_to(self, out).map(|_| ())
                }
            }
        }
    });

    quote!(#(#impls)*).into()
}

/// Generate `Product` and `Get` impls for every array length from `0` up to and including the
/// given bound, with one `Get` impl per index. Expects `Product`, `Get`, `S` and `Z` to be in
/// scope.
#[proc_macro]
pub fn impl_arrays(input: TokenStream) -> TokenStream {
    let max = match parse_bound(input) {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    let (succ, zero) = (quote!(S), quote!(Z));
    let impls = (0..=max).map(|len| {
        let length = unary(len, &succ, &zero);
        let n = Literal::usize_unsuffixed(len);

        let getters = (0..len).map(|i| {
            let index = unary(i, &succ, &zero);
            let i = Literal::usize_unsuffixed(i);
            quote! {
                impl<T> Get<#index> for [T; #n] {
                    type Element = T;

                    fn get(&self) -> &T {
                        &self[#i]
                    }

                    fn get_mut(&mut self) -> &mut T {
                        &mut self[#i]
                    }
                }
            }
        });

        quote! {
            impl<T> Product for [T; #n] {
                type Arity = #length;
            }

            #(#getters)*
        }
    });

    quote!(#(#impls)*).into()
}

/// Derive `tuplefmt::Product` (along with one `tuplefmt::Get` impl per field, and
/// `tuplefmt::Element`) for a struct.
///
/// Fields become elements in declaration order. Named, tuple and unit structs are all supported; a
/// unit struct is a product of arity zero. Mark a field with `#[product(skip)]` to leave it out of
/// the element list; later fields are renumbered to close the gap.
#[proc_macro_derive(Product, attributes(product))]
pub fn derive_product(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_product(input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// The path through which generated code refers to the `tuplefmt` crate.
fn crate_path() -> TokenStream2 {
    use proc_macro_crate::{crate_name, FoundCrate};

    // `Itself` covers the integration tests, doctests and examples of `tuplefmt`, which all link it
    // as the extern crate `tuplefmt`.
    let name = match crate_name("tuplefmt") {
        Ok(FoundCrate::Name(name)) => name,
        Ok(FoundCrate::Itself) | Err(_) => "tuplefmt".to_owned(),
    };
    let ident = Ident::new(&name, Span::call_site());
    quote!(::#ident)
}

fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skipped = false;
    for attr in field.attrs.iter().filter(|a| a.path.is_ident("product")) {
        let arg: Ident = attr.parse_args()?;
        if arg == "skip" {
            skipped = true;
        } else {
            return Err(syn::Error::new_spanned(
                arg,
                "unknown `product` attribute; expected `#[product(skip)]`",
            ));
        }
    }
    Ok(skipped)
}

fn expand_product(input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Product` can only be derived for structs, not enums",
            ))
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Product` can only be derived for structs, not unions",
            ))
        }
    };

    let mut elements = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if is_skipped(field)? {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(syn::Index::from(i)),
        };
        elements.push((member, field.ty.clone()));
    }

    let krate = crate_path();
    let succ = quote!(#krate::unary::S);
    let zero = quote!(#krate::unary::Z);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let length = unary(elements.len(), &succ, &zero);
    let getters = elements.iter().enumerate().map(|(i, (member, ty))| {
        let index = unary(i, &succ, &zero);
        quote! {
            impl #impl_generics #krate::Get<#index> for #name #ty_generics #where_clause {
                type Element = #ty;

                fn get(&self) -> &#ty {
                    &self.#member
                }

                fn get_mut(&mut self) -> &mut #ty {
                    &mut self.#member
                }
            }
        }
    });

    let mut element_generics = input.generics.clone();
    element_generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: #krate::Format));
    let (element_impl_generics, _, element_where_clause) = element_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Product for #name #ty_generics #where_clause {
            type Arity = #length;
        }

        #(#getters)*

        impl #element_impl_generics #krate::Element for #name #ty_generics #element_where_clause {
            fn write_element<W: #krate::Sink + ?Sized>(
                &self,
                out: &mut W,
            ) -> ::core::result::Result<(), W::Error> {
                #krate::Format::format_to(self, out).map(|_| ())
            }
        }
    })
}
