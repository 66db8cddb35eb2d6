extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Fields, FieldsNamed};

/// Derives the `Reflect` introspection surface for a struct with named
/// fields.
///
/// Every field becomes a readable, writable `Property` member, in
/// declaration order, typed through the field type's `Scalar`
/// implementation.
#[proc_macro_derive(Reflect)]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let fields = named_fields(input)?;
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "#[derive(Reflect)] does not support generic types",
        ));
    }

    let members = fields.named.iter().enumerate().map(|(ordinal, field)| {
        let name = field.ident.as_ref().unwrap().to_string();
        let ty = &field.ty;
        quote! {
            Member::property(#name, #ordinal, <#ty as Scalar>::TYPE)
        }
    });

    let reads = fields.named.iter().enumerate().map(|(ordinal, field)| {
        let field_ident = field.ident.as_ref().unwrap();
        quote! {
            #ordinal => Ok(Scalar::store(self.#field_ident.clone())),
        }
    });

    let writes = fields.named.iter().enumerate().map(|(ordinal, field)| {
        let field_ident = field.ident.as_ref().unwrap();
        quote! {
            #ordinal => {
                self.#field_ident = Scalar::load(value)?;
                Ok(())
            }
        }
    });

    Ok(expansion_scope(quote! {
            impl Reflect for #ident {
                fn members() -> Vec<Member> {
                    vec![#(#members,)*]
                }
            }

            impl MemberRead for #ident {
                fn read_member(&self, ordinal: usize) -> Result<Value> {
                    match ordinal {
                        #(#reads)*
                        _ => Err(Error::unknown_ordinal(ordinal)),
                    }
                }
            }

            impl MemberWrite for #ident {
                fn write_member(&mut self, ordinal: usize, value: Value) -> Result<()> {
                    match ordinal {
                        #(#writes)*
                        _ => Err(Error::unknown_ordinal(ordinal)),
                    }
                }
            }
    }))
}

fn named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            fields => Err(syn::Error::new(
                fields.span(),
                "#[derive(Reflect)] requires named fields",
            )),
        },
        _ => Err(syn::Error::new(
            input.ident.span(),
            "#[derive(Reflect)] only supports structs",
        )),
    }
}

/// Wraps the generated impls in an unnamed const so the support imports do
/// not leak into the caller's scope.
fn expansion_scope(body: proc_macro2::TokenStream) -> proc_macro2::TokenStream {
    quote! {
        const _: () = {
            use ::decant::codegen_support::{
                Error, Member, MemberRead, MemberWrite, Reflect, Result, Scalar, Value,
            };

            #body
        };
    }
}
