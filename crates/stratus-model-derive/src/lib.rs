// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Derive macros for stratus models and wire enums.
//!
//! - `#[derive(WireModel)]` generates `Model`, `WireValue`, `Serialize`,
//!   `Deserialize` and `Hash` for a struct with named fields
//! - `#[derive(WireEnum)]` generates `WireEnum`, `WireValue`, `Display`,
//!   `FromStr`, `Serialize` and `Deserialize` for an enum of unit variants
//!   plus one `UnknownValue(String)` variant
//!
//! The generated code only refers to items re-exported by `stratus-sdk`, so
//! crates using these derives need no direct serde dependency.

use darling::ast::{Data, Fields, Style};
use darling::util::Ignored;
use darling::{FromDeriveInput, FromField, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Type, parse_macro_input};

// ============================================================================
// WireModel
// ============================================================================

/// Field attributes for WireModel derive
#[derive(Debug, FromField)]
#[darling(attributes(wire))]
struct ModelFieldArgs {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    /// Wire key, when it is not the camelCase form of the field name
    #[darling(default)]
    rename: Option<String>,
    /// Enum policy: "strict" (default) or "lenient"
    #[darling(default)]
    policy: Option<String>,
}

/// Container attributes for WireModel derive
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(wire), supports(struct_named))]
struct ModelContainerArgs {
    ident: syn::Ident,
    data: Data<Ignored, ModelFieldArgs>,
    /// Model name used in error messages (defaults to the struct name)
    #[darling(default)]
    name: Option<String>,
}

/// Derive the wire contract for a model struct.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, WireModel)]
/// pub struct Publication {
///     pub id: String,
///     pub display_name: Option<String>,
///     #[wire(policy = "lenient")]
///     pub lifecycle_state: Option<PublicationLifecycleState>,
///     #[wire(rename = "packageDetails")]
///     pub package: Option<PublicationPackage>,
/// }
/// ```
#[proc_macro_derive(WireModel, attributes(wire))]
pub fn derive_wire_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let args = match ModelContainerArgs::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    match generate_model(args) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_model(args: ModelContainerArgs) -> syn::Result<TokenStream2> {
    let struct_name = &args.ident;
    let model_name = args.name.unwrap_or_else(|| struct_name.to_string());

    let fields = match args.data {
        Data::Struct(fields) => fields.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "WireModel can only be derived for structs",
            ));
        }
    };

    let mut reads = Vec::with_capacity(fields.len());
    let mut writes = Vec::with_capacity(fields.len());

    for field in &fields {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "WireModel requires named fields",
            ));
        };

        let idiomatic = ident.to_string().trim_start_matches("r#").to_string();
        let wire = field
            .rename
            .clone()
            .unwrap_or_else(|| to_camel_case(&idiomatic));
        let policy = policy_tokens(field.policy.as_deref(), &field.ty)?;

        if is_option(&field.ty) {
            reads.push(quote! {
                #ident: reader.optional(#wire, #idiomatic, #policy)?
            });
            writes.push(quote! {
                writer.put_optional(#wire, &self.#ident);
            });
        } else {
            reads.push(quote! {
                #ident: reader.required(#wire, #idiomatic, #policy)?
            });
            writes.push(quote! {
                writer.put(#wire, &self.#ident);
            });
        }
    }

    Ok(quote! {
        const _: () = {
            use ::stratus_sdk::__private::serde;
            use ::stratus_sdk::__private::serde_json;

            impl ::stratus_sdk::Model for #struct_name {
                const NAME: &'static str = #model_name;

                #[allow(unused_variables)]
                fn from_payload(
                    payload: &::stratus_sdk::model::Payload,
                ) -> ::stratus_sdk::Result<Self> {
                    let reader = ::stratus_sdk::model::PayloadReader::new(
                        <Self as ::stratus_sdk::Model>::NAME,
                        payload,
                    );
                    ::std::result::Result::Ok(Self {
                        #(#reads,)*
                    })
                }

                fn to_payload(&self) -> ::stratus_sdk::model::Payload {
                    #[allow(unused_mut)]
                    let mut writer = ::stratus_sdk::model::PayloadWriter::new();
                    #(#writes)*
                    writer.finish()
                }
            }

            impl ::stratus_sdk::model::WireValue for #struct_name {
                fn decode(
                    value: &serde_json::Value,
                    ctx: &::stratus_sdk::model::FieldContext,
                ) -> ::stratus_sdk::Result<Self> {
                    ::stratus_sdk::model::decode_nested::<Self>(value, ctx)
                }

                fn encode(&self) -> serde_json::Value {
                    serde_json::Value::Object(<Self as ::stratus_sdk::Model>::to_payload(self))
                }
            }

            impl serde::Serialize for #struct_name {
                fn serialize<S: serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> ::std::result::Result<S::Ok, S::Error> {
                    serde::Serialize::serialize(
                        &<Self as ::stratus_sdk::Model>::to_payload(self),
                        serializer,
                    )
                }
            }

            impl<'de> serde::Deserialize<'de> for #struct_name {
                fn deserialize<D: serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> ::std::result::Result<Self, D::Error> {
                    let payload =
                        <::stratus_sdk::model::Payload as serde::Deserialize>::deserialize(
                            deserializer,
                        )?;
                    <Self as ::stratus_sdk::Model>::from_payload(&payload)
                        .map_err(<D::Error as serde::de::Error>::custom)
                }
            }

            impl ::std::hash::Hash for #struct_name {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    ::std::hash::Hash::hash(
                        &<Self as ::stratus_sdk::Model>::digest(self),
                        state,
                    );
                }
            }
        };
    })
}

fn policy_tokens(policy: Option<&str>, ty: &Type) -> syn::Result<TokenStream2> {
    match policy {
        None | Some("strict") => Ok(quote! { ::stratus_sdk::EnumPolicy::Strict }),
        Some("lenient") => Ok(quote! { ::stratus_sdk::EnumPolicy::Lenient }),
        Some(other) => Err(syn::Error::new_spanned(
            ty,
            format!(
                "unknown enum policy `{}`, expected \"strict\" or \"lenient\"",
                other
            ),
        )),
    }
}

/// Whether the type is spelled `Option<T>`.
fn is_option(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty
        && type_path.qself.is_none()
        && let Some(segment) = type_path.path.segments.last()
    {
        return segment.ident == "Option"
            && matches!(segment.arguments, syn::PathArguments::AngleBracketed(_));
    }
    false
}

/// `time_created` -> `timeCreated`
fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// WireEnum
// ============================================================================

/// Variant attributes for WireEnum derive
#[derive(Debug, FromVariant)]
#[darling(attributes(wire))]
struct EnumVariantArgs {
    ident: syn::Ident,
    fields: Fields<Ignored>,
    /// Wire value of a known variant
    #[darling(default)]
    value: Option<String>,
    /// Marks the `UnknownValue(String)` catch-all
    #[darling(default)]
    unknown: bool,
}

/// Container attributes for WireEnum derive
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(wire), supports(enum_any))]
struct EnumContainerArgs {
    ident: syn::Ident,
    data: Data<EnumVariantArgs, Ignored>,
}

/// Derive the wire contract for an enum with a forward-compatible catch-all.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
/// pub enum PackageType {
///     #[wire(value = "IMAGE")]
///     Image,
///     #[wire(value = "ORCHESTRATION")]
///     Orchestration,
///     #[wire(unknown)]
///     UnknownValue(String),
/// }
/// ```
#[proc_macro_derive(WireEnum, attributes(wire))]
pub fn derive_wire_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let args = match EnumContainerArgs::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    match generate_enum(args) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_enum(args: EnumContainerArgs) -> syn::Result<TokenStream2> {
    let enum_name = &args.ident;
    let enum_name_str = enum_name.to_string();

    let variants = match args.data {
        Data::Enum(variants) => variants,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                enum_name,
                "WireEnum can only be derived for enums",
            ));
        }
    };

    let mut known_idents = Vec::new();
    let mut known_values = Vec::new();
    let mut unknown_ident = None;

    for variant in &variants {
        if variant.unknown {
            if !matches!(variant.fields.style, Style::Tuple) || variant.fields.len() != 1 {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    "#[wire(unknown)] variant must hold exactly one String",
                ));
            }
            if unknown_ident.replace(variant.ident.clone()).is_some() {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    "only one #[wire(unknown)] variant is allowed",
                ));
            }
            continue;
        }

        let Some(value) = variant.value.clone() else {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "variant needs #[wire(value = \"...\")] or #[wire(unknown)]",
            ));
        };
        if !matches!(variant.fields.style, Style::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "known wire enum variants must be unit variants",
            ));
        }
        known_idents.push(variant.ident.clone());
        known_values.push(value);
    }

    let Some(unknown_ident) = unknown_ident else {
        return Err(syn::Error::new_spanned(
            enum_name,
            "WireEnum needs an `UnknownValue(String)` variant marked #[wire(unknown)]",
        ));
    };

    Ok(quote! {
        const _: () = {
            use ::stratus_sdk::__private::serde;
            use ::stratus_sdk::__private::serde_json;

            impl ::stratus_sdk::WireEnum for #enum_name {
                const VALUES: &'static [&'static str] = &[#(#known_values),*];

                fn as_wire(&self) -> &str {
                    match self {
                        #(Self::#known_idents => #known_values,)*
                        Self::#unknown_ident(raw) => raw.as_str(),
                    }
                }

                fn from_known(raw: &str) -> ::std::option::Option<Self> {
                    match raw {
                        #(#known_values => ::std::option::Option::Some(Self::#known_idents),)*
                        _ => ::std::option::Option::None,
                    }
                }

                fn unknown(raw: ::std::string::String) -> Self {
                    Self::#unknown_ident(raw)
                }

                fn is_unknown(&self) -> bool {
                    matches!(self, Self::#unknown_ident(_))
                }
            }

            impl ::std::fmt::Display for #enum_name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(::stratus_sdk::WireEnum::as_wire(self))
                }
            }

            impl ::std::str::FromStr for #enum_name {
                type Err = ::stratus_sdk::SdkError;

                fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                    ::stratus_sdk::enums::from_str_strict::<Self>(#enum_name_str, raw)
                }
            }

            impl ::stratus_sdk::model::WireValue for #enum_name {
                fn decode(
                    value: &serde_json::Value,
                    ctx: &::stratus_sdk::model::FieldContext,
                ) -> ::stratus_sdk::Result<Self> {
                    ::stratus_sdk::enums::decode_enum_value::<Self>(value, ctx)
                }

                fn encode(&self) -> serde_json::Value {
                    serde_json::Value::String(
                        ::stratus_sdk::WireEnum::as_wire(self).to_string(),
                    )
                }
            }

            impl serde::Serialize for #enum_name {
                fn serialize<S: serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> ::std::result::Result<S::Ok, S::Error> {
                    serializer.serialize_str(::stratus_sdk::WireEnum::as_wire(self))
                }
            }

            impl<'de> serde::Deserialize<'de> for #enum_name {
                fn deserialize<D: serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> ::std::result::Result<Self, D::Error> {
                    let raw = <::std::string::String as serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                    ::std::result::Result::Ok(
                        match <Self as ::stratus_sdk::WireEnum>::from_known(&raw) {
                            ::std::option::Option::Some(value) => value,
                            ::std::option::Option::None => {
                                <Self as ::stratus_sdk::WireEnum>::unknown(raw)
                            }
                        },
                    )
                }
            }
        };
    })
}
