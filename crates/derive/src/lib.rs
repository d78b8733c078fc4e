//! Derive macro for `enumeration_core::Enumeration`.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::BTreeMap;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, LitStr, Path,
    UnOp, Variant,
};

/// Derive `enumeration_core::Enumeration` for a unit-only enum.
///
/// Every variant becomes a member. Its value comes from
/// `#[enumeration(value = N)]` or an explicit discriminant; its display name
/// from `#[enumeration(display_name = "...")]`, defaulting to the variant
/// name. Duplicate values or display names are compile errors.
///
/// Besides `Enumeration`, the derive implements `PartialEq`, `Eq`, `Hash`,
/// `PartialOrd` and `Ord` (all by value), `Display` (display name),
/// `TryFrom<i32>` and `FromStr` (display name lookup). Derive `Clone` and
/// `Copy` alongside it, but not the comparison traits.
///
/// Container attributes:
///
/// * `#[enumeration(name = "...")]` - type name used by registries (defaults
///   to the enum name).
/// * `#[enumeration(crate = "path")]` - path to the crate exporting
///   `Enumeration` and `EnumerationError` (defaults to `::enumeration_core`).
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, Enumeration)]
/// pub enum Status {
///     Active = 1,
///     #[enumeration(value = 2, display_name = "Not active")]
///     Inactive,
/// }
/// ```
#[proc_macro_derive(Enumeration, attributes(enumeration))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand_enumeration(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct ContainerOptions {
    type_name: String,
    crate_path: Path,
}

struct MemberSpec {
    ident: Ident,
    value: i32,
    display_name: String,
}

fn expand_enumeration(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Enumeration cannot be derived for generic types",
        ));
    }
    let Data::Enum(enum_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Enumeration can only be derived for enums",
        ));
    };

    let options = parse_container_options(&input.attrs, &input.ident)?;
    let members = enum_data
        .variants
        .iter()
        .map(parse_member)
        .collect::<Result<Vec<_>, _>>()?;
    check_unique(&members)?;
    check_implicit_discriminants(enum_data.variants.iter())?;

    Ok(render(&input.ident, &options, &members))
}

fn parse_container_options(
    attrs: &[Attribute],
    ident: &Ident,
) -> Result<ContainerOptions, syn::Error> {
    let mut type_name: Option<String> = None;
    let mut crate_path: Option<Path> = None;
    for attr in attrs {
        if !attr.path().is_ident("enumeration") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if type_name.is_some() {
                    return Err(meta.error("duplicate enumeration(name = ...)"));
                }
                if value.value().trim().is_empty() {
                    return Err(meta.error("enumeration(name = ...) must be non-empty"));
                }
                type_name = Some(value.value());
                return Ok(());
            }
            if meta.path.is_ident("crate") {
                let value: LitStr = meta.value()?.parse()?;
                if crate_path.is_some() {
                    return Err(meta.error("duplicate enumeration(crate = ...)"));
                }
                crate_path = Some(value.parse()?);
                return Ok(());
            }
            Err(meta.error("unsupported enumeration attribute on enum"))
        })?;
    }

    Ok(ContainerOptions {
        type_name: type_name.unwrap_or_else(|| ident.to_string()),
        crate_path: crate_path.unwrap_or_else(|| syn::parse_quote!(::enumeration_core)),
    })
}

fn parse_member(variant: &Variant) -> Result<MemberSpec, syn::Error> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            variant,
            "Enumeration members must be unit variants",
        ));
    }

    let mut value: Option<i32> = None;
    let mut display_name: Option<String> = None;
    for attr in &variant.attrs {
        if !attr.path().is_ident("enumeration") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("value") {
                let expr: Expr = meta.value()?.parse()?;
                if value.is_some() {
                    return Err(meta.error("duplicate enumeration(value = ...)"));
                }
                value = Some(eval_i32(&expr)?);
                return Ok(());
            }
            if meta.path.is_ident("display_name") {
                let name: LitStr = meta.value()?.parse()?;
                if display_name.is_some() {
                    return Err(meta.error("duplicate enumeration(display_name = ...)"));
                }
                display_name = Some(name.value());
                return Ok(());
            }
            Err(meta.error("unsupported enumeration attribute on variant"))
        })?;
    }

    let discriminant = variant
        .discriminant
        .as_ref()
        .map(|(_, expr)| eval_i32(expr))
        .transpose()?;
    let value = match (value, discriminant) {
        (Some(explicit), Some(discriminant)) if explicit != discriminant => {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "enumeration(value = ...) disagrees with the variant discriminant",
            ));
        },
        (Some(value), _) | (None, Some(value)) => value,
        (None, None) => {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "missing #[enumeration(value = ...)] or explicit discriminant",
            ));
        },
    };

    Ok(MemberSpec {
        ident: variant.ident.clone(),
        value,
        display_name: display_name.unwrap_or_else(|| variant.ident.to_string()),
    })
}

fn eval_i32(expr: &Expr) -> Result<i32, syn::Error> {
    let value = eval_i64(expr)?;
    i32::try_from(value)
        .map_err(|_| syn::Error::new_spanned(expr, "enumeration value must fit in i32"))
}

fn eval_i64(expr: &Expr) -> Result<i64, syn::Error> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => int.base10_parse::<i64>(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => eval_i64(inner).map(|value| -value),
        Expr::Group(group) => eval_i64(&group.expr),
        Expr::Paren(paren) => eval_i64(&paren.expr),
        _ => Err(syn::Error::new_spanned(
            expr,
            "enumeration value must be an integer literal",
        )),
    }
}

fn check_unique(members: &[MemberSpec]) -> Result<(), syn::Error> {
    let mut values: BTreeMap<i32, &Ident> = BTreeMap::new();
    let mut names: BTreeMap<&str, &Ident> = BTreeMap::new();
    for member in members {
        if let Some(first) = values.insert(member.value, &member.ident) {
            return Err(syn::Error::new_spanned(
                &member.ident,
                format!(
                    "duplicate enumeration value {} (already used by `{first}`)",
                    member.value
                ),
            ));
        }
        if let Some(first) = names.insert(member.display_name.as_str(), &member.ident) {
            return Err(syn::Error::new_spanned(
                &member.ident,
                format!(
                    "duplicate enumeration display name \"{}\" (already used by `{first}`)",
                    member.display_name
                ),
            ));
        }
    }
    Ok(())
}

/// Attribute-valued variants keep the discriminant rustc assigns them
/// (previous discriminant + 1), which must not collide with another variant.
fn check_implicit_discriminants<'a>(
    variants: impl Iterator<Item = &'a Variant>,
) -> Result<(), syn::Error> {
    let mut seen: BTreeMap<i64, (&Ident, bool)> = BTreeMap::new();
    let mut next = 0_i64;
    for variant in variants {
        let (discriminant, implicit) = match &variant.discriminant {
            Some((_, expr)) => (eval_i64(expr)?, false),
            None => (next, true),
        };
        next = discriminant.saturating_add(1);

        if let Some((first, first_implicit)) = seen.insert(discriminant, (&variant.ident, implicit))
        {
            let (hidden, other) = if first_implicit {
                (first, &variant.ident)
            } else {
                (&variant.ident, first)
            };
            if first_implicit || implicit {
                return Err(syn::Error::new_spanned(
                    hidden,
                    format!(
                        "`{hidden}` has implicit discriminant {discriminant}, which collides with `{other}`; give `{hidden}` an explicit discriminant"
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn render(
    name: &Ident,
    options: &ContainerOptions,
    members: &[MemberSpec],
) -> proc_macro2::TokenStream {
    let krate = &options.crate_path;
    let type_name = LitStr::new(&options.type_name, Span::call_site());
    let idents: Vec<&Ident> = members.iter().map(|member| &member.ident).collect();
    let values: Vec<i32> = members.iter().map(|member| member.value).collect();
    let names: Vec<LitStr> = members
        .iter()
        .map(|member| LitStr::new(&member.display_name, Span::call_site()))
        .collect();

    quote! {
        #[allow(unused_qualifications)]
        const _: () = {
            #[automatically_derived]
            impl #krate::Enumeration for #name {
                const TYPE_NAME: &'static str = #type_name;
                const MEMBERS: &'static [Self] = &[#(Self::#idents),*];

                fn value(&self) -> i32 {
                    match *self {
                        #(Self::#idents => #values,)*
                    }
                }

                fn display_name(&self) -> &'static str {
                    match *self {
                        #(Self::#idents => #names,)*
                    }
                }
            }

            #[automatically_derived]
            impl ::core::cmp::PartialEq for #name {
                fn eq(&self, other: &Self) -> bool {
                    #krate::Enumeration::value(self) == #krate::Enumeration::value(other)
                }
            }

            #[automatically_derived]
            impl ::core::cmp::Eq for #name {}

            #[automatically_derived]
            impl ::core::hash::Hash for #name {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(&#krate::Enumeration::value(self), state);
                }
            }

            #[automatically_derived]
            impl ::core::cmp::PartialOrd for #name {
                fn partial_cmp(
                    &self,
                    other: &Self,
                ) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
                }
            }

            #[automatically_derived]
            impl ::core::cmp::Ord for #name {
                fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                    #krate::Enumeration::compare_to(self, other)
                }
            }

            #[automatically_derived]
            impl ::core::fmt::Display for #name {
                fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    formatter.write_str(#krate::Enumeration::display_name(self))
                }
            }

            #[automatically_derived]
            impl ::core::convert::TryFrom<i32> for #name {
                type Error = #krate::EnumerationError;

                fn try_from(value: i32) -> ::core::result::Result<Self, Self::Error> {
                    <Self as #krate::Enumeration>::from_value(value)
                }
            }

            #[automatically_derived]
            impl ::core::str::FromStr for #name {
                type Err = #krate::EnumerationError;

                fn from_str(display_name: &str) -> ::core::result::Result<Self, Self::Err> {
                    <Self as #krate::Enumeration>::from_display_name(display_name)
                }
            }
        };
    }
}
