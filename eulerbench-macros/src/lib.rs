//! EulerBench Macros
//!
//! Procedural macros that register puzzle solutions with the harness.
//!
//! ## Macros
//!
//! - `#[problem]` - Register a problem's metadata and arguments
//! - `#[version]` - Register a version's `solution` entry point

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, ItemFn, ItemStruct, parse_macro_input};

// ============================================================================
// Attribute Parsing Helpers
// ============================================================================

mod attr {
    use syn::meta::ParseNestedMeta;

    /// Get the attribute name as a string
    pub fn name(meta: &ParseNestedMeta) -> String {
        meta.path
            .get_ident()
            .map(|i| i.to_string())
            .unwrap_or_default()
    }

    /// Parse a string literal attribute: `attr = "value"`
    pub fn string(meta: &ParseNestedMeta) -> syn::Result<String> {
        let value: syn::LitStr = meta.value()?.parse()?;
        Ok(value.value())
    }

    /// Parse a positive integer literal attribute: `attr = 42`
    pub fn id(meta: &ParseNestedMeta) -> syn::Result<u32> {
        let value: syn::LitInt = meta.value()?.parse()?;
        let id: u32 = value.base10_parse()?;
        if id == 0 {
            return Err(syn::Error::new_spanned(value, "ids start at 1"));
        }
        Ok(id)
    }

    /// Parse a bracketed array of strings: `items = ["a", "b", "c"]`
    pub fn string_array(meta: &ParseNestedMeta) -> syn::Result<Vec<String>> {
        meta.value()?;
        let content;
        syn::bracketed!(content in meta.input);
        let items: syn::punctuated::Punctuated<syn::LitStr, syn::Token![,]> =
            syn::punctuated::Punctuated::parse_terminated(&content)?;
        Ok(items.iter().map(|s| s.value()).collect())
    }

    /// Create an unknown attribute error
    pub fn unknown(meta: &ParseNestedMeta, name: &str) -> syn::Error {
        meta.error(format!("unknown attribute: {}", name))
    }
}

/// Register problem metadata
///
/// The doc comment of the annotated item becomes the problem description.
///
/// # Example
///
/// ```ignore
/// /// Find the sum of all the multiples of 3 or 5 below 1000.
/// #[problem(id = 1, name = "Multiples of 3 and 5", params = ["number=1000"])]
/// pub struct Problem001;
///
/// // A parameter without `=default` must be passed on the command line
/// #[problem(id = 8, name = "Largest product in a series", params = ["digits"])]
/// pub struct Problem008;
/// ```
#[proc_macro_attribute]
pub fn problem(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let input = parse_macro_input!(item as ItemStruct);

    problem_impl(args, input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn problem_impl(args: TokenStream2, input: ItemStruct) -> Result<TokenStream2, syn::Error> {
    let mut id: Option<u32> = None;
    let mut name: Option<String> = None;
    let mut params: Vec<String> = Vec::new();

    let parser = syn::meta::parser(|meta| {
        let attr_name = attr::name(&meta);
        match attr_name.as_str() {
            "id" => id = Some(attr::id(&meta)?),
            "name" => name = Some(attr::string(&meta)?),
            "params" => params = attr::string_array(&meta)?,
            _ => return Err(attr::unknown(&meta, &attr_name)),
        }
        Ok(())
    });

    syn::parse::Parser::parse2(parser, args)?;

    let id = id.ok_or_else(|| syn::Error::new_spanned(&input.ident, "problem requires `id`"))?;
    let name = name.unwrap_or_else(|| input.ident.to_string());
    let description = doc_text(&input.attrs);

    let mut param_tokens = Vec::with_capacity(params.len());
    for spec in &params {
        let (param, default) = parse_param(spec)
            .map_err(|msg| syn::Error::new_spanned(&input.ident, msg))?;
        let default = match default {
            Some(d) => quote! { Some(#d) },
            None => quote! { None },
        };
        param_tokens.push(quote! {
            ::eulerbench_core::ParamDef { name: #param, default: #default }
        });
    }

    let ident = &input.ident;

    Ok(quote! {
        #input

        impl #ident {
            /// Registered problem number; calling it keeps the registration linked
            #[inline(never)]
            pub fn id() -> ::eulerbench_core::ProblemId {
                #id
            }
        }

        ::eulerbench_core::internal::inventory::submit! {
            ::eulerbench_core::ProblemDef {
                id: #id,
                name: #name,
                description: #description,
                params: &[#(#param_tokens),*],
                file: file!(),
                module_path: module_path!(),
            }
        }
    })
}

/// Register a version's entry point
///
/// The annotated function must be named `solution` and take the problem
/// arguments and the optional resource bundle.
///
/// # Example
///
/// ```ignore
/// /// Iterate over every integer below the limit.
/// #[version(problem = 1, id = 1, name = "Brute Force, Iterative")]
/// pub fn solution(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
///     ...
/// }
/// ```
#[proc_macro_attribute]
pub fn version(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let func = parse_macro_input!(item as ItemFn);

    version_impl(args, func)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn version_impl(args: TokenStream2, func: ItemFn) -> Result<TokenStream2, syn::Error> {
    validate_signature(&func)?;

    let mut problem: Option<u32> = None;
    let mut id: Option<u32> = None;
    let mut name: Option<String> = None;

    let parser = syn::meta::parser(|meta| {
        let attr_name = attr::name(&meta);
        match attr_name.as_str() {
            "problem" => problem = Some(attr::id(&meta)?),
            "id" => id = Some(attr::id(&meta)?),
            "name" => name = Some(attr::string(&meta)?),
            _ => return Err(attr::unknown(&meta, &attr_name)),
        }
        Ok(())
    });

    syn::parse::Parser::parse2(parser, args)?;

    let fn_name = &func.sig.ident;
    let problem =
        problem.ok_or_else(|| syn::Error::new_spanned(fn_name, "version requires `problem`"))?;
    let id = id.ok_or_else(|| syn::Error::new_spanned(fn_name, "version requires `id`"))?;
    let name = name.unwrap_or_default();
    let description = doc_text(&func.attrs);

    Ok(quote! {
        #func

        ::eulerbench_core::internal::inventory::submit! {
            ::eulerbench_core::VersionDef {
                problem: #problem,
                version: #id,
                name: #name,
                description: #description,
                solution: #fn_name,
                file: file!(),
                line: line!(),
                module_path: module_path!(),
            }
        }
    })
}

fn validate_signature(func: &ItemFn) -> syn::Result<()> {
    if func.sig.ident != "solution" {
        return Err(syn::Error::new_spanned(
            &func.sig.ident,
            "EulerBench: the entry point must be named `solution`",
        ));
    }
    if func.sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            &func.sig,
            "EulerBench: `solution` cannot be async",
        ));
    }
    if func.sig.inputs.len() != 2 {
        return Err(syn::Error::new_spanned(
            &func.sig,
            "EulerBench: `solution` must take `&ProblemArgs` and `Option<&ResourceBundle>`",
        ));
    }
    Ok(())
}

/// Split `name=default` into its parts; a bare `name` is required
fn parse_param(spec: &str) -> Result<(String, Option<String>), String> {
    let (name, default) = match spec.split_once('=') {
        Some((name, default)) => (name.trim(), Some(default.trim().to_string())),
        None => (spec.trim(), None),
    };
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(format!("invalid parameter name in `{spec}`"));
    }
    Ok((name.to_string(), default))
}

/// Join `///` lines into one paragraph-preserving string
fn doc_text(attrs: &[Attribute]) -> String {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|a| a.path().is_ident("doc"))
        .filter_map(|a| match &a.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(s),
                    ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').unwrap_or(&line).trim_end().to_string())
        .collect();
    lines.join("\n").trim().to_string()
}
