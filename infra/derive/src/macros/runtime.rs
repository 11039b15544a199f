use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, ReturnType, Type};

/// Expands `#[folio_runtime::main]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.ident,
            "#[folio_runtime::main] can only be applied to async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[folio_runtime::main] requires a Result return type",
        )
        .to_compile_error();
    }

    let profile = match runtime_profile(args) {
        Ok(profile) => profile,
        Err(err) => return err,
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #profile;
            let rt = ::folio_runtime::build_runtime_with_config(&config)?;
            rt.block_on(async #block)
        }
    }
}

fn runtime_profile(args: TokenStream) -> Result<TokenStream, TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::folio_runtime::RuntimeConfig::default() });
    }

    let ident: syn::Ident = syn::parse2(args).map_err(|err| err.to_compile_error())?;
    let preset = match ident.to_string().as_str() {
        "high_performance" => quote! { ::folio_runtime::RuntimeConfig::high_performance() },
        "memory_efficient" => quote! { ::folio_runtime::RuntimeConfig::memory_efficient() },
        "default" => quote! { ::folio_runtime::RuntimeConfig::default() },
        _ => {
            return Err(Error::new_spanned(
                ident,
                "unknown runtime profile, expected high_performance, memory_efficient or default",
            )
            .to_compile_error());
        },
    };
    Ok(preset)
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
