use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, Path, parse_macro_input};

/// Implements `typedlist::Composite` for a struct or enum.
///
/// The type name defaults to the type's identifier. Override it, and declare
/// the names this type can stand in for, with:
///
/// ```ignore
/// #[derive(Debug, PartialEq, Composite)]
/// #[composite(name = "geo::Circle", extends(Shape, Drawable))]
/// struct Circle { radius: u32 }
/// ```
///
/// The type must implement `Debug` and `PartialEq`.
#[proc_macro_derive(Composite, attributes(composite))]
pub fn derive_composite(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let type_ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut name = type_ident.to_string();
    let mut supertypes: Vec<String> = Vec::new();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("composite")) {
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                name = meta.value()?.parse::<LitStr>()?.value();
                Ok(())
            } else if meta.path.is_ident("extends") {
                meta.parse_nested_meta(|inner| {
                    supertypes.push(path_to_name(&inner.path));
                    Ok(())
                })
            } else {
                Err(meta.error("expected `name = \"...\"` or `extends(...)`"))
            }
        });

        if let Err(err) = parsed {
            return err.to_compile_error().into();
        }
    }

    let expanded = quote! {
        impl #impl_generics ::typedlist::Composite for #type_ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #name
            }

            fn supertypes(&self) -> &'static [&'static str] {
                &[#(#supertypes),*]
            }

            fn eq_composite(&self, other: &dyn ::typedlist::Composite) -> bool {
                other
                    .as_any()
                    .downcast_ref::<Self>()
                    .is_some_and(|other| self == other)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };

    TokenStream::from(expanded)
}

fn path_to_name(path: &Path) -> String {
    path.segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}
