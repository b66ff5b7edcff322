use proc_macro::TokenStream;
use quote::quote;

#[derive(deluxe::ParseMetaItem)]
#[deluxe(attributes(scoring_factor))]
struct FactorAttributes(syn::Ident, #[deluxe(flatten)] FactorNamedAttributes);

#[derive(deluxe::ParseMetaItem)]
struct FactorNamedAttributes {
  name: String,
}

/// Declares a factor scorer: a unit struct implementing `Factor`, with the
/// annotated function as its scoring body, wrapped in a trace span carrying
/// the vendor under evaluation.
#[proc_macro_attribute]
pub fn scoring_factor(attrs: TokenStream, input: TokenStream) -> TokenStream {
  let FactorAttributes(ident, FactorNamedAttributes { name }) = deluxe::parse2::<FactorAttributes>(attrs.into()).unwrap();
  let input = proc_macro2::TokenStream::from(input);

  quote! {
      pub struct #ident;

      impl Factor for #ident {
        fn name(&self) -> &'static str {
            #name
        }

        #[tracing::instrument(level = "trace", name = #name, skip_all, fields(vendor_id = vendor.id))]
        #input
      }
  }
  .into()
}
