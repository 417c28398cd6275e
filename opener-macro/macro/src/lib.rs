#[macro_use]
extern crate quote;

use proc_macro::TokenStream;
use regex::Regex;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, ItemEnum, Meta, NestedMeta};

fn snake_case(ident: &str) -> String {
	let re = Regex::new(r"[A-Z0-9]{1}[a-z0-9]*").unwrap();
	re.find_iter(ident)
		.map(|m| m.as_str().to_ascii_lowercase())
		.collect::<Vec<String>>()
		.join("_")
}

/// Derives `FromStr` for fieldless enums.
///
/// Variant names are matched ignoring ASCII case, and their `snake_case` spelling
/// is accepted too, so `"ExtraWorkersQueued"`, `"extraworkersqueued"` and
/// `"extra_workers_queued"` all parse. With `#[enum_from_str(use_primitives)]`
/// numeric discriminants are accepted as well (requires `FromPrimitive`).
#[proc_macro_derive(FromStr, attributes(enum_from_str))]
pub fn enum_from_str_derive(input: TokenStream) -> TokenStream {
	let item = parse_macro_input!(input as DeriveInput);
	let data = match item.data {
		Data::Enum(data) => data,
		_ => panic!("Can only derive FromStr for enums"),
	};
	let name = item.ident;
	let variants = data.variants.iter().map(|v| &v.ident).collect::<Vec<_>>();
	let names = variants.iter().map(|v| v.to_string()).collect::<Vec<_>>();
	let snake_names = names.iter().map(|n| snake_case(n)).collect::<Vec<_>>();

	let use_primitives = |a: &Attribute| {
		if !a.path.is_ident("enum_from_str") {
			return false;
		}
		match a.parse_meta() {
			Ok(Meta::List(list)) => list.nested.iter().any(|n| match n {
				NestedMeta::Meta(Meta::Path(path)) => path.is_ident("use_primitives"),
				_ => false,
			}),
			_ => panic!("No options found in attribute `enum_from_str`"),
		}
	};
	let numeric = if item.attrs.iter().any(use_primitives) {
		quote! {
			if let Ok(num) = s.parse::<i64>() {
				if let Some(result) = <Self as num_traits::FromPrimitive>::from_i64(num) {
					return Ok(result);
				}
			}
		}
	} else {
		quote! {}
	};

	TokenStream::from(quote! {
		impl std::str::FromStr for #name {
			type Err = opener_macro::ParseEnumError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				let s = s.trim();
				#(
					if s.eq_ignore_ascii_case(#names) || s.eq_ignore_ascii_case(#snake_names) {
						return Ok(Self::#variants);
					}
				)*
				#numeric
				Err(opener_macro::ParseEnumError)
			}
		}
	})
}

/// Adds an `is_<variant>` checker for every variant of a fieldless enum.
#[proc_macro_attribute]
pub fn variant_checkers(_attr: TokenStream, item: TokenStream) -> TokenStream {
	let item = parse_macro_input!(item as ItemEnum);

	let name = &item.ident;
	let variants = item.variants.iter().map(|v| &v.ident);
	let checkers = variants
		.clone()
		.map(|v| format_ident!("is_{}", snake_case(&v.to_string())));

	TokenStream::from(quote! {
		#item
		impl #name {
			#(
				#[inline]
				pub fn #checkers(self) -> bool {
					matches!(self, Self::#variants)
				}
			)*
		}
	})
}
