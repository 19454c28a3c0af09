//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// The properties given to `#[solution_runner(...)]`.
#[derive(Default)]
struct RunnerArgs {
    /// Expression for the display name; should resolve to `&str`.
    name: Option<Expr>,
    /// Type implementing `ParseData`.
    parsed: Option<Type>,
    /// Type implementing `Solution<PartOne>`.
    part_one: Option<Type>,
    /// Type implementing `Solution<PartTwo>`.
    part_two: Option<Type>,
}

/// Store a property's value in `slot`, rejecting a second occurrence.
fn set_once<T: Parse>(
    slot: &mut Option<T>,
    meta: &ParseNestedMeta<'_>,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

impl RunnerArgs {
    fn parse_meta(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("name") {
            set_once(&mut self.name, meta, "name")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut self.parsed, meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut self.part_one, meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut self.part_two, meta, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    }

    /// The call to the framework's `solve_*` function matching the given properties.
    fn solve_call(self) -> syn::Result<proc_macro2::TokenStream> {
        let name = self
            .name
            .ok_or_else(|| Error::new(Span::call_site(), "missing required property: 'name'"))?;
        let part_one = self.part_one.ok_or_else(|| {
            Error::new(Span::call_site(), "missing required property: 'part_one'")
        })?;

        let call = match (self.parsed, self.part_two) {
            (None, None) => quote! {
                aoc_framework::runner::solve_half_solution::<#part_one>(
                    #name, input, handler, timed
                )
            },
            (None, Some(part_two)) => quote! {
                aoc_framework::runner::solve_full_solution::<#part_one, #part_two>(
                    #name, input, handler, timed
                )
            },
            (Some(parsed), None) => quote! {
                aoc_framework::runner::solve_parsed_half_solution::<#parsed, #part_one>(
                    #name, input, handler, timed
                )
            },
            (Some(parsed), Some(part_two)) => quote! {
                aoc_framework::runner::solve_parsed_full_solution::<#parsed, #part_one, #part_two>(
                    #name, input, handler, timed
                )
            },
        };
        Ok(call)
    }
}

/// Implements `aoc_framework::runner::SolutionRunner` for the annotated struct or impl block's
/// type.
///
/// # Properties
///
/// - `name` (required): an expression evaluating to `&str`, the day's display name.
/// - `part_one` (required): the type implementing `Solution<PartOne>`.
/// - `part_two`: the type implementing `Solution<PartTwo>`. Without it only part one runs.
/// - `parsed`: a type implementing `ParseData`. Without it, solutions receive the raw `str`.
///
/// # Errors
///
/// A compile error is emitted when the attribute is placed on anything but a struct or impl
/// block, when `name` or `part_one` is missing, or when a property is repeated or unknown.
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(name = "Day 1", part_one = Day01)]
/// struct Day01Runner;
/// ```
///
/// Days registered on a const-generic registry type:
///
/// ```ignore
/// #[solution_runner(
///     name = "Day 12: Hill Climbing Algorithm",
///     parsed = HeightMap,
///     part_one = Day12,
///     part_two = Day12
/// )]
/// impl super::AdventOfCode2022<12> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut runner_args = RunnerArgs::default();
    let args_parser = syn::meta::parser(|meta| runner_args.parse_meta(&meta));
    parse_macro_input!(args with args_parser);

    let solve_call = match runner_args.solve_call() {
        Ok(call) => call,
        Err(error) => return error.to_compile_error().into(),
    };

    let annotated = proc_macro2::TokenStream::from(input.clone());
    let item = parse_macro_input!(input as Item);

    let self_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #annotated

        impl aoc_framework::runner::SolutionRunner for #self_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool
            ) -> aoc_framework::DynamicResult<()> {
                #solve_call
            }
        }
    })
}
