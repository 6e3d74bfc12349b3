/*!
Compile-time checked formatting for tuples, arrays, and any other fixed-arity *product type*.

A product type is anything with a fixed number of elements, each reachable by its position: a
tuple, a pair, a fixed-size array, or a struct which exposes its fields positionally. This crate
prints all of them in one uniform notation,

```text
(e0, e1, ..., en-1)
```

without a formatter written per type. Nested product types are printed the same way, recursively:

```
use tuplefmt::to_string;

assert_eq!(to_string(&()), "()");
assert_eq!(to_string(&(10,)), "(10)");
assert_eq!(to_string(&(1, "hello")), "(1, hello)");
assert_eq!(to_string(&[1, 2, 3, 4]), "(1, 2, 3, 4)");
assert_eq!(to_string(&(1, (2.5, 'a'), (true,))), "(1, (2.5, a), (1))");
```

## How it works

Whether a type is a product type is decided entirely by the compiler:

- [`Product`] gives a type's [arity](Product::Arity) as a type-level [unary](unary) number;
- [`Get<I>`] gives access to the element at index `I` by reference; and
- [`TupleLike`] holds exactly when a [`Product`] has a [`Get<I>`] for *every* index below its
  arity.

The formatter, [`Format`], is available for every [`TupleLike`] type whose elements can all be
written (see [`Element`]). A type with a missing accessor, or a variable-length container like
`Vec`, is rejected when the program is compiled, never at runtime:

```compile_fail
tuplefmt::to_string(&vec![1, 2, 3]);
```

Your own types can join in by implementing [`Product`] and [`Get`] by hand, or more simply with
[`#[derive(Product)]`](macro@Product):

```
use tuplefmt::{to_string, Product};

#[derive(Product)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

assert_eq!(to_string(&("teal", Rgb { r: 0, g: 128, b: 128 })), "(teal, (0, 128, 128))");
```

## Where the output goes

Output is written to a [`Sink`]: a [`String`], a [`std::fmt::Formatter`] (via [`tupled`]), or one
of the adapters in the [`sink`] module. A sink failing part way through a write, such as a
fixed-size [`Span`](sink::Span) running out of room, is reported to the caller unchanged. Scalar
elements are rendered according to the sink's [`Flags`](sink::Flags).
*/

#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod capability;
pub mod element;
pub mod error;
pub mod format;
pub mod sink;
pub mod unary;

mod impls;

pub use capability::{arity, get, get_mut, Get, Product, TupleLike};
pub use element::{Element, Plain};
pub use format::{format_to, to_string, tupled, Format, Tupled};
pub use sink::Sink;

/// Derive [`Product`], [`Get`] and [`Element`] for a struct, making it a product type.
///
/// Fields become elements in declaration order; named, tuple and unit structs are supported. A
/// field marked `#[product(skip)]` is left out, and the fields after it move up to fill its index.
///
/// # Examples
///
/// ```
/// use tuplefmt::{arity, to_string, Product};
///
/// #[derive(Product)]
/// struct Labeled<T> {
///     label: &'static str,
///     value: T,
///     #[product(skip)]
///     hits: u64,
/// }
///
/// let point = Labeled { label: "origin", value: (0, 0), hits: 12 };
/// assert_eq!(arity::<Labeled<(i32, i32)>>(), 2);
/// assert_eq!(*point.at::<0>(), "origin");
/// assert_eq!(to_string(&point), "(origin, (0, 0))");
/// ```
///
/// Only structs can be product types:
///
/// ```compile_fail
/// #[derive(tuplefmt::Product)]
/// enum Either {
///     Left(u8),
///     Right(u8),
/// }
/// ```
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use tuplefmt_macro::Product;

/// The prelude module for quickly getting started with tuplefmt.
///
/// This module is designed to be imported as `use tuplefmt::prelude::*;`, which brings into scope
/// the traits needed to format and access product types.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{tupled, Element, Format, Get, Product, Sink, TupleLike};
}
