//! Elementwise formatting of product types.
//!
//! A product of arity `N` is written as `(`, then its elements in ascending index order separated
//! by `, `, then `)`. An element which is itself a product is written the same way, recursively, so
//! `(1, (2.5, 'a'), (true,))` comes out as `(1, (2.5, a), (1))`.

use crate::{
    capability::{Accessible, Get, Product, TupleLike},
    element::Element,
    sink::Sink,
    unary::{Unary, S, Z},
};
use std::{any, fmt};

/// The per-call formatting state: whether the next element needs a separator in front of it.
///
/// Each product being formatted, nested or not, gets its own fresh `Separator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Separator {
    pending: bool,
}

impl Separator {
    /// The text written between consecutive elements.
    pub const TEXT: &'static str = ", ";

    /// Write the separator unless this is the first element, then remember that the next one will
    /// need it.
    pub fn before_element<W: Sink + ?Sized>(&mut self, out: &mut W) -> Result<(), W::Error> {
        if self.pending {
            out.write_str(Self::TEXT)?;
        }
        self.pending = true;
        Ok(())
    }
}

/// Write the `N` elements starting at index `I`, in order.
///
/// This is implemented for every type which has accessors for those indices and whose elements
/// there are all [`Element`]s; it is the traversal underlying [`Format`].
pub trait Walk<I: Unary, N: Unary>: Accessible<I, N> {
    /// Write the elements `I .. I + N` of `self`, each preceded by a separator where needed.
    fn walk<W: Sink + ?Sized>(&self, out: &mut W, sep: &mut Separator) -> Result<(), W::Error>;
}

impl<T: ?Sized, I: Unary> Walk<I, Z> for T {
    fn walk<W: Sink + ?Sized>(&self, _: &mut W, _: &mut Separator) -> Result<(), W::Error> {
        Ok(())
    }
}

impl<T: ?Sized, I: Unary, N: Unary> Walk<I, S<N>> for T
where
    T: Get<I> + Walk<S<I>, N>,
    <T as Get<I>>::Element: Element,
{
    fn walk<W: Sink + ?Sized>(&self, out: &mut W, sep: &mut Separator) -> Result<(), W::Error> {
        sep.before_element(out)?;
        <T as Get<I>>::get(self).write_element(out)?;
        <T as Walk<S<I>, N>>::walk(self, out, sep)
    }
}

/// A product type which can be formatted: it is [`TupleLike`] and all of its elements are
/// [`Element`]s.
///
/// # Examples
///
/// ```
/// use tuplefmt::Format;
///
/// let mut out = String::new();
/// (1, "hello").format_to(&mut out)?.push('!');
/// assert_eq!(out, "(1, hello)!");
/// # Ok::<(), std::fmt::Error>(())
/// ```
///
/// # Counterexamples
///
/// Every element must be writable, so a tuple holding a `Vec` cannot be formatted:
///
/// ```compile_fail
/// use tuplefmt::Format;
///
/// let mut out = String::new();
/// (1, vec![2, 3]).format_to(&mut out).unwrap();
/// ```
pub trait Format: TupleLike {
    /// Write `self` into `out` and hand `out` back, so that further writes can be chained.
    ///
    /// Any error from `out` is returned unchanged, however deeply nested the failing element.
    fn format_to<'w, W: Sink + ?Sized>(&self, out: &'w mut W) -> Result<&'w mut W, W::Error>;
}

impl<T> Format for T
where
    T: TupleLike + Walk<Z, <T as Product>::Arity> + ?Sized,
{
    fn format_to<'w, W: Sink + ?Sized>(&self, out: &'w mut W) -> Result<&'w mut W, W::Error> {
        out.put('(')?;
        let mut sep = Separator::default();
        <T as Walk<Z, <T as Product>::Arity>>::walk(self, &mut *out, &mut sep)?;
        out.put(')')?;
        Ok(out)
    }
}

/// Format `value` into `out`, returning `out` for chaining.
///
/// # Examples
///
/// ```
/// use tuplefmt::{format_to, sink::Stream};
///
/// let mut out = Stream::new(Vec::new());
/// format_to(format_to(&mut out, &(1, 2))?, &[3, 4])?;
/// assert_eq!(out.into_inner(), b"(1, 2)(3, 4)");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn format_to<'w, T, W>(out: &'w mut W, value: &T) -> Result<&'w mut W, W::Error>
where
    T: Format + ?Sized,
    W: Sink + ?Sized,
{
    tracing::trace!(
        ty = any::type_name::<T>(),
        arity = crate::arity::<T>(),
        "formatting product"
    );
    value.format_to(out)
}

/// Format `value` into a new [`String`].
///
/// # Panics
///
/// Like [`ToString::to_string`], this panics if a [`Display`](fmt::Display) implementation used
/// by one of the elements (for instance through [`Plain`](crate::element::Plain)) returns an error
/// of its own.
///
/// # Examples
///
/// ```
/// assert_eq!(tuplefmt::to_string(&()), "()");
/// assert_eq!(tuplefmt::to_string(&(10,)), "(10)");
/// assert_eq!(tuplefmt::to_string(&(1, (2.5, 'a'), (true,))), "(1, (2.5, a), (1))");
/// ```
pub fn to_string<T: Format + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    if format_to(&mut out, value).is_err() {
        panic!("a Display implementation returned an error unexpectedly");
    }
    out
}

/// A [`Display`](fmt::Display) adapter for product types, created by [`tupled`].
///
/// The alternate flag (`{:#}`) writes booleans as `true`/`false`, and a precision (`{:.2}`) fixes
/// the number of decimals written for floating-point elements.
pub struct Tupled<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Clone for Tupled<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Tupled<'_, T> {}

/// Wrap a reference to a product type so that it can be used with `format!`, `println!` and any
/// other formatting machinery.
///
/// # Examples
///
/// ```
/// use tuplefmt::tupled;
///
/// let reading = ("temp", 21.456, true);
/// assert_eq!(format!("{}", tupled(&reading)), "(temp, 21.456, 1)");
/// assert_eq!(format!("{:#.1}", tupled(&reading)), "(temp, 21.5, true)");
/// ```
pub fn tupled<T: Format + ?Sized>(value: &T) -> Tupled<'_, T> {
    Tupled(value)
}

impl<T: Format + ?Sized> fmt::Display for Tupled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_to(f, self.0).map(|_| ())
    }
}

impl<T: Format + ?Sized> fmt::Debug for Tupled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
