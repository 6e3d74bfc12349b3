//! The structural capability check that decides which types are product types.
//!
//! A type is a product type when it reports a fixed [`Arity`](Product::Arity) and provides an
//! accessor, [`Get<I>`], for *every* index `I` below that arity. The conjunction over all indices is
//! expressed inductively by [`Accessible`], and the whole check is packaged up as the
//! [`TupleLike`] trait, which is implemented automatically for every type that passes it.
//!
//! Tuples up to arity 32, arrays up to length 64, and structs using
//! [`#[derive(Product)]`](macro@crate::Product) all pass out of the box. Nothing has to opt in
//! beyond supplying the accessors themselves.

use crate::unary::{Number, ToUnary, Unary, UnaryOf, S, Z};

/// A type with a fixed number of elements, known without looking at any value of the type.
///
/// Implementing this trait alone does not make a type [`TupleLike`]: it must also implement
/// [`Get<I>`] for every index `I` below its [`Arity`](Product::Arity).
pub trait Product {
    /// The number of elements, as a type-level unary number.
    type Arity: Unary;

    /// Borrow the element at the constant index `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplefmt::Product;
    ///
    /// let pair = (1u8, "two");
    /// assert_eq!(*pair.at::<1>(), "two");
    /// ```
    fn at<const I: usize>(&self) -> &<Self as Get<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        Self: Get<UnaryOf<I>>,
    {
        <Self as Get<UnaryOf<I>>>::get(self)
    }

    /// Mutably borrow the element at the constant index `I`.
    fn at_mut<const I: usize>(&mut self) -> &mut <Self as Get<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        Self: Get<UnaryOf<I>>,
    {
        <Self as Get<UnaryOf<I>>>::get_mut(self)
    }
}

/// Access to the element at index `I` of a product type.
///
/// The accessors always hand out references to the element, never copies, and the referenced type
/// is exactly [`Element`](Get::Element). A shared product only ever yields shared elements.
pub trait Get<I: Unary>: Product {
    /// The declared type of the element at index `I`.
    type Element;

    /// Borrow the element at index `I`.
    fn get(&self) -> &Self::Element;

    /// Mutably borrow the element at index `I`.
    fn get_mut(&mut self) -> &mut Self::Element;
}

/// The number of elements of the product type `T`.
///
/// # Examples
///
/// ```
/// assert_eq!(tuplefmt::arity::<()>(), 0);
/// assert_eq!(tuplefmt::arity::<(u8, char, &str)>(), 3);
/// assert_eq!(tuplefmt::arity::<[i32; 4]>(), 4);
/// ```
pub fn arity<T: Product + ?Sized>() -> usize {
    <T::Arity as Unary>::VALUE
}

/// Borrow the element at index `I` of `value`.
///
/// # Examples
///
/// ```
/// use tuplefmt::{get, unary::UnaryOf};
///
/// let triple = (3.5, 'c', 42);
/// assert_eq!(*get::<UnaryOf<2>, _>(&triple), 42);
/// ```
pub fn get<I: Unary, T: Get<I> + ?Sized>(value: &T) -> &T::Element {
    <T as Get<I>>::get(value)
}

/// Mutably borrow the element at index `I` of `value`.
pub fn get_mut<I: Unary, T: Get<I> + ?Sized>(value: &mut T) -> &mut T::Element {
    <T as Get<I>>::get_mut(value)
}

/// The elements at indices `I .. I + N` are all accessible through [`Get`].
///
/// Every type trivially has all of its zero elements starting from any index; beyond that, an
/// element at `I` must be accessible and so must the `N - 1` elements after it.
pub trait Accessible<I: Unary, N: Unary> {}

impl<T: ?Sized, I: Unary> Accessible<I, Z> for T {}

impl<T: ?Sized, I: Unary, N: Unary> Accessible<I, S<N>> for T where T: Get<I> + Accessible<S<I>, N> {}

/// A product type whose every element is accessible: the structural capability check.
///
/// This trait is implemented automatically and holds exactly for those [`Product`]s that implement
/// [`Get<I>`] for each `I` below their arity, so a missing accessor anywhere disqualifies the whole
/// type, while a product of arity zero qualifies vacuously.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_impl_all;
/// use tuplefmt::TupleLike;
///
/// assert_impl_all!((): TupleLike);
/// assert_impl_all!((i32, String): TupleLike);
/// assert_impl_all!([u8; 16]: TupleLike);
/// ```
///
/// # Counterexamples
///
/// Variable-length containers are not product types:
///
/// ```compile_fail
/// # use static_assertions::assert_impl_all;
/// # use tuplefmt::TupleLike;
/// assert_impl_all!(Vec<i32>: TupleLike);
/// ```
///
/// Neither is a type which claims two elements but only provides an accessor for the first:
///
/// ```compile_fail
/// # use static_assertions::assert_impl_all;
/// use tuplefmt::{unary::*, Get, Product, TupleLike};
///
/// struct Half(u8, u8);
///
/// impl Product for Half {
///     type Arity = UnaryOf<2>;
/// }
///
/// impl Get<Z> for Half {
///     type Element = u8;
///     fn get(&self) -> &u8 { &self.0 }
///     fn get_mut(&mut self) -> &mut u8 { &mut self.0 }
/// }
///
/// assert_impl_all!(Half: TupleLike);
/// ```
pub trait TupleLike: Product {}

impl<T> TupleLike for T where T: Product + Accessible<Z, <T as Product>::Arity> + ?Sized {}
