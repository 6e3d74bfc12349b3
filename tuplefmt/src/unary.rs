//! Type-level natural numbers for arities and element indices.
//!
//! A number is either [`Z`] or [`S<N>`], one more than `N`. Because an index is a type rather than
//! a value, "there is an accessor for every index below the arity" is a trait bound, and the
//! compiler checks it.

/// Zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// A type-level number built from [`Z`] and [`S`].
///
/// # Examples
///
/// ```
/// use tuplefmt::unary::{Unary, S, Z};
///
/// assert_eq!(Z::VALUE, 0);
/// assert_eq!(<S<S<S<Z>>>>::VALUE, 3);
/// ```
pub trait Unary: sealed::Unary + Sized + 'static {
    /// This number as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// The largest `usize` which [`UnaryOf`] can spell, and the longest array which is a product type.
pub const MAX_CONSTANT: usize = 64;

/// Carries a `usize` constant at the type level, so that it can be mapped to its [`Unary`] form.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

/// Maps a [`Number`] to the [`Unary`] number of the same value.
///
/// Implemented for every `Number<N>` with `N` up to [`MAX_CONSTANT`].
pub trait ToUnary {
    /// The unary spelling of this number.
    type AsUnary: Unary;
}

/// The unary number for the constant `N`, so that indices can be written as `UnaryOf<3>` rather
/// than `S<S<S<Z>>>`.
///
/// ```
/// use tuplefmt::unary::{Unary, UnaryOf};
///
/// assert_eq!(<UnaryOf<17>>::VALUE, 17);
/// ```
///
/// Constants beyond [`MAX_CONSTANT`] have no unary form:
///
/// ```compile_fail
/// let _: tuplefmt::unary::UnaryOf<65>;
/// ```
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

tuplefmt_macro::generate_unary_conversion_impls!(64);

mod sealed {
    pub trait Unary {}
    impl Unary for super::Z {}
    impl<N: Unary> Unary for super::S<N> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_type_eq_all, const_assert_eq};

    assert_type_eq_all!(UnaryOf<0>, Z);
    assert_type_eq_all!(UnaryOf<3>, S<S<S<Z>>>);
    const_assert_eq!(<UnaryOf<{ MAX_CONSTANT }>>::VALUE, MAX_CONSTANT);

    #[test]
    fn conversions_keep_their_value() {
        assert_eq!(<UnaryOf<1>>::VALUE, 1);
        assert_eq!(<UnaryOf<40>>::VALUE, 40);
    }
}
