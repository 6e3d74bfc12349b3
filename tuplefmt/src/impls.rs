//! Implementations of [`Product`] and [`Get`] for the built-in product types: tuples up to arity
//! 32 and arrays up to length [`MAX_CONSTANT`](crate::unary::MAX_CONSTANT).
//!
//! Both get one generated `Get` impl per index, so an index is checked without any arithmetic on
//! the length.

use crate::{
    capability::{Get, Product},
    element::Element,
    format::Format,
    sink::Sink,
    unary::{S, Z},
};

tuplefmt_macro::impl_tuples!(32);
tuplefmt_macro::impl_arrays!(64);

impl<T, const N: usize> Element for [T; N]
where
    Self: Format,
{
    fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
        Format::format_to(self, out).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        capability::TupleLike,
        unary::{UnaryOf, MAX_CONSTANT},
    };
    use static_assertions::{assert_impl_all, assert_not_impl_any, const_assert_eq};

    const_assert_eq!(MAX_CONSTANT, 64);

    assert_impl_all!((u8,): TupleLike, Format, Element);
    assert_impl_all!((u8, (f64, char), (bool,)): Format);
    assert_impl_all!([[i32; 2]; 3]: Format);
    assert_impl_all!([u8; 64]: TupleLike, Format);
    assert_not_impl_any!([u8; 65]: Product);
    assert_not_impl_any!([u8; 4]: Get<UnaryOf<4>>);

    #[test]
    fn array_elements_are_indexed_in_order() {
        let mut array = [10, 20, 30];
        assert_eq!(*<[i32; 3] as Get<Z>>::get(&array), 10);
        assert_eq!(*<[i32; 3] as Get<S<S<Z>>>>::get(&array), 30);
        *<[i32; 3] as Get<S<Z>>>::get_mut(&mut array) = 21;
        assert_eq!(array, [10, 21, 30]);
    }

    #[test]
    fn tuple_elements_keep_their_types() {
        let pair = (String::from("left"), 2u64);
        let left: &String = <(String, u64) as Get<Z>>::get(&pair);
        let right: &u64 = <(String, u64) as Get<S<Z>>>::get(&pair);
        assert_eq!(left, "left");
        assert_eq!(*right, 2);
    }
}
