use static_assertions::{assert_impl_all, assert_not_impl_any};
use tuplefmt::{
    arity, get, get_mut,
    unary::{UnaryOf, S, Z},
    Element, Format, Get, Product, TupleLike,
};

mod geometry {
    use tuplefmt::{unary::*, Element, Format, Get, Product, Sink};

    /// A product type written out by hand, without the derive.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Vec2 {
        pub x: f64,
        pub y: f64,
    }

    impl Product for Vec2 {
        type Arity = UnaryOf<2>;
    }

    impl Get<Z> for Vec2 {
        type Element = f64;

        fn get(&self) -> &f64 {
            &self.x
        }

        fn get_mut(&mut self) -> &mut f64 {
            &mut self.x
        }
    }

    impl Get<S<Z>> for Vec2 {
        type Element = f64;

        fn get(&self) -> &f64 {
            &self.y
        }

        fn get_mut(&mut self) -> &mut f64 {
            &mut self.y
        }
    }

    impl Element for Vec2 {
        fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
            self.format_to(out).map(|_| ())
        }
    }
}

use geometry::Vec2;

/// Reports one element but has no accessor at all.
struct Hollow;

impl Product for Hollow {
    type Arity = UnaryOf<1>;
}

/// Has accessors for indices 0 and 2, but not 1.
struct Gapped(u8, u8, u8);

impl Product for Gapped {
    type Arity = UnaryOf<3>;
}

impl Get<Z> for Gapped {
    type Element = u8;

    fn get(&self) -> &u8 {
        &self.0
    }

    fn get_mut(&mut self) -> &mut u8 {
        &mut self.0
    }
}

impl Get<S<S<Z>>> for Gapped {
    type Element = u8;

    fn get(&self) -> &u8 {
        &self.2
    }

    fn get_mut(&mut self) -> &mut u8 {
        &mut self.2
    }
}

/// Not an element: it can sit inside a product but cannot be written.
struct Opaque;

assert_impl_all!(Vec2: TupleLike, Format, Element);
assert_impl_all!((Vec2, [Vec2; 2]): Format);
assert_impl_all!((): TupleLike, Format);
assert_impl_all!((Opaque, u8): TupleLike);

assert_not_impl_any!(Hollow: TupleLike, Format);
assert_not_impl_any!(Gapped: TupleLike, Format);
assert_not_impl_any!((Opaque, u8): Format);
assert_not_impl_any!((u8, Gapped): Format);
assert_not_impl_any!(Vec<u8>: Product, TupleLike, Format);
assert_not_impl_any!(String: TupleLike);
assert_not_impl_any!(Option<(u8, u8)>: TupleLike);

#[test]
fn hand_written_products_format_like_tuples() {
    let v = Vec2 { x: 1.5, y: -2.0 };
    assert_eq!(tuplefmt::to_string(&v), "(1.5, -2)");
    assert_eq!(tuplefmt::to_string(&(v, [v; 2])), "((1.5, -2), ((1.5, -2), (1.5, -2)))");
}

#[test]
fn accessors_reach_the_same_storage() {
    let mut v = Vec2 { x: 0.0, y: 0.0 };
    *get_mut::<Z, _>(&mut v) = 3.0;
    *v.at_mut::<1>() = 4.0;
    assert_eq!(v, Vec2 { x: 3.0, y: 4.0 });
    assert!(std::ptr::eq(get::<S<Z>, _>(&v), &v.y));
}

#[test]
fn arity_comes_from_the_type_alone() {
    assert_eq!(arity::<Vec2>(), 2);
    assert_eq!(arity::<Hollow>(), 1);
    assert_eq!(arity::<Gapped>(), 3);
    assert_eq!(arity::<(Opaque, u8)>(), 2);
    assert_eq!(arity::<[Opaque; 5]>(), 5);
    let _: UnaryOf<2> = S(S(Z));
}
