use static_assertions::{assert_impl_all, assert_type_eq_all};
use tuplefmt::{arity, to_string, unary::UnaryOf, Element, Format, Get, Product, TupleLike};

#[derive(Product)]
struct Named {
    id: u32,
    name: &'static str,
    active: bool,
}

#[derive(Product)]
struct Newtype(f64);

#[derive(Product)]
struct Unit;

#[derive(Product)]
struct Pair<A, B>(A, B);

#[derive(Product)]
struct Cached {
    key: String,
    #[product(skip)]
    #[allow(dead_code)]
    hits: usize,
    value: [u8; 2],
}

#[derive(Product)]
struct Outer<'a> {
    inner: &'a Named,
    pair: Pair<char, Unit>,
}

assert_impl_all!(Named: TupleLike, Format, Element);
assert_impl_all!(Unit: TupleLike, Format);
assert_impl_all!(Pair<u8, String>: Format);
assert_type_eq_all!(<Named as Product>::Arity, UnaryOf<3>);
assert_type_eq_all!(<Cached as Product>::Arity, UnaryOf<2>);
assert_type_eq_all!(<Cached as Get<UnaryOf<1>>>::Element, [u8; 2]);
assert_type_eq_all!(<Pair<u8, char> as Get<UnaryOf<1>>>::Element, char);

#[test]
fn named_fields_in_declaration_order() {
    let n = Named {
        id: 7,
        name: "seven",
        active: true,
    };
    assert_eq!(arity::<Named>(), 3);
    assert_eq!(to_string(&n), "(7, seven, 1)");
}

#[test]
fn tuple_and_unit_structs() {
    assert_eq!(to_string(&Newtype(0.5)), "(0.5)");
    assert_eq!(to_string(&Unit), "()");
    assert_eq!(to_string(&Pair('x', (1, 2))), "(x, (1, 2))");
}

#[test]
fn skipped_fields_are_left_out() {
    let mut c = Cached {
        key: "k".into(),
        hits: 99,
        value: [1, 2],
    };
    assert_eq!(to_string(&c), "(k, (1, 2))");
    c.at_mut::<1>()[1] = 3;
    assert_eq!(c.value, [1, 3]);
    assert_eq!(arity::<Cached>(), 2);
}

#[test]
fn derived_products_nest() {
    let named = Named {
        id: 1,
        name: "one",
        active: false,
    };
    let outer = Outer {
        inner: &named,
        pair: Pair('p', Unit),
    };
    assert_eq!(to_string(&outer), "((1, one, 0), (p, ()))");
    assert_eq!(to_string(&[Newtype(1.0), Newtype(2.0)]), "((1), (2))");
}
