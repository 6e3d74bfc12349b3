//! The largest built-in product types format in a crate with the default recursion limit.

use tuplefmt::{arity, to_string, unary::MAX_CONSTANT};

fn joined(parts: impl Iterator<Item = String>) -> String {
    format!("({})", parts.collect::<Vec<_>>().join(", "))
}

#[test]
fn longest_array() {
    let array = [0u8; 64];
    assert_eq!(arity::<[u8; 64]>(), MAX_CONSTANT);
    assert_eq!(to_string(&array), joined((0..64).map(|_| "0".to_owned())));
}

#[test]
fn longest_array_of_pairs() {
    let array = [(1u8, 'x'); 64];
    assert_eq!(to_string(&array), joined((0..64).map(|_| "(1, x)".to_owned())));
}

#[test]
fn widest_tuple() {
    let tuple = (
        0u8, 1u8, 2u8, 3u8, 4u8, 5u8, 6u8, 7u8, 8u8, 9u8, 10u8, 11u8, 12u8, 13u8, 14u8, 15u8, 16u8,
        17u8, 18u8, 19u8, 20u8, 21u8, 22u8, 23u8, 24u8, 25u8, 26u8, 27u8, 28u8, 29u8, 30u8, 31u8,
    );
    assert_eq!(to_string(&tuple), joined((0..32).map(|i| i.to_string())));
}
