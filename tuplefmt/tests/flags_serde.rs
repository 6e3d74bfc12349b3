#![cfg(feature = "serde")]

use tuplefmt::sink::{Flags, Text};
use tuplefmt::Format;

#[test]
fn flags_load_from_json() {
    let flags: Flags = serde_json::from_str(r#"{ "boolalpha": true, "precision": 1 }"#).unwrap();
    assert_eq!(flags, Flags::default().boolalpha(true).precision(1));

    let mut out = Text::new(String::new()).with_flags(flags);
    (true, 0.75f32).format_to(&mut out).unwrap();
    assert_eq!(out.into_inner(), "(true, 0.8)");
}

#[test]
fn missing_fields_take_defaults() {
    let flags: Flags = serde_json::from_str("{}").unwrap();
    assert_eq!(flags, Flags::default());
    assert_eq!(
        serde_json::to_string(&flags).unwrap(),
        r#"{"boolalpha":false,"precision":null}"#
    );
}
