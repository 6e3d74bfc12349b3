//! How individual elements of a product are written.
//!
//! Every element type must implement [`Element`]. Scalars write themselves through the sink's
//! primitive operations, honouring its [`Flags`](crate::sink::Flags); product types (tuples, arrays
//! and derived structs) write themselves by formatting recursively, so nesting needs no special
//! handling anywhere else. Arbitrary [`Display`] types can be used as elements by wrapping them in
//! [`Plain`].

use crate::sink::Sink;
use std::{
    fmt::{self, Display},
    rc::Rc,
    sync::Arc,
};

/// A value which can appear as an element of a formatted product.
///
/// # Examples
///
/// ```
/// use tuplefmt::{element::Element, to_string, Sink};
///
/// struct Celsius(f32);
///
/// impl Element for Celsius {
///     fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
///         self.0.write_element(out)?;
///         out.write_str("°C")
///     }
/// }
///
/// assert_eq!(to_string(&("oven", Celsius(180.0))), "(oven, 180°C)");
/// ```
pub trait Element {
    /// Write this element into `out`.
    fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error>;
}

macro_rules! display_elements {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
                    out.write_display(self)
                }
            }
        )*
    };
}

display_elements!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_elements {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
                    match out.flags().precision {
                        Some(precision) => out.write_display(&format_args!("{:.*}", precision, self)),
                        None => out.write_display(self),
                    }
                }
            }
        )*
    };
}

float_elements!(f32, f64);

impl Element for bool {
    fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
        if out.flags().boolalpha {
            out.write_display(self)
        } else {
            out.put(if *self { '1' } else { '0' })
        }
    }
}

impl Element for char {
    fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
        out.put(*self)
    }
}

impl Element for str {
    fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
        out.write_str(self)
    }
}

impl Element for String {
    fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
        out.write_str(self)
    }
}

macro_rules! forward_elements {
    ($($ptr:ident),*) => {
        $(
            impl<T: Element + ?Sized> Element for $ptr<T> {
                fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
                    (**self).write_element(out)
                }
            }
        )*
    };
}

forward_elements!(Box, Rc, Arc);

impl<T: Element + ?Sized> Element for &T {
    fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
        (**self).write_element(out)
    }
}

impl<T: Element + ?Sized> Element for &mut T {
    fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
        (**self).write_element(out)
    }
}

/// Use any [`Display`] type as an element, written through its [`Display`] implementation.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use tuplefmt::{element::Plain, to_string};
///
/// let host = (Plain(Ipv4Addr::LOCALHOST), 8080);
/// assert_eq!(to_string(&host), "(127.0.0.1, 8080)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Plain<T>(pub T);

impl<T: Display> Element for Plain<T> {
    fn write_element<W: Sink + ?Sized>(&self, out: &mut W) -> Result<(), W::Error> {
        out.write_display(&self.0)
    }
}

impl<T: Display> Display for Plain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
