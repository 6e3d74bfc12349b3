//! The destinations that formatted products are written into.
//!
//! Formatting only ever asks two things of its destination: to write a single character, and to
//! write an already-displayable scalar value. Both are captured by the [`Sink`] trait, along with
//! the [`Flags`] governing how scalars are rendered. Sinks are provided for:
//!
//! - [`String`], for building up formatted text in memory;
//! - [`fmt::Formatter`], so that products can be used inside `format!` and friends (see
//!   [`tupled`](crate::tupled));
//! - [`Text`], wrapping any [`fmt::Write`];
//! - [`Stream`], wrapping any [`io::Write`]; and
//! - [`Span`], a fixed-capacity byte buffer which refuses writes once it is full.
//!
//! Sinks are written to strictly in order and never buffer on behalf of the formatter: if a write
//! fails, the failure is returned as-is, and whatever was already written stays written.

use crate::error::{Overflow, SpanError};
use std::{
    fmt::{self, Write as _},
    io, str,
};

/// How scalar elements are rendered.
///
/// The defaults follow the classic stream conventions: booleans are written as `1` and `0`, and
/// floating-point numbers in their shortest round-tripping form.
///
/// # Examples
///
/// ```
/// use tuplefmt::{sink::{Flags, Text}, Format};
///
/// let flags = Flags::default().boolalpha(true).precision(2);
/// let mut out = Text::new(String::new()).with_flags(flags);
/// (true, 1.0f64).format_to(&mut out).unwrap();
/// assert_eq!(out.into_inner(), "(true, 1.00)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate", default)
)]
pub struct Flags {
    /// Write booleans as `true` and `false` rather than `1` and `0`.
    pub boolalpha: bool,
    /// Write floating-point numbers with exactly this many digits after the decimal point.
    pub precision: Option<usize>,
}

impl Flags {
    /// Set whether booleans are written as words.
    pub fn boolalpha(self, boolalpha: bool) -> Self {
        Flags { boolalpha, ..self }
    }

    /// Set (or, with `None`, clear) the fixed floating-point precision.
    pub fn precision(self, precision: impl Into<Option<usize>>) -> Self {
        Flags {
            precision: precision.into(),
            ..self
        }
    }
}

/// A destination accepting ordered primitive writes.
///
/// Each write either succeeds entirely or fails with [`Sink::Error`]; the formatter propagates
/// such failures unchanged and performs no retries.
pub trait Sink {
    /// The error produced when a write fails.
    type Error;

    /// Write a single character.
    fn put(&mut self, c: char) -> Result<(), Self::Error>;

    /// Write any displayable value, using its [`Display`](fmt::Display) representation.
    fn write_display<V: fmt::Display + ?Sized>(&mut self, value: &V) -> Result<(), Self::Error>;

    /// Write a string slice verbatim.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_display(s)
    }

    /// The scalar rendering conventions in effect for this sink.
    fn flags(&self) -> Flags {
        Flags::default()
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn put(&mut self, c: char) -> Result<(), Self::Error> {
        (**self).put(c)
    }

    fn write_display<V: fmt::Display + ?Sized>(&mut self, value: &V) -> Result<(), Self::Error> {
        (**self).write_display(value)
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        (**self).write_str(s)
    }

    fn flags(&self) -> Flags {
        (**self).flags()
    }
}

impl Sink for String {
    type Error = fmt::Error;

    fn put(&mut self, c: char) -> Result<(), Self::Error> {
        self.push(c);
        Ok(())
    }

    fn write_display<V: fmt::Display + ?Sized>(&mut self, value: &V) -> Result<(), Self::Error> {
        write!(self, "{}", value)
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.push_str(s);
        Ok(())
    }
}

/// Writing into a [`fmt::Formatter`] takes the scalar conventions from the format spec: the
/// alternate flag (`{:#}`) turns on [`boolalpha`](Flags::boolalpha), and a precision (`{:.3}`)
/// sets the floating-point [`precision`](Flags::precision).
impl Sink for fmt::Formatter<'_> {
    type Error = fmt::Error;

    fn put(&mut self, c: char) -> Result<(), Self::Error> {
        self.write_char(c)
    }

    fn write_display<V: fmt::Display + ?Sized>(&mut self, value: &V) -> Result<(), Self::Error> {
        write!(self, "{}", value)
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        fmt::Formatter::write_str(self, s)
    }

    fn flags(&self) -> Flags {
        Flags {
            boolalpha: self.alternate(),
            precision: self.precision(),
        }
    }
}

/// A sink over any [`fmt::Write`], with configurable [`Flags`].
#[derive(Debug, Clone, Default)]
pub struct Text<W> {
    inner: W,
    flags: Flags,
}

impl<W: fmt::Write> Text<W> {
    /// Wrap a [`fmt::Write`] with the default [`Flags`].
    pub fn new(inner: W) -> Self {
        Text {
            inner,
            flags: Flags::default(),
        }
    }

    /// Replace the [`Flags`] used by this sink.
    pub fn with_flags(self, flags: Flags) -> Self {
        Text { flags, ..self }
    }

    /// Borrow the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the wrapped writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap this sink, returning the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> Sink for Text<W> {
    type Error = fmt::Error;

    fn put(&mut self, c: char) -> Result<(), Self::Error> {
        self.inner.write_char(c)
    }

    fn write_display<V: fmt::Display + ?Sized>(&mut self, value: &V) -> Result<(), Self::Error> {
        write!(self.inner, "{}", value)
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.inner.write_str(s)
    }

    fn flags(&self) -> Flags {
        self.flags
    }
}

/// A sink over any [`io::Write`], with configurable [`Flags`].
///
/// Every primitive write is passed straight through to the underlying writer; wrap it in an
/// [`io::BufWriter`] if it is expensive to write to.
#[derive(Debug, Clone, Default)]
pub struct Stream<W> {
    inner: W,
    flags: Flags,
}

impl<W: io::Write> Stream<W> {
    /// Wrap an [`io::Write`] with the default [`Flags`].
    pub fn new(inner: W) -> Self {
        Stream {
            inner,
            flags: Flags::default(),
        }
    }

    /// Replace the [`Flags`] used by this sink.
    pub fn with_flags(self, flags: Flags) -> Self {
        Stream { flags, ..self }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Borrow the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the wrapped writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap this sink, returning the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn traced(result: io::Result<()>) -> io::Result<()> {
        if let Err(error) = &result {
            tracing::debug!(%error, "stream sink write failed");
        }
        result
    }
}

impl<W: io::Write> Sink for Stream<W> {
    type Error = io::Error;

    fn put(&mut self, c: char) -> Result<(), Self::Error> {
        let mut buf = [0; 4];
        Self::traced(self.inner.write_all(c.encode_utf8(&mut buf).as_bytes()))
    }

    fn write_display<V: fmt::Display + ?Sized>(&mut self, value: &V) -> Result<(), Self::Error> {
        Self::traced(write!(self.inner, "{}", value))
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        Self::traced(self.inner.write_all(s.as_bytes()))
    }

    fn flags(&self) -> Flags {
        self.flags
    }
}

/// A sink writing into a fixed-capacity byte buffer.
///
/// A [`put`](Sink::put) or [`write_str`](Sink::write_str) which does not fit in the remaining
/// space is rejected as a whole with an [`Overflow`], leaving everything written before it in
/// place. [`write_display`](Sink::write_display) is only atomic per piece that the value's
/// [`Display`](fmt::Display) implementation emits: a float, for instance, may leave `2.` behind
/// when its last digits do not fit. Pieces are always whole `str`s, so the written prefix is
/// always valid UTF-8.
///
/// # Examples
///
/// ```
/// use tuplefmt::{format_to, sink::Span};
///
/// let mut buf = [0; 32];
/// let mut out = Span::new(&mut buf);
/// format_to(&mut out, &(3.14, 'c', 42)).unwrap();
/// assert_eq!(out.as_str(), "(3.14, c, 42)");
/// ```
#[derive(Debug)]
pub struct Span<'a> {
    buf: &'a mut [u8],
    len: usize,
    flags: Flags,
}

impl<'a> Span<'a> {
    /// Create an empty span over the given buffer, with the default [`Flags`].
    pub fn new(buf: &'a mut [u8]) -> Self {
        Span {
            buf,
            len: 0,
            flags: Flags::default(),
        }
    }

    /// Replace the [`Flags`] used by this sink.
    pub fn with_flags(self, flags: Flags) -> Self {
        Span { flags, ..self }
    }

    /// The total number of bytes this span can hold.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of bytes which can still be written.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        // Only whole `str` pieces are copied in, so this never falls back.
        str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Forget everything written so far.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    fn push(&mut self, s: &str) -> Result<(), Overflow> {
        if s.len() > self.remaining() {
            let overflow = Overflow {
                capacity: self.capacity(),
                written: self.len,
                requested: s.len(),
            };
            tracing::debug!(%overflow, "span sink rejected a write");
            return Err(overflow);
        }
        self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
        self.len += s.len();
        Ok(())
    }
}

/// Adapts a [`Span`] to [`fmt::Write`], remembering why a write was refused.
struct SpanWriter<'s, 'a> {
    span: &'s mut Span<'a>,
    overflow: Option<Overflow>,
}

impl fmt::Write for SpanWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.span.push(s).map_err(|overflow| {
            self.overflow = Some(overflow);
            fmt::Error
        })
    }
}

impl Sink for Span<'_> {
    type Error = SpanError;

    fn put(&mut self, c: char) -> Result<(), Self::Error> {
        let mut buf = [0; 4];
        Ok(self.push(c.encode_utf8(&mut buf))?)
    }

    fn write_display<V: fmt::Display + ?Sized>(&mut self, value: &V) -> Result<(), Self::Error> {
        let mut writer = SpanWriter {
            span: self,
            overflow: None,
        };
        write!(writer, "{}", value).map_err(|error| match writer.overflow {
            Some(overflow) => SpanError::Overflow(overflow),
            None => SpanError::Display(error),
        })
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        Ok(self.push(s)?)
    }

    fn flags(&self) -> Flags {
        self.flags
    }
}
