use std::collections::LinkedList;
use std::fmt::Display;
use std::io::{self, Write};

use log::debug;

use crate::shape::{Integer, Shaped, TupleRender};

pub const DEFAULT_SEPARATOR: char = '.';

/// Renders a value as a separator joined address string.
///
/// Implemented for `String` (returned untouched), 1/2/4/8 byte integers
/// (split into big endian bytes), `Vec` and `LinkedList` of integers, and
/// integer tuples up to 12 elements. Anything else does not compile:
///
/// ```compile_fail
/// ip_format::format_address(&2.5f64);
/// ```
///
/// neither does a tuple holding a non integer element:
///
/// ```compile_fail
/// ip_format::format_address(&(127u8, "home"));
/// ```
///
/// nor an integer wider than 8 bytes:
///
/// ```compile_fail
/// ip_format::format_address(&1u128);
/// ```
pub trait FormatAddress: Shaped {
    fn format(&self, separator: char) -> String;
}

impl FormatAddress for String {
    // already formatted, returned as is
    fn format(&self, _separator: char) -> String {
        self.clone()
    }
}

macro_rules! impl_byte_split {
    ($($t:ty),*) => {$(
        impl FormatAddress for $t {
            fn format(&self, separator: char) -> String {
                join_display(self.to_be_bytes().iter(), separator)
            }
        }
    )*};
}

impl_byte_split!(i8, u8, i16, u16, i32, u32, i64, u64);

impl<T: Integer> FormatAddress for Vec<T> {
    fn format(&self, separator: char) -> String {
        join_display(self.iter(), separator)
    }
}

impl<T: Integer> FormatAddress for LinkedList<T> {
    fn format(&self, separator: char) -> String {
        join_display(self.iter(), separator)
    }
}

impl FormatAddress for () {
    fn format(&self, separator: char) -> String {
        TupleRender::render(self, separator)
    }
}

macro_rules! impl_tuple_format {
    ($($t:ident),+) => {
        impl<$($t: Integer),+> FormatAddress for ($($t,)+) {
            fn format(&self, separator: char) -> String {
                TupleRender::render(self, separator)
            }
        }
    };
}

impl_tuple_format!(A);
impl_tuple_format!(A, B);
impl_tuple_format!(A, B, C);
impl_tuple_format!(A, B, C, D);
impl_tuple_format!(A, B, C, D, E);
impl_tuple_format!(A, B, C, D, E, F);
impl_tuple_format!(A, B, C, D, E, F, G);
impl_tuple_format!(A, B, C, D, E, F, G, H);
impl_tuple_format!(A, B, C, D, E, F, G, H, I);
impl_tuple_format!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_format!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_format!(A, B, C, D, E, F, G, H, I, J, K, L);

fn join_display<I>(elements: I, separator: char) -> String
where
    I: Iterator,
    I::Item: Display,
{
    elements
        .map(|e| e.to_string())
        .collect::<Vec<String>>()
        .join(&separator.to_string())
}

pub fn format_address<T: FormatAddress>(value: &T) -> String {
    value.format(DEFAULT_SEPARATOR)
}

pub fn format_address_with<T: FormatAddress>(value: &T, separator: char) -> String {
    value.format(separator)
}

pub fn print_address<T, W>(value: &T, out: &mut W) -> io::Result<()>
where
    T: FormatAddress,
    W: Write,
{
    print_address_with(value, DEFAULT_SEPARATOR, out)
}

pub fn print_address_with<T, W>(value: &T, separator: char, out: &mut W) -> io::Result<()>
where
    T: FormatAddress,
    W: Write,
{
    let rendered = value.format(separator);
    debug!("{:?} value rendered as \"{}\"", T::SHAPE, rendered);
    writeln!(out, "{}", rendered)
}
