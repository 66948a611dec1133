use std::io::{Read, Write};

use crate::{InputSource, ScanError};

/// Formatted extraction of a value from an `InputSource`.
///
/// `Ok(None)` means the end of input was reached before a value could be extracted. `Err(ScanError::Malformed { .. })` means the next token does not have the expected form; implementations should leave that token pending so that callers can inspect or drop it.
///
/// Implementations for user types usually extract their fields one by one:
///
/// ```rust
/// extern crate sensible_read;
///
/// use std::io::{Read, Write};
///
/// use sensible_read::{Extract, InputSource, ScanError};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Extract for Point {
///     fn extract<R: Read, W: Write>(
///         source: &mut InputSource<R, W>,
///     ) -> Result<Option<Self>, ScanError> {
///         let x = match i32::extract(source)? {
///             Some(x) => x,
///             None => return Ok(None),
///         };
///
///         let y = match i32::extract(source)? {
///             Some(y) => y,
///             None => return Ok(None),
///         };
///
///         Ok(Some(Point {
///             x,
///             y,
///         }))
///     }
/// }
///
/// let mut source = InputSource::new("3 -4".as_bytes());
///
/// assert_eq!(Some(Point { x: 3, y: -4 }), source.extract::<Point>().unwrap());
/// ```
pub trait Extract: Sized {
    fn extract<R: Read, W: Write>(source: &mut InputSource<R, W>) -> Result<Option<Self>, ScanError>;
}

macro_rules! impl_extract_parsed {
    ($($t:ty),* $(,)*) => {
        $(
            impl Extract for $t {
                #[inline]
                fn extract<R: Read, W: Write>(
                    source: &mut InputSource<R, W>,
                ) -> Result<Option<Self>, ScanError> {
                    source.next_parsed()
                }
            }
        )*
    };
}

impl_extract_parsed!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool,
);

impl Extract for String {
    /// One whitespace-delimited token.
    #[inline]
    fn extract<R: Read, W: Write>(source: &mut InputSource<R, W>) -> Result<Option<Self>, ScanError> {
        source.next_token()
    }
}

impl Extract for char {
    /// The next char which is not a whitespace.
    #[inline]
    fn extract<R: Read, W: Write>(source: &mut InputSource<R, W>) -> Result<Option<Self>, ScanError> {
        if !source.skip_whitespaces()? {
            return Ok(None);
        }

        source.next_char()
    }
}

macro_rules! impl_extract_tuple {
    ($($name:ident),+) => {
        impl<$($name: Extract),+> Extract for ($($name,)+) {
            #[allow(non_snake_case)]
            fn extract<R: Read, W: Write>(
                source: &mut InputSource<R, W>,
            ) -> Result<Option<Self>, ScanError> {
                $(
                    let $name = match $name::extract(source)? {
                        Some(v) => v,
                        None => return Ok(None),
                    };
                )+

                Ok(Some(($($name,)+)))
            }
        }
    };
}

impl_extract_tuple!(A, B);
impl_extract_tuple!(A, B, C);
impl_extract_tuple!(A, B, C, D);
