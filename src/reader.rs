use std::io::{Read, Write};
use std::ops::DerefMut;

use crate::read::read_prompted;
use crate::{Extract, InputSource, ScanError};

/// A source and a prompt waiting for a value type. Calling `get` performs the same retrying read as `read_prompted` for whatever type the call site asks for.
///
/// `S` is anything that mutably dereferences to an `InputSource`, such as `&mut InputSource<R, W>` or the guard returned by `stdio`.
///
/// ```rust
/// extern crate sensible_read;
///
/// use sensible_read::{reader_from, InputSource};
///
/// let mut source = InputSource::new("twelve 12 2.5".as_bytes());
///
/// let dozen: u8 = reader_from(&mut source).get().unwrap();
/// let weight: f64 = reader_from(&mut source).get().unwrap();
///
/// assert_eq!(12, dozen);
/// assert_eq!(2.5, weight);
/// ```
#[derive(Debug)]
pub struct Reader<S> {
    source: S,
    prompt: String,
}

impl<S, R, W> Reader<S>
where
    S: DerefMut<Target = InputSource<R, W>>,
    R: Read,
    W: Write,
{
    /// Bind a source and a prompt. Nothing is read until `get` is called.
    #[inline]
    pub fn new<P: Into<String>>(source: S, prompt: P) -> Reader<S> {
        Reader {
            source,
            prompt: prompt.into(),
        }
    }

    /// The prompt written before every attempt.
    #[inline]
    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    /// Read a `T`, dropping malformed tokens and asking again. At the end of input `T::default()` is returned.
    #[inline]
    pub fn get<T: Extract + Default>(mut self) -> Result<T, ScanError> {
        read_prompted(&mut *self.source, &self.prompt)
    }
}

/// Create a `Reader` over a source, without prompt.
#[inline]
pub fn reader_from<R: Read, W: Write>(source: &mut InputSource<R, W>) -> Reader<&mut InputSource<R, W>> {
    Reader::new(source, "")
}
