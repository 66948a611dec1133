use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::{Extract, InputSource, ScanError};

/// Read a `T` from a source, writing `prompt` before every attempt (interactive sources only).
///
/// A token which cannot be extracted as `T` is dropped and the read is attempted again, as many times as needed. If the end of input is reached, `T::default()` is returned. Only I/O errors are returned as `Err`, and the failure flag of the source is always clear afterwards.
///
/// ```rust
/// extern crate sensible_read;
///
/// use sensible_read::{read_prompted, InputSource};
///
/// let mut source = InputSource::interactive("abc abc 42".as_bytes(), Vec::new());
///
/// assert_eq!(42, read_prompted::<i32>(&mut source, "> ").unwrap());
/// assert_eq!(b"> > > ", source.sink().unwrap().as_slice());
/// ```
pub fn read_prompted<T: Extract + Default>(
    source: &mut InputSource<impl Read, impl Write>,
    prompt: &str,
) -> Result<T, ScanError> {
    source.clear();

    loop {
        if source.is_eof() {
            trace!("end of input already reached, returning the default value");

            return Ok(T::default());
        }

        source.prompt(prompt)?;

        match source.extract::<T>() {
            Ok(Some(value)) => return Ok(value),
            Ok(None) => {
                source.clear();

                trace!("reached the end of input, returning the default value");

                return Ok(T::default());
            }
            Err(ScanError::Malformed {
                token,
                reason,
            }) => {
                source.clear();

                let dropped = source.drop_next();

                debug!(%token, %reason, "discarded a malformed token");

                dropped?;
            }
            Err(err) => {
                source.clear();

                return Err(err);
            }
        }
    }
}

/// Read a `T` from a source without prompting. See `read_prompted`.
///
/// ```rust
/// extern crate sensible_read;
///
/// use sensible_read::{read_from, InputSource};
///
/// let mut source = InputSource::new("a b c 9".as_bytes());
///
/// assert_eq!(9, read_from::<u8>(&mut source).unwrap());
/// assert_eq!(0, read_from::<u8>(&mut source).unwrap());
/// ```
#[inline]
pub fn read_from<T: Extract + Default>(
    source: &mut InputSource<impl Read, impl Write>,
) -> Result<T, ScanError> {
    read_prompted(source, "")
}

/// Try to read a `T` from a source once, writing `prompt` first (interactive sources only).
///
/// Returns `Ok(None)` if the end of input was reached or if the next token cannot be extracted as `T`. In the latter case the token is left in the source. The failure flag of the source is always clear afterwards.
///
/// ```rust
/// extern crate sensible_read;
///
/// use sensible_read::{read_opt_prompted, readline_from, InputSource};
///
/// let mut source = InputSource::new("abc\n".as_bytes());
///
/// assert_eq!(None, read_opt_prompted::<i32>(&mut source, "age? ").unwrap());
/// assert_eq!(false, source.is_failed());
/// assert_eq!("abc", readline_from(&mut source).unwrap());
/// ```
pub fn read_opt_prompted<T: Extract>(
    source: &mut InputSource<impl Read, impl Write>,
    prompt: &str,
) -> Result<Option<T>, ScanError> {
    source.clear();

    if source.is_eof() {
        return Ok(None);
    }

    source.prompt(prompt)?;

    let result = source.extract::<T>();

    source.clear();

    match result {
        Err(ScanError::Malformed {
            token,
            reason,
        }) => {
            debug!(%token, %reason, "rejected a malformed token");

            Ok(None)
        }
        result => result,
    }
}

/// Try to read a `T` from a source once, without prompting. See `read_opt_prompted`.
#[inline]
pub fn read_opt_from<T: Extract>(
    source: &mut InputSource<impl Read, impl Write>,
) -> Result<Option<T>, ScanError> {
    read_opt_prompted(source, "")
}

/// Read a line of text from a source, writing `prompt` first (interactive sources only).
///
/// Leading whitespaces, including the line terminator left behind by an earlier token read, are skipped. The text up to the `delimiter` is returned and the delimiter is consumed. When the delimiter is `'\n'`, a `'\r'` right before it is dropped too. If the end of input comes first, whatever was read is returned, possibly an empty string.
///
/// ```rust
/// extern crate sensible_read;
///
/// use sensible_read::{read_from, readline_prompted, InputSource};
///
/// let mut source = InputSource::new("42\n  hello world;rest".as_bytes());
///
/// assert_eq!(42, read_from::<i32>(&mut source).unwrap());
/// assert_eq!("hello world", readline_prompted(&mut source, "", ';').unwrap());
/// assert_eq!("rest", readline_prompted(&mut source, "", ';').unwrap());
/// assert_eq!("", readline_prompted(&mut source, "", ';').unwrap());
/// ```
pub fn readline_prompted<R, W>(
    source: &mut InputSource<R, W>,
    prompt: &str,
    delimiter: char,
) -> Result<String, ScanError>
where
    R: Read,
    W: Write, {
    source.clear();
    source.prompt(prompt)?;

    let line = if source.skip_whitespaces()? {
        if delimiter == '\n' {
            source.next_line()?
        } else {
            source.next_until(delimiter)?
        }
    } else {
        None
    };

    Ok(line.unwrap_or_default())
}

/// Read a line of text from a source without prompting. See `readline_prompted`.
#[inline]
pub fn readline_from<R: Read, W: Write>(source: &mut InputSource<R, W>) -> Result<String, ScanError> {
    readline_prompted(source, "", '\n')
}

/// Read text up to `delimiter` from a source without prompting. See `readline_prompted`.
#[inline]
pub fn readline_from_delimited<R: Read, W: Write>(
    source: &mut InputSource<R, W>,
    delimiter: char,
) -> Result<String, ScanError> {
    readline_prompted(source, "", delimiter)
}
