//! The process-wide binding of the standard input and output.
//!
//! Every function here locks the same interactive `InputSource`, so data buffered by one call is seen by the next one. The lock is not reentrant: do not call these functions while holding the guard returned by `stdio` or a `Reader` returned by `reader`.

use std::io::{self, Stdin, Stdout};

use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};

use crate::read::{read_opt_prompted, read_prompted, readline_prompted};
use crate::{Extract, InputSource, Reader, ScanError};

/// The interactive source bound to the standard input, prompting on the standard output.
pub type StdioSource = InputSource<Stdin, Stdout>;

static STDIO: Lazy<Mutex<StdioSource>> =
    Lazy::new(|| Mutex::new(InputSource::interactive(io::stdin(), io::stdout())));

/// Lock the standard input source, e.g. to check `is_eof` or to pass it to the `*_from` functions.
#[inline]
pub fn stdio() -> MutexGuard<'static, StdioSource> {
    STDIO.lock()
}

/// Read a `T` from the standard input, printing `prompt` before every attempt. Malformed tokens are dropped and the user is asked again; at the end of input `T::default()` is returned.
///
/// ```rust,no_run
/// extern crate sensible_read;
///
/// use sensible_read::read;
///
/// let age = read::<u32>("How old are you? ").unwrap();
/// let name: String = read("What is your name? ").unwrap();
/// ```
#[inline]
pub fn read<T: Extract + Default>(prompt: &str) -> Result<T, ScanError> {
    read_prompted(&mut *stdio(), prompt)
}

/// Try to read a `T` from the standard input once, printing `prompt` first. A malformed token is left unread and `None` is returned.
///
/// ```rust,no_run
/// extern crate sensible_read;
///
/// use sensible_read::read_opt;
///
/// match read_opt::<u32>("Please enter your age:\n").unwrap() {
///     Some(age) => println!("You are {} years old.", age),
///     None => println!("You failed to enter a valid age."),
/// }
/// ```
#[inline]
pub fn read_opt<T: Extract>(prompt: &str) -> Result<Option<T>, ScanError> {
    read_opt_prompted(&mut *stdio(), prompt)
}

/// Read a line from the standard input, printing `prompt` first. Leading whitespaces, including a newline left by an earlier `read`, are skipped.
#[inline]
pub fn readline(prompt: &str) -> Result<String, ScanError> {
    readline_prompted(&mut *stdio(), prompt, '\n')
}

/// Read text up to `delimiter` from the standard input, printing `prompt` first.
#[inline]
pub fn readline_delimited(prompt: &str, delimiter: char) -> Result<String, ScanError> {
    readline_prompted(&mut *stdio(), prompt, delimiter)
}

/// Create a `Reader` over the standard input, whose value type is chosen when `get` is called. The standard input stays locked until the `Reader` is consumed or dropped.
///
/// ```rust,no_run
/// extern crate sensible_read;
///
/// use sensible_read::reader;
///
/// let apples: u32 = reader("How many apples? ").get().unwrap();
/// ```
#[inline]
pub fn reader<S: Into<String>>(prompt: S) -> Reader<MutexGuard<'static, StdioSource>> {
    Reader::new(stdio(), prompt)
}
