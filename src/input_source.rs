use std::char::REPLACEMENT_CHARACTER;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;
use std::str::{from_utf8, FromStr};

use educe::Educe;
use utf8_width::get_width;

use crate::whitespaces::*;
use crate::{Extract, ScanError, BUFFER_SIZE};

/// A buffered text source which can extract whitespace-delimited tokens, typed values and lines using UTF-8.
///
/// Besides the data, a source carries two flags:
///
/// * the end-of-input flag (`is_eof`), true once the reader has reported the end of its data and every buffered byte has been consumed,
/// * the failure flag (`is_failed`), set by a failed `extract` and reset by `clear`.
///
/// An interactive source also owns a sink to which prompts are written.
#[derive(Educe)]
#[educe(Debug)]
pub struct InputSource<R: Read, W: Write = io::Sink> {
    #[educe(Debug(ignore))]
    reader: R,
    #[educe(Debug(ignore))]
    sink: Option<W>,
    #[educe(Debug(method = "fmt"))]
    buf: Vec<u8>,
    buf_offset: usize,
    exhausted: bool,
    failed: bool,
}

impl<R: Read> InputSource<R> {
    /// Create a non-interactive source from a reader. Prompts given to this source are ignored.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new("1 2 3".as_bytes());
    /// ```
    #[inline]
    pub fn new(reader: R) -> InputSource<R> {
        InputSource::with_sink(reader, None)
    }
}

impl<R: Read, W: Write> InputSource<R, W> {
    /// Create an interactive source from a reader and the sink its prompts are written to.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use std::io;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::interactive(io::stdin(), io::stdout());
    /// ```
    #[inline]
    pub fn interactive(reader: R, sink: W) -> InputSource<R, W> {
        InputSource::with_sink(reader, Some(sink))
    }

    #[inline]
    fn with_sink(reader: R, sink: Option<W>) -> InputSource<R, W> {
        InputSource {
            reader,
            sink,
            buf: Vec::with_capacity(BUFFER_SIZE),
            buf_offset: 0,
            exhausted: false,
            failed: false,
        }
    }
}

impl InputSource<File> {
    /// Create a non-interactive source to read data from a file by its path.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::scan_path("Cargo.toml").unwrap();
    /// ```
    #[inline]
    pub fn scan_path<P: AsRef<Path>>(path: P) -> Result<InputSource<File>, ScanError> {
        let reader = File::open(path)?;

        Ok(InputSource::new(reader))
    }
}

impl<R: Read, W: Write> InputSource<R, W> {
    #[inline]
    fn available(&self) -> usize {
        self.buf.len() - self.buf_offset
    }

    #[inline]
    fn pending(&self) -> &[u8] {
        &self.buf[self.buf_offset..]
    }

    #[inline]
    fn consume(&mut self, number_of_bytes: usize) {
        debug_assert!(self.available() >= number_of_bytes);

        self.buf_offset += number_of_bytes;

        if self.buf_offset == self.buf.len() {
            self.buf.clear();
            self.buf_offset = 0;
        }
    }

    /// Read one more chunk from the reader. Returns `Ok(false)` if the reader has no more data.
    fn fill(&mut self) -> Result<bool, ScanError> {
        if self.exhausted {
            return Ok(false);
        }

        if self.buf_offset > 0 && self.buf_offset * 2 >= self.buf.len() {
            self.buf.drain(..self.buf_offset);
            self.buf_offset = 0;
        }

        let mut chunk = [0; BUFFER_SIZE];

        loop {
            match self.reader.read(&mut chunk) {
                Ok(0) => {
                    self.exhausted = true;

                    return Ok(false);
                }
                Ok(c) => {
                    self.buf.extend_from_slice(&chunk[..c]);

                    return Ok(true);
                }
                Err(ref err) if err.kind() == ErrorKind::Interrupted => (),
                Err(err) => return Err(err.into()),
            }
        }
    }

    #[inline]
    fn ensure(&mut self, number_of_bytes: usize) -> Result<bool, ScanError> {
        while self.available() < number_of_bytes {
            if !self.fill()? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// The width of the char starting `p` bytes into the pending data and whether it is a whitespace.
    fn char_at(&mut self, p: usize) -> Result<Option<(usize, bool)>, ScanError> {
        if !self.ensure(p + 1)? {
            return Ok(None);
        }

        let width = get_width(self.pending()[p]).max(1);

        // an invalid or truncated sequence counts as one non-whitespace byte
        if width > 1
            && (!self.ensure(p + width)?
                || from_utf8(&self.pending()[p..(p + width)]).is_err())
        {
            return Ok(Some((1, false)));
        }

        Ok(Some((width, is_whitespace(&self.pending()[p..], width))))
    }

    /// Skip whitespaces (after the current token) and return the length of the next token without consuming it.
    fn peek_token(&mut self) -> Result<Option<usize>, ScanError> {
        if !self.skip_whitespaces()? {
            return Ok(None);
        }

        let mut p = 0;

        while let Some((width, false)) = self.char_at(p)? {
            p += width;
        }

        Ok(Some(p))
    }
}

impl<R: Read, W: Write> InputSource<R, W> {
    /// Whether the reader has reported the end of its data and nothing is left in the buffer. This never blocks.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new("42".as_bytes());
    ///
    /// assert_eq!(false, source.is_eof());
    /// assert_eq!(Some("42".into()), source.next_token().unwrap());
    /// assert_eq!(true, source.is_eof());
    /// ```
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.exhausted && self.available() == 0
    }

    /// Whether the last `extract` failed and `clear` has not been called since.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Reset the failure flag. Pending data and the end-of-input flag are untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.failed = false;
    }

    /// Whether this source writes prompts.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.sink.is_some()
    }

    /// The sink prompts are written to, if this source is interactive.
    #[inline]
    pub fn sink(&self) -> Option<&W> {
        self.sink.as_ref()
    }

    /// Write and flush a prompt. Does nothing if the prompt is empty or the source is not interactive.
    pub fn prompt(&mut self, prompt: &str) -> Result<(), ScanError> {
        if prompt.is_empty() {
            return Ok(());
        }

        if let Some(sink) = self.sink.as_mut() {
            sink.write_all(prompt.as_bytes())?;
            sink.flush()?;
        }

        Ok(())
    }

    /// Extract a value of type `T`. `Ok(None)` means that the end of input was reached first.
    ///
    /// Anything but `Ok(Some(_))` sets the failure flag.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new("7 abc".as_bytes());
    ///
    /// assert_eq!(Some(7), source.extract::<i32>().unwrap());
    /// assert!(source.extract::<i32>().is_err());
    /// assert_eq!(true, source.is_failed());
    ///
    /// source.clear();
    ///
    /// assert_eq!(Some("abc".into()), source.extract::<String>().unwrap());
    /// assert_eq!(None, source.extract::<String>().unwrap());
    /// assert_eq!(true, source.is_failed());
    /// ```
    pub fn extract<T: Extract>(&mut self) -> Result<Option<T>, ScanError> {
        let result = T::extract(self);

        if !matches!(result, Ok(Some(_))) {
            self.failed = true;
        }

        result
    }
}

impl<R: Read, W: Write> InputSource<R, W> {
    /// Read the next char, whitespaces included. If the data is not a correct char, it will return `Ok(Some(REPLACEMENT_CHARACTER))` which is �. If there is nothing to read, it will return `Ok(None)`.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new("5 中".as_bytes());
    ///
    /// assert_eq!(Some('5'), source.next_char().unwrap());
    /// assert_eq!(Some(' '), source.next_char().unwrap());
    /// assert_eq!(Some('中'), source.next_char().unwrap());
    /// assert_eq!(None, source.next_char().unwrap());
    /// ```
    pub fn next_char(&mut self) -> Result<Option<char>, ScanError> {
        let width = match self.char_at(0)? {
            Some((width, _)) => width,
            None => return Ok(None),
        };

        match from_utf8(&self.pending()[..width]).ok().and_then(|s| s.chars().next()) {
            Some(c) => {
                self.consume(width);

                Ok(Some(c))
            }
            None => {
                self.consume(1);

                Ok(Some(REPLACEMENT_CHARACTER))
            }
        }
    }

    /// Skip the next whitespaces. Returns `Ok(false)` if the end of input is reached, i.e. there is nothing left to read.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new(" \n\u{3000}c  ".as_bytes());
    ///
    /// assert_eq!(true, source.skip_whitespaces().unwrap());
    /// assert_eq!(Some('c'), source.next_char().unwrap());
    /// assert_eq!(false, source.skip_whitespaces().unwrap());
    /// ```
    pub fn skip_whitespaces(&mut self) -> Result<bool, ScanError> {
        loop {
            match self.char_at(0)? {
                Some((width, true)) => self.consume(width),
                Some(_) => return Ok(true),
                None => return Ok(false),
            }
        }
    }

    /// Read the next token separated by whitespaces. If there is nothing to read, it will return `Ok(None)`.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new("123 456\r\n789 \n\n 中文 ".as_bytes());
    ///
    /// assert_eq!(Some("123".into()), source.next_token().unwrap());
    /// assert_eq!(Some("456".into()), source.next_token().unwrap());
    /// assert_eq!(Some("789".into()), source.next_token().unwrap());
    /// assert_eq!(Some("中文".into()), source.next_token().unwrap());
    /// assert_eq!(None, source.next_token().unwrap());
    /// ```
    pub fn next_token(&mut self) -> Result<Option<String>, ScanError> {
        match self.peek_token()? {
            Some(length) => {
                let token = String::from_utf8_lossy(&self.pending()[..length]).into_owned();

                self.consume(length);

                Ok(Some(token))
            }
            None => Ok(None),
        }
    }

    /// Drop the next token separated by whitespaces. If there is nothing to read, it will return `Ok(None)`. Otherwise it returns `Ok(Some(i))` where `i` is the length in bytes of the dropped token.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new("abc 中文 42".as_bytes());
    ///
    /// assert_eq!(Some(3), source.drop_next().unwrap());
    /// assert_eq!(Some(6), source.drop_next().unwrap());
    /// assert_eq!(Some("42".into()), source.next_token().unwrap());
    /// assert_eq!(None, source.drop_next().unwrap());
    /// ```
    pub fn drop_next(&mut self) -> Result<Option<usize>, ScanError> {
        let length = self.peek_token()?;

        if let Some(length) = length {
            self.consume(length);
        }

        Ok(length)
    }

    /// Parse the next token separated by whitespaces. The token is consumed only if it parses; otherwise `ScanError::Malformed` is returned and the token stays pending. If there is nothing to read, it will return `Ok(None)`.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new("2.5 x".as_bytes());
    ///
    /// assert_eq!(Some(2.5), source.next_parsed::<f64>().unwrap());
    /// assert!(source.next_parsed::<f64>().is_err());
    /// assert_eq!(Some("x".into()), source.next_token().unwrap());
    /// ```
    pub fn next_parsed<T: FromStr>(&mut self) -> Result<Option<T>, ScanError>
    where
        T::Err: Display, {
        let length = match self.peek_token()? {
            Some(length) => length,
            None => return Ok(None),
        };

        let parsed = {
            let token = String::from_utf8_lossy(&self.pending()[..length]);

            token.parse::<T>().map_err(|err| ScanError::malformed(token.as_ref(), err))
        };

        if parsed.is_ok() {
            self.consume(length);
        }

        parsed.map(Some)
    }
}

impl<R: Read, W: Write> InputSource<R, W> {
    /// Read until the `delimiter`, which is consumed but not included. If the end of input comes first, the text read so far is returned. If there is nothing to read, it will return `Ok(None)`.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new("a,b c,,d".as_bytes());
    ///
    /// assert_eq!(Some("a".into()), source.next_until(',').unwrap());
    /// assert_eq!(Some("b c".into()), source.next_until(',').unwrap());
    /// assert_eq!(Some("".into()), source.next_until(',').unwrap());
    /// assert_eq!(Some("d".into()), source.next_until(',').unwrap());
    /// assert_eq!(None, source.next_until(',').unwrap());
    /// ```
    pub fn next_until(&mut self, delimiter: char) -> Result<Option<String>, ScanError> {
        let mut boundary = [0; 4];
        let boundary = delimiter.encode_utf8(&mut boundary).as_bytes();

        if !self.ensure(1)? {
            return Ok(None);
        }

        let mut from = 0;

        loop {
            let pending = self.pending();

            if let Some(i) = find(&pending[from..], boundary) {
                let end = from + i;
                let text = String::from_utf8_lossy(&pending[..end]).into_owned();

                self.consume(end + boundary.len());

                return Ok(Some(text));
            }

            from = pending.len().saturating_sub(boundary.len() - 1);

            if !self.fill()? {
                let length = self.available();
                let text = String::from_utf8_lossy(self.pending()).into_owned();

                self.consume(length);

                return Ok(Some(text));
            }
        }
    }

    /// Read the next line but not include the tailing line character (or line chracters like `CrLf`(`\r\n`)). If there is nothing to read, it will return `Ok(None)`.
    ///
    /// ```rust
    /// extern crate sensible_read;
    ///
    /// use sensible_read::InputSource;
    ///
    /// let mut source = InputSource::new("123 456\r\n789 \n\n 中文 ".as_bytes());
    ///
    /// assert_eq!(Some("123 456".into()), source.next_line().unwrap());
    /// assert_eq!(Some("789 ".into()), source.next_line().unwrap());
    /// assert_eq!(Some("".into()), source.next_line().unwrap());
    /// assert_eq!(Some(" 中文 ".into()), source.next_line().unwrap());
    /// assert_eq!(None, source.next_line().unwrap());
    /// ```
    #[inline]
    pub fn next_line(&mut self) -> Result<Option<String>, ScanError> {
        Ok(self.next_until('\n')?.map(|mut line| {
            if line.ends_with('\r') {
                line.pop();
            }

            line
        }))
    }
}

#[inline]
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

#[allow(clippy::ptr_arg)]
#[inline]
fn fmt(s: &Vec<u8>, f: &mut Formatter) -> fmt::Result {
    Display::fmt(&String::from_utf8_lossy(s).escape_debug(), f)
}
