use std::fmt::Display;
use std::io;

/// The possible errors of `InputSource` and the read functions.
///
/// Only `IOError` ever escapes the `read*` family. `Malformed` is produced by extraction and is turned into a retry or a `None` by the callers.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    IOError(#[from] io::Error),
    /// The next token could not be extracted as the requested type. The token is still pending in the source.
    #[error("malformed token {token:?}: {reason}")]
    Malformed { token: String, reason: String },
}

impl ScanError {
    #[inline]
    pub(crate) fn malformed<S: Into<String>, E: Display>(token: S, reason: E) -> ScanError {
        ScanError::Malformed {
            token: token.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error comes from a token that did not parse, rather than from the underlying reader.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, ScanError::Malformed { .. })
    }
}
