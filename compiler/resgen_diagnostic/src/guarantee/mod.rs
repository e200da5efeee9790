//! Proof that at least one error was reported.

use std::fmt;

/// Type-level proof that an error diagnostic was emitted.
///
/// Only the diagnostic machinery can construct one, so a function returning
/// `Result<T, ErrorGuaranteed>` cannot fail without having told the user why.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    #[inline]
    pub(crate) const fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Proof from a count of errors already reported elsewhere.
    ///
    /// Returns `None` when `count` is zero.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}

impl std::error::Error for ErrorGuaranteed {}
