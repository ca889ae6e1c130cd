//! Error type shared by every codec in the library.
//!
//! All failures are data-integrity conditions reported to the caller of the
//! specific encode/decode call. Nothing is retried and nothing exits the process.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Record width outside 1..=8, or input length not a multiple of it.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Every possible record value appears in the input, so BWT has no sentinel.
    #[error("no sentinel available: every {record_width}-byte record value is present")]
    SentinelUnavailable { record_width: usize },

    /// The encoded stream cannot be decoded.
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// LZW code that is neither in the dictionary nor the next code to be added.
    #[error("invalid LZW code {code} at position {position} (next insertable code is {next})")]
    InvalidCode { code: u32, position: usize, next: u32 },
}

impl CodecError {
    /// True for every variant that means "the encoded data is damaged".
    pub fn is_corrupt(&self) -> bool {
        matches!(self, CodecError::CorruptStream(_) | CodecError::InvalidCode { .. })
    }

    pub(crate) fn truncated(what: &str, offset: usize) -> Self {
        CodecError::CorruptStream(format!("{} truncated at byte {}", what, offset))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodecError>;

#[test]
fn corrupt_classification() {
    assert!(CodecError::CorruptStream("x".into()).is_corrupt());
    assert!(CodecError::InvalidCode { code: 9, position: 1, next: 3 }.is_corrupt());
    assert!(!CodecError::SentinelUnavailable { record_width: 1 }.is_corrupt());
    assert!(!CodecError::Configuration("x".into()).is_corrupt());
}

#[test]
fn error_messages() {
    let e = CodecError::InvalidCode { code: 300, position: 2, next: 257 };
    assert_eq!(
        e.to_string(),
        "invalid LZW code 300 at position 2 (next insertable code is 257)"
    );
    assert_eq!(
        CodecError::truncated("record", 7).to_string(),
        "corrupt stream: record truncated at byte 7"
    );
}
