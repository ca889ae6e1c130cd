//! LZW dictionary coding over single bytes.
//!
//! Both sides start with the 256 single byte strings and add exactly one entry per
//! code after the first, so the decoder can rebuild the encoder's dictionary as it
//! goes. The one entry it cannot know yet is the one the encoder created while
//! emitting the current code (the KwKwK case); it is always `previous + previous[0]`.
//!
//! Codes are unbounded and written as 4 byte little-endian integers. Entries are
//! never reset, so memory grows with the input.
//!
pub mod lzw_decode;
pub mod lzw_encode;

/// First code handed out after the single byte entries.
pub(crate) const FIRST_FREE_CODE: u32 = 256;
/// Bytes per serialized code.
pub(crate) const CODE_BYTES: usize = 4;

pub use lzw_decode::{decode_codes, lzw_decode};
pub use lzw_encode::{encode_codes, lzw_encode};
