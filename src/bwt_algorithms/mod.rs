//! The bwt_algorithms module holds the Burrows-Wheeler Transform over fixed width records.
//!
//! The transform rearranges the data so identical records cluster together, which a
//! following MTF or RLE pass can exploit. It needs a sentinel record that does not
//! occur in the input; the encoder picks the smallest absent value and hands it back
//! to the caller, who must supply it again to decode.
//!
//! Every possible value may already be present (any block of 256 distinct bytes, or
//! 65536 distinct two byte records). Encoding then fails with `SentinelUnavailable`.
//! That is a limit of the algorithm, not a bug.
//!
//! Two inverse strategies are available: the classical table rebuild and the
//! last-to-first mapping. Both give the same answer; the table is quadratic in memory.
//!
pub mod bwt_inverse;
pub mod bwt_sort;

pub use bwt_inverse::{bwt_decode, bwt_decode_table, bwt_decode_with};
pub use bwt_sort::bwt_encode;
