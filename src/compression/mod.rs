//! The compression module ties the codecs together behind one interface.
//!
//! - compress: Run the codec chosen in `CodecOptions` and return an `Encoded` block,
//!   which carries the raw output plus the metadata needed to undo it (algorithm,
//!   record width, original length and, for BWT, the sentinel).
//! - decompress: Undo an `Encoded` block and check the restored length.
//! - pipeline: Chain codecs, for example the classic BWT, MTF, RLE sequence, and undo
//!   them in reverse order.
//!
//! The codecs never add framing of their own. Storing the metadata is the caller's job.
//!
pub mod compress;
pub mod decompress;
pub mod pipeline;
