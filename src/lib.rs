//! Reversible compression transforms for buffers of fixed width records.
//!
//! Version 0.1.0
//!
//! Built for structured scientific and geospatial binary data, where a file is a long
//! run of 1 to 8 byte values. The codecs are:
//! - Run length encoding with a byte count, a word count, packed nibble counts, and
//!   packed nibble counts applied twice.
//! - Burrows-Wheeler Transform over records, with its inverse.
//! - Move To Front transform, with its inverse.
//! - LZW dictionary coding over bytes.
//!
//! Each codec works on a whole buffer in memory and is a pure function of its input
//! and record width. There is no shared state, so separate calls can run on separate
//! threads freely. Codecs can be chained; the classic chain is BWT, then MTF, then RLE.
//!
//! Basic usage:
//!
//! ```
//! use record_codecs::{compress, decompress, Algorithm, CodecOptions};
//!
//! let opts = CodecOptions::new()
//!     .with_algorithm(Algorithm::NibbleRle)
//!     .with_record_width(2)
//!     .unwrap();
//! let data = [0_u8, 1].repeat(20);
//! let block = compress(&data, &opts).unwrap();
//! assert!(block.compressed_size() < data.len());
//! assert_eq!(decompress(&block, &opts).unwrap(), data);
//! ```
//!
#![warn(rust_2018_idioms)]

pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod lzw;
pub mod rle;
pub mod tools;

pub use compression::compress::{compress, Encoded};
pub use compression::decompress::decompress;
pub use compression::pipeline::{Frame, Pipeline, Stage};
pub use error::{CodecError, Result};
pub use tools::options::{Algorithm, BwtInverse, CodecOptions, Verbosity};
pub use tools::record_view::{RecordView, RecordWidth};

