//! Run-length encoding over fixed width records.
//!
//! Four encodings are provided:
//! - byte run: `(count: u8, record)` pairs, runs of up to 255 records.
//! - word run: `(count: u16 big-endian, record)` pairs, runs of up to 65535 records.
//! - nibble run: two run lengths (up to 15 each) packed into one byte, followed by
//!   the one or two records they repeat. Cheaper than byte runs when runs are short.
//! - nibble run squared: nibble run applied again, byte by byte, to the output of
//!   the first nibble pass. Decoding is two stages: `decode_nibble_run_squared`
//!   restores the first pass stream, `decode_nibble_run` restores the data.
//!
//! A run never grows past its count field. Hitting the cap starts a new entry even
//! when the same record keeps repeating.
//!
pub mod counted;
pub mod nibble;

pub use counted::{decode_byte_run, decode_word_run, encode_byte_run, encode_word_run};
pub use nibble::{
    decode_nibble_run, decode_nibble_run_squared, encode_nibble_run, encode_nibble_run_squared,
};
