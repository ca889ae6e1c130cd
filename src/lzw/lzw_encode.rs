use log::debug;
use rustc_hash::FxHashMap;

use super::{CODE_BYTES, FIRST_FREE_CODE};
use crate::error::Result;
use crate::tools::record_view::RecordWidth;

/// String-to-code dictionary for the encoder.
///
/// A string is stored as (code of its prefix, last byte), so lookups never hash whole
/// strings. Single bytes are implicit: code `b` is the string `[b]`.
pub(crate) struct EncodeDictionary {
    entries: FxHashMap<(u32, u8), u32>,
    next: u32,
}

impl EncodeDictionary {
    pub(crate) fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            next: FIRST_FREE_CODE,
        }
    }

    /// Entries, including the 256 single byte strings.
    pub(crate) fn len(&self) -> usize {
        self.next as usize
    }

    fn get(&self, prefix: u32, byte: u8) -> Option<u32> {
        self.entries.get(&(prefix, byte)).copied()
    }

    fn insert(&mut self, prefix: u32, byte: u8) {
        self.entries.insert((prefix, byte), self.next);
        self.next += 1;
    }
}

pub(crate) fn encode_with(dictionary: &mut EncodeDictionary, input: &[u8]) -> Vec<u32> {
    let mut codes = Vec::with_capacity(input.len() / 2);
    let mut bytes = input.iter();

    // `current` is the code of the longest string matched so far
    let mut current = match bytes.next() {
        Some(&b) => b as u32,
        None => return codes,
    };
    for &byte in bytes {
        match dictionary.get(current, byte) {
            Some(code) => current = code,
            None => {
                codes.push(current);
                dictionary.insert(current, byte);
                current = byte as u32;
            }
        }
    }
    codes.push(current);
    codes
}

/// LZW encode to a sequence of codes. Never fails.
pub fn encode_codes(input: &[u8]) -> Vec<u32> {
    let mut dictionary = EncodeDictionary::new();
    let codes = encode_with(&mut dictionary, input);
    debug!(
        "LZW encoded {} bytes as {} codes, dictionary holds {} entries.",
        input.len(),
        codes.len(),
        dictionary.len()
    );
    codes
}

/// LZW encode, writing each code as a 4 byte little-endian integer.
///
/// LZW works on single bytes, so the record width is not used.
pub fn lzw_encode(input: &[u8], _width: RecordWidth) -> Result<Vec<u8>> {
    let codes = encode_codes(input);
    let mut out = Vec::with_capacity(codes.len() * CODE_BYTES);
    for code in codes {
        out.extend_from_slice(&code.to_le_bytes());
    }
    Ok(out)
}
