use log::{debug, trace};

use super::{CODE_BYTES, FIRST_FREE_CODE};
use crate::error::{CodecError, Result};
use crate::tools::record_view::RecordWidth;

/// Code-to-string dictionary for the decoder, seeded with the 256 single bytes.
pub(crate) struct DecodeDictionary {
    entries: Vec<Vec<u8>>,
}

impl DecodeDictionary {
    pub(crate) fn new() -> Self {
        Self {
            entries: (0..FIRST_FREE_CODE).map(|b| vec![b as u8]).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn next_code(&self) -> u32 {
        self.entries.len() as u32
    }
}

pub(crate) fn decode_with(dictionary: &mut DecodeDictionary, codes: &[u32]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(codes.len() * 2);
    let (&first, rest) = match codes.split_first() {
        Some(split) => split,
        None => return Ok(out),
    };

    // Nothing precedes the first code, so it has to be a plain byte
    let mut previous = dictionary
        .entries
        .get(first as usize)
        .cloned()
        .ok_or(CodecError::InvalidCode {
            code: first,
            position: 0,
            next: dictionary.next_code(),
        })?;
    out.extend_from_slice(&previous);

    for (position, &code) in rest.iter().enumerate().map(|(i, c)| (i + 1, c)) {
        let entry = match dictionary.entries.get(code as usize) {
            Some(known) => known.clone(),
            None if code == dictionary.next_code() => {
                // The encoder made this entry from the string it is part of
                trace!("KwKwK code {} at position {}.", code, position);
                let mut entry = previous.clone();
                entry.push(previous[0]);
                entry
            }
            None => {
                return Err(CodecError::InvalidCode {
                    code,
                    position,
                    next: dictionary.next_code(),
                })
            }
        };
        out.extend_from_slice(&entry);

        let mut added = previous;
        added.push(entry[0]);
        dictionary.entries.push(added);
        previous = entry;
    }
    Ok(out)
}

/// LZW decode a sequence of codes.
pub fn decode_codes(codes: &[u32]) -> Result<Vec<u8>> {
    let mut dictionary = DecodeDictionary::new();
    let out = decode_with(&mut dictionary, codes)?;
    debug!(
        "LZW decoded {} codes into {} bytes, dictionary holds {} entries.",
        codes.len(),
        out.len(),
        dictionary.len()
    );
    Ok(out)
}

/// LZW decode a stream of 4 byte little-endian codes.
pub fn lzw_decode(data: &[u8], _width: RecordWidth) -> Result<Vec<u8>> {
    if data.len() % CODE_BYTES != 0 {
        return Err(CodecError::CorruptStream(format!(
            "LZW stream length {} is not a multiple of {}",
            data.len(),
            CODE_BYTES
        )));
    }
    let codes = data
        .chunks_exact(CODE_BYTES)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect::<Vec<u32>>();
    decode_codes(&codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lzw::lzw_encode::{encode_codes, lzw_encode};

    #[test]
    fn tobeornot_round_trip() {
        let input = b"TOBEORNOTTOBEORTOBEORNOT";
        let codes = encode_codes(input);
        let mut dictionary = DecodeDictionary::new();
        assert_eq!(decode_with(&mut dictionary, &codes).unwrap(), input.to_vec());
        assert_eq!(dictionary.len(), 256 + codes.len() - 1);
    }

    #[test]
    fn kwkwk_codes_are_synthesized() {
        // 258 is requested while the dictionary holds exactly 258 entries
        assert_eq!(decode_codes(&[65, 66, 256, 258]).unwrap(), b"ABABABA".to_vec());
        assert_eq!(decode_codes(&[97, 256, 257, 97]).unwrap(), b"aaaaaaa".to_vec());
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(
            decode_codes(&[65, 300]),
            Err(CodecError::InvalidCode { code: 300, position: 1, next: 256 })
        );
        assert_eq!(
            decode_codes(&[256]),
            Err(CodecError::InvalidCode { code: 256, position: 0, next: 256 })
        );
    }

    #[test]
    fn byte_stream_round_trip() {
        let input = b"geobin geobin geobin row row row".to_vec();
        let encoded = lzw_encode(&input, RecordWidth::BYTE).unwrap();
        assert_eq!(lzw_decode(&encoded, RecordWidth::BYTE).unwrap(), input);
        assert!(lzw_decode(&[], RecordWidth::BYTE).unwrap().is_empty());
    }

    #[test]
    fn ragged_stream_is_corrupt() {
        assert!(lzw_decode(&[1, 0, 0], RecordWidth::BYTE).unwrap_err().is_corrupt());
    }
}
