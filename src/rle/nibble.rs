use log::trace;

use crate::error::{CodecError, Result};
use crate::tools::record_view::{RecordView, RecordWidth};

/// Longest run a nibble can count.
const NIBBLE_MAX: usize = 15;

/// Encode runs two at a time, packing both lengths into one byte.
///
/// Each group is `(lenA << 4) | lenB`, then record A, then record B when lenB > 0.
/// lenA is 1..=15; lenB is 0 only when the input ran out after run A.
pub fn encode_nibble_run(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    let view = RecordView::new(data, width)?;
    let mut out = Vec::with_capacity(data.len() / 2 + 1);
    let mut groups = 0_usize;

    let mut idx = 0;
    while idx < view.len() {
        let first = view.record(idx);
        let first_len = view.run_length(idx, NIBBLE_MAX);
        idx += first_len;

        let (second, second_len) = if idx < view.len() {
            let len = view.run_length(idx, NIBBLE_MAX);
            (Some(view.record(idx)), len)
        } else {
            (None, 0)
        };
        idx += second_len;

        out.push((first_len << 4 | second_len) as u8);
        out.extend_from_slice(first);
        if let Some(second) = second {
            out.extend_from_slice(second);
        }
        groups += 1;
    }
    trace!("Nibble encoded {} records into {} groups.", view.len(), groups);
    Ok(out)
}

/// Expand data produced by `encode_nibble_run`.
pub fn decode_nibble_run(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    let width = width.get();
    let mut out = Vec::with_capacity(data.len() * 4);

    let mut idx = 0;
    while idx < data.len() {
        let packed = data[idx];
        let first_len = (packed >> 4) as usize;
        let second_len = (packed & 0x0f) as usize;
        idx += 1;

        let first = data
            .get(idx..idx + width)
            .ok_or_else(|| CodecError::truncated("first nibble run record", idx))?;
        for _ in 0..first_len {
            out.extend_from_slice(first);
        }
        idx += width;

        // A second length with nothing after it is tolerated at the very end
        if second_len > 0 && idx < data.len() {
            let second = data
                .get(idx..idx + width)
                .ok_or_else(|| CodecError::truncated("second nibble run record", idx))?;
            for _ in 0..second_len {
                out.extend_from_slice(second);
            }
            idx += width;
        }
    }
    Ok(out)
}

/// Nibble RLE applied twice: once over the records, then over the resulting bytes.
pub fn encode_nibble_run_squared(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    let first_pass = encode_nibble_run(data, width)?;
    let second_pass = encode_nibble_run(&first_pass, RecordWidth::BYTE)?;
    trace!(
        "Second nibble pass took {} bytes to {} bytes.",
        first_pass.len(),
        second_pass.len()
    );
    Ok(second_pass)
}

/// Undo the second (byte wide) nibble pass only.
///
/// The result is the first pass stream, which still has to go through
/// `decode_nibble_run` with the original record width.
pub fn decode_nibble_run_squared(data: &[u8]) -> Result<Vec<u8>> {
    decode_nibble_run(data, RecordWidth::BYTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(n: usize) -> RecordWidth {
        RecordWidth::new(n).unwrap()
    }

    #[test]
    fn twenty_bytes_pack_as_fifteen_and_five() {
        let original = vec![0x41_u8; 20];
        let encoded = encode_nibble_run(&original, w(1)).unwrap();
        assert_eq!(encoded, vec![0xf5, 0x41, 0x41]);
        assert_eq!(decode_nibble_run(&encoded, w(1)).unwrap(), original);
    }

    #[test]
    fn odd_run_count_leaves_low_nibble_empty() {
        let encoded = encode_nibble_run(&[1, 2, 1, 2, 1, 2, 3, 4], w(2)).unwrap();
        assert_eq!(encoded, vec![0x31, 1, 2, 3, 4]);
        let encoded = encode_nibble_run(&[5, 5, 5], w(1)).unwrap();
        assert_eq!(encoded, vec![0x30, 5]);
        assert_eq!(decode_nibble_run(&encoded, w(1)).unwrap(), vec![5, 5, 5]);
    }

    #[test]
    fn wide_records_are_replicated_whole() {
        let original = [1, 2, 3, 1, 2, 3, 9, 9, 9];
        let encoded = encode_nibble_run(&original, w(3)).unwrap();
        assert_eq!(encoded, vec![0x21, 1, 2, 3, 9, 9, 9]);
        assert_eq!(decode_nibble_run(&encoded, w(3)).unwrap(), original.to_vec());
    }

    #[test]
    fn squared_is_two_stage() {
        let original = b"aaabcc".to_vec();
        let first = encode_nibble_run(&original, w(1)).unwrap();
        assert_eq!(first, vec![0x31, 0x61, 0x62, 0x20, 0x63]);
        let squared = encode_nibble_run_squared(&original, w(1)).unwrap();
        assert_eq!(squared, vec![0x11, 0x31, 0x61, 0x11, 0x62, 0x20, 0x10, 0x63]);

        let back_to_first = decode_nibble_run_squared(&squared).unwrap();
        assert_eq!(back_to_first, first);
        assert_eq!(decode_nibble_run(&back_to_first, w(1)).unwrap(), original);
    }

    #[test]
    fn dangling_second_length_is_tolerated() {
        assert_eq!(decode_nibble_run(&[0x23, 7], w(1)).unwrap(), vec![7, 7]);
    }

    #[test]
    fn truncated_records_are_corrupt() {
        assert!(decode_nibble_run(&[0x10], w(1)).unwrap_err().is_corrupt());
        assert!(decode_nibble_run(&[0x11, 1, 2, 3], w(2)).unwrap_err().is_corrupt());
    }
}
