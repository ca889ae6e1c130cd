use log::trace;

use crate::error::{CodecError, Result};
use crate::tools::record_view::{RecordView, RecordWidth};

/// Encode runs of identical records as (count, record) pairs.
///
/// The count takes `COUNT_BYTES` bytes, most significant byte first, so a run is at
/// most 2^(8 * COUNT_BYTES) - 1 records long. Longer runs are split.
fn encode_counted<const COUNT_BYTES: usize>(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    let view = RecordView::new(data, width)?;
    let max_run = (1_usize << (8 * COUNT_BYTES)) - 1;
    let mut out = Vec::with_capacity(data.len() / 2);
    let mut pairs = 0_usize;

    let mut idx = 0;
    while idx < view.len() {
        let run = view.run_length(idx, max_run);
        for shift in (0..COUNT_BYTES).rev() {
            out.push((run >> (8 * shift)) as u8);
        }
        out.extend_from_slice(view.record(idx));
        idx += run;
        pairs += 1;
    }
    trace!(
        "Encoded {} records into {} runs with a {} byte count.",
        view.len(),
        pairs,
        COUNT_BYTES
    );
    Ok(out)
}

/// Expand (count, record) pairs. A count must be followed by a complete record.
fn decode_counted<const COUNT_BYTES: usize>(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    let width = width.get();
    let mut out = Vec::with_capacity(data.len() * 2);

    let mut idx = 0;
    while idx < data.len() {
        let count_end = idx + COUNT_BYTES;
        let record_end = count_end + width;
        let count = data
            .get(idx..count_end)
            .ok_or_else(|| CodecError::truncated("run count", idx))?
            .iter()
            .fold(0_usize, |acc, &b| acc << 8 | b as usize);
        let record = data
            .get(count_end..record_end)
            .ok_or_else(|| CodecError::truncated("run record", count_end))?;
        for _ in 0..count {
            out.extend_from_slice(record);
        }
        idx = record_end;
    }
    Ok(out)
}

/// Run length encoding with a single byte count (runs of 1..=255 records).
pub fn encode_byte_run(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    encode_counted::<1>(data, width)
}

pub fn decode_byte_run(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    decode_counted::<1>(data, width)
}

/// Run length encoding with a two byte big-endian count (runs of 1..=65535 records).
pub fn encode_word_run(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    encode_counted::<2>(data, width)
}

pub fn decode_word_run(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    decode_counted::<2>(data, width)
}
