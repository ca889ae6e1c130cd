use std::cmp::Ordering;

use log::debug;

use crate::error::{CodecError, Result};
use crate::tools::presence::find_sentinel;
use crate::tools::record_view::{RecordView, RecordWidth};

/// Burrows-Wheeler-Transform over fixed width records.
///
/// A sentinel record that never occurs in the input is appended, every cyclic
/// rotation of the extended sequence is sorted, and the last record of each sorted
/// rotation is emitted. Returns the sentinel and the transformed data (one record
/// longer than the input). The caller must keep the sentinel to decode.
///
/// Sorting N + 1 rotations costs O(N log N) comparisons of up to N + 1 records each.
pub fn bwt_encode(data: &[u8], width: RecordWidth) -> Result<(Vec<u8>, Vec<u8>)> {
    let view = RecordView::new(data, width)?;
    let sentinel = find_sentinel(&view, width).ok_or(CodecError::SentinelUnavailable {
        record_width: width.get(),
    })?;

    // The sentinel goes on the end so rotation 0 is the original data
    let mut block = Vec::with_capacity(data.len() + width.get());
    block.extend_from_slice(data);
    block.extend_from_slice(&sentinel);
    let extended = RecordView::new(&block, width)?;
    let rows = extended.len();
    let w = width.get();

    // Sort an index of rotation starts instead of the rotations themselves
    let mut index = (0..rows).collect::<Vec<usize>>();
    index.sort_unstable_by(|&a, &b| rotation_compare(a * w, b * w, &block));

    let mut bwt = Vec::with_capacity(block.len());
    for &start in &index {
        bwt.extend_from_slice(extended.record((start + rows - 1) % rows));
    }
    debug!("BWT sorted {} rotations of {}-byte records.", rows, w);
    Ok((sentinel, bwt))
}

/// Compare the rotations of `block` starting at byte offsets `a` and `b`.
///
/// Walks both rotations in the longest slices that don't wrap, so each step is a
/// plain slice comparison.
fn rotation_compare(a: usize, b: usize, block: &[u8]) -> Ordering {
    let len = block.len();
    let (mut i, mut j, mut done) = (a, b, 0);
    while done < len {
        let step = (len - i).min(len - j).min(len - done);
        let result = block[i..i + step].cmp(&block[j..j + step]);
        if result != Ordering::Equal {
            return result;
        }
        done += step;
        i = (i + step) % len;
        j = (j + step) % len;
    }
    Ordering::Equal
}

#[test]
fn banana() {
    let (sentinel, bwt) = bwt_encode(b"banana", RecordWidth::BYTE).unwrap();
    assert_eq!(sentinel, vec![0]);
    assert_eq!(bwt, b"annb\0aa".to_vec());
}

#[test]
fn two_byte_records() {
    let w = RecordWidth::new(2).unwrap();
    let (sentinel, bwt) = bwt_encode(&[0, 1, 0, 1, 2, 3], w).unwrap();
    assert_eq!(sentinel, vec![0, 0]);
    assert_eq!(bwt, vec![2, 3, 0, 0, 0, 1, 0, 1]);

    let (sentinel, bwt) = bwt_encode(&[1, 0, 1, 0, 0, 0], w).unwrap();
    assert_eq!(sentinel, vec![2, 0]);
    assert_eq!(bwt, vec![1, 0, 1, 0, 2, 0, 0, 0]);
}

#[test]
fn every_byte_present_has_no_sentinel() {
    let data = (0..=255).collect::<Vec<u8>>();
    assert_eq!(
        bwt_encode(&data, RecordWidth::BYTE),
        Err(CodecError::SentinelUnavailable { record_width: 1 })
    );
}

#[test]
fn empty_input_is_just_the_sentinel() {
    let (sentinel, bwt) = bwt_encode(&[], RecordWidth::new(3).unwrap()).unwrap();
    assert_eq!(sentinel, vec![0, 0, 0]);
    assert_eq!(bwt, sentinel);
}

#[test]
fn wraparound_compare() {
    let block = [1_u8, 2, 1, 2];
    assert_eq!(rotation_compare(0, 2, &block), Ordering::Equal);
    assert_eq!(rotation_compare(0, 1, &block), Ordering::Less);
    let block = [3_u8, 1, 3, 0];
    assert_eq!(rotation_compare(2, 0, &block), Ordering::Less);
}
