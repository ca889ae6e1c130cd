use log::debug;
use rustc_hash::FxHashSet;

use super::record_view::{record_from_value, record_value, RecordView, RecordWidth};

const BIT_MASK: u64 = 0x8000_0000_0000_0000;

/// Presence map of every record value seen in the input.
///
/// For one and two byte records this is a dense bitmap covering all 2^(8*width)
/// values. Wider records would need up to 2^64 bits, so those are kept as a hashed
/// set of the values actually present. Only N values can be present, so the
/// smallest absent one is always below N + 1 and both forms answer the same way.
pub enum PresenceSet {
    Dense { bits: Vec<u64>, universe: u64 },
    Sparse { seen: FxHashSet<u64>, universe: u128 },
}

impl PresenceSet {
    /// Scan the records once and mark every value found.
    pub fn build(view: &RecordView<'_>) -> Self {
        let width = view.width();
        if width <= 2 {
            let universe = 1_u64 << (8 * width);
            let mut bits = vec![0_u64; (universe as usize + 63) / 64];
            for record in view.iter() {
                let v = record_value(record);
                bits[(v >> 6) as usize] |= BIT_MASK >> (v & 63);
            }
            PresenceSet::Dense { bits, universe }
        } else {
            let seen = view
                .iter()
                .map(record_value)
                .collect::<FxHashSet<u64>>();
            PresenceSet::Sparse {
                seen,
                universe: 1_u128 << (8 * width),
            }
        }
    }

    pub fn contains(&self, value: u64) -> bool {
        match self {
            PresenceSet::Dense { bits, universe } => {
                value < *universe && bits[(value >> 6) as usize] & (BIT_MASK >> (value & 63)) > 0
            }
            PresenceSet::Sparse { seen, .. } => seen.contains(&value),
        }
    }

    /// Smallest value that never appeared, or None when all values are used.
    pub fn first_absent(&self) -> Option<u64> {
        match self {
            PresenceSet::Dense { bits, universe } => bits
                .iter()
                .enumerate()
                .find(|&(_, &word)| word != u64::MAX)
                .map(|(i, &word)| (i as u64) * 64 + (!word).leading_zeros() as u64)
                .filter(|v| v < universe),
            PresenceSet::Sparse { seen, universe } => (0..=seen.len() as u64)
                .find(|v| !seen.contains(v))
                .filter(|&v| (v as u128) < *universe),
        }
    }
}

/// Pick the sentinel record for a BWT block: the smallest absent value.
pub fn find_sentinel(view: &RecordView<'_>, width: RecordWidth) -> Option<Vec<u8>> {
    let value = PresenceSet::build(view).first_absent()?;
    debug!("Sentinel value is {:#x} for {}-byte records.", value, width);
    Some(record_from_value(value, width))
}

#[test]
fn sentinel_is_smallest_absent_byte() {
    let w = RecordWidth::new(1).unwrap();
    let data = [0_u8, 1, 2, 4, 4];
    let view = RecordView::new(&data, w).unwrap();
    assert_eq!(find_sentinel(&view, w), Some(vec![3]));
    let data = b"banana";
    let view = RecordView::new(data, w).unwrap();
    assert_eq!(find_sentinel(&view, w), Some(vec![0]));
}

#[test]
fn full_alphabet_has_no_sentinel() {
    let w = RecordWidth::new(1).unwrap();
    let data = (0..=255).collect::<Vec<u8>>();
    let view = RecordView::new(&data, w).unwrap();
    let set = PresenceSet::build(&view);
    assert!(set.contains(255));
    assert_eq!(set.first_absent(), None);
    assert_eq!(find_sentinel(&view, w), None);
}

#[test]
fn two_byte_sentinel_is_little_endian() {
    let w = RecordWidth::new(2).unwrap();
    // Values 1, 1, 0 are present, so 2 is the first absent value
    let data = [1, 0, 1, 0, 0, 0];
    let view = RecordView::new(&data, w).unwrap();
    assert_eq!(find_sentinel(&view, w), Some(vec![2, 0]));
}

#[test]
fn wide_records_use_sparse_set() {
    let w = RecordWidth::new(4).unwrap();
    let mut data = Vec::new();
    for v in [0_u32, 1, 2, 0xdead_beef] {
        data.extend_from_slice(&v.to_le_bytes());
    }
    let view = RecordView::new(&data, w).unwrap();
    let set = PresenceSet::build(&view);
    assert!(matches!(set, PresenceSet::Sparse { .. }));
    assert!(set.contains(0xdead_beef));
    assert_eq!(set.first_absent(), Some(3));
    assert_eq!(find_sentinel(&view, w), Some(vec![3, 0, 0, 0]));
}
