use log::trace;

use super::record_view::{RecordView, RecordWidth};
use crate::error::Result;

/// The 256 entry symbol table, identity order on creation.
///
/// Encoder and decoder each own one. Given the same byte sequence both walk through
/// exactly the same table states.
struct Alphabet([u8; 256]);

impl Alphabet {
    fn new() -> Self {
        let mut table = [0_u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Alphabet(table)
    }

    fn rank_of(&self, byte: u8) -> usize {
        // Every byte value is in the table exactly once
        self.0.iter().position(|&c| c == byte).unwrap_or(0)
    }

    /// Move the symbol at `idx` to the front, shifting everything before it back one.
    fn move_to_front(&mut self, idx: usize) -> u8 {
        let sym = self.0[idx];
        self.0.copy_within(0..idx, 1);
        self.0[0] = sym;
        sym
    }
}

/// Encode data using the Move To Front transform.
///
/// Each byte of every record is replaced by its current rank in the alphabet. The
/// buffer must hold whole records. Costs O(256) per byte.
pub fn mtf_encode(data: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    let view = RecordView::new(data, width)?;
    let mut alphabet = Alphabet::new();
    let out = view
        .bytes()
        .iter()
        .map(|&byte| {
            let idx = alphabet.rank_of(byte);
            alphabet.move_to_front(idx);
            idx as u8
        })
        .collect::<Vec<u8>>();
    trace!("MTF encoded {} records of width {}.", view.len(), width);
    Ok(out)
}

/// Decode data produced by `mtf_encode`.
pub fn mtf_decode(ranks: &[u8], width: RecordWidth) -> Result<Vec<u8>> {
    let view = RecordView::new(ranks, width)?;
    let mut alphabet = Alphabet::new();
    Ok(view
        .bytes()
        .iter()
        .map(|&rank| alphabet.move_to_front(rank as usize))
        .collect())
}

#[test]
fn banana() {
    let w = RecordWidth::BYTE;
    let ranks = mtf_encode(b"banana", w).unwrap();
    assert_eq!(ranks, vec![98, 98, 110, 1, 1, 1]);
    assert_eq!(mtf_decode(&ranks, w).unwrap(), b"banana".to_vec());
    // Same input, same ranks
    assert_eq!(mtf_encode(b"banana", w).unwrap(), ranks);
}

#[test]
fn mtf_encode_from_book() {
    // Identity alphabet, so the first sighting of each symbol is its byte value
    // shifted by the symbols already moved in front of it.
    let input = b"bbyaeee";
    let output = mtf_encode(input, RecordWidth::BYTE).unwrap();
    assert_eq!(output, vec![98, 0, 121, 99, 102, 0, 0]);
}

#[test]
fn wide_records_rank_every_byte() {
    let w = RecordWidth::new(2).unwrap();
    let input = [7_u8, 7, 7, 7, 0, 7];
    let ranks = mtf_encode(&input, w).unwrap();
    assert_eq!(ranks, vec![7, 0, 0, 0, 1, 1]);
    assert_eq!(mtf_decode(&ranks, w).unwrap(), input.to_vec());
    assert!(mtf_encode(&input[..5], w).is_err());
}

#[test]
fn empty_input() {
    assert!(mtf_encode(&[], RecordWidth::BYTE).unwrap().is_empty());
    assert!(mtf_decode(&[], RecordWidth::BYTE).unwrap().is_empty());
}
