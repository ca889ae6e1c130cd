use crate::error::{CodecError, Result};

/// Largest supported record width in bytes.
pub const MAX_RECORD_WIDTH: usize = 8;

/// Validated record width, 1..=8 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordWidth(usize);

impl RecordWidth {
    /// Single byte records. LZW and the second nibble pass always use this.
    pub const BYTE: RecordWidth = RecordWidth(1);

    pub fn new(width: usize) -> Result<Self> {
        if !(1..=MAX_RECORD_WIDTH).contains(&width) {
            return Err(CodecError::Configuration(format!(
                "record width must be 1..={}, got {}",
                MAX_RECORD_WIDTH, width
            )));
        }
        Ok(RecordWidth(width))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for RecordWidth {
    fn default() -> Self {
        RecordWidth::BYTE
    }
}

impl std::fmt::Display for RecordWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for RecordWidth {
    type Error = CodecError;
    fn try_from(width: usize) -> Result<Self> {
        RecordWidth::new(width)
    }
}

/// A byte buffer seen as a sequence of fixed width records.
#[derive(Clone, Copy, Debug)]
pub struct RecordView<'a> {
    data: &'a [u8],
    width: usize,
}

impl<'a> RecordView<'a> {
    /// Fails when the buffer does not hold a whole number of records.
    pub fn new(data: &'a [u8], width: RecordWidth) -> Result<Self> {
        let width = width.get();
        if data.len() % width != 0 {
            return Err(CodecError::Configuration(format!(
                "buffer length {} is not a multiple of record width {}",
                data.len(),
                width
            )));
        }
        Ok(Self { data, width })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.data.len() / self.width
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Record `i`. Panics when out of range, like slice indexing.
    pub fn record(&self, i: usize) -> &'a [u8] {
        &self.data[i * self.width..(i + 1) * self.width]
    }

    pub fn iter(&self) -> std::slice::ChunksExact<'a, u8> {
        self.data.chunks_exact(self.width)
    }

    /// Record `i` read as a little-endian integer.
    pub fn value(&self, i: usize) -> u64 {
        record_value(self.record(i))
    }

    /// Length of the run of records equal to `record(start)`, capped at `max`.
    pub fn run_length(&self, start: usize, max: usize) -> usize {
        let first = self.record(start);
        self.data[start * self.width..]
            .chunks_exact(self.width)
            .take(max)
            .take_while(|&r| r == first)
            .count()
    }
}

/// Little-endian integer value of a record of up to 8 bytes.
pub fn record_value(record: &[u8]) -> u64 {
    record
        .iter()
        .enumerate()
        .fold(0_u64, |acc, (i, &b)| acc | (b as u64) << (8 * i))
}

/// Inverse of `record_value`.
pub fn record_from_value(value: u64, width: RecordWidth) -> Vec<u8> {
    value.to_le_bytes()[..width.get()].to_vec()
}
