use log::{debug, info};

use crate::bwt_algorithms::bwt_encode;
use crate::error::Result;
use crate::lzw::lzw_encode;
use crate::rle::{encode_byte_run, encode_nibble_run, encode_nibble_run_squared, encode_word_run};
use crate::tools::mtf::mtf_encode;
use crate::tools::options::{Algorithm, CodecOptions};
use crate::tools::record_view::RecordWidth;

/*
    The codecs add no headers of their own. Everything needed to undo a codec
    travels beside the data in this struct, and it is up to the caller to store it.
*/

/// The output of one codec call plus what is needed to decode it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    /// Codec that produced `data`
    pub algorithm: Algorithm,
    /// Record width the codec was run with
    pub record_width: RecordWidth,
    /// Length in bytes of the input
    pub original_len: usize,
    /// Sentinel record, BWT only
    pub sentinel: Option<Vec<u8>>,
    /// Raw codec output
    pub data: Vec<u8>,
}

impl Encoded {
    /// Bytes of encoded output.
    pub fn compressed_size(&self) -> usize {
        self.data.len()
    }

    /// Compressed size over original size. None for empty input.
    pub fn ratio(&self) -> Option<f64> {
        if self.original_len == 0 {
            return None;
        }
        Some(self.data.len() as f64 / self.original_len as f64)
    }
}

/// Run one codec over `input` using the algorithm and record width in `opts`.
pub fn compress(input: &[u8], opts: &CodecOptions) -> Result<Encoded> {
    let width = opts.record_width;
    let mut sentinel = None;

    let data = match opts.algorithm {
        Algorithm::ByteRle => encode_byte_run(input, width)?,
        Algorithm::WordRle => encode_word_run(input, width)?,
        Algorithm::NibbleRle => encode_nibble_run(input, width)?,
        Algorithm::NibbleRleSquared => encode_nibble_run_squared(input, width)?,
        Algorithm::Bwt => {
            let (key, bwt) = bwt_encode(input, width)?;
            sentinel = Some(key);
            bwt
        }
        Algorithm::Mtf => mtf_encode(input, width)?,
        Algorithm::Lzw => lzw_encode(input, width)?,
    };

    let block = Encoded {
        algorithm: opts.algorithm,
        record_width: width,
        original_len: input.len(),
        sentinel,
        data,
    };
    info!(
        "{} took {} bytes to {} bytes with {}-byte records.",
        block.algorithm,
        block.original_len,
        block.compressed_size(),
        width
    );
    debug!("Compression ratio is {:?}.", block.ratio());
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn byte_rle_block() {
        let opts = CodecOptions::new();
        let block = compress(&[42; 1000], &opts).unwrap();
        assert_eq!(block.algorithm, Algorithm::ByteRle);
        assert_eq!(block.compressed_size(), 8);
        assert_eq!(block.original_len, 1000);
        assert_eq!(block.sentinel, None);
        assert_eq!(block.ratio(), Some(0.008));
    }

    #[test]
    fn bwt_block_keeps_sentinel() {
        let opts = CodecOptions::new().with_algorithm(Algorithm::Bwt);
        let block = compress(b"banana", &opts).unwrap();
        assert_eq!(block.sentinel, Some(vec![0]));
        assert_eq!(block.data, b"annb\0aa".to_vec());
    }

    #[test]
    fn empty_input_has_no_ratio() {
        let opts = CodecOptions::new().with_algorithm(Algorithm::Lzw);
        let block = compress(&[], &opts).unwrap();
        assert_eq!(block.compressed_size(), 0);
        assert_eq!(block.ratio(), None);
    }

    #[test]
    fn errors_pass_through() {
        let opts = CodecOptions::new()
            .with_algorithm(Algorithm::Mtf)
            .with_record_width(4)
            .unwrap();
        assert!(matches!(
            compress(&[1, 2, 3], &opts),
            Err(CodecError::Configuration(_))
        ));
    }
}
