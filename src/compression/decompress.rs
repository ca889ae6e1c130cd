use log::{error, info};

use super::compress::Encoded;
use crate::bwt_algorithms::bwt_decode_with;
use crate::error::{CodecError, Result};
use crate::lzw::lzw_decode;
use crate::rle::{
    decode_byte_run, decode_nibble_run, decode_nibble_run_squared, decode_word_run,
};
use crate::tools::mtf::mtf_decode;
use crate::tools::options::{Algorithm, BwtInverse, CodecOptions};

/// Undo the codec recorded in `block`. Only the BWT inverse strategy is taken from `opts`.
pub fn decompress(block: &Encoded, opts: &CodecOptions) -> Result<Vec<u8>> {
    decode_block(block, &block.data, opts.bwt_inverse)
}

/// Decode `data` using the metadata in `block` (its own `data` is ignored).
pub(crate) fn decode_block(block: &Encoded, data: &[u8], inverse: BwtInverse) -> Result<Vec<u8>> {
    let width = block.record_width;

    let out = match block.algorithm {
        Algorithm::ByteRle => decode_byte_run(data, width)?,
        Algorithm::WordRle => decode_word_run(data, width)?,
        Algorithm::NibbleRle => decode_nibble_run(data, width)?,
        // Both stages: the byte wide second pass, then the record wide first pass
        Algorithm::NibbleRleSquared => decode_nibble_run(&decode_nibble_run_squared(data)?, width)?,
        Algorithm::Bwt => {
            let sentinel = block.sentinel.as_deref().ok_or_else(|| {
                CodecError::Configuration("BWT block has no sentinel".to_string())
            })?;
            bwt_decode_with(inverse, sentinel, data, width)?
        }
        Algorithm::Mtf => mtf_decode(data, width)?,
        Algorithm::Lzw => lzw_decode(data, width)?,
    };

    if out.len() != block.original_len {
        error!(
            "{} decoded {} bytes, expected {}.",
            block.algorithm,
            out.len(),
            block.original_len
        );
        return Err(CodecError::CorruptStream(format!(
            "decoded {} bytes, expected {}",
            out.len(),
            block.original_len
        )));
    }
    info!("{} restored {} bytes.", block.algorithm, out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::compress::compress;

    #[test]
    fn every_algorithm_round_trips() {
        let data = b"AAAABBBCCDAAAABBBCCDzzzzzzzzzzzzzzzzzzzzzzzz0123".to_vec();
        for algorithm in Algorithm::ALL {
            for width in [1, 2, 4, 8] {
                let opts = CodecOptions::new()
                    .with_algorithm(algorithm)
                    .with_record_width(width)
                    .unwrap();
                let block = compress(&data, &opts).unwrap();
                assert_eq!(decompress(&block, &opts).unwrap(), data, "{} / {}", algorithm, width);
            }
        }
    }

    #[test]
    fn table_inverse_matches() {
        let opts = CodecOptions::new()
            .with_algorithm(Algorithm::Bwt)
            .with_bwt_inverse(BwtInverse::Table);
        let block = compress(b"mississippi", &opts).unwrap();
        assert_eq!(decompress(&block, &opts).unwrap(), b"mississippi".to_vec());
    }

    #[test]
    fn length_mismatch_is_corrupt() {
        let opts = CodecOptions::new();
        let mut block = compress(&[1, 1, 1], &opts).unwrap();
        block.original_len = 4;
        assert!(decompress(&block, &opts).unwrap_err().is_corrupt());
    }

    #[test]
    fn bwt_without_sentinel_is_rejected() {
        let opts = CodecOptions::new().with_algorithm(Algorithm::Bwt);
        let mut block = compress(b"abc", &opts).unwrap();
        block.sentinel = None;
        assert!(matches!(
            decompress(&block, &opts),
            Err(CodecError::Configuration(_))
        ));
    }
}
