use proptest::prelude::*;
use record_codecs::bwt_algorithms::{bwt_decode, bwt_decode_table, bwt_encode};
use record_codecs::lzw::{decode_codes, encode_codes};
use record_codecs::rle::*;
use record_codecs::tools::mtf::{mtf_decode, mtf_encode};
use record_codecs::{compress, decompress, Algorithm, CodecOptions, Pipeline, RecordWidth};

/// A record width and a buffer of whole records drawn from a small alphabet, so
/// runs and repeats actually happen.
fn records() -> impl Strategy<Value = (RecordWidth, Vec<u8>)> {
    (1..=8_usize, 0..40_usize).prop_flat_map(|(w, n)| {
        (
            Just(RecordWidth::new(w).unwrap()),
            prop::collection::vec(0..4_u8, n * w),
        )
    })
}

proptest! {
    #[test]
    fn rle_round_trips((width, data) in records()) {
        prop_assert_eq!(decode_byte_run(&encode_byte_run(&data, width)?, width)?, data.clone());
        prop_assert_eq!(decode_word_run(&encode_word_run(&data, width)?, width)?, data.clone());
        prop_assert_eq!(decode_nibble_run(&encode_nibble_run(&data, width)?, width)?, data.clone());
        let squared = encode_nibble_run_squared(&data, width)?;
        let first_pass = decode_nibble_run_squared(&squared)?;
        prop_assert_eq!(decode_nibble_run(&first_pass, width)?, data);
    }

    #[test]
    fn nibble_counts_stay_in_range((width, data) in records()) {
        let encoded = encode_nibble_run(&data, width)?;
        let mut idx = 0;
        while idx < encoded.len() {
            let packed = encoded[idx];
            prop_assert!(packed >> 4 >= 1);
            idx += 1 + width.get();
            if packed & 0x0f > 0 {
                idx += width.get();
            }
        }
        prop_assert_eq!(idx, encoded.len());
    }

    #[test]
    fn bwt_round_trips((width, data) in records()) {
        let (sentinel, bwt) = bwt_encode(&data, width)?;
        prop_assert_eq!(bwt.len(), data.len() + width.get());
        prop_assert_eq!(bwt_decode(&sentinel, &bwt, width)?, data.clone());
        prop_assert_eq!(bwt_decode_table(&sentinel, &bwt, width)?, data);
    }

    #[test]
    fn mtf_round_trips((width, data) in records()) {
        let ranks = mtf_encode(&data, width)?;
        prop_assert_eq!(ranks.len(), data.len());
        prop_assert_eq!(mtf_decode(&ranks, width)?, data);
    }

    #[test]
    fn lzw_round_trips(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let codes = encode_codes(&data);
        prop_assert_eq!(decode_codes(&codes)?, data);
    }

    #[test]
    fn lzw_round_trips_repetitive(data in prop::collection::vec(0..2_u8, 0..300)) {
        prop_assert_eq!(decode_codes(&encode_codes(&data))?, data);
    }

    #[test]
    fn every_algorithm_through_options((width, data) in records()) {
        for algorithm in Algorithm::ALL {
            let opts = CodecOptions { algorithm, record_width: width, ..CodecOptions::default() };
            let block = compress(&data, &opts)?;
            prop_assert_eq!(decompress(&block, &opts)?, data.clone());
        }
    }

    #[test]
    fn classic_pipeline_round_trips((width, data) in records()) {
        let pipeline = Pipeline::classic(width);
        let frame = pipeline.compress(&data)?;
        prop_assert_eq!(pipeline.decompress(&frame)?, data);
    }
}
