use log::info;

use super::compress::{compress, Encoded};
use super::decompress::decode_block;
use crate::error::Result;
use crate::tools::options::{Algorithm, BwtInverse, CodecOptions};
use crate::tools::record_view::RecordWidth;

/// One step of a pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    pub algorithm: Algorithm,
    pub record_width: RecordWidth,
}

/// Codecs applied one after another, undone in reverse order.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
    bwt_inverse: Option<BwtInverse>,
}

/// Result of a pipeline run.
///
/// `stages` holds the metadata of every stage in the order they ran. Their `data`
/// fields are empty; only the final output is kept, in `data`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub stages: Vec<Encoded>,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn compressed_size(&self) -> usize {
        self.data.len()
    }

    /// Length of the data that entered the first stage.
    pub fn original_len(&self) -> usize {
        self.stages.first().map_or(self.data.len(), |s| s.original_len)
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// BWT, then MTF, then byte RLE, all on `width` byte records.
    pub fn classic(width: RecordWidth) -> Self {
        Self::new()
            .then(Algorithm::Bwt, width)
            .then(Algorithm::Mtf, width)
            .then(Algorithm::ByteRle, width)
    }

    pub fn then(mut self, algorithm: Algorithm, record_width: RecordWidth) -> Self {
        self.stages.push(Stage {
            algorithm,
            record_width,
        });
        self
    }

    pub fn with_bwt_inverse(mut self, inverse: BwtInverse) -> Self {
        self.bwt_inverse = Some(inverse);
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Run every stage in order. Each stage checks its own record width against the
    /// output of the stage before it.
    pub fn compress(&self, input: &[u8]) -> Result<Frame> {
        let mut data = input.to_vec();
        let mut stages = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            let opts = CodecOptions {
                algorithm: stage.algorithm,
                record_width: stage.record_width,
                ..CodecOptions::default()
            };
            let mut block = compress(&data, &opts)?;
            data = std::mem::take(&mut block.data);
            stages.push(block);
        }
        info!(
            "Pipeline of {} stages took {} bytes to {} bytes.",
            stages.len(),
            input.len(),
            data.len()
        );
        Ok(Frame { stages, data })
    }

    /// Undo a frame, last stage first.
    pub fn decompress(&self, frame: &Frame) -> Result<Vec<u8>> {
        let inverse = self.bwt_inverse.unwrap_or(BwtInverse::LastFirst);
        frame
            .stages
            .iter()
            .rev()
            .try_fold(frame.data.clone(), |data, stage| decode_block(stage, &data, inverse))
    }
}
