use std::{fmt::Display, fmt::Formatter, str::FromStr};

use super::record_view::RecordWidth;
use crate::error::{CodecError, Result};

/// Verbosity of log output installed by `tools::logging`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// The codecs in the library
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Run length encoding with an 8 bit count
    ByteRle,
    /// Run length encoding with a 16 bit big-endian count
    WordRle,
    /// Two 4 bit run lengths packed in one byte
    NibbleRle,
    /// Nibble RLE applied a second time to its own output
    NibbleRleSquared,
    /// Burrows-Wheeler transform over records
    Bwt,
    /// Move-to-front rank transform
    Mtf,
    /// LZW dictionary coding, 32 bit codes
    Lzw,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::ByteRle,
        Algorithm::WordRle,
        Algorithm::NibbleRle,
        Algorithm::NibbleRleSquared,
        Algorithm::Bwt,
        Algorithm::Mtf,
        Algorithm::Lzw,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::ByteRle => "byte-rle",
            Algorithm::WordRle => "word-rle",
            Algorithm::NibbleRle => "nibble-rle",
            Algorithm::NibbleRleSquared => "nibble-rle-squared",
            Algorithm::Bwt => "bwt",
            Algorithm::Mtf => "mtf",
            Algorithm::Lzw => "lzw",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| CodecError::Configuration(format!("unknown algorithm: {}", s)))
    }
}

/// How the BWT decoder rebuilds the original rotation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BwtInverse {
    /// Rebuild the whole sorted rotation table column by column. Quadratic memory.
    Table,
    /// Follow the last-to-first column mapping. Linear memory.
    LastFirst,
}

/// Settings for a single codec call
#[derive(Clone, Debug)]
pub struct CodecOptions {
    /// Algorithm used
    pub algorithm: Algorithm,
    /// Width of one record in bytes
    pub record_width: RecordWidth,
    /// BWT inverse strategy
    pub bwt_inverse: BwtInverse,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl CodecOptions {
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::ByteRle,
            record_width: RecordWidth::BYTE,
            bwt_inverse: BwtInverse::LastFirst,
            verbose: Verbosity::Errors,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Fails for widths outside 1..=8.
    pub fn with_record_width(mut self, width: usize) -> Result<Self> {
        self.record_width = RecordWidth::new(width)?;
        Ok(self)
    }

    pub fn with_bwt_inverse(mut self, inverse: BwtInverse) -> Self {
        self.bwt_inverse = inverse;
        self
    }

    pub fn with_verbosity(mut self, verbose: Verbosity) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::new()
    }
}
