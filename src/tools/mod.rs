//! The tools module provides the shared building blocks for the codecs.
//!
//! The tools are:
//! - record_view: Interpret a byte buffer as fixed width records (1-8 bytes).
//! - presence: Presence map of record values, used to find the BWT sentinel.
//! - mtf: Move-To-Front transform and its inverse.
//! - options: Algorithm choice and per-call settings.
//! - logging: Optional terminal logger for programs embedding the codecs.
//!
pub mod logging;
pub mod mtf;
pub mod options;
pub mod presence;
pub mod record_view;
