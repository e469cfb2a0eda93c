//! DICOM to JPEG Lossless transfer syntax conversion.
//!
//! Converts a DICOM Part 10 file into the JPEG Lossless, Non-Hierarchical,
//! First-Order Prediction transfer syntax (Process 14 \[Selection Value 1\],
//! `1.2.840.10008.1.2.4.70`). Parsing, the file meta model and decompression
//! of already-compressed inputs are delegated to the dicom-rs crates; the
//! Process 14 encoder itself lives in [`jpeg_lossless`].

pub mod codec_registry;
pub mod coding_parameters;
pub mod constants;
pub mod convert;
pub mod error;
pub mod jpeg_lossless;
pub mod jpeg_marker_code;
pub mod jpeg_stream_writer;
pub mod uids;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use convert::convert_file;
pub use error::{ConvertError, JpegError};

/// Frame geometry shared between the conversion pipeline and the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_sample: u8,
    pub component_count: u8,
}
