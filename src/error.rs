use thiserror::Error;

/// Errors surfaced by [`convert_file`](crate::convert::convert_file).
///
/// One variant per failure category of the conversion pipeline; the display
/// text is the message handed verbatim to host runtimes.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input path was empty. Raised before any filesystem access.
    #[error("invalid filename: <empty string>")]
    EmptyInputPath,

    /// The input file could not be opened or parsed as DICOM.
    #[error("{details}: reading file: {path}")]
    ReadFailed { path: String, details: String },

    /// A compressed input could not be brought back to a native
    /// representation before re-encoding.
    #[error(
        "no conversion from compressed original to uncompressed transfer syntax possible! ({details})"
    )]
    DecompressionFailed { details: String },

    /// The input is a DICOMDIR, which carries no image to compress.
    #[error("DICOMDIR files (Media Storage Directory Storage SOP Class) cannot be compressed!")]
    DicomdirRejected,

    /// The image could not be encoded under the target transfer syntax.
    #[error("no conversion to transfer syntax {transfer_syntax} possible! ({details})")]
    ConversionNotPossible {
        transfer_syntax: String,
        details: String,
    },

    /// The converted data set could not be written to the output path.
    #[error("{details}: writing file: {path}")]
    WriteFailed { path: String, details: String },
}

/// Errors raised by the Process 14 encoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JpegError {
    #[error("bits per sample {0} outside the supported 2..=16 range")]
    UnsupportedBitsPerSample(u8),
    #[error("component count {0} not supported (scans carry 1 or 3 components)")]
    UnsupportedComponentCount(u8),
    #[error("frame dimensions {width}x{height} invalid (each side must be 1..=65535)")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("point transform {0} must be smaller than the sample precision")]
    InvalidPointTransform(u8),
    #[error("frame buffer holds {actual} samples, geometry requires {expected}")]
    FrameSizeMismatch { expected: usize, actual: usize },
}
