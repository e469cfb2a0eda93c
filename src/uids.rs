//! DICOM unique identifiers the pipeline refers to by name.

/// Implicit VR Little Endian, the default transfer syntax.
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";

/// Explicit VR Little Endian.
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";

/// JPEG Lossless, Non-Hierarchical, First-Order Prediction
/// (Process 14 \[Selection Value 1\]) — the conversion target.
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";

/// Media Storage Directory Storage, the DICOMDIR SOP class.
pub const MEDIA_STORAGE_DIRECTORY_STORAGE: &str = "1.2.840.10008.1.3.10";
