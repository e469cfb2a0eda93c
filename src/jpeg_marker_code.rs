use num_enum::{IntoPrimitive, TryFromPrimitive};

/// JPEG marker codes emitted by the lossless encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum JpegMarkerCode {
    /// SOI: Marks the start of an image.
    StartOfImage = 0xD8,

    /// EOI: Marks the end of an image.
    EndOfImage = 0xD9,

    /// SOS: Marks the start of scan.
    StartOfScan = 0xDA,

    /// SOF3: Marks the start of a lossless (sequential), Huffman-coded frame.
    StartOfFrameLossless = 0xC3,

    /// DHT: Defines a Huffman table.
    DefineHuffmanTable = 0xC4,

    /// APP14: Application data 14: used by Adobe for the color-transform tag.
    ApplicationData14 = 0xEE,
}

pub const JPEG_MARKER_START_BYTE: u8 = 0xFF;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_codes_round_trip_through_u8() {
        for marker in [
            JpegMarkerCode::StartOfImage,
            JpegMarkerCode::EndOfImage,
            JpegMarkerCode::StartOfScan,
            JpegMarkerCode::StartOfFrameLossless,
            JpegMarkerCode::DefineHuffmanTable,
            JpegMarkerCode::ApplicationData14,
        ] {
            let raw: u8 = marker.into();
            assert_eq!(JpegMarkerCode::try_from(raw), Ok(marker));
        }
    }

    #[test]
    fn unknown_marker_byte_is_rejected() {
        assert!(JpegMarkerCode::try_from(0x01).is_err());
    }
}
