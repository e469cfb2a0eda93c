//! Shared fixtures: synthetic Part 10 files built with dicom-object.

#![allow(dead_code)]

use std::path::Path;

use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::tags;
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};

pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
pub const MEDIA_STORAGE_DIRECTORY_STORAGE: &str = "1.2.840.10008.1.3.10";

/// An uncompressed Image Pixel module to materialize on disk.
pub struct ImageFixture {
    pub rows: u16,
    pub columns: u16,
    pub samples_per_pixel: u16,
    pub bits_allocated: u16,
    pub bits_stored: u16,
    pub photometric: &'static str,
    pub number_of_frames: u16,
    pub pixel_data: Vec<u8>,
}

impl ImageFixture {
    /// 8-bit grayscale with a deterministic gradient-ish pattern.
    pub fn monochrome8(rows: u16, columns: u16) -> Self {
        let pixels: Vec<u8> = (0..usize::from(rows) * usize::from(columns))
            .map(|i| (i * 7 % 251) as u8)
            .collect();
        Self {
            rows,
            columns,
            samples_per_pixel: 1,
            bits_allocated: 8,
            bits_stored: 8,
            photometric: "MONOCHROME2",
            number_of_frames: 1,
            pixel_data: pixels,
        }
    }

    /// 12 bits stored in 16 allocated, grayscale.
    pub fn monochrome12(rows: u16, columns: u16) -> Self {
        let pixel_data: Vec<u8> = (0..usize::from(rows) * usize::from(columns))
            .flat_map(|i| ((i * 97 % 4096) as u16).to_le_bytes())
            .collect();
        Self {
            rows,
            columns,
            samples_per_pixel: 1,
            bits_allocated: 16,
            bits_stored: 12,
            photometric: "MONOCHROME2",
            number_of_frames: 1,
            pixel_data,
        }
    }

    /// Interleaved 8-bit RGB.
    pub fn rgb8(rows: u16, columns: u16) -> Self {
        let pixels: Vec<u8> = (0..usize::from(rows) * usize::from(columns))
            .flat_map(|i| [(i % 256) as u8, (i * 3 % 256) as u8, (255 - i % 256) as u8])
            .collect();
        Self {
            rows,
            columns,
            samples_per_pixel: 3,
            bits_allocated: 8,
            bits_stored: 8,
            photometric: "RGB",
            number_of_frames: 1,
            pixel_data: pixels,
        }
    }

    /// Two-frame 8-bit grayscale; frames hold distinct patterns.
    pub fn monochrome8_two_frames(rows: u16, columns: u16) -> Self {
        let frame_len = usize::from(rows) * usize::from(columns);
        let mut pixels = Vec::with_capacity(frame_len * 2);
        pixels.extend((0..frame_len).map(|i| (i % 256) as u8));
        pixels.extend((0..frame_len).map(|i| (255 - i % 256) as u8));
        Self {
            rows,
            columns,
            samples_per_pixel: 1,
            bits_allocated: 8,
            bits_stored: 8,
            photometric: "MONOCHROME2",
            number_of_frames: 2,
            pixel_data: pixels,
        }
    }

    pub fn frame_len(&self) -> usize {
        usize::from(self.rows)
            * usize::from(self.columns)
            * usize::from(self.samples_per_pixel)
            * usize::from(self.bits_allocated / 8)
    }

    pub fn write(&self, path: &Path) {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(DataElement::new(
            tags::SOP_CLASS_UID,
            VR::UI,
            PrimitiveValue::from(SECONDARY_CAPTURE_IMAGE_STORAGE),
        ));
        obj.put(DataElement::new(
            tags::SOP_INSTANCE_UID,
            VR::UI,
            PrimitiveValue::from("2.25.316180487023804826316841253508799361702"),
        ));
        obj.put(DataElement::new(
            tags::SAMPLES_PER_PIXEL,
            VR::US,
            PrimitiveValue::from(self.samples_per_pixel),
        ));
        obj.put(DataElement::new(
            tags::PHOTOMETRIC_INTERPRETATION,
            VR::CS,
            PrimitiveValue::from(self.photometric),
        ));
        if self.samples_per_pixel > 1 {
            obj.put(DataElement::new(
                tags::PLANAR_CONFIGURATION,
                VR::US,
                PrimitiveValue::from(0u16),
            ));
        }
        if self.number_of_frames > 1 {
            obj.put(DataElement::new(
                tags::NUMBER_OF_FRAMES,
                VR::IS,
                PrimitiveValue::from(self.number_of_frames.to_string()),
            ));
        }
        obj.put(DataElement::new(
            tags::ROWS,
            VR::US,
            PrimitiveValue::from(self.rows),
        ));
        obj.put(DataElement::new(
            tags::COLUMNS,
            VR::US,
            PrimitiveValue::from(self.columns),
        ));
        obj.put(DataElement::new(
            tags::BITS_ALLOCATED,
            VR::US,
            PrimitiveValue::from(self.bits_allocated),
        ));
        obj.put(DataElement::new(
            tags::BITS_STORED,
            VR::US,
            PrimitiveValue::from(self.bits_stored),
        ));
        obj.put(DataElement::new(
            tags::HIGH_BIT,
            VR::US,
            PrimitiveValue::from(self.bits_stored - 1),
        ));
        obj.put(DataElement::new(
            tags::PIXEL_REPRESENTATION,
            VR::US,
            PrimitiveValue::from(0u16),
        ));
        let pixel_vr = if self.bits_allocated == 8 { VR::OB } else { VR::OW };
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            pixel_vr,
            PrimitiveValue::from(self.pixel_data.clone()),
        ));

        let obj = obj
            .with_meta(
                FileMetaTableBuilder::new()
                    .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN)
                    .media_storage_sop_class_uid(SECONDARY_CAPTURE_IMAGE_STORAGE)
                    .media_storage_sop_instance_uid(
                        "2.25.316180487023804826316841253508799361702",
                    ),
            )
            .expect("file meta");
        obj.write_to_file(path).expect("write fixture");
    }
}

/// Minimal DICOMDIR stand-in: the Media Storage Directory Storage SOP class
/// in the file meta group, no pixel data.
pub fn write_dicomdir(path: &Path) {
    let mut obj = InMemDicomObject::new_empty();
    obj.put(DataElement::new(
        tags::SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(MEDIA_STORAGE_DIRECTORY_STORAGE),
    ));
    obj.put(DataElement::new(
        tags::SOP_INSTANCE_UID,
        VR::UI,
        PrimitiveValue::from("2.25.99561271496239309231953265581598738541"),
    ));
    let obj = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(MEDIA_STORAGE_DIRECTORY_STORAGE)
                .media_storage_sop_instance_uid("2.25.99561271496239309231953265581598738541"),
        )
        .expect("file meta");
    obj.write_to_file(path).expect("write fixture");
}

/// Index of the first occurrence of `marker` (0xFF-prefixed) in a JPEG
/// stream, skipping stuffed 0xFF00 pairs.
pub fn find_marker(stream: &[u8], marker: u8) -> Option<usize> {
    stream
        .windows(2)
        .position(|pair| pair[0] == 0xFF && pair[1] == marker)
}
