//! JPEG codestream writer.
//!
//! Emits the markers and segments of a lossless interchange stream
//! (SOI, APP14, SOF3, DHT, SOS, EOI) into an in-memory buffer.

use crate::FrameInfo;
use crate::jpeg_marker_code::{JPEG_MARKER_START_BYTE, JpegMarkerCode};

/// A writer for JPEG codestreams that manages marker and segment emission.
#[derive(Debug, Default)]
pub struct JpegStreamWriter {
    destination: Vec<u8>,
}

impl JpegStreamWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.destination.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destination.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.destination
    }

    pub fn write_byte(&mut self, value: u8) {
        self.destination.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.destination.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_marker(&mut self, marker: JpegMarkerCode) {
        self.write_byte(JPEG_MARKER_START_BYTE);
        self.write_byte(marker.into());
    }

    pub fn write_start_of_image(&mut self) {
        self.write_marker(JpegMarkerCode::StartOfImage);
    }

    pub fn write_end_of_image(&mut self) {
        self.write_marker(JpegMarkerCode::EndOfImage);
    }

    /// APP14 "Adobe" segment. `transform` 0 declares that components are
    /// stored without a color transform (RGB stays RGB).
    pub fn write_adobe_app14(&mut self, transform: u8) {
        self.write_marker(JpegMarkerCode::ApplicationData14);
        self.write_u16(2 + 12);
        self.destination.extend_from_slice(b"Adobe");
        self.write_u16(100); // DCTEncodeVersion
        self.write_u16(0); // APP14Flags0
        self.write_u16(0); // APP14Flags1
        self.write_byte(transform);
    }

    /// SOF3 segment: lossless (sequential), Huffman coding.
    pub fn write_start_of_frame_lossless(&mut self, frame_info: &FrameInfo) {
        self.write_marker(JpegMarkerCode::StartOfFrameLossless);
        let length = 2 + 1 + 2 + 2 + 1 + (frame_info.component_count as usize * 3);
        self.write_u16(length as u16);

        self.write_byte(frame_info.bits_per_sample);
        self.write_u16(frame_info.height as u16);
        self.write_u16(frame_info.width as u16);
        self.write_byte(frame_info.component_count);

        for i in 0..frame_info.component_count {
            self.write_byte(i + 1); // Component ID
            self.write_byte(0x11); // H=1, V=1
            self.write_byte(0); // Tq, unused in lossless
        }
    }

    pub fn write_dht(&mut self, table_class: u8, table_id: u8, lengths: &[u8; 16], values: &[u8]) {
        self.write_marker(JpegMarkerCode::DefineHuffmanTable);
        let length = 2 + 1 + 16 + values.len();
        self.write_u16(length as u16);
        self.write_byte(((table_class & 1) << 4) | (table_id & 0x0F));
        self.destination.extend_from_slice(lengths);
        self.destination.extend_from_slice(values);
    }

    /// SOS segment for a single interleaved lossless scan. `Ss` carries the
    /// predictor selection value and `Al` the point transform.
    pub fn write_start_of_scan(&mut self, component_count: u8, predictor: u8, point_transform: u8) {
        self.write_marker(JpegMarkerCode::StartOfScan);
        let length = 2 + 1 + (component_count as usize * 2) + 3;
        self.write_u16(length as u16);
        self.write_byte(component_count);
        for i in 0..component_count {
            self.write_byte(i + 1); // Component selector
            self.write_byte(0); // DC table 0; no AC table in lossless
        }
        self.write_byte(predictor); // Ss
        self.write_byte(0); // Se
        self.write_byte(point_transform & 0x0F); // Ah=0, Al
    }

    /// Appends pre-stuffed entropy-coded data.
    pub fn extend_entropy(&mut self, bytes: &[u8]) {
        self.destination.extend_from_slice(bytes);
    }
}
