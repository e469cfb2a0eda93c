//! JPEG Lossless (Process 14) encoder, ISO/IEC 10918-1 | ITU-T T.81.
//!
//! Produces single-scan interchange streams with predictive coding, suitable
//! for DICOM encapsulation under transfer syntax `1.2.840.10008.1.2.4.70`.
//! Differences are taken modulo 2^16 (F.1.2.1) so that any precision up to
//! 16 bits round-trips exactly.

pub mod huffman;

use crate::FrameInfo;
use crate::constants::{MAXIMUM_BITS_PER_SAMPLE, MAXIMUM_DIMENSION, MINIMUM_BITS_PER_SAMPLE};
use crate::error::JpegError;
use crate::jpeg_stream_writer::JpegStreamWriter;
use huffman::{DIFF_SYMBOL_COUNT, HuffmanTable, JpegBitWriter, category_of, diff_bits};

/// Predictor used by the First-Order Prediction (Selection Value 1) process.
pub const SV1_PREDICTOR: u8 = 1;

/// Sample predictors of table H.1. `ra` is the reconstructed sample to the
/// left, `rb` the one above and `rc` the one above-left.
pub fn predict(selection_value: u8, ra: i32, rb: i32, rc: i32) -> i32 {
    match selection_value {
        1 => ra,
        2 => rb,
        3 => rc,
        4 => ra + rb - rc,
        5 => ra + ((rb - rc) >> 1),
        6 => rb + ((ra - rc) >> 1),
        7 => (ra + rb) >> 1,
        _ => 0,
    }
}

/// Encoder for one lossless frame.
#[derive(Debug, Clone, Copy)]
pub struct LosslessJpegEncoder {
    predictor: u8,
    point_transform: u8,
    optimize_huffman: bool,
}

impl LosslessJpegEncoder {
    pub fn new(predictor: u8, point_transform: u8) -> Self {
        Self {
            predictor,
            point_transform,
            optimize_huffman: true,
        }
    }

    pub fn with_optimized_huffman(mut self, optimize: bool) -> Self {
        self.optimize_huffman = optimize;
        self
    }

    /// Encodes one frame into a complete interchange stream (SOI through
    /// EOI).
    ///
    /// `samples` holds stored values in interleaved row-major order, one
    /// value per component per pixel; values wider than `bits_per_sample`
    /// are masked. Three-component frames get an Adobe APP14 segment with
    /// transform 0 so that decoders keep the components as stored.
    pub fn encode_frame(
        &self,
        samples: &[u16],
        frame_info: &FrameInfo,
    ) -> Result<Vec<u8>, JpegError> {
        self.validate(samples, frame_info)?;

        // Pass 1: difference statistics for the optimized table.
        let table = if self.optimize_huffman {
            let mut frequencies = [0u32; DIFF_SYMBOL_COUNT];
            self.for_each_difference(samples, frame_info, |diff| {
                frequencies[usize::from(category_of_diff(diff))] += 1;
            });
            HuffmanTable::build_optimized(&frequencies)
        } else {
            HuffmanTable::balanced()
        };

        let mut writer = JpegStreamWriter::new();
        writer.write_start_of_image();
        if frame_info.component_count == 3 {
            writer.write_adobe_app14(0);
        }
        writer.write_start_of_frame_lossless(frame_info);
        writer.write_dht(0, 0, &table.lengths, &table.values);
        writer.write_start_of_scan(frame_info.component_count, self.predictor, self.point_transform);

        // Pass 2: entropy-coded data.
        let mut bits = JpegBitWriter::new();
        self.for_each_difference(samples, frame_info, |diff| {
            let category = category_of_diff(diff);
            let code = table.codes[usize::from(category)];
            bits.write_bits(code.value, code.length);
            if category < 16 {
                let (value, length) = diff_bits(diff, category);
                bits.write_bits(value, length);
            }
        });
        bits.flush();
        writer.extend_entropy(&bits.into_bytes());
        writer.write_end_of_image();

        Ok(writer.into_bytes())
    }

    /// Walks the frame in scan order and hands every wrapped prediction
    /// difference to `f`. Shared by the statistics and the emission pass.
    fn for_each_difference(&self, samples: &[u16], frame_info: &FrameInfo, mut f: impl FnMut(i32)) {
        let width = frame_info.width as usize;
        let height = frame_info.height as usize;
        let components = frame_info.component_count as usize;
        let shift = self.point_transform;
        let mask: u32 = if frame_info.bits_per_sample >= 16 {
            0xFFFF
        } else {
            (1 << frame_info.bits_per_sample) - 1
        };
        let default_prediction = 1i32 << (frame_info.bits_per_sample - shift - 1);

        let at = |x: usize, y: usize, c: usize| -> i32 {
            ((u32::from(samples[(y * width + x) * components + c]) & mask) >> shift) as i32
        };

        for y in 0..height {
            for x in 0..width {
                for c in 0..components {
                    // H.1.2.2: the first sample predicts from the midpoint,
                    // the first row from Ra only and the first column from Rb.
                    let prediction = if x == 0 && y == 0 {
                        default_prediction
                    } else if y == 0 {
                        at(x - 1, 0, c)
                    } else if x == 0 {
                        at(0, y - 1, c)
                    } else {
                        predict(
                            self.predictor,
                            at(x - 1, y, c),
                            at(x, y - 1, c),
                            at(x - 1, y - 1, c),
                        )
                    };

                    f(wrap_difference(at(x, y, c), prediction));
                }
            }
        }
    }

    fn validate(&self, samples: &[u16], frame_info: &FrameInfo) -> Result<(), JpegError> {
        if !(MINIMUM_BITS_PER_SAMPLE..=MAXIMUM_BITS_PER_SAMPLE)
            .contains(&frame_info.bits_per_sample)
        {
            return Err(JpegError::UnsupportedBitsPerSample(
                frame_info.bits_per_sample,
            ));
        }
        if frame_info.component_count != 1 && frame_info.component_count != 3 {
            return Err(JpegError::UnsupportedComponentCount(
                frame_info.component_count,
            ));
        }
        if frame_info.width == 0
            || frame_info.height == 0
            || frame_info.width > MAXIMUM_DIMENSION
            || frame_info.height > MAXIMUM_DIMENSION
        {
            return Err(JpegError::InvalidDimensions {
                width: frame_info.width,
                height: frame_info.height,
            });
        }
        if self.point_transform >= frame_info.bits_per_sample {
            return Err(JpegError::InvalidPointTransform(self.point_transform));
        }
        let expected = frame_info.width as usize
            * frame_info.height as usize
            * frame_info.component_count as usize;
        if samples.len() != expected {
            return Err(JpegError::FrameSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(())
    }
}

/// Wraps a prediction difference modulo 2^16 into `-32768..=32767`.
fn wrap_difference(sample: i32, prediction: i32) -> i32 {
    i32::from(((sample - prediction) & 0xFFFF) as u16 as i16)
}

/// Category of a wrapped difference; -32768 is the SSSS=16 case that carries
/// no extra bits.
fn category_of_diff(diff: i32) -> u8 {
    if diff == -32768 { 16 } else { category_of(diff) }
}
