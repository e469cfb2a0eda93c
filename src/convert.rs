//! The DICOM conversion pipeline.
//!
//! Loads a Part 10 file, brings compressed input back to a native
//! representation, encodes every frame as a JPEG Lossless (Process 14 SV1)
//! interchange stream and writes the result under transfer syntax
//! `1.2.840.10008.1.2.4.70`.

use std::path::Path;

use dicom_core::Tag;
use dicom_core::dictionary::DataDictionary;
use dicom_core::value::{C, PixelFragmentSequence, Value};
use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::{StandardDataDictionary, tags};
use dicom_encoding::transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
use dicom_object::{DefaultDicomObject, open_file};
use dicom_pixeldata::PixelDecoder;
use dicom_transfer_syntax_registry::TransferSyntaxRegistry;
use tracing::{debug, info, warn};

use crate::FrameInfo;
use crate::codec_registry::CodecRegistration;
use crate::coding_parameters::{DecoderParameters, EncoderParameters, RepresentationParameter};
use crate::error::ConvertError;
use crate::jpeg_lossless::{LosslessJpegEncoder, SV1_PREDICTOR};
use crate::uids;

/// Converts the DICOM file at `input` to the JPEG Lossless transfer syntax
/// and writes the complete Part 10 file to `output`.
///
/// The conversion is lossless: stored pixel values survive a round trip
/// exactly. On any failure no output file is produced.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<(), ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();

    if input.as_os_str().is_empty() {
        return Err(ConvertError::EmptyInputPath);
    }

    // Held for the whole call; released on every exit path.
    let codecs = CodecRegistration::register(
        DecoderParameters::default(),
        EncoderParameters::default(),
    );

    ensure_data_dictionary();

    let target_name = TransferSyntaxRegistry
        .get(uids::JPEG_LOSSLESS_SV1)
        .map(|ts| ts.name().to_string())
        .unwrap_or_else(|| uids::JPEG_LOSSLESS_SV1.to_string());

    info!("reading input file {}", input.display());
    let mut obj = open_file(input).map_err(|e| ConvertError::ReadFailed {
        path: input.display().to_string(),
        details: e.to_string(),
    })?;

    let source_ts_uid = trim_uid(&obj.meta().transfer_syntax);
    let source_encapsulated = TransferSyntaxRegistry
        .get(&source_ts_uid)
        .map(is_encapsulated)
        .unwrap_or(false);
    if source_encapsulated {
        info!(
            "DICOM file is already compressed, converting to uncompressed transfer syntax first"
        );
    }

    let sop_class_uid = trim_uid(&obj.meta().media_storage_sop_class_uid);
    if sop_class_uid == uids::MEDIA_STORAGE_DIRECTORY_STORAGE {
        info!("DICOMDIR files (Media Storage Directory Storage SOP Class) cannot be compressed!");
        return Err(ConvertError::DicomdirRejected);
    }

    // Both representation parameters are built; true lossless selects the
    // first unconditionally.
    let lossless = RepresentationParameter::lossless_default();
    let lossy = RepresentationParameter::lossy_default();
    let representation = if codecs.encoder().true_lossless {
        lossless
    } else {
        lossy
    };

    let pixels = extract_pixel_module(&obj, source_encapsulated, &target_name)?;

    info!("Convert DICOM file to compressed transfer syntax");
    let encoder = LosslessJpegEncoder::new(SV1_PREDICTOR, representation.point_transform())
        .with_optimized_huffman(codecs.encoder().optimize_huffman);

    let mut fragments: Vec<Vec<u8>> = Vec::with_capacity(pixels.frames.len());
    for frame in &pixels.frames {
        let mut stream = encoder.encode_frame(frame, &pixels.frame_info).map_err(|e| {
            ConvertError::ConversionNotPossible {
                transfer_syntax: target_name.clone(),
                details: e.to_string(),
            }
        })?;
        if stream.len() % 2 != 0 {
            stream.push(0);
        }
        fragments.push(stream);
    }
    info!("Output transfer syntax {} can be written", target_name);

    let offset_table: Vec<u32> = if codecs.encoder().create_offset_table {
        let mut offsets = Vec::with_capacity(fragments.len());
        let mut position = 0u32;
        for fragment in &fragments {
            offsets.push(position);
            // Item header of each fragment is 8 bytes.
            position += fragment.len() as u32 + 8;
        }
        offsets
    } else {
        Vec::new()
    };

    obj.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OB,
        Value::PixelSequence(PixelFragmentSequence::new(
            C::from(offset_table),
            C::from(fragments),
        )),
    ));
    if pixels.planar_rewritten {
        // Encapsulated syntaxes require color-by-pixel layout.
        obj.put(DataElement::new(
            tags::PLANAR_CONFIGURATION,
            VR::US,
            PrimitiveValue::from(0u16),
        ));
    }

    let target_ts = TransferSyntaxRegistry.get(uids::JPEG_LOSSLESS_SV1).ok_or(
        ConvertError::ConversionNotPossible {
            transfer_syntax: target_name.clone(),
            details: "target transfer syntax not present in the registry".into(),
        },
    )?;
    obj.meta_mut().set_transfer_syntax(target_ts);

    info!("creating output file {}", output.display());
    obj.write_to_file(output)
        .map_err(|e| ConvertError::WriteFailed {
            path: output.display().to_string(),
            details: e.to_string(),
        })?;

    info!("conversion successful");
    Ok(())
}

/// Pixel module attributes and per-frame sample buffers in encode order.
struct PixelModule {
    frame_info: FrameInfo,
    frames: Vec<Vec<u16>>,
    planar_rewritten: bool,
}

/// Reads the Image Pixel module and materializes every frame as interleaved
/// 16-bit stored values, decompressing encapsulated input along the way.
fn extract_pixel_module(
    obj: &DefaultDicomObject,
    source_encapsulated: bool,
    target_name: &str,
) -> Result<PixelModule, ConvertError> {
    let not_possible = |details: String| ConvertError::ConversionNotPossible {
        transfer_syntax: target_name.to_string(),
        details,
    };

    let decoded = obj.decode_pixel_data().map_err(|e| {
        if source_encapsulated {
            ConvertError::DecompressionFailed {
                details: e.to_string(),
            }
        } else {
            not_possible(e.to_string())
        }
    })?;

    let rows = required_u16(obj, tags::ROWS, "Rows", target_name)?;
    let columns = required_u16(obj, tags::COLUMNS, "Columns", target_name)?;
    let bits_allocated = required_u16(obj, tags::BITS_ALLOCATED, "Bits Allocated", target_name)?;
    let bits_stored = required_u16(obj, tags::BITS_STORED, "Bits Stored", target_name)?;
    let samples_per_pixel = optional_u16(obj, tags::SAMPLES_PER_PIXEL, 1);
    let planar_configuration = optional_u16(obj, tags::PLANAR_CONFIGURATION, 0);
    let photometric = obj
        .element_opt(tags::PHOTOMETRIC_INTERPRETATION)
        .ok()
        .flatten()
        .and_then(|e| e.to_str().ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "MONOCHROME2".to_string());
    debug!(
        "pixel module: {}x{} {}x{}bit {} spp={} planar={}",
        columns, rows, bits_allocated, bits_stored, photometric, samples_per_pixel, planar_configuration
    );

    let bytes_per_sample = match bits_allocated {
        8 => 1usize,
        16 => 2usize,
        other => {
            return Err(not_possible(format!("unsupported bits allocated {other}")));
        }
    };

    let number_of_frames = decoded.number_of_frames().max(1) as usize;
    let pixel_count = usize::from(rows) * usize::from(columns);
    let samples_per_frame = pixel_count * usize::from(samples_per_pixel);
    let frame_len = samples_per_frame * bytes_per_sample;

    let data = decoded.data();
    if data.len() < frame_len * number_of_frames {
        return Err(not_possible(format!(
            "pixel data holds {} bytes, geometry requires {}",
            data.len(),
            frame_len * number_of_frames
        )));
    }

    let interleave = planar_configuration == 1 && samples_per_pixel > 1;
    let mut frames = Vec::with_capacity(number_of_frames);
    for index in 0..number_of_frames {
        let raw = &data[index * frame_len..(index + 1) * frame_len];
        let mut samples: Vec<u16> = match bytes_per_sample {
            1 => raw.iter().map(|&b| u16::from(b)).collect(),
            _ => raw
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect(),
        };
        if interleave {
            samples = interleave_planes(&samples, pixel_count, usize::from(samples_per_pixel));
        }
        frames.push(samples);
    }

    Ok(PixelModule {
        frame_info: FrameInfo {
            width: u32::from(columns),
            height: u32::from(rows),
            bits_per_sample: bits_stored as u8,
            component_count: samples_per_pixel as u8,
        },
        frames,
        planar_rewritten: interleave,
    })
}

/// Rearranges color-by-plane samples into color-by-pixel order.
fn interleave_planes(samples: &[u16], pixel_count: usize, components: usize) -> Vec<u16> {
    let mut out = vec![0u16; samples.len()];
    for component in 0..components {
        for pixel in 0..pixel_count {
            out[pixel * components + component] = samples[component * pixel_count + pixel];
        }
    }
    out
}

fn required_u16(
    obj: &DefaultDicomObject,
    tag: Tag,
    name: &str,
    target_name: &str,
) -> Result<u16, ConvertError> {
    obj.element_opt(tag)
        .ok()
        .flatten()
        .and_then(|e| e.to_int::<u16>().ok())
        .ok_or_else(|| ConvertError::ConversionNotPossible {
            transfer_syntax: target_name.to_string(),
            details: format!("missing or invalid {name}"),
        })
}

fn optional_u16(obj: &DefaultDicomObject, tag: Tag, default: u16) -> u16 {
    obj.element_opt(tag)
        .ok()
        .flatten()
        .and_then(|e| e.to_int::<u16>().ok())
        .unwrap_or(default)
}

/// Whether a transfer syntax stores pixel data in encapsulated fragments.
fn is_encapsulated<D, R, W>(ts: &TransferSyntax<D, R, W>) -> bool {
    matches!(ts.codec(), Codec::EncapsulatedPixelData(..))
}

/// UID attributes are even-padded with NUL or space; comparisons need the
/// bare value.
fn trim_uid(uid: &str) -> String {
    uid.trim_end_matches(['\0', ' ']).to_string()
}

/// The standard dictionary is compiled in; if a well-known attribute does
/// not resolve something is wrong with the build, but conversion proceeds.
fn ensure_data_dictionary() {
    if StandardDataDictionary.by_tag(tags::SOP_CLASS_UID).is_none() {
        warn!("no data dictionary entries available, check the build of the standard dictionary");
    }
}
