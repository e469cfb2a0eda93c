//! Fixed codec parameter sets.
//!
//! The conversion entry point registers one decoder and one encoder
//! parameter set for the duration of a call. None of the values are
//! configurable from the outside; the lossy options are carried in full even
//! though the pipeline always selects the lossless representation.

/// Color-space handling while bringing compressed input back to a native
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecompressionColorSpaceConversion {
    /// Convert to the color space implied by the photometric interpretation.
    #[default]
    PhotometricInterpretation,
    /// Always convert YBR to RGB.
    AlwaysRgb,
    /// Leave the color space untouched.
    Never,
}

/// Color-space handling on the encode side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionColorSpaceConversion {
    /// Convert RGB to YCbCr for lossy encoding only.
    #[default]
    LossyYbr,
    /// Always convert RGB to YCbCr.
    AlwaysYbr,
    /// Leave the color space untouched.
    Never,
    /// Convert to monochrome.
    Monochrome,
}

/// Whether a new SOP Instance UID is assigned to the converted object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UidCreation {
    /// New UID for lossy output, original UID kept for lossless output.
    #[default]
    LossyOnly,
    Always,
    Never,
}

/// How multi-component pixel data is laid out after decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanarConfigurationPolicy {
    /// Keep the layout the decoded stream dictates.
    #[default]
    Auto,
    ColorByPixel,
    ColorByPlane,
}

/// Chroma subsampling factors for lossy encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubSampling {
    Factors444,
    #[default]
    Factors422,
    Factors411,
}

/// VOI windowing applied when lossy encoding reduces bit depth.
/// `window_type` 0 disables windowing; 1..=7 select the derivation modes
/// (stored window, min-max, histogram and friends) parameterized by
/// `window_parameter` or the explicit center/width pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowParameters {
    pub window_type: u32,
    pub window_parameter: u32,
    pub center: f64,
    pub width: f64,
}

/// Region of interest for lossy encoding; all zeros means the full frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoiParameters {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Parameters registered for the decode (decompression) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderParameters {
    pub color_space_conversion: DecompressionColorSpaceConversion,
    pub uid_creation: UidCreation,
    pub planar_configuration: PlanarConfigurationPolicy,
    /// Workaround for buggy predictor-6 images produced by some modalities.
    pub predictor6_workaround: bool,
    /// Workaround for the Cornell lossless-16-bit sign bug.
    pub cornell_workaround: bool,
    pub force_single_fragment_per_frame: bool,
}

impl Default for DecoderParameters {
    fn default() -> Self {
        Self {
            color_space_conversion: DecompressionColorSpaceConversion::default(),
            uid_creation: UidCreation::default(),
            planar_configuration: PlanarConfigurationPolicy::default(),
            predictor6_workaround: false,
            cornell_workaround: false,
            force_single_fragment_per_frame: false,
        }
    }
}

/// Parameters registered for the encode (compression) side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncoderParameters {
    pub color_space_conversion: CompressionColorSpaceConversion,
    pub uid_creation: UidCreation,
    pub optimize_huffman: bool,
    pub smoothing: u8,
    /// 0 derives the precision from Bits Stored.
    pub forced_bit_depth: u8,
    /// 0 means one unlimited fragment per frame.
    pub fragment_size: u32,
    pub create_offset_table: bool,
    pub sample_factors: SubSampling,
    pub use_ybr422: bool,
    pub secondary_capture: bool,
    pub window: WindowParameters,
    pub roi: RoiParameters,
    pub use_pixel_values: bool,
    pub use_modality_rescale: bool,
    pub accept_wrong_palette_tags: bool,
    pub acr_nema_compatibility: bool,
    /// Selects the lossless representation unconditionally.
    pub true_lossless: bool,
}

impl Default for EncoderParameters {
    fn default() -> Self {
        Self {
            color_space_conversion: CompressionColorSpaceConversion::default(),
            uid_creation: UidCreation::default(),
            optimize_huffman: true,
            smoothing: 0,
            forced_bit_depth: 0,
            fragment_size: 0,
            create_offset_table: true,
            sample_factors: SubSampling::default(),
            use_ybr422: true,
            secondary_capture: false,
            window: WindowParameters::default(),
            roi: RoiParameters::default(),
            use_pixel_values: true,
            use_modality_rescale: false,
            accept_wrong_palette_tags: false,
            acr_nema_compatibility: false,
            true_lossless: true,
        }
    }
}

/// Per-conversion representation parameter: lossless prediction settings or
/// lossy quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationParameter {
    Lossless { selection_value: u8, point_transform: u8 },
    Lossy { quality: u8 },
}

impl RepresentationParameter {
    /// The lossless parameter set used for the SV1 target syntax.
    pub fn lossless_default() -> Self {
        Self::Lossless {
            selection_value: 6,
            point_transform: 0,
        }
    }

    /// The lossy parameter set; constructed alongside the lossless one but
    /// never selected.
    pub fn lossy_default() -> Self {
        Self::Lossy { quality: 90 }
    }

    pub fn is_lossless(&self) -> bool {
        matches!(self, Self::Lossless { .. })
    }

    pub fn point_transform(&self) -> u8 {
        match self {
            Self::Lossless {
                point_transform, ..
            } => *point_transform,
            Self::Lossy { .. } => 0,
        }
    }
}
