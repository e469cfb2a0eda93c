/// Smallest sample precision a lossless frame header may declare.
pub const MINIMUM_BITS_PER_SAMPLE: u8 = 2;

/// Largest sample precision a lossless frame header may declare.
pub const MAXIMUM_BITS_PER_SAMPLE: u8 = 16;

/// Frame dimensions are 16-bit fields in the SOF segment.
pub const MAXIMUM_DIMENSION: u32 = 65_535;
