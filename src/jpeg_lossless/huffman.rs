//! Huffman coding for the lossless process: difference categories, bit
//! packing with byte stuffing, and table construction in both DHT form and
//! the two-pass optimized form of ISO/IEC 10918-1 annex K.

/// Highest difference category (SSSS) used by 16-bit lossless coding.
pub const MAX_CATEGORY: u8 = 16;

/// Number of difference symbols: categories 0 through 16.
pub const DIFF_SYMBOL_COUNT: usize = MAX_CATEGORY as usize + 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCode {
    pub value: u16,
    pub length: u8,
}

/// Encode-side Huffman table: DHT `BITS`/`HUFFVAL` lists plus the expanded
/// per-symbol code assignments.
#[derive(Debug, Clone)]
pub struct HuffmanTable {
    pub codes: [HuffmanCode; DIFF_SYMBOL_COUNT],
    pub lengths: [u8; 16],
    pub values: Vec<u8>,
}

impl HuffmanTable {
    /// Builds the canonical code assignments from DHT `BITS` and `HUFFVAL`
    /// lists (C.2).
    pub fn build_from_dht(lengths: &[u8; 16], values: &[u8]) -> Self {
        let mut codes = [HuffmanCode::default(); DIFF_SYMBOL_COUNT];
        let mut code = 0u16;
        let mut index = 0usize;
        for (i, &count) in lengths.iter().enumerate() {
            for _ in 0..count {
                let symbol = usize::from(values[index]);
                codes[symbol] = HuffmanCode {
                    value: code,
                    length: (i + 1) as u8,
                };
                code += 1;
                index += 1;
            }
            code <<= 1;
        }
        HuffmanTable {
            codes,
            lengths: *lengths,
            values: values.to_vec(),
        }
    }

    /// Fixed fallback table covering every category with near-equal code
    /// lengths, used when Huffman optimization is disabled.
    pub fn balanced() -> Self {
        Self::build_optimized(&[1; DIFF_SYMBOL_COUNT])
    }

    /// Builds an optimized table from per-category frequencies following the
    /// flow charts of annex K.2/K.3: pairwise merge of the two least frequent
    /// symbols, 16-bit length limiting, and a reserved slot that keeps the
    /// all-ones code unassigned.
    pub fn build_optimized(frequencies: &[u32; DIFF_SYMBOL_COUNT]) -> Self {
        const SLOTS: usize = DIFF_SYMBOL_COUNT + 1;
        const UNCHAINED: usize = usize::MAX;

        let mut freq = [0u64; SLOTS];
        for (slot, &count) in frequencies.iter().enumerate() {
            freq[slot] = u64::from(count);
        }
        // Reserved slot with the lowest nonzero frequency.
        freq[SLOTS - 1] = 1;

        let mut code_size = [0u8; SLOTS];
        let mut others = [UNCHAINED; SLOTS];

        loop {
            let mut c1 = UNCHAINED;
            let mut v1 = u64::MAX;
            for (slot, &count) in freq.iter().enumerate() {
                if count > 0 && count <= v1 {
                    v1 = count;
                    c1 = slot;
                }
            }
            let mut c2 = UNCHAINED;
            let mut v2 = u64::MAX;
            for (slot, &count) in freq.iter().enumerate() {
                if slot != c1 && count > 0 && count <= v2 {
                    v2 = count;
                    c2 = slot;
                }
            }
            if c2 == UNCHAINED {
                break;
            }

            freq[c1] += freq[c2];
            freq[c2] = 0;

            code_size[c1] += 1;
            while others[c1] != UNCHAINED {
                c1 = others[c1];
                code_size[c1] += 1;
            }
            others[c1] = c2;
            code_size[c2] += 1;
            while others[c2] != UNCHAINED {
                c2 = others[c2];
                code_size[c2] += 1;
            }
        }

        // Lengths above 32 cannot occur with this few symbols.
        let mut bits = [0u8; 33];
        for &size in &code_size {
            if size > 0 {
                bits[usize::from(size)] += 1;
            }
        }

        // Limit code lengths to 16 bits (K.3, figure K.3).
        let mut i = 32;
        while i > 16 {
            while bits[i] > 0 {
                let mut j = i - 2;
                while bits[j] == 0 {
                    j -= 1;
                }
                bits[i] -= 2;
                bits[i - 1] += 1;
                bits[j + 1] += 2;
                bits[j] -= 1;
            }
            i -= 1;
        }

        // Drop the reserved slot's code from the longest used length.
        let mut i = 16;
        while i > 0 {
            if bits[i] > 0 {
                bits[i] -= 1;
                break;
            }
            i -= 1;
        }

        // Symbols ordered by code size, then value; the reserved slot is
        // excluded and its place absorbed by the decrement above.
        let mut symbols: Vec<(u8, usize)> = (0..DIFF_SYMBOL_COUNT)
            .filter(|&symbol| code_size[symbol] > 0)
            .map(|symbol| (code_size[symbol], symbol))
            .collect();
        symbols.sort_unstable();
        let values: Vec<u8> = symbols.iter().map(|&(_, symbol)| symbol as u8).collect();

        let mut lengths = [0u8; 16];
        lengths.copy_from_slice(&bits[1..=16]);

        Self::build_from_dht(&lengths, &values)
    }
}

/// Magnitude category (SSSS) of a difference in `-32767..=32767`.
pub fn category_of(diff: i32) -> u8 {
    (32 - diff.unsigned_abs().leading_zeros()) as u8
}

/// Extra bits appended after the category code (F.1.2.1.1). Negative
/// differences are represented in one's complement of the magnitude.
pub fn diff_bits(diff: i32, category: u8) -> (u16, u8) {
    if category == 0 {
        return (0, 0);
    }
    if diff >= 0 {
        (diff as u16, category)
    } else {
        ((diff + (1 << category) - 1) as u16, category)
    }
}

/// Packs entropy-coded bits into bytes, inserting a zero byte after every
/// 0xFF (byte stuffing, F.1.2.3).
#[derive(Debug, Default)]
pub struct JpegBitWriter {
    bytes: Vec<u8>,
    bit_buffer: u32,
    bit_count: u8,
}

impl JpegBitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bits(&mut self, value: u16, length: u8) {
        if length == 0 {
            return;
        }
        let mask = (1u32 << length) - 1;
        self.bit_buffer = (self.bit_buffer << length) | (u32::from(value) & mask);
        self.bit_count += length;
        while self.bit_count >= 8 {
            self.bit_count -= 8;
            let byte = ((self.bit_buffer >> self.bit_count) & 0xFF) as u8;
            self.emit(byte);
        }
        self.bit_buffer &= (1u32 << self.bit_count) - 1;
    }

    /// Pads the final partial byte with one-bits.
    pub fn flush(&mut self) {
        if self.bit_count > 0 {
            let padding = 8 - self.bit_count;
            self.write_bits((1u16 << padding) - 1, padding);
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn emit(&mut self, byte: u8) {
        self.bytes.push(byte);
        if byte == 0xFF {
            self.bytes.push(0x00);
        }
    }
}
