//! Surface format axes of the texture descriptor.
//!
//! The hardware splits a pixel format into two orthogonal fields: the data
//! format (channel widths and packing) and the number format (how the bits
//! are interpreted). Host formats are resolved from the pair by the
//! translation layer's surface-format table.

/// Channel layout / packing of a surface, as encoded in descriptor words.
///
/// Unknown encodings decode to [`DataFormat::Invalid`]; the translation
/// layer's format table has no entry for it, so such descriptors fail with a
/// diagnosable error rather than sampling garbage.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    Invalid = 0,
    Format8 = 1,
    Format16 = 2,
    Format8_8 = 3,
    Format32 = 4,
    Format16_16 = 5,
    Format10_11_11 = 6,
    Format11_11_10 = 7,
    Format10_10_10_2 = 8,
    Format2_10_10_10 = 9,
    Format8_8_8_8 = 10,
    Format32_32 = 11,
    Format16_16_16_16 = 12,
    Format32_32_32 = 13,
    Format32_32_32_32 = 14,
    Format5_6_5 = 16,
    Format1_5_5_5 = 17,
    Format5_5_5_1 = 18,
    Format4_4_4_4 = 19,
    Format8_24 = 20,
    Format24_8 = 21,
    FormatX24_8_32 = 22,
    FormatBc1 = 35,
    FormatBc2 = 36,
    FormatBc3 = 37,
    FormatBc4 = 38,
    FormatBc5 = 39,
    FormatBc6 = 40,
    FormatBc7 = 41,
}

impl DataFormat {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Format8,
            2 => Self::Format16,
            3 => Self::Format8_8,
            4 => Self::Format32,
            5 => Self::Format16_16,
            6 => Self::Format10_11_11,
            7 => Self::Format11_11_10,
            8 => Self::Format10_10_10_2,
            9 => Self::Format2_10_10_10,
            10 => Self::Format8_8_8_8,
            11 => Self::Format32_32,
            12 => Self::Format16_16_16_16,
            13 => Self::Format32_32_32,
            14 => Self::Format32_32_32_32,
            16 => Self::Format5_6_5,
            17 => Self::Format1_5_5_5,
            18 => Self::Format5_5_5_1,
            19 => Self::Format4_4_4_4,
            20 => Self::Format8_24,
            21 => Self::Format24_8,
            22 => Self::FormatX24_8_32,
            35 => Self::FormatBc1,
            36 => Self::FormatBc2,
            37 => Self::FormatBc3,
            38 => Self::FormatBc4,
            39 => Self::FormatBc5,
            40 => Self::FormatBc6,
            41 => Self::FormatBc7,
            _ => Self::Invalid,
        }
    }
}

/// Numeric interpretation of a surface's channels.
///
/// Reserved encodings decode to [`NumberFormat::Reserved`], which no
/// surface-table entry uses.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    Unorm = 0,
    Snorm = 1,
    Uscaled = 2,
    Sscaled = 3,
    Uint = 4,
    Sint = 5,
    SnormNz = 6,
    Float = 7,
    Srgb = 9,
    Ubnorm = 10,
    Reserved = 15,
}

impl NumberFormat {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Unorm,
            1 => Self::Snorm,
            2 => Self::Uscaled,
            3 => Self::Sscaled,
            4 => Self::Uint,
            5 => Self::Sint,
            6 => Self::SnormNz,
            7 => Self::Float,
            9 => Self::Srgb,
            10 => Self::Ubnorm,
            _ => Self::Reserved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_format_round_trips_known_encodings() {
        for fmt in [
            DataFormat::Format8,
            DataFormat::Format8_8_8_8,
            DataFormat::Format32_32_32_32,
            DataFormat::FormatBc7,
        ] {
            assert_eq!(DataFormat::from_raw(fmt as u32), fmt);
        }
    }

    #[test]
    fn unknown_encodings_decode_to_sentinels() {
        assert_eq!(DataFormat::from_raw(15), DataFormat::Invalid);
        assert_eq!(DataFormat::from_raw(63), DataFormat::Invalid);
        assert_eq!(NumberFormat::from_raw(8), NumberFormat::Reserved);
        assert_eq!(NumberFormat::from_raw(11), NumberFormat::Reserved);
    }
}
