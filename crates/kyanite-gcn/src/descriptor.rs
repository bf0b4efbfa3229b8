//! Texture resource descriptors (T#).
//!
//! A T# is a 256-bit packed structure the GPU reads straight out of guest
//! memory. [`ImageDescriptor::from_dwords`] unpacks the fields the emulator
//! cares about; base addresses stay raw since the texture cache resolves them
//! against guest memory mappings itself.

use crate::format::{DataFormat, NumberFormat};

/// Dimensionality tag of an image resource.
///
/// Unknown encodings (including the buffer-resource range) decode to
/// [`ImageType::Invalid`].
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    Invalid = 0,
    Color1D = 8,
    Color2D = 9,
    Color3D = 10,
    Cube = 11,
    Color1DArray = 12,
    Color2DArray = 13,
    Color2DMsaa = 14,
    Color2DMsaaArray = 15,
}

impl ImageType {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            8 => Self::Color1D,
            9 => Self::Color2D,
            10 => Self::Color3D,
            11 => Self::Cube,
            12 => Self::Color1DArray,
            13 => Self::Color2DArray,
            14 => Self::Color2DMsaa,
            15 => Self::Color2DMsaaArray,
            _ => Self::Invalid,
        }
    }
}

/// Per-channel destination select.
///
/// Reserved encodings (2 and 3) read as zero on hardware.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompSwizzle {
    Zero = 0,
    One = 1,
    Red = 4,
    Green = 5,
    Blue = 6,
    Alpha = 7,
}

impl CompSwizzle {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::One,
            4 => Self::Red,
            5 => Self::Green,
            6 => Self::Blue,
            7 => Self::Alpha,
            _ => Self::Zero,
        }
    }
}

/// Four-channel component remap in RGBA output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompMapping {
    pub r: CompSwizzle,
    pub g: CompSwizzle,
    pub b: CompSwizzle,
    pub a: CompSwizzle,
}

impl CompMapping {
    pub const IDENTITY: Self = Self {
        r: CompSwizzle::Red,
        g: CompSwizzle::Green,
        b: CompSwizzle::Blue,
        a: CompSwizzle::Alpha,
    };
}

impl Default for CompMapping {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Decoded T# image descriptor.
///
/// Range fields keep the hardware convention of inclusive `base`/`last`
/// pairs; a valid descriptor always satisfies `last_level >= base_level` and
/// `last_array >= base_array`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub base_address: u64,
    pub min_lod: u32,
    pub data_format: DataFormat,
    pub number_format: NumberFormat,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub pitch: u32,
    pub dst_select: CompMapping,
    pub base_level: u32,
    pub last_level: u32,
    pub tiling_index: u32,
    pub ty: ImageType,
    pub base_array: u32,
    pub last_array: u32,
    /// Dimensionality the shader binds the resource with, when it differs
    /// from the descriptor's own tag (e.g. a cube bound as a 2D array).
    pub bound_type: Option<ImageType>,
}

fn bits(word: u32, hi: u32, lo: u32) -> u32 {
    (word >> lo) & ((1u32 << (hi - lo + 1)) - 1)
}

impl ImageDescriptor {
    /// Unpack a descriptor from its eight hardware dwords.
    pub fn from_dwords(dwords: &[u32; 8]) -> Self {
        let base_lo = dwords[0] as u64;
        let base_hi = bits(dwords[1], 7, 0) as u64;
        Self {
            base_address: (base_hi << 32) | base_lo,
            min_lod: bits(dwords[1], 19, 8),
            data_format: DataFormat::from_raw(bits(dwords[1], 25, 20)),
            number_format: NumberFormat::from_raw(bits(dwords[1], 29, 26)),
            width: bits(dwords[2], 13, 0) + 1,
            height: bits(dwords[2], 27, 14) + 1,
            dst_select: CompMapping {
                r: CompSwizzle::from_raw(bits(dwords[3], 2, 0)),
                g: CompSwizzle::from_raw(bits(dwords[3], 5, 3)),
                b: CompSwizzle::from_raw(bits(dwords[3], 8, 6)),
                a: CompSwizzle::from_raw(bits(dwords[3], 11, 9)),
            },
            base_level: bits(dwords[3], 15, 12),
            last_level: bits(dwords[3], 19, 16),
            tiling_index: bits(dwords[3], 24, 20),
            ty: ImageType::from_raw(bits(dwords[3], 31, 28)),
            depth: bits(dwords[4], 12, 0) + 1,
            pitch: bits(dwords[4], 26, 13) + 1,
            base_array: bits(dwords[5], 12, 0),
            last_array: bits(dwords[5], 25, 13),
            bound_type: None,
        }
    }

    /// Unpack a descriptor from its guest-memory byte representation.
    ///
    /// Guest and host are both little-endian, so the bytes reinterpret
    /// directly as dwords.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let dwords: [u32; 8] = bytemuck::cast(*bytes);
        Self::from_dwords(&dwords)
    }

    /// Dimensionality the resource is accessed with: the shader's bound type
    /// when one was recorded, the descriptor's own tag otherwise.
    pub fn image_type(&self) -> ImageType {
        self.bound_type.unwrap_or(self.ty)
    }

    pub fn num_levels(&self) -> u32 {
        self.last_level - self.base_level + 1
    }

    pub fn num_layers(&self) -> u32 {
        self.last_array - self.base_array + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_dword3(
        dst_sel: [u32; 4],
        base_level: u32,
        last_level: u32,
        tiling: u32,
        ty: ImageType,
    ) -> u32 {
        dst_sel[0]
            | (dst_sel[1] << 3)
            | (dst_sel[2] << 6)
            | (dst_sel[3] << 9)
            | (base_level << 12)
            | (last_level << 16)
            | (tiling << 20)
            | ((ty as u32) << 28)
    }

    #[test]
    fn from_dwords_unpacks_format_and_ranges() {
        let mut dwords = [0u32; 8];
        dwords[0] = 0xdead_0000;
        // Base address hi = 0x02, min_lod = 0, dfmt = 8_8_8_8, nfmt = srgb.
        dwords[1] = 0x02 | ((DataFormat::Format8_8_8_8 as u32) << 20) | ((NumberFormat::Srgb as u32) << 26);
        dwords[2] = (512 - 1) | ((256 - 1) << 14);
        dwords[3] = pack_dword3([4, 5, 6, 7], 1, 4, 2, ImageType::Color2DArray);
        dwords[4] = (1 - 1) | ((512 - 1) << 13);
        dwords[5] = 3 | (10 << 13);

        let desc = ImageDescriptor::from_dwords(&dwords);
        assert_eq!(desc.base_address, 0x2_dead_0000);
        assert_eq!(desc.data_format, DataFormat::Format8_8_8_8);
        assert_eq!(desc.number_format, NumberFormat::Srgb);
        assert_eq!((desc.width, desc.height), (512, 256));
        assert_eq!(desc.dst_select, CompMapping::IDENTITY);
        assert_eq!((desc.base_level, desc.last_level), (1, 4));
        assert_eq!(desc.ty, ImageType::Color2DArray);
        assert_eq!((desc.base_array, desc.last_array), (3, 10));
        assert_eq!(desc.num_levels(), 4);
        assert_eq!(desc.num_layers(), 8);
    }

    #[test]
    fn from_bytes_matches_from_dwords() {
        let mut dwords = [0u32; 8];
        dwords[1] = (DataFormat::Format32 as u32) << 20 | (NumberFormat::Float as u32) << 26;
        dwords[3] = pack_dword3([4, 0, 0, 1], 0, 0, 0, ImageType::Color2D);

        let bytes: [u8; 32] = bytemuck::cast(dwords);
        assert_eq!(ImageDescriptor::from_bytes(&bytes), ImageDescriptor::from_dwords(&dwords));
    }

    #[test]
    fn bound_type_overrides_descriptor_tag() {
        let mut dwords = [0u32; 8];
        dwords[3] = pack_dword3([4, 5, 6, 7], 0, 0, 0, ImageType::Cube);
        let mut desc = ImageDescriptor::from_dwords(&dwords);
        assert_eq!(desc.image_type(), ImageType::Cube);
        desc.bound_type = Some(ImageType::Color2DArray);
        assert_eq!(desc.image_type(), ImageType::Color2DArray);
    }
}
