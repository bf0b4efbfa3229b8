//! Surface and depth-target format tables.
//!
//! The hardware addresses pixel formats through two orthogonal descriptor
//! fields (data format × number format); depth targets use a separate pair of
//! z/stencil format fields. These tables map each supported combination onto
//! a [`wgpu::TextureFormat`] together with the usages the host format must
//! support for the resource to work at all. Pairs without an entry are
//! unsupported and surface as [`TranslateError`], never substituted.
//!
//! Packed 16-bit color formats (5_6_5, 4_4_4_4, 1_5_5_5) and 96-bit
//! three-channel formats have no wgpu encoding and are intentionally absent.

use kyanite_gcn::{DataFormat, NumberFormat, StencilFormat, SwapMode, ZFormat};

use crate::error::TranslateError;

/// One surface-format table entry.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceFormatInfo {
    pub data_format: DataFormat,
    pub number_format: NumberFormat,
    pub format: wgpu::TextureFormat,
    /// Usages the host format must support for this surface to be usable.
    pub required_usages: wgpu::TextureUsages,
}

const fn sampled() -> wgpu::TextureUsages {
    wgpu::TextureUsages::TEXTURE_BINDING
}

const fn renderable() -> wgpu::TextureUsages {
    wgpu::TextureUsages::TEXTURE_BINDING.union(wgpu::TextureUsages::RENDER_ATTACHMENT)
}

const fn storage() -> wgpu::TextureUsages {
    wgpu::TextureUsages::TEXTURE_BINDING
        .union(wgpu::TextureUsages::RENDER_ATTACHMENT)
        .union(wgpu::TextureUsages::STORAGE_BINDING)
}

const fn entry(
    data_format: DataFormat,
    number_format: NumberFormat,
    format: wgpu::TextureFormat,
    required_usages: wgpu::TextureUsages,
) -> SurfaceFormatInfo {
    SurfaceFormatInfo {
        data_format,
        number_format,
        format,
        required_usages,
    }
}

/// Surface-format table, keyed by (data format, number format).
///
/// Keys are unique; `surface_formats_have_unique_keys` below enforces it.
pub const SURFACE_FORMATS: &[SurfaceFormatInfo] = &[
    // 8-bit.
    entry(DataFormat::Format8, NumberFormat::Unorm, wgpu::TextureFormat::R8Unorm, renderable()),
    entry(DataFormat::Format8, NumberFormat::Snorm, wgpu::TextureFormat::R8Snorm, sampled()),
    entry(DataFormat::Format8, NumberFormat::Uint, wgpu::TextureFormat::R8Uint, renderable()),
    entry(DataFormat::Format8, NumberFormat::Sint, wgpu::TextureFormat::R8Sint, renderable()),
    // 16-bit.
    entry(DataFormat::Format16, NumberFormat::Unorm, wgpu::TextureFormat::R16Unorm, sampled()),
    entry(DataFormat::Format16, NumberFormat::Snorm, wgpu::TextureFormat::R16Snorm, sampled()),
    entry(DataFormat::Format16, NumberFormat::Uint, wgpu::TextureFormat::R16Uint, renderable()),
    entry(DataFormat::Format16, NumberFormat::Sint, wgpu::TextureFormat::R16Sint, renderable()),
    entry(DataFormat::Format16, NumberFormat::Float, wgpu::TextureFormat::R16Float, renderable()),
    // 8_8.
    entry(DataFormat::Format8_8, NumberFormat::Unorm, wgpu::TextureFormat::Rg8Unorm, renderable()),
    entry(DataFormat::Format8_8, NumberFormat::Snorm, wgpu::TextureFormat::Rg8Snorm, sampled()),
    entry(DataFormat::Format8_8, NumberFormat::Uint, wgpu::TextureFormat::Rg8Uint, renderable()),
    entry(DataFormat::Format8_8, NumberFormat::Sint, wgpu::TextureFormat::Rg8Sint, renderable()),
    // 32-bit.
    entry(DataFormat::Format32, NumberFormat::Uint, wgpu::TextureFormat::R32Uint, storage()),
    entry(DataFormat::Format32, NumberFormat::Sint, wgpu::TextureFormat::R32Sint, storage()),
    entry(DataFormat::Format32, NumberFormat::Float, wgpu::TextureFormat::R32Float, storage()),
    // 16_16.
    entry(DataFormat::Format16_16, NumberFormat::Unorm, wgpu::TextureFormat::Rg16Unorm, sampled()),
    entry(DataFormat::Format16_16, NumberFormat::Snorm, wgpu::TextureFormat::Rg16Snorm, sampled()),
    entry(DataFormat::Format16_16, NumberFormat::Uint, wgpu::TextureFormat::Rg16Uint, renderable()),
    entry(DataFormat::Format16_16, NumberFormat::Sint, wgpu::TextureFormat::Rg16Sint, renderable()),
    entry(DataFormat::Format16_16, NumberFormat::Float, wgpu::TextureFormat::Rg16Float, renderable()),
    // Packed small-float.
    entry(DataFormat::Format11_11_10, NumberFormat::Float, wgpu::TextureFormat::Rg11b10Float, sampled()),
    // 10:10:10:2.
    entry(DataFormat::Format2_10_10_10, NumberFormat::Unorm, wgpu::TextureFormat::Rgb10a2Unorm, renderable()),
    entry(DataFormat::Format2_10_10_10, NumberFormat::Uint, wgpu::TextureFormat::Rgb10a2Uint, renderable()),
    // 8_8_8_8.
    entry(DataFormat::Format8_8_8_8, NumberFormat::Unorm, wgpu::TextureFormat::Rgba8Unorm, storage()),
    entry(DataFormat::Format8_8_8_8, NumberFormat::Snorm, wgpu::TextureFormat::Rgba8Snorm, sampled()),
    entry(DataFormat::Format8_8_8_8, NumberFormat::Uint, wgpu::TextureFormat::Rgba8Uint, renderable()),
    entry(DataFormat::Format8_8_8_8, NumberFormat::Sint, wgpu::TextureFormat::Rgba8Sint, renderable()),
    entry(DataFormat::Format8_8_8_8, NumberFormat::Srgb, wgpu::TextureFormat::Rgba8UnormSrgb, renderable()),
    // 32_32.
    entry(DataFormat::Format32_32, NumberFormat::Uint, wgpu::TextureFormat::Rg32Uint, renderable()),
    entry(DataFormat::Format32_32, NumberFormat::Sint, wgpu::TextureFormat::Rg32Sint, renderable()),
    entry(DataFormat::Format32_32, NumberFormat::Float, wgpu::TextureFormat::Rg32Float, renderable()),
    // 16_16_16_16.
    entry(DataFormat::Format16_16_16_16, NumberFormat::Unorm, wgpu::TextureFormat::Rgba16Unorm, sampled()),
    entry(DataFormat::Format16_16_16_16, NumberFormat::Snorm, wgpu::TextureFormat::Rgba16Snorm, sampled()),
    entry(DataFormat::Format16_16_16_16, NumberFormat::Uint, wgpu::TextureFormat::Rgba16Uint, renderable()),
    entry(DataFormat::Format16_16_16_16, NumberFormat::Sint, wgpu::TextureFormat::Rgba16Sint, renderable()),
    entry(DataFormat::Format16_16_16_16, NumberFormat::Float, wgpu::TextureFormat::Rgba16Float, storage()),
    // 32_32_32_32.
    entry(DataFormat::Format32_32_32_32, NumberFormat::Uint, wgpu::TextureFormat::Rgba32Uint, renderable()),
    entry(DataFormat::Format32_32_32_32, NumberFormat::Sint, wgpu::TextureFormat::Rgba32Sint, renderable()),
    entry(DataFormat::Format32_32_32_32, NumberFormat::Float, wgpu::TextureFormat::Rgba32Float, storage()),
    // Block-compressed.
    entry(DataFormat::FormatBc1, NumberFormat::Unorm, wgpu::TextureFormat::Bc1RgbaUnorm, sampled()),
    entry(DataFormat::FormatBc1, NumberFormat::Srgb, wgpu::TextureFormat::Bc1RgbaUnormSrgb, sampled()),
    entry(DataFormat::FormatBc2, NumberFormat::Unorm, wgpu::TextureFormat::Bc2RgbaUnorm, sampled()),
    entry(DataFormat::FormatBc2, NumberFormat::Srgb, wgpu::TextureFormat::Bc2RgbaUnormSrgb, sampled()),
    entry(DataFormat::FormatBc3, NumberFormat::Unorm, wgpu::TextureFormat::Bc3RgbaUnorm, sampled()),
    entry(DataFormat::FormatBc3, NumberFormat::Srgb, wgpu::TextureFormat::Bc3RgbaUnormSrgb, sampled()),
    entry(DataFormat::FormatBc4, NumberFormat::Unorm, wgpu::TextureFormat::Bc4RUnorm, sampled()),
    entry(DataFormat::FormatBc4, NumberFormat::Snorm, wgpu::TextureFormat::Bc4RSnorm, sampled()),
    entry(DataFormat::FormatBc5, NumberFormat::Unorm, wgpu::TextureFormat::Bc5RgUnorm, sampled()),
    entry(DataFormat::FormatBc5, NumberFormat::Snorm, wgpu::TextureFormat::Bc5RgSnorm, sampled()),
    entry(DataFormat::FormatBc6, NumberFormat::Unorm, wgpu::TextureFormat::Bc6hRgbUfloat, sampled()),
    entry(DataFormat::FormatBc6, NumberFormat::Snorm, wgpu::TextureFormat::Bc6hRgbFloat, sampled()),
    entry(DataFormat::FormatBc7, NumberFormat::Unorm, wgpu::TextureFormat::Bc7RgbaUnorm, sampled()),
    entry(DataFormat::FormatBc7, NumberFormat::Srgb, wgpu::TextureFormat::Bc7RgbaUnormSrgb, sampled()),
];

/// Look up the full table entry for a (data format, number format) pair.
pub fn surface_format_info(
    data_format: DataFormat,
    number_format: NumberFormat,
) -> Result<&'static SurfaceFormatInfo, TranslateError> {
    SURFACE_FORMATS
        .iter()
        .find(|info| info.data_format == data_format && info.number_format == number_format)
        .ok_or(TranslateError::UnsupportedSurfaceFormat {
            data_format,
            number_format,
        })
}

/// Resolve a (data format, number format) pair to its wgpu format.
pub fn surface_format(
    data_format: DataFormat,
    number_format: NumberFormat,
) -> Result<wgpu::TextureFormat, TranslateError> {
    surface_format_info(data_format, number_format).map(|info| info.format)
}

/// One depth-format table entry.
#[derive(Debug, Clone, Copy)]
pub struct DepthFormatInfo {
    pub z_format: ZFormat,
    pub stencil_format: StencilFormat,
    pub format: wgpu::TextureFormat,
    pub required_usages: wgpu::TextureUsages,
}

/// Depth-target format table, keyed by (z format, stencil format).
///
/// The hardware has no 16-bit depth + stencil host encoding in wgpu, so
/// Z16 + S8 lands on `Depth24PlusStencil8` (depth precision only widens).
pub const DEPTH_FORMATS: &[DepthFormatInfo] = &[
    DepthFormatInfo {
        z_format: ZFormat::Z16,
        stencil_format: StencilFormat::Invalid,
        format: wgpu::TextureFormat::Depth16Unorm,
        required_usages: renderable(),
    },
    DepthFormatInfo {
        z_format: ZFormat::Z16,
        stencil_format: StencilFormat::Stencil8,
        format: wgpu::TextureFormat::Depth24PlusStencil8,
        required_usages: renderable(),
    },
    DepthFormatInfo {
        z_format: ZFormat::Z32Float,
        stencil_format: StencilFormat::Invalid,
        format: wgpu::TextureFormat::Depth32Float,
        required_usages: renderable(),
    },
    DepthFormatInfo {
        z_format: ZFormat::Z32Float,
        stencil_format: StencilFormat::Stencil8,
        format: wgpu::TextureFormat::Depth32FloatStencil8,
        required_usages: renderable(),
    },
    DepthFormatInfo {
        z_format: ZFormat::Invalid,
        stencil_format: StencilFormat::Stencil8,
        format: wgpu::TextureFormat::Stencil8,
        required_usages: renderable(),
    },
];

/// Resolve a (z format, stencil format) pair to its wgpu format.
pub fn depth_format(
    z_format: ZFormat,
    stencil_format: StencilFormat,
) -> Result<wgpu::TextureFormat, TranslateError> {
    DEPTH_FORMATS
        .iter()
        .find(|info| info.z_format == z_format && info.stencil_format == stencil_format)
        .map(|info| info.format)
        .ok_or(TranslateError::UnsupportedDepthFormat {
            z_format,
            stencil_format,
        })
}

/// Apply a color target's channel-swap mode to its resolved base format.
///
/// Alternate swap selects the BGRA-ordered sibling of an RGBA format (and
/// vice versa). The reverse modes have no wgpu encoding; those targets keep
/// their base format and the render path swizzles in the shader.
pub fn adjust_color_buffer_format(
    base_format: wgpu::TextureFormat,
    comp_swap: SwapMode,
) -> wgpu::TextureFormat {
    match comp_swap {
        SwapMode::Standard => base_format,
        SwapMode::Alternate => match base_format {
            wgpu::TextureFormat::Rgba8Unorm => wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Rgba8UnormSrgb => wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Bgra8Unorm => wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb => wgpu::TextureFormat::Rgba8UnormSrgb,
            other => other,
        },
        SwapMode::StandardReverse | SwapMode::AlternateReverse => base_format,
    }
}

/// Promote a plain numeric format to its depth-typed equivalent.
///
/// Called only for images the shader reads with depth semantics; the caller
/// guarantees the format is one a depth image can be described with. Anything
/// else reaching this function means upstream decoding is broken.
pub fn promote_format_to_depth(format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    match format {
        wgpu::TextureFormat::R32Float => wgpu::TextureFormat::Depth32Float,
        wgpu::TextureFormat::R16Unorm => wgpu::TextureFormat::Depth16Unorm,
        wgpu::TextureFormat::Rgba8Unorm | wgpu::TextureFormat::Rgba8UnormSrgb => {
            wgpu::TextureFormat::R32Uint
        }
        _ => unreachable!("format {format:?} is not depth-promotable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn surface_formats_have_unique_keys() {
        let mut seen = HashSet::new();
        for info in SURFACE_FORMATS {
            assert!(
                seen.insert((info.data_format, info.number_format)),
                "duplicate surface table key {:?}/{:?}",
                info.data_format,
                info.number_format,
            );
        }
    }

    #[test]
    fn depth_formats_have_unique_keys() {
        let mut seen = HashSet::new();
        for info in DEPTH_FORMATS {
            assert!(seen.insert((info.z_format, info.stencil_format)));
        }
    }

    #[test]
    fn surface_format_resolves_documented_pairs() {
        assert_eq!(
            surface_format(DataFormat::Format8_8_8_8, NumberFormat::Srgb).unwrap(),
            wgpu::TextureFormat::Rgba8UnormSrgb
        );
        assert_eq!(
            surface_format(DataFormat::Format32, NumberFormat::Float).unwrap(),
            wgpu::TextureFormat::R32Float
        );
        assert_eq!(
            surface_format(DataFormat::FormatBc7, NumberFormat::Srgb).unwrap(),
            wgpu::TextureFormat::Bc7RgbaUnormSrgb
        );
    }

    #[test]
    fn surface_format_miss_is_diagnosable() {
        let err = surface_format(DataFormat::Format5_6_5, NumberFormat::Unorm).unwrap_err();
        assert_eq!(
            err,
            TranslateError::UnsupportedSurfaceFormat {
                data_format: DataFormat::Format5_6_5,
                number_format: NumberFormat::Unorm,
            }
        );

        assert!(surface_format(DataFormat::Invalid, NumberFormat::Unorm).is_err());
        assert!(surface_format(DataFormat::Format8_8_8_8, NumberFormat::Reserved).is_err());
    }

    #[test]
    fn depth_format_resolves_plane_combinations() {
        assert_eq!(
            depth_format(ZFormat::Z32Float, StencilFormat::Invalid).unwrap(),
            wgpu::TextureFormat::Depth32Float
        );
        assert_eq!(
            depth_format(ZFormat::Z32Float, StencilFormat::Stencil8).unwrap(),
            wgpu::TextureFormat::Depth32FloatStencil8
        );
        assert_eq!(
            depth_format(ZFormat::Z16, StencilFormat::Invalid).unwrap(),
            wgpu::TextureFormat::Depth16Unorm
        );
        assert!(depth_format(ZFormat::Invalid, StencilFormat::Invalid).is_err());
    }

    #[test]
    fn alternate_swap_selects_bgra_sibling() {
        assert_eq!(
            adjust_color_buffer_format(wgpu::TextureFormat::Rgba8Unorm, SwapMode::Alternate),
            wgpu::TextureFormat::Bgra8Unorm
        );
        assert_eq!(
            adjust_color_buffer_format(wgpu::TextureFormat::Bgra8UnormSrgb, SwapMode::Alternate),
            wgpu::TextureFormat::Rgba8UnormSrgb
        );
        // No BGRA sibling: the format passes through.
        assert_eq!(
            adjust_color_buffer_format(wgpu::TextureFormat::Rg16Float, SwapMode::Alternate),
            wgpu::TextureFormat::Rg16Float
        );
        assert_eq!(
            adjust_color_buffer_format(wgpu::TextureFormat::Rgba8Unorm, SwapMode::Standard),
            wgpu::TextureFormat::Rgba8Unorm
        );
    }

    #[test]
    fn promote_format_to_depth_covers_the_promotable_set() {
        assert_eq!(
            promote_format_to_depth(wgpu::TextureFormat::R32Float),
            wgpu::TextureFormat::Depth32Float
        );
        assert_eq!(
            promote_format_to_depth(wgpu::TextureFormat::R16Unorm),
            wgpu::TextureFormat::Depth16Unorm
        );
        assert_eq!(
            promote_format_to_depth(wgpu::TextureFormat::Rgba8Unorm),
            wgpu::TextureFormat::R32Uint
        );
        assert_eq!(
            promote_format_to_depth(wgpu::TextureFormat::Rgba8UnormSrgb),
            wgpu::TextureFormat::R32Uint
        );
    }

    #[test]
    #[should_panic(expected = "not depth-promotable")]
    fn promote_format_to_depth_rejects_everything_else() {
        promote_format_to_depth(wgpu::TextureFormat::Rg16Float);
    }
}
