//! Device capability wrapper.
//!
//! The same logical view format can need a different concrete encoding
//! depending on which optional wgpu features the device was created with.
//! [`DeviceCaps`] records those features once and answers
//! best-supported-format queries; the decision logic is a pure function of
//! the feature set so it can be tested without an adapter.

/// A `wgpu::Device` plus the features it was created with.
pub struct DeviceCaps {
    device: wgpu::Device,
    features: wgpu::Features,
}

impl DeviceCaps {
    pub fn new(device: wgpu::Device) -> Self {
        let features = device.features();
        Self { device, features }
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn features(&self) -> wgpu::Features {
        self.features
    }

    /// Best concrete format for `format` given the enabled feature set and
    /// the usages the caller needs from it.
    pub fn supported_format(
        &self,
        format: wgpu::TextureFormat,
        required_usages: wgpu::TextureUsages,
    ) -> wgpu::TextureFormat {
        supported_format_for_features(self.features, format, required_usages)
    }
}

/// Feature-driven format fallbacks.
///
/// Each arm is an explicit, documented substitution; formats without a
/// listed fallback are returned unchanged and wgpu validation has the final
/// word.
pub(crate) fn supported_format_for_features(
    features: wgpu::Features,
    format: wgpu::TextureFormat,
    required_usages: wgpu::TextureUsages,
) -> wgpu::TextureFormat {
    use wgpu::TextureFormat as Tf;

    match format {
        // 32-bit depth + stencil is optional; 24-bit depth + stencil is core.
        Tf::Depth32FloatStencil8 if !features.contains(wgpu::Features::DEPTH32FLOAT_STENCIL8) => {
            Tf::Depth24PlusStencil8
        }
        // 16-bit normalized color formats are optional; fall back to the
        // float siblings (wider range, same channel layout).
        Tf::R16Unorm | Tf::R16Snorm
            if !features.contains(wgpu::Features::TEXTURE_FORMAT_16BIT_NORM) =>
        {
            Tf::R16Float
        }
        Tf::Rg16Unorm | Tf::Rg16Snorm
            if !features.contains(wgpu::Features::TEXTURE_FORMAT_16BIT_NORM) =>
        {
            Tf::Rg16Float
        }
        Tf::Rgba16Unorm | Tf::Rgba16Snorm
            if !features.contains(wgpu::Features::TEXTURE_FORMAT_16BIT_NORM) =>
        {
            Tf::Rgba16Float
        }
        // BGRA storage is optional; storage-bound swapped targets use the
        // RGBA sibling and the shader swizzles.
        Tf::Bgra8Unorm
            if required_usages.contains(wgpu::TextureUsages::STORAGE_BINDING)
                && !features.contains(wgpu::Features::BGRA8UNORM_STORAGE) =>
        {
            Tf::Rgba8Unorm
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_stencil_falls_back_without_the_feature() {
        assert_eq!(
            supported_format_for_features(
                wgpu::Features::empty(),
                wgpu::TextureFormat::Depth32FloatStencil8,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
            ),
            wgpu::TextureFormat::Depth24PlusStencil8
        );
        assert_eq!(
            supported_format_for_features(
                wgpu::Features::DEPTH32FLOAT_STENCIL8,
                wgpu::TextureFormat::Depth32FloatStencil8,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
            ),
            wgpu::TextureFormat::Depth32FloatStencil8
        );
    }

    #[test]
    fn sixteen_bit_norm_falls_back_to_float() {
        assert_eq!(
            supported_format_for_features(
                wgpu::Features::empty(),
                wgpu::TextureFormat::Rg16Unorm,
                wgpu::TextureUsages::TEXTURE_BINDING,
            ),
            wgpu::TextureFormat::Rg16Float
        );
        assert_eq!(
            supported_format_for_features(
                wgpu::Features::TEXTURE_FORMAT_16BIT_NORM,
                wgpu::TextureFormat::Rg16Unorm,
                wgpu::TextureUsages::TEXTURE_BINDING,
            ),
            wgpu::TextureFormat::Rg16Unorm
        );
    }

    #[test]
    fn bgra_storage_fallback_only_applies_to_storage_use() {
        assert_eq!(
            supported_format_for_features(
                wgpu::Features::empty(),
                wgpu::TextureFormat::Bgra8Unorm,
                wgpu::TextureUsages::STORAGE_BINDING,
            ),
            wgpu::TextureFormat::Rgba8Unorm
        );
        assert_eq!(
            supported_format_for_features(
                wgpu::Features::empty(),
                wgpu::TextureFormat::Bgra8Unorm,
                wgpu::TextureUsages::TEXTURE_BINDING,
            ),
            wgpu::TextureFormat::Bgra8Unorm
        );
    }
}
