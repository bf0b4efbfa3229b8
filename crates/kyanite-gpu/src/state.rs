//! Pure hardware-enum → wgpu-enum translators.
//!
//! Each function is a total mapping over its (closed) guest enum; raw
//! register values that fall outside the known domain never get this far;
//! the decode layer maps them to sentinel variants that fail earlier.
//! Mappings the host API cannot express exactly (mirror-once addressing,
//! custom border colors) land on the nearest supported behavior.

use kyanite_gcn::{
    BlendFactor, BlendOp, BorderColor, ClampMode, CompareFunc, CullMode, Filter, FrontFace,
    MipFilter, PolygonMode, PrimitiveType, StencilOp,
};

pub fn compare_func(func: CompareFunc) -> wgpu::CompareFunction {
    match func {
        CompareFunc::Never => wgpu::CompareFunction::Never,
        CompareFunc::Less => wgpu::CompareFunction::Less,
        CompareFunc::Equal => wgpu::CompareFunction::Equal,
        CompareFunc::LessEqual => wgpu::CompareFunction::LessEqual,
        CompareFunc::Greater => wgpu::CompareFunction::Greater,
        CompareFunc::NotEqual => wgpu::CompareFunction::NotEqual,
        CompareFunc::GreaterEqual => wgpu::CompareFunction::GreaterEqual,
        CompareFunc::Always => wgpu::CompareFunction::Always,
    }
}

pub fn stencil_op(op: StencilOp) -> wgpu::StencilOperation {
    match op {
        StencilOp::Keep => wgpu::StencilOperation::Keep,
        StencilOp::Zero => wgpu::StencilOperation::Zero,
        StencilOp::Replace => wgpu::StencilOperation::Replace,
        StencilOp::AddClamp => wgpu::StencilOperation::IncrementClamp,
        StencilOp::SubClamp => wgpu::StencilOperation::DecrementClamp,
        StencilOp::Invert => wgpu::StencilOperation::Invert,
        StencilOp::AddWrap => wgpu::StencilOperation::IncrementWrap,
        StencilOp::SubWrap => wgpu::StencilOperation::DecrementWrap,
    }
}

pub fn blend_factor(factor: BlendFactor) -> wgpu::BlendFactor {
    match factor {
        BlendFactor::Zero => wgpu::BlendFactor::Zero,
        BlendFactor::One => wgpu::BlendFactor::One,
        BlendFactor::SrcColor => wgpu::BlendFactor::Src,
        BlendFactor::OneMinusSrcColor => wgpu::BlendFactor::OneMinusSrc,
        BlendFactor::SrcAlpha => wgpu::BlendFactor::SrcAlpha,
        BlendFactor::OneMinusSrcAlpha => wgpu::BlendFactor::OneMinusSrcAlpha,
        BlendFactor::DstAlpha => wgpu::BlendFactor::DstAlpha,
        BlendFactor::OneMinusDstAlpha => wgpu::BlendFactor::OneMinusDstAlpha,
        BlendFactor::DstColor => wgpu::BlendFactor::Dst,
        BlendFactor::OneMinusDstColor => wgpu::BlendFactor::OneMinusDst,
        BlendFactor::SrcAlphaSaturate => wgpu::BlendFactor::SrcAlphaSaturated,
        BlendFactor::ConstantColor => wgpu::BlendFactor::Constant,
        BlendFactor::OneMinusConstantColor => wgpu::BlendFactor::OneMinusConstant,
        // Dual-source factors need Features::DUAL_SOURCE_BLENDING on the device.
        BlendFactor::Src1Color => wgpu::BlendFactor::Src1,
        BlendFactor::InvSrc1Color => wgpu::BlendFactor::OneMinusSrc1,
        BlendFactor::Src1Alpha => wgpu::BlendFactor::Src1Alpha,
        BlendFactor::InvSrc1Alpha => wgpu::BlendFactor::OneMinusSrc1Alpha,
    }
}

pub fn blend_op(op: BlendOp) -> wgpu::BlendOperation {
    match op {
        BlendOp::Add => wgpu::BlendOperation::Add,
        BlendOp::Subtract => wgpu::BlendOperation::Subtract,
        BlendOp::Min => wgpu::BlendOperation::Min,
        BlendOp::Max => wgpu::BlendOperation::Max,
        BlendOp::ReverseSubtract => wgpu::BlendOperation::ReverseSubtract,
    }
}

pub fn polygon_mode(mode: PolygonMode) -> wgpu::PolygonMode {
    match mode {
        PolygonMode::Point => wgpu::PolygonMode::Point,
        PolygonMode::Line => wgpu::PolygonMode::Line,
        PolygonMode::Fill => wgpu::PolygonMode::Fill,
    }
}

pub fn cull_mode(mode: CullMode) -> Option<wgpu::Face> {
    match mode {
        CullMode::None => None,
        CullMode::Front => Some(wgpu::Face::Front),
        CullMode::Back => Some(wgpu::Face::Back),
    }
}

pub fn front_face(face: FrontFace) -> wgpu::FrontFace {
    match face {
        FrontFace::CounterClockwise => wgpu::FrontFace::Ccw,
        FrontFace::Clockwise => wgpu::FrontFace::Cw,
    }
}

pub fn clamp_mode(mode: ClampMode) -> wgpu::AddressMode {
    match mode {
        ClampMode::Wrap => wgpu::AddressMode::Repeat,
        ClampMode::Mirror => wgpu::AddressMode::MirrorRepeat,
        ClampMode::ClampLastTexel => wgpu::AddressMode::ClampToEdge,
        // wgpu has no mirror-once; clamping matches it everywhere but the
        // first mirrored texel span.
        ClampMode::MirrorOnceLastTexel => wgpu::AddressMode::ClampToEdge,
        ClampMode::ClampBorder => wgpu::AddressMode::ClampToBorder,
        ClampMode::MirrorOnceBorder => wgpu::AddressMode::ClampToBorder,
    }
}

pub fn filter(filter: Filter) -> wgpu::FilterMode {
    match filter {
        Filter::Point | Filter::AnisoPoint => wgpu::FilterMode::Nearest,
        Filter::Bilinear | Filter::AnisoLinear => wgpu::FilterMode::Linear,
    }
}

pub fn mip_filter(filter: MipFilter) -> wgpu::FilterMode {
    match filter {
        // "No mip filtering" becomes nearest with the LOD range clamped to
        // the base level by the sampler builder.
        MipFilter::None | MipFilter::Point => wgpu::FilterMode::Nearest,
        MipFilter::Linear => wgpu::FilterMode::Linear,
    }
}

pub fn border_color(color: BorderColor) -> wgpu::SamplerBorderColor {
    match color {
        BorderColor::TransparentBlack => wgpu::SamplerBorderColor::TransparentBlack,
        BorderColor::OpaqueBlack => wgpu::SamplerBorderColor::OpaqueBlack,
        BorderColor::OpaqueWhite => wgpu::SamplerBorderColor::OpaqueWhite,
        // Custom border palettes are not expressible in wgpu.
        BorderColor::Custom => wgpu::SamplerBorderColor::TransparentBlack,
    }
}

/// Index-expansion pass a draw needs before wgpu can consume its topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexExpansion {
    /// Quads → two triangles each (see [`crate::quads`]).
    QuadListToTriangles,
    /// Fan → triangle list, (0, i, i+1) per triangle.
    TriangleFanToTriangles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyTranslation {
    pub topology: wgpu::PrimitiveTopology,
    /// CPU-side index expansion required, if any.
    pub expansion: Option<IndexExpansion>,
}

/// Whether the hardware discards this primitive type without rasterizing.
pub fn is_primitive_culled(ty: PrimitiveType) -> bool {
    matches!(ty, PrimitiveType::None)
}

/// Translate a draw's primitive type to a wgpu topology.
///
/// Callers must check [`is_primitive_culled`] first; a culled primitive type
/// has no topology.
pub fn primitive_topology(ty: PrimitiveType) -> TopologyTranslation {
    let direct = |topology| TopologyTranslation {
        topology,
        expansion: None,
    };
    match ty {
        PrimitiveType::PointList => direct(wgpu::PrimitiveTopology::PointList),
        PrimitiveType::LineList => direct(wgpu::PrimitiveTopology::LineList),
        PrimitiveType::LineStrip => direct(wgpu::PrimitiveTopology::LineStrip),
        PrimitiveType::TriangleList | PrimitiveType::RectList => {
            direct(wgpu::PrimitiveTopology::TriangleList)
        }
        PrimitiveType::TriangleStrip => direct(wgpu::PrimitiveTopology::TriangleStrip),
        PrimitiveType::TriangleFan | PrimitiveType::Polygon => TopologyTranslation {
            topology: wgpu::PrimitiveTopology::TriangleList,
            expansion: Some(IndexExpansion::TriangleFanToTriangles),
        },
        PrimitiveType::QuadList => TopologyTranslation {
            topology: wgpu::PrimitiveTopology::TriangleList,
            expansion: Some(IndexExpansion::QuadListToTriangles),
        },
        PrimitiveType::None => unreachable!("culled primitive type has no topology"),
    }
}

/// Pick the best supported sample count no greater than the requested one.
pub fn sample_count(requested: u32, flags: wgpu::TextureFormatFeatureFlags) -> u32 {
    let supported = [
        (16, wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X16),
        (8, wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X8),
        (4, wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X4),
        (2, wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X2),
    ];
    for (count, flag) in supported {
        if requested >= count && flags.contains(flag) {
            return count;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_list_requires_expansion() {
        let tr = primitive_topology(PrimitiveType::QuadList);
        assert_eq!(tr.topology, wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(tr.expansion, Some(IndexExpansion::QuadListToTriangles));

        let tr = primitive_topology(PrimitiveType::TriangleStrip);
        assert_eq!(tr.topology, wgpu::PrimitiveTopology::TriangleStrip);
        assert_eq!(tr.expansion, None);
    }

    #[test]
    fn culled_primitive_is_reported() {
        assert!(is_primitive_culled(PrimitiveType::None));
        assert!(!is_primitive_culled(PrimitiveType::TriangleList));
    }

    #[test]
    #[should_panic(expected = "culled primitive")]
    fn culled_primitive_has_no_topology() {
        primitive_topology(PrimitiveType::None);
    }

    #[test]
    fn sample_count_clamps_to_supported_flags() {
        let x4 = wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X4;
        assert_eq!(sample_count(8, x4), 4);
        assert_eq!(sample_count(4, x4), 4);
        assert_eq!(sample_count(2, x4), 1);
        assert_eq!(sample_count(1, wgpu::TextureFormatFeatureFlags::empty()), 1);
    }
}
