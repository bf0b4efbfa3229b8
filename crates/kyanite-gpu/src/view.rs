//! Canonical image-view descriptors and live view objects.
//!
//! [`ImageViewInfo`] is the resolved, comparable form of "how is this image
//! bound": format, dimensionality, mip/layer window, component remap and
//! storage capability. The external view cache keys on it (structural
//! equality) and constructs an [`ImageView`] on a miss.
//!
//! Quirk corrections that only need descriptor state happen while building
//! the info; corrections that depend on the owning image's storage format
//! (depth sampled through a color format) happen at view construction.

use bitflags::bitflags;
use tracing::warn;

use kyanite_gcn::{
    ColorBuffer, CompMapping, DepthBuffer, DepthControl, DepthView, ImageDescriptor, ImageType,
    NumberFormat,
};

use crate::caps::DeviceCaps;
use crate::error::TranslateError;
use crate::format_map;

bitflags! {
    /// Aspect planes present in an image resource.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ImageAspects: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Per-binding usage hints from the shader translator.
///
/// `is_storage`/`is_depth`/`is_array` describe how the translated shader
/// declares the binding, which the descriptor alone cannot tell us.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageUsage {
    pub is_storage: bool,
    pub is_depth: bool,
    pub is_array: bool,
}

/// The three hardware descriptor shapes a view can be built from.
#[derive(Debug, Clone, Copy)]
pub enum ViewSource<'a> {
    /// A sampled or storage image binding plus its shader usage hints.
    Sampled {
        desc: &'a ImageDescriptor,
        usage: ImageUsage,
    },
    /// A color render target.
    ColorTarget { cb: &'a ColorBuffer },
    /// A depth render target with its slice window and test control.
    DepthTarget {
        db: &'a DepthBuffer,
        view: DepthView,
        control: DepthControl,
    },
}

/// Canonical view descriptor; structural equality is the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageViewInfo {
    pub format: wgpu::TextureFormat,
    pub dimension: wgpu::TextureViewDimension,
    pub base_level: u32,
    pub level_count: u32,
    pub base_layer: u32,
    pub layer_count: u32,
    pub mapping: CompMapping,
    pub is_storage: bool,
}

/// Map a dimensionality tag to the wgpu view dimension.
///
/// wgpu has no 1D-array views; 1D arrays are represented as 2D arrays of
/// height 1, matching how the texture cache allocates them.
fn view_dimension(ty: ImageType) -> wgpu::TextureViewDimension {
    match ty {
        ImageType::Color1D => wgpu::TextureViewDimension::D1,
        ImageType::Color2D | ImageType::Color2DMsaa => wgpu::TextureViewDimension::D2,
        ImageType::Cube => wgpu::TextureViewDimension::Cube,
        ImageType::Color1DArray | ImageType::Color2DArray | ImageType::Color2DMsaaArray => {
            wgpu::TextureViewDimension::D2Array
        }
        ImageType::Color3D => wgpu::TextureViewDimension::D3,
        ImageType::Invalid => unreachable!("image descriptor carries an invalid dimensionality tag"),
    }
}

impl ImageViewInfo {
    /// Build the canonical descriptor for any of the three source shapes.
    pub fn new(source: ViewSource<'_>) -> Result<Self, TranslateError> {
        match source {
            ViewSource::Sampled { desc, usage } => Self::from_sampled(desc, usage),
            ViewSource::ColorTarget { cb } => Self::from_color_target(cb),
            ViewSource::DepthTarget { db, view, control } => {
                Self::from_depth_target(db, view, control)
            }
        }
    }

    /// Build from a sampled/storage image descriptor and its usage hints.
    pub fn from_sampled(
        desc: &ImageDescriptor,
        usage: ImageUsage,
    ) -> Result<Self, TranslateError> {
        let mut number_format = desc.number_format;
        if usage.is_storage && number_format == NumberFormat::Srgb {
            // Storage bindings cannot sRGB-convert; read raw unorm texels.
            number_format = NumberFormat::Unorm;
        }
        let mut format = format_map::surface_format(desc.data_format, number_format)?;
        if usage.is_depth {
            format = format_map::promote_format_to_depth(format);
        }

        let base_level = desc.base_level;
        // Multisample images have exactly one mip whatever the descriptor's
        // level fields claim. This keys off the descriptor's own tag, not
        // the bound type.
        let level_count = match desc.ty {
            ImageType::Color2DMsaa | ImageType::Color2DMsaaArray => 1,
            _ => desc.last_level - desc.base_level + 1,
        };
        let base_layer = desc.base_array;
        let mut layer_count = desc.last_array - desc.base_array + 1;

        let mut dimension = view_dimension(desc.image_type());
        if dimension == wgpu::TextureViewDimension::Cube {
            if usage.is_array {
                dimension = wgpu::TextureViewDimension::CubeArray;
            } else if layer_count > 6 {
                // Games bind whole cubemap arrays while the shader reads a
                // single cube.
                warn!(layer_count, "clamping cube view to one cube");
                layer_count = 6;
            }
        }
        if dimension == wgpu::TextureViewDimension::D3 && layer_count > 1 {
            // Stale layer counts on 3D descriptors.
            warn!(layer_count, "forcing 3D view layer count to 1");
            layer_count = 1;
        }

        // Storage access reads raw texels; the destination-select remap only
        // applies to sampled reads.
        let mapping = if usage.is_storage {
            CompMapping::IDENTITY
        } else {
            desc.dst_select
        };

        Ok(Self {
            format,
            dimension,
            base_level,
            level_count,
            base_layer,
            layer_count,
            mapping,
            is_storage: usage.is_storage,
        })
    }

    /// Build from a color render-target register group.
    pub fn from_color_target(cb: &ColorBuffer) -> Result<Self, TranslateError> {
        let base_format = format_map::surface_format(cb.data_format, cb.number_format)?;
        let base_layer = cb.slice_start;
        let layer_count = cb.num_slices() - base_layer;
        Ok(Self {
            format: format_map::adjust_color_buffer_format(base_format, cb.comp_swap),
            dimension: target_dimension(layer_count),
            base_level: 0,
            level_count: 1,
            base_layer,
            layer_count,
            mapping: CompMapping::IDENTITY,
            is_storage: false,
        })
    }

    /// Build from a depth render-target register group.
    pub fn from_depth_target(
        db: &DepthBuffer,
        view: DepthView,
        control: DepthControl,
    ) -> Result<Self, TranslateError> {
        let base_layer = view.slice_start;
        let layer_count = view.num_slices() - base_layer;
        Ok(Self {
            format: format_map::depth_format(db.z_format, db.stencil_format)?,
            dimension: target_dimension(layer_count),
            base_level: 0,
            level_count: 1,
            base_layer,
            layer_count,
            mapping: CompMapping::IDENTITY,
            // Depth writes need the view writable; writability stands in for
            // storage capability on depth targets.
            is_storage: control.depth_write_enable,
        })
    }
}

// Render targets bind exactly one mip, so only the layer window picks the
// dimension.
fn target_dimension(layer_count: u32) -> wgpu::TextureViewDimension {
    if layer_count > 1 {
        wgpu::TextureViewDimension::D2Array
    } else {
        wgpu::TextureViewDimension::D2
    }
}

/// Generational handle into the texture cache's image table.
///
/// The view keeps this instead of any reference to the image; the cache
/// checks the generation on lookup, so a handle to a destroyed-and-reused
/// slot can never alias a live image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId {
    index: u32,
    generation: u32,
}

impl ImageId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// The slice of image state the view constructor reads.
///
/// The image itself is owned by the texture cache and must outlive every
/// view built against it.
#[derive(Debug)]
pub struct Image {
    pub texture: wgpu::Texture,
    pub usage: wgpu::TextureUsages,
    pub aspects: ImageAspects,
    /// The format the image's storage was actually allocated with.
    pub pixel_format: wgpu::TextureFormat,
    /// Usages the chosen concrete format must support (from the format
    /// table entry the image was created from).
    pub required_usages: wgpu::TextureUsages,
}

/// Correct a requested view format against the owning image's aspects.
///
/// Descriptors for sampling a depth image specify the plain numeric format
/// (R32F/R16U…), not the depth format the image was allocated with; the view
/// must use the image's true format and address only the depth plane. Same
/// for 8-bit reads of the stencil plane. The promotable sets are fixed
/// enumerations; extend the match explicitly if the hardware ever grows
/// more, rather than inferring a rule.
pub fn resolve_view_format(
    requested: wgpu::TextureFormat,
    aspects: ImageAspects,
    pixel_format: wgpu::TextureFormat,
) -> (wgpu::TextureFormat, wgpu::TextureAspect) {
    if aspects.contains(ImageAspects::DEPTH)
        && matches!(
            requested,
            wgpu::TextureFormat::R32Float
                | wgpu::TextureFormat::Depth32Float
                | wgpu::TextureFormat::R16Unorm
                | wgpu::TextureFormat::Depth16Unorm
        )
    {
        return (pixel_format, wgpu::TextureAspect::DepthOnly);
    }
    if aspects.contains(ImageAspects::STENCIL)
        && matches!(
            requested,
            wgpu::TextureFormat::R8Uint | wgpu::TextureFormat::R8Unorm
        )
    {
        return (pixel_format, wgpu::TextureAspect::StencilOnly);
    }
    (requested, wgpu::TextureAspect::All)
}

/// A live wgpu view over a cached image.
#[derive(Debug)]
pub struct ImageView {
    image_id: ImageId,
    info: ImageViewInfo,
    usage: wgpu::TextureUsages,
    view: wgpu::TextureView,
}

impl ImageView {
    /// Create the wgpu view described by `info` against `image`.
    ///
    /// A validation rejection from wgpu means a descriptor this layer built
    /// violated a host-API rule (an emulator bug, not a runtime condition),
    /// so it panics with wgpu's own error embedded.
    pub fn new(caps: &DeviceCaps, info: &ImageViewInfo, image: &Image, image_id: ImageId) -> Self {
        // A non-storage view must not claim storage capability even though
        // the underlying image may have it. wgpu views inherit the texture's
        // usage set, so the stripped set is recorded on the view for the
        // binding layer to enforce.
        let mut usage = image.usage;
        if !info.is_storage {
            usage &= !wgpu::TextureUsages::STORAGE_BINDING;
        }

        let (format, aspect) = resolve_view_format(info.format, image.aspects, image.pixel_format);
        let format = caps.supported_format(format, image.required_usages);

        let device = caps.device();
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let view = image.texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("kyanite image view"),
            format: Some(format),
            dimension: Some(info.dimension),
            aspect,
            base_mip_level: info.base_level,
            mip_level_count: Some(info.level_count),
            base_array_layer: info.base_layer,
            array_layer_count: Some(info.layer_count),
        });
        device.poll(wgpu::Maintain::Wait);
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            panic!("image view creation rejected by wgpu: {err}");
        }

        Self {
            image_id,
            info: *info,
            usage,
            view,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn image_id(&self) -> ImageId {
        self.image_id
    }

    pub fn info(&self) -> &ImageViewInfo {
        &self.info
    }

    /// Usage set the binding layer may bind this view with.
    pub fn usage(&self) -> wgpu::TextureUsages {
        self.usage
    }

    /// Component remap the shader/binding layer must apply when sampling
    /// through this view (wgpu views carry no swizzle state of their own).
    pub fn mapping(&self) -> CompMapping {
        self.info.mapping
    }
}
