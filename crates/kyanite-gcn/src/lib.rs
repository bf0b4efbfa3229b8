//! Decoded guest GPU state for the Kyanite emulator.
//!
//! The console's GCN-family GPU describes resources and pipeline state
//! through bit-packed descriptors and register groups. This crate holds the
//! decoded, strongly-typed forms of that state:
//!
//! - texture resource descriptors (T#) with their format, dimensionality and
//!   mip/array addressing fields (see [`ImageDescriptor`]),
//! - color/depth render-target register groups ([`ColorBuffer`],
//!   [`DepthBuffer`] and friends),
//! - the hardware enums referenced by both (formats, swizzles, blend and
//!   depth-test state, sampler state).
//!
//! Command-stream parsing lives in the command-processor crate; everything
//! here assumes it is handed syntactically valid register words. The
//! `kyanite-gpu` crate consumes these types and translates them into wgpu
//! resources.

mod descriptor;
mod format;
mod regs;
mod state;

pub use descriptor::{CompMapping, CompSwizzle, ImageDescriptor, ImageType};
pub use format::{DataFormat, NumberFormat};
pub use regs::{
    ColorBuffer, DepthBuffer, DepthControl, DepthView, StencilFormat, SwapMode, ZFormat,
};
pub use state::{
    BlendFactor, BlendOp, BorderColor, ClampMode, CompareFunc, CullMode, Filter, FrontFace,
    MipFilter, PolygonMode, PrimitiveType, StencilOp,
};
