use kyanite_gcn::{DataFormat, NumberFormat, StencilFormat, ZFormat};
use thiserror::Error;

/// Errors produced while translating guest descriptors to wgpu state.
///
/// A format-table miss means the guest programmed a surface format this
/// emulator has no host encoding for: an emulation gap to report, never a
/// case to paper over with a substitute format.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TranslateError {
    #[error("no wgpu format for surface format {data_format:?}/{number_format:?}")]
    UnsupportedSurfaceFormat {
        data_format: DataFormat,
        number_format: NumberFormat,
    },
    #[error("no wgpu format for depth target {z_format:?}/{stencil_format:?}")]
    UnsupportedDepthFormat {
        z_format: ZFormat,
        stencil_format: StencilFormat,
    },
}
