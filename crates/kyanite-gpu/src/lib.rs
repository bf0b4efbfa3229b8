//! Guest GPU → wgpu translation layer for the Kyanite emulator.
//!
//! The console GPU describes textures and render targets through bit-packed
//! descriptors (decoded in `kyanite-gcn`); shipped games are known to leave
//! inconsistencies in them: stale layer counts on 3D images, cube arrays
//! bound while the shader reads a single cube, depth images sampled through
//! color formats. This crate resolves those descriptors into canonical,
//! deduplicable wgpu view state:
//!
//! - [`format_map`]: surface/depth format tables mapping the hardware's
//!   (data format, number format) axes onto [`wgpu::TextureFormat`].
//! - [`state`]: pure hardware-enum → wgpu-enum translators.
//! - [`ImageViewInfo`]: the canonical view descriptor, built from one of the
//!   three hardware descriptor shapes and usable directly as a cache key.
//! - [`ImageView`]: a live `wgpu::TextureView` built from an
//!   [`ImageViewInfo`] against the texture cache's image resource.
//! - [`quads`]: quad-list → triangle-list index expansion for draws whose
//!   topology wgpu cannot consume directly.
//!
//! The surrounding view cache guarantees at most one live view per
//! (image, descriptor) key; everything here is deterministic and holds no
//! mutable shared state, so concurrent translation of distinct descriptors
//! needs no synchronization.

mod caps;
mod error;
pub mod format_map;
pub mod quads;
pub mod state;
mod view;

pub use caps::DeviceCaps;
pub use error::TranslateError;
pub use view::{
    resolve_view_format, Image, ImageAspects, ImageId, ImageUsage, ImageView, ImageViewInfo,
    ViewSource,
};
