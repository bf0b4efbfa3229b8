//! Render-target register groups.
//!
//! Color and depth targets are programmed through per-target register blocks
//! rather than T# descriptors. Only the fields the translation layer and
//! render-pass assembly read are kept here.

use crate::format::{DataFormat, NumberFormat};
use crate::state::CompareFunc;

/// Channel-swap mode of a color target.
///
/// The hardware stores swapped-channel surfaces with the same data format as
/// their standard-order siblings and records the ordering here.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapMode {
    Standard = 0,
    Alternate = 1,
    StandardReverse = 2,
    AlternateReverse = 3,
}

/// Decoded color render-target registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBuffer {
    pub data_format: DataFormat,
    pub number_format: NumberFormat,
    pub comp_swap: SwapMode,
    /// First array slice addressed by the current view register.
    pub slice_start: u32,
    /// Last addressable slice (inclusive, register convention).
    pub slice_max: u32,
}

impl ColorBuffer {
    /// Total addressable slice count of the target.
    pub fn num_slices(&self) -> u32 {
        self.slice_max + 1
    }
}

/// Depth-plane format of a depth target.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZFormat {
    Invalid = 0,
    Z16 = 1,
    Z32Float = 3,
}

/// Stencil-plane format of a depth target.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilFormat {
    Invalid = 0,
    Stencil8 = 1,
}

/// Decoded depth render-target registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthBuffer {
    pub z_format: ZFormat,
    pub stencil_format: StencilFormat,
}

/// Slice window of the bound depth target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthView {
    pub slice_start: u32,
    /// Last addressable slice (inclusive, register convention).
    pub slice_max: u32,
}

impl DepthView {
    pub fn num_slices(&self) -> u32 {
        self.slice_max + 1
    }
}

/// Depth/stencil-test control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthControl {
    pub depth_enable: bool,
    pub depth_write_enable: bool,
    pub depth_func: CompareFunc,
    pub stencil_enable: bool,
    pub stencil_func: CompareFunc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_registers_are_inclusive() {
        let cb = ColorBuffer {
            data_format: DataFormat::Format8_8_8_8,
            number_format: NumberFormat::Unorm,
            comp_swap: SwapMode::Standard,
            slice_start: 2,
            slice_max: 5,
        };
        assert_eq!(cb.num_slices(), 6);

        let dv = DepthView {
            slice_start: 0,
            slice_max: 0,
        };
        assert_eq!(dv.num_slices(), 1);
    }
}
