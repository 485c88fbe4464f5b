//! 2:1 decimation of 8-bit grayscale buffers.
//!
//! Decimation keeps every even row and every even column of a `W x H` source
//! and discards the rest, writing a `W/2 x H/2` destination:
//!
//! `dst[ro * W/2 + co] == src[(2 * ro) * W + 2 * co]`
//!
//! Five kernels implement this contract with different traversal orders and
//! addressing schemes. They are required to agree byte for byte; they exist
//! to compare throughput, not results.
//!
//! | [`Strategy`] | traversal |
//! |---|---|
//! | `NestedLoop` | column-outer, row-inner, 2-D index per sample |
//! | `MaskPattern` | linear scan gated by a [`DecimationMask`] |
//! | `PointerStride` | one cursor, stride 2 or `W + 2` at row ends |
//! | `BlockedCopy` | per output row, skip one source row pair |
//! | `RowColIndexed` | explicit input/output indices per row |
//!
//! Kernels never allocate. Buffer lengths are validated against the
//! [`Geometry`](dlab_core::Geometry) before the first write.

mod decimate;
mod mask;
mod strategy;

pub use decimate::{
    decimate_blocked_copy, decimate_into, decimate_mask_pattern, decimate_mask_pattern_with,
    decimate_nested_loop, decimate_pointer_stride, decimate_row_col_indexed, decimate2x_u8,
};
pub use mask::DecimationMask;
pub use strategy::{ParseStrategyError, Strategy};
