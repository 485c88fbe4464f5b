//! Umbrella crate for the `decimate-lab` workspace.
//!
//! Re-exports the image and geometry types together with the decimation
//! strategies so harnesses depend on a single crate.

pub use dlab_core::*;
pub use dlab_decimate::*;
