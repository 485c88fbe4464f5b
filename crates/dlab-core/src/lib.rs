//! Foundational types for 2:1 image decimation.
//!
//! ## Layout
//! Images are 8-bit (or generic) samples in row-major order: the linear index
//! of `(x, y)` is `y * stride + x`. Owned [`Image`]s are always contiguous;
//! [`ImageView`]s may carry a stride larger than their width.
//!
//! ## Geometry
//! [`Geometry`] fixes the source dimensions of a decimation. Both sides must
//! be positive and even; the destination is exactly half in each direction.
//!
//! ## Errors
//! Every [`Error`] is of kind [`ErrorKind::InvalidArgument`] and is raised
//! before any output is written.

mod error;
mod geometry;
mod image;
pub mod synthetic;

pub use error::{Error, ErrorKind};
pub use geometry::Geometry;
pub use image::{Image, ImageView};
