use dlab_core::{Error, Geometry, Image, ImageView};

use crate::mask::DecimationMask;
use crate::strategy::Strategy;

/// Column-outer, row-inner traversal with full 2-D index arithmetic per sample.
pub fn decimate_nested_loop(dst: &mut [u8], src: &[u8], geometry: Geometry) -> Result<(), Error> {
    geometry.check_buffers(dst, src)?;

    let src_w = geometry.src_width();
    let dst_w = geometry.dst_width();
    let dst_h = geometry.dst_height();

    for xo in 0..dst_w {
        let x = 2 * xo;
        for yo in 0..dst_h {
            let y = 2 * yo;
            dst[dst_w * yo + xo] = src[src_w * y + x];
        }
    }

    Ok(())
}

/// Streams the source linearly, copying bytes whose pattern bit is set.
///
/// Builds a fresh [`DecimationMask`] for the call.
pub fn decimate_mask_pattern(dst: &mut [u8], src: &[u8], geometry: Geometry) -> Result<(), Error> {
    let mask = DecimationMask::new(geometry.src_width());
    decimate_mask_pattern_with(dst, src, geometry, &mask)
}

/// Same as [`decimate_mask_pattern`] with a mask reused across calls.
pub fn decimate_mask_pattern_with(
    dst: &mut [u8],
    src: &[u8],
    geometry: Geometry,
    mask: &DecimationMask,
) -> Result<(), Error> {
    geometry.check_buffers(dst, src)?;
    if mask.src_width() != geometry.src_width() {
        return Err(Error::MaskMismatch {
            expected: geometry.src_width(),
            actual: mask.src_width(),
        });
    }

    let mut o = 0;
    for pair in src.chunks_exact(mask.period()) {
        for (&px, keep) in pair.iter().zip(mask.bits().iter().by_vals()) {
            if keep {
                dst[o] = px;
                o += 1;
            }
        }
    }
    debug_assert_eq!(o, dst.len());

    Ok(())
}

/// Single source cursor: `+2` within a row, `+(W + 2)` after each output row.
pub fn decimate_pointer_stride(
    dst: &mut [u8],
    src: &[u8],
    geometry: Geometry,
) -> Result<(), Error> {
    geometry.check_buffers(dst, src)?;

    let dst_w = geometry.dst_width();
    let row_end_stride = geometry.src_width() + 2;

    let mut cursor = 0;
    for (n, out) in dst.iter_mut().enumerate() {
        *out = src[cursor];
        cursor += if (n + 1) % dst_w == 0 {
            row_end_stride
        } else {
            2
        };
    }

    Ok(())
}

/// Copies every other byte of each even source row into one output row.
pub fn decimate_blocked_copy(dst: &mut [u8], src: &[u8], geometry: Geometry) -> Result<(), Error> {
    geometry.check_buffers(dst, src)?;

    let src_w = geometry.src_width();
    let dst_w = geometry.dst_width();

    let mut n = 0;
    for dst_row in dst.chunks_exact_mut(dst_w) {
        for out in dst_row {
            *out = src[n];
            n += 2;
        }
        // `n` has walked one source row; skip the odd one.
        n += src_w;
    }

    Ok(())
}

/// Explicit per-row input/output indices.
pub fn decimate_row_col_indexed(
    dst: &mut [u8],
    src: &[u8],
    geometry: Geometry,
) -> Result<(), Error> {
    geometry.check_buffers(dst, src)?;

    let src_w = geometry.src_width();
    let dst_w = geometry.dst_width();

    for p in 0..geometry.dst_height() {
        let mut input_index = p * src_w * 2;
        let mut output_index = p * dst_w;
        for _ in 0..dst_w {
            dst[output_index] = src[input_index];
            input_index += 2;
            output_index += 1;
        }
    }

    Ok(())
}

/// Decimates a contiguous view into a pre-allocated half-size image.
pub fn decimate_into(
    strategy: Strategy,
    src: &ImageView<'_, u8>,
    dst: &mut Image<u8>,
) -> Result<(), Error> {
    let geometry = Geometry::new(src.width(), src.height())?;
    let src = src.as_contiguous_slice().ok_or(Error::NonContiguous)?;

    if dst.width() != geometry.dst_width() {
        return Err(Error::SizeMismatch {
            expected: geometry.dst_width(),
            actual: dst.width(),
        });
    }
    if dst.height() != geometry.dst_height() {
        return Err(Error::SizeMismatch {
            expected: geometry.dst_height(),
            actual: dst.height(),
        });
    }

    strategy.decimate(dst.data_mut(), src, geometry)
}

/// Allocates a half-size image and decimates `src` into it.
pub fn decimate2x_u8(strategy: Strategy, src: &ImageView<'_, u8>) -> Result<Image<u8>, Error> {
    let mut dst = Image::new_fill(src.width() / 2, src.height() / 2, 0u8);
    decimate_into(strategy, src, &mut dst)?;
    Ok(dst)
}
