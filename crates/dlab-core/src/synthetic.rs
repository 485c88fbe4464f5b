//! Synthetic grayscale test images.

use crate::Image;

/// Filled disc centred at `(width / 2, height / 2)`.
///
/// Radius is `min(width / 2, height / 2)`. A pixel is `0xFF` when its squared
/// distance to the centre is strictly below `radius^2`, `0x00` otherwise, so
/// pixels exactly on the circle stay dark.
pub fn disc_u8(width: usize, height: usize) -> Image<u8> {
    let cx = (width / 2) as i64;
    let cy = (height / 2) as i64;
    let r = cx.min(cy);
    let r2 = r * r;

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        let dy = y as i64 - cy;
        let dy2 = dy * dy;
        let row = &mut data[y * width..(y + 1) * width];
        for (x, px) in row.iter_mut().enumerate() {
            let dx = x as i64 - cx;
            *px = if dx * dx + dy2 < r2 { 0xFF } else { 0x00 };
        }
    }

    Image::from_vec(width, height, data).expect("disc buffer matches dimensions")
}

/// Repeating `0..251` ramp in row-major order.
pub fn ramp_u8(width: usize, height: usize) -> Image<u8> {
    let data = (0..width * height).map(|i| (i % 251) as u8).collect();
    Image::from_vec(width, height, data).expect("ramp buffer matches dimensions")
}
