//! Grayscale reduction of decoded color images.
//!
//! Each pixel is reduced to the luma of the standard 8-bit gray model
//! (`Y = (19595 R + 38470 G + 7471 B + 2^15) >> 24` on alpha-premultiplied
//! 16-bit channels) and then widened back to the 16-bit range by byte
//! replication, so intensities land in `0..=65535` in steps of 257.
use super::ImageF64;
use image::DynamicImage;
use rayon::prelude::*;

/// Luma of one 16-bit RGBA pixel on the 16-bit scale.
#[inline]
pub fn luma16(r: u16, g: u16, b: u16, a: u16) -> f64 {
    let a = u32::from(a);
    let premultiply = |c: u16| u32::from(c) * a / 0xffff;
    let (r, g, b) = (premultiply(r), premultiply(g), premultiply(b));
    let y = (19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24;
    f64::from(y * 0x101)
}

/// Convert a decoded image into a row-major intensity plane.
pub fn to_grayscale(src: &DynamicImage) -> ImageF64 {
    let rgba = src.to_rgba16();
    let (w, h) = (rgba.width() as usize, rgba.height() as usize);
    let mut out = ImageF64::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    out.data
        .par_chunks_mut(w)
        .zip(rgba.par_chunks(w * 4))
        .for_each(|(dst, src_row)| {
            for (px, chan) in dst.iter_mut().zip(src_row.chunks_exact(4)) {
                *px = luma16(chan[0], chan[1], chan[2], chan[3]);
            }
        });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn black_and_white_span_full_range() {
        assert_eq!(luma16(0, 0, 0, 0xffff), 0.0);
        assert_eq!(luma16(0xffff, 0xffff, 0xffff, 0xffff), 65535.0);
    }

    #[test]
    fn transparent_pixels_are_black() {
        assert_eq!(luma16(0xffff, 0xffff, 0xffff, 0), 0.0);
    }

    #[test]
    fn gray_input_round_trips_its_level() {
        let mut img = GrayImage::new(3, 2);
        img.put_pixel(1, 1, Luma([200]));
        let plane = to_grayscale(&DynamicImage::ImageLuma8(img));
        assert_eq!((plane.w, plane.h), (3, 2));
        assert_eq!(plane.get(1, 1), 200.0 * 257.0);
        assert_eq!(plane.get(0, 0), 0.0);
    }

    #[test]
    fn green_weighs_more_than_blue() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        let plane = to_grayscale(&DynamicImage::ImageRgba8(img));
        // 38470 * 65535 >> 24 == 150, 7471 * 65535 >> 24 == 29
        assert_eq!(plane.get(0, 0), 150.0 * 257.0);
        assert_eq!(plane.get(1, 0), 29.0 * 257.0);
    }
}
