use image::{DynamicImage, Rgb, RgbImage};

/// Uniformly colored RGB image.
pub fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
}

/// Black for `x < split_x`, white from `split_x` on.
pub fn vertical_step(width: u32, height: u32, split_x: u32) -> DynamicImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < split_x {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    DynamicImage::ImageRgb8(img)
}

/// Black for `y < split_y`, white from `split_y` on.
pub fn horizontal_step(width: u32, height: u32, split_y: u32) -> DynamicImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let img = RgbImage::from_fn(width, height, |_, y| {
        if y < split_y {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    DynamicImage::ImageRgb8(img)
}

/// Deterministic pseudo-random texture.
pub fn noise(width: u32, height: u32, seed: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let mut v = x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663) ^ seed;
        v ^= v >> 13;
        v = v.wrapping_mul(0x5bd1_e995);
        v ^= v >> 15;
        Rgb([v as u8, (v >> 8) as u8, (v >> 16) as u8])
    });
    DynamicImage::ImageRgb8(img)
}
