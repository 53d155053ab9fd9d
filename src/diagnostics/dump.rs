//! Plain-text dumps of intermediate planes for eyeballing a run.

use crate::image::{EdgeMask, ImageF64, ImageView};

/// Intensity step mapped to one digit; 65535 / 7281 ≈ 9.
const INTENSITY_STEP: f64 = 7281.0;

/// One digit per pixel, `9` for black down to `0` for white.
pub fn render_intensity(plane: &ImageF64) -> String {
    let mut out = String::with_capacity(plane.h * (plane.w + 1));
    for row in plane.rows() {
        for &v in row {
            let level = 9 - (v / INTENSITY_STEP).floor() as i64;
            out.push_str(&level.to_string());
        }
        out.push('\n');
    }
    out
}

/// `1` for edge pixels, `0` otherwise.
pub fn render_mask(mask: &EdgeMask) -> String {
    let mut out = String::with_capacity(mask.h * (mask.w + 1));
    for row in mask.rows() {
        out.extend(row.iter().map(|&e| if e { '1' } else { '0' }));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_digits_run_dark_to_light() {
        let plane = ImageF64::from_vec(3, 1, vec![0.0, 32768.0, 65535.0]).unwrap();
        assert_eq!(render_intensity(&plane), "950\n");
    }

    #[test]
    fn mask_rows_are_newline_terminated() {
        let mut mask = EdgeMask::new(2, 2);
        mask.set(1, 0, true);
        assert_eq!(render_mask(&mask), "01\n00\n");
    }
}
