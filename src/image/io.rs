//! I/O helpers for images, text artifacts and JSON.
//!
//! - `load_image`: open and decode a PNG/GIF/JPEG, keeping open and decode
//!   failures apart.
//! - `write_text_file`: write a rendered artifact to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{AsciiError, Result};
use image::{DynamicImage, ImageReader};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Load an image from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let open_err = |source: std::io::Error| AsciiError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_err)?;
    ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(open_err)?
        .decode()
        .map_err(|source| AsciiError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `text` to `path`, creating parent directories.
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, text).map_err(|source| AsciiError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| AsciiError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    write_text_file(path, &json)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| AsciiError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn missing_file_is_an_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, AsciiError::Open { .. }), "got {err:?}");
    }

    #[test]
    fn garbage_bytes_are_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        fs::write(&path, b"definitely not an image").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, AsciiError::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn png_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut img = GrayImage::new(4, 3);
        img.put_pixel(2, 1, Luma([255]));
        img.save(&path).unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (4, 3));
    }

    #[test]
    fn json_is_written_under_new_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.json");
        write_json_file(&path, &vec![1, 2, 3]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains('2'));
    }
}
