//! End-to-end chain: load → grayscale → edges → quantize → render.
//!
//! Each stage is a pure function of the previous stage's output; the
//! [`Asciiizer`] only sequences them and reports timings to the observer it
//! is handed.
use crate::ascii::{quantize, render, GlyphGrid};
use crate::config::AsciiParams;
use crate::diagnostics::{observe, NoopObserver, Stage, StageObserver};
use crate::edges::{detect_edges_observed, EdgeMap};
use crate::error::Result;
use crate::image::io::load_image;
use crate::image::{to_grayscale, ImageF64};
use image::DynamicImage;
use log::debug;
use std::path::Path;

/// Everything one run produced, intermediate planes included.
#[derive(Clone, Debug)]
pub struct AsciiArt {
    pub gray: ImageF64,
    pub edges: EdgeMap,
    pub glyphs: GlyphGrid,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct Asciiizer {
    params: AsciiParams,
}

impl Asciiizer {
    /// Validate `params` and build a reusable converter.
    pub fn new(params: AsciiParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &AsciiParams {
        &self.params
    }

    /// Load, decode and convert the image at `path`.
    pub fn run_path(&self, path: &Path, observer: &mut dyn StageObserver) -> Result<AsciiArt> {
        let img = observe(observer, Stage::Load, || load_image(path))?;
        debug!(
            "Asciiizer::run_path {} {}x{}",
            path.display(),
            img.width(),
            img.height()
        );
        self.run_image(&img, observer)
    }

    /// Convert an already decoded image.
    pub fn run_image(
        &self,
        img: &DynamicImage,
        observer: &mut dyn StageObserver,
    ) -> Result<AsciiArt> {
        let gray = observe(observer, Stage::Grayscale, || to_grayscale(img));
        self.run_intensity(gray, observer)
    }

    /// Convert an intensity plane.
    pub fn run_intensity(
        &self,
        gray: ImageF64,
        observer: &mut dyn StageObserver,
    ) -> Result<AsciiArt> {
        let edges = detect_edges_observed(&gray, self.params.edge_params(), observer)?;
        let glyphs = observe(observer, Stage::Quantize, || {
            quantize(&edges, &self.params.block_params())
        })?;
        let text = observe(observer, Stage::Render, || render(&glyphs));
        Ok(AsciiArt {
            gray,
            edges,
            glyphs,
            text,
        })
    }
}

/// Convert the image at `path` with `params`, returning only the text.
pub fn asciiize(path: &Path, params: AsciiParams) -> Result<String> {
    let art = Asciiizer::new(params)?.run_path(path, &mut NoopObserver)?;
    Ok(art.text)
}
