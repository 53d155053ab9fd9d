//! Boolean per-pixel edge mask sharing the plane layout of [`ImageF64`].
//!
//! [`ImageF64`]: crate::image::ImageF64
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMask {
    pub w: usize,
    pub h: usize,
    pub data: Vec<bool>,
}

impl EdgeMask {
    /// All-false mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    pub fn from_vec(w: usize, h: usize, data: Vec<bool>) -> Option<Self> {
        (data.len() == w * h).then_some(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: bool) {
        let i = y * self.w + x;
        self.data[i] = v;
    }

    /// Number of set pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&e| e).count()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl crate::image::traits::ImageView for EdgeMask {
    type Pixel = bool;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn as_slice(&self) -> &[bool] {
        &self.data
    }
}
