//! Borrowed 8-bit grayscale view over caller-owned bytes.
//!
//! Lets decoded grayscale buffers feed the pipeline without a copy. The
//! stride may exceed the width, so a window into a larger frame works too.
use crate::error::MomentsError;

#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows (>= `w`)
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Build a view, validating the shape against the buffer length.
    pub fn new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self, MomentsError> {
        let long_enough = h > 0 && data.len() >= stride * (h - 1) + w;
        if w == 0 || h == 0 || stride < w || !long_enough {
            return Err(MomentsError::InvalidShape {
                width: w,
                height: h,
            });
        }
        Ok(Self { w, h, stride, data })
    }

    #[inline]
    /// Get the pixel value at row `x`, column `y`.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[x * self.stride + y]
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, x: usize) -> &[u8] {
        let start = x * self.stride;
        &self.data[start..start + self.w]
    }
}
