//! Owned single-channel f64 image in row-major layout (stride == width).
//!
//! The main entry container for the moment pipeline. Constructors validate
//! the shape up front so the numeric stages never see an empty or ragged
//! grid.
use crate::error::MomentsError;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF64 {
    /// Image width in pixels (columns)
    pub w: usize,
    /// Image height in pixels (rows)
    pub h: usize,
    /// Number of f64 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f64>,
}

impl ImageF64 {
    /// Build from nested rows, validating that the grid is non-empty and
    /// rectangular.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MomentsError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MomentsError::InvalidShape { width, height });
        }
        for (x, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MomentsError::RaggedRow {
                    row: x,
                    expected: width,
                    found: row.len(),
                });
            }
        }
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(Self {
            w: width,
            h: height,
            stride: width,
            data,
        })
    }

    /// Build from a tightly packed row-major buffer of length `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<f64>) -> Result<Self, MomentsError> {
        if w == 0 || h == 0 || data.len() != w * h {
            return Err(MomentsError::InvalidShape {
                width: w,
                height: h,
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        x * self.stride + y
    }

    #[inline]
    /// Get the pixel value at row `x`, column `y`.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[self.idx(x, y)]
    }
}

impl crate::image::traits::ImageView for ImageF64 {
    type Pixel = f64;

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
    fn row(&self, x: usize) -> &[f64] {
        let start = x * self.stride;
        &self.data[start..start + self.w]
    }
}
