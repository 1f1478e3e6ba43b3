//! Read-only image access used by the moment pipeline.
//!
//! The pipeline never mutates pixels, so only a view trait is provided. `x`
//! indexes rows (downward), `y` indexes columns (rightward), matching the
//! `f[x][y]` order the moment formulas are written in.

/// Rectangular, read-only pixel grid.
///
/// Contract: every row has exactly `width()` pixels and `row(x)` is valid for
/// `x < height()`. Pixel values are read as `f64` and are expected to be
/// non-negative (see [`crate::MomentsError::NegativeMass`]).
pub trait ImageView {
    type Pixel: Copy + Into<f64>;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, x: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, x: 0 }
    }
}

/// Iterator over image rows, top to bottom.
pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    x: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.image.height() {
            return None;
        }
        let x = self.x;
        self.x += 1;
        Some(self.image.row(x))
    }
}
