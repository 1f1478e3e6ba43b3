//! Geometric and central moments of a pixel grid.
//!
//! All sums run over 1-based grid indices: the pixel at grid position (0, 0)
//! contributes with base 1. This keeps corner pixels in the sum for zero
//! orders (no `0^p` term) and avoids the `0^0` edge case entirely. Do not
//! simplify to 0-based indexing; it changes every moment with p or q > 0.

use log::debug;
use nalgebra::Point2;

use crate::error::MomentsError;
use crate::image::ImageView;

/// Raw (p+q)th-order geometric moment m(p,q).
///
/// Sums `(x+1)^p * (y+1)^q * f[x][y]` over all pixels, accumulating in f64.
/// `raw_moment(f, 0, 0)` is the total intensity mass.
pub fn raw_moment<I: ImageView>(image: &I, p: u32, q: u32) -> f64 {
    let mut m = 0.0;
    for (x, row) in image.rows().enumerate() {
        let xp = ((x + 1) as f64).powi(p as i32);
        for (y, px) in row.iter().enumerate() {
            let v: f64 = (*px).into();
            m += xp * ((y + 1) as f64).powi(q as i32) * v;
        }
    }
    m
}

/// Intensity-weighted center of mass, in the 1-based index frame.
///
/// `x` is the row coordinate, `y` the column coordinate. Fails with
/// [`MomentsError::DegenerateImage`] when the total mass is zero, since the
/// centroid is undefined there.
pub fn centroid<I: ImageView>(image: &I) -> Result<Point2<f64>, MomentsError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(MomentsError::InvalidShape {
            width: image.width(),
            height: image.height(),
        });
    }
    let mass = raw_moment(image, 0, 0);
    if mass == 0.0 {
        debug!(
            "centroid: zero total mass on {}x{} image",
            image.width(),
            image.height()
        );
        return Err(MomentsError::DegenerateImage);
    }
    Ok(Point2::new(
        raw_moment(image, 1, 0) / mass,
        raw_moment(image, 0, 1) / mass,
    ))
}

/// Central moment u(p,q): the raw moment taken about the centroid.
///
/// Translation invariant, and `u(0,0)` equals `m(0,0)` exactly. Recomputes
/// the centroid on every call; use [`central_moment_about`] when the caller
/// already holds it.
pub fn central_moment<I: ImageView>(image: &I, p: u32, q: u32) -> Result<f64, MomentsError> {
    let centre = centroid(image)?;
    Ok(central_moment_about(image, &centre, p, q))
}

/// Central moment about a caller-supplied centroid.
pub fn central_moment_about<I: ImageView>(
    image: &I,
    centre: &Point2<f64>,
    p: u32,
    q: u32,
) -> f64 {
    let mut u = 0.0;
    for (x, row) in image.rows().enumerate() {
        let xp = ((x + 1) as f64 - centre.x).powi(p as i32);
        for (y, px) in row.iter().enumerate() {
            let v: f64 = (*px).into();
            u += xp * ((y + 1) as f64 - centre.y).powi(q as i32) * v;
        }
    }
    u
}
