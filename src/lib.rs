#![doc = include_str!("../README.md")]

pub mod error;
pub mod hu;
pub mod image;
pub mod moments;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::MomentsError;
pub use crate::hu::{hu, normalized_moment, HuMoments};
pub use crate::image::{ImageF64, ImageU8, ImageView};
pub use crate::moments::{central_moment, central_moment_about, centroid, raw_moment};

/// Small prelude for quick experiments.
///
/// ```
/// use hu_moments::prelude::*;
///
/// # fn main() {
/// let gray = vec![0u8, 1, 2, 3, 4, 5];
/// let img = ImageU8::new(3, 2, 3, &gray).expect("valid shape");
///
/// let phi = hu(&img).expect("non-degenerate image");
/// println!("phi_1 = {:.6}", phi.phi(1));
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF64, ImageU8, ImageView};
    pub use crate::{hu, HuMoments, MomentsError};
}
