//! Error taxonomy for the moments pipeline.

/// Reasons why a moment computation rejects its input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MomentsError {
    /// Zero-area image, or a raw buffer that does not match the declared
    /// width/height/stride.
    InvalidShape { width: usize, height: usize },
    /// Nested-row input where one row has the wrong length.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Total intensity mass is zero, so the centroid and every normalized
    /// moment are undefined.
    DegenerateImage,
    /// Total intensity mass is negative. Scale normalization raises the mass
    /// to fractional powers, which is undefined for a negative base, so
    /// negative intensities violate the input contract.
    NegativeMass { mass: f64 },
}

impl std::fmt::Display for MomentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MomentsError::InvalidShape { width, height } => {
                write!(f, "invalid image shape ({width}x{height})")
            }
            MomentsError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged row {row} (expected {expected} pixels, found {found})"
            ),
            MomentsError::DegenerateImage => {
                write!(f, "degenerate image: total intensity mass is zero")
            }
            MomentsError::NegativeMass { mass } => write!(
                f,
                "negative total intensity mass ({mass}); pixel values must be non-negative"
            ),
        }
    }
}

impl std::error::Error for MomentsError {}
