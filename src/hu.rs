//! Scale normalization and the seven Hu invariant combinations.
//!
//! Reference: Ming-Kuei Hu, "Visual pattern recognition by moment
//! invariants," IRE Transactions on Information Theory 8(2), 1962.
//! doi: 10.1109/TIT.1962.1057692
//!
//! The φ₂ and φ₅ formulas deviate from the paper; see the TODOs below and
//! the "Formula notes" section of the README before touching them.

use log::debug;
use serde::Serialize;

use crate::error::MomentsError;
use crate::image::ImageView;
use crate::moments::{central_moment_about, centroid};

/// Hu's seven invariants φ₁..φ₇, in order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HuMoments(pub [f64; 7]);

impl HuMoments {
    pub fn as_array(&self) -> &[f64; 7] {
        &self.0
    }

    /// φk for k in 1..=7.
    pub fn phi(&self, k: usize) -> f64 {
        assert!((1..=7).contains(&k), "Hu moments are numbered 1..=7");
        self.0[k - 1]
    }
}

/// eta(p,q) = u(p,q) / u(0,0)^((p+q+2)/2), with a true floating-point
/// exponent (fractional for odd p+q).
#[inline]
fn normalize(u_pq: f64, u_00: f64, p: u32, q: u32) -> f64 {
    u_pq / u_00.powf(((p + q) as f64 + 2.0) / 2.0)
}

/// Scale-normalized central moment eta(p,q).
///
/// Invariant under translation and spatial scaling of the image content.
/// Fails on zero total mass ([`MomentsError::DegenerateImage`]) and on
/// negative total mass ([`MomentsError::NegativeMass`], since the fractional
/// power is undefined for a negative base).
pub fn normalized_moment<I: ImageView>(image: &I, p: u32, q: u32) -> Result<f64, MomentsError> {
    let centre = centroid(image)?;
    let u_00 = central_moment_about(image, &centre, 0, 0);
    if u_00 < 0.0 {
        return Err(MomentsError::NegativeMass { mass: u_00 });
    }
    Ok(normalize(
        central_moment_about(image, &centre, p, q),
        u_00,
        p,
        q,
    ))
}

/// Computes Hu's seven invariant moments of `image`.
///
/// The centroid is computed once and reused across all central moments; the
/// result is identical to recomputing it per order.
pub fn hu<I: ImageView>(image: &I) -> Result<HuMoments, MomentsError> {
    let centre = centroid(image)?;
    let u_00 = central_moment_about(image, &centre, 0, 0);
    if u_00 < 0.0 {
        return Err(MomentsError::NegativeMass { mass: u_00 });
    }
    debug!(
        "hu: mass={:.6} centroid=({:.3}, {:.3})",
        u_00, centre.x, centre.y
    );

    let eta = |p: u32, q: u32| normalize(central_moment_about(image, &centre, p, q), u_00, p, q);

    let eta_20 = eta(2, 0);
    let eta_02 = eta(0, 2);
    let eta_11 = eta(1, 1);
    let eta_12 = eta(1, 2);
    let eta_21 = eta(2, 1);
    let eta_30 = eta(3, 0);
    let eta_03 = eta(0, 3);

    let phi_1 = eta_20 + eta_02;
    // TODO: Hu (1962) squares the eta_11 term here (4*eta_11^2). Confirm the
    // unsquared form is really wanted before changing it; without the square
    // phi_2 is not rotation invariant for asymmetric content.
    let phi_2 = 4.0 * eta_11 + (eta_20 - eta_02).powi(2);
    let phi_3 = (eta_30 - 3.0 * eta_12).powi(2) + (3.0 * eta_21 - eta_03).powi(2);
    let phi_4 = (eta_30 + eta_12).powi(2) + (eta_21 + eta_03).powi(2);
    // TODO: the last bracket opens with 3*(eta_30 + eta_12) unsquared, while
    // the matching bracket in phi_7 squares it. Hu (1962) squares both.
    // Confirm before changing; this also breaks phi_5 rotation invariance.
    let phi_5 = (eta_30 - 3.0 * eta_12)
        * (eta_30 + eta_12)
        * ((eta_30 + eta_12).powi(2) - 3.0 * (eta_21 + eta_03).powi(2))
        + (3.0 * eta_21 - eta_03)
            * (eta_21 + eta_03)
            * (3.0 * (eta_30 + eta_12) - (eta_21 + eta_03).powi(2));
    let phi_6 = (eta_20 - eta_02)
        * ((eta_30 + eta_12).powi(2) - (eta_21 + eta_03).powi(2))
        + 4.0 * eta_11 * (eta_30 + eta_12) * (eta_21 + eta_03);
    let phi_7 = (3.0 * eta_21 - eta_03)
        * (eta_30 + eta_12)
        * ((eta_30 + eta_12).powi(2) - 3.0 * (eta_21 + eta_03).powi(2))
        - (eta_30 - 3.0 * eta_12)
            * (eta_21 + eta_03)
            * (3.0 * (eta_30 + eta_12).powi(2) - (eta_21 + eta_03).powi(2));

    Ok(HuMoments([
        phi_1, phi_2, phi_3, phi_4, phi_5, phi_6, phi_7,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF64;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    /// 4x4 identity-diagonal mask: centroid (2.5, 2.5),
    /// u20 = u02 = u11 = 5, u00 = 4, all third-order central moments zero.
    fn diagonal_4x4() -> ImageF64 {
        let mut rows = vec![vec![0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        ImageF64::from_rows(&rows).unwrap()
    }

    #[test]
    fn normalized_second_order_moment_of_diagonal() {
        let img = diagonal_4x4();
        // u20 / u00^2 = 5 / 16
        assert!(approx_eq(normalized_moment(&img, 2, 0).unwrap(), 0.3125));
        // eta(0,0) is 1 by construction
        assert!(approx_eq(normalized_moment(&img, 0, 0).unwrap(), 1.0));
    }

    #[test]
    fn flat_square_descriptor() {
        let img = ImageF64::from_rows(&[vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let phi = hu(&img).unwrap();
        // eta20 = eta02 = 1/16
        assert!(approx_eq(phi.phi(1), 0.125));
        for k in 2..=7 {
            assert!(approx_eq(phi.phi(k), 0.0), "phi_{k} = {}", phi.phi(k));
        }
    }

    #[test]
    fn diagonal_mask_pins_the_legacy_phi2() {
        let phi = hu(&diagonal_4x4()).unwrap();
        assert!(approx_eq(phi.phi(1), 0.625));
        // 4*eta_11 with eta_11 = 0.3125; the squared form would give 0.390625
        assert!(approx_eq(phi.phi(2), 1.25));
        for k in 3..=7 {
            assert!(approx_eq(phi.phi(k), 0.0), "phi_{k} = {}", phi.phi(k));
        }
    }

    #[test]
    fn negative_total_mass_is_rejected() {
        let img = ImageF64::from_rows(&[vec![-2.0, -2.0]]).unwrap();
        assert!(matches!(
            hu(&img),
            Err(MomentsError::NegativeMass { .. })
        ));
        assert!(matches!(
            normalized_moment(&img, 2, 0),
            Err(MomentsError::NegativeMass { .. })
        ));
    }

    #[test]
    fn zero_mass_propagates_from_the_centroid() {
        let img = ImageF64::from_rows(&vec![vec![0.0; 3]; 3]).unwrap();
        assert_eq!(hu(&img), Err(MomentsError::DegenerateImage));
        assert_eq!(
            normalized_moment(&img, 2, 0),
            Err(MomentsError::DegenerateImage)
        );
    }

    #[test]
    fn phi_accessor_is_one_based() {
        let phi = HuMoments([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(phi.phi(1), 1.0);
        assert_eq!(phi.phi(7), 7.0);
        assert_eq!(phi.as_array()[6], 7.0);
    }
}
