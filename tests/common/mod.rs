// Each test binary compiles this module separately and not all of them use
// every helper.
#![allow(dead_code)]

use hu_moments::ImageF64;

/// Embeds `block` into a `height x width` zero canvas with its top-left
/// corner at (row, col).
pub fn embed(
    height: usize,
    width: usize,
    row: usize,
    col: usize,
    block: &[Vec<f64>],
) -> ImageF64 {
    assert!(row + block.len() <= height, "block must fit the canvas");
    let mut rows = vec![vec![0.0; width]; height];
    for (i, r) in block.iter().enumerate() {
        assert!(col + r.len() <= width, "block must fit the canvas");
        for (j, &v) in r.iter().enumerate() {
            rows[row + i][col + j] = v;
        }
    }
    ImageF64::from_rows(&rows).expect("canvas is rectangular and non-empty")
}

/// Rotates grid content by 90 degrees clockwise: out[j][R-1-i] = in[i][j].
pub fn rotate90(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let r = rows.len();
    let c = rows[0].len();
    let mut out = vec![vec![0.0; r]; c];
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            out[j][r - 1 - i] = v;
        }
    }
    out
}

/// Multiplies every intensity by `k`.
pub fn scale_intensity(rows: &[Vec<f64>], k: f64) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| row.iter().map(|&v| v * k).collect())
        .collect()
}

/// Combined absolute/relative comparison: |a - b| within `tol` of the
/// larger magnitude (or of 1 for values near zero).
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * 1.0_f64.max(a.abs().max(b.abs()))
}
