use num_complex::Complex64;
use rayon::prelude::*;

/// Euclidean norm of the flattened buffer
pub fn l2_norm(x: &[Complex64]) -> f64 {
    x.par_iter().map(|v| v.norm_sqr()).sum::<f64>().sqrt()
}

pub fn l2_norm_real(x: &[f64]) -> f64 {
    x.par_iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Scale x to unit Euclidean norm. An all-zero input yields NaN.
pub fn l2_normalize(x: &[f64]) -> Vec<f64> {
    let norm = l2_norm_real(x);
    x.par_iter().map(|v| v / norm).collect()
}

/// Rescale trajectory coordinates into [-0.5, 0.5).
///
/// The coordinates are divided by twice the largest magnitude. When that magnitude
/// is attained by the maximum, every element equal to it is negated first so that
/// 0.5 itself is never produced. The input is left untouched.
pub fn normalize_locations(loc: &[f64]) -> Vec<f64> {
    let k_max = loc.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let k_min = loc.iter().cloned().fold(f64::INFINITY, f64::min);
    if k_max < k_min.abs() {
        let scale = 2. * k_min.abs();
        loc.iter().map(|&k| k / scale).collect()
    } else {
        let scale = 2. * k_max.abs();
        loc.iter()
            .map(|&k| if k == k_max { -k_max } else { k })
            .map(|k| k / scale)
            .collect()
    }
}
