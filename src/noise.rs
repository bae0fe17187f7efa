use num_complex::Complex64;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use crate::normalize::l2_norm;

/// `sigma * (N(0,1) + i N(0,1))` drawn independently for each of `n` samples
pub fn complex_gaussian<R: Rng + ?Sized>(rng: &mut R, n: usize, sigma: f64) -> Vec<Complex64> {
    (0..n)
        .map(|_| {
            let re: f64 = StandardNormal.sample(rng);
            let im: f64 = StandardNormal.sample(rng);
            Complex64::new(sigma * re, sigma * im)
        })
        .collect()
}

/// `20 ln(||signal|| / ||noise||)`. A zero-norm noise gives +inf.
pub fn snr(signal: &[Complex64], noise: &[Complex64]) -> f64 {
    20. * (l2_norm(signal) / l2_norm(noise)).ln()
}

/// `20 ln(max|signal| / ||noise||)`. A zero-norm noise gives +inf.
pub fn psnr(signal: &[Complex64], noise: &[Complex64]) -> f64 {
    let peak = signal.iter().map(|v| v.norm()).fold(0., f64::max);
    20. * (peak / l2_norm(noise)).ln()
}
