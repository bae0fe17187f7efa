//! 2D FFT and fft-shift helpers for column-major grids.
//!
//! Transforms follow the NumPy/SciPy convention: the forward transform is
//! unnormalized.

use num_complex::Complex64;
use rayon::prelude::*;
use rustfft::FftPlanner;
use crate::dims::{ArrayDim, N_DIMS};
use crate::grid::Grid;

/// Forward 2D DFT over the first two axes.
pub fn fft2(x: &Grid<Complex64>) -> Grid<Complex64> {
    assert_eq!(x.dims.ndim(), 2, "fft2 expects a 2D grid");
    let (nr, nc) = (x.rows(), x.cols());
    let mut planner = FftPlanner::<f64>::new();
    let fft_col = planner.plan_fft_forward(nr);
    let fft_row = planner.plan_fft_forward(nc);

    // columns are contiguous
    let mut data = x.data.clone();
    data.par_chunks_exact_mut(nr).for_each(|col| fft_col.process(col));

    // transform rows through a transposed copy
    let mut t = transpose(&data, nr, nc);
    t.par_chunks_exact_mut(nc).for_each(|row| fft_row.process(row));

    Grid { data: transpose(&t, nc, nr), dims: x.dims }
}

/// transpose a column-major (nr x nc) buffer into a column-major (nc x nr) buffer
fn transpose(x: &[Complex64], nr: usize, nc: usize) -> Vec<Complex64> {
    let mut out = vec![Complex64::ZERO; x.len()];
    out.par_chunks_exact_mut(nc).enumerate().for_each(|(i, col)| {
        for (j, v) in col.iter_mut().enumerate() {
            *v = x[i + j * nr];
        }
    });
    out
}

/// move the zero-frequency entry to the center of every axis
pub fn fftshift<T: Clone>(x: &Grid<T>) -> Grid<T> {
    shift(x, |dims, idx, out| dims.fft_shift_coords(idx, out))
}

/// undo `fftshift`, moving the center of every axis to the origin
pub fn ifftshift<T: Clone>(x: &Grid<T>) -> Grid<T> {
    shift(x, |dims, idx, out| dims.ifft_shift_coords(idx, out))
}

fn shift<T: Clone, F>(x: &Grid<T>, coords: F) -> Grid<T>
where
    F: Fn(&ArrayDim, &[usize], &mut [usize]),
{
    let dims = x.dims;
    let mut out = x.data.clone();
    let mut dst = [0usize; N_DIMS];
    for (addr, v) in x.data.iter().enumerate() {
        let idx = dims.calc_idx(addr);
        coords(&dims, &idx, &mut dst);
        out[dims.calc_addr(&dst)] = v.clone();
    }
    Grid { data: out, dims }
}
