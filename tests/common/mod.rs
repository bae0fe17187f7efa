#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;
use kspace_data::acquisition::{Acquisition, Sampling, CARTESIAN_MASK, REFERENCE, ROI_MASK};

pub const N: usize = 8;
pub const N_SAMPLES: usize = 16;

const MI_INT8: u32 = 1;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_DOUBLE: u32 = 9;
const MI_MATRIX: u32 = 14;
const MX_DOUBLE_CLASS: u32 = 6;
const COMPLEX_FLAG: u32 = 0x0800;

fn tag(buf: &mut Vec<u8>, data_type: u32, n_bytes: usize) {
    buf.extend(data_type.to_le_bytes());
    buf.extend((n_bytes as u32).to_le_bytes());
}

fn pad8(buf: &mut Vec<u8>) {
    while buf.len() % 8 != 0 {
        buf.push(0);
    }
}

/// minimal little-endian level 5 MAT file holding one double array
pub fn write_mat(path: impl AsRef<Path>, name: &str, shape: &[usize], real: &[f64], imag: Option<&[f64]>) {
    assert_eq!(shape.iter().product::<usize>(), real.len());

    let mut body = vec![];
    tag(&mut body, MI_UINT32, 8);
    let flags = MX_DOUBLE_CLASS | if imag.is_some() { COMPLEX_FLAG } else { 0 };
    body.extend(flags.to_le_bytes());
    body.extend(0u32.to_le_bytes());

    tag(&mut body, MI_INT32, 4 * shape.len());
    for &d in shape {
        body.extend((d as i32).to_le_bytes());
    }
    pad8(&mut body);

    tag(&mut body, MI_INT8, name.len());
    body.extend(name.as_bytes());
    pad8(&mut body);

    for part in std::iter::once(real).chain(imag) {
        tag(&mut body, MI_DOUBLE, 8 * part.len());
        for v in part {
            body.extend(v.to_le_bytes());
        }
    }

    let mut header = b"MATLAB 5.0 MAT-file, Platform: GLNXA64, Created on: kspace-data test fixture".to_vec();
    header.resize(116, b' ');
    let mut out = header;
    out.extend([0u8; 8]);
    out.extend(0x0100u16.to_le_bytes());
    out.extend(b"IM");
    tag(&mut out, MI_MATRIX, body.len());
    out.extend(body);
    std::fs::write(path, out).unwrap();
}

/// a temporary directory holding every data file, removed on drop
pub fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    dir
}

/// reference pixel value at row i, column j
pub fn reference_value(i: usize, j: usize) -> f64 {
    1. + (i * N + j) as f64 / 3. + ((i as f64) - 3.5).powi(2)
}

/// cartesian mask as stored on disk (every other column)
pub fn cartesian_mask_value(_i: usize, j: usize) -> f64 {
    if j % 2 == 0 { 1. } else { 0. }
}

/// ROI image: a dark 4x4 square in the upper-left quadrant on a white background
pub fn roi_pixel(row: usize, col: usize) -> u8 {
    if (1..5).contains(&row) && (2..6).contains(&col) { 0 } else { 255 }
}

/// trajectory coordinates of shape (N_SAMPLES, 2), column-major, spanning [-lo, hi]
pub fn trajectory(lo: f64, hi: f64) -> Vec<f64> {
    let n = 2 * N_SAMPLES;
    (0..n).map(|k| -lo + (hi + lo) * k as f64 / (n - 1) as f64).collect()
}

pub fn trajectory_values() -> (Vec<f64>, Vec<f64>) {
    let re = (0..N_SAMPLES).map(|k| (k as f64 * 0.7).cos()).collect();
    let im = (0..N_SAMPLES).map(|k| (k as f64 * 0.3).sin()).collect();
    (re, im)
}

fn column_major(f: impl Fn(usize, usize) -> f64) -> Vec<f64> {
    let mut data = vec![0.; N * N];
    for j in 0..N {
        for i in 0..N {
            data[i + j * N] = f(i, j);
        }
    }
    data
}

/// write every file the given acquisitions need into `dir`
pub fn write_fixtures(dir: &Path) {
    write_mat(dir.join(REFERENCE.file), REFERENCE.variable, &[N, N], &column_major(reference_value), None);
    write_mat(
        dir.join(CARTESIAN_MASK.file),
        CARTESIAN_MASK.variable,
        &[N, N],
        &column_major(cartesian_mask_value),
        None,
    );

    let roi = image::RgbImage::from_fn(N as u32, N as u32, |x, y| {
        let v = roi_pixel(y as usize, x as usize);
        image::Rgb([v, v, v])
    });
    roi.save(dir.join(ROI_MASK)).unwrap();

    let (re, im) = trajectory_values();
    for acq in Acquisition::all() {
        if let Sampling::Trajectory { samples, values } = acq.manifest().sampling {
            // radial spans a symmetric range, sparkling is dominated by its minimum
            let loc = match acq {
                Acquisition::Radial(_) => trajectory(3., 3.),
                _ => trajectory(2.5, 1.),
            };
            write_mat(dir.join(samples.file), samples.variable, &[N_SAMPLES, 2], &loc, None);
            write_mat(dir.join(values.file), values.variable, &[N_SAMPLES, 1], &re, Some(&im));
        }
    }
}
