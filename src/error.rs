use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("mask type not understood, got {0:?} instead of 'cartesianR4', 'radial-sparkling' or 'radial'")]
    InvalidMaskType(String),

    #[error("acc_factor should be None if mask_type='cartesianR4', got {0}")]
    UnexpectedAccelerationFactor(u32),

    #[error("acc_factor should be in [8, 15] for mask_type='{mask_type}', got {}", display_factor(.acc_factor))]
    UnsupportedAccelerationFactor {
        mask_type: String,
        acc_factor: Option<u32>,
    },

    #[error("noise sigma must be finite and non-negative, got {0}")]
    InvalidSigma(f64),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse MAT file {}: {msg}", .path.display())]
    Mat { path: PathBuf, msg: String },

    #[error("variable '{variable}' not found in {}", .path.display())]
    MissingVariable { path: PathBuf, variable: String },

    #[error("variable '{variable}' in {} has unexpected data: {msg}", .path.display())]
    UnexpectedDataType {
        path: PathBuf,
        variable: String,
        msg: String,
    },

    #[error("failed to decode image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("buffer of {found} elements does not fit shape {expected:?}")]
    ShapeMismatch { expected: Vec<usize>, found: usize },

    #[cfg(feature = "io-nifti")]
    #[error("nifti error: {0}")]
    Nifti(#[from] nifti::NiftiError),
}

fn display_factor(acc_factor: &Option<u32>) -> String {
    match acc_factor {
        Some(f) => f.to_string(),
        None => "None".to_string(),
    }
}
