/*
    Loader for retrospective MRI k-space datasets stored as MATLAB files:
    reference image, sampling locations, (noisy) k-space and a binary ROI mask.
    Arrays are kept column-major to match the files they come from.
 */
pub mod acquisition;
pub mod dataset;
pub mod dims;
pub mod error;
pub mod fft;
pub mod grid;
pub mod io_mat;
pub mod io_png;
pub mod locations;
pub mod noise;
pub mod normalize;

#[cfg(feature = "io-nifti")]
pub mod io_nifti;

pub use acquisition::{Acceleration, Acquisition, MaskType};
pub use dataset::{load_dataset, load_retrospective_dataset, AcquisitionInfo, Dataset, LoaderConfig};
pub use dims::ArrayDim;
pub use error::DataError;
pub use grid::Grid;
pub use locations::{locations_to_mask, mask_to_locations};
pub use normalize::{l2_normalize, normalize_locations};
