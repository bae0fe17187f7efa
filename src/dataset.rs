use std::path::{Path, PathBuf};
use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use crate::acquisition::{Acquisition, MaskType, MatEntry, Sampling};
use crate::error::DataError;
use crate::fft::{fft2, ifftshift};
use crate::grid::Grid;
use crate::io_mat::{read_complex, read_real};
use crate::io_png::read_roi_mask;
use crate::locations::mask_to_locations;
use crate::noise::{complex_gaussian, psnr, snr};
use crate::normalize::{l2_normalize, normalize_locations};

/// Where the data files live and how noise is drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub data_dir: PathBuf,
    /// fixed seed for the noise generator. Fresh entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("data"),
            seed: None,
        }
    }
}

impl LoaderConfig {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }
}

/// Acquisition parameters of the recorded dataset plus the injected noise level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionInfo {
    pub sigma: f64,
    pub snr: f64,
    pub psnr: f64,
    #[serde(rename = "N")]
    pub n: usize,
    #[serde(rename = "FOV(mm)")]
    pub fov_mm: f64,
    #[serde(rename = "TE(ms)")]
    pub te_ms: f64,
    #[serde(rename = "TR(ms)")]
    pub tr_ms: f64,
    #[serde(rename = "Tobs(ms)")]
    pub tobs_ms: f64,
    #[serde(rename = "Angle(degree)")]
    pub angle_degree: f64,
    #[serde(rename = "Slice-thickness(mm)")]
    pub slice_thickness_mm: f64,
    #[serde(rename = "Contrast")]
    pub contrast: String,
    pub mask_type: MaskType,
    pub acc_factor: Option<u32>,
}

impl AcquisitionInfo {
    fn new(acquisition: Acquisition, sigma: f64, snr: f64, psnr: f64) -> Self {
        Self {
            sigma,
            snr,
            psnr,
            n: 512,
            fov_mm: 200.,
            te_ms: 30.,
            tr_ms: 550.,
            tobs_ms: 30.72,
            angle_degree: 25.,
            slice_thickness_mm: 3.,
            contrast: "T2*w".to_string(),
            mask_type: acquisition.mask_type(),
            acc_factor: acquisition.acc_factor(),
        }
    }
}

/// Everything a reconstruction needs from one retrospective acquisition.
#[derive(Clone, Debug)]
pub struct Dataset {
    /// unit-norm reference image
    pub reference: Grid<Complex64>,
    /// `(n_samples, 2)` k-space coordinates in [-0.5, 0.5)
    pub locations: Grid<f64>,
    /// noisy k-space measurements
    pub kspace: Grid<Complex64>,
    /// region of interest, values in {0, 1}
    pub roi_mask: Grid<u8>,
    pub info: AcquisitionInfo,
}

impl Dataset {
    pub fn into_parts(self) -> (Grid<Complex64>, Grid<f64>, Grid<Complex64>, Grid<u8>, AcquisitionInfo) {
        (self.reference, self.locations, self.kspace, self.roi_mask, self.info)
    }

    /// acquisition info as pretty json. Infinite ratios are written as null.
    pub fn info_json(&self) -> String {
        serde_json::to_string_pretty(&self.info).unwrap_or_default()
    }
}

/// read a variable that must hold a non-empty 2D image
fn read_image(config: &LoaderConfig, entry: MatEntry) -> Result<Grid<f64>, DataError> {
    let path = config.path(entry.file);
    let grid = read_real(&path, entry.variable)?;
    if grid.dims.ndim() != 2 || grid.is_empty() {
        return Err(DataError::UnexpectedDataType {
            path,
            variable: entry.variable.to_string(),
            msg: format!("expected a non-empty 2D image, found shape {:?}", grid.shape()),
        });
    }
    Ok(grid)
}

/// Load a dataset from a mask type name and an optional acceleration factor.
pub fn load_dataset(
    config: &LoaderConfig,
    sigma: f64,
    mask_type: &str,
    acc_factor: Option<u32>,
) -> Result<Dataset, DataError> {
    let acquisition = Acquisition::from_args(mask_type, acc_factor)?;
    load_retrospective_dataset(config, sigma, acquisition)
}

/// Assemble the reference image, sampling locations, noisy k-space, ROI mask and
/// acquisition info for one acquisition.
///
/// Cartesian k-space is the masked 2D FFT of the reference. Non-Cartesian k-space
/// is read as recorded. Noise of scale `sigma` is added in both cases.
pub fn load_retrospective_dataset(
    config: &LoaderConfig,
    sigma: f64,
    acquisition: Acquisition,
) -> Result<Dataset, DataError> {
    if !sigma.is_finite() || sigma < 0. {
        return Err(DataError::InvalidSigma(sigma));
    }

    log::info!("loading {acquisition} dataset from {}", config.data_dir.display());
    let manifest = acquisition.manifest();

    let reference = read_image(config, manifest.reference)?;
    let reference = Grid::new(l2_normalize(&reference.data), reference.dims)?.to_complex();

    let (locations, kspace) = match manifest.sampling {
        Sampling::CartesianMask(entry) => {
            let mask = ifftshift(&read_image(config, entry)?);
            if mask.dims != reference.dims {
                return Err(DataError::ShapeMismatch {
                    expected: reference.shape().to_vec(),
                    found: mask.len(),
                });
            }
            let locations = mask_to_locations(&mask);
            let mut kspace = fft2(&reference);
            kspace.data.iter_mut().zip(mask.data.iter()).for_each(|(k, &m)| *k *= m);
            (locations, kspace)
        }
        Sampling::Trajectory { samples, values } => {
            let samples = read_real(config.path(samples.file), samples.variable)?;
            let locations = Grid::new(normalize_locations(&samples.data), samples.dims)?;
            let kspace = read_complex(config.path(values.file), values.variable)?;
            if kspace.len() != locations.rows() {
                log::warn!(
                    "{} k-space values for {} trajectory points",
                    kspace.len(),
                    locations.rows()
                );
            }
            (locations, kspace)
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let noise = complex_gaussian(&mut rng, kspace.len(), sigma);

    let info = AcquisitionInfo::new(
        acquisition,
        sigma,
        snr(&kspace.data, &noise),
        psnr(&kspace.data, &noise),
    );
    log::debug!("sigma = {sigma}, snr = {}, psnr = {}", info.snr, info.psnr);

    let mut kspace = kspace;
    kspace.data.iter_mut().zip(noise).for_each(|(k, n)| *k += n);

    let roi_mask = read_roi_mask(config.path(manifest.roi_mask))?;

    log::info!(
        "loaded reference {:?}, {} sampling locations, k-space {:?}",
        reference.shape(),
        locations.rows(),
        kspace.shape()
    );

    Ok(Dataset {
        reference,
        locations,
        kspace,
        roi_mask,
        info,
    })
}
