use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use kspace_data::{load_dataset, LoaderConfig};

#[derive(Parser, Debug)]
struct Args {
    /// directory holding the .mat and .png data files
    #[clap(short, long)]
    data_dir: Option<PathBuf>,

    /// one of cartesianR4, radial, radial-sparkling
    #[clap(short, long, default_value = "cartesianR4")]
    mask_type: String,

    /// acceleration factor of the radial trajectories (8 or 15)
    #[clap(short, long)]
    acc_factor: Option<u32>,

    /// standard deviation of the complex gaussian noise added to k-space
    #[clap(short, long, default_value_t = 0.0)]
    sigma: f64,

    /// seed for the noise generator
    #[clap(long)]
    seed: Option<u64>,

    /// write the reference magnitude and ROI mask as <base>_ref.nii and <base>_roi.nii
    #[cfg(feature = "io-nifti")]
    #[clap(long)]
    nifti_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.data_dir {
        Some(dir) => LoaderConfig::new(dir),
        None => LoaderConfig::default(),
    };
    config.seed = args.seed;

    let dataset = load_dataset(&config, args.sigma, &args.mask_type, args.acc_factor)
        .with_context(|| format!("loading {} dataset", args.mask_type))?;

    println!("reference: {:?}", dataset.reference.shape());
    println!("locations: {:?}", dataset.locations.shape());
    println!("kspace:    {:?}", dataset.kspace.shape());
    println!("roi mask:  {:?}", dataset.roi_mask.shape());
    println!("{}", dataset.info_json());

    #[cfg(feature = "io-nifti")]
    if let Some(base) = &args.nifti_out {
        use kspace_data::io_nifti::write_nifti_from_grid;
        let stem = base.to_string_lossy();
        let magnitude = dataset.reference.map(|v| v.norm());
        write_nifti_from_grid(format!("{stem}_ref"), &magnitude)?;
        write_nifti_from_grid(format!("{stem}_roi"), &dataset.roi_mask)?;
        log::info!("wrote {stem}_ref.nii and {stem}_roi.nii");
    }

    Ok(())
}
