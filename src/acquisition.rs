//! Supported acquisitions and the data files each one is assembled from.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::DataError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskType {
    #[serde(rename = "cartesianR4")]
    CartesianR4,
    #[serde(rename = "radial")]
    Radial,
    #[serde(rename = "radial-sparkling")]
    RadialSparkling,
}

impl MaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskType::CartesianR4 => "cartesianR4",
            MaskType::Radial => "radial",
            MaskType::RadialSparkling => "radial-sparkling",
        }
    }
}

impl fmt::Display for MaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskType {
    type Err = DataError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cartesianR4" => Ok(MaskType::CartesianR4),
            "radial" => Ok(MaskType::Radial),
            "radial-sparkling" => Ok(MaskType::RadialSparkling),
            other => Err(DataError::InvalidMaskType(other.to_string())),
        }
    }
}

/// undersampling factor of the non-Cartesian trajectories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Acceleration {
    X8,
    X15,
}

impl Acceleration {
    pub fn factor(&self) -> u32 {
        match self {
            Acceleration::X8 => 8,
            Acceleration::X15 => 15,
        }
    }

    pub fn from_factor(acc_factor: u32) -> Option<Self> {
        match acc_factor {
            8 => Some(Acceleration::X8),
            15 => Some(Acceleration::X15),
            _ => None,
        }
    }
}

/// A valid (mask type, acceleration factor) combination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Acquisition {
    #[default]
    CartesianR4,
    Radial(Acceleration),
    RadialSparkling(Acceleration),
}

impl Acquisition {

    /// Validate a mask type name and an optional acceleration factor.
    ///
    /// cartesianR4 takes no acceleration factor, the radial trajectories require 8 or 15.
    pub fn from_args(mask_type: &str, acc_factor: Option<u32>) -> Result<Self, DataError> {
        let mask_type: MaskType = mask_type.parse()?;
        match (mask_type, acc_factor) {
            (MaskType::CartesianR4, None) => Ok(Acquisition::CartesianR4),
            (MaskType::CartesianR4, Some(f)) => Err(DataError::UnexpectedAccelerationFactor(f)),
            (trajectory, f) => {
                let acc = f.and_then(Acceleration::from_factor).ok_or_else(|| {
                    DataError::UnsupportedAccelerationFactor {
                        mask_type: trajectory.to_string(),
                        acc_factor: f,
                    }
                })?;
                Ok(match trajectory {
                    MaskType::Radial => Acquisition::Radial(acc),
                    _ => Acquisition::RadialSparkling(acc),
                })
            }
        }
    }

    pub fn mask_type(&self) -> MaskType {
        match self {
            Acquisition::CartesianR4 => MaskType::CartesianR4,
            Acquisition::Radial(_) => MaskType::Radial,
            Acquisition::RadialSparkling(_) => MaskType::RadialSparkling,
        }
    }

    pub fn acc_factor(&self) -> Option<u32> {
        match self {
            Acquisition::CartesianR4 => None,
            Acquisition::Radial(a) | Acquisition::RadialSparkling(a) => Some(a.factor()),
        }
    }

    pub fn all() -> [Acquisition; 5] {
        use Acceleration::*;
        [
            Acquisition::CartesianR4,
            Acquisition::Radial(X8),
            Acquisition::Radial(X15),
            Acquisition::RadialSparkling(X8),
            Acquisition::RadialSparkling(X15),
        ]
    }

    pub fn manifest(&self) -> Manifest {
        use Acceleration::*;
        let (samples, values) = match self {
            Acquisition::CartesianR4 => {
                return Manifest {
                    reference: REFERENCE,
                    sampling: Sampling::CartesianMask(CARTESIAN_MASK),
                    roi_mask: ROI_MASK,
                };
            }
            Acquisition::Radial(X8) => ("samples_radial_x8_64x3072.mat", "values_radial_x8_64x3072.mat"),
            Acquisition::Radial(X15) => ("samples_radial_x15_34x3072.mat", "values_radial_x15_34x3072.mat"),
            Acquisition::RadialSparkling(X8) => ("samples_sparkling_x8_64x3072.mat", "values_sparkling_x8_64x3072.mat"),
            Acquisition::RadialSparkling(X15) => ("samples_sparkling_x15_34x3072.mat", "values_sparkling_x15_34x3072.mat"),
        };
        Manifest {
            reference: REFERENCE,
            sampling: Sampling::Trajectory {
                samples: MatEntry::new(samples, "samples"),
                values: MatEntry::new(values, "values"),
            },
            roi_mask: ROI_MASK,
        }
    }
}

impl fmt::Display for Acquisition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.acc_factor() {
            Some(acc) => write!(f, "{} x{}", self.mask_type(), acc),
            None => write!(f, "{}", self.mask_type()),
        }
    }
}

/// a file name and the variable to read from it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatEntry {
    pub file: &'static str,
    pub variable: &'static str,
}

impl MatEntry {
    pub const fn new(file: &'static str, variable: &'static str) -> Self {
        Self { file, variable }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sampling {
    /// binary mask on the Cartesian grid, stored with the zero frequency centered
    CartesianMask(MatEntry),
    /// trajectory coordinates and the k-space values measured along them
    Trajectory { samples: MatEntry, values: MatEntry },
}

/// every file needed to assemble one dataset, relative to the data directory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub reference: MatEntry,
    pub sampling: Sampling,
    pub roi_mask: &'static str,
}

pub const REFERENCE: MatEntry = MatEntry::new("Ref_babouin_NEX32.mat", "im_ref");
pub const CARTESIAN_MASK: MatEntry = MatEntry::new("mask_BrainPhantom512_R4.mat", "mask");
pub const ROI_MASK: &str = "Ref_N512_NEX32_mask.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_rejects_acc_factor() {
        let err = Acquisition::from_args("cartesianR4", Some(4)).unwrap_err();
        assert!(matches!(err, DataError::UnexpectedAccelerationFactor(4)));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn radial_requires_known_factor() {
        let err = Acquisition::from_args("radial", Some(3)).unwrap_err();
        assert!(matches!(
            err,
            DataError::UnsupportedAccelerationFactor { acc_factor: Some(3), .. }
        ));
        assert!(err.to_string().contains("got 3"));

        let err = Acquisition::from_args("radial-sparkling", None).unwrap_err();
        assert!(err.to_string().contains("got None"));
    }

    #[test]
    fn unknown_mask_type_is_named() {
        let err = Acquisition::from_args("unknown", None).unwrap_err();
        assert!(matches!(err, DataError::InvalidMaskType(ref s) if s == "unknown"));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn valid_combinations() {
        use Acceleration::*;
        assert_eq!(Acquisition::from_args("cartesianR4", None).unwrap(), Acquisition::CartesianR4);
        assert_eq!(Acquisition::from_args("radial", Some(8)).unwrap(), Acquisition::Radial(X8));
        assert_eq!(
            Acquisition::from_args("radial-sparkling", Some(15)).unwrap(),
            Acquisition::RadialSparkling(X15)
        );
        for acq in Acquisition::all() {
            let parsed = Acquisition::from_args(acq.mask_type().as_str(), acq.acc_factor()).unwrap();
            assert_eq!(parsed, acq);
        }
    }

    #[test]
    fn every_trajectory_has_its_own_files() {
        let mut seen = vec![];
        for acq in Acquisition::all() {
            match acq.manifest().sampling {
                Sampling::CartesianMask(entry) => {
                    assert_eq!(acq, Acquisition::CartesianR4);
                    assert_eq!(entry.variable, "mask");
                }
                Sampling::Trajectory { samples, values } => {
                    assert_eq!(samples.variable, "samples");
                    assert_eq!(values.variable, "values");
                    let kind = if acq.mask_type() == MaskType::Radial { "radial" } else { "sparkling" };
                    let tag = format!("{kind}_x{}_", acq.acc_factor().unwrap());
                    assert!(samples.file.contains(&tag), "{} vs {tag}", samples.file);
                    assert!(values.file.contains(&tag));
                    seen.push(samples.file);
                }
            }
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }
}
