use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use matfile::{MatFile, NumericData};
use num_complex::Complex64;
use num_traits::ToPrimitive;
use crate::dims::ArrayDim;
use crate::error::DataError;
use crate::grid::Grid;

/// A numeric MAT variable widened to f64, column-major.
pub struct MatVariable {
    pub dims: ArrayDim,
    pub real: Vec<f64>,
    pub imag: Option<Vec<f64>>,
}

fn widen<T: ToPrimitive>(x: &[T]) -> Vec<f64> {
    x.iter().map(|v| v.to_f64().unwrap_or(f64::NAN)).collect()
}

fn widen_parts<T: ToPrimitive>(real: &[T], imag: &Option<Vec<T>>) -> (Vec<f64>, Option<Vec<f64>>) {
    (widen(real), imag.as_deref().map(widen))
}

/// read a single named numeric variable from a (level 5) MAT file
pub fn read_mat_variable(file: impl AsRef<Path>, variable: &str) -> Result<MatVariable, DataError> {
    let path = file.as_ref();
    log::debug!("reading '{variable}' from {}", path.display());

    let f = File::open(path).map_err(|source| DataError::Io { path: path.to_path_buf(), source })?;
    let mat = MatFile::parse(BufReader::new(f)).map_err(|e| DataError::Mat {
        path: path.to_path_buf(),
        msg: format!("{e:?}"),
    })?;

    let array = mat.find_by_name(variable).ok_or_else(|| DataError::MissingVariable {
        path: path.to_path_buf(),
        variable: variable.to_string(),
    })?;

    let (real, imag) = match array.data() {
        NumericData::Double { real, imag } => (real.clone(), imag.clone()),
        NumericData::Single { real, imag } => widen_parts(real, imag),
        NumericData::Int8 { real, imag } => widen_parts(real, imag),
        NumericData::UInt8 { real, imag } => widen_parts(real, imag),
        NumericData::Int16 { real, imag } => widen_parts(real, imag),
        NumericData::UInt16 { real, imag } => widen_parts(real, imag),
        NumericData::Int32 { real, imag } => widen_parts(real, imag),
        NumericData::UInt32 { real, imag } => widen_parts(real, imag),
        NumericData::Int64 { real, imag } => widen_parts(real, imag),
        NumericData::UInt64 { real, imag } => widen_parts(real, imag),
    };

    let dims = ArrayDim::from_shape(array.size());
    let consistent = real.len() == dims.numel()
        && imag.as_ref().is_none_or(|im| im.len() == real.len());
    if !consistent {
        return Err(DataError::UnexpectedDataType {
            path: path.to_path_buf(),
            variable: variable.to_string(),
            msg: format!("{} elements for size {:?}", real.len(), array.size()),
        });
    }

    log::debug!("'{variable}' has shape {:?} (complex: {})", dims.shape_ns(), imag.is_some());
    Ok(MatVariable { dims, real, imag })
}

/// read a real-valued variable. Complex data is rejected.
pub fn read_real(file: impl AsRef<Path>, variable: &str) -> Result<Grid<f64>, DataError> {
    let path = file.as_ref();
    let var = read_mat_variable(path, variable)?;
    if var.imag.is_some() {
        return Err(DataError::UnexpectedDataType {
            path: path.to_path_buf(),
            variable: variable.to_string(),
            msg: "expected real data, found complex".to_string(),
        });
    }
    Grid::new(var.real, var.dims)
}

/// read a variable as complex. Real data gets a zero imaginary part.
pub fn read_complex(file: impl AsRef<Path>, variable: &str) -> Result<Grid<Complex64>, DataError> {
    let var = read_mat_variable(file, variable)?;
    let data = match var.imag {
        Some(imag) => var.real.into_iter().zip(imag).map(|(re, im)| Complex64::new(re, im)).collect(),
        None => var.real.into_iter().map(|re| Complex64::new(re, 0.)).collect(),
    };
    Grid::new(data, var.dims)
}
