use std::path::Path;
use bytemuck::Pod;
use nifti::DataElement;
use ndarray::ShapeBuilder;
use crate::error::DataError;
use crate::grid::Grid;



/// Write a 2D or 3D grid to a .nii file for viewing. Higher axes are collapsed into the third.
pub fn write_nifti_from_grid<T>(file: impl AsRef<Path>, grid:&Grid<T>) -> Result<(),DataError>
where T:Sized + DataElement + Pod
{
    let dims = grid.dims;
    let dim3:usize = dims.shape()[2..].iter().product();
    let path = file.as_ref().with_extension("nii");
    log::debug!("writing {:?} grid to {}", grid.shape(), path.display());
    let writer = nifti::writer::WriterOptions::new(&path);
    if dim3 > 1 {
        let arr = ndarray::Array::from_shape_vec([dims.size(0),dims.size(1),dim3].as_slice().f(), grid.data.clone())
            .map_err(|_| DataError::ShapeMismatch { expected: grid.shape().to_vec(), found: grid.len() })?;
        writer.write_nifti(&arr)?;
    } else {
        writer.write_nifti(&grid.to_array2()?)?;
    }
    Ok(())
}
