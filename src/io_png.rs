use std::path::Path;
use crate::dims::ArrayDim;
use crate::error::DataError;
use crate::grid::Grid;

/// read the first channel of an 8-bit image as a (height x width) grid
pub fn read_first_channel(file: impl AsRef<Path>) -> Result<Grid<u8>, DataError> {
    let path = file.as_ref();
    log::debug!("reading image {}", path.display());
    let img = image::open(path)
        .map_err(|source| DataError::Image { path: path.to_path_buf(), source })?
        .to_rgba8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let dims = ArrayDim::from_shape(&[h, w]);
    let mut data = dims.alloc(0u8);
    for (x, y, px) in img.enumerate_pixels() {
        data[dims.calc_addr(&[y as usize, x as usize])] = px.0[0];
    }
    Grid::new(data, dims)
}

/// Binary ROI mask from a channel where the region is dark: the channel is
/// inverted, any nonzero value becomes 1, and the result is rotated by 180
/// degrees then mirrored left to right.
///
/// The net effect is an upside-down flip. Masks laid out with `rot90(fliplr(m))`,
/// which is a transpose, come out in a different orientation.
pub fn roi_mask_from_channel(channel: &Grid<u8>) -> Grid<u8> {
    channel
        .map(|&v| u8::from(!v != 0))
        .rot180()
        .fliplr()
}

pub fn read_roi_mask(file: impl AsRef<Path>) -> Result<Grid<u8>, DataError> {
    let channel = read_first_channel(file)?;
    Ok(roi_mask_from_channel(&channel))
}
