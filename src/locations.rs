use crate::dims::ArrayDim;
use crate::error::DataError;
use crate::grid::Grid;

/// Collect the coordinates of the sampled entries of a 2D Cartesian mask.
///
/// Entries equal to 1 are visited in row-major order and each yields a row of
/// `(row / n_rows - 0.5, col / n_cols - 0.5)`. The result has shape `(n_samples, 2)`.
pub fn mask_to_locations(mask: &Grid<f64>) -> Grid<f64> {
    let (n_rows, n_cols) = (mask.rows(), mask.cols());
    let mut kx = vec![];
    let mut ky = vec![];
    for i in 0..n_rows {
        for j in 0..n_cols {
            if *mask.get(i, j) == 1. {
                kx.push(i as f64 / n_rows as f64 - 0.5);
                ky.push(j as f64 / n_cols as f64 - 0.5);
            }
        }
    }
    let dims = ArrayDim::from_shape(&[kx.len(), 2]);
    kx.extend(ky);
    Grid { data: kx, dims }
}

/// Grid `(n_samples, 2)` locations in [-0.5, 0.5) back onto an `img_size` square mask.
pub fn locations_to_mask(locations: &Grid<f64>, img_size: usize) -> Result<Grid<f64>, DataError> {
    if locations.dims.ndim() != 2 || locations.cols() != 2 {
        return Err(DataError::ShapeMismatch {
            expected: vec![locations.rows(), 2],
            found: locations.len(),
        });
    }
    if img_size == 0 {
        return Err(DataError::ShapeMismatch { expected: vec![0, 0], found: 0 });
    }
    let dims = ArrayDim::from_shape(&[img_size, img_size]);
    let mut mask = dims.alloc(0.);
    let to_index = |k: f64| -> usize {
        let idx = ((k + 0.5) * img_size as f64).round_ties_even().max(0.) as usize;
        idx.min(img_size - 1)
    };
    for s in 0..locations.rows() {
        let i = to_index(*locations.get(s, 0));
        let j = to_index(*locations.get(s, 1));
        mask[dims.calc_addr(&[i, j])] = 1.;
    }
    Grid::new(mask, dims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_scan() {
        // [0 1]
        // [1 1]
        let mask = Grid::new(vec![0., 1., 1., 1.], ArrayDim::from_shape(&[2, 2])).unwrap();
        let loc = mask_to_locations(&mask);
        assert_eq!(loc.shape(), &[3, 2]);
        // (0,1), (1,0), (1,1)
        assert_eq!(*loc.get(0, 0), -0.5);
        assert_eq!(*loc.get(0, 1), 0.);
        assert_eq!(*loc.get(1, 0), 0.);
        assert_eq!(*loc.get(1, 1), -0.5);
        assert_eq!(*loc.get(2, 0), 0.);
        assert_eq!(*loc.get(2, 1), 0.);
    }

    #[test]
    fn only_exact_ones_are_sampled() {
        let mask = Grid::new(vec![0.5, 2., 0., 1.], ArrayDim::from_shape(&[2, 2])).unwrap();
        assert_eq!(mask_to_locations(&mask).rows(), 1);
    }

    #[test]
    fn mask_survives_conversion() {
        let n = 8;
        let dims = ArrayDim::from_shape(&[n, n]);
        let mut data = dims.alloc(0.);
        for addr in (0..dims.numel()).step_by(3) {
            data[addr] = 1.;
        }
        let mask = Grid::new(data, dims).unwrap();
        let back = locations_to_mask(&mask_to_locations(&mask), n).unwrap();
        assert_eq!(back, mask);
    }

    #[test]
    fn bad_locations_shape_is_an_error() {
        let loc = Grid::new(vec![0.; 6], ArrayDim::from_shape(&[2, 3])).unwrap();
        assert!(matches!(
            locations_to_mask(&loc, 4),
            Err(DataError::ShapeMismatch { found: 6, .. })
        ));
    }

    #[test]
    fn zero_image_size_is_an_error() {
        let loc = Grid::new(vec![0., 0.], ArrayDim::from_shape(&[1, 2])).unwrap();
        assert!(locations_to_mask(&loc, 0).is_err());
    }

    #[test]
    fn upper_edge_is_clamped() {
        // 0.49 * 4 + 2 rounds to 4, one past the last index
        let loc = Grid::new(vec![0.49, -0.5], ArrayDim::from_shape(&[1, 2])).unwrap();
        let mask = locations_to_mask(&loc, 4).unwrap();
        assert_eq!(*mask.get(3, 0), 1.);
        assert_eq!(mask.data.iter().sum::<f64>(), 1.);
    }
}
