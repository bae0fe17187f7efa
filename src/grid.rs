use num_complex::Complex64;
use rayon::prelude::*;
use crate::dims::ArrayDim;
use crate::error::DataError;

/// An owned, column-major data buffer together with its layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub dims: ArrayDim,
}

impl<T> Grid<T> {

    /// pair a buffer with a layout. The element count must agree.
    pub fn new(data: Vec<T>, dims: ArrayDim) -> Result<Self, DataError> {
        if data.len() != dims.numel() {
            return Err(DataError::ShapeMismatch {
                expected: dims.shape_ns().to_vec(),
                found: data.len(),
            });
        }
        Ok(Self { data, dims })
    }

    pub fn shape(&self) -> &[usize] {
        self.dims.shape_ns()
    }

    pub fn rows(&self) -> usize {
        self.dims.size(0)
    }

    pub fn cols(&self) -> usize {
        self.dims.size(1)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// element at row i, column j of a 2D grid
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[self.dims.calc_addr(&[i, j])]
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        Grid {
            data: self.data.par_iter().map(f).collect(),
            dims: self.dims,
        }
    }

}

impl<T: Clone> Grid<T> {

    /// rotate a 2D grid by 180 degrees
    pub fn rot180(&self) -> Self {
        assert_eq!(self.dims.ndim(), 2, "rot180 expects a 2D grid");
        // (i,j) -> (n0-1-i, n1-1-j) is a full reversal of the column-major buffer
        let data = self.data.iter().rev().cloned().collect();
        Self { data, dims: self.dims }
    }

    /// mirror a 2D grid left to right
    pub fn fliplr(&self) -> Self {
        assert_eq!(self.dims.ndim(), 2, "fliplr expects a 2D grid");
        let n_rows = self.rows();
        let data = self.data
            .chunks_exact(n_rows)
            .rev()
            .flat_map(|col| col.iter().cloned())
            .collect();
        Self { data, dims: self.dims }
    }

}

impl Grid<f64> {
    pub fn to_complex(&self) -> Grid<Complex64> {
        self.map(|&x| Complex64::new(x, 0.))
    }
}

#[cfg(feature = "ndarray")]
impl<T: Clone> Grid<T> {
    /// copy a 2D grid into a fortran-ordered ndarray
    pub fn to_array2(&self) -> Result<ndarray::Array2<T>, DataError> {
        use ndarray::ShapeBuilder;
        ndarray::Array2::from_shape_vec((self.rows(), self.cols()).f(), self.data.clone())
            .map_err(|_| DataError::ShapeMismatch {
                expected: self.shape().to_vec(),
                found: self.data.len(),
            })
    }
}
