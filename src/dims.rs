/*
    Column-major array layout, matching the storage order of MATLAB files.
    The number of dimensions is static so address calculations stay on the stack.
 */

/// max number of axes a MAT variable may carry
pub const N_DIMS: usize = 8;


#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct ArrayDim {
    shape: [usize; N_DIMS],
    strides: [usize; N_DIMS],
}

impl Default for ArrayDim {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayDim {

    pub fn new() -> ArrayDim {
        ArrayDim{
            shape: [1;N_DIMS],
            strides: [1;N_DIMS],
        }
    }

    /// build a layout from a shape. Axes beyond N_DIMS are folded into the last axis.
    pub fn from_shape(shape: &[usize]) -> ArrayDim {
        let mut dims = [1;N_DIMS];
        for (ax,&s) in shape.iter().enumerate() {
            if ax < N_DIMS {
                dims[ax] = s;
            } else {
                dims[N_DIMS - 1] *= s;
            }
        }
        let mut strides = [1;N_DIMS];
        Self::calc_strides(&dims, &mut strides);
        Self {
            shape: dims,
            strides,
        }
    }

    /// return the shape with all singleton dimensions intact
    pub fn shape(&self) -> &[usize; N_DIMS] {
        &self.shape
    }

    /// return the shape with trailing singleton dimensions removed
    pub fn shape_ns(&self) -> &[usize] {
        match self.shape.iter().rev().position(|&dim| dim != 1) {
            Some(i) => &self.shape[..N_DIMS - i],
            None => &self.shape[..1],
        }
    }

    /// number of axes once trailing singletons are dropped. MATLAB never reports fewer than 2.
    pub fn ndim(&self) -> usize {
        self.shape_ns().len().max(2)
    }

    pub fn size(&self, dim:usize) -> usize {
        assert!(dim < N_DIMS);
        self.shape[dim]
    }

    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn with_dim(mut self,axis:usize,dim:usize) -> ArrayDim {
        assert!(axis < N_DIMS,"only {N_DIMS} axes are supported");
        self.shape[axis] = dim;
        Self::calc_strides(&self.shape,&mut self.strides);
        self
    }

    fn calc_strides(dims:&[usize],strides:&mut [usize]) {
        let mut stride = 1;
        for (dim,s) in dims.iter().zip(strides.iter_mut()) {
            *s = stride;
            stride *= dim;
        }
    }

    #[inline]
    /// element address of a subscript
    pub fn calc_addr(&self,idx: &[usize]) -> usize {
        idx.iter().zip(self.strides.iter()).map(|(i,stride)| i * stride).sum()
    }

    #[inline]
    /// subscript of an element address
    pub fn calc_idx(&self,addr:usize) -> [usize;N_DIMS] {
        debug_assert!(addr < self.numel(), "address {} exceeds number of elements {}", addr, self.numel());
        let mut addr = addr;
        let mut idx = [0usize; N_DIMS];
        for (i,&d) in idx.iter_mut().zip(self.shape.iter()) {
            *i = addr % d;
            addr /= d;
        }
        idx
    }

    /// allocates a vector of values the size of dims
    pub fn alloc<T:Sized + Clone>(&self,value:T) -> Vec<T> {
        vec![value;self.numel()]
    }

    #[inline]
    /// destination of each input coordinate under a forward fft shift
    pub fn fft_shift_coords(&self,input: &[usize], out: &mut [usize]) {
        debug_assert!(input.len() <= N_DIMS);
        debug_assert!(out.len() <= N_DIMS);
        for ((o, &i), &d) in out.iter_mut().zip(input).zip(self.shape.iter()) {
            *o = (i + d / 2) % d;
        }
    }

    #[inline]
    /// destination of each input coordinate under an inverse fft shift
    pub fn ifft_shift_coords(&self, input: &[usize], out: &mut [usize]) {
        debug_assert!(input.len() <= N_DIMS);
        debug_assert!(out.len() <= N_DIMS);
        for ((o, &i), &d) in out.iter_mut().zip(input).zip(self.shape.iter()) {
            *o = (i + (d + 1) / 2) % d;
        }
    }

}
