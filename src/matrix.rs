use core::ops::{Add, Mul};

use num_traits::Zero;

use crate::{Error, Method, Task, Workload};

/// Matrix capacity (rows and columns) of the reference configuration
pub const MATRIX_CAPACITY: usize = 20;

/// Square `n x n` matrix in fixed `M x M` storage
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T, const M: usize> {
    n: usize,
    data: [[T; M]; M],
}

impl<T: Copy + Zero, const M: usize> Matrix<T, M> {
    /// A zero `n x n` matrix
    pub fn zeros(n: usize) -> Result<Self, Error> {
        if n > M {
            return Err(Error::Capacity {
                size: n,
                capacity: M,
            });
        }
        Ok(Self {
            n,
            data: [[T::zero(); M]; M],
        })
    }

    /// An `n x n` matrix populated from `f(row, column)`
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self, Error> {
        let mut m = Self::zeros(n)?;
        for (i, row) in m.data.iter_mut().take(n).enumerate() {
            for (j, x) in row.iter_mut().take(n).enumerate() {
                *x = f(i, j);
            }
        }
        Ok(m)
    }
}

impl<T, const M: usize> Matrix<T, M> {
    /// Dimension `n`
    pub fn size(&self) -> usize {
        self.n
    }

    /// Element at `row`, `column`
    ///
    /// # Panics
    /// If either index is out of the `n x n` range.
    pub fn get(&self, row: usize, column: usize) -> &T {
        assert!(row < self.n && column < self.n);
        &self.data[row][column]
    }

    /// Rows of the `n x n` range
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data[..self.n].iter().map(|r| &r[..self.n])
    }
}

/// `C = A x B` by triple nested loop accumulation
///
/// `C[i][j] = sum_k A[i][k] * B[k][j]`. All three share dimension `n`.
/// Aliasing is ruled out by the borrows.
pub fn matrix_multiply<T, const M: usize>(a: &Matrix<T, M>, b: &Matrix<T, M>, c: &mut Matrix<T, M>)
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    let n = a.n;
    debug_assert_eq!(n, b.n);
    debug_assert_eq!(n, c.n);
    for i in 0..n {
        for j in 0..n {
            let mut acc = T::zero();
            for k in 0..n {
                acc = acc + a.data[i][k] * b.data[k][j];
            }
            c.data[i][j] = acc;
        }
    }
}

/// Operands and product
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatrixState<const M: usize> {
    pub a: Matrix<i32, M>,
    pub b: Matrix<i32, M>,
    pub c: Matrix<i32, M>,
}

/// Matrix multiplication workload
///
/// Operands are `A[i][j] = i + j` and `B[i][j] = i - j`.
#[derive(Copy, Clone, Debug, Default)]
pub struct MatrixMultiply<const M: usize>;

impl<const M: usize> Workload for MatrixMultiply<M> {
    const TASK: Task = Task::Matrix;
    const METHOD: Method = Method::Multiply;
    type State = MatrixState<M>;

    fn setup(&self, n: usize) -> Result<Self::State, Error> {
        Ok(MatrixState {
            a: Matrix::from_fn(n, |i, j| (i + j) as _)?,
            b: Matrix::from_fn(n, |i, j| i as i32 - j as i32)?,
            c: Matrix::zeros(n)?,
        })
    }

    fn run(&self, state: &mut Self::State) {
        let MatrixState { a, b, c } = state;
        matrix_multiply(a, b, c);
    }
}
