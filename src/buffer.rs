use core::ops::{Deref, DerefMut};

use crate::Error;

/// Fixed capacity work buffer
///
/// Storage for `N` elements of which the first `len` are in use.
/// The invariant `len <= N` is established at construction: sizes are
/// checked at the boundary and a buffer can never be overrun.
///
/// ```
/// # use mcubench::Buffer;
/// let b = Buffer::<i32, 8>::from_fn(3, |i| i as i32).unwrap();
/// assert_eq!(&b[..], &[0, 1, 2]);
/// assert!(Buffer::<i32, 8>::from_fn(9, |i| i as i32).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Buffer<T, const N: usize> {
    data: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> Buffer<T, N> {
    /// Storage capacity
    pub const CAPACITY: usize = N;

    /// Check a requested length against the capacity.
    pub fn check(len: usize) -> Result<(), Error> {
        if len > N {
            Err(Error::Capacity {
                size: len,
                capacity: N,
            })
        } else {
            Ok(())
        }
    }

    /// A buffer of `len` default elements
    pub fn new(len: usize) -> Result<Self, Error> {
        Self::check(len)?;
        Ok(Self {
            data: [T::default(); N],
            len,
        })
    }

    /// A buffer of `len` elements populated from their index
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> Result<Self, Error> {
        let mut b = Self::new(len)?;
        for (i, x) in b.iter_mut().enumerate() {
            *x = f(i);
        }
        Ok(b)
    }
}

impl<T, const N: usize> Buffer<T, N> {
    /// Number of elements in use
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no elements are in use
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The elements in use
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// The elements in use, mutably
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }
}

impl<T, const N: usize> Deref for Buffer<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for Buffer<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
