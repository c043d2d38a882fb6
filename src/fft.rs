//! In-place radix-2 Cooley-Tukey FFT
//!
//! The signal is held in two parallel single precision arrays, real and
//! imaginary part. Both transforms are unnormalized in the forward direction
//! and scaled by `1/N` in the inverse direction.
//!
//! ```
//! # use mcubench::fft::{fft_radix2, ifft_radix2, sine};
//! let (mut re, mut im) = ([0.0; 16], [0.0; 16]);
//! sine(&mut re, &mut im, 1);
//! let x = re;
//! fft_radix2(&mut re, &mut im);
//! assert!((im[1] + 8.0).abs() < 1e-5);
//! ifft_radix2(&mut re, &mut im);
//! assert!(re.iter().zip(x).all(|(y, x)| (y - x).abs() < 1e-5));
//! ```

use core::f32::consts::PI;

use num_complex::Complex32;
use num_traits::Float;

use crate::{Buffer, Error, Method, Task, Workload};

include!(concat!(env!("OUT_DIR"), "/twiddle_table.rs"));

/// Transform length of the reference configuration
pub const FFT_CAPACITY: usize = 128;

/// Reorder both arrays into bit-reversed index order
///
/// The element at `i` is swapped with the element at the index whose
/// `log2(n)` bits are those of `i` reversed. A single forward scan keeps a
/// running bit-reversed counter `j`, no index table is needed.
///
/// `n = re.len() = im.len()` must be a power of two.
pub fn bit_reverse<T>(re: &mut [T], im: &mut [T]) {
    let n = re.len();
    debug_assert_eq!(n, im.len());
    let mut j = 0;
    for i in 0..n {
        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
        // Reversed increment: clear leading ones, set the next zero
        let mut m = n >> 1;
        while m > 0 && j >= m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }
}

/// Butterfly network on bit-reversed input
///
/// `conj` selects the conjugate twiddles of the inverse transform.
fn butterflies(re: &mut [f32], im: &mut [f32], conj: bool) {
    let n = re.len();
    for stage in 1..=n.trailing_zeros() {
        let m = 1 << stage;
        let half = m >> 1;
        let [c, s] = STAGE_TWIDDLE[stage as usize];
        let w_m = Complex32::new(c, if conj { -s } else { s });
        for k in (0..n).step_by(m) {
            // Running twiddle, not renormalized
            let mut w = Complex32::new(1.0, 0.0);
            for j in 0..half {
                let (t, u) = (k + j, k + j + half);
                let p = w * Complex32::new(re[u], im[u]);
                re[u] = re[t] - p.re;
                im[u] = im[t] - p.im;
                re[t] += p.re;
                im[t] += p.im;
                w = w * w_m;
            }
        }
    }
}

/// Forward FFT in place
///
/// Computes the unnormalized DFT `X[k] = sum_i x[i] exp(-2 pi i k/n)`.
///
/// `n = re.len() = im.len()` must be a power of two. This is a precondition,
/// checked only in debug builds.
pub fn fft_radix2(re: &mut [f32], im: &mut [f32]) {
    debug_assert!(re.len().is_power_of_two());
    debug_assert_eq!(re.len(), im.len());
    bit_reverse(re, im);
    butterflies(re, im, false);
}

/// Inverse FFT in place
///
/// Conjugate twiddles followed by `1/n` scaling: the inverse of
/// [`fft_radix2()`] up to rounding.
pub fn ifft_radix2(re: &mut [f32], im: &mut [f32]) {
    debug_assert!(re.len().is_power_of_two());
    debug_assert_eq!(re.len(), im.len());
    bit_reverse(re, im);
    butterflies(re, im, true);
    let g = 1.0 / re.len() as f32;
    for (re, im) in re.iter_mut().zip(im.iter_mut()) {
        *re *= g;
        *im *= g;
    }
}

/// Real sine with `bin` periods over the length of the arrays
///
/// `re[i] = sin(2 pi bin i / n)`, `im[i] = 0`.
pub fn sine(re: &mut [f32], im: &mut [f32], bin: usize) {
    let n = re.len();
    for (i, (re, im)) in re.iter_mut().zip(im.iter_mut()).enumerate() {
        let phase = (bin * i) % n;
        *re = Float::sin(2.0 * PI * phase as f32 / n as f32);
        *im = 0.0;
    }
}

/// Real and imaginary parts
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Signal<const N: usize> {
    pub re: Buffer<f32, N>,
    pub im: Buffer<f32, N>,
}

impl<const N: usize> Signal<N> {
    /// A zero signal of length `n`
    pub fn new(n: usize) -> Result<Self, Error> {
        if !n.is_power_of_two() {
            return Err(Error::NotPowerOfTwo(n));
        }
        Ok(Self {
            re: Buffer::new(n)?,
            im: Buffer::new(n)?,
        })
    }

    /// Iterate over the elements as complex numbers
    pub fn iter(&self) -> impl Iterator<Item = Complex32> {
        self.re
            .iter()
            .zip(self.im.iter())
            .map(|(re, im)| Complex32::new(*re, *im))
    }
}

/// FFT workload on a single period sine
#[derive(Copy, Clone, Debug, Default)]
pub struct FftRadix2<const N: usize>;

impl<const N: usize> Workload for FftRadix2<N> {
    const TASK: Task = Task::Fft;
    const METHOD: Method = Method::Radix2;
    type State = Signal<N>;

    fn setup(&self, n: usize) -> Result<Self::State, Error> {
        let mut x = Signal::new(n)?;
        sine(&mut x.re, &mut x.im, 1);
        Ok(x)
    }

    fn run(&self, state: &mut Self::State) {
        fft_radix2(&mut state.re, &mut state.im);
    }
}
