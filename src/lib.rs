#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

mod error;
pub use error::*;
mod clock;
pub use clock::*;
mod buffer;
pub use buffer::*;
mod record;
pub use record::*;
mod measure;
pub use measure::*;
mod fibonacci;
pub use fibonacci::*;
mod sort;
pub use sort::*;
mod overhead;
pub use overhead::*;
mod matrix;
pub use matrix::*;
pub mod fft;
mod suite;
pub use suite::*;
mod mode;
pub use mode::*;
#[cfg(any(test, feature = "std"))]
mod sink;
#[cfg(any(test, feature = "std"))]
pub use sink::*;

#[cfg(test)]
pub mod testing;
