//! Software benchmark suite

use core::fmt::Write;

use miniconf::{Leaf, Tree};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    BubbleSort, Clock, DIVIDER, Error, FIBONACCI_RECURSIVE_MAX, FibonacciIterative, FibonacciRecursive,
    LoopOverhead, MATRIX_CAPACITY, MatrixMultiply, QuickSort, SORT_CAPACITY, Workload,
    fft::{FFT_CAPACITY, FftRadix2},
    measure,
};

/// Benchmark family
///
/// Declaration order is the order of the suite.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Benchmark {
    /// Iterative and recursive Fibonacci, interleaved per `n`
    Fibonacci,
    /// Bubble sort on descending input
    BubbleSort,
    /// Quick sort on descending input
    QuickSort,
    /// Counted loop overhead
    LoopOverhead,
    /// Integer matrix multiplication
    Matrix,
    /// Radix-2 FFT of a sine
    Fft,
}

impl Benchmark {
    /// CSV header line
    pub const fn header(&self) -> &'static str {
        match self {
            Self::Fibonacci => "task,method,n,result,time_us",
            Self::LoopOverhead => "task,method,iterations,time_us",
            Self::BubbleSort | Self::QuickSort | Self::Matrix | Self::Fft => {
                "task,method,size,time_us"
            }
        }
    }

    /// Largest admissible size
    ///
    /// Both Fibonacci methods run for every index, the recursive one bounds it.
    pub const fn capacity(&self) -> usize {
        match self {
            Self::Fibonacci => FIBONACCI_RECURSIVE_MAX,
            Self::BubbleSort | Self::QuickSort => SORT_CAPACITY,
            Self::LoopOverhead => usize::MAX,
            Self::Matrix => MATRIX_CAPACITY,
            Self::Fft => FFT_CAPACITY,
        }
    }

    /// Check a configured size
    ///
    /// Fibonacci admits `n = 0`, all other sizes must be positive.
    pub fn check(&self, size: usize) -> Result<(), Error> {
        if size == 0 && *self != Self::Fibonacci {
            return Err(Error::Empty);
        }
        if size > self.capacity() {
            return Err(Error::Capacity {
                size,
                capacity: self.capacity(),
            });
        }
        if *self == Self::Fft && !size.is_power_of_two() {
            return Err(Error::NotPowerOfTwo(size));
        }
        Ok(())
    }
}

/// Size tables of the suite
#[derive(Clone, Debug, Tree)]
pub struct SuiteConfig {
    /// Fibonacci indices
    pub fibonacci: Leaf<[usize; 4]>,
    /// Bubble sort lengths
    pub bubble_sort: Leaf<[usize; 3]>,
    /// Quick sort lengths
    pub quick_sort: Leaf<[usize; 3]>,
    /// Loop iteration counts
    pub loop_overhead: Leaf<[usize; 4]>,
    /// Matrix dimensions
    pub matrix: Leaf<[usize; 2]>,
    /// FFT length
    pub fft: Leaf<usize>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            fibonacci: Leaf([10, 20, 30, 35]),
            bubble_sort: Leaf([10, 50, 100]),
            quick_sort: Leaf([10, 50, 100]),
            loop_overhead: Leaf([1000, 10000, 100000, 1000000]),
            matrix: Leaf([10, 20]),
            fft: Leaf(FFT_CAPACITY),
        }
    }
}

impl SuiteConfig {
    /// Sizes for a family, in run order
    pub fn sizes(&self, bench: Benchmark) -> &[usize] {
        match bench {
            Benchmark::Fibonacci => &self.fibonacci.0,
            Benchmark::BubbleSort => &self.bubble_sort.0,
            Benchmark::QuickSort => &self.quick_sort.0,
            Benchmark::LoopOverhead => &self.loop_overhead.0,
            Benchmark::Matrix => &self.matrix.0,
            Benchmark::Fft => core::slice::from_ref(&self.fft.0),
        }
    }

    /// Check every size of every family
    pub fn validate(&self) -> Result<(), Error> {
        for bench in Benchmark::iter() {
            for &size in self.sizes(bench) {
                bench.check(size).inspect_err(|e| {
                    log::warn!("{bench:?} size {size} rejected: {e}");
                })?;
            }
        }
        Ok(())
    }
}

/// Software benchmark suite driver
///
/// ```
/// # use mcubench::{FnClock, Suite};
/// let mut out = String::new();
/// let records = Suite::default().run(&FnClock(|| 0), &mut out).unwrap();
/// assert_eq!(records, 21);
/// assert!(out.starts_with("task,method,n,result,time_us\nfibonacci,iterative,10,55,0\n"));
/// assert!(out.ends_with("fft,radix2,128,0\n----------------------\n"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Suite {
    config: SuiteConfig,
}

impl Suite {
    /// A suite over a validated configuration
    pub fn new(config: SuiteConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Run all families in order
    ///
    /// Each family emits its header line, one record line per measurement, and
    /// the divider line. The configuration is validated before anything is
    /// measured or written.
    ///
    /// Returns the number of records written.
    pub fn run<C: Clock, W: Write>(&self, clock: &C, sink: &mut W) -> Result<usize, Error> {
        self.config.validate()?;
        let mut records = 0;
        for bench in Benchmark::iter() {
            writeln!(sink, "{}", bench.header())?;
            for &size in self.config.sizes(bench) {
                records += match bench {
                    Benchmark::Fibonacci => {
                        emit(clock, sink, &FibonacciIterative, size)?;
                        emit(clock, sink, &FibonacciRecursive, size)?;
                        2
                    }
                    Benchmark::BubbleSort => {
                        emit(clock, sink, &BubbleSort::<SORT_CAPACITY>, size)?;
                        1
                    }
                    Benchmark::QuickSort => {
                        emit(clock, sink, &QuickSort::<SORT_CAPACITY>, size)?;
                        1
                    }
                    Benchmark::LoopOverhead => {
                        emit(clock, sink, &LoopOverhead, size)?;
                        1
                    }
                    Benchmark::Matrix => {
                        emit(clock, sink, &MatrixMultiply::<MATRIX_CAPACITY>, size)?;
                        1
                    }
                    Benchmark::Fft => {
                        emit(clock, sink, &FftRadix2::<FFT_CAPACITY>, size)?;
                        1
                    }
                };
            }
            writeln!(sink, "{DIVIDER}")?;
        }
        Ok(records)
    }
}

/// Measure and write one record line
fn emit<W: Workload, C: Clock, S: Write>(
    clock: &C,
    sink: &mut S,
    workload: &W,
    size: usize,
) -> Result<(), Error> {
    let record = measure(clock, workload, size)?.record(workload);
    log::debug!("{record}");
    writeln!(sink, "{record}")?;
    Ok(())
}
