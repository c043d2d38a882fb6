//! Uniform measurement protocol

use core::{
    hint::black_box,
    sync::atomic::{self, Ordering},
};

use crate::{Clock, Error, Method, Record, Task, elapsed};

/// A benchmarked kernel bound to its input setup and result extraction
///
/// * [`Workload::setup()`] populates fresh input for a given size. It runs
///   before the clock is started and is the only fallible step.
/// * [`Workload::run()`] is the kernel under measurement.
/// * [`Workload::value()`] extracts the scalar result column, if any, after
///   the clock is stopped. The state is dropped afterwards.
pub trait Workload {
    /// Task column
    const TASK: Task;
    /// Method column
    const METHOD: Method;
    /// Input and output storage owned by a single measurement
    type State;

    /// Populate input for `size`
    fn setup(&self, size: usize) -> Result<Self::State, Error>;

    /// Run the kernel
    fn run(&self, state: &mut Self::State);

    /// Scalar result reported in the record
    fn value(&self, _state: &Self::State) -> Option<u64> {
        None
    }
}

/// Outcome of one measurement
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurement<S> {
    /// Input size or iteration count
    pub size: usize,
    /// Elapsed time in microseconds
    pub elapsed: u64,
    /// Kernel state after the run
    pub state: S,
}

impl<S> Measurement<S> {
    /// Render the result record
    pub fn record<W: Workload<State = S>>(&self, workload: &W) -> Record {
        Record {
            task: W::TASK,
            method: W::METHOD,
            size: self.size,
            result: workload.value(&self.state),
            elapsed: self.elapsed,
        }
    }
}

/// Measure one kernel invocation
///
/// Input population happens strictly before the first clock reading.
/// Only the kernel is bracketed by the two readings.
pub fn measure<W: Workload, C: Clock>(
    clock: &C,
    workload: &W,
    size: usize,
) -> Result<Measurement<W::State>, Error> {
    let mut state = workload.setup(size)?;
    let state_ref = black_box(&mut state);
    let start = clock.now();
    atomic::compiler_fence(Ordering::SeqCst);
    workload.run(state_ref);
    atomic::compiler_fence(Ordering::SeqCst);
    let end = clock.now();
    Ok(Measurement {
        size,
        elapsed: elapsed(start, end),
        state,
    })
}
