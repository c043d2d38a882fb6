use core::hint::black_box;

use crate::{Error, Method, Task, Workload};

/// Increment `counter` `iterations` times in a counted loop
///
/// Each iteration passes the counter through [`black_box`] so that the
/// optimizer can neither fold nor elide the loop.
pub fn loop_increment(counter: &mut u32, iterations: usize) {
    for _ in 0..iterations {
        *counter = black_box(*counter).wrapping_add(1);
    }
}

/// Iteration count and counter
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoopState {
    pub iterations: usize,
    pub counter: u32,
}

/// Loop control overhead workload
#[derive(Copy, Clone, Debug, Default)]
pub struct LoopOverhead;

impl Workload for LoopOverhead {
    const TASK: Task = Task::Loop;
    const METHOD: Method = Method::ForLoop;
    type State = LoopState;

    fn setup(&self, iterations: usize) -> Result<Self::State, Error> {
        Ok(LoopState {
            iterations,
            counter: 0,
        })
    }

    fn run(&self, state: &mut Self::State) {
        loop_increment(&mut state.counter, state.iterations);
    }
}
