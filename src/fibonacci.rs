use core::hint::black_box;

use crate::{Error, Method, Task, Workload};

/// Largest index whose Fibonacci number fits a `u64`
pub const FIBONACCI_MAX: usize = 93;

/// Largest index admitted by the recursive workload
///
/// `F(n)` recursive costs about `F(n + 1)` calls: `F(41) ~ 1.7e8`.
pub const FIBONACCI_RECURSIVE_MAX: usize = 40;

/// Fibonacci number `F(n)` by iteration
///
/// Two rolling accumulators, `O(n)`.
///
/// # Panics
/// Overflows (and panics in debug builds) for `n > FIBONACCI_MAX`.
pub fn fibonacci_iterative(n: u32) -> u64 {
    if n <= 1 {
        return n as _;
    }
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 2..=n {
        (prev, curr) = (curr, prev + curr);
    }
    curr
}

/// Fibonacci number `F(n)` by naive double recursion
///
/// No memoization: `O(phi^n)` calls. This is the point of the benchmark.
pub fn fibonacci_recursive(n: u32) -> u64 {
    if n <= 1 {
        return n as _;
    }
    fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
}

/// Index and computed value
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FibonacciState {
    pub n: u32,
    pub value: u64,
}

fn fibonacci_setup(n: usize, capacity: usize) -> Result<FibonacciState, Error> {
    if n > capacity {
        return Err(Error::Capacity { size: n, capacity });
    }
    Ok(FibonacciState {
        n: n as _,
        value: 0,
    })
}

/// Iterative Fibonacci workload
#[derive(Copy, Clone, Debug, Default)]
pub struct FibonacciIterative;

impl Workload for FibonacciIterative {
    const TASK: Task = Task::Fibonacci;
    const METHOD: Method = Method::Iterative;
    type State = FibonacciState;

    fn setup(&self, n: usize) -> Result<Self::State, Error> {
        fibonacci_setup(n, FIBONACCI_MAX)
    }

    fn run(&self, state: &mut Self::State) {
        state.value = fibonacci_iterative(black_box(state.n));
    }

    fn value(&self, state: &Self::State) -> Option<u64> {
        Some(state.value)
    }
}

/// Recursive Fibonacci workload
#[derive(Copy, Clone, Debug, Default)]
pub struct FibonacciRecursive;

impl Workload for FibonacciRecursive {
    const TASK: Task = Task::Fibonacci;
    const METHOD: Method = Method::Recursive;
    type State = FibonacciState;

    fn setup(&self, n: usize) -> Result<Self::State, Error> {
        fibonacci_setup(n, FIBONACCI_RECURSIVE_MAX)
    }

    fn run(&self, state: &mut Self::State) {
        state.value = fibonacci_recursive(black_box(state.n));
    }

    fn value(&self, state: &Self::State) -> Option<u64> {
        Some(state.value)
    }
}
