use crate::{Buffer, Error, Method, Task, Workload};

/// Sort buffer capacity of the reference configuration
pub const SORT_CAPACITY: usize = 100;

/// In-place bubble sort, ascending
///
/// `n - 1` passes of adjacent compare-and-swap, each pass shrinking the
/// unsorted suffix by one. `O(n^2)` comparisons independent of the data.
pub fn bubble_sort<T: PartialOrd>(v: &mut [T]) {
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
            }
        }
    }
}

/// Lomuto partition around the last element
///
/// Returns the final pivot index `p`: `v[..p] < v[p] <= v[p + 1..]`.
fn partition<T: PartialOrd>(v: &mut [T]) -> usize {
    let high = v.len() - 1;
    let mut i = 0;
    for j in 0..high {
        if v[j] < v[high] {
            v.swap(i, j);
            i += 1;
        }
    }
    v.swap(i, high);
    i
}

/// In-place recursive quick sort, ascending
///
/// Lomuto partition with the last element as pivot, recursing on both sides
/// of the pivot. Strictly descending input is the `O(n^2)` worst case with
/// recursion depth `n`.
pub fn quick_sort<T: PartialOrd>(v: &mut [T]) {
    if v.len() > 1 {
        let p = partition(v);
        let (lo, hi) = v.split_at_mut(p);
        quick_sort(lo);
        quick_sort(&mut hi[1..]);
    }
}

/// Worst-case sort input: `n, n - 1, ..., 1`
pub fn descending<const N: usize>(n: usize) -> Result<Buffer<i32, N>, Error> {
    Buffer::from_fn(n, |i| (n - i) as _)
}

/// Bubble sort workload on descending input
#[derive(Copy, Clone, Debug, Default)]
pub struct BubbleSort<const N: usize>;

impl<const N: usize> Workload for BubbleSort<N> {
    const TASK: Task = Task::BubbleSort;
    const METHOD: Method = Method::Bubble;
    type State = Buffer<i32, N>;

    fn setup(&self, size: usize) -> Result<Self::State, Error> {
        descending(size)
    }

    fn run(&self, state: &mut Self::State) {
        bubble_sort(state.as_mut_slice());
    }
}

/// Quick sort workload on descending input
#[derive(Copy, Clone, Debug, Default)]
pub struct QuickSort<const N: usize>;

impl<const N: usize> Workload for QuickSort<N> {
    const TASK: Task = Task::QuickSort;
    const METHOD: Method = Method::Quick;
    type State = Buffer<i32, N>;

    fn setup(&self, size: usize) -> Result<Self::State, Error> {
        descending(size)
    }

    fn run(&self, state: &mut Self::State) {
        quick_sort(state.as_mut_slice());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{measure, testing::StepClock};
    use quickcheck_macros::quickcheck;

    fn is_ascending_permutation(v: &[i32]) -> bool {
        // strictly ascending 1..=n
        v.iter().enumerate().all(|(i, x)| *x == i as i32 + 1)
    }

    #[test]
    fn worst_case() {
        for n in [0, 1, 2, 10, 50, 100] {
            let mut b = descending::<SORT_CAPACITY>(n).unwrap();
            assert_eq!(b.first().copied(), (n > 0).then_some(n as i32));
            bubble_sort(b.as_mut_slice());
            assert!(is_ascending_permutation(&b), "{n}");

            let mut q = descending::<SORT_CAPACITY>(n).unwrap();
            quick_sort(q.as_mut_slice());
            assert_eq!(b, q);
        }
        assert_eq!(
            descending::<SORT_CAPACITY>(101),
            Err(Error::Capacity {
                size: 101,
                capacity: SORT_CAPACITY
            })
        );
    }

    #[test]
    fn pivot() {
        let mut v = [3, 7, 1, 9, 5];
        let p = partition(&mut v);
        assert_eq!(p, 2);
        assert_eq!(v[p], 5);
        assert!(v[..p].iter().all(|x| *x < 5));
        assert!(v[p + 1..].iter().all(|x| *x >= 5));
    }

    #[quickcheck]
    fn bubble_matches_std(mut v: Vec<i32>) -> bool {
        let mut want = v.clone();
        want.sort();
        bubble_sort(&mut v);
        v == want
    }

    #[quickcheck]
    fn quick_matches_std(mut v: Vec<i32>) -> bool {
        let mut want = v.clone();
        want.sort();
        quick_sort(&mut v);
        v == want
    }

    #[test]
    fn idempotent() {
        let clock = StepClock::new(0, 1);
        for n in [10, 50, 100] {
            let a = measure(&clock, &QuickSort::<SORT_CAPACITY>, n).unwrap();
            let b = measure(&clock, &QuickSort::<SORT_CAPACITY>, n).unwrap();
            assert_eq!(a.state, b.state);
            assert!(is_ascending_permutation(&a.state));
            let c = measure(&clock, &BubbleSort::<SORT_CAPACITY>, n).unwrap();
            assert_eq!(a.state, c.state);
            assert_eq!(c.record(&BubbleSort::<SORT_CAPACITY>).result, None);
        }
    }
}
