//! Result records and their CSV rendering

use core::fmt;

use serde::{Deserialize, Serialize};

/// Divider line between benchmark families
pub const DIVIDER: &str = "----------------------";

/// Task column
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Task {
    Fibonacci,
    BubbleSort,
    QuickSort,
    Loop,
    Matrix,
    Fft,
}

/// Method column
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Iterative,
    Recursive,
    Bubble,
    Quick,
    ForLoop,
    Multiply,
    #[strum(serialize = "radix2")]
    #[serde(rename = "radix2")]
    Radix2,
}

/// One measurement, rendered as one CSV line
///
/// Column order: `task,method,size[,result],time_us`.
/// The `result` column is present only for kernels that compute a scalar.
///
/// ```
/// # use mcubench::{Method, Record, Task};
/// let r = Record {
///     task: Task::Fibonacci,
///     method: Method::Iterative,
///     size: 10,
///     result: Some(55),
///     elapsed: 3,
/// };
/// assert_eq!(format!("{r}"), "fibonacci,iterative,10,55,3");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Task name
    pub task: Task,
    /// Method name
    pub method: Method,
    /// Input size or iteration count
    pub size: usize,
    /// Computed scalar, if any
    pub result: Option<u64>,
    /// Elapsed time in microseconds
    pub elapsed: u64,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},", self.task, self.method, self.size)?;
        if let Some(result) = self.result {
            write!(f, "{result},")?;
        }
        write!(f, "{}", self.elapsed)
    }
}
