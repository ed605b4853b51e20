//! Summation over integer slices.
//!
//! Every sum is checked: a total outside the `i64` range is reported as
//! [`SumError::Overflow`] instead of wrapping.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SumError {
    /// The running total left the `i64` range.
    #[error("sum overflows i64")]
    Overflow,
}

/// Sum every number in the slice. An empty slice sums to 0.
///
/// ```
/// assert_eq!(drills_core::sum(&[1, 2, 3, 4, 5]), Ok(15));
/// ```
pub fn sum(numbers: &[i64]) -> Result<i64, SumError> {
    numbers
        .iter()
        .try_fold(0i64, |acc, &n| acc.checked_add(n))
        .ok_or(SumError::Overflow)
}

/// Sum each group independently, preserving order.
///
/// ```
/// assert_eq!(drills_core::sum_all(&[vec![1, 2], vec![0, 9]]), Ok(vec![3, 9]));
/// ```
pub fn sum_all<S: AsRef<[i64]>>(groups: &[S]) -> Result<Vec<i64>, SumError> {
    groups.iter().map(|g| sum(g.as_ref())).collect()
}

/// Sum each group without its first element. Empty groups contribute 0.
pub fn sum_all_tails<S: AsRef<[i64]>>(groups: &[S]) -> Result<Vec<i64>, SumError> {
    groups
        .iter()
        .map(|g| match g.as_ref() {
            [] => Ok(0),
            [_, tail @ ..] => sum(tail),
        })
        .collect()
}
