use crate::*;

/// Inclusive index range `[left, right]` of one maximal run of `true` values in a mask.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval
{
    pub left: usize,
    pub right: usize,
}

impl Interval
{
    pub const fn new(left: usize, right: usize) -> Self {
        Interval { left, right }
    }

    /// Amount of samples covered by the interval, always at least 1.
    /// 
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Always false, every interval holds at least its left sample.
    /// 
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The samples of `values` covered by the interval.
    /// 
    #[inline]
    pub fn slice<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        &values[self.left..=self.right]
    }
}

/// Returns every maximal run of `true` values in the mask, ordered by ascending left index.
/// 
/// A run starts at `i` when `mask[i]` is set and either `i == 0` or `mask[i - 1]` is not, and
/// ends at `i` when `mask[i]` is set and either `i` is the last index or `mask[i + 1]` is not.
/// 
pub fn true_intervals(mask: &[bool]) -> Vec<Interval> {
    let mut intervals = Vec::new();
    let mut start = None;
    for (i, &value) in mask.iter().enumerate() {
        match (value, start) {
            (true, None) => start = Some(i),
            (false, Some(left)) => {
                intervals.push(Interval::new(left, i - 1));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(left) = start {
        intervals.push(Interval::new(left, mask.len() - 1));
    }
    intervals
}

/// Left and right boundary indices of the `true` runs of the mask, the k-th left boundary pairs
/// up with the k-th right boundary.
/// 
pub fn index_true_intervals(mask: &[bool]) -> (Vec<usize>, Vec<usize>) {
    true_intervals(mask)
        .iter()
        .map(|interval| (interval.left, interval.right))
        .unzip()
}

/// Number every `true` run of the mask, returning for each sample the 0-based ordinal of the run
/// it belongs to, or -1 where the mask is not set.
/// 
/// `[false, false, true, true, false, true]` becomes `[-1, -1, 0, 0, -1, 1]`.
/// 
pub fn get_interval_number(mask: &[bool]) -> Vec<isize> {
    let mut numbers = vec![-1isize; mask.len()];
    for (n, interval) in true_intervals(mask).iter().enumerate() {
        numbers[interval.left..=interval.right].fill(n as isize);
    }
    numbers
}

/// Apply `reducer` to the samples of `values` spanned by each `true` run of `mask`, returning one
/// result per run in ascending order. Extra reducer arguments are simply captured by the closure.
/// 
/// ```
/// use lib_processing::apply_function_to_intervals;
/// 
/// let means = apply_function_to_intervals(
///     &[0.0, 1.0, 2.0, 3.0, 4.0],
///     &[true, true, false, true, false],
///     |chunk: &[f64]| chunk.iter().sum::<f64>() / chunk.len() as f64,
/// ).unwrap();
/// assert_eq!(means, vec![0.5, 3.0]);
/// ```
/// 
pub fn apply_function_to_intervals<T, R, F>(values: &[T], mask: &[bool], mut reducer: F) -> Result<Vec<R>, ProcessingError>
where
    F: FnMut(&[T]) -> R,
{
    check_aligned(mask.len(), values.len())?;
    Ok(true_intervals(mask)
        .iter()
        .map(|interval| reducer(interval.slice(values)))
        .collect())
}
