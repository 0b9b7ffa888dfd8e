//! Trailing window operations over indicator values

use num_traits::Float;

/// Trailing simple moving average aligned to the end of each window
///
/// The output has the same length as `values`. Slot `i` holds the mean of
/// `values[i + 1 - window..=i]`; the first `window - 1` slots are `None`
/// because not enough history exists yet. They are absent, not zero.
///
/// A `window` of zero, or one longer than the input, yields all `None`.
///
/// # Example
/// ```rust
/// use trendcast::temporal::moving_average;
///
/// let ma = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
/// assert_eq!(ma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
/// ```
pub fn moving_average<T: Float>(values: &[T], window: usize) -> Vec<Option<T>> {
    let mut result = Vec::with_capacity(values.len());
    if window == 0 || window > values.len() {
        result.resize(values.len(), None);
        return result;
    }

    let divisor = match T::from(window) {
        Some(d) => d,
        None => {
            result.resize(values.len(), None);
            return result;
        }
    };

    result.resize(window - 1, None);
    for chunk in values.windows(window) {
        let sum = chunk.iter().fold(T::zero(), |acc, &v| acc + v);
        result.push(Some(sum / divisor));
    }

    result
}
