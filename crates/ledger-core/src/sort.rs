//! Sorting for the store's cached view.

/// Return a new ascending copy of `values`. The input is left untouched.
///
/// Equal elements are indistinguishable, so stability does not matter here.
pub fn sort_values(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Check whether `values` is in ascending order.
pub fn is_sorted_ascending(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
