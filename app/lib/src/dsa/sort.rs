//! Comparison sorts over mutable slices.

use serde::{Deserialize, Serialize};

/// Which sorting algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    /// Stable merge sort (default).
    #[default]
    Merge,
    /// Unstable in-place quick sort.
    Quick,
}

impl SortAlgorithm {
    /// Sort `values` in ascending order with this algorithm.
    pub fn sort<T: Ord + Clone>(&self, values: &mut [T]) {
        match self {
            SortAlgorithm::Merge => merge_sort(values),
            SortAlgorithm::Quick => quick_sort(values),
        }
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortAlgorithm::Merge => write!(f, "merge"),
            SortAlgorithm::Quick => write!(f, "quick"),
        }
    }
}

/// Sort a slice in ascending order using a stable top-down merge sort.
///
/// Runs in O(n log n) time and allocates one scratch buffer of `n` elements.
///
/// # Example
///
/// ```rust
/// use simd_practice::dsa::merge_sort;
///
/// let mut values = vec![5, 1, 4, 2, 3];
/// merge_sort(&mut values);
/// assert_eq!(values, vec![1, 2, 3, 4, 5]);
/// ```
pub fn merge_sort<T: Ord + Clone>(values: &mut [T]) {
    if values.len() < 2 {
        return;
    }
    let mut scratch = values.to_vec();
    merge_sort_into(values, &mut scratch);
}

/// Sort `values` using `scratch` (same length) as temporary storage.
fn merge_sort_into<T: Ord + Clone>(values: &mut [T], scratch: &mut [T]) {
    let len = values.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = values.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort_into(left, left_scratch);
        merge_sort_into(right, right_scratch);
    }

    // Already ordered
    if values[mid - 1] <= values[mid] {
        return;
    }

    let (mut i, mut j) = (0, mid);
    for slot in scratch.iter_mut() {
        // `<=` keeps equal elements in their original order
        let take_left = j == len || (i < mid && values[i] <= values[j]);
        if take_left {
            *slot = values[i].clone();
            i += 1;
        } else {
            *slot = values[j].clone();
            j += 1;
        }
    }
    values.clone_from_slice(scratch);
}

/// Sort a slice in ascending order using quick sort.
///
/// Three-way partitioning around a median-of-three pivot: elements equal to
/// the pivot are settled in one pass and never revisited, so inputs with few
/// distinct keys sort in near-linear time. Recursion always descends into the
/// smaller partition, bounding stack depth at O(log n). Not stable.
///
/// # Example
///
/// ```rust
/// use simd_practice::dsa::quick_sort;
///
/// let mut values = vec![3, 3, 1, 2];
/// quick_sort(&mut values);
/// assert_eq!(values, vec![1, 2, 3, 3]);
/// ```
pub fn quick_sort<T: Ord>(values: &mut [T]) {
    let mut rest = values;
    while rest.len() > 1 {
        let (lt, gt) = partition(rest);
        let (left, tail) = std::mem::take(&mut rest).split_at_mut(lt);
        let right = &mut tail[gt - lt..];
        if left.len() < right.len() {
            quick_sort(left);
            rest = right;
        } else {
            quick_sort(right);
            rest = left;
        }
    }
}

/// Partition around a median-of-three pivot.
///
/// Returns `(lt, gt)` such that `values[..lt]` is below the pivot,
/// `values[lt..gt]` equals it, and `values[gt..]` is above it. The equal
/// range is never empty.
fn partition<T: Ord>(values: &mut [T]) -> (usize, usize) {
    let last = values.len() - 1;
    let mid = last / 2;

    // Order first, middle, last so the median lands in the middle
    if values[mid] < values[0] {
        values.swap(mid, 0);
    }
    if values[last] < values[0] {
        values.swap(last, 0);
    }
    if values[last] < values[mid] {
        values.swap(last, mid);
    }
    values.swap(0, mid);

    // values[lt] always holds a pivot-equal element
    let (mut lt, mut i, mut gt) = (0, 1, values.len());
    while i < gt {
        match values[i].cmp(&values[lt]) {
            std::cmp::Ordering::Less => {
                values.swap(lt, i);
                lt += 1;
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                gt -= 1;
                values.swap(i, gt);
            }
            std::cmp::Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
