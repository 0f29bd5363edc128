//! Sorting and searching helpers used by the practice driver.
//!
//! - [`merge_sort`]: stable top-down merge sort
//! - [`quick_sort`]: in-place quick sort with a median-of-three pivot
//! - [`binary_search`]: lookup in a sorted slice

mod search;
mod sort;

pub use search::binary_search;
pub use sort::{merge_sort, quick_sort, SortAlgorithm};
