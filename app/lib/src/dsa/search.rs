//! Binary search over sorted slices.

/// Find `target` in an ascending `sorted` slice.
///
/// Returns the index of an element equal to `target`, or `None` if there is
/// none. With duplicates, any matching index may be returned. The result is
/// unspecified if `sorted` is not actually sorted.
///
/// # Example
///
/// ```rust
/// use simd_practice::dsa::binary_search;
///
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&values, &7), Some(3));
/// assert_eq!(binary_search(&values, &4), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0, sorted.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(target) {
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
            std::cmp::Ordering::Equal => return Some(mid),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search_finds_every_element() {
        let values: Vec<u16> = (0..100).map(|x| x * 2).collect();
        for (i, value) in values.iter().enumerate() {
            assert_eq!(binary_search(&values, value), Some(i));
        }
    }

    #[test]
    fn test_binary_search_missing() {
        let values = [2, 4, 6];
        assert_eq!(binary_search(&values, &1), None);
        assert_eq!(binary_search(&values, &5), None);
        assert_eq!(binary_search(&values, &7), None);
    }

    #[test]
    fn test_binary_search_empty() {
        let values: [i32; 0] = [];
        assert_eq!(binary_search(&values, &0), None);
    }

    #[test]
    fn test_binary_search_duplicates() {
        let values = [1, 2, 2, 2, 3];
        let index = binary_search(&values, &2).unwrap();
        assert_eq!(values[index], 2);
    }
}
