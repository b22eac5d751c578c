//! Search operations on `BoundedArray`
//!
//! Linear search leaves the array alone. The two self-organizing variants
//! reorder the array on a hit so repeated lookups of frequent keys get cheaper:
//! - transposition swaps the hit one slot toward the front
//! - move-to-front swaps the hit with the first element
//!
//! Both take `&mut self`; the reordering is the visible effect of the call.
//! All searches report the index where the key was found *before* any swap.

use crate::domain::bounded_array::BoundedArray;

/// Search strategy selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Plain front-to-back scan
    Linear,
    /// Scan, then swap the hit with its predecessor
    Transposition,
    /// Scan, then swap the hit with the first element
    MoveToFront,
    /// Logarithmic search; the array must be sorted ascending
    Binary,
}

impl SearchStrategy {
    /// All strategies, in the order the walkthrough runs them
    pub const ALL: [SearchStrategy; 4] = [
        SearchStrategy::Linear,
        SearchStrategy::Transposition,
        SearchStrategy::MoveToFront,
        SearchStrategy::Binary,
    ];

    /// Whether a hit may reorder the array
    pub fn reorders(self) -> bool {
        matches!(self, Self::Transposition | Self::MoveToFront)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Transposition => "transposition",
            Self::MoveToFront => "move-to-front",
            Self::Binary => "binary",
        }
    }
}

impl BoundedArray {
    /// Lowest index holding `key`, or `None`
    pub fn linear_search(&self, key: i32) -> Option<usize> {
        self.as_slice().iter().position(|&value| value == key)
    }

    /// Linear search that swaps the hit with the element before it
    ///
    /// A hit at index 0 has no predecessor and is left in place.
    pub fn transposition_search(&mut self, key: i32) -> Option<usize> {
        let index = self.linear_search(key)?;
        if index > 0 {
            self.swap(index, index - 1);
        }
        Some(index)
    }

    /// Linear search that swaps the hit with the first element
    pub fn move_to_front_search(&mut self, key: i32) -> Option<usize> {
        let index = self.linear_search(key)?;
        self.swap(index, 0);
        Some(index)
    }

    /// Binary search over live elements
    ///
    /// Precondition: the array is sorted ascending (see [`BoundedArray::is_sorted`]).
    /// This is not checked; on unsorted input the result is unspecified but the
    /// call never panics. With duplicates, the lowest matching index is returned.
    pub fn binary_search(&self, key: i32) -> Option<usize> {
        let values = self.as_slice();
        let mut left = 0;
        let mut right = values.len();

        while left < right {
            let mid = left + (right - left) / 2;
            if values[mid] < key {
                left = mid + 1;
            } else {
                right = mid;
            }
        }

        (left < values.len() && values[left] == key).then_some(left)
    }

    /// Search with the given strategy
    pub fn search(&mut self, key: i32, strategy: SearchStrategy) -> Option<usize> {
        match strategy {
            SearchStrategy::Linear => self.linear_search(key),
            SearchStrategy::Transposition => self.transposition_search(key),
            SearchStrategy::MoveToFront => self.move_to_front_search(key),
            SearchStrategy::Binary => self.binary_search(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_array() -> BoundedArray {
        BoundedArray::from_slice(&[1, 3, 5, 6, 7, 9, 2, 4], 10).unwrap()
    }

    #[test]
    fn test_linear_search_found() {
        let arr = search_array();
        assert_eq!(arr.linear_search(7), Some(4));
    }

    #[test]
    fn test_linear_search_not_found() {
        let arr = search_array();
        assert_eq!(arr.linear_search(8), None);
    }

    #[test]
    fn test_linear_search_returns_lowest_duplicate() {
        let arr = BoundedArray::from_slice(&[4, 2, 4, 2], 4).unwrap();
        assert_eq!(arr.linear_search(2), Some(1));
    }

    #[test]
    fn test_linear_search_ignores_dead_slots() {
        let mut arr = BoundedArray::from_slice(&[1, 2, 3], 5).unwrap();
        arr.delete(2).unwrap();
        assert_eq!(arr.linear_search(3), None);
    }

    #[test]
    fn test_transposition_search_swaps_with_predecessor() {
        let mut arr = search_array();
        assert_eq!(arr.transposition_search(7), Some(4));
        assert_eq!(arr.as_slice(), &[1, 3, 5, 7, 6, 9, 2, 4]);

        // Repeated lookups keep moving it forward
        assert_eq!(arr.transposition_search(7), Some(3));
        assert_eq!(arr.as_slice(), &[1, 3, 7, 5, 6, 9, 2, 4]);
    }

    #[test]
    fn test_transposition_search_first_position() {
        let mut arr = search_array();
        assert_eq!(arr.transposition_search(1), Some(0));
        assert_eq!(arr.as_slice(), search_array().as_slice());
    }

    #[test]
    fn test_transposition_search_not_found() {
        let mut arr = search_array();
        assert_eq!(arr.transposition_search(100), None);
        assert_eq!(arr, search_array());
    }

    #[test]
    fn test_move_to_front_search() {
        let mut arr = search_array();
        assert_eq!(arr.move_to_front_search(7), Some(4));
        assert_eq!(arr.as_slice(), &[7, 3, 5, 6, 1, 9, 2, 4]);
        assert_eq!(arr.move_to_front_search(7), Some(0));
    }

    #[test]
    fn test_move_to_front_search_not_found() {
        let mut arr = search_array();
        assert_eq!(arr.move_to_front_search(-1), None);
        assert_eq!(arr, search_array());
    }

    #[test]
    fn test_search_on_empty_array() {
        let mut arr = BoundedArray::new(3);
        for strategy in SearchStrategy::ALL {
            assert_eq!(arr.search(1, strategy), None, "{}", strategy.name());
        }
    }

    #[test]
    fn test_binary_search() {
        let arr = BoundedArray::from_slice(&[1, 3, 5, 6, 7, 9, 11, 14, 17], 10).unwrap();
        assert_eq!(arr.binary_search(7), Some(4));
        assert_eq!(arr.binary_search(1), Some(0));
        assert_eq!(arr.binary_search(17), Some(8));
        assert_eq!(arr.binary_search(8), None);
        assert_eq!(arr.binary_search(0), None);
        assert_eq!(arr.binary_search(18), None);
    }

    #[test]
    fn test_binary_search_duplicates_returns_lowest() {
        let arr = BoundedArray::from_slice(&[1, 2, 2, 2, 3], 5).unwrap();
        assert_eq!(arr.binary_search(2), Some(1));
    }

    #[test]
    fn test_search_dispatch_matches_direct_calls() {
        let mut a = search_array();
        let mut b = search_array();
        assert_eq!(
            a.search(9, SearchStrategy::MoveToFront),
            b.move_to_front_search(9)
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_reorders() {
        assert!(!SearchStrategy::Linear.reorders());
        assert!(SearchStrategy::Transposition.reorders());
        assert!(SearchStrategy::MoveToFront.reorders());
        assert!(!SearchStrategy::Binary.reorders());
    }
}
