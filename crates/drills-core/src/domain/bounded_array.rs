//! Fixed-capacity integer array
//!
//! The capacity is set at construction and never changes. Live elements occupy
//! indices `0..len()`; every mutating operation checks the capacity and index
//! bounds up front and leaves the array untouched when a check fails.

use std::fmt;
use thiserror::Error;

/// Bounded array errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The array already holds `capacity` elements
    #[error("Capacity exceeded: array is full ({capacity} elements)")]
    CapacityExceeded { capacity: usize },
    /// Index outside the valid range for the operation
    #[error("Index out of range: index {index}, length {length}")]
    IndexOutOfRange { index: usize, length: usize },
}

/// Integer sequence with a fixed maximum element count
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedArray {
    elements: Vec<i32>,
    capacity: usize,
}

impl BoundedArray {
    /// Create an empty array holding at most `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an array from initial values
    ///
    /// Fails with `CapacityExceeded` if there are more values than `capacity`.
    pub fn from_slice(values: &[i32], capacity: usize) -> Result<Self, ArrayError> {
        if values.len() > capacity {
            return Err(ArrayError::CapacityExceeded { capacity });
        }
        let mut elements = Vec::with_capacity(capacity);
        elements.extend_from_slice(values);
        Ok(Self { elements, capacity })
    }

    /// Current number of live elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Maximum number of elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    /// Element at `index`, if it is live
    pub fn get(&self, index: usize) -> Option<i32> {
        self.elements.get(index).copied()
    }

    /// Live elements in order
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    /// Check if live elements are in ascending (non-decreasing) order
    pub fn is_sorted(&self) -> bool {
        self.elements.windows(2).all(|w| w[0] <= w[1])
    }

    /// Place `value` after the last live element
    ///
    /// Fails with `CapacityExceeded` when full; the array is left unchanged.
    pub fn append(&mut self, value: i32) -> Result<(), ArrayError> {
        self.ensure_room()?;
        self.elements.push(value);
        Ok(())
    }

    /// Insert `value` at `index`, shifting `index..len()` one slot right
    ///
    /// Valid for `0 <= index <= len()`; `index == len()` behaves like `append`.
    /// An index above `len()` fails with `IndexOutOfRange` and a full array with
    /// `CapacityExceeded`. In both cases the array is left unchanged.
    pub fn insert(&mut self, index: usize, value: i32) -> Result<(), ArrayError> {
        let length = self.len();
        if index > length {
            return Err(ArrayError::IndexOutOfRange { index, length });
        }
        self.ensure_room()?;
        self.elements.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail one slot left
    ///
    /// An index at or above `len()` fails with `IndexOutOfRange`; the array is
    /// left unchanged.
    pub fn delete(&mut self, index: usize) -> Result<i32, ArrayError> {
        let length = self.len();
        if index >= length {
            return Err(ArrayError::IndexOutOfRange { index, length });
        }
        Ok(self.elements.remove(index))
    }

    /// Swap two live elements (both indices must be `< len()`)
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
    }

    fn ensure_room(&self) -> Result<(), ArrayError> {
        if self.is_full() {
            return Err(ArrayError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl fmt::Display for BoundedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elements are")?;
        let mut first = true;
        for value in &self.elements {
            if !first {
                write!(f, "  ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        Ok(())
    }
}
