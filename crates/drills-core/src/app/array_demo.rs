//! Array walkthrough
//!
//! Runs the fixed scenario the array drill demonstrates: build a 10-slot array,
//! append, insert and delete, then look a key up with every search strategy.
//! Each reordering strategy gets its own fresh copy of the search data so the
//! effects can be compared side by side.

use crate::constants::DEFAULT_CAPACITY;
use crate::domain::bounded_array::{ArrayError, BoundedArray};
use crate::domain::search::SearchStrategy;

const MUTATION_DATA: [i32; 5] = [1, 3, 5, 6, 7];
const SEARCH_DATA: [i32; 8] = [1, 3, 5, 6, 7, 9, 2, 4];
const SORTED_SEARCH_DATA: [i32; 9] = [1, 3, 5, 6, 7, 9, 11, 14, 17];

/// A single mutation and the array state after it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationStep {
    pub operation: Mutation,
    pub after: BoundedArray,
}

/// Mutation applied in the walkthrough
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Append { value: i32 },
    Insert { index: usize, value: i32 },
    Delete { index: usize, removed: i32 },
}

/// One strategy's search result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchStep {
    pub strategy: SearchStrategy,
    pub before: BoundedArray,
    pub index: Option<usize>,
    pub after: BoundedArray,
}

/// Full walkthrough result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walkthrough {
    pub initial: BoundedArray,
    pub mutations: Vec<MutationStep>,
    pub key: i32,
    pub searches: Vec<SearchStep>,
}

/// Run the walkthrough, searching for `key`
pub fn run_walkthrough(key: i32) -> Result<Walkthrough, ArrayError> {
    let initial = BoundedArray::from_slice(&MUTATION_DATA, DEFAULT_CAPACITY)?;
    let mutations = run_mutations(initial.clone())?;
    let searches = run_searches(key)?;

    Ok(Walkthrough {
        initial,
        mutations,
        key,
        searches,
    })
}

fn run_mutations(mut arr: BoundedArray) -> Result<Vec<MutationStep>, ArrayError> {
    let mut steps = Vec::with_capacity(3);

    arr.append(9)?;
    steps.push(MutationStep {
        operation: Mutation::Append { value: 9 },
        after: arr.clone(),
    });

    arr.insert(3, 22)?;
    steps.push(MutationStep {
        operation: Mutation::Insert {
            index: 3,
            value: 22,
        },
        after: arr.clone(),
    });

    let removed = arr.delete(3)?;
    steps.push(MutationStep {
        operation: Mutation::Delete { index: 3, removed },
        after: arr,
    });

    Ok(steps)
}

fn run_searches(key: i32) -> Result<Vec<SearchStep>, ArrayError> {
    SearchStrategy::ALL
        .into_iter()
        .map(|strategy| -> Result<SearchStep, ArrayError> {
            let data: &[i32] = match strategy {
                SearchStrategy::Binary => &SORTED_SEARCH_DATA,
                _ => &SEARCH_DATA,
            };
            let before = BoundedArray::from_slice(data, DEFAULT_CAPACITY)?;
            let mut after = before.clone();
            let index = after.search(key, strategy);
            Ok(SearchStep {
                strategy,
                before,
                index,
                after,
            })
        })
        .collect()
}
