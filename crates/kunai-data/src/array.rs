//! Sequence helpers.
//!
//! Membership tests use `PartialEq`, so they work for any element type,
//! including [`serde_json::Value`], at quadratic cost for the set-like
//! operations.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::coerce::AsKey;
use crate::error::{DataError, DataResult};

/// First element matching `predicate`.
pub fn find_in_array<T, P>(arr: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    arr.iter().find(|item| predicate(item))
}

/// Elements matching `predicate`, in order.
pub fn filter_array<T, P>(arr: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    arr.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Stable sort of a copy of `arr`; the input is left untouched.
pub fn sort_array<T, F>(arr: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = arr.to_vec();
    sorted.sort_by(compare);
    sorted
}

/// Appends `item` unless an equal element is already present.
pub fn add_unique<T: PartialEq>(arr: &mut Vec<T>, item: T) {
    if !arr.contains(&item) {
        arr.push(item);
    }
}

/// Removes the first element equal to `item`, if any.
pub fn remove_item<T: PartialEq>(arr: &mut Vec<T>, item: &T) {
    if let Some(index) = arr.iter().position(|candidate| candidate == item) {
        arr.remove(index);
    }
}

/// ## Summary
/// Elements of `a` that do not appear in `b`.
///
/// Keeps the order of `a` and any duplicates it contains.
#[must_use]
pub fn get_array_difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| !b.contains(item)).cloned().collect()
}

/// ## Summary
/// Deduplicated concatenation of `a` and `b`.
///
/// Each distinct element appears once, at the position of its first
/// occurrence; elements of `a` come before elements only found in `b`.
#[must_use]
pub fn get_array_union<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    dedupe(a.iter().chain(b))
}

/// Stable dedupe keeping first occurrences.
#[must_use]
pub fn get_unique_values<T: PartialEq + Clone>(arr: &[T]) -> Vec<T> {
    dedupe(arr.iter())
}

fn dedupe<'a, T, I>(items: I) -> Vec<T>
where
    T: PartialEq + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut unique: Vec<T> = Vec::new();
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// ## Summary
/// Splits `arr` into consecutive groups of at most `size` elements.
///
/// The last group holds the remainder and may be shorter.
///
/// ## Errors
/// Returns `DataError::InvalidChunkSize` when `size` is zero.
pub fn chunk_array<T: Clone>(arr: &[T], size: usize) -> DataResult<Vec<Vec<T>>> {
    if size == 0 {
        return Err(DataError::InvalidChunkSize(size));
    }
    Ok(arr.chunks(size).map(<[T]>::to_vec).collect())
}

/// ## Summary
/// Counts elements by their string projection.
///
/// Elements are bucketed by [`AsKey::as_key`], so `1` and `"1"` are counted
/// together. Keys iterate in byte-wise string order, not in order of first
/// appearance and not numerically: `"10"` comes before `"2"`.
#[must_use]
pub fn count_occurrences<T: AsKey>(arr: &[T]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for item in arr {
        *counts.entry(item.as_key()).or_insert(0) += 1;
    }
    counts
}

/// Uniformly shuffled copy of `arr`, using the thread-local RNG.
#[must_use]
pub fn shuffle_array<T: Clone>(arr: &[T]) -> Vec<T> {
    shuffle_array_with(arr, &mut rand::thread_rng())
}

/// Uniformly shuffled copy of `arr` (Fisher-Yates) driven by `rng`.
pub fn shuffle_array_with<T: Clone, R: Rng + ?Sized>(arr: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = arr.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
