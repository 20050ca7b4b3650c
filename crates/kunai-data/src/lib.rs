//! Structural helpers for nested JSON-like data and plain sequences.
//!
//! ## Summary
//! Nested data is modelled as [`serde_json::Value`]: objects are records and
//! are traversed, arrays are sequences and are always treated as leaves by
//! the recursive operations in [`object`]. Values own their children, so a
//! nested value is always a finite tree and cycles cannot be expressed.

pub mod array;
pub mod case;
pub mod coerce;
pub mod error;
pub mod id;
pub mod object;
pub mod throttle;

pub use array::{
    add_unique, chunk_array, count_occurrences, filter_array, find_in_array, get_array_difference,
    get_array_union, get_unique_values, remove_item, shuffle_array, shuffle_array_with,
    sort_array,
};
pub use case::{first_letter_capital, to_camel_case, to_pascal_case, to_snake_case, to_title_case};
pub use coerce::{AsKey, Blank, is_defined, is_empty, is_non_empty_string};
pub use error::{DataError, DataResult};
pub use id::generate_uuid;
pub use object::{
    deep_clone, deep_merge, flatten_object, get_object_keys, get_safe_value, get_value,
    merge_objects, remove_null_undefined, remove_property, set_value,
};
pub use throttle::{Throttle, throttle};
