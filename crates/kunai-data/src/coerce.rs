//! Loose emptiness and string-key coercions.
//!
//! [`Blank`] decides what [`is_empty`] reports: sequences and maps are blank
//! when they hold nothing, every other value is blank when it is "falsy"
//! (`0`, `NaN`, `""`, `false`, `null`, or absent). [`AsKey`] is the string
//! projection used to bucket heterogeneous values, under which `1` and `"1"`
//! are the same key.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// Emptiness under loose truthiness rules.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().is_some_and(|x| x == 0.0 || x.is_nan()),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl Blank for f64 {
    fn is_blank(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

impl Blank for f32 {
    fn is_blank(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

macro_rules! impl_blank_for_integers {
    ($($ty:ty),*) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_blank_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Map<String, Value> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S: BuildHasher> Blank for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// `None` is the absent value and therefore blank.
impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

/// ## Summary
/// Reports whether `value` is empty.
///
/// Sequences and maps are empty when they have no elements. Anything else is
/// empty when it is falsy, so `0`, `NaN`, `""`, `false`, `null` and `None` all
/// count as empty.
#[must_use]
pub fn is_empty<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}

/// True unless the value is missing or `null`.
#[must_use]
pub fn is_defined(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

/// True for strings with at least one non-whitespace character.
#[must_use]
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// String projection used as a bucketing key.
pub trait AsKey {
    fn as_key(&self) -> String;
}

impl AsKey for Value {
    fn as_key(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.to_string()
                } else if let Some(u) = n.as_u64() {
                    u.to_string()
                } else {
                    n.as_f64().map_or_else(|| n.to_string(), number_key)
                }
            }
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    if item.is_null() {
                        String::new()
                    } else {
                        item.as_key()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }
}

impl AsKey for str {
    fn as_key(&self) -> String {
        self.to_owned()
    }
}

impl AsKey for String {
    fn as_key(&self) -> String {
        self.clone()
    }
}

impl AsKey for bool {
    fn as_key(&self) -> String {
        self.to_string()
    }
}

impl AsKey for char {
    fn as_key(&self) -> String {
        self.to_string()
    }
}

impl AsKey for f64 {
    fn as_key(&self) -> String {
        number_key(*self)
    }
}

impl AsKey for f32 {
    fn as_key(&self) -> String {
        number_key(f64::from(*self))
    }
}

macro_rules! impl_as_key_for_integers {
    ($($ty:ty),*) => {
        $(
            impl AsKey for $ty {
                fn as_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_as_key_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// `None` projects to `"undefined"`.
impl<T: AsKey> AsKey for Option<T> {
    fn as_key(&self) -> String {
        self.as_ref()
            .map_or_else(|| "undefined".to_string(), AsKey::as_key)
    }
}

impl<T: AsKey + ?Sized> AsKey for &T {
    fn as_key(&self) -> String {
        (**self).as_key()
    }
}

fn number_key(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        if x.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if x == 0.0 {
        // Covers -0.0 as well
        "0".to_string()
    } else if (1e-6..1e21).contains(&x.abs()) {
        x.to_string()
    } else {
        exponent_key(x)
    }
}

/// `1e21` → `"1e+21"`, `1.5e-7` → `"1.5e-7"`.
fn exponent_key(x: f64) -> String {
    let formatted = format!("{x:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
