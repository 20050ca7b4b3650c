//! Word case conversions.
//!
//! Words are separated by a single ASCII space and nothing else. Runs of
//! spaces therefore yield empty words, and tabs or newlines stay inside
//! words: `"a  b"` has three words, `"a", "", "b"`.

fn words(s: &str) -> std::str::Split<'_, char> {
    s.split(' ')
}

/// Upper-cases the first character and either keeps or lower-cases the rest.
fn capitalize(word: &str, lower_rest: bool) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let rest = chars.as_str();
    let mut out: String = first.to_uppercase().collect();
    if lower_rest {
        out.push_str(&rest.to_lowercase());
    } else {
        out.push_str(rest);
    }
    out
}

/// `"hello wORLD"` → `"Hello WORLD"`; only first letters change.
#[must_use]
pub fn first_letter_capital(s: &str) -> String {
    words(s)
        .map(|word| capitalize(word, false))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"hello wORLD"` → `"Hello World"`.
#[must_use]
pub fn to_title_case(s: &str) -> String {
    words(s)
        .map(|word| capitalize(word, true))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"hello wORLD"` → `"HelloWorld"`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    words(s).map(|word| capitalize(word, true)).collect()
}

/// `"Hello wORLD"` → `"helloWorld"`.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let mut parts = words(s);
    let mut out = parts.next().map(str::to_lowercase).unwrap_or_default();
    for word in parts {
        out.push_str(&capitalize(word, true));
    }
    out
}

/// `"Hello World"` → `"hello_world"`.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    words(s)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
