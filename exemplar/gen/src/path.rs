//! Path selection inside example payloads.
//!
//! Wire names are usually plain keys, but client-side flattening produces
//! dotted names such as `properties.name`, meaning "the `name` field of the
//! `properties` object". A backslash escapes a literal dot (`odata\.type`),
//! and a segment may end in array indices (`items[0]`).

use serde_json::Value;

/// A single step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Splits a wire-name path into segments.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::path::{parse_path, Segment};
///
/// assert_eq!(parse_path("name"), vec![Segment::Key("name".into())]);
/// assert_eq!(
///     parse_path("properties.name"),
///     vec![Segment::Key("properties".into()), Segment::Key("name".into())]
/// );
/// assert_eq!(parse_path(r"odata\.type"), vec![Segment::Key("odata.type".into())]);
/// assert_eq!(
///     parse_path("items[1]"),
///     vec![Segment::Key("items".into()), Segment::Index(1)]
/// );
/// ```
pub fn parse_path(path: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut key = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'.') => {
                key.push('.');
                chars.next();
            }
            '.' => {
                if !key.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut key)));
                }
            }
            '[' => {
                let mut digits = String::new();
                while let Some(&d) = chars.peek() {
                    chars.next();
                    if d == ']' {
                        break;
                    }
                    digits.push(d);
                }
                match digits.parse::<usize>() {
                    Ok(index) => {
                        if !key.is_empty() {
                            segments.push(Segment::Key(std::mem::take(&mut key)));
                        }
                        segments.push(Segment::Index(index));
                    }
                    // Not an index: keep the brackets as part of the key.
                    Err(_) => {
                        key.push('[');
                        key.push_str(&digits);
                        key.push(']');
                    }
                }
            }
            other => key.push(other),
        }
    }

    if !key.is_empty() {
        segments.push(Segment::Key(key));
    }

    segments
}

/// Selects the value at `path` inside `value`.
///
/// An exact key match on an object takes precedence over path
/// interpretation, so keys that legitimately contain dots still resolve.
/// Returns `None` when any step is missing or walks into a non-container.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::path::select;
/// use serde_json::json;
///
/// let value = json!({ "properties": { "name": "acme" }, "a.b": 1 });
/// assert_eq!(select(&value, "properties.name"), Some(&json!("acme")));
/// assert_eq!(select(&value, "a.b"), Some(&json!(1)));
/// assert_eq!(select(&value, "properties.size"), None);
/// ```
pub fn select<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(found) = value.as_object().and_then(|map| map.get(path)) {
        return Some(found);
    }

    let segments = parse_path(path);
    if segments.is_empty() {
        return None;
    }

    segments
        .iter()
        .try_fold(value, |current, segment| match segment {
            Segment::Key(key) => current.as_object()?.get(key),
            Segment::Index(index) => current.as_array()?.get(*index),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_empty_path() {
        assert!(parse_path("").is_empty());
        assert!(parse_path(".").is_empty());
    }

    #[test]
    fn parse_multiple_segments() {
        assert_eq!(
            parse_path("a.b.c"),
            vec![
                Segment::Key("a".into()),
                Segment::Key("b".into()),
                Segment::Key("c".into())
            ]
        );
    }

    #[test]
    fn parse_non_numeric_brackets_stay_in_key() {
        assert_eq!(parse_path("tags[x]"), vec![Segment::Key("tags[x]".into())]);
    }

    #[test]
    fn select_nested_object() {
        let value = json!({ "p": { "q": { "r": 42 } } });
        assert_eq!(select(&value, "p.q.r"), Some(&json!(42)));
    }

    #[test]
    fn select_through_array_index() {
        let value = json!({ "items": [{ "id": "a" }, { "id": "b" }] });
        assert_eq!(select(&value, "items[1].id"), Some(&json!("b")));
        assert_eq!(select(&value, "items[5].id"), None);
    }

    #[test]
    fn select_into_scalar_is_none() {
        let value = json!({ "p": 3 });
        assert_eq!(select(&value, "p.q"), None);
        assert_eq!(select(&json!("text"), "p"), None);
    }

    #[test]
    fn select_escaped_dot() {
        let value = json!({ "odata.type": "Widget" });
        assert_eq!(select(&value, r"odata\.type"), Some(&json!("Widget")));
    }

    #[test]
    fn select_present_null() {
        let value = json!({ "p": null });
        assert_eq!(select(&value, "p"), Some(&Value::Null));
    }
}
