//! TypeScript text helpers shared by the emitters.

use crate::field_types::ts_type;
use crate::model::Field;
use crate::naming::to_camel_case;

/// Formats a field as an interface member: `name?: type`.
pub fn format_field(field: &Field) -> String {
    let optional_marker = if field.required { "" } else { "?" };
    format!("{}{}: {}", prop_key(&field.name), optional_marker, ts_type(field))
}

/// Whether `name` can be written bare as a property name.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Property name as written in an object literal or interface.
pub fn prop_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        js_str(name)
    }
}

/// `obj.name`, or `obj['name']` when the name is not an identifier.
pub fn prop_access(obj: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{}.{}", obj, name)
    } else {
        format!("{}[{}]", obj, js_str(name))
    }
}

/// Optional-chained variant of [`prop_access`].
pub fn prop_access_opt(obj: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{}?.{}", obj, name)
    } else {
        format!("{}?.[{}]", obj, js_str(name))
    }
}

/// Prefix for the local variables an emitter declares per field.
pub fn local_ident(name: &str) -> String {
    let camel = to_camel_case(name);
    match camel.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => camel,
        _ => format!("field{}", camel),
    }
}

/// Single-quoted string literal.
pub fn js_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Text safe to place inside a `/** ... */` block on one line.
pub fn comment_text(s: &str) -> String {
    s.replace("*/", "* /").replace(['\n', '\r'], " ")
}

/// Escapes text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;

    #[test]
    fn test_format_field() {
        assert_eq!(format_field(&Field::new("title", FieldType::Text).required()), "title: string");
        assert_eq!(format_field(&Field::new("done", FieldType::Boolean)), "done?: boolean");
        assert_eq!(format_field(&Field::new("due date", FieldType::Text)), "'due date'?: string");
    }

    #[test]
    fn test_prop_access() {
        assert_eq!(prop_access("item", "title"), "item.title");
        assert_eq!(prop_access("item", "due-date"), "item['due-date']");
        assert_eq!(prop_access_opt("item", "title"), "item?.title");
        assert_eq!(prop_access_opt("item", "2nd"), "item?.['2nd']");
    }

    #[test]
    fn test_local_ident() {
        assert_eq!(local_ident("title"), "title");
        assert_eq!(local_ident("due date"), "dueDate");
        assert_eq!(local_ident("2nd"), "field2nd");
        assert_eq!(local_ident("!!"), "field");
    }

    #[test]
    fn test_js_str() {
        assert_eq!(js_str("plain"), "'plain'");
        assert_eq!(js_str("it's"), r"'it\'s'");
        assert_eq!(js_str("a\\b\nc"), r"'a\\b\nc'");
    }

    #[test]
    fn test_comment_text() {
        assert_eq!(comment_text("a */ b\nc"), "a * / b c");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<Tom & Jerry's>"), "&lt;Tom &amp; Jerry&#39;s&gt;");
    }
}
