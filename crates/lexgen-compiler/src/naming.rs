//! Identifier derivation from human-entered names.
//!
//! Every emitter goes through [`RecordNames`] (or the free functions below) so
//! that a record type gets exactly the same type name, function names, store
//! key and namespaced identifier in every generated file.

/// Converts a human-entered name to a TitleCase identifier.
///
/// Non-alphanumeric characters are dropped and act as word boundaries; the
/// first letter of each word is upper-cased, the rest is kept as typed.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect()
}

/// Converts a human-entered name to a lowerCamel identifier.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
    }
}

/// Lower-cases a name and keeps only `[a-z0-9]`.
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Builds the reverse-domain namespaced identifier (NSID) for a name.
///
/// `("example.com", "To Do")` becomes `com.example.todo`. Distinct names whose
/// sanitized forms coincide map to the same identifier.
pub fn nsid(domain: &str, name: &str) -> String {
    let mut parts: Vec<&str> = domain.split('.').rev().collect();
    let safe_name = sanitize_name(name);
    parts.push(&safe_name);
    parts.join(".")
}

/// npm package name for an app name.
pub fn package_name(app_name: &str) -> String {
    app_name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// All identifiers derived from one record type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordNames {
    /// The name as entered.
    pub raw: String,
    pub pascal: String,
    pub camel: String,
    pub nsid: String,
}

impl RecordNames {
    pub fn new(name: &str, domain: &str) -> Self {
        Self {
            raw: name.to_string(),
            pascal: to_pascal_case(name),
            camel: to_camel_case(name),
            nsid: nsid(domain, name),
        }
    }

    /// Interface holding one record's data.
    pub fn data_type(&self) -> String {
        format!("{}Data", self.pascal)
    }

    /// Interface of a paginated list response.
    pub fn response_type(&self) -> String {
        format!("{}Response", self.pascal)
    }

    /// Key of the record's list in the store and in list responses.
    pub fn collection_key(&self) -> String {
        format!("{}s", self.camel)
    }

    pub fn create_fn(&self) -> String {
        format!("create{}", self.pascal)
    }

    pub fn update_fn(&self) -> String {
        format!("update{}", self.pascal)
    }

    pub fn delete_fn(&self) -> String {
        format!("delete{}", self.pascal)
    }

    pub fn list_fn(&self) -> String {
        format!("get{}s", self.pascal)
    }

    /// Store manager setter replacing the record's list.
    pub fn setter_fn(&self) -> String {
        format!("set{}s", self.pascal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_case_conversions() {
        assert_eq!(to_pascal_case("todo"), "Todo");
        assert_eq!(to_pascal_case("To Do"), "ToDo");
        assert_eq!(to_pascal_case("blog-post item"), "BlogPostItem");
        assert_eq!(to_pascal_case("BlogPost"), "BlogPost");
        assert_eq!(to_camel_case("blog post"), "blogPost");
        assert_eq!(to_camel_case("  "), "");
    }

    #[test]
    fn test_nsid() {
        assert_eq!(nsid("example.com", "To Do"), "com.example.todo");
        assert_eq!(nsid("app.example.org", "Blog_Post"), "org.example.app.blogpost");
        assert_eq!(nsid("example.com", "To-Do"), nsid("example.com", "ToDo"));
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("My Cool App!"), "my-cool-app-");
        assert_eq!(package_name("todo-app"), "todo-app");
    }

    #[test]
    fn test_record_names() {
        let names = RecordNames::new("blog post", "example.com");
        assert_eq!(names.data_type(), "BlogPostData");
        assert_eq!(names.response_type(), "BlogPostResponse");
        assert_eq!(names.collection_key(), "blogPosts");
        assert_eq!(names.list_fn(), "getBlogPosts");
        assert_eq!(names.setter_fn(), "setBlogPosts");
        assert_eq!(names.nsid, "com.example.blogpost");
    }

    proptest! {
        #[test]
        fn nsid_is_deterministic(domain in "[a-z]{1,8}(\\.[a-z]{2,4}){1,2}", name in ".{0,24}") {
            prop_assert_eq!(nsid(&domain, &name), nsid(&domain, &name));
        }

        #[test]
        fn nsid_distinguishes_distinct_sanitized_names(
            domain in "[a-z]{1,8}\\.[a-z]{2,4}",
            a in "[A-Za-z0-9 _-]{1,16}",
            b in "[A-Za-z0-9 _-]{1,16}",
        ) {
            let same = sanitize_name(&a) == sanitize_name(&b);
            prop_assert_eq!(nsid(&domain, &a) == nsid(&domain, &b), same);
        }

        #[test]
        fn nsid_reverses_domain_exactly(labels in proptest::collection::vec("[a-z0-9]{1,6}", 1..5)) {
            let domain = labels.join(".");
            let id = nsid(&domain, "x");
            let mut expected: Vec<String> = labels.iter().rev().cloned().collect();
            expected.push("x".to_string());
            prop_assert_eq!(id, expected.join("."));
        }

        #[test]
        fn camel_only_differs_in_first_letter(name in "[A-Za-z][A-Za-z0-9 ]{0,16}") {
            let pascal = to_pascal_case(&name);
            let camel = to_camel_case(&name);
            prop_assert_eq!(pascal.to_lowercase(), camel.to_lowercase());
            prop_assert_eq!(&pascal[1..], &camel[1..]);
        }
    }
}
