//! Shared string utilities for template helpers.

use inflector::Inflector;

const WORD_SEPARATORS: [char; 3] = ['_', '-', ' '];

/// Convert a string to PascalCase (e.g., "user_account" -> "UserAccount")
pub fn to_pascal_case(s: &str) -> String {
    s.split(WORD_SEPARATORS)
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "user_account" -> "userAccount")
pub fn to_camel_case(s: &str) -> String {
    untitle(&to_pascal_case(s))
}

/// Convert a string to snake_case (e.g., "UserAccount" -> "user_account")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace(['-', ' '], "_")
}

/// Convert a string to kebab-case (e.g., "UserAccount" -> "user-account")
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

/// Lowercase the first character, leaving the rest untouched.
pub fn untitle(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// English plural of a (table) name, e.g. "category" -> "categories".
pub fn pluralize(s: &str) -> String {
    s.to_plural()
}

/// English singular of a (table) name, e.g. "categories" -> "category".
pub fn singularize(s: &str) -> String {
    s.to_singular()
}
