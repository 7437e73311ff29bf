//! Identifier case conversion for serialization tag values.

use regex::Regex;
use std::sync::LazyLock;

/// Boundary before a capitalized word (`HTTPServer` -> `HTTP_Server`).
#[allow(clippy::unwrap_used)] // Safe: literal pattern
static WORD_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new("(.)([A-Z][a-z]+)").unwrap());

/// Boundary between a lowercase letter or digit and an uppercase letter.
#[allow(clippy::unwrap_used)] // Safe: literal pattern
static CASE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").unwrap());

/// Convert an identifier to snake_case.
///
/// Acronym runs stay together: `UserID` becomes `user_id` and
/// `HTTPServer` becomes `http_server`. Input that is already snake_case
/// (or empty) is returned unchanged.
pub fn to_snake_case(s: &str) -> String {
    let snake = WORD_BOUNDARY.replace_all(s, "${1}_${2}");
    let snake = CASE_BOUNDARY.replace_all(&snake, "${1}_${2}");
    snake.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("simpleField"), "simple_field");
        assert_eq!(to_snake_case("UserID"), "user_id");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("Name"), "name");
        assert_eq!(to_snake_case("createdAt"), "created_at");
    }

    #[test]
    fn test_to_snake_case_acronyms() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("parseJSONBody"), "parse_json_body");
        assert_eq!(to_snake_case("ID"), "id");
    }

    #[test]
    fn test_to_snake_case_digits() {
        assert_eq!(to_snake_case("address2Line"), "address2_line");
        assert_eq!(to_snake_case("v2API"), "v2_api");
    }

    #[test]
    fn test_to_snake_case_empty() {
        assert_eq!(to_snake_case(""), "");
    }
}
