//! Identifier naming helpers for tiersmith code generation.
//!
//! Raw schema identifiers (usually snake_case table and column names) are
//! converted here into the case style used in generated source. This crate
//! has no dependencies and can be used by any other tiersmith crate.

/// Convert snake_case (or kebab-case) to PascalCase.
///
/// Input that carries no separators keeps its tail untouched, so an
/// already-Pascal identifier passes through unchanged. Empty input stays
/// empty.
///
/// # Examples
/// ```
/// use tiersmith_naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user_name"), "UserName");
/// assert_eq!(to_pascal_case("order-item"), "OrderItem");
/// assert_eq!(to_pascal_case("UserName"), "UserName");
/// assert_eq!(to_pascal_case(""), "");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize = true;
    for c in s.chars() {
        let is_separator = c == '_' || c == '-';
        if is_separator {
            capitalize = true;
            continue;
        }
        let ch = if capitalize {
            c.to_ascii_uppercase()
        } else {
            c
        };
        capitalize = false;
        result.push(ch);
    }
    result
}

/// Sanitize a raw name into a legal generated-code identifier.
///
/// Non-alphanumeric characters become `_`; a leading digit is prefixed
/// with `_`. An empty input falls back to `_col`.
///
/// # Examples
/// ```
/// use tiersmith_naming::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("user name"), "user_name");
/// assert_eq!(sanitize_identifier("2fa_secret"), "_2fa_secret");
/// assert_eq!(sanitize_identifier(""), "_col");
/// ```
pub fn sanitize_identifier(name: &str) -> String {
    let mut result = String::new();

    for (idx, ch) in name.chars().enumerate() {
        if (ch.is_ascii_alphanumeric() && (idx > 0 || ch.is_ascii_alphabetic())) || ch == '_' {
            result.push(ch);
        } else if idx == 0 && ch.is_ascii_digit() {
            result.push('_');
            result.push(ch);
        } else {
            result.push('_');
        }
    }

    if result.is_empty() {
        "_col".into()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case_snake() {
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("user_name"), "UserName");
        assert_eq!(to_pascal_case("created_at_utc"), "CreatedAtUtc");
    }

    #[test]
    fn test_to_pascal_case_kebab() {
        assert_eq!(to_pascal_case("order-item"), "OrderItem");
    }

    #[test]
    fn test_to_pascal_case_already_pascal() {
        assert_eq!(to_pascal_case("UserName"), "UserName");
        assert_eq!(to_pascal_case("Id"), "Id");
    }

    #[test]
    fn test_to_pascal_case_empty() {
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_collapses_repeated_separators() {
        assert_eq!(to_pascal_case("user__name"), "UserName");
        assert_eq!(to_pascal_case("_user"), "User");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("normal_name"), "normal_name");
        assert_eq!(sanitize_identifier("123name"), "_123name");
        assert_eq!(sanitize_identifier("name-with-dash"), "name_with_dash");
        assert_eq!(sanitize_identifier("name.with.dot"), "name_with_dot");
        assert_eq!(sanitize_identifier("name with space"), "name_with_space");
        assert_eq!(sanitize_identifier(""), "_col");
        assert_eq!(sanitize_identifier("a"), "a");
    }
}
