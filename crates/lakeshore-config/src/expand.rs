//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Expand an optional string field in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LS_TEST_VAR_SIMPLE", "secret_abc");
        }
        let result = expand_env("${LS_TEST_VAR_SIMPLE}", "notion.api_key").unwrap();
        assert_eq!(result, "secret_abc");
        unsafe {
            std::env::remove_var("LS_TEST_VAR_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LS_UNSET_VAR_TEST");
        }
        let result = expand_env("${LS_UNSET_VAR_TEST:-fallback}", "collections.cats").unwrap();
        assert_eq!(result, "fallback");
    }

    #[test]
    fn test_expand_with_empty_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LS_UNSET_EMPTY_TEST");
        }
        let result = expand_env("${LS_UNSET_EMPTY_TEST:-}", "collections.faq").unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LS_MISSING_VAR_TEST");
        }
        let err = expand_env("${LS_MISSING_VAR_TEST}", "notion.api_key").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("LS_MISSING_VAR_TEST"));
        assert!(err.to_string().contains("notion.api_key"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("https://api.notion.com/v1", "notion.base_url").unwrap();
        assert_eq!(result, "https://api.notion.com/v1");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("$VAR", "test.field").unwrap();
        assert_eq!(result, "$VAR");
    }

    #[test]
    fn test_expand_opt_none_stays_none() {
        let mut value = None;
        expand_opt(&mut value, "collections.blog").unwrap();
        assert!(value.is_none());
    }
}
