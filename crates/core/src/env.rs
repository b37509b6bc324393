//! Environment variable parsing with warn-level logging for bad values.

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable returns `default` silently (the expected case). A set
/// but unparseable value logs a warning before falling back, instead of
/// being swallowed by an `.ok().and_then(..)` chain.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
                default
            },
        },
        Err(_) => default,
    }
}
