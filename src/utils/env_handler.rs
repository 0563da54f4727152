use std::env;

/// Value of an environment variable, or `default` when unset or not unicode.
pub fn get_env_var_or(s: &str, default: &str) -> String {
    env::var(s).unwrap_or_else(|_| default.to_owned())
}

/// Value of an environment variable when set and non empty.
pub fn get_optional_env_var(s: &str) -> Option<String> {
    env::var(s).ok().filter(|v| !v.is_empty())
}
