/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Non-empty, trimmed value of `name` as reported by `lookup`.
pub fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

/// Reads the process environment; the default `lookup` for loaders.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Add `http://` when no scheme is given and drop trailing slashes, so
/// `localhost:8000/` becomes `http://localhost:8000`. Other schemes are
/// kept for validation to reject.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let normalized = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    if normalized != raw {
        log::warn!(
            "Normalized base URL from '{}' to '{}'",
            raw,
            normalized
        );
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_forms() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn non_empty_skips_blank_values() {
        let lookup = |name: &str| match name {
            "BLANK" => Some("   ".to_string()),
            "SET" => Some(" value ".to_string()),
            _ => None,
        };
        assert_eq!(non_empty(&lookup, "BLANK"), None);
        assert_eq!(non_empty(&lookup, "SET").as_deref(), Some("value"));
        assert_eq!(non_empty(&lookup, "MISSING"), None);
    }

    #[test]
    fn base_url_normalization() {
        assert_eq!(
            normalize_base_url("localhost:8000/"),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url(" https://backend.example// "),
            "https://backend.example"
        );
        assert_eq!(
            normalize_base_url("http://127.0.0.1:8000"),
            "http://127.0.0.1:8000"
        );
        assert_eq!(
            normalize_base_url("ftp://files.example"),
            "ftp://files.example"
        );
    }
}
