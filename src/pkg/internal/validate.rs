use axum::http::StatusCode;
use standard_error::{Interpolate, StandardError, Status};
use url::Url;

use crate::prelude::Result;

pub fn validation_err(msg: &str) -> StandardError {
    StandardError::new("ERR-VAL-001")
        .interpolate_err(msg.to_string())
        .code(StatusCode::BAD_REQUEST)
}

/// Prefixes `https://` when no scheme is present, then requires an absolute
/// URL whose host carries a dot-separated TLD. Returns the normalized form.
pub fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(validation_err("url cannot be empty"));
    }
    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };
    let parsed =
        Url::parse(&candidate).map_err(|_| validation_err(&format!("invalid url: {}", raw)))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| validation_err(&format!("invalid url: {}", raw)))?;
    if !has_tld(host) {
        return Err(validation_err(&format!(
            "url must point at a public domain: {}",
            raw
        )));
    }
    Ok(candidate)
}

fn has_tld(host: &str) -> bool {
    match host.rsplit_once('.') {
        Some((name, tld)) => {
            !name.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

pub fn normalize_links(links: &[String]) -> Result<Vec<String>> {
    links.iter().map(|link| normalize_url(link)).collect()
}

/// Optional leading '+', digits only.
pub fn check_phone(phone: &str) -> Result<()> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(validation_err(
            "phone number may only contain digits and a leading +",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_is_prefixed() {
        assert_eq!(
            normalize_url("github.com/foo").unwrap(),
            "https://github.com/foo"
        );
    }

    #[test]
    fn test_existing_scheme_kept() {
        assert_eq!(
            normalize_url("http://example.org/x").unwrap(),
            "http://example.org/x"
        );
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(normalize_url("not a url").is_err());
    }

    #[test]
    fn test_host_without_tld_rejected() {
        assert!(normalize_url("http://localhost").is_err());
    }

    #[test]
    fn test_links_normalized_in_order() {
        let links = vec!["github.com/foo".to_string(), "https://x.dev".to_string()];
        assert_eq!(
            normalize_links(&links).unwrap(),
            vec!["https://github.com/foo", "https://x.dev"]
        );
    }

    #[test]
    fn test_phone() {
        assert!(check_phone("+4915112345").is_ok());
        assert!(check_phone("015112345").is_ok());
        assert!(check_phone("+49 151").is_err());
        assert!(check_phone("call-me").is_err());
        assert!(check_phone("+").is_err());
    }
}
