use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

/// Accepts either an http(s) URL or a filesystem directory.
pub fn validate_source_location(field_name: &str, location: &str) -> Result<()> {
    validate_non_empty_string(field_name, location)?;
    if is_http_location(location) {
        validate_url(field_name, location)
    } else {
        validate_path(field_name, location)
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn is_http_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}
