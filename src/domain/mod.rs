//! Target domain validation and normalization.
//!
//! The scan target is supplied once by the user. It is normalized here
//! (trimmed, lowercased, trailing root dot removed) and rejected early if it
//! cannot be a DNS name, so the lookup engine only ever sees valid names.

use std::net::IpAddr;

use trust_dns_resolver::proto::rr::Name;

use crate::error_handling::InitializationError;

/// Maximum length of a single DNS label.
const MAX_LABEL_LEN: usize = 63;

/// Normalizes a user-supplied domain name.
///
/// # Errors
///
/// Returns `InitializationError::InvalidTargetError` if the input is empty, is
/// an IP address, contains characters outside `[A-Za-z0-9._-]`, has an empty
/// or over-long label, or is otherwise not a valid DNS name.
pub fn normalize_target(input: &str) -> Result<String, InitializationError> {
    let invalid = |reason: &str| InitializationError::InvalidTargetError {
        target: input.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = input.trim().to_ascii_lowercase();
    let name = trimmed.strip_suffix('.').unwrap_or(&trimmed);

    if name.is_empty() {
        return Err(invalid("domain name is empty"));
    }
    if name.parse::<IpAddr>().is_ok() {
        return Err(invalid("expected a domain name, not an IP address"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')))
    {
        return Err(invalid(&format!("unexpected character '{c}'")));
    }
    if name.split('.').any(str::is_empty) {
        return Err(invalid("empty label"));
    }
    if name.split('.').any(|label| label.len() > MAX_LABEL_LEN) {
        return Err(invalid("label longer than 63 characters"));
    }

    Name::from_ascii(name).map_err(|e| invalid(&e.to_string()))?;
    Ok(name.to_string())
}

#[cfg(test)]
mod tests;
