// Domain module tests.

use super::*;

#[test]
fn test_normalize_target_basic() {
    assert_eq!(normalize_target("example.com").unwrap(), "example.com");
}

#[test]
fn test_normalize_target_trims_and_lowercases() {
    assert_eq!(normalize_target("  Example.COM \n").unwrap(), "example.com");
}

#[test]
fn test_normalize_target_strips_root_dot() {
    assert_eq!(normalize_target("example.com.").unwrap(), "example.com");
}

#[test]
fn test_normalize_target_allows_underscore_and_hyphen() {
    assert_eq!(
        normalize_target("_dmarc.my-site.example").unwrap(),
        "_dmarc.my-site.example"
    );
}

#[test]
fn test_normalize_target_rejects_empty() {
    assert!(normalize_target("").is_err());
    assert!(normalize_target("   ").is_err());
    assert!(normalize_target(".").is_err());
}

#[test]
fn test_normalize_target_rejects_ip_addresses() {
    let err = normalize_target("192.0.2.1").unwrap_err();
    assert!(err.to_string().contains("not an IP address"));
    assert!(normalize_target("2001:db8::1").is_err());
}

#[test]
fn test_normalize_target_rejects_urls() {
    let err = normalize_target("https://example.com/").unwrap_err();
    assert!(err.to_string().contains("unexpected character ':'"));
}

#[test]
fn test_normalize_target_rejects_empty_label() {
    assert!(normalize_target("example..com").is_err());
    assert!(normalize_target(".example.com").is_err());
}

#[test]
fn test_normalize_target_rejects_long_label() {
    let label = "a".repeat(64);
    assert!(normalize_target(&format!("{label}.com")).is_err());
    let label = "a".repeat(63);
    assert!(normalize_target(&format!("{label}.com")).is_ok());
}
