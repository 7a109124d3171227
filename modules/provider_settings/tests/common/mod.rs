//! Common test utilities

#![allow(dead_code)]

use provider_settings::{ProviderSettings, SettingValue};
use std::collections::HashMap;

pub const ISSUER: &str = "https://example.com:9000";

/// Install a subscriber once so `RUST_LOG=debug` shows registry writes
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    init_tracing();
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Print the registry contents sorted by name
pub fn print_settings(context: &str, settings: &ProviderSettings) {
    let mut entries: Vec<_> = settings.settings().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    println!("\n========== ProviderSettings: {} ==========", context);
    for (name, value) in entries {
        println!("  {} = {}", name, value);
    }
}

/// Expected construction defaults keyed by name
pub fn expected_defaults() -> HashMap<String, SettingValue> {
    [
        ("authorization-endpoint", SettingValue::from("/oauth2/authorize")),
        ("token-endpoint", SettingValue::from("/oauth2/token")),
        ("jwk-set-endpoint", SettingValue::from("/oauth2/jwks")),
        ("token-revocation-endpoint", SettingValue::from("/oauth2/revoke")),
        ("token-introspection-endpoint", SettingValue::from("/oauth2/introspect")),
        ("oidc-client-registration-endpoint", SettingValue::from("/connect/register")),
        ("oidc-client-registration-enabled", SettingValue::from(false)),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}
