//! Read-only client trait for components consuming provider settings
//!
//! HTTP routing, token endpoints and client registration read their paths and flags
//! through this trait. NO mutation - configuration happens once at startup.

use super::model::SettingValue;
use std::collections::HashMap;

/// Provider settings API for in-process consumers
pub trait ProviderSettingsApi: Send + Sync {
    // ===== Well-known settings =====

    /// External identity of the provider, absent until configured
    fn issuer(&self) -> Option<String>;

    fn authorization_endpoint(&self) -> Option<String>;

    fn token_endpoint(&self) -> Option<String>;

    fn jwk_set_endpoint(&self) -> Option<String>;

    fn token_revocation_endpoint(&self) -> Option<String>;

    fn token_introspection_endpoint(&self) -> Option<String>;

    fn oidc_client_registration_endpoint(&self) -> Option<String>;

    /// Whether the OpenID Connect dynamic client registration endpoint is served
    fn is_oidc_client_registration_endpoint_enabled(&self) -> bool;

    // ===== Generic access =====

    /// Raw value stored under `name`
    fn setting_value(&self, name: &str) -> Option<SettingValue>;

    /// Copy of every stored (name, value) pair
    fn all_settings(&self) -> HashMap<String, SettingValue>;
}
