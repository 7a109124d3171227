//! Shared handle - wraps a registry for concurrent in-process readers

use crate::contract::{ProviderSettingsApi, SettingValue, SettingsError};
use crate::domain::ProviderSettings;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Cloneable handle over one registry
///
/// Readers take the read lock per call. Writers go through [`update`](Self::update),
/// which applies a batch to a copy and publishes it only when every write succeeds.
#[derive(Debug, Clone, Default)]
pub struct SharedProviderSettings {
    inner: Arc<RwLock<ProviderSettings>>,
}

impl SharedProviderSettings {
    /// Create a handle owning `settings`
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Copy of the current registry
    pub fn snapshot(&self) -> ProviderSettings {
        self.inner.read().clone()
    }

    /// Apply `mutate` atomically
    pub fn update<F>(&self, mutate: F) -> Result<(), SettingsError>
    where
        F: FnOnce(&mut ProviderSettings) -> Result<(), SettingsError>,
    {
        let mut guard = self.inner.write();
        let mut staged = guard.clone();
        mutate(&mut staged)?;
        *guard = staged;
        Ok(())
    }

    fn read_str(&self, read: impl FnOnce(&ProviderSettings) -> Option<&str>) -> Option<String> {
        let guard = self.inner.read();
        read(&*guard).map(str::to_owned)
    }
}

impl From<ProviderSettings> for SharedProviderSettings {
    fn from(settings: ProviderSettings) -> Self {
        Self::new(settings)
    }
}

impl ProviderSettingsApi for SharedProviderSettings {
    fn issuer(&self) -> Option<String> {
        self.read_str(ProviderSettings::issuer)
    }

    fn authorization_endpoint(&self) -> Option<String> {
        self.read_str(ProviderSettings::authorization_endpoint)
    }

    fn token_endpoint(&self) -> Option<String> {
        self.read_str(ProviderSettings::token_endpoint)
    }

    fn jwk_set_endpoint(&self) -> Option<String> {
        self.read_str(ProviderSettings::jwk_set_endpoint)
    }

    fn token_revocation_endpoint(&self) -> Option<String> {
        self.read_str(ProviderSettings::token_revocation_endpoint)
    }

    fn token_introspection_endpoint(&self) -> Option<String> {
        self.read_str(ProviderSettings::token_introspection_endpoint)
    }

    fn oidc_client_registration_endpoint(&self) -> Option<String> {
        self.read_str(ProviderSettings::oidc_client_registration_endpoint)
    }

    fn is_oidc_client_registration_endpoint_enabled(&self) -> bool {
        self.inner.read().is_oidc_client_registration_endpoint_enabled()
    }

    fn setting_value(&self, name: &str) -> Option<SettingValue> {
        self.inner.read().setting_value(name).cloned()
    }

    fn all_settings(&self) -> HashMap<String, SettingValue> {
        self.inner.read().settings().clone()
    }
}
