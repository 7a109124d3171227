//! Provider settings registry
//!
//! A string-keyed map of [`SettingValue`]s seeded with the well-known defaults, with
//! typed accessors layered on top. Every write passes the non-null check before the
//! map is touched.

use super::changes::{self, SettingChange};
use super::validation;
use crate::contract::{IntoSetting, SettingValue, SettingsError, WellKnownSetting};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// Named configuration values for the authorization server
///
/// Mutation needs `&mut self`; share it behind
/// [`SharedProviderSettings`](crate::api::native::SharedProviderSettings) when several
/// components need it at once. Serializing to JSON writes `null` for infinite or
/// NaN floats; the stored values and typed reads are unaffected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProviderSettings {
    settings: HashMap<String, SettingValue>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderSettings {
    /// Create a registry holding the well-known defaults
    pub fn new() -> Self {
        let settings = WellKnownSetting::ALL
            .iter()
            .filter_map(|setting| {
                setting
                    .default_value()
                    .map(|value| (setting.name().to_string(), value))
            })
            .collect();
        Self { settings }
    }

    // ===== Generic operations =====

    /// Store `value` under `name`, replacing any previous value
    ///
    /// A null value is rejected with [`SettingsError::InvalidArgument`] and the
    /// registry is left untouched.
    pub fn set_setting(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Result<&mut Self, SettingsError> {
        let name = name.into();
        let value = value.into();
        if let Err(e) = validation::require_non_null(&value) {
            tracing::warn!(setting = %name, "Rejected null provider setting");
            return Err(e);
        }
        tracing::debug!(setting = %name, kind = value.kind(), "Provider setting updated");
        self.settings.insert(name, value);
        Ok(self)
    }

    /// Read `name` as `T`
    ///
    /// Returns `None` when the setting is absent or holds a value that does not
    /// convert to `T`. Use [`try_setting`](Self::try_setting) to tell the two apart.
    pub fn setting<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        match self.try_setting(name) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Provider setting type mismatch");
                None
            }
        }
    }

    /// Read `name` as `T`, failing with [`SettingsError::TypeMismatch`] when the
    /// stored value does not convert
    pub fn try_setting<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, SettingsError> {
        self.settings
            .get(name)
            .map(|value| {
                value.to_typed::<T>().map_err(|_| SettingsError::TypeMismatch {
                    name: name.to_string(),
                    expected: std::any::type_name::<T>(),
                })
            })
            .transpose()
    }

    /// Raw value stored under `name`
    pub fn setting_value(&self, name: &str) -> Option<&SettingValue> {
        self.settings.get(name)
    }

    /// Every stored (name, value) pair, defaults included
    pub fn settings(&self) -> &HashMap<String, SettingValue> {
        &self.settings
    }

    /// Apply a batch mutation directly to the underlying map
    ///
    /// The batch runs against a staged copy. If it leaves any null value behind the
    /// whole batch is discarded.
    pub fn merge_settings<F>(&mut self, mutate: F) -> Result<&mut Self, SettingsError>
    where
        F: FnOnce(&mut HashMap<String, SettingValue>),
    {
        let mut staged = self.settings.clone();
        mutate(&mut staged);
        if let Err((name, e)) = validation::require_all_non_null(&staged) {
            tracing::warn!(
                setting = %name,
                "Rejected provider settings batch holding a null value"
            );
            return Err(e);
        }
        tracing::debug!(count = staged.len(), "Provider settings batch applied");
        self.settings = staged;
        Ok(self)
    }

    // ===== Introspection =====

    /// Changes needed to turn `self` into `other`, ordered by name
    pub fn diff(&self, other: &ProviderSettings) -> Vec<SettingChange> {
        changes::diff(&self.settings, &other.settings)
    }

    /// Names whose value differs from the construction default, sorted
    pub fn overridden(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .settings
            .iter()
            .filter(|(name, value)| {
                WellKnownSetting::from_name(name)
                    .and_then(|setting| setting.default_value())
                    .as_ref()
                    != Some(*value)
            })
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    // ===== Well-known settings =====

    pub fn issuer(&self) -> Option<&str> {
        self.str_setting(WellKnownSetting::Issuer)
    }

    /// Set the URL the provider uses as its issuer identifier
    pub fn set_issuer(
        &mut self,
        issuer: impl IntoSetting<String>,
    ) -> Result<&mut Self, SettingsError> {
        self.set_well_known(WellKnownSetting::Issuer, issuer.into_setting())
    }

    pub fn authorization_endpoint(&self) -> Option<&str> {
        self.str_setting(WellKnownSetting::AuthorizationEndpoint)
    }

    pub fn set_authorization_endpoint(
        &mut self,
        endpoint: impl IntoSetting<String>,
    ) -> Result<&mut Self, SettingsError> {
        self.set_well_known(WellKnownSetting::AuthorizationEndpoint, endpoint.into_setting())
    }

    pub fn token_endpoint(&self) -> Option<&str> {
        self.str_setting(WellKnownSetting::TokenEndpoint)
    }

    pub fn set_token_endpoint(
        &mut self,
        endpoint: impl IntoSetting<String>,
    ) -> Result<&mut Self, SettingsError> {
        self.set_well_known(WellKnownSetting::TokenEndpoint, endpoint.into_setting())
    }

    pub fn jwk_set_endpoint(&self) -> Option<&str> {
        self.str_setting(WellKnownSetting::JwkSetEndpoint)
    }

    pub fn set_jwk_set_endpoint(
        &mut self,
        endpoint: impl IntoSetting<String>,
    ) -> Result<&mut Self, SettingsError> {
        self.set_well_known(WellKnownSetting::JwkSetEndpoint, endpoint.into_setting())
    }

    pub fn token_revocation_endpoint(&self) -> Option<&str> {
        self.str_setting(WellKnownSetting::TokenRevocationEndpoint)
    }

    pub fn set_token_revocation_endpoint(
        &mut self,
        endpoint: impl IntoSetting<String>,
    ) -> Result<&mut Self, SettingsError> {
        self.set_well_known(WellKnownSetting::TokenRevocationEndpoint, endpoint.into_setting())
    }

    pub fn token_introspection_endpoint(&self) -> Option<&str> {
        self.str_setting(WellKnownSetting::TokenIntrospectionEndpoint)
    }

    pub fn set_token_introspection_endpoint(
        &mut self,
        endpoint: impl IntoSetting<String>,
    ) -> Result<&mut Self, SettingsError> {
        self.set_well_known(WellKnownSetting::TokenIntrospectionEndpoint, endpoint.into_setting())
    }

    pub fn oidc_client_registration_endpoint(&self) -> Option<&str> {
        self.str_setting(WellKnownSetting::OidcClientRegistrationEndpoint)
    }

    pub fn set_oidc_client_registration_endpoint(
        &mut self,
        endpoint: impl IntoSetting<String>,
    ) -> Result<&mut Self, SettingsError> {
        self.set_well_known(
            WellKnownSetting::OidcClientRegistrationEndpoint,
            endpoint.into_setting(),
        )
    }

    /// Whether OpenID Connect dynamic client registration is served
    ///
    /// Reads as `false` if the flag was removed through a batch mutation.
    pub fn is_oidc_client_registration_endpoint_enabled(&self) -> bool {
        self.settings
            .get(WellKnownSetting::OidcClientRegistrationEnabled.name())
            .and_then(SettingValue::as_bool)
            .unwrap_or(false)
    }

    pub fn set_oidc_client_registration_endpoint_enabled(
        &mut self,
        enabled: impl IntoSetting<bool>,
    ) -> Result<&mut Self, SettingsError> {
        self.set_well_known(WellKnownSetting::OidcClientRegistrationEnabled, enabled.into_setting())
    }

    fn str_setting(&self, setting: WellKnownSetting) -> Option<&str> {
        self.settings.get(setting.name()).and_then(SettingValue::as_str)
    }

    fn set_well_known(
        &mut self,
        setting: WellKnownSetting,
        value: SettingValue,
    ) -> Result<&mut Self, SettingsError> {
        self.set_setting(setting.name(), value)
    }
}
