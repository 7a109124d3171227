//! Configuration for the provider settings module
//!
//! Values are layered with figment: an optional YAML file, then environment variables
//! prefixed with `PROVIDER_SETTINGS_` (nested keys separated by `__`).

use crate::contract::{SettingValue, SettingsError};
use crate::domain::ProviderSettings;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Environment variable prefix for provider settings overrides
pub const ENV_PREFIX: &str = "PROVIDER_SETTINGS_";

/// Provider settings configuration
///
/// Every field is optional; unset fields keep the registry defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Issuer identifier URL
    pub issuer: Option<String>,

    pub authorization_endpoint: Option<String>,

    pub token_endpoint: Option<String>,

    pub jwk_set_endpoint: Option<String>,

    pub token_revocation_endpoint: Option<String>,

    pub token_introspection_endpoint: Option<String>,

    pub oidc_client_registration_endpoint: Option<String>,

    /// Serve the OpenID Connect dynamic client registration endpoint
    pub oidc_client_registration_enabled: Option<bool>,

    /// Extension settings stored under their own names
    pub custom: BTreeMap<String, SettingValue>,
}

impl Config {
    /// Figment layering the YAML file at `path` (if any) and the environment
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract the configuration from an already-assembled figment
    pub fn from_figment(figment: &Figment) -> Result<Self, SettingsError> {
        figment
            .extract()
            .map_err(|e| SettingsError::Config(e.to_string()))
    }

    /// Load from the YAML file at `path` (if any) and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::from_figment(&Self::figment(path))
    }

    /// Write every configured value into `settings`
    ///
    /// Values go through the same setters as any other caller, so a null custom value
    /// is rejected. On error `settings` is left as it was.
    pub fn apply_to(&self, settings: &mut ProviderSettings) -> Result<(), SettingsError> {
        let mut staged = settings.clone();

        if let Some(issuer) = &self.issuer {
            staged.set_issuer(issuer)?;
        }
        if let Some(endpoint) = &self.authorization_endpoint {
            staged.set_authorization_endpoint(endpoint)?;
        }
        if let Some(endpoint) = &self.token_endpoint {
            staged.set_token_endpoint(endpoint)?;
        }
        if let Some(endpoint) = &self.jwk_set_endpoint {
            staged.set_jwk_set_endpoint(endpoint)?;
        }
        if let Some(endpoint) = &self.token_revocation_endpoint {
            staged.set_token_revocation_endpoint(endpoint)?;
        }
        if let Some(endpoint) = &self.token_introspection_endpoint {
            staged.set_token_introspection_endpoint(endpoint)?;
        }
        if let Some(endpoint) = &self.oidc_client_registration_endpoint {
            staged.set_oidc_client_registration_endpoint(endpoint)?;
        }
        if let Some(enabled) = self.oidc_client_registration_enabled {
            staged.set_oidc_client_registration_endpoint_enabled(enabled)?;
        }
        for (name, value) in &self.custom {
            staged.set_setting(name.as_str(), value.clone())?;
        }

        *settings = staged;
        Ok(())
    }

    /// Build a registry from the defaults plus this configuration
    pub fn build(&self) -> Result<ProviderSettings, SettingsError> {
        let mut settings = ProviderSettings::new();
        self.apply_to(&mut settings)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_default_registry() {
        let settings = Config::default().build().unwrap();
        assert_eq!(settings, ProviderSettings::new());
    }

    #[test]
    fn test_yaml_string_layer() {
        let figment = Figment::from(Yaml::string(
            r#"
issuer: "https://example.com:9000"
token_endpoint: "/oauth2/v1/token"
oidc_client_registration_enabled: true
custom:
  max-clients: 25
"#,
        ));
        let config = Config::from_figment(&figment).unwrap();
        assert_eq!(config.issuer.as_deref(), Some("https://example.com:9000"));
        assert_eq!(config.oidc_client_registration_enabled, Some(true));
        assert_eq!(config.custom["max-clients"], SettingValue::Integer(25));

        let settings = config.build().unwrap();
        assert_eq!(settings.token_endpoint(), Some("/oauth2/v1/token"));
        assert_eq!(settings.authorization_endpoint(), Some("/oauth2/authorize"));
        assert!(settings.is_oidc_client_registration_endpoint_enabled());
        assert_eq!(settings.setting::<u32>("max-clients"), Some(25));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let figment = Figment::from(Yaml::string("token_url: /oauth2/token\n"));
        let err = Config::from_figment(&figment).unwrap_err();
        assert!(matches!(err, SettingsError::Config(_)));
    }

    #[test]
    fn test_null_custom_value_leaves_registry_untouched() {
        let mut config = Config {
            issuer: Some("https://example.com".to_string()),
            ..Config::default()
        };
        config.custom.insert("broken".to_string(), SettingValue::Null);

        let mut settings = ProviderSettings::new();
        let err = config.apply_to(&mut settings).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(settings, ProviderSettings::new());
    }
}
