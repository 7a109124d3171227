//! Module declaration and lifecycle

use crate::api::native::SharedProviderSettings;
use crate::config::Config;
use crate::contract::ProviderSettingsApi;
use anyhow::Result;
use figment::Figment;
use parking_lot::RwLock;
use std::sync::Arc;

/// Provider settings module
///
/// Loads [`Config`] during `init` and hands the resulting registry to the rest of the
/// server through [`ProviderSettingsApi`].
pub struct ProviderSettingsModule {
    config: RwLock<Config>,
    settings: RwLock<Option<SharedProviderSettings>>,
}

impl Default for ProviderSettingsModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            settings: RwLock::new(None),
        }
    }
}

impl ProviderSettingsModule {
    /// Read typed configuration and build the registry
    pub fn init(&self, figment: &Figment) -> Result<()> {
        let cfg = Config::from_figment(figment)?;
        let registry = cfg.build()?;

        if registry.issuer().is_none() {
            tracing::warn!("Provider issuer is not configured");
        }
        let overridden = registry.overridden().len();

        *self.config.write() = cfg;
        *self.settings.write() = Some(SharedProviderSettings::new(registry));

        tracing::info!(overridden, "Provider settings initialized");
        Ok(())
    }

    /// Configuration applied by the last successful `init`
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Handle over the registry
    pub fn settings(&self) -> Result<SharedProviderSettings> {
        self.settings
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Provider settings not initialized"))
    }

    /// Read-only client for consumers
    pub fn client(&self) -> Result<Arc<dyn ProviderSettingsApi>> {
        let client: Arc<dyn ProviderSettingsApi> = Arc::new(self.settings()?);
        Ok(client)
    }
}
