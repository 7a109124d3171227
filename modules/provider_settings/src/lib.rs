//! Provider Settings Module
//!
//! Typed configuration registry for the authorization server: endpoint paths, the
//! issuer identifier and feature flags, seeded with defaults and open to extension
//! settings under arbitrary names.

// Public exports
pub mod contract;
pub use contract::{
    error::SettingsError, IntoSetting, ProviderSettingsApi, SettingValue, WellKnownSetting,
    NULL_VALUE_MESSAGE,
};

pub mod domain;
pub use domain::{ProviderSettings, SettingChange};

pub mod api;
pub use api::native::SharedProviderSettings;

pub mod config;
pub use config::Config;

pub mod module;
pub use module::ProviderSettingsModule;
