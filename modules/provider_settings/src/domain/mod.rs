//! Domain layer - the settings registry and its rules

pub mod changes;
pub mod registry;
pub mod validation;

pub use changes::SettingChange;
pub use registry::ProviderSettings;
