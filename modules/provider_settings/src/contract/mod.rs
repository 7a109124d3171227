//! Contract layer - public API shared with the rest of the server
//!
//! This layer contains the setting value model, the well-known setting catalogue,
//! errors and the read-only client trait.

pub mod client;
mod de;
pub mod error;
pub mod model;

pub use client::ProviderSettingsApi;
pub use error::{SettingsError, NULL_VALUE_MESSAGE};
pub use model::{IntoSetting, SettingValue, WellKnownSetting};
