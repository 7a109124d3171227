//! In-process access to provider settings

pub mod client;

pub use client::SharedProviderSettings;
