//! Contract models for provider settings
//!
//! Setting values are stored type-erased as [`SettingValue`] and read back with a
//! caller-chosen type. Well-known settings are catalogued in [`WellKnownSetting`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_AUTHORIZATION_ENDPOINT: &str = "/oauth2/authorize";
pub const DEFAULT_TOKEN_ENDPOINT: &str = "/oauth2/token";
pub const DEFAULT_JWK_SET_ENDPOINT: &str = "/oauth2/jwks";
pub const DEFAULT_TOKEN_REVOCATION_ENDPOINT: &str = "/oauth2/revoke";
pub const DEFAULT_TOKEN_INTROSPECTION_ENDPOINT: &str = "/oauth2/introspect";
pub const DEFAULT_OIDC_CLIENT_REGISTRATION_ENDPOINT: &str = "/connect/register";

/// A type-erased setting value
///
/// `Null` exists so that absent inputs (`None`, JSON `null`) have a representation
/// the registry can reject; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<SettingValue>),
    Map(BTreeMap<String, SettingValue>),
}

impl SettingValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Short name of the variant, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Convert into any deserializable type
    ///
    /// Maps convert into structs, lists into `Vec`s, scalars into their primitives.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, serde::de::value::Error> {
        T::deserialize(self)
    }

    /// Build a value from any serializable type
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).and_then(serde_json::from_value)
    }
}

/// Compact JSON-like rendering; non-finite floats print as `inf`, `-inf` and `NaN`
impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{:?}", v),
            Self::String(s) => write!(f, "{:?}", s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (name, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{:?}:{}", name, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for SettingValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for SettingValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl<T: Into<SettingValue>> From<Vec<T>> for SettingValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SettingValue>> From<BTreeMap<String, T>> for SettingValue {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<SettingValue>> From<Option<T>> for SettingValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Values accepted by a typed setter whose declared type is `T`
///
/// `None` maps to [`SettingValue::Null`] and is rejected by the registry.
pub trait IntoSetting<T> {
    fn into_setting(self) -> SettingValue;
}

impl IntoSetting<String> for &str {
    fn into_setting(self) -> SettingValue {
        SettingValue::from(self)
    }
}

impl IntoSetting<String> for String {
    fn into_setting(self) -> SettingValue {
        SettingValue::from(self)
    }
}

impl IntoSetting<String> for &String {
    fn into_setting(self) -> SettingValue {
        SettingValue::from(self)
    }
}

impl IntoSetting<bool> for bool {
    fn into_setting(self) -> SettingValue {
        SettingValue::from(self)
    }
}

impl<T, V: IntoSetting<T>> IntoSetting<T> for Option<V> {
    fn into_setting(self) -> SettingValue {
        self.map_or(SettingValue::Null, IntoSetting::into_setting)
    }
}

/// Settings with a dedicated typed accessor on the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownSetting {
    Issuer,
    AuthorizationEndpoint,
    TokenEndpoint,
    JwkSetEndpoint,
    TokenRevocationEndpoint,
    TokenIntrospectionEndpoint,
    OidcClientRegistrationEndpoint,
    OidcClientRegistrationEnabled,
}

impl WellKnownSetting {
    pub const ALL: [WellKnownSetting; 8] = [
        Self::Issuer,
        Self::AuthorizationEndpoint,
        Self::TokenEndpoint,
        Self::JwkSetEndpoint,
        Self::TokenRevocationEndpoint,
        Self::TokenIntrospectionEndpoint,
        Self::OidcClientRegistrationEndpoint,
        Self::OidcClientRegistrationEnabled,
    ];

    /// Stable key the setting is stored under
    pub fn name(&self) -> &'static str {
        match self {
            Self::Issuer => "issuer",
            Self::AuthorizationEndpoint => "authorization-endpoint",
            Self::TokenEndpoint => "token-endpoint",
            Self::JwkSetEndpoint => "jwk-set-endpoint",
            Self::TokenRevocationEndpoint => "token-revocation-endpoint",
            Self::TokenIntrospectionEndpoint => "token-introspection-endpoint",
            Self::OidcClientRegistrationEndpoint => "oidc-client-registration-endpoint",
            Self::OidcClientRegistrationEnabled => "oidc-client-registration-enabled",
        }
    }

    /// Value applied at construction; the issuer has none
    pub fn default_value(&self) -> Option<SettingValue> {
        let value: SettingValue = match self {
            Self::Issuer => return None,
            Self::AuthorizationEndpoint => DEFAULT_AUTHORIZATION_ENDPOINT.into(),
            Self::TokenEndpoint => DEFAULT_TOKEN_ENDPOINT.into(),
            Self::JwkSetEndpoint => DEFAULT_JWK_SET_ENDPOINT.into(),
            Self::TokenRevocationEndpoint => DEFAULT_TOKEN_REVOCATION_ENDPOINT.into(),
            Self::TokenIntrospectionEndpoint => DEFAULT_TOKEN_INTROSPECTION_ENDPOINT.into(),
            Self::OidcClientRegistrationEndpoint => {
                DEFAULT_OIDC_CLIENT_REGISTRATION_ENDPOINT.into()
            }
            Self::OidcClientRegistrationEnabled => false.into(),
        };
        Some(value)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|setting| setting.name() == name)
    }
}

impl fmt::Display for WellKnownSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
