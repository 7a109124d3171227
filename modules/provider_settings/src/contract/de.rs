//! Direct deserialization out of a stored [`SettingValue`]
//!
//! Typed reads walk the value itself instead of converting through
//! `serde_json::Value`, so floats JSON cannot express (infinities, NaN) read back
//! unchanged.

use super::model::SettingValue;
use serde::de::value::{Error, MapDeserializer, SeqDeserializer, StrDeserializer};
use serde::de::{IntoDeserializer, Visitor};
use serde::{forward_to_deserialize_any, Deserializer};

impl<'de> Deserializer<'de> for &'de SettingValue {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self {
            SettingValue::Null => visitor.visit_unit(),
            SettingValue::Bool(b) => visitor.visit_bool(*b),
            SettingValue::Integer(i) => visitor.visit_i64(*i),
            SettingValue::Float(f) => visitor.visit_f64(*f),
            SettingValue::String(s) => visitor.visit_borrowed_str(s),
            SettingValue::List(items) => {
                let mut seq = SeqDeserializer::new(items.iter());
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
            SettingValue::Map(entries) => {
                let pairs = entries.iter().map(|(name, value)| (name.as_str(), value));
                let mut map = MapDeserializer::new(pairs);
                let value = visitor.visit_map(&mut map)?;
                map.end()?;
                Ok(value)
            }
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self {
            SettingValue::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    // Unit variants only, spelled as strings
    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self {
            SettingValue::String(s) => {
                StrDeserializer::<Error>::new(s).deserialize_enum(name, variants, visitor)
            }
            _ => self.deserialize_any(visitor),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for &'de SettingValue {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum GrantType {
        AuthorizationCode,
        RefreshToken,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct ClientPolicy {
        grants: Vec<GrantType>,
        max_clients: u32,
        backoff: f64,
        note: Option<String>,
    }

    #[test]
    fn test_non_finite_floats_survive() {
        assert_eq!(
            SettingValue::Float(f64::INFINITY).to_typed::<f64>().unwrap(),
            f64::INFINITY
        );
        assert_eq!(
            SettingValue::Float(f64::NEG_INFINITY).to_typed::<f64>().unwrap(),
            f64::NEG_INFINITY
        );
        assert!(SettingValue::Float(f64::NAN).to_typed::<f64>().unwrap().is_nan());
    }

    #[test]
    fn test_map_into_struct() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "grants".to_string(),
            SettingValue::from(vec!["authorization_code", "refresh_token"]),
        );
        entries.insert("max_clients".to_string(), SettingValue::from(25_i64));
        entries.insert("backoff".to_string(), SettingValue::Float(f64::INFINITY));
        let value = SettingValue::Map(entries);

        let policy: ClientPolicy = value.to_typed().unwrap();
        assert_eq!(
            policy,
            ClientPolicy {
                grants: vec![GrantType::AuthorizationCode, GrantType::RefreshToken],
                max_clients: 25,
                backoff: f64::INFINITY,
                note: None,
            }
        );
    }

    #[test]
    fn test_integer_reads_as_float_but_not_string() {
        let value = SettingValue::from(3_i64);
        assert_eq!(value.to_typed::<f64>().unwrap(), 3.0);
        assert!(value.to_typed::<String>().is_err());
        assert!(SettingValue::from(-1_i64).to_typed::<u32>().is_err());
    }
}
