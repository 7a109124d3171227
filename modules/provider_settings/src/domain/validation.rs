//! Presence validation for setting values
//!
//! Presence is the only rule: no range, format or cross-field checks.

use crate::contract::{SettingValue, SettingsError};
use std::collections::HashMap;

/// Reject a null value
pub fn require_non_null(value: &SettingValue) -> Result<(), SettingsError> {
    if value.is_null() {
        return Err(SettingsError::null_value());
    }
    Ok(())
}

/// Reject a mapping holding any null value, reporting the first offending name
pub fn require_all_non_null(
    settings: &HashMap<String, SettingValue>,
) -> Result<(), (String, SettingsError)> {
    match settings.iter().find(|(_, value)| value.is_null()) {
        Some((name, _)) => Err((name.clone(), SettingsError::null_value())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::NULL_VALUE_MESSAGE;

    #[test]
    fn test_require_non_null() {
        assert!(require_non_null(&SettingValue::from("/oauth2/token")).is_ok());
        assert!(require_non_null(&SettingValue::from(false)).is_ok());
        assert!(require_non_null(&SettingValue::from("")).is_ok());

        let err = require_non_null(&SettingValue::Null).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), NULL_VALUE_MESSAGE);
    }

    #[test]
    fn test_require_all_non_null() {
        let mut settings = HashMap::new();
        settings.insert("a".to_string(), SettingValue::from(1_i64));
        assert!(require_all_non_null(&settings).is_ok());

        settings.insert("b".to_string(), SettingValue::Null);
        let (name, err) = require_all_non_null(&settings).unwrap_err();
        assert_eq!(name, "b");
        assert_eq!(err, SettingsError::null_value());
    }
}
