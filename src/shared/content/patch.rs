// src/shared/content/patch.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior (recommended usage):
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        nickname: PatchField<String>,
    }

    #[test]
    fn omitted_field_is_unset() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert!(payload.nickname.is_unset());
    }

    #[test]
    fn null_field_is_null() {
        let payload: Payload = serde_json::from_str(r#"{"nickname": null}"#).unwrap();
        assert!(payload.nickname.is_null());
    }

    #[test]
    fn value_field_is_value() {
        let payload: Payload = serde_json::from_str(r#"{"nickname": "kai"}"#).unwrap();
        assert_eq!(payload.nickname.as_value().map(String::as_str), Some("kai"));
    }
}
