use serde::*;

/// Return value of a client callback. The host framework applies `Update`
/// values to the bound output property and skips the update entirely for
/// `NoUpdate`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum CallbackValue {
    NoUpdate,
    Update(String),
}

impl CallbackValue {
    pub fn is_no_update(&self) -> bool { matches!(self, CallbackValue::NoUpdate) }
}

impl From<String> for CallbackValue {
    fn from(s: String) -> Self { CallbackValue::Update(s) }
}

impl From<&str> for CallbackValue {
    fn from(s: &str) -> Self { CallbackValue::Update(s.to_string()) }
}

#[cfg(test)]
mod tests {
    use crate::value::CallbackValue;

    #[test]
    fn test_no_update() {
        assert!(CallbackValue::NoUpdate.is_no_update());
        assert!(!CallbackValue::Update("".to_string()).is_no_update());
    }

    #[test]
    fn test_from() {
        assert_eq!(CallbackValue::from("x"), CallbackValue::Update("x".to_string()));
    }

    #[test]
    fn test_wire_shape() {
        assert_eq!(
            serde_json::to_string(&CallbackValue::Update("".to_string())).unwrap(),
            r#"{"Update":""}"#
        );
        assert_eq!(
            serde_json::to_string(&CallbackValue::NoUpdate).unwrap(),
            r#""NoUpdate""#
        );
    }
}
