//! Request and response models for the board API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Response envelope shared by every backend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// "success", "fail" or "error"
    pub status: Option<String>,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Message for the user, empty when the server sent none
    pub fn message_or_default(&self) -> String {
        self.message.clone().unwrap_or_default()
    }
}

impl ApiResponse<Value> {
    /// Human readable error payload of a failed response
    pub fn error_payload(&self) -> Option<String> {
        let from_data = match &self.data {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(Value::Array(items)) if !items.is_empty() => Some(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Some(Value::Object(map)) if !map.is_empty() => Some(Value::Object(map.clone()).to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        };

        from_data.or_else(|| {
            self.message
                .as_ref()
                .filter(|m| !m.trim().is_empty())
                .cloned()
        })
    }
}

/// `data` of a successful signup or login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    pub jwt: String,
    /// Any other fields the server included
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Signup request body
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_id: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
}

/// Login request body
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("user_id", &self.user_id)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("user_id", &self.user_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

const CREDENTIAL_MIN_LEN: usize = 4;
const CREDENTIAL_MAX_LEN: usize = 11;
const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 4;

fn is_credential_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn has_triple_repeat(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn check_password(label: &str, value: &str, errors: &mut Vec<String>) {
    let len = value.chars().count();
    if value.is_empty() {
        errors.push(format!("{} is required", label));
    } else if !(CREDENTIAL_MIN_LEN..=CREDENTIAL_MAX_LEN).contains(&len) {
        errors.push(format!(
            "{} must be {} to {} characters",
            label, CREDENTIAL_MIN_LEN, CREDENTIAL_MAX_LEN
        ));
    } else if !value.chars().all(is_credential_char) {
        errors.push(format!(
            "{} may only contain letters, digits, '-' and '_'",
            label
        ));
    } else if has_triple_repeat(value) {
        errors.push(format!(
            "{} cannot contain the same character three times in a row",
            label
        ));
    }
}

impl SignupRequest {
    /// Check the request against the rules the server enforces.
    ///
    /// Returns every violated rule, in field order.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let id_len = self.user_id.chars().count();
        if self.user_id.is_empty() {
            errors.push("ID is required".to_string());
        } else if !(CREDENTIAL_MIN_LEN..=CREDENTIAL_MAX_LEN).contains(&id_len) {
            errors.push(format!(
                "ID must be {} to {} characters",
                CREDENTIAL_MIN_LEN, CREDENTIAL_MAX_LEN
            ));
        } else if !self.user_id.chars().all(is_credential_char) {
            errors.push("ID may only contain letters, digits, '-' and '_'".to_string());
        }

        check_password("Password", &self.password, &mut errors);
        check_password("Password confirmation", &self.confirm_password, &mut errors);

        let name_len = self.name.chars().count();
        if self.name.is_empty() {
            errors.push("Name is required".to_string());
        } else if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
            errors.push(format!(
                "Name must be {} to {} characters",
                NAME_MIN_LEN, NAME_MAX_LEN
            ));
        }

        if !self.password.is_empty() && self.user_id == self.password {
            errors.push("Password cannot be the same as the ID".to_string());
        }
        if self.password != self.confirm_password {
            errors.push("Password and confirmation do not match".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn valid_signup() -> SignupRequest {
        SignupRequest {
            user_id: "alice_01".to_string(),
            password: "pa55-word".to_string(),
            confirm_password: "pa55-word".to_string(),
            name: "앨리스".to_string(),
        }
    }

    #[test]
    fn test_signup_serializes_camel_case() {
        let value = serde_json::to_value(valid_signup()).unwrap();
        assert_eq!(
            value,
            json!({
                "userId": "alice_01",
                "password": "pa55-word",
                "confirmPassword": "pa55-word",
                "name": "앨리스",
            })
        );
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let rendered = format!("{:?}", valid_signup());
        assert!(!rendered.contains("pa55-word"));
        assert!(rendered.contains("alice_01"));

        let login = LoginRequest {
            user_id: "alice_01".to_string(),
            password: "pa55-word".to_string(),
        };
        assert!(!format!("{:?}", login).contains("pa55-word"));
    }

    #[test]
    fn test_auth_data_keeps_extra_fields() {
        let data: AuthData =
            serde_json::from_value(json!({"jwt": "T", "userId": "alice_01", "name": "앨리스"}))
                .unwrap();
        assert_eq!(data.jwt, "T");
        assert_eq!(data.extra.get("userId"), Some(&json!("alice_01")));
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"jwt": "T", "userId": "alice_01", "name": "앨리스"})
        );
    }

    #[test]
    fn test_auth_data_requires_jwt() {
        let result = serde_json::from_value::<AuthData>(json!({"userId": "alice_01"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_envelope_missing_fields() {
        let envelope: ApiResponse<Value> = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(envelope.status.is_none());
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message_or_default(), "ok");
    }

    #[test]
    fn test_valid_signup_passes() {
        assert_eq!(valid_signup().validate(), Ok(()));
    }

    #[test]
    fn test_signup_validation_collects_errors() {
        let request = SignupRequest {
            user_id: "ab".to_string(),
            password: "aaab".to_string(),
            confirm_password: "abcd".to_string(),
            name: "A".to_string(),
        };

        assert_eq!(
            request.validate(),
            Err(vec![
                "ID must be 4 to 11 characters".to_string(),
                "Password cannot contain the same character three times in a row".to_string(),
                "Name must be 2 to 4 characters".to_string(),
                "Password and confirmation do not match".to_string(),
            ])
        );
    }

    #[test]
    fn test_signup_rejects_password_equal_to_id() {
        let request = SignupRequest {
            user_id: "alice".to_string(),
            password: "alice".to_string(),
            confirm_password: "alice".to_string(),
            name: "앨리스".to_string(),
        };

        assert_eq!(
            request.validate(),
            Err(vec!["Password cannot be the same as the ID".to_string()])
        );
    }

    #[test]
    fn test_signup_rejects_invalid_characters() {
        let request = SignupRequest {
            user_id: "al ice".to_string(),
            ..valid_signup()
        };
        assert_eq!(
            request.validate(),
            Err(vec!["ID may only contain letters, digits, '-' and '_'".to_string()])
        );
    }
}
