use super::config::IdentifierField;
use crate::user::User;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// The request to log into the server.
#[derive(Debug, Clone)]
pub struct Req {
    /// Email address or IC number. The backend accepts either in the same
    /// field.
    pub identifier: String,

    /// Plaintext password to use for login.
    pub password: String,

    /// Which key `identifier` is sent under.
    pub field: IdentifierField,
}

impl Req {
    /// Construct a login request using the default identifier key.
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
            field: IdentifierField::default(),
        }
    }
}

impl Serialize for Req {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.field.key(), &self.identifier)?;
        map.serialize_entry("password", &self.password)?;
        map.end()
    }
}

/// Result of logging in successfully.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resp {
    /// Token to send as `Authorization: Bearer ...` on later requests.
    pub access_token: String,

    /// Always `bearer` in practice.
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Who we logged in as.
    pub user: User,
}

/// The backend has only ever issued bearer tokens.
fn default_token_type() -> String {
    "bearer".to_string()
}

/// Where the login endpoint lives, relative to the base URL.
pub const PATH: &str = "auth/login";

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn sends_username_by_default() {
        let req = Req::new("user@example.com", "correct-pw");

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"username": "user@example.com", "password": "correct-pw"})
        );
    }

    #[test]
    fn can_send_email_instead() {
        let req = Req {
            field: IdentifierField::Email,
            ..Req::new("000000-00-0000", "pw")
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"email": "000000-00-0000", "password": "pw"})
        );
    }

    proptest! {
        #[test]
        fn identifier_is_sent_verbatim(identifier in ".*", password in ".*", email in any::<bool>()) {
            let field = if email { IdentifierField::Email } else { IdentifierField::Username };
            let req = Req { identifier: identifier.clone(), password: password.clone(), field };

            let value = serde_json::to_value(&req).unwrap();
            let object = value.as_object().unwrap();

            prop_assert_eq!(object.len(), 2);
            prop_assert_eq!(object.get(field.key()).and_then(|v| v.as_str()), Some(identifier.as_str()));
            prop_assert_eq!(object.get("password").and_then(|v| v.as_str()), Some(password.as_str()));
        }
    }

    #[test]
    fn token_type_defaults_to_bearer() {
        let resp: Resp = serde_json::from_value(json!({
            "access_token": "abc",
            "user": {
                "id": "u-1",
                "email": "user@example.com",
                "full_name": "Test User",
                "id_number": "000000-00-0000",
                "role": "participant",
            }
        }))
        .unwrap();

        assert_eq!(resp.token_type, "bearer");
    }
}
